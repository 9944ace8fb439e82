// [apps/server/src/services/decision_engine.rs]
/*!
 * =================================================================
 * APARATO: CERTIFICATION DECISION ENGINE (V3.3 - PIPELINE MASTER)
 * CLASIFICACIÓN: APPLICATION SERVICE (ESTRATO L1-APP)
 * RESPONSABILIDAD: CLASIFICACIÓN EN SEIS PUERTAS DEL ESTADO DE
 *                  CERTIFICACIÓN DE UNA MÁQUINA CONSULTANTE
 *
 * VISION HIPER-HOLÍSTICA:
 * 1. ORDEN ESTRICTO: vendor -> board -> bios -> máquina relacionada ->
 *    compatibilidad de CPU -> release. El primer fallo corta a
 *    'Not Seen', salvo la puerta de CPU, que degrada a
 *    'Related Certified System Exists' (el hardware SÍ es pariente).
 * 2. FUNCIÓN PURA DE (petición, corpus): el motor no acumula estado
 *    entre peticiones y opera sobre una única sesión estrecha.
 * 3. FALLOS DE I/O: jamás se convierten en clasificación; se propagan
 *    al transporte, que los mapea a 500.
 * =================================================================
 */

use libsql::Connection;
use tracing::{info, instrument, warn};

use hwapi_core_cpuid::{resolve_codename_or_unknown, SIGNIFICANT_LEAF_BYTES, UNKNOWN_CODENAME};
use hwapi_domain_models::entities::Device;
use hwapi_domain_models::requests::{CertificationStatusRequest, ProcessorProbe};
use hwapi_domain_models::responses::{
    CertificationStatusResponse, RelatedCertifiedSystemPayload,
};
use hwapi_infra_db::repositories::{
    CpuIdRepository, HardwareRepository, SoftwareRepository, VendorRepository,
};
use hwapi_infra_db::DbError;

use crate::services::response_builder;

/// Motor de decisión sobre una sesión estrecha del corpus.
pub struct CertificationDecisionEngine<'session> {
    corpus_session: &'session Connection,
}

impl<'session> CertificationDecisionEngine<'session> {
    pub fn new(corpus_session: &'session Connection) -> Self {
        Self { corpus_session }
    }

    /**
     * Clasifica la máquina consultante en exactamente uno de los cuatro
     * veredictos del protocolo.
     */
    #[instrument(skip(self, status_request))]
    pub async fn classify(
        &self,
        status_request: &CertificationStatusRequest,
    ) -> Result<CertificationStatusResponse, DbError> {
        let vendor_repository = VendorRepository::new(self.corpus_session);
        let hardware_repository = HardwareRepository::new(self.corpus_session);
        let software_repository = SoftwareRepository::new(self.corpus_session);

        // PUERTA 1: FABRICANTE (emparejamiento normalizado)
        if vendor_repository
            .get_vendor_by_name(&status_request.vendor)
            .await?
            .is_none()
        {
            return Ok(reject_as_not_seen(status_request, "vendor"));
        }

        // PUERTA 2: PLACA BASE
        let Some(board) = hardware_repository
            .get_board(
                &status_request.board.manufacturer,
                &status_request.board.product_name,
            )
            .await?
        else {
            return Ok(reject_as_not_seen(status_request, "board"));
        };

        // PUERTA 3: BIOS (blanda). Sin BIOS en la petición, el recorrido
        // posterior exige reportes certificados sin BIOS registrado.
        let matching_bios_rows = match &status_request.bios {
            Some(bios_probe) => {
                let bios_rows = hardware_repository
                    .get_bios_list(&bios_probe.vendor, &bios_probe.version)
                    .await?;
                if bios_rows.is_empty() {
                    return Ok(reject_as_not_seen(status_request, "bios"));
                }
                bios_rows
            }
            None => Vec::new(),
        };
        let allowed_bios_ids: Vec<i64> =
            matching_bios_rows.iter().map(|bios_row| bios_row.id).collect();

        // PUERTA 4: MÁQUINA RELACIONADA
        let Some(machine) = hardware_repository
            .get_machine_with_same_hardware_params(
                &status_request.architecture,
                board.id,
                &allowed_bios_ids,
            )
            .await?
        else {
            return Ok(reject_as_not_seen(status_request, "related machine"));
        };

        // PUERTA 5: COMPATIBILIDAD DE PROCESADOR
        let certified_cpu = hardware_repository.get_cpu_for_machine(machine.id).await?;
        let cpu_is_compatible = match &certified_cpu {
            None => false,
            Some(certified_cpu) => {
                self.is_cpu_compatible(certified_cpu, &status_request.processor)
                    .await?
            }
        };

        // CARGA COMÚN DE RESPUESTA (las tres salidas restantes la portan)
        let architecture = hardware_repository
            .get_machine_architecture(machine.id)
            .await?
            .unwrap_or_else(|| status_request.architecture.clone());

        let board_vendor = vendor_repository.find_vendor_by_id(board.vendor_id).await?;
        let board_summary = response_builder::build_board_summary(
            &board,
            board_vendor
                .as_ref()
                .map(|vendor| vendor.name.as_str())
                .unwrap_or(&status_request.board.manufacturer),
        );

        let bios_summary = match matching_bios_rows.first() {
            Some(bios_row) => {
                let bios_vendor =
                    vendor_repository.find_vendor_by_id(bios_row.vendor_id).await?;
                Some(response_builder::build_bios_summary(
                    bios_row,
                    bios_vendor
                        .as_ref()
                        .map(|vendor| vendor.name.as_str())
                        .unwrap_or_default(),
                ))
            }
            None => None,
        };

        let release_kernel_pairs = software_repository
            .get_releases_and_kernels_for_machine(machine.id)
            .await?;

        let certified_payload = response_builder::build_certified_system_payload(
            architecture,
            board_summary,
            bios_summary,
            &release_kernel_pairs,
        );

        if !cpu_is_compatible {
            info!(
                machine = %machine.canonical_id,
                "🧬 [VERDICT]: CPU incompatible, related certified system exists"
            );
            return Ok(CertificationStatusResponse::RelatedCertifiedSystemExists(
                RelatedCertifiedSystemPayload::from_certified_payload(certified_payload),
            ));
        }

        // PUERTA 6: RELEASE
        let requested_release = software_repository
            .get_release_object(&status_request.os.version, &status_request.os.codename)
            .await?;

        let certified_for_requested_release = requested_release
            .map(|requested| {
                release_kernel_pairs
                    .iter()
                    .any(|(release, _)| release.id == requested.id)
            })
            .unwrap_or(false);

        if certified_for_requested_release {
            info!(machine = %machine.canonical_id, "✅ [VERDICT]: Certified");
            Ok(CertificationStatusResponse::Certified(certified_payload))
        } else {
            info!(machine = %machine.canonical_id, "📀 [VERDICT]: Certified image exists");
            Ok(CertificationStatusResponse::CertifiedImageExists(certified_payload))
        }
    }

    /**
     * Compatibilidad de procesador:
     * - sin hoja CPUID (o con menos de 3 bytes): igualdad exacta de la
     *   cadena de versión;
     * - con hoja CPUID: decodificación little-endian y emparejamiento
     *   del codename resuelto (o 'Unknown') contra el codename del
     *   procesador certificado.
     */
    async fn is_cpu_compatible(
        &self,
        certified_cpu: &Device,
        processor_probe: &ProcessorProbe,
    ) -> Result<bool, DbError> {
        match processor_probe.identifier.as_deref() {
            Some(leaf_bytes) if leaf_bytes.len() >= SIGNIFICANT_LEAF_BYTES => {
                let cpuid_repository = CpuIdRepository::new(self.corpus_session);
                let dictionary_entries = cpuid_repository.get_dictionary_entries().await?;
                let target_codename =
                    resolve_codename_or_unknown(leaf_bytes, &dictionary_entries)
                        .unwrap_or_else(|| UNKNOWN_CODENAME.to_string());
                Ok(certified_cpu.codename == target_codename)
            }
            _ => Ok(certified_cpu.version == processor_probe.version),
        }
    }
}

/**
 * Veredicto 'Not Seen' con el rastro único de triaje: una línea warn
 * listando los campos contra los que se emparejó.
 */
fn reject_as_not_seen(
    status_request: &CertificationStatusRequest,
    missed_gate: &str,
) -> CertificationStatusResponse {
    warn!(
        vendor = %status_request.vendor,
        model = %status_request.model,
        board_manufacturer = %status_request.board.manufacturer,
        board_product = %status_request.board.product_name,
        bios_vendor = ?status_request.bios.as_ref().map(|bios| bios.vendor.as_str()),
        bios_version = ?status_request.bios.as_ref().map(|bios| bios.version.as_str()),
        "🕵️ [NOT_SEEN]: '{}' gate missed",
        missed_gate
    );
    CertificationStatusResponse::NotSeen
}
// FIN DEL ARCHIVO [apps/server/src/services/decision_engine.rs]
