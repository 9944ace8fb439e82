// [libs/infra/c3/src/loaders/certificates.rs]
/*!
 * =================================================================
 * APARATO: PUBLIC CERTIFICATES LOADER (V3.2 - CORPUS MASTER)
 * CLASIFICACIÓN: INFRASTRUCTURE ADAPTER (ESTRATO L3)
 * RESPONSABILIDAD: MATERIALIZACIÓN DEL GRAFO POR CERTIFICADO PÚBLICO
 *
 * # Secuencia por ítem:
 * Vendor -> Platform -> Configuration -> Machine -> [Kernel] -> [Bios]
 * -> Release (sin token LTS) -> Certificate -> Report. Cada
 * get-or-create es su propia unidad de commit.
 * =================================================================
 */

use tracing::debug;

use hwapi_infra_db::repositories::{
    CertificateRepository, HardwareRepository, SoftwareRepository, VendorRepository,
};

use crate::errors::ImporterError;
use crate::loaders::{strip_lts_token, CorpusImporter};
use crate::response_models::PublicCertificate;

impl CorpusImporter {
    /**
     * Materializa el grafo de entidades de un certificado público.
     *
     * # Errors:
     * Los fallos de restricción se clasifican aguas arriba como
     * aislables al ítem; los fallos de enlace al Ledger abortan el lote.
     */
    pub async fn ingest_certificate_item(
        &self,
        certificate_item: &PublicCertificate,
    ) -> Result<(), ImporterError> {
        let corpus_session = self.store_client().open_session().await?;
        let vendor_repository = VendorRepository::new(&corpus_session);
        let software_repository = SoftwareRepository::new(&corpus_session);
        let hardware_repository = HardwareRepository::new(&corpus_session);
        let certificate_repository = CertificateRepository::new(&corpus_session);

        // 1. JERARQUÍA NOMINAL: Vendor -> Platform -> Configuration -> Machine
        let (vendor, _) = vendor_repository
            .get_or_create_vendor(&certificate_item.vendor)
            .await?;
        let (platform, _) = software_repository
            .get_or_create_platform(&certificate_item.platform, vendor.id)
            .await?;
        let (configuration, _) = software_repository
            .get_or_create_configuration(&certificate_item.configuration, platform.id)
            .await?;
        let (machine, _) = hardware_repository
            .get_or_create_machine(&certificate_item.canonical_id, configuration.id)
            .await?;

        debug!(
            "🧩 [IMPORTER]: Vendor [{}] / Configuration [{}] / Machine [{}]",
            vendor.name, configuration.name, machine.canonical_id
        );

        // 2. KERNEL OPCIONAL (solo versión)
        let mut kernel_id = None;
        if let Some(kernel_version) = certificate_item
            .kernel_version
            .as_deref()
            .filter(|version| !version.is_empty())
        {
            let (kernel, _) = software_repository
                .get_or_create_kernel(kernel_version)
                .await?;
            kernel_id = Some(kernel.id);
        }

        // 3. BIOS OPCIONAL: fabricante normalizado, versión con fallback
        //    al nombre upstream cuando llega vacía.
        let mut bios_id = None;
        if let Some(bios_payload) = &certificate_item.bios {
            let (bios_vendor, _) = vendor_repository
                .find_or_create_bios_vendor(&bios_payload.vendor)
                .await?;

            let effective_bios_version = if bios_payload.version.is_empty() {
                bios_payload.name.as_str()
            } else {
                bios_payload.version.as_str()
            };

            let (resolved_bios_id, _) = hardware_repository
                .get_or_create_bios(
                    bios_vendor.id,
                    effective_bios_version,
                    None,
                    certificate_item.firmware_revision.as_deref(),
                    bios_payload.release_date,
                )
                .await?;
            bios_id = Some(resolved_bios_id);
        }

        // 4. RELEASE: el token 'LTS' final se retira antes de persistir.
        let normalized_release_string = strip_lts_token(&certificate_item.release.release);
        let (release_id, _) = software_repository
            .get_or_create_release(
                &certificate_item.release.codename,
                &normalized_release_string,
                certificate_item.release.release_date,
                certificate_item.release.supported_until,
                certificate_item.release.i_version,
            )
            .await?;

        // 5. CERTIFICADO Y REPORTE
        let (certificate_id, _) = certificate_repository
            .get_or_create_certificate(
                &certificate_item.name,
                machine.id,
                release_id,
                certificate_item.created_at,
                certificate_item.completed,
            )
            .await?;

        certificate_repository
            .get_or_create_report(
                certificate_item.architecture.as_deref().unwrap_or(""),
                kernel_id,
                bios_id,
                certificate_id,
            )
            .await?;

        Ok(())
    }
}
// FIN DEL ARCHIVO [libs/infra/c3/src/loaders/certificates.rs]
