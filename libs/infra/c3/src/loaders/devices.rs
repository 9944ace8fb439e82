// [libs/infra/c3/src/loaders/devices.rs]
/*!
 * =================================================================
 * APARATO: DEVICE INSTANCES LOADER (V3.2 - CORPUS MASTER)
 * CLASIFICACIÓN: INFRASTRUCTURE ADAPTER (ESTRATO L3)
 * RESPONSABILIDAD: ADJUNCIÓN DE DISPOSITIVOS A REPORTES CERTIFICADOS
 *
 * # Disciplina de referencias:
 * La máquina (canonical_id) y el certificado (name) deben existir de la
 * fase anterior; su ausencia degrada el ítem a MissingReference sin
 * escribir fila alguna.
 * =================================================================
 */

use tracing::debug;

use hwapi_core_cpuid::UNKNOWN_CODENAME;
use hwapi_domain_models::enums::DeviceCategory;
use hwapi_infra_db::repositories::hardware::DeviceSeed;
use hwapi_infra_db::repositories::{
    CertificateRepository, HardwareRepository, VendorRepository,
};

use crate::errors::ImporterError;
use crate::loaders::CorpusImporter;
use crate::response_models::PublicDeviceInstance;

impl CorpusImporter {
    /**
     * Materializa un dispositivo y su adjunción al reporte del
     * certificado referenciado.
     *
     * # Errors:
     * - `MissingReference`: máquina o certificado desconocidos; el ítem
     *   se omite sin escribir.
     */
    pub async fn ingest_device_instance_item(
        &self,
        device_item: &PublicDeviceInstance,
    ) -> Result<(), ImporterError> {
        let corpus_session = self.store_client().open_session().await?;
        let vendor_repository = VendorRepository::new(&corpus_session);
        let hardware_repository = HardwareRepository::new(&corpus_session);
        let certificate_repository = CertificateRepository::new(&corpus_session);

        // 1. RESOLUCIÓN DE REFERENCIAS OBLIGATORIAS (sin creación)
        let machine = hardware_repository
            .find_machine_by_canonical_id(&device_item.machine_canonical_id)
            .await?
            .ok_or_else(|| {
                ImporterError::MissingReference(format!(
                    "machine canonical_id={}",
                    device_item.machine_canonical_id
                ))
            })?;

        let certificate = certificate_repository
            .find_certificate_by_name_and_machine(&device_item.certificate_name, machine.id)
            .await?
            .ok_or_else(|| {
                ImporterError::MissingReference(format!(
                    "certificate name={} machine={}",
                    device_item.certificate_name, device_item.machine_canonical_id
                ))
            })?;

        // 2. DISPOSITIVO POR TUPLA DE IDENTIDAD COMPLETA
        let device_payload = &device_item.device;
        let (device_vendor, _) = vendor_repository
            .get_or_create_vendor(&device_payload.vendor)
            .await?;

        let device_seed = DeviceSeed {
            name: device_payload.name.clone().unwrap_or_default(),
            version: device_payload.version.clone().unwrap_or_default(),
            vendor_id: device_vendor.id,
            subsystem: device_payload.subsystem.clone().unwrap_or_default(),
            bus: device_payload.bus,
            category: device_payload.category.unwrap_or(DeviceCategory::Other),
            identifier: device_payload.identifier.to_ascii_lowercase(),
            subproduct_name: device_payload.subproduct_name.clone().unwrap_or_default(),
            device_type: device_payload.device_type.clone().unwrap_or_default(),
            codename: device_payload.codename.clone().unwrap_or_default(),
        };

        let (device, device_created) =
            hardware_repository.get_or_create_device(&device_seed).await?;

        debug!(
            "🔌 [IMPORTER]: Device [{}] ({}) created={}",
            device.name, device.identifier, device_created
        );

        // 3. ADJUNCIÓN AL REPORTE DEL CERTIFICADO
        let (report, _) = certificate_repository
            .get_or_create_report_for_certificate(certificate.id)
            .await?;
        hardware_repository
            .attach_device_to_report(report.id, device.id)
            .await?;

        // 4. SELLADO DEL CODENAME DE PROCESADOR
        if device_seed.category == DeviceCategory::Processor {
            if let Some(cpu_codename) = device_item.effective_cpu_codename() {
                if !cpu_codename.is_empty() && cpu_codename != UNKNOWN_CODENAME {
                    hardware_repository
                        .update_processor_codename(device.id, cpu_codename)
                        .await?;
                }
            }
        }

        Ok(())
    }
}
// FIN DEL ARCHIVO [libs/infra/c3/src/loaders/devices.rs]
