// [apps/server/src/services/response_builder.rs]
/*!
 * =================================================================
 * APARATO: RESPONSE BUILDER (V3.1 - CORPUS MASTER)
 * CLASIFICACIÓN: APPLICATION SERVICE (ESTRATO L1-APP)
 * RESPONSABILIDAD: CONFORMADO DE LAS CARGAS NO-NOTSEEN
 *
 * # Contrato de formato:
 * La fecha de release del BIOS viaja como %m/%d/%Y. Las releases
 * disponibles portan siempre distributor "Ubuntu" y una lista de
 * módulos cargados vacía. El chasis es nulo en este núcleo.
 * =================================================================
 */

use hwapi_domain_models::entities::{Bios, Device, Kernel, Release};
use hwapi_domain_models::responses::{
    AvailableRelease, BiosSummary, BoardSummary, CertifiedSystemPayload, KernelPackageSummary,
};

/// Distribuidor fijo de las releases certificadas.
pub const UBUNTU_DISTRIBUTOR: &str = "Ubuntu";

/// Formato público de la fecha de release del BIOS.
pub const BIOS_RELEASE_DATE_FORMAT: &str = "%m/%d/%Y";

/// Resumen de placa: fabricante desde el Vendor del dispositivo
/// emparejado, nombre y versión desde la fila del dispositivo.
pub fn build_board_summary(board_device: &Device, board_vendor_name: &str) -> BoardSummary {
    BoardSummary {
        manufacturer: board_vendor_name.to_string(),
        product_name: board_device.name.clone(),
        version: board_device.version.clone(),
    }
}

/// Resumen de BIOS con la fecha formateada al contrato público.
pub fn build_bios_summary(bios_row: &Bios, bios_vendor_name: &str) -> BiosSummary {
    BiosSummary {
        vendor: bios_vendor_name.to_string(),
        version: bios_row.version.clone(),
        revision: bios_row.revision.clone(),
        firmware_revision: bios_row.firmware_revision.clone(),
        release_date: bios_row
            .release_date
            .map(|date| date.format(BIOS_RELEASE_DATE_FORMAT).to_string()),
    }
}

/// Proyecta los pares (Release, Kernel) del corpus a la lista pública.
pub fn build_available_releases(
    release_kernel_pairs: &[(Release, Option<Kernel>)],
) -> Vec<AvailableRelease> {
    release_kernel_pairs
        .iter()
        .map(|(release, kernel)| AvailableRelease {
            distributor: UBUNTU_DISTRIBUTOR.to_string(),
            version: release.release.clone(),
            codename: release.codename.clone(),
            kernel: kernel.as_ref().map(|kernel_row| KernelPackageSummary {
                name: kernel_row.name.clone(),
                version: kernel_row.version.clone(),
                signature: kernel_row.signature.clone(),
                loaded_modules: Vec::new(),
            }),
        })
        .collect()
}

/// Carga común de los veredictos certificados.
pub fn build_certified_system_payload(
    architecture: String,
    board_summary: BoardSummary,
    bios_summary: Option<BiosSummary>,
    release_kernel_pairs: &[(Release, Option<Kernel>)],
) -> CertifiedSystemPayload {
    CertifiedSystemPayload {
        architecture,
        board: board_summary,
        bios: bios_summary,
        chassis: None,
        available_releases: build_available_releases(release_kernel_pairs),
    }
}
// FIN DEL ARCHIVO [apps/server/src/services/response_builder.rs]
