// [libs/domain/models/src/responses.rs]
/*!
 * =================================================================
 * APARATO: CERTIFICATION VERDICT UNION (V3.0 - CORPUS MASTER)
 * CLASIFICACIÓN: DOMAIN MODELS (ESTRATO L2)
 * RESPONSABILIDAD: UNIÓN DISCRIMINADA DE LOS CUATRO VEREDICTOS
 *
 * VISION HIPER-HOLÍSTICA:
 * El discriminante es el campo 'status' con los literales exactos del
 * protocolo público ("Not Seen", "Certified", "Certified Image Exists",
 * "Related Certified System Exists"). La serialización emite el tag
 * embebido en el objeto, nunca un envoltorio externo.
 * =================================================================
 */

use serde::{Deserialize, Serialize};

/// Resumen de la placa certificada emparejada.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSummary {
    pub manufacturer: String,
    pub product_name: String,
    pub version: String,
}

/// Resumen del BIOS certificado. 'release_date' viaja formateada
/// como %m/%d/%Y cuando existe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiosSummary {
    pub vendor: String,
    pub version: String,
    pub revision: Option<String>,
    pub firmware_revision: Option<String>,
    pub release_date: Option<String>,
}

/// Paquete de kernel asociado a una release disponible. La lista de
/// módulos cargados siempre viaja vacía en este núcleo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KernelPackageSummary {
    pub name: Option<String>,
    pub version: String,
    pub signature: Option<String>,
    #[serde(default)]
    pub loaded_modules: Vec<String>,
}

/// Una release sobre la que la máquina emparejada fue certificada.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableRelease {
    pub distributor: String,
    pub version: String,
    pub codename: String,
    pub kernel: Option<KernelPackageSummary>,
}

/// Carga común de los veredictos Certified / Certified Image Exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertifiedSystemPayload {
    pub architecture: String,
    pub board: BoardSummary,
    pub bios: Option<BiosSummary>,
    /// Siempre null en este núcleo; el chasis no participa en la decisión.
    pub chassis: Option<serde_json::Value>,
    pub available_releases: Vec<AvailableRelease>,
}

/// Carga del veredicto Related Certified System Exists: la base común más
/// los grupos de dispositivos del protocolo, defaulted a null/vacío.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedCertifiedSystemPayload {
    pub architecture: String,
    pub board: BoardSummary,
    pub bios: Option<BiosSummary>,
    pub chassis: Option<serde_json::Value>,
    pub gpu: Option<serde_json::Value>,
    pub audio: Option<serde_json::Value>,
    pub video: Option<serde_json::Value>,
    pub network: Option<serde_json::Value>,
    pub wireless: Option<serde_json::Value>,
    #[serde(default)]
    pub pci_peripherals: Vec<serde_json::Value>,
    #[serde(default)]
    pub usb_peripherals: Vec<serde_json::Value>,
    pub available_releases: Vec<AvailableRelease>,
}

impl RelatedCertifiedSystemPayload {
    /// Eleva la carga certificada común al veredicto relacionado,
    /// sellando los grupos de dispositivos en su default de protocolo.
    pub fn from_certified_payload(base_payload: CertifiedSystemPayload) -> Self {
        Self {
            architecture: base_payload.architecture,
            board: base_payload.board,
            bios: base_payload.bios,
            chassis: base_payload.chassis,
            gpu: None,
            audio: None,
            video: None,
            network: None,
            wireless: None,
            pci_peripherals: Vec::new(),
            usb_peripherals: Vec::new(),
            available_releases: base_payload.available_releases,
        }
    }
}

/// Veredicto final del motor de decisión, discriminado sobre 'status'.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum CertificationStatusResponse {
    /// El hardware no existe en el corpus certificado.
    #[serde(rename = "Not Seen")]
    NotSeen,
    /// Hardware y release coinciden con una certificación registrada.
    #[serde(rename = "Certified")]
    Certified(CertifiedSystemPayload),
    /// El hardware está certificado pero sobre otra release.
    #[serde(rename = "Certified Image Exists")]
    CertifiedImageExists(CertifiedSystemPayload),
    /// Placa y BIOS certificados con un procesador no compatible.
    #[serde(rename = "Related Certified System Exists")]
    RelatedCertifiedSystemExists(RelatedCertifiedSystemPayload),
}

impl CertificationStatusResponse {
    /// Literal de protocolo del veredicto, para el rastro de telemetría.
    pub fn status_literal(&self) -> &'static str {
        match self {
            CertificationStatusResponse::NotSeen => "Not Seen",
            CertificationStatusResponse::Certified(_) => "Certified",
            CertificationStatusResponse::CertifiedImageExists(_) => "Certified Image Exists",
            CertificationStatusResponse::RelatedCertifiedSystemExists(_) => {
                "Related Certified System Exists"
            }
        }
    }
}
// FIN DEL ARCHIVO [libs/domain/models/src/responses.rs]
