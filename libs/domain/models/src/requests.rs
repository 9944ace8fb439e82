// [libs/domain/models/src/requests.rs]
/*!
 * =================================================================
 * APARATO: CERTIFICATION STATUS REQUEST CONTRACTS (V3.0)
 * CLASIFICACIÓN: DOMAIN MODELS (ESTRATO L2)
 * RESPONSABILIDAD: DESCRIPCIÓN VALIDADA DE LA MÁQUINA CONSULTANTE
 *
 * VISION HIPER-HOLÍSTICA:
 * El cliente reporta la sonda completa de su hardware; el motor de
 * decisión consume únicamente vendor/model/architecture/board/bios/os/
 * processor. Las listas de periféricos se aceptan por compatibilidad de
 * protocolo y se ignoran en la clasificación.
 * =================================================================
 */

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Placa base reportada por la máquina consultante.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardProbe {
    pub manufacturer: String,
    pub product_name: String,
    pub version: String,
}

/// Firmware BIOS reportado. Opcional en la petición: su ausencia obliga a
/// emparejar reportes certificados sin BIOS registrado.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiosProbe {
    pub vendor: String,
    pub version: String,
    #[serde(default)]
    pub revision: Option<String>,
    #[serde(default)]
    pub firmware_revision: Option<String>,
    #[serde(default)]
    pub release_date: Option<NaiveDate>,
}

/// Paquete de kernel reportado dentro del bloque de sistema operativo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KernelProbe {
    #[serde(default)]
    pub name: Option<String>,
    pub version: String,
    #[serde(default)]
    pub signature: Option<String>,
}

/// Sistema operativo en ejecución sobre la máquina consultante.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OsProbe {
    pub distributor: String,
    pub version: String,
    pub codename: String,
    pub kernel: KernelProbe,
}

/// Procesador reportado. 'identifier' porta los bytes crudos de la hoja
/// CPUID; solo los tres primeros son significativos para la decodificación.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessorProbe {
    #[serde(default)]
    pub identifier: Option<Vec<u8>>,
    pub frequency: i64,
    pub manufacturer: String,
    pub version: String,
}

/// Sonda completa del endpoint POST /v1/certification/status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificationStatusRequest {
    pub vendor: String,
    pub model: String,
    pub architecture: String,
    pub board: BoardProbe,
    #[serde(default)]
    pub bios: Option<BiosProbe>,
    pub os: OsProbe,
    pub processor: ProcessorProbe,

    // --- CAMPOS DE PROTOCOLO ACEPTADOS PERO IGNORADOS POR EL MOTOR ---
    #[serde(default)]
    pub chassis: Option<serde_json::Value>,
    #[serde(default)]
    pub gpu: Option<serde_json::Value>,
    #[serde(default)]
    pub audio: Option<serde_json::Value>,
    #[serde(default)]
    pub video: Option<serde_json::Value>,
    #[serde(default)]
    pub network: Option<serde_json::Value>,
    #[serde(default)]
    pub wireless: Option<serde_json::Value>,
    #[serde(default)]
    pub pci_peripherals: Option<serde_json::Value>,
    #[serde(default)]
    pub usb_peripherals: Option<serde_json::Value>,
}
// FIN DEL ARCHIVO [libs/domain/models/src/requests.rs]
