// [libs/domain/models/src/entities.rs]
/*!
 * =================================================================
 * APARATO: CERTIFICATION CORPUS ENTITIES (V3.0 - CORPUS MASTER)
 * CLASIFICACIÓN: DOMAIN MODELS (ESTRATO L2)
 * RESPONSABILIDAD: GRAFO PERSISTIDO DE HARDWARE CERTIFICADO
 *
 * VISION HIPER-HOLÍSTICA:
 * El grafo es un DAG con raíces en Vendor y Release. Cada entidad porta
 * una identidad sustituta 'id' asignada por el Ledger; las llaves de
 * negocio se documentan campo a campo. Registros planos sin herencia.
 * =================================================================
 */

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{BusType, DeviceCategory};

/// Fabricante de hardware. Llave de negocio: 'name' (único, almacenado
/// con mayúsculas originales; el emparejamiento es insensible a caja).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vendor {
    pub id: i64,
    pub name: String,
}

/// Línea de producto de un fabricante. Llave de negocio: (name, vendor_id).
/// El nombre puede portar un calificador entre paréntesis que se ignora
/// durante el emparejamiento.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    pub id: i64,
    pub name: String,
    pub vendor_id: i64,
}

/// Variante nominal de hardware de una plataforma (p. ej. un escalón de CPU).
/// Llave de negocio: (name, platform_id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    pub id: i64,
    pub name: String,
    pub platform_id: i64,
}

/// Máquina física certificada. Llave de negocio: 'canonical_id' (el
/// identificador durable asignado por el sistema upstream).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Machine {
    pub id: i64,
    pub canonical_id: String,
    pub configuration_id: i64,
}

/// Release de Ubuntu: codename + cadena de versión (sin el sufijo 'LTS',
/// retirado en la ingesta) + ventana de soporte + versión entera (2204).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    pub id: i64,
    pub codename: String,
    pub release: String,
    pub release_date: Option<NaiveDate>,
    pub supported_until: Option<NaiveDate>,
    pub i_version: Option<i64>,
}

/// Certificado upstream: afirma que una Machine superó la certificación
/// para una Release. Llave de negocio: 'name' (único por máquina).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    pub id: i64,
    pub name: String,
    pub machine_id: i64,
    pub release_id: i64,
    pub created_at: Option<DateTime<Utc>>,
    pub completed: Option<DateTime<Utc>>,
}

/// Kernel observado en un reporte. El importador puede crearlo solo con
/// la versión; nombre y firma son opcionales.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kernel {
    pub id: i64,
    pub name: Option<String>,
    pub version: String,
    pub signature: Option<String>,
}

/// Firmware BIOS de un fabricante. Dos filas con idéntico (vendor_id,
/// version) son legales y se distinguen por revision/firmware_revision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bios {
    pub id: i64,
    pub vendor_id: i64,
    pub version: String,
    pub revision: Option<String>,
    pub firmware_revision: Option<String>,
    pub release_date: Option<NaiveDate>,
}

/// Instantánea de hardware ligada a un Certificate: arquitectura, kernel
/// y BIOS observados, más los dispositivos adjuntos vía asociación N:M.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub id: i64,
    pub architecture: String,
    pub kernel_id: Option<i64>,
    pub bios_id: Option<i64>,
    pub certificate_id: i64,
}

/// Dispositivo físico enumerado en uno o más reportes. Para la categoría
/// PROCESSOR, 'codename' es vacío o uno de los codenames conocidos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: i64,
    pub identifier: String,
    pub name: String,
    pub subproduct_name: String,
    pub device_type: String,
    pub bus: BusType,
    pub version: String,
    pub subsystem: String,
    pub category: DeviceCategory,
    pub codename: String,
    pub vendor_id: i64,
}

/// Entrada del diccionario CPUID -> codename. 'id_pattern' es un
/// fragmento hexadecimal en minúsculas (p. ej. '0x906ea').
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpuId {
    pub id: i64,
    pub id_pattern: String,
    pub codename: String,
}
// FIN DEL ARCHIVO [libs/domain/models/src/entities.rs]
