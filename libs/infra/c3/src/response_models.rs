// [libs/infra/c3/src/response_models.rs]
/*!
 * =================================================================
 * APARATO: C3 RESPONSE MODELS (V3.1 - CORPUS MASTER)
 * CLASIFICACIÓN: INFRASTRUCTURE ADAPTER (ESTRATO L3)
 * RESPONSABILIDAD: CONTRATOS DE DESERIALIZACIÓN DEL API v2 UPSTREAM
 *
 * # Granularidad de validación:
 * Las páginas se decodifican con resultados crudos (Value) y cada ítem
 * se tipa individualmente: un ítem malformado se registra y se omite
 * sin envenenar el resto de la página.
 * =================================================================
 */

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use hwapi_domain_models::enums::{BusType, DeviceCategory};

/// Sobre de paginación limit/offset del upstream. 'next' es el cursor
/// autoritativo del servidor; 'count' siembra el indicador de progreso.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageEnvelope<T> {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// Mapa {codename: [id_pattern, ...]} del endpoint /api/v2/cpuids/.
pub type CpuIdCatalog = BTreeMap<String, Vec<String>>;

/// Release anidada en un certificado público.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct C3Release {
    pub codename: String,
    pub release: String,
    #[serde(default)]
    pub release_date: Option<NaiveDate>,
    #[serde(default)]
    pub supported_until: Option<NaiveDate>,
    #[serde(default)]
    pub i_version: Option<i64>,
}

/// BIOS anidado en un certificado público. La versión puede llegar
/// vacía; la ingesta degrada entonces al campo 'name'.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct C3Bios {
    #[serde(default)]
    pub name: String,
    pub vendor: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub firmware_type: Option<String>,
    #[serde(default)]
    pub release_date: Option<NaiveDate>,
}

/// Dispositivo anidado en una instancia pública.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct C3Device {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub subproduct_name: Option<String>,
    pub vendor: String,
    #[serde(default)]
    pub device_type: Option<String>,
    pub bus: BusType,
    pub identifier: String,
    #[serde(default)]
    pub subsystem: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub category: Option<DeviceCategory>,
    #[serde(default)]
    pub codename: Option<String>,
}

/// Ítem del endpoint /api/v2/public-certificates/.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicCertificate {
    pub canonical_id: String,
    pub vendor: String,
    pub platform: String,
    pub configuration: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed: Option<DateTime<Utc>>,
    pub name: String,
    pub release: C3Release,
    #[serde(default)]
    pub architecture: Option<String>,
    #[serde(default)]
    pub kernel_version: Option<String>,
    #[serde(default)]
    pub bios: Option<C3Bios>,
    #[serde(default)]
    pub firmware_revision: Option<String>,
}

/// Ítem del endpoint /api/v2/public-device-instances/.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicDeviceInstance {
    pub machine_canonical_id: String,
    pub certificate_name: String,
    pub device: C3Device,
    #[serde(default)]
    pub driver_name: Option<String>,
    #[serde(default)]
    pub cpu_codename: Option<String>,
}

impl PublicDeviceInstance {
    /// Codename efectivo del procesador: el campo dedicado del ítem o,
    /// en su defecto, el codename anidado del dispositivo.
    pub fn effective_cpu_codename(&self) -> Option<&str> {
        self.cpu_codename
            .as_deref()
            .or(self.device.codename.as_deref())
    }
}
// FIN DEL ARCHIVO [libs/infra/c3/src/response_models.rs]
