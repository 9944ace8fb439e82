// [libs/infra/c3/src/urls.rs]
/*!
 * =================================================================
 * APARATO: C3 URL CATALOG (V3.0 - CORPUS MASTER)
 * CLASIFICACIÓN: INFRASTRUCTURE ADAPTER (ESTRATO L3)
 * RESPONSABILIDAD: CONSTRUCCIÓN DE ENDPOINTS DEL API v2 UPSTREAM
 *
 * # Contrato:
 * La base proviene de C3_URL (default: el sistema de certificación
 * público). Los endpoints públicos no requieren credenciales y este
 * catálogo jamás las incorpora.
 * =================================================================
 */

use std::env;

/// Base pública del sistema de certificación upstream.
pub const DEFAULT_C3_URL: &str = "https://certification.canonical.com";

/// Variable de entorno que gobierna la base del upstream.
pub const C3_URL_ENVIRONMENT_KEY: &str = "C3_URL";

/// Límite de página del endpoint de instancias de dispositivo.
pub const DEVICE_INSTANCES_PAGE_LIMIT: u64 = 1000;

/// Catálogo de URLs del API v2 de certificación.
#[derive(Debug, Clone)]
pub struct C3UrlCatalog {
    upstream_base_url: String,
}

impl C3UrlCatalog {
    pub fn new(upstream_base_url: impl Into<String>) -> Self {
        let upstream_base_url: String = upstream_base_url.into();
        Self {
            upstream_base_url: upstream_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Construye el catálogo desde C3_URL, con degradación al default público.
    pub fn from_environment() -> Self {
        Self::new(
            env::var(C3_URL_ENVIRONMENT_KEY).unwrap_or_else(|_| DEFAULT_C3_URL.to_string()),
        )
    }

    pub fn upstream_base_url(&self) -> &str {
        &self.upstream_base_url
    }

    /// Mapa {codename: [id_pattern, ...]} del diccionario CPUID.
    pub fn cpuids_url(&self) -> String {
        format!("{}/api/v2/cpuids/", self.upstream_base_url)
    }

    /// Listado paginado de certificados públicos (página completa: limit=0).
    pub fn public_certificates_url(&self) -> String {
        format!(
            "{}/api/v2/public-certificates/{}",
            self.upstream_base_url,
            limit_offset_suffix(0)
        )
    }

    /// Listado paginado de instancias de dispositivo públicas.
    pub fn public_device_instances_url(&self) -> String {
        format!(
            "{}/api/v2/public-device-instances/{}",
            self.upstream_base_url,
            limit_offset_suffix(DEVICE_INSTANCES_PAGE_LIMIT)
        )
    }
}

/// Sufijo de paginación '?pagination=limitoffset&limit={limit}'.
pub fn limit_offset_suffix(page_limit: u64) -> String {
    format!("?pagination=limitoffset&limit={page_limit}")
}

// FIN DEL ARCHIVO [libs/infra/c3/src/urls.rs]
