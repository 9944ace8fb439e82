// [libs/infra/c3/src/lib.rs]
/*!
 * =================================================================
 * APARATO: C3 UPLINK ADAPTER (V3.0 - CORPUS MASTER)
 * CLASIFICACIÓN: INFRASTRUCTURE ADAPTER (ESTRATO L3)
 * RESPONSABILIDAD: EXPOSICIÓN NOMINAL DEL CLIENTE Y LOS CARGADORES
 * =================================================================
 */

/// Cliente HTTP con reintentos y backoff exponencial.
pub mod client;
/// Catálogo semántico de fallos del enlace y de la ingesta.
pub mod errors;
/// Cargadores del corpus: cpuids -> certificados -> dispositivos.
pub mod loaders;
/// Modelos de respuesta del API v2 upstream.
pub mod response_models;
/// Catálogo de URLs del sistema de certificación upstream.
pub mod urls;

pub use client::C3Client;
pub use errors::{C3ClientError, ImporterError};
pub use loaders::CorpusImporter;
pub use urls::C3UrlCatalog;
