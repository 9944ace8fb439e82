// [apps/server/src/handlers/mod.rs]
/*!
 * =================================================================
 * APARATO: HANDLER STRATA BARREL (V3.0 - CORPUS MASTER)
 * CLASIFICACIÓN: API ADAPTER LAYER (ESTRATO L1-APP)
 * RESPONSABILIDAD: HANDLERS HTTP Y MAPEO DE FALLOS DEL TRANSPORTE
 *
 * # Contrato de fallos:
 * Un cuerpo malformado lo rechaza el extractor Json con 422. Un fallo
 * de I/O del corpus NUNCA se degrada a clasificación: mapea a 500 con
 * un cuerpo JSON {"detail": ...}.
 * =================================================================
 */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use hwapi_infra_db::DbError;

/// Endpoint de estado de certificación.
pub mod certification;
/// Landing del servicio y esquema OpenAPI.
pub mod meta;

/// Fallos del transporte con mapeo HTTP explícito.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Fallo de I/O contra el corpus certificado.
    #[error("[L1_API_FAULT]: STORE -> {0}")]
    Store(#[from] DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("❌ [API_FAULT]: {}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": "Internal server error" })),
        )
            .into_response()
    }
}
// FIN DEL ARCHIVO [apps/server/src/handlers/mod.rs]
