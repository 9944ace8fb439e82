// [apps/server/src/handlers/meta.rs]
/*!
 * =================================================================
 * APARATO: SERVICE META HANDLERS (V3.0 - CORPUS MASTER)
 * CLASIFICACIÓN: API ADAPTER LAYER (ESTRATO L1-APP)
 * RESPONSABILIDAD: LANDING DEL SERVICIO Y ESQUEMA OPENAPI
 * =================================================================
 */

use axum::http::header;
use axum::response::IntoResponse;

/// Esquema OpenAPI embebido en el binario en tiempo de compilación.
const OPENAPI_SCHEMA_YAML: &str = include_str!("../../assets/openapi.yaml");

/// GET / : identificación literal del servicio.
pub async fn handle_service_landing() -> &'static str {
    "Hardware Information API (hwapi) server"
}

/// GET /v1/openapi.yaml : contrato público del servicio en YAML.
pub async fn handle_openapi_schema() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/yaml")],
        OPENAPI_SCHEMA_YAML,
    )
}
// FIN DEL ARCHIVO [apps/server/src/handlers/meta.rs]
