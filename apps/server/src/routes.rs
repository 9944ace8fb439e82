// [apps/server/src/routes.rs]
/*!
 * =================================================================
 * APARATO: ROUTING MATRIX (V3.1 - CORPUS MASTER)
 * CLASIFICACIÓN: API ADAPTER LAYER (ESTRATO L1-APP)
 * RESPONSABILIDAD: TOPOLOGÍA DE RUTAS Y ESCUDO CORS DEL SERVICIO
 * =================================================================
 */

use crate::handlers::{certification, meta};
use crate::state::AppState;
use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};

/// Construye el router completo del servicio de certificación.
pub fn create_certification_router(application_shared_state: AppState) -> Router {
    // Escudo de red: CORS permisivo para los clientes de consulta.
    let network_security_shield = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    // ESTRATO DE DECISIÓN: consulta de estado de certificación.
    let certification_stratum = Router::new().route(
        "/certification/status",
        post(certification::CertificationStatusHandler::handle_certification_status),
    );

    // COMPOSICIÓN GLOBAL (Root Topology)
    Router::new()
        .route("/", get(meta::handle_service_landing))
        .nest(
            "/v1",
            Router::new()
                .route("/openapi.yaml", get(meta::handle_openapi_schema))
                .merge(certification_stratum),
        )
        .layer(network_security_shield)
        .with_state(application_shared_state)
}
// FIN DEL ARCHIVO [apps/server/src/routes.rs]
