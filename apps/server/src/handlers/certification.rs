// [apps/server/src/handlers/certification.rs]
/*!
 * =================================================================
 * APARATO: CERTIFICATION STATUS HANDLER (V3.1 - CORPUS MASTER)
 * CLASIFICACIÓN: API ADAPTER LAYER (ESTRATO L1-APP)
 * RESPONSABILIDAD: POST /v1/certification/status
 *
 * # Disciplina de sesión:
 * El handler abre una sesión estrecha, la presta al motor de decisión
 * y la cierra al responder. Cualquier clasificación (incluido
 * 'Not Seen') responde HTTP 200.
 * =================================================================
 */

use axum::extract::State;
use axum::Json;
use tracing::{info, instrument};

use hwapi_domain_models::requests::CertificationStatusRequest;
use hwapi_domain_models::responses::CertificationStatusResponse;

use crate::handlers::ApiError;
use crate::services::CertificationDecisionEngine;
use crate::state::AppState;

pub struct CertificationStatusHandler;

impl CertificationStatusHandler {
    /**
     * Clasifica la máquina consultante contra el corpus certificado.
     */
    #[instrument(skip(application_state, status_request))]
    pub async fn handle_certification_status(
        State(application_state): State<AppState>,
        Json(status_request): Json<CertificationStatusRequest>,
    ) -> Result<Json<CertificationStatusResponse>, ApiError> {
        let corpus_session = application_state.database_client.open_session().await?;
        let decision_engine = CertificationDecisionEngine::new(&corpus_session);

        let verdict = decision_engine.classify(&status_request).await?;

        info!(
            vendor = %status_request.vendor,
            model = %status_request.model,
            status = verdict.status_literal(),
            "📋 [CERTIFICATION]: Verdict emitted"
        );
        Ok(Json(verdict))
    }
}
// FIN DEL ARCHIVO [apps/server/src/handlers/certification.rs]
