// [libs/infra/c3/src/client.rs]
/*!
 * =================================================================
 * APARATO: C3 UPLINK CLIENT (V3.2 - RETRY HARDENED)
 * CLASIFICACIÓN: INFRASTRUCTURE ADAPTER (ESTRATO L3)
 * RESPONSABILIDAD: FETCH TIPADO CON REINTENTOS Y BACKOFF EXPONENCIAL
 *
 * VISION HIPER-HOLÍSTICA:
 * 1. SESSION PERSISTENTE: Un único reqwest::Client con timeout de 90s
 *    por intento reutiliza conexiones durante toda la importación.
 * 2. RETRY MATRIX: Son reintentables los timeouts de lectura y
 *    conexión, los errores de conexión y los estados 5xx/429. Cualquier
 *    otro 4xx es terminal. Máximo 5 intentos con demora
 *    min(2 * 2^intento, 60) segundos.
 * 3. CURSOR AUTORITATIVO: La paginación sigue la URL 'next' del
 *    servidor; el cliente jamás fabrica offsets propios.
 * =================================================================
 */

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::errors::C3ClientError;
use crate::urls::C3UrlCatalog;

/// Timeout por intento de fetch contra el upstream.
pub const FETCH_TIMEOUT_SECONDS: u64 = 90;

/// Presupuesto máximo de intentos por URL.
pub const MAX_FETCH_ATTEMPTS: u32 = 5;

/// Base de la progresión exponencial de demoras (segundos).
pub const BACKOFF_BASE_SECONDS: u64 = 2;

/// Techo absoluto de la demora entre intentos (segundos).
pub const BACKOFF_MAX_DELAY_SECONDS: u64 = 60;

/**
 * Demora previa al reintento 'attempt_index' (0-indexado):
 * min(base * 2^intento, techo) segundos.
 */
pub fn compute_backoff_delay(attempt_index: u32) -> Duration {
    let exponential_seconds = BACKOFF_BASE_SECONDS
        .saturating_mul(1u64 << attempt_index.min(32));
    Duration::from_secs(exponential_seconds.min(BACKOFF_MAX_DELAY_SECONDS))
}

/// Verdadero para los estados HTTP que habilitan un reintento.
pub fn is_retryable_status(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

pub struct C3Client {
    upstream_http_session: Client,
    url_catalog: C3UrlCatalog,
}

impl C3Client {
    /**
     * Inicializa la sesión persistente contra el upstream.
     * Los endpoints públicos no requieren credenciales.
     */
    pub fn new(url_catalog: C3UrlCatalog) -> Result<Self, C3ClientError> {
        let upstream_http_session = Client::builder()
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECONDS))
            .user_agent("hwapi-corpus-importer/3.0")
            .build()?;

        Ok(Self {
            upstream_http_session,
            url_catalog,
        })
    }

    pub fn url_catalog(&self) -> &C3UrlCatalog {
        &self.url_catalog
    }

    /**
     * Recupera y decodifica una página JSON del upstream bajo la matriz
     * de reintentos.
     *
     * # Errors:
     * - `UpstreamRejection`: estado 4xx distinto de 429.
     * - `RetriesExhausted`: presupuesto de intentos agotado.
     * - `PayloadDecode`: el cuerpo no satisface el contrato tipado.
     */
    #[instrument(skip(self))]
    pub async fn fetch_json_page<T: DeserializeOwned>(
        &self,
        target_url: &str,
    ) -> Result<T, C3ClientError> {
        for attempt_index in 0..MAX_FETCH_ATTEMPTS {
            if attempt_index > 0 {
                let retry_delay = compute_backoff_delay(attempt_index - 1);
                warn!(
                    "🔁 [C3_RETRY]: Attempt {}/{} for [{}] in {:?}",
                    attempt_index + 1,
                    MAX_FETCH_ATTEMPTS,
                    target_url,
                    retry_delay
                );
                tokio::time::sleep(retry_delay).await;
            }

            match self.upstream_http_session.get(target_url).send().await {
                Ok(network_response) => {
                    let response_status = network_response.status();

                    if response_status.is_success() {
                        debug!("📥 [C3_FETCH]: Page received from [{}]", target_url);
                        return network_response
                            .json::<T>()
                            .await
                            .map_err(|decode_error| {
                                C3ClientError::PayloadDecode(decode_error.to_string())
                            });
                    }

                    if is_retryable_status(response_status) {
                        warn!(
                            "⚠️ [C3_TRANSIENT]: HTTP_{} on [{}]",
                            response_status.as_u16(),
                            target_url
                        );
                        continue;
                    }

                    return Err(C3ClientError::UpstreamRejection {
                        status_code: response_status.as_u16(),
                        target_url: target_url.to_string(),
                    });
                }
                Err(transport_error) => {
                    if transport_error.is_timeout() || transport_error.is_connect() {
                        warn!(
                            "⚠️ [C3_TRANSIENT]: Transport fault on [{}]: {}",
                            target_url, transport_error
                        );
                        continue;
                    }
                    return Err(C3ClientError::Network(transport_error));
                }
            }
        }

        Err(C3ClientError::RetriesExhausted {
            attempt_count: MAX_FETCH_ATTEMPTS,
            target_url: target_url.to_string(),
        })
    }
}
// FIN DEL ARCHIVO [libs/infra/c3/src/client.rs]
