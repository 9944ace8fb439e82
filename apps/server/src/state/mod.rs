// [apps/server/src/state/mod.rs]
/*!
 * =================================================================
 * APARATO: APPLICATION STATE (V3.0 - CORPUS MASTER)
 * CLASIFICACIÓN: APPLICATION STATE (ESTRATO L1-APP)
 * RESPONSABILIDAD: ESTADO COMPARTIDO INYECTADO EN LOS HANDLERS
 *
 * # Disciplina de sesiones:
 * El estado porta únicamente el cliente del corpus. Cada petición abre,
 * usa y cierra su propia sesión; compartir sesiones entre peticiones es
 * un defecto.
 * =================================================================
 */

use hwapi_infra_db::CorpusStoreClient;

/// Contenedor de estado compartido (thread-safe) del servicio.
#[derive(Clone)]
pub struct AppState {
    /// Cliente del corpus certificado (libSQL local, remoto o en memoria).
    pub database_client: CorpusStoreClient,
}

impl AppState {
    pub fn new(database_client: CorpusStoreClient) -> Self {
        Self { database_client }
    }
}
// FIN DEL ARCHIVO [apps/server/src/state/mod.rs]
