// [libs/infra/db/src/client.rs]
/*!
 * =================================================================
 * APARATO: CORPUS CONNECTION CLIENT (V3.2 - MEMORY ANCHORED)
 * CLASIFICACIÓN: INFRASTRUCTURE LAYER (ESTRATO L3)
 * RESPONSABILIDAD: GESTIÓN DE ENLACES AL LEDGER Y SESIONES ESTRECHAS
 *
 * VISION HIPER-HOLÍSTICA:
 * 1. NARROW SESSIONS: Cada petición del motor de decisión abre, usa y
 *    cierra una sesión propia; el cliente jamás comparte conexiones
 *    entre peticiones.
 * 2. MEMORY ANCHOR: En modo RAM se abre un ancla de persistencia ANTES
 *    del bootstrap del esquema para que las tablas residan en un
 *    segmento de memoria compartido visible entre sesiones.
 * 3. FK ENFORCEMENT: Toda sesión activa 'PRAGMA foreign_keys' al abrirse.
 * =================================================================
 */

use crate::errors::DbError;
use crate::schema::apply_full_corpus_schema;
use libsql::{Builder, Connection, Database};
use std::sync::Arc;
use tracing::{error, info, instrument};

#[derive(Clone)]
pub struct CorpusStoreClient {
    internal_database_driver: Arc<Database>,
    /// Mantiene la base en memoria viva evitando que SQLite la purgue.
    _memory_persistence_anchor: Option<Arc<Connection>>,
}

impl CorpusStoreClient {
    /**
     * Establece el enlace con el Ledger y aplica el esquema idempotente.
     *
     * Acepta rutas locales, URLs remotas (libsql:// o https://, con token)
     * y URIs de memoria ('file:...?mode=memory&cache=shared').
     */
    #[instrument(skip(database_access_token))]
    pub async fn connect(
        database_connection_url: &str,
        database_access_token: Option<String>,
    ) -> Result<Self, DbError> {
        if database_connection_url.is_empty() {
            return Err(DbError::ConfigurationError("DB_URL_UNDEFINED".into()));
        }

        info!("🔌 [CORPUS_STORE]: Initiating link to [{}]", database_connection_url);

        let is_remote = database_connection_url.starts_with("libsql://")
            || database_connection_url.starts_with("https://");

        let is_memory = database_connection_url.contains(":memory:")
            || database_connection_url.contains("mode=memory");

        let database_driver = if is_remote {
            let token = database_access_token.ok_or_else(|| {
                DbError::ConfigurationError("REMOTE_ACCESS_TOKEN_MISSING".into())
            })?;
            Builder::new_remote(database_connection_url.to_string(), token)
                .build()
                .await
        } else {
            Builder::new_local(database_connection_url).build().await
        }
        .map_err(|e| DbError::ConnectionError(format!("DRIVER_IGNITION_FAILURE: {}", e)))?;

        let shared_driver = Arc::new(database_driver);
        let mut anchor = None;

        if is_memory {
            // El ancla debe existir antes que cualquier otra operación.
            let anchor_connection = shared_driver
                .connect()
                .map_err(|e| DbError::ConnectionError(format!("ANCHOR_FAULT: {}", e)))?;

            apply_full_corpus_schema(&anchor_connection)
                .await
                .map_err(|e| DbError::ConnectionError(format!("SCHEMA_SYNC_FAULT: {}", e)))?;

            anchor = Some(Arc::new(anchor_connection));
            info!("⚓ [CORPUS_STORE]: Memory strata solidified and anchored.");
        } else {
            let bootstrap_connection = shared_driver
                .connect()
                .map_err(|e| DbError::ConnectionError(format!("BOOTSTRAP_LINK_FAULT: {}", e)))?;
            apply_full_corpus_schema(&bootstrap_connection)
                .await
                .map_err(|e| DbError::ConnectionError(format!("SCHEMA_SYNC_FAULT: {}", e)))?;
        }

        Ok(Self {
            internal_database_driver: shared_driver,
            _memory_persistence_anchor: anchor,
        })
    }

    /**
     * Abre una sesión estrecha contra el Ledger con llaves foráneas
     * activas. El llamador es dueño de la sesión durante una única
     * petición o un único ítem de ingesta.
     */
    pub async fn open_session(&self) -> Result<Connection, DbError> {
        let session = self.internal_database_driver.connect().map_err(|e| {
            error!("⚠️ [POOL_FAULT]: Session allocation failed: {}", e);
            DbError::ConnectionError(e.to_string())
        })?;

        session
            .execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(DbError::from_engine_fault)?;

        Ok(session)
    }
}
// FIN DEL ARCHIVO [libs/infra/db/src/client.rs]
