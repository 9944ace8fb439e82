// [libs/infra/db/src/lib.rs]
/*!
 * =================================================================
 * APARATO: CORPUS PERSISTENCE ADAPTER (V3.0 - CORPUS MASTER)
 * CLASIFICACIÓN: INFRASTRUCTURE LAYER (ESTRATO L3)
 * RESPONSABILIDAD: EXPOSICIÓN NOMINAL DEL CLIENTE Y LOS REPOSITORIOS
 * =================================================================
 */

/// Cliente de enlace con el Ledger (local, remoto o en memoria).
pub mod client;
/// Catálogo semántico de fallos de persistencia.
pub mod errors;
/// Repositorios tipados sobre el grafo de certificación.
pub mod repositories;
/// Génesis idempotente de tablas e índices.
pub mod schema;

pub use client::CorpusStoreClient;
pub use errors::DbError;
