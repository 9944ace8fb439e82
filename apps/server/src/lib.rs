// [apps/server/src/lib.rs]
/*!
 * =================================================================
 * APARATO: HWAPI SERVER LIBRARY ROOT (V3.0 - CORPUS MASTER)
 * CLASIFICACIÓN: APPLICATION LAYER (ESTRATO L1-APP)
 * RESPONSABILIDAD: EXPOSICIÓN NOMINAL DE LOS ESTRATOS DEL SERVICIO
 * =================================================================
 */

/// Extractores axum y mapeo de errores del transporte.
pub mod handlers;
/// Composition root: ignición del cliente del corpus y del servidor HTTP.
pub mod kernel;
/// Matriz de rutas del servicio y escudo CORS.
pub mod routes;
/// Motor de decisión y constructor de respuestas.
pub mod services;
/// Estado compartido inyectado en los handlers.
pub mod state;

/// Acceso nominal directo para el shell binario.
pub mod prelude {
    pub use crate::kernel::ServerKernel;
    pub use crate::state::AppState;
}
