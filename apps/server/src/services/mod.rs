// [apps/server/src/services/mod.rs]
/*!
 * =================================================================
 * APARATO: SERVICE STRATA BARREL (V3.0 - CORPUS MASTER)
 * CLASIFICACIÓN: APPLICATION SERVICES (ESTRATO L1-APP)
 * RESPONSABILIDAD: EXPOSICIÓN DEL MOTOR DE DECISIÓN Y EL CONSTRUCTOR
 * =================================================================
 */

/// Pipeline de clasificación de estado de certificación (seis puertas).
pub mod decision_engine;
/// Conformado de las cargas de respuesta no-NotSeen.
pub mod response_builder;

pub use decision_engine::CertificationDecisionEngine;
