// [libs/infra/db/src/errors.rs]
/*!
 * =================================================================
 * APARATO: CORPUS ERROR CATALOG (V3.1 - CORPUS MASTER)
 * CLASIFICACIÓN: INFRASTRUCTURE CORE (ESTRATO L3)
 * RESPONSABILIDAD: CATALOGACIÓN SEMÁNTICA DE FALLOS DE PERSISTENCIA
 *
 * VISION HIPER-HOLÍSTICA:
 * 1. CONSTRAINT AWARENESS: Distingue violaciones de unicidad y de llave
 *    foránea del resto de fallos SQL; el importador aísla el ítem
 *    afectado y continúa la iteración.
 * 2. CONFIGURATION AWARENESS: 'ConfigurationError' separa variables de
 *    entorno vacías de los fallos reales de red.
 * =================================================================
 */

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    /// Error de enlace físico o de red con el motor libSQL.
    #[error("[L3_DB_NET_FAULT]: DATABASE_UPLINK_SEVERED -> {0}")]
    ConnectionError(String),

    /// Fallo en la configuración del entorno (variables vacías o malformadas).
    #[error("[L3_DB_CONFIG_FAULT]: STRATEGIC_ENV_VOID -> {0}")]
    ConfigurationError(String),

    /// Error de sintaxis o ejecución devuelto por el motor libSQL.
    #[error("[L3_DB_QUERY_FAULT]: SQL_QUERY_REJECTED -> {0}")]
    QueryError(#[from] libsql::Error),

    /// Violación de restricción (UNIQUE / FOREIGN KEY) durante una escritura.
    /// El lote de escritura del ítem actual debe revertirse y la iteración
    /// continuar con el siguiente ítem.
    #[error("[L3_DB_CONSTRAINT_FAULT]: WRITE_REJECTED_BY_CONSTRAINT -> {0}")]
    ConstraintViolation(String),

    /// Fallo en la transformación de tipos entre SQLite y el dominio Rust.
    #[error("[L3_DB_MAPPING_FAULT]: DATA_MAPPING_VIOLATION -> {0}")]
    MappingError(String),
}

impl DbError {
    /// Clasifica un fallo libSQL: las violaciones de restricción se
    /// promueven a 'ConstraintViolation'; el resto queda como QueryError.
    pub fn from_engine_fault(engine_error: libsql::Error) -> Self {
        let fault_description = engine_error.to_string();
        if fault_description.contains("UNIQUE constraint")
            || fault_description.contains("FOREIGN KEY constraint")
            || fault_description.contains("constraint failed")
        {
            DbError::ConstraintViolation(fault_description)
        } else {
            DbError::QueryError(engine_error)
        }
    }

    /// Verdadero cuando el fallo es aislable a un único ítem de ingesta.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, DbError::ConstraintViolation(_))
    }
}
// FIN DEL ARCHIVO [libs/infra/db/src/errors.rs]
