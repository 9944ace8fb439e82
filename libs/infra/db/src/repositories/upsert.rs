// [libs/infra/db/src/repositories/upsert.rs]
/*!
 * =================================================================
 * APARATO: GET-OR-CREATE PRIMITIVE (V3.2 - RACE HARDENED)
 * CLASIFICACIÓN: INFRASTRUCTURE INTERNAL (ESTRATO L3)
 * RESPONSABILIDAD: IMPLEMENTACIÓN ÚNICA DEL PATRÓN LOOKUP-THEN-INSERT
 *                  COMPARTIDA POR TODOS LOS REPOSITORIOS DEL GRAFO
 *
 * VISION HIPER-HOLÍSTICA:
 * 1. IDEMPOTENCIA: Dos llamadas secuenciales con la misma llave y los
 *    mismos defaults retornan la misma fila; la segunda reporta
 *    created=false.
 * 2. RACE SAFETY: Ante una violación de unicidad durante el INSERT
 *    (insertador concurrente), se relee la fila y se retorna como no
 *    creada. Cada get-or-create es su propia unidad de commit, de modo
 *    que un ítem corrupto jamás envenena el lote.
 * =================================================================
 */

use libsql::{Connection, Value};
use tracing::debug;

use crate::errors::DbError;

/**
 * Resuelve una fila por su llave de negocio o la inserta con defaults.
 *
 * @param select_statement SELECT cuya primera columna es el rowid.
 * @param insert_statement INSERT con la llave y los defaults completos.
 * @return (rowid, created)
 */
pub(crate) async fn resolve_or_insert_row(
    session: &Connection,
    select_statement: &str,
    select_values: Vec<Value>,
    insert_statement: &str,
    insert_values: Vec<Value>,
) -> Result<(i64, bool), DbError> {
    // 1. FASE DE LOOKUP
    let mut lookup_result = session
        .query(select_statement, select_values.clone())
        .await
        .map_err(DbError::from_engine_fault)?;

    if let Some(existing_row) = lookup_result.next().await.map_err(DbError::from_engine_fault)? {
        return Ok((existing_row.get::<i64>(0)?, false));
    }

    // 2. FASE DE INSERCIÓN (unidad de commit propia)
    match session.execute(insert_statement, insert_values).await {
        Ok(_) => Ok((session.last_insert_rowid(), true)),
        Err(engine_error) => {
            let classified_fault = DbError::from_engine_fault(engine_error);
            if classified_fault.is_constraint_violation() {
                // 3. CARRERA CON OTRO INSERTADOR: relectura post-conflicto.
                debug!("♻️ [UPSERT]: Constraint race detected, re-reading row.");
                let mut reread_result = session
                    .query(select_statement, select_values)
                    .await
                    .map_err(DbError::from_engine_fault)?;
                if let Some(raced_row) =
                    reread_result.next().await.map_err(DbError::from_engine_fault)?
                {
                    return Ok((raced_row.get::<i64>(0)?, false));
                }
            }
            Err(classified_fault)
        }
    }
}
// FIN DEL ARCHIVO [libs/infra/db/src/repositories/upsert.rs]
