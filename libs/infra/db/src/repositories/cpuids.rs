// [libs/infra/db/src/repositories/cpuids.rs]
/*!
 * =================================================================
 * APARATO: CPUID DICTIONARY REPOSITORY (V3.0 - CORPUS MASTER)
 * CLASIFICACIÓN: INFRASTRUCTURE ADAPTER (ESTRATO L3)
 * RESPONSABILIDAD: PERSISTENCIA DEL DICCIONARIO CPUID -> CODENAME
 *
 * # Regla de resolución:
 * La resolución por subcadena vive en el núcleo de decodificación; este
 * repositorio solo entrega el diccionario completo en orden estable.
 * =================================================================
 */

use libsql::{Connection, Value};

use hwapi_core_cpuid::CpuIdDictionaryEntry;
use hwapi_domain_models::entities::CpuId;

use crate::errors::DbError;
use crate::repositories::mapping::{map_cpu_id_row, CPU_ID_COLUMNS};
use crate::repositories::upsert::resolve_or_insert_row;

/// Repositorio del diccionario CPUID sobre una sesión estrecha.
pub struct CpuIdRepository<'session> {
    corpus_session: &'session Connection,
}

impl<'session> CpuIdRepository<'session> {
    pub fn new(corpus_session: &'session Connection) -> Self {
        Self { corpus_session }
    }

    /**
     * Get-or-create de una entrada (patrón, codename). El patrón se
     * pliega a minúsculas en la ingesta.
     */
    pub async fn get_or_create_cpu_id(
        &self,
        id_pattern: &str,
        codename: &str,
    ) -> Result<(i64, bool), DbError> {
        let lowered_pattern = id_pattern.to_ascii_lowercase();
        resolve_or_insert_row(
            self.corpus_session,
            "SELECT id FROM cpu_ids WHERE id_pattern = ?1 AND codename = ?2",
            vec![
                Value::Text(lowered_pattern.clone()),
                Value::Text(codename.to_string()),
            ],
            "INSERT INTO cpu_ids (id_pattern, codename) VALUES (?1, ?2)",
            vec![
                Value::Text(lowered_pattern),
                Value::Text(codename.to_string()),
            ],
        )
        .await
    }

    /// Diccionario completo en orden de inserción estable.
    pub async fn get_all_cpu_ids(&self) -> Result<Vec<CpuId>, DbError> {
        let query_statement =
            format!("SELECT {CPU_ID_COLUMNS} FROM cpu_ids ORDER BY id ASC");

        let mut query_result = self
            .corpus_session
            .query(&query_statement, ())
            .await
            .map_err(DbError::from_engine_fault)?;

        let mut dictionary_rows = Vec::new();
        while let Some(data_row) = query_result.next().await.map_err(DbError::from_engine_fault)? {
            dictionary_rows.push(map_cpu_id_row(&data_row)?);
        }
        Ok(dictionary_rows)
    }

    /// Diccionario proyectado al tipo del núcleo de decodificación.
    pub async fn get_dictionary_entries(&self) -> Result<Vec<CpuIdDictionaryEntry>, DbError> {
        Ok(self
            .get_all_cpu_ids()
            .await?
            .into_iter()
            .map(|row| CpuIdDictionaryEntry::new(row.id_pattern, row.codename))
            .collect())
    }
}
// FIN DEL ARCHIVO [libs/infra/db/src/repositories/cpuids.rs]
