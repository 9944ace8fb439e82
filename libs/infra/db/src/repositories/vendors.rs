// [libs/infra/db/src/repositories/vendors.rs]
/*!
 * =================================================================
 * APARATO: VENDOR REPOSITORY (V3.1 - CORPUS MASTER)
 * CLASIFICACIÓN: INFRASTRUCTURE ADAPTER (ESTRATO L3)
 * RESPONSABILIDAD: RESOLUCIÓN NORMALIZADA DE FABRICANTES
 *
 * # Invariante de emparejamiento:
 * El nombre se almacena con su caja original; la búsqueda compara la
 * forma normalizada (sin sufijos 'Inc'/'Inc.') con plegado ASCII a
 * minúsculas, por igualdad o por contención LIKE.
 * =================================================================
 */

use libsql::{params, Connection, Value};
use tracing::instrument;

use hwapi_domain_models::entities::Vendor;
use hwapi_domain_models::vendor::vendor_match_key;

use crate::errors::DbError;
use crate::repositories::mapping::{map_vendor_row, VENDOR_COLUMNS};
use crate::repositories::upsert::resolve_or_insert_row;

/// Repositorio de fabricantes sobre una sesión estrecha del Ledger.
pub struct VendorRepository<'session> {
    corpus_session: &'session Connection,
}

impl<'session> VendorRepository<'session> {
    pub fn new(corpus_session: &'session Connection) -> Self {
        Self { corpus_session }
    }

    /**
     * Resuelve un fabricante por nombre exacto o lo crea.
     * @return (fila, created)
     */
    pub async fn get_or_create_vendor(
        &self,
        vendor_name: &str,
    ) -> Result<(Vendor, bool), DbError> {
        let (vendor_id, created) = resolve_or_insert_row(
            self.corpus_session,
            "SELECT id FROM vendors WHERE name = ?1",
            vec![Value::Text(vendor_name.to_string())],
            "INSERT INTO vendors (name) VALUES (?1)",
            vec![Value::Text(vendor_name.to_string())],
        )
        .await?;

        Ok((
            Vendor {
                id: vendor_id,
                name: vendor_name.to_string(),
            },
            created,
        ))
    }

    /**
     * Busca un fabricante por su forma normalizada: igualdad insensible
     * a caja o contención LIKE. Retorna None ante un corpus sin match.
     */
    #[instrument(skip(self))]
    pub async fn get_vendor_by_name(
        &self,
        raw_vendor_name: &str,
    ) -> Result<Option<Vendor>, DbError> {
        let match_key = vendor_match_key(raw_vendor_name);
        if match_key.is_empty() {
            return Ok(None);
        }

        let query_statement = format!(
            "SELECT {VENDOR_COLUMNS} FROM vendors \
             WHERE LOWER(TRIM(name)) = ?1 OR LOWER(name) LIKE '%' || ?1 || '%' \
             LIMIT 1"
        );

        let mut query_result = self
            .corpus_session
            .query(&query_statement, params![match_key])
            .await
            .map_err(DbError::from_engine_fault)?;

        match query_result.next().await.map_err(DbError::from_engine_fault)? {
            Some(data_row) => Ok(Some(map_vendor_row(&data_row)?)),
            None => Ok(None),
        }
    }

    /**
     * Resuelve un fabricante por su identidad sustituta. El constructor
     * de respuestas lo usa para reportar el nombre almacenado.
     */
    pub async fn find_vendor_by_id(&self, vendor_id: i64) -> Result<Option<Vendor>, DbError> {
        let query_statement =
            format!("SELECT {VENDOR_COLUMNS} FROM vendors WHERE id = ?1 LIMIT 1");

        let mut query_result = self
            .corpus_session
            .query(&query_statement, params![vendor_id])
            .await
            .map_err(DbError::from_engine_fault)?;

        match query_result.next().await.map_err(DbError::from_engine_fault)? {
            Some(data_row) => Ok(Some(map_vendor_row(&data_row)?)),
            None => Ok(None),
        }
    }

    /**
     * Resolución de fabricante para el BIOS del importador: primero por
     * igualdad insensible a caja del nombre crudo, después por la forma
     * sin sufijo corporativo (evita duplicar 'Dell' y 'Dell Inc.'), y
     * como último recurso crea la fila con el nombre crudo.
     */
    pub async fn find_or_create_bios_vendor(
        &self,
        raw_vendor_name: &str,
    ) -> Result<(Vendor, bool), DbError> {
        let exact_statement = format!(
            "SELECT {VENDOR_COLUMNS} FROM vendors WHERE LOWER(name) = LOWER(?1) LIMIT 1"
        );
        let mut exact_result = self
            .corpus_session
            .query(&exact_statement, params![raw_vendor_name])
            .await
            .map_err(DbError::from_engine_fault)?;

        if let Some(data_row) = exact_result.next().await.map_err(DbError::from_engine_fault)? {
            return Ok((map_vendor_row(&data_row)?, false));
        }

        let match_key = vendor_match_key(raw_vendor_name);
        if !match_key.is_empty() {
            let normalized_statement = format!(
                "SELECT {VENDOR_COLUMNS} FROM vendors WHERE LOWER(TRIM(name)) = ?1 LIMIT 1"
            );
            let mut normalized_result = self
                .corpus_session
                .query(&normalized_statement, params![match_key])
                .await
                .map_err(DbError::from_engine_fault)?;

            if let Some(data_row) =
                normalized_result.next().await.map_err(DbError::from_engine_fault)?
            {
                return Ok((map_vendor_row(&data_row)?, false));
            }
        }

        self.get_or_create_vendor(raw_vendor_name).await
    }
}
// FIN DEL ARCHIVO [libs/infra/db/src/repositories/vendors.rs]
