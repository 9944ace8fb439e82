// [libs/infra/db/src/repositories/software.rs]
/*!
 * =================================================================
 * APARATO: SOFTWARE REPOSITORY (V3.2 - CORPUS MASTER)
 * CLASIFICACIÓN: INFRASTRUCTURE ADAPTER (ESTRATO L3)
 * RESPONSABILIDAD: RELEASES, KERNELS Y JERARQUÍA DE PLATAFORMAS
 *
 * # Contrato de releases:
 * La cadena de versión llega ya sin el sufijo ' LTS' (retirado por el
 * importador). get_release_object es un emparejamiento exacto
 * (release, codename); la ausencia de match NO es un error.
 * =================================================================
 */

use chrono::NaiveDate;
use libsql::{params, Connection, Value};
use tracing::instrument;

use hwapi_domain_models::entities::{Configuration, Kernel, Platform, Release};

use crate::errors::DbError;
use crate::repositories::mapping::{
    date_or_null, integer_or_null, map_kernel_row, map_optional_kernel_row, map_release_row,
    KERNEL_COLUMNS, RELEASE_COLUMNS,
};
use crate::repositories::upsert::resolve_or_insert_row;

/// Repositorio de software y jerarquía nominal sobre una sesión estrecha.
pub struct SoftwareRepository<'session> {
    corpus_session: &'session Connection,
}

impl<'session> SoftwareRepository<'session> {
    pub fn new(corpus_session: &'session Connection) -> Self {
        Self { corpus_session }
    }

    /**
     * Get-or-create de plataforma por (name, vendor).
     */
    pub async fn get_or_create_platform(
        &self,
        platform_name: &str,
        vendor_id: i64,
    ) -> Result<(Platform, bool), DbError> {
        let (platform_id, created) = resolve_or_insert_row(
            self.corpus_session,
            "SELECT id FROM platforms WHERE name = ?1 AND vendor_id = ?2",
            vec![Value::Text(platform_name.to_string()), Value::Integer(vendor_id)],
            "INSERT INTO platforms (name, vendor_id) VALUES (?1, ?2)",
            vec![Value::Text(platform_name.to_string()), Value::Integer(vendor_id)],
        )
        .await?;

        Ok((
            Platform {
                id: platform_id,
                name: platform_name.to_string(),
                vendor_id,
            },
            created,
        ))
    }

    /**
     * Get-or-create de configuración por (name, platform).
     */
    pub async fn get_or_create_configuration(
        &self,
        configuration_name: &str,
        platform_id: i64,
    ) -> Result<(Configuration, bool), DbError> {
        let (configuration_id, created) = resolve_or_insert_row(
            self.corpus_session,
            "SELECT id FROM configurations WHERE name = ?1 AND platform_id = ?2",
            vec![
                Value::Text(configuration_name.to_string()),
                Value::Integer(platform_id),
            ],
            "INSERT INTO configurations (name, platform_id) VALUES (?1, ?2)",
            vec![
                Value::Text(configuration_name.to_string()),
                Value::Integer(platform_id),
            ],
        )
        .await?;

        Ok((
            Configuration {
                id: configuration_id,
                name: configuration_name.to_string(),
                platform_id,
            },
            created,
        ))
    }

    /**
     * Get-or-create de release por (codename, release); las fechas y la
     * versión entera son defaults aplicados solo en la creación.
     */
    pub async fn get_or_create_release(
        &self,
        codename: &str,
        release: &str,
        release_date: Option<NaiveDate>,
        supported_until: Option<NaiveDate>,
        i_version: Option<i64>,
    ) -> Result<(i64, bool), DbError> {
        resolve_or_insert_row(
            self.corpus_session,
            "SELECT id FROM releases WHERE codename = ?1 AND release = ?2",
            vec![
                Value::Text(codename.to_string()),
                Value::Text(release.to_string()),
            ],
            "INSERT INTO releases (codename, release, release_date, supported_until, i_version) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            vec![
                Value::Text(codename.to_string()),
                Value::Text(release.to_string()),
                date_or_null(release_date),
                date_or_null(supported_until),
                integer_or_null(i_version),
            ],
        )
        .await
    }

    /**
     * Emparejamiento exacto (release, codename). None cuando la release
     * consultada no existe en el corpus; el motor lo trata como gate.
     */
    #[instrument(skip(self))]
    pub async fn get_release_object(
        &self,
        release_version: &str,
        release_codename: &str,
    ) -> Result<Option<Release>, DbError> {
        let query_statement = format!(
            "SELECT {RELEASE_COLUMNS} FROM releases \
             WHERE release = ?1 AND codename = ?2 LIMIT 1"
        );

        let mut query_result = self
            .corpus_session
            .query(&query_statement, params![release_version, release_codename])
            .await
            .map_err(DbError::from_engine_fault)?;

        match query_result.next().await.map_err(DbError::from_engine_fault)? {
            Some(data_row) => Ok(Some(map_release_row(&data_row, 0)?)),
            None => Ok(None),
        }
    }

    /**
     * Get-or-create de kernel por versión; nombre y firma quedan nulos
     * hasta que un reporte más rico los aporte.
     */
    pub async fn get_or_create_kernel(
        &self,
        kernel_version: &str,
    ) -> Result<(Kernel, bool), DbError> {
        let (kernel_id, created) = resolve_or_insert_row(
            self.corpus_session,
            "SELECT id FROM kernels WHERE version = ?1",
            vec![Value::Text(kernel_version.to_string())],
            "INSERT INTO kernels (version) VALUES (?1)",
            vec![Value::Text(kernel_version.to_string())],
        )
        .await?;

        let query_statement =
            format!("SELECT {KERNEL_COLUMNS} FROM kernels WHERE id = ?1 LIMIT 1");
        let mut query_result = self
            .corpus_session
            .query(&query_statement, params![kernel_id])
            .await
            .map_err(DbError::from_engine_fault)?;

        match query_result.next().await.map_err(DbError::from_engine_fault)? {
            Some(data_row) => Ok((map_kernel_row(&data_row)?, created)),
            None => Err(DbError::MappingError(format!(
                "KERNEL_ROW_VANISHED_AFTER_UPSERT: id={kernel_id}"
            ))),
        }
    }

    /**
     * Pares distintos (Release, Kernel) a través de todos los reportes
     * de la máquina. El kernel puede ser nulo cuando el reporte no lo
     * registró.
     */
    #[instrument(skip(self))]
    pub async fn get_releases_and_kernels_for_machine(
        &self,
        machine_id: i64,
    ) -> Result<Vec<(Release, Option<Kernel>)>, DbError> {
        let query_statement = "SELECT DISTINCT \
                rel.id, rel.codename, rel.release, rel.release_date, rel.supported_until, rel.i_version, \
                k.id, k.name, k.version, k.signature \
             FROM certificates c \
             JOIN releases rel ON rel.id = c.release_id \
             JOIN reports r ON r.certificate_id = c.id \
             LEFT JOIN kernels k ON k.id = r.kernel_id \
             WHERE c.machine_id = ?1 \
             ORDER BY rel.i_version ASC, rel.id ASC";

        let mut query_result = self
            .corpus_session
            .query(query_statement, params![machine_id])
            .await
            .map_err(DbError::from_engine_fault)?;

        let mut release_kernel_pairs = Vec::new();
        while let Some(data_row) = query_result.next().await.map_err(DbError::from_engine_fault)? {
            let release = map_release_row(&data_row, 0)?;
            let kernel = map_optional_kernel_row(&data_row, 6)?;
            release_kernel_pairs.push((release, kernel));
        }
        Ok(release_kernel_pairs)
    }
}
// FIN DEL ARCHIVO [libs/infra/db/src/repositories/software.rs]
