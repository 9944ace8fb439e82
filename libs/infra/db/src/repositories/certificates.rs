// [libs/infra/db/src/repositories/certificates.rs]
/*!
 * =================================================================
 * APARATO: CERTIFICATE REPOSITORY (V3.1 - CORPUS MASTER)
 * CLASIFICACIÓN: INFRASTRUCTURE ADAPTER (ESTRATO L3)
 * RESPONSABILIDAD: CERTIFICADOS Y SUS REPORTES DE HARDWARE
 *
 * # Invariante:
 * El nombre de certificado es único por máquina. Un certificado
 * huérfano (sin release existente) es rechazado por la llave foránea
 * y aislado por la disciplina de ingesta.
 * =================================================================
 */

use chrono::{DateTime, Utc};
use libsql::{params, Connection, Value};

use hwapi_domain_models::entities::{Certificate, Report};

use crate::errors::DbError;
use crate::repositories::mapping::{
    datetime_or_null, integer_or_null, map_certificate_row, map_report_row,
    CERTIFICATE_COLUMNS, REPORT_COLUMNS,
};
use crate::repositories::upsert::resolve_or_insert_row;

/// Repositorio de certificados sobre una sesión estrecha del Ledger.
pub struct CertificateRepository<'session> {
    corpus_session: &'session Connection,
}

impl<'session> CertificateRepository<'session> {
    pub fn new(corpus_session: &'session Connection) -> Self {
        Self { corpus_session }
    }

    /**
     * Get-or-create de certificado por (name, machine). Fechas y release
     * son defaults aplicados solo en la creación.
     */
    pub async fn get_or_create_certificate(
        &self,
        certificate_name: &str,
        machine_id: i64,
        release_id: i64,
        created_at: Option<DateTime<Utc>>,
        completed: Option<DateTime<Utc>>,
    ) -> Result<(i64, bool), DbError> {
        resolve_or_insert_row(
            self.corpus_session,
            "SELECT id FROM certificates WHERE name = ?1 AND machine_id = ?2",
            vec![
                Value::Text(certificate_name.to_string()),
                Value::Integer(machine_id),
            ],
            "INSERT INTO certificates (name, machine_id, release_id, created_at, completed) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            vec![
                Value::Text(certificate_name.to_string()),
                Value::Integer(machine_id),
                Value::Integer(release_id),
                datetime_or_null(created_at),
                datetime_or_null(completed),
            ],
        )
        .await
    }

    /**
     * Resuelve un certificado por su nombre upstream dentro de una
     * máquina concreta. None ante ausencia; el importador trata el caso
     * como ítem omitible.
     */
    pub async fn find_certificate_by_name_and_machine(
        &self,
        certificate_name: &str,
        machine_id: i64,
    ) -> Result<Option<Certificate>, DbError> {
        let query_statement = format!(
            "SELECT {CERTIFICATE_COLUMNS} FROM certificates \
             WHERE name = ?1 AND machine_id = ?2 LIMIT 1"
        );

        let mut query_result = self
            .corpus_session
            .query(&query_statement, params![certificate_name, machine_id])
            .await
            .map_err(DbError::from_engine_fault)?;

        match query_result.next().await.map_err(DbError::from_engine_fault)? {
            Some(data_row) => Ok(Some(map_certificate_row(&data_row)?)),
            None => Ok(None),
        }
    }

    /**
     * Get-or-create de reporte completo: la llave incluye arquitectura,
     * kernel y BIOS (comparados con IS para tolerar nulos).
     */
    pub async fn get_or_create_report(
        &self,
        architecture: &str,
        kernel_id: Option<i64>,
        bios_id: Option<i64>,
        certificate_id: i64,
    ) -> Result<(Report, bool), DbError> {
        let (report_id, created) = resolve_or_insert_row(
            self.corpus_session,
            "SELECT id FROM reports \
             WHERE architecture = ?1 AND kernel_id IS ?2 AND bios_id IS ?3 AND certificate_id = ?4",
            vec![
                Value::Text(architecture.to_string()),
                integer_or_null(kernel_id),
                integer_or_null(bios_id),
                Value::Integer(certificate_id),
            ],
            "INSERT INTO reports (architecture, kernel_id, bios_id, certificate_id) \
             VALUES (?1, ?2, ?3, ?4)",
            vec![
                Value::Text(architecture.to_string()),
                integer_or_null(kernel_id),
                integer_or_null(bios_id),
                Value::Integer(certificate_id),
            ],
        )
        .await?;

        let hydrated_report = self.fetch_report_by_id(report_id).await?;
        Ok((hydrated_report, created))
    }

    /**
     * Reporte de anclaje para la ingesta de dispositivos: cualquier
     * reporte existente del certificado sirve; sin reportes previos se
     * crea uno mínimo.
     */
    pub async fn get_or_create_report_for_certificate(
        &self,
        certificate_id: i64,
    ) -> Result<(Report, bool), DbError> {
        let (report_id, created) = resolve_or_insert_row(
            self.corpus_session,
            "SELECT id FROM reports WHERE certificate_id = ?1 ORDER BY id ASC",
            vec![Value::Integer(certificate_id)],
            "INSERT INTO reports (certificate_id) VALUES (?1)",
            vec![Value::Integer(certificate_id)],
        )
        .await?;

        let hydrated_report = self.fetch_report_by_id(report_id).await?;
        Ok((hydrated_report, created))
    }

    async fn fetch_report_by_id(&self, report_id: i64) -> Result<Report, DbError> {
        let query_statement =
            format!("SELECT {REPORT_COLUMNS} FROM reports WHERE id = ?1 LIMIT 1");

        let mut query_result = self
            .corpus_session
            .query(&query_statement, params![report_id])
            .await
            .map_err(DbError::from_engine_fault)?;

        match query_result.next().await.map_err(DbError::from_engine_fault)? {
            Some(data_row) => map_report_row(&data_row),
            None => Err(DbError::MappingError(format!(
                "REPORT_ROW_VANISHED_AFTER_UPSERT: id={report_id}"
            ))),
        }
    }
}
// FIN DEL ARCHIVO [libs/infra/db/src/repositories/certificates.rs]
