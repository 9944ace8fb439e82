// [libs/infra/db/src/repositories/hardware.rs]
/*!
 * =================================================================
 * APARATO: HARDWARE REPOSITORY (V3.3 - TRAVERSAL MASTER)
 * CLASIFICACIÓN: INFRASTRUCTURE ADAPTER (ESTRATO L3)
 * RESPONSABILIDAD: RECORRIDOS DE EMPAREJAMIENTO DEL GRAFO FÍSICO
 *
 * VISION HIPER-HOLÍSTICA:
 * 1. BOARD GATE: placa por fabricante normalizado + nombre de producto
 *    insensible a caja, categoría BOARD u OTHER.
 * 2. BIOS GATE: lista completa de filas (vendor, version); varias filas
 *    idénticas se distinguen por revision/firmware_revision y cualquiera
 *    de ellas habilita el emparejamiento.
 * 3. RELATED MACHINE: Machine -> Certificate -> Report -> Device con
 *    arquitectura y BIOS exigidos; sin BIOS en la petición se exigen
 *    reportes con bios_id nulo.
 * =================================================================
 */

use chrono::NaiveDate;
use libsql::{params, Connection, Value};
use tracing::instrument;

use hwapi_domain_models::entities::{Bios, Device, Machine};
use hwapi_domain_models::enums::{BusType, DeviceCategory};
use hwapi_domain_models::vendor::vendor_match_key;

use crate::errors::DbError;
use crate::repositories::mapping::{
    date_or_null, map_bios_row, map_device_row, map_machine_row, text_or_null, BIOS_COLUMNS,
    DEVICE_COLUMNS, MACHINE_COLUMNS,
};
use crate::repositories::upsert::resolve_or_insert_row;

/// Identidad y defaults completos de un dispositivo para la ingesta.
/// La llave de negocio son los seis primeros campos; el resto son
/// defaults aplicados solo en la creación.
#[derive(Debug, Clone)]
pub struct DeviceSeed {
    pub name: String,
    pub version: String,
    pub vendor_id: i64,
    pub subsystem: String,
    pub bus: BusType,
    pub category: DeviceCategory,
    pub identifier: String,
    pub subproduct_name: String,
    pub device_type: String,
    pub codename: String,
}

/// Repositorio de hardware físico sobre una sesión estrecha del Ledger.
pub struct HardwareRepository<'session> {
    corpus_session: &'session Connection,
}

impl<'session> HardwareRepository<'session> {
    pub fn new(corpus_session: &'session Connection) -> Self {
        Self { corpus_session }
    }

    /**
     * Busca la placa certificada: fabricante emparejado en crudo o
     * normalizado, nombre de producto insensible a caja, categoría
     * BOARD u OTHER. Retorna None ante un corpus sin match.
     */
    #[instrument(skip(self))]
    pub async fn get_board(
        &self,
        board_manufacturer: &str,
        product_name: &str,
    ) -> Result<Option<Device>, DbError> {
        let manufacturer_key = vendor_match_key(board_manufacturer);

        let query_statement = format!(
            "SELECT {columns} FROM devices d \
             JOIN vendors v ON v.id = d.vendor_id \
             WHERE (LOWER(v.name) = LOWER(?1) OR LOWER(TRIM(v.name)) = ?2) \
               AND LOWER(d.name) = LOWER(?3) \
               AND d.category IN ('BOARD', 'OTHER') \
             LIMIT 1",
            columns = qualified_device_columns()
        );

        let mut query_result = self
            .corpus_session
            .query(
                &query_statement,
                params![board_manufacturer, manufacturer_key, product_name],
            )
            .await
            .map_err(DbError::from_engine_fault)?;

        match query_result.next().await.map_err(DbError::from_engine_fault)? {
            Some(data_row) => Ok(Some(map_device_row(&data_row)?)),
            None => Ok(None),
        }
    }

    /**
     * Retorna todas las filas BIOS que emparejan (fabricante, versión).
     * El resultado puede contener varias filas; la decisión posterior
     * acepta cualquiera de ellas.
     */
    #[instrument(skip(self))]
    pub async fn get_bios_list(
        &self,
        bios_vendor: &str,
        bios_version: &str,
    ) -> Result<Vec<Bios>, DbError> {
        let vendor_key = vendor_match_key(bios_vendor);

        let query_statement = format!(
            "SELECT {columns} FROM bios b \
             JOIN vendors v ON v.id = b.vendor_id \
             WHERE (LOWER(v.name) = LOWER(?1) OR LOWER(TRIM(v.name)) = ?2) \
               AND b.version = ?3",
            columns = qualified_bios_columns()
        );

        let mut query_result = self
            .corpus_session
            .query(&query_statement, params![bios_vendor, vendor_key, bios_version])
            .await
            .map_err(DbError::from_engine_fault)?;

        let mut matching_bios_rows = Vec::new();
        while let Some(data_row) = query_result.next().await.map_err(DbError::from_engine_fault)? {
            matching_bios_rows.push(map_bios_row(&data_row)?);
        }
        Ok(matching_bios_rows)
    }

    /**
     * Recorre Machine -> Certificate -> Report -> Device exigiendo la
     * placa exacta, la arquitectura y el conjunto de BIOS habilitado.
     * Con 'allowed_bios_ids' vacío solo emparejan reportes sin BIOS.
     * Retorna la primera máquina distinta que satisface el recorrido.
     */
    #[instrument(skip(self, allowed_bios_ids))]
    pub async fn get_machine_with_same_hardware_params(
        &self,
        architecture: &str,
        board_device_id: i64,
        allowed_bios_ids: &[i64],
    ) -> Result<Option<Machine>, DbError> {
        let mut query_statement = format!(
            "SELECT DISTINCT {columns} FROM machines m \
             JOIN certificates c ON c.machine_id = m.id \
             JOIN reports r ON r.certificate_id = c.id \
             JOIN device_report_association a ON a.report_id = r.id \
             WHERE a.device_id = ?1 AND r.architecture = ?2",
            columns = qualified_machine_columns()
        );

        if allowed_bios_ids.is_empty() {
            query_statement.push_str(" AND r.bios_id IS NULL");
        } else {
            // Los identificadores provienen del propio Ledger (i64), por lo
            // que la interpolación directa del conjunto IN es segura.
            let id_list = allowed_bios_ids
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            query_statement.push_str(&format!(" AND r.bios_id IN ({id_list})"));
        }
        query_statement.push_str(" LIMIT 1");

        let mut query_result = self
            .corpus_session
            .query(&query_statement, params![board_device_id, architecture])
            .await
            .map_err(DbError::from_engine_fault)?;

        match query_result.next().await.map_err(DbError::from_engine_fault)? {
            Some(data_row) => Ok(Some(map_machine_row(&data_row)?)),
            None => Ok(None),
        }
    }

    /**
     * Procesador más reciente (por certificado) adjunto a cualquier
     * reporte de la máquina.
     */
    #[instrument(skip(self))]
    pub async fn get_cpu_for_machine(
        &self,
        machine_id: i64,
    ) -> Result<Option<Device>, DbError> {
        let query_statement = format!(
            "SELECT {columns} FROM devices d \
             JOIN device_report_association a ON a.device_id = d.id \
             JOIN reports r ON r.id = a.report_id \
             JOIN certificates c ON c.id = r.certificate_id \
             WHERE c.machine_id = ?1 AND d.category = 'PROCESSOR' \
             ORDER BY c.created_at DESC, c.id DESC \
             LIMIT 1",
            columns = qualified_device_columns()
        );

        let mut query_result = self
            .corpus_session
            .query(&query_statement, params![machine_id])
            .await
            .map_err(DbError::from_engine_fault)?;

        match query_result.next().await.map_err(DbError::from_engine_fault)? {
            Some(data_row) => Ok(Some(map_device_row(&data_row)?)),
            None => Ok(None),
        }
    }

    /**
     * Arquitectura registrada en el reporte más reciente del certificado
     * más reciente de la máquina.
     */
    pub async fn get_machine_architecture(
        &self,
        machine_id: i64,
    ) -> Result<Option<String>, DbError> {
        let query_statement = "SELECT r.architecture FROM reports r \
             JOIN certificates c ON c.id = r.certificate_id \
             WHERE c.machine_id = ?1 \
             ORDER BY c.created_at DESC, c.id DESC, r.id DESC \
             LIMIT 1";

        let mut query_result = self
            .corpus_session
            .query(query_statement, params![machine_id])
            .await
            .map_err(DbError::from_engine_fault)?;

        match query_result.next().await.map_err(DbError::from_engine_fault)? {
            Some(data_row) => Ok(Some(data_row.get::<String>(0)?)),
            None => Ok(None),
        }
    }

    /**
     * Resuelve una máquina por su identificador canónico durable.
     */
    pub async fn find_machine_by_canonical_id(
        &self,
        canonical_id: &str,
    ) -> Result<Option<Machine>, DbError> {
        let query_statement = format!(
            "SELECT {MACHINE_COLUMNS} FROM machines WHERE canonical_id = ?1 LIMIT 1"
        );

        let mut query_result = self
            .corpus_session
            .query(&query_statement, params![canonical_id])
            .await
            .map_err(DbError::from_engine_fault)?;

        match query_result.next().await.map_err(DbError::from_engine_fault)? {
            Some(data_row) => Ok(Some(map_machine_row(&data_row)?)),
            None => Ok(None),
        }
    }

    /**
     * Get-or-create de máquina por canonical_id.
     */
    pub async fn get_or_create_machine(
        &self,
        canonical_id: &str,
        configuration_id: i64,
    ) -> Result<(Machine, bool), DbError> {
        let (machine_id, created) = resolve_or_insert_row(
            self.corpus_session,
            "SELECT id FROM machines WHERE canonical_id = ?1",
            vec![Value::Text(canonical_id.to_string())],
            "INSERT INTO machines (canonical_id, configuration_id) VALUES (?1, ?2)",
            vec![
                Value::Text(canonical_id.to_string()),
                Value::Integer(configuration_id),
            ],
        )
        .await?;

        Ok((
            Machine {
                id: machine_id,
                canonical_id: canonical_id.to_string(),
                configuration_id,
            },
            created,
        ))
    }

    /**
     * Get-or-create de BIOS. La llave incluye revision y
     * firmware_revision (comparadas con IS para tolerar nulos): dos
     * filas con idéntico (vendor, version) son legales.
     */
    pub async fn get_or_create_bios(
        &self,
        vendor_id: i64,
        version: &str,
        revision: Option<&str>,
        firmware_revision: Option<&str>,
        release_date: Option<NaiveDate>,
    ) -> Result<(i64, bool), DbError> {
        resolve_or_insert_row(
            self.corpus_session,
            "SELECT id FROM bios \
             WHERE vendor_id = ?1 AND version = ?2 AND revision IS ?3 AND firmware_revision IS ?4",
            vec![
                Value::Integer(vendor_id),
                Value::Text(version.to_string()),
                text_or_null(revision),
                text_or_null(firmware_revision),
            ],
            "INSERT INTO bios (vendor_id, version, revision, firmware_revision, release_date) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            vec![
                Value::Integer(vendor_id),
                Value::Text(version.to_string()),
                text_or_null(revision),
                text_or_null(firmware_revision),
                date_or_null(release_date),
            ],
        )
        .await
    }

    /**
     * Get-or-create de dispositivo por su tupla de identidad completa
     * (name, version, vendor, subsystem, bus, category).
     */
    pub async fn get_or_create_device(
        &self,
        device_seed: &DeviceSeed,
    ) -> Result<(Device, bool), DbError> {
        let (device_id, created) = resolve_or_insert_row(
            self.corpus_session,
            "SELECT id FROM devices \
             WHERE name = ?1 AND version = ?2 AND vendor_id = ?3 \
               AND subsystem = ?4 AND bus = ?5 AND category = ?6",
            vec![
                Value::Text(device_seed.name.clone()),
                Value::Text(device_seed.version.clone()),
                Value::Integer(device_seed.vendor_id),
                Value::Text(device_seed.subsystem.clone()),
                Value::Text(device_seed.bus.as_str().to_string()),
                Value::Text(device_seed.category.as_str().to_string()),
            ],
            "INSERT INTO devices \
             (name, version, vendor_id, subsystem, bus, category, \
              identifier, subproduct_name, device_type, codename) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            vec![
                Value::Text(device_seed.name.clone()),
                Value::Text(device_seed.version.clone()),
                Value::Integer(device_seed.vendor_id),
                Value::Text(device_seed.subsystem.clone()),
                Value::Text(device_seed.bus.as_str().to_string()),
                Value::Text(device_seed.category.as_str().to_string()),
                Value::Text(device_seed.identifier.clone()),
                Value::Text(device_seed.subproduct_name.clone()),
                Value::Text(device_seed.device_type.clone()),
                Value::Text(device_seed.codename.clone()),
            ],
        )
        .await?;

        let hydrated_device = self.fetch_device_by_id(device_id).await?;
        Ok((hydrated_device, created))
    }

    /**
     * Sella el codename de un procesador, solo cuando la fila aún no
     * porta uno definitivo (vacío o 'Unknown'). Retorna si hubo escritura.
     */
    pub async fn update_processor_codename(
        &self,
        device_id: i64,
        cpu_codename: &str,
    ) -> Result<bool, DbError> {
        let affected_rows = self
            .corpus_session
            .execute(
                "UPDATE devices SET codename = ?1 \
                 WHERE id = ?2 AND category = 'PROCESSOR' \
                   AND (codename = '' OR codename = 'Unknown')",
                params![cpu_codename, device_id],
            )
            .await
            .map_err(DbError::from_engine_fault)?;
        Ok(affected_rows > 0)
    }

    /**
     * Adjunta un dispositivo a un reporte en la asociación N:M.
     * Idempotente ante adjuntos repetidos.
     */
    pub async fn attach_device_to_report(
        &self,
        report_id: i64,
        device_id: i64,
    ) -> Result<(), DbError> {
        self.corpus_session
            .execute(
                "INSERT OR IGNORE INTO device_report_association (report_id, device_id) \
                 VALUES (?1, ?2)",
                params![report_id, device_id],
            )
            .await
            .map_err(DbError::from_engine_fault)?;
        Ok(())
    }

    async fn fetch_device_by_id(&self, device_id: i64) -> Result<Device, DbError> {
        let query_statement =
            format!("SELECT {DEVICE_COLUMNS} FROM devices WHERE id = ?1 LIMIT 1");

        let mut query_result = self
            .corpus_session
            .query(&query_statement, params![device_id])
            .await
            .map_err(DbError::from_engine_fault)?;

        match query_result.next().await.map_err(DbError::from_engine_fault)? {
            Some(data_row) => map_device_row(&data_row),
            None => Err(DbError::MappingError(format!(
                "DEVICE_ROW_VANISHED_AFTER_UPSERT: id={device_id}"
            ))),
        }
    }
}

/// Columnas de 'devices' calificadas con el alias 'd' de los JOIN.
fn qualified_device_columns() -> String {
    DEVICE_COLUMNS
        .split(", ")
        .map(|column| format!("d.{column}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Columnas de 'bios' calificadas con el alias 'b' de los JOIN.
fn qualified_bios_columns() -> String {
    BIOS_COLUMNS
        .split(", ")
        .map(|column| format!("b.{column}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Columnas de 'machines' calificadas con el alias 'm' de los JOIN.
fn qualified_machine_columns() -> String {
    MACHINE_COLUMNS
        .split(", ")
        .map(|column| format!("m.{column}"))
        .collect::<Vec<_>>()
        .join(", ")
}
// FIN DEL ARCHIVO [libs/infra/db/src/repositories/hardware.rs]
