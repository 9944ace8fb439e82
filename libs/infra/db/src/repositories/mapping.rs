// [libs/infra/db/src/repositories/mapping.rs]
/*!
 * =================================================================
 * APARATO: ROW MAPPING STRATA (V3.0 - CORPUS MASTER)
 * CLASIFICACIÓN: INFRASTRUCTURE INTERNAL (ESTRATO L3)
 * RESPONSABILIDAD: TRANSFORMACIÓN FILA SQLITE -> ENTIDAD DE DOMINIO
 *
 * # Contrato de columnas:
 * Cada mapeador asume la lista SELECT canónica de su entidad (documentada
 * en la constante *_COLUMNS). Los mapeadores aceptan un offset base para
 * reutilizarse dentro de consultas JOIN compuestas.
 * =================================================================
 */

use chrono::{DateTime, NaiveDate, Utc};
use libsql::{Row, Value};

use hwapi_domain_models::entities::{
    Bios, Certificate, CpuId, Device, Kernel, Machine, Release, Report, Vendor,
};
use hwapi_domain_models::enums::{BusType, DeviceCategory};

use crate::errors::DbError;

/// Lista SELECT canónica de 'vendors'.
pub(crate) const VENDOR_COLUMNS: &str = "id, name";
/// Lista SELECT canónica de 'machines'.
pub(crate) const MACHINE_COLUMNS: &str = "id, canonical_id, configuration_id";
/// Lista SELECT canónica de 'releases'.
pub(crate) const RELEASE_COLUMNS: &str =
    "id, codename, release, release_date, supported_until, i_version";
/// Lista SELECT canónica de 'bios'.
pub(crate) const BIOS_COLUMNS: &str =
    "id, vendor_id, version, revision, firmware_revision, release_date";
/// Lista SELECT canónica de 'devices'.
pub(crate) const DEVICE_COLUMNS: &str =
    "id, identifier, name, subproduct_name, device_type, bus, version, subsystem, category, codename, vendor_id";
/// Lista SELECT canónica de 'kernels'.
pub(crate) const KERNEL_COLUMNS: &str = "id, name, version, signature";
/// Lista SELECT canónica de 'reports'.
pub(crate) const REPORT_COLUMNS: &str =
    "id, architecture, kernel_id, bios_id, certificate_id";
/// Lista SELECT canónica de 'certificates'.
pub(crate) const CERTIFICATE_COLUMNS: &str =
    "id, name, machine_id, release_id, created_at, completed";
/// Lista SELECT canónica de 'cpu_ids'.
pub(crate) const CPU_ID_COLUMNS: &str = "id, id_pattern, codename";

// --- CONVERSIÓN DE VALORES DE ENLACE (Rust -> SQLite) ---

pub(crate) fn text_or_null(optional_text: Option<&str>) -> Value {
    match optional_text {
        Some(text) => Value::Text(text.to_string()),
        None => Value::Null,
    }
}

pub(crate) fn integer_or_null(optional_integer: Option<i64>) -> Value {
    match optional_integer {
        Some(integer) => Value::Integer(integer),
        None => Value::Null,
    }
}

pub(crate) fn date_or_null(optional_date: Option<NaiveDate>) -> Value {
    match optional_date {
        Some(date) => Value::Text(date.format("%Y-%m-%d").to_string()),
        None => Value::Null,
    }
}

pub(crate) fn datetime_or_null(optional_datetime: Option<DateTime<Utc>>) -> Value {
    match optional_datetime {
        Some(datetime) => Value::Text(datetime.to_rfc3339()),
        None => Value::Null,
    }
}

// --- CONVERSIÓN DE COLUMNAS (SQLite -> Rust) ---

pub(crate) fn parse_optional_date(
    raw_column: Option<String>,
    column_label: &str,
) -> Result<Option<NaiveDate>, DbError> {
    raw_column
        .map(|raw_text| {
            NaiveDate::parse_from_str(&raw_text, "%Y-%m-%d").map_err(|parse_error| {
                DbError::MappingError(format!("{column_label}: {parse_error}"))
            })
        })
        .transpose()
}

pub(crate) fn parse_optional_datetime(
    raw_column: Option<String>,
    column_label: &str,
) -> Result<Option<DateTime<Utc>>, DbError> {
    raw_column
        .map(|raw_text| {
            DateTime::parse_from_rfc3339(&raw_text)
                .map(|parsed| parsed.with_timezone(&Utc))
                .map_err(|parse_error| {
                    DbError::MappingError(format!("{column_label}: {parse_error}"))
                })
        })
        .transpose()
}

// --- MAPEADORES DE ENTIDAD ---

pub(crate) fn map_vendor_row(data_row: &Row) -> Result<Vendor, DbError> {
    Ok(Vendor {
        id: data_row.get::<i64>(0)?,
        name: data_row.get::<String>(1)?,
    })
}

pub(crate) fn map_machine_row(data_row: &Row) -> Result<Machine, DbError> {
    Ok(Machine {
        id: data_row.get::<i64>(0)?,
        canonical_id: data_row.get::<String>(1)?,
        configuration_id: data_row.get::<i64>(2)?,
    })
}

pub(crate) fn map_release_row(data_row: &Row, base_index: i32) -> Result<Release, DbError> {
    Ok(Release {
        id: data_row.get::<i64>(base_index)?,
        codename: data_row.get::<String>(base_index + 1)?,
        release: data_row.get::<String>(base_index + 2)?,
        release_date: parse_optional_date(
            data_row.get::<Option<String>>(base_index + 3)?,
            "releases.release_date",
        )?,
        supported_until: parse_optional_date(
            data_row.get::<Option<String>>(base_index + 4)?,
            "releases.supported_until",
        )?,
        i_version: data_row.get::<Option<i64>>(base_index + 5)?,
    })
}

pub(crate) fn map_bios_row(data_row: &Row) -> Result<Bios, DbError> {
    Ok(Bios {
        id: data_row.get::<i64>(0)?,
        vendor_id: data_row.get::<i64>(1)?,
        version: data_row.get::<String>(2)?,
        revision: data_row.get::<Option<String>>(3)?,
        firmware_revision: data_row.get::<Option<String>>(4)?,
        release_date: parse_optional_date(
            data_row.get::<Option<String>>(5)?,
            "bios.release_date",
        )?,
    })
}

pub(crate) fn map_device_row(data_row: &Row) -> Result<Device, DbError> {
    let bus_literal = data_row.get::<String>(5)?;
    let category_literal = data_row.get::<String>(8)?;

    Ok(Device {
        id: data_row.get::<i64>(0)?,
        identifier: data_row.get::<String>(1)?,
        name: data_row.get::<String>(2)?,
        subproduct_name: data_row.get::<String>(3)?,
        device_type: data_row.get::<String>(4)?,
        bus: bus_literal
            .parse::<BusType>()
            .map_err(DbError::MappingError)?,
        version: data_row.get::<String>(6)?,
        subsystem: data_row.get::<String>(7)?,
        category: category_literal
            .parse::<DeviceCategory>()
            .map_err(DbError::MappingError)?,
        codename: data_row.get::<String>(9)?,
        vendor_id: data_row.get::<i64>(10)?,
    })
}

/// Mapea un kernel unido por LEFT JOIN: id nulo implica reporte sin kernel.
pub(crate) fn map_optional_kernel_row(
    data_row: &Row,
    base_index: i32,
) -> Result<Option<Kernel>, DbError> {
    let kernel_id = data_row.get::<Option<i64>>(base_index)?;
    match kernel_id {
        None => Ok(None),
        Some(id) => Ok(Some(Kernel {
            id,
            name: data_row.get::<Option<String>>(base_index + 1)?,
            version: data_row.get::<String>(base_index + 2)?,
            signature: data_row.get::<Option<String>>(base_index + 3)?,
        })),
    }
}

pub(crate) fn map_kernel_row(data_row: &Row) -> Result<Kernel, DbError> {
    Ok(Kernel {
        id: data_row.get::<i64>(0)?,
        name: data_row.get::<Option<String>>(1)?,
        version: data_row.get::<String>(2)?,
        signature: data_row.get::<Option<String>>(3)?,
    })
}

pub(crate) fn map_report_row(data_row: &Row) -> Result<Report, DbError> {
    Ok(Report {
        id: data_row.get::<i64>(0)?,
        architecture: data_row.get::<String>(1)?,
        kernel_id: data_row.get::<Option<i64>>(2)?,
        bios_id: data_row.get::<Option<i64>>(3)?,
        certificate_id: data_row.get::<i64>(4)?,
    })
}

pub(crate) fn map_certificate_row(data_row: &Row) -> Result<Certificate, DbError> {
    Ok(Certificate {
        id: data_row.get::<i64>(0)?,
        name: data_row.get::<String>(1)?,
        machine_id: data_row.get::<i64>(2)?,
        release_id: data_row.get::<i64>(3)?,
        created_at: parse_optional_datetime(
            data_row.get::<Option<String>>(4)?,
            "certificates.created_at",
        )?,
        completed: parse_optional_datetime(
            data_row.get::<Option<String>>(5)?,
            "certificates.completed",
        )?,
    })
}

pub(crate) fn map_cpu_id_row(data_row: &Row) -> Result<CpuId, DbError> {
    Ok(CpuId {
        id: data_row.get::<i64>(0)?,
        id_pattern: data_row.get::<String>(1)?,
        codename: data_row.get::<String>(2)?,
    })
}
// FIN DEL ARCHIVO [libs/infra/db/src/repositories/mapping.rs]
