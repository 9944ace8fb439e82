// [libs/infra/db/src/schema.rs]
/**
 * =================================================================
 * APARATO: CORPUS DATABASE SCHEMA (V3.0 - KNOWLEDGE STRATA)
 * CLASIFICACIÓN: INFRASTRUCTURE LAYER (ESTRATO L3)
 * RESPONSABILIDAD: GÉNESIS IDEMPOTENTE DEL GRAFO DE CERTIFICACIÓN
 *
 * VISION HIPER-HOLÍSTICA:
 * 1. ENTITY GRAPH: Doce tablas materializan el DAG Vendor/Release ->
 *    Platform -> Configuration -> Machine -> Certificate -> Report,
 *    con la asociación N:M Report <-> Device y el diccionario CPUID.
 * 2. BUSINESS KEYS: Las llaves de negocio se sellan con restricciones
 *    UNIQUE compuestas; el canonical_id de Machine es único global.
 * 3. PERFORMANCE: Índices de aceleración sobre los recorridos del
 *    motor de decisión (identifier, canonical_id, certificados).
 * =================================================================
 */

use libsql::Connection;
use tracing::{debug, info, instrument};

/**
 * ESTRATO 1: SOLIDIFICACIÓN (Génesis de Tablas)
 * Define las entidades del corpus de certificación.
 */
const CORPUS_TABLES: &[(&str, &str)] = &[
    ("TABLE_VENDORS", r#"
        CREATE TABLE IF NOT EXISTS vendors (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE
        );
    "#),
    ("TABLE_PLATFORMS", r#"
        CREATE TABLE IF NOT EXISTS platforms (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            vendor_id INTEGER NOT NULL REFERENCES vendors(id),
            UNIQUE(name, vendor_id)
        );
    "#),
    ("TABLE_CONFIGURATIONS", r#"
        CREATE TABLE IF NOT EXISTS configurations (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            platform_id INTEGER NOT NULL REFERENCES platforms(id),
            UNIQUE(name, platform_id)
        );
    "#),
    ("TABLE_MACHINES", r#"
        CREATE TABLE IF NOT EXISTS machines (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            canonical_id TEXT NOT NULL UNIQUE,
            configuration_id INTEGER NOT NULL REFERENCES configurations(id)
        );
    "#),
    ("TABLE_RELEASES", r#"
        CREATE TABLE IF NOT EXISTS releases (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            codename TEXT NOT NULL,
            release TEXT NOT NULL,
            release_date TEXT,
            supported_until TEXT,
            i_version INTEGER,
            UNIQUE(codename, release)
        );
    "#),
    ("TABLE_CERTIFICATES", r#"
        CREATE TABLE IF NOT EXISTS certificates (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            machine_id INTEGER NOT NULL REFERENCES machines(id),
            release_id INTEGER NOT NULL REFERENCES releases(id),
            created_at TEXT,
            completed TEXT,
            UNIQUE(name, machine_id)
        );
    "#),
    ("TABLE_KERNELS", r#"
        CREATE TABLE IF NOT EXISTS kernels (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT,
            version TEXT NOT NULL,
            signature TEXT
        );
    "#),
    ("TABLE_BIOS", r#"
        CREATE TABLE IF NOT EXISTS bios (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            vendor_id INTEGER NOT NULL REFERENCES vendors(id),
            version TEXT NOT NULL,
            revision TEXT,
            firmware_revision TEXT,
            release_date TEXT
        );
    "#),
    ("TABLE_REPORTS", r#"
        CREATE TABLE IF NOT EXISTS reports (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            architecture TEXT NOT NULL DEFAULT '',
            kernel_id INTEGER REFERENCES kernels(id),
            bios_id INTEGER REFERENCES bios(id),
            certificate_id INTEGER NOT NULL REFERENCES certificates(id)
        );
    "#),
    ("TABLE_DEVICES", r#"
        CREATE TABLE IF NOT EXISTS devices (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            identifier TEXT NOT NULL,
            name TEXT NOT NULL,
            subproduct_name TEXT NOT NULL DEFAULT '',
            device_type TEXT NOT NULL DEFAULT '',
            bus TEXT NOT NULL,
            version TEXT NOT NULL DEFAULT '',
            subsystem TEXT NOT NULL DEFAULT '',
            category TEXT NOT NULL,
            codename TEXT NOT NULL DEFAULT '',
            vendor_id INTEGER NOT NULL REFERENCES vendors(id),
            UNIQUE(name, version, vendor_id, subsystem, bus, category)
        );
    "#),
    ("TABLE_DEVICE_REPORT_ASSOCIATION", r#"
        CREATE TABLE IF NOT EXISTS device_report_association (
            report_id INTEGER NOT NULL REFERENCES reports(id),
            device_id INTEGER NOT NULL REFERENCES devices(id),
            PRIMARY KEY (report_id, device_id)
        );
    "#),
    ("TABLE_CPU_IDS", r#"
        CREATE TABLE IF NOT EXISTS cpu_ids (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            id_pattern TEXT NOT NULL,
            codename TEXT NOT NULL,
            UNIQUE(id_pattern, codename)
        );
    "#),
];

/**
 * ESTRATO 2: ENDURECIMIENTO (Índices de Aceleración)
 * Optimiza los recorridos del motor de decisión y del importador.
 */
const ACCELERATION_INDEXES: &[(&str, &str)] = &[
    ("IDX_DEVICES_IDENTIFIER", "CREATE INDEX IF NOT EXISTS idx_devices_identifier ON devices(identifier);"),
    ("IDX_MACHINES_CANONICAL", "CREATE INDEX IF NOT EXISTS idx_machines_canonical_id ON machines(canonical_id);"),
    ("IDX_CERTIFICATES_NAME_MACHINE", "CREATE INDEX IF NOT EXISTS idx_certificates_name_machine ON certificates(name, machine_id);"),
    ("IDX_REPORTS_CERTIFICATE", "CREATE INDEX IF NOT EXISTS idx_reports_certificate ON reports(certificate_id);"),
    ("IDX_ASSOCIATION_DEVICE", "CREATE INDEX IF NOT EXISTS idx_association_device ON device_report_association(device_id);"),
];

/**
 * Aplica el esquema completo del corpus de forma idempotente.
 * Seguro de re-ejecutar en cada ignición del cliente.
 */
#[instrument(skip(connection))]
pub async fn apply_full_corpus_schema(connection: &Connection) -> Result<(), libsql::Error> {
    for (table_label, table_ddl) in CORPUS_TABLES {
        debug!("🧱 [SCHEMA]: Solidifying {}", table_label);
        connection.execute(table_ddl, ()).await?;
    }

    for (index_label, index_ddl) in ACCELERATION_INDEXES {
        debug!("⚡ [SCHEMA]: Hardening {}", index_label);
        connection.execute(index_ddl, ()).await?;
    }

    info!("🛡️ [SCHEMA]: Corpus strata levelized ({} tables, {} indexes).",
        CORPUS_TABLES.len(), ACCELERATION_INDEXES.len());
    Ok(())
}
// FIN DEL ARCHIVO [libs/infra/db/src/schema.rs]
