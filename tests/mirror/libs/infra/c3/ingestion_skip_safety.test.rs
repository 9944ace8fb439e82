// [tests/mirror/libs/infra/c3/ingestion_skip_safety.test.rs]
/*!
 * =================================================================
 * APARATO: CERTIFICADOR DE SKIP-SAFETY (V3.1 - ZENITH)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L3-MIRROR
 * RESPONSABILIDAD: AUDITORÍA DE AISLAMIENTO DE ÍTEMS DEFECTUOSOS
 *
 * # Contrato auditado:
 * Un ítem de dispositivo que referencia una máquina o un certificado
 * desconocidos se degrada a MissingReference aislable al ítem y NO
 * escribe fila alguna en el Ledger.
 * =================================================================
 */

use chrono::TimeZone;
use chrono::Utc;
use libsql::Connection;

use hwapi_domain_models::enums::{BusType, DeviceCategory};
use hwapi_infra_c3::response_models::{
    C3Bios, C3Device, C3Release, PublicCertificate, PublicDeviceInstance,
};
use hwapi_infra_c3::{C3Client, C3UrlCatalog, CorpusImporter, ImporterError};
use hwapi_infra_db::CorpusStoreClient;

async fn count_rows(corpus_session: &Connection, table_name: &str) -> i64 {
    let mut rows = corpus_session
        .query(&format!("SELECT COUNT(*) FROM {table_name}"), ())
        .await
        .expect("count query");
    rows.next()
        .await
        .expect("row")
        .expect("row")
        .get(0)
        .expect("value")
}

fn build_orphan_device_instance(machine_canonical_id: &str, certificate_name: &str) -> PublicDeviceInstance {
    PublicDeviceInstance {
        machine_canonical_id: machine_canonical_id.to_string(),
        certificate_name: certificate_name.to_string(),
        device: C3Device {
            name: Some("Wireless 8265 / 8275".to_string()),
            subproduct_name: None,
            vendor: "Intel Corp.".to_string(),
            device_type: None,
            bus: BusType::Pci,
            identifier: "8086:24fd".to_string(),
            subsystem: None,
            version: None,
            category: Some(DeviceCategory::Wireless),
            codename: None,
        },
        driver_name: Some("iwlwifi".to_string()),
        cpu_codename: None,
    }
}

#[tokio::test]
async fn certify_unknown_machine_leaves_store_untouched() {
    println!("\n🛡️  [INICIO]: Auditing skip-safety on unknown machine...");

    let store_client = CorpusStoreClient::connect(
        "file:mem_skip_machine_v31?mode=memory&cache=shared",
        None,
    )
    .await
    .expect("CRITICAL_FAULT: Failed to anchor in-memory corpus.");
    let importer = CorpusImporter::new(
        C3Client::new(C3UrlCatalog::new("http://127.0.0.1:9")).expect("client"),
        store_client.clone(),
    );

    let ingestion_outcome = importer
        .ingest_device_instance_item(&build_orphan_device_instance("000000-0000", "9999-1"))
        .await;

    let item_fault = ingestion_outcome.expect_err("orphan item must be rejected");
    assert!(matches!(item_fault, ImporterError::MissingReference(_)));
    assert!(item_fault.is_item_scoped());

    let corpus_session = store_client.open_session().await.expect("session");
    for table_name in ["devices", "vendors", "reports", "device_report_association"] {
        assert_eq!(
            count_rows(&corpus_session, table_name).await,
            0,
            "table '{table_name}' must remain untouched"
        );
    }

    println!("✅ [VEREDICTO]: Unknown machine isolated without writes.");
}

#[tokio::test]
async fn certify_unknown_certificate_leaves_store_untouched() {
    println!("\n🛡️  [INICIO]: Auditing skip-safety on unknown certificate...");

    let store_client = CorpusStoreClient::connect(
        "file:mem_skip_cert_v31?mode=memory&cache=shared",
        None,
    )
    .await
    .expect("CRITICAL_FAULT: Failed to anchor in-memory corpus.");
    let importer = CorpusImporter::new(
        C3Client::new(C3UrlCatalog::new("http://127.0.0.1:9")).expect("client"),
        store_client.clone(),
    );

    // La máquina existe vía un certificado legítimo previo.
    importer
        .ingest_certificate_item(&PublicCertificate {
            canonical_id: "202401-28986".to_string(),
            vendor: "Dell".to_string(),
            platform: "Latitude 5480".to_string(),
            configuration: "i5".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).single(),
            completed: None,
            name: "2404-12345".to_string(),
            release: C3Release {
                codename: "noble".to_string(),
                release: "24.04 LTS".to_string(),
                release_date: None,
                supported_until: None,
                i_version: Some(2404),
            },
            architecture: Some("amd64".to_string()),
            kernel_version: None,
            bios: Some(C3Bios {
                name: "A08".to_string(),
                vendor: "Dell Inc.".to_string(),
                version: "1.0".to_string(),
                firmware_type: None,
                release_date: None,
            }),
            firmware_revision: None,
        })
        .await
        .expect("seed certificate");

    let corpus_session = store_client.open_session().await.expect("session");
    let devices_before = count_rows(&corpus_session, "devices").await;
    let associations_before = count_rows(&corpus_session, "device_report_association").await;

    let ingestion_outcome = importer
        .ingest_device_instance_item(&build_orphan_device_instance(
            "202401-28986",
            "9999-unknown",
        ))
        .await;

    let item_fault = ingestion_outcome.expect_err("orphan certificate must be rejected");
    assert!(matches!(item_fault, ImporterError::MissingReference(_)));
    assert!(item_fault.is_item_scoped());

    assert_eq!(count_rows(&corpus_session, "devices").await, devices_before);
    assert_eq!(
        count_rows(&corpus_session, "device_report_association").await,
        associations_before
    );

    println!("✅ [VEREDICTO]: Unknown certificate isolated without writes.");
}
// FIN DEL ARCHIVO [tests/mirror/libs/infra/c3/ingestion_skip_safety.test.rs]
