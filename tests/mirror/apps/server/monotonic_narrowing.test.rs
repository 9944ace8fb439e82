// [tests/mirror/apps/server/monotonic_narrowing.test.rs]
/*!
 * =================================================================
 * APARATO: CERTIFICADOR DE ESTRECHAMIENTO MONOTÓNICO (V3.1 - ZENITH)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L1-MIRROR
 * RESPONSABILIDAD: AUDITORÍA DEL ORDEN DE DEGRADACIÓN DEL VEREDICTO
 *
 * # Propiedad auditada:
 * Con el corpus constante, una petición Certified degrada a Certified
 * Image Exists al variar solo la release; degrada a Related al variar
 * además la CPU; y degrada a Not Seen al variar además la placa o el
 * BIOS. Nunca salta estratos en el orden inverso.
 * =================================================================
 */

use chrono::TimeZone;
use chrono::Utc;
use libsql::Connection;

use hwapi_domain_models::enums::{BusType, DeviceCategory};
use hwapi_domain_models::requests::{
    BiosProbe, BoardProbe, CertificationStatusRequest, KernelProbe, OsProbe, ProcessorProbe,
};
use hwapi_domain_models::responses::CertificationStatusResponse;
use hwapi_infra_db::repositories::hardware::DeviceSeed;
use hwapi_infra_db::repositories::{
    CertificateRepository, CpuIdRepository, HardwareRepository, SoftwareRepository,
    VendorRepository,
};
use hwapi_infra_db::CorpusStoreClient;
use hwapi_server::services::CertificationDecisionEngine;

async fn seed_certification_corpus(corpus_session: &Connection) {
    let vendor_repository = VendorRepository::new(corpus_session);
    let software_repository = SoftwareRepository::new(corpus_session);
    let hardware_repository = HardwareRepository::new(corpus_session);
    let certificate_repository = CertificateRepository::new(corpus_session);
    let cpuid_repository = CpuIdRepository::new(corpus_session);

    let (dell, _) = vendor_repository.get_or_create_vendor("Dell").await.expect("vendor");
    let (intel, _) = vendor_repository
        .get_or_create_vendor("Intel Corp.")
        .await
        .expect("vendor");

    let (platform, _) = software_repository
        .get_or_create_platform("Latitude 5480", dell.id)
        .await
        .expect("platform");
    let (configuration, _) = software_repository
        .get_or_create_configuration("i5", platform.id)
        .await
        .expect("configuration");
    let (machine, _) = hardware_repository
        .get_or_create_machine("202401-28986", configuration.id)
        .await
        .expect("machine");

    let (noble_id, _) = software_repository
        .get_or_create_release("noble", "24.04", None, None, Some(2404))
        .await
        .expect("release");
    let (kernel, _) = software_repository
        .get_or_create_kernel("6.8.0-31-generic")
        .await
        .expect("kernel");
    let (bios_id, _) = hardware_repository
        .get_or_create_bios(dell.id, "1.0", Some("A"), None, None)
        .await
        .expect("bios");

    let (certificate_id, _) = certificate_repository
        .get_or_create_certificate(
            "2404-12345",
            machine.id,
            noble_id,
            Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).single(),
            None,
        )
        .await
        .expect("certificate");
    let (report, _) = certificate_repository
        .get_or_create_report("amd64", Some(kernel.id), Some(bios_id), certificate_id)
        .await
        .expect("report");

    let (board, _) = hardware_repository
        .get_or_create_device(&DeviceSeed {
            name: "BRD".to_string(),
            version: "v1".to_string(),
            vendor_id: dell.id,
            subsystem: String::new(),
            bus: BusType::Dmi,
            category: DeviceCategory::Board,
            identifier: "dmi:board".to_string(),
            subproduct_name: String::new(),
            device_type: String::new(),
            codename: String::new(),
        })
        .await
        .expect("board");
    let (processor, _) = hardware_repository
        .get_or_create_device(&DeviceSeed {
            name: "i5-7300U".to_string(),
            version: "i5-7300U".to_string(),
            vendor_id: intel.id,
            subsystem: String::new(),
            bus: BusType::Dmi,
            category: DeviceCategory::Processor,
            identifier: "dmi:0401".to_string(),
            subproduct_name: String::new(),
            device_type: String::new(),
            codename: "Raptor Lake".to_string(),
        })
        .await
        .expect("processor");

    hardware_repository
        .attach_device_to_report(report.id, board.id)
        .await
        .expect("attach board");
    hardware_repository
        .attach_device_to_report(report.id, processor.id)
        .await
        .expect("attach processor");

    cpuid_repository
        .get_or_create_cpu_id("0xb0671", "Raptor Lake")
        .await
        .expect("cpuid");
}

fn build_full_match_request() -> CertificationStatusRequest {
    CertificationStatusRequest {
        vendor: "Dell".to_string(),
        model: "Latitude 5480".to_string(),
        architecture: "amd64".to_string(),
        board: BoardProbe {
            manufacturer: "Dell".to_string(),
            product_name: "BRD".to_string(),
            version: "v1".to_string(),
        },
        bios: Some(BiosProbe {
            vendor: "Dell".to_string(),
            version: "1.0".to_string(),
            revision: None,
            firmware_revision: None,
            release_date: None,
        }),
        os: OsProbe {
            distributor: "Ubuntu".to_string(),
            version: "24.04".to_string(),
            codename: "noble".to_string(),
            kernel: KernelProbe {
                name: None,
                version: "6.8.0-31-generic".to_string(),
                signature: None,
            },
        },
        processor: ProcessorProbe {
            identifier: Some(vec![0x71, 0x06, 0x0B]),
            frequency: 2600,
            manufacturer: "Intel Corp.".to_string(),
            version: "i5-7300U".to_string(),
        },
        chassis: None,
        gpu: None,
        audio: None,
        video: None,
        network: None,
        wireless: None,
        pci_peripherals: None,
        usb_peripherals: None,
    }
}

#[tokio::test]
async fn certify_monotonic_verdict_narrowing() {
    println!("\n⚖️  [INICIO]: Auditing monotonic verdict narrowing...");

    let store_client =
        CorpusStoreClient::connect("file:mem_narrowing_v31?mode=memory&cache=shared", None)
            .await
            .expect("CRITICAL_FAULT: Failed to anchor in-memory corpus.");
    let corpus_session = store_client
        .open_session()
        .await
        .expect("POOL_FAULT: Unable to allocate session.");

    seed_certification_corpus(&corpus_session).await;
    let decision_engine = CertificationDecisionEngine::new(&corpus_session);

    // ESTRATO 0: coincidencia completa -> Certified.
    let verdict = decision_engine
        .classify(&build_full_match_request())
        .await
        .expect("classification");
    assert!(matches!(verdict, CertificationStatusResponse::Certified(_)));

    // ESTRATO 1: solo la release difiere -> Certified Image Exists.
    let mut release_variant = build_full_match_request();
    release_variant.os.version = "20.04".to_string();
    release_variant.os.codename = "focal".to_string();
    let verdict = decision_engine
        .classify(&release_variant)
        .await
        .expect("classification");
    assert!(matches!(
        verdict,
        CertificationStatusResponse::CertifiedImageExists(_)
    ));

    // ESTRATO 2: además difiere la CPU -> Related Certified System Exists.
    let mut cpu_variant = release_variant.clone();
    cpu_variant.processor.identifier = Some(vec![0x71, 0x06, 0x08]);
    let verdict = decision_engine
        .classify(&cpu_variant)
        .await
        .expect("classification");
    assert!(matches!(
        verdict,
        CertificationStatusResponse::RelatedCertifiedSystemExists(_)
    ));

    // ESTRATO 3a: además difiere la placa -> Not Seen.
    let mut board_variant = cpu_variant.clone();
    board_variant.board.product_name = "Different".to_string();
    let verdict = decision_engine
        .classify(&board_variant)
        .await
        .expect("classification");
    assert!(matches!(verdict, CertificationStatusResponse::NotSeen));

    // ESTRATO 3b: o difiere el BIOS -> Not Seen.
    let mut bios_variant = cpu_variant.clone();
    bios_variant.bios = Some(BiosProbe {
        vendor: "Dell".to_string(),
        version: "9.9".to_string(),
        revision: None,
        firmware_revision: None,
        release_date: None,
    });
    let verdict = decision_engine
        .classify(&bios_variant)
        .await
        .expect("classification");
    assert!(matches!(verdict, CertificationStatusResponse::NotSeen));

    println!("✅ [VEREDICTO]: Monotonic narrowing levelized.");
}
// FIN DEL ARCHIVO [tests/mirror/apps/server/monotonic_narrowing.test.rs]
