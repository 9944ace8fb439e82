// [tests/mirror/libs/infra/db/repository_integrity.test.rs]
/*!
 * =================================================================
 * APARATO: CERTIFICADOR DE INTEGRIDAD DE REPOSITORIOS (V3.1 - ZENITH)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L3-MIRROR
 * RESPONSABILIDAD: AUDITORÍA DE IDEMPOTENCIA GET-OR-CREATE Y
 *                  RESOLUCIÓN NORMALIZADA DE FABRICANTES
 *
 * # Nota técnica:
 * El motor usa 'mode=memory&cache=shared' para garantizar la
 * visibilidad del esquema entre sesiones de la misma corrida.
 * =================================================================
 */

use hwapi_domain_models::enums::{BusType, DeviceCategory};
use hwapi_infra_db::repositories::hardware::DeviceSeed;
use hwapi_infra_db::repositories::{
    CpuIdRepository, HardwareRepository, SoftwareRepository, VendorRepository,
};
use hwapi_infra_db::CorpusStoreClient;

#[tokio::test]
async fn certify_get_or_create_idempotence() {
    println!("\n🗄️  [INICIO]: Auditing get-or-create idempotence...");

    let store_client =
        CorpusStoreClient::connect("file:mem_repo_idem_v31?mode=memory&cache=shared", None)
            .await
            .expect("CRITICAL_FAULT: Failed to anchor in-memory corpus.");
    let corpus_session = store_client
        .open_session()
        .await
        .expect("POOL_FAULT: Unable to allocate session.");

    let vendor_repository = VendorRepository::new(&corpus_session);
    let software_repository = SoftwareRepository::new(&corpus_session);

    // 1. VENDOR: la segunda llamada retorna la misma fila, no creada.
    let (first_vendor, first_created) = vendor_repository
        .get_or_create_vendor("Dell")
        .await
        .expect("vendor upsert");
    let (second_vendor, second_created) = vendor_repository
        .get_or_create_vendor("Dell")
        .await
        .expect("vendor upsert");
    assert!(first_created);
    assert!(!second_created);
    assert_eq!(first_vendor.id, second_vendor.id);

    // 2. RELEASE: idempotencia sobre la llave (codename, release).
    let (first_release_id, release_created) = software_repository
        .get_or_create_release("noble", "24.04", None, None, Some(2404))
        .await
        .expect("release upsert");
    let (second_release_id, release_repeated) = software_repository
        .get_or_create_release("noble", "24.04", None, None, Some(2404))
        .await
        .expect("release upsert");
    assert!(release_created);
    assert!(!release_repeated);
    assert_eq!(first_release_id, second_release_id);

    // 3. DISPOSITIVO: idempotencia sobre la tupla de identidad completa.
    let hardware_repository = HardwareRepository::new(&corpus_session);
    let processor_seed = DeviceSeed {
        name: "i5-7300U".to_string(),
        version: "i5-7300U".to_string(),
        vendor_id: first_vendor.id,
        subsystem: String::new(),
        bus: BusType::Dmi,
        category: DeviceCategory::Processor,
        identifier: "dmi:0401".to_string(),
        subproduct_name: String::new(),
        device_type: String::new(),
        codename: String::new(),
    };
    let (first_device, device_created) = hardware_repository
        .get_or_create_device(&processor_seed)
        .await
        .expect("device upsert");
    let (second_device, device_repeated) = hardware_repository
        .get_or_create_device(&processor_seed)
        .await
        .expect("device upsert");
    assert!(device_created);
    assert!(!device_repeated);
    assert_eq!(first_device.id, second_device.id);

    // 4. DICCIONARIO CPUID: el patrón se pliega a minúsculas en la ingesta.
    let cpuid_repository = CpuIdRepository::new(&corpus_session);
    let (_, cpuid_created) = cpuid_repository
        .get_or_create_cpu_id("0xB0671", "Raptor Lake")
        .await
        .expect("cpuid upsert");
    let (_, cpuid_repeated) = cpuid_repository
        .get_or_create_cpu_id("0xb0671", "Raptor Lake")
        .await
        .expect("cpuid upsert");
    assert!(cpuid_created);
    assert!(!cpuid_repeated);

    let dictionary = cpuid_repository
        .get_all_cpu_ids()
        .await
        .expect("dictionary read");
    assert_eq!(dictionary.len(), 1);
    assert_eq!(dictionary[0].id_pattern, "0xb0671");

    println!("✅ [VEREDICTO]: Idempotence levelized.");
}

#[tokio::test]
async fn certify_normalized_vendor_resolution() {
    println!("\n🗄️  [INICIO]: Auditing normalized vendor resolution...");

    let store_client =
        CorpusStoreClient::connect("file:mem_repo_vendor_v31?mode=memory&cache=shared", None)
            .await
            .expect("CRITICAL_FAULT: Failed to anchor in-memory corpus.");
    let corpus_session = store_client
        .open_session()
        .await
        .expect("POOL_FAULT: Unable to allocate session.");

    let vendor_repository = VendorRepository::new(&corpus_session);
    vendor_repository
        .get_or_create_vendor("Dell")
        .await
        .expect("vendor upsert");

    // Igualdad insensible a caja sobre la forma normalizada.
    assert!(vendor_repository
        .get_vendor_by_name("DELL")
        .await
        .expect("lookup")
        .is_some());
    // El sufijo corporativo del consultante se descarta antes de comparar.
    assert!(vendor_repository
        .get_vendor_by_name("Dell Inc.")
        .await
        .expect("lookup")
        .is_some());
    // Un fabricante desconocido no empareja.
    assert!(vendor_repository
        .get_vendor_by_name("Unknown")
        .await
        .expect("lookup")
        .is_none());
    // Una llave vacía jamás degrada a emparejamiento universal.
    assert!(vendor_repository
        .get_vendor_by_name("Inc.")
        .await
        .expect("lookup")
        .is_none());

    // Resolución BIOS: 'Dell Inc.' reutiliza la fila 'Dell' existente.
    let (bios_vendor, bios_vendor_created) = vendor_repository
        .find_or_create_bios_vendor("Dell Inc.")
        .await
        .expect("bios vendor resolution");
    assert!(!bios_vendor_created);
    assert_eq!(bios_vendor.name, "Dell");

    println!("✅ [VEREDICTO]: Vendor resolution levelized.");
}

#[tokio::test]
async fn certify_processor_codename_sealing_discipline() {
    println!("\n🗄️  [INICIO]: Auditing processor codename sealing...");

    let store_client =
        CorpusStoreClient::connect("file:mem_repo_seal_v31?mode=memory&cache=shared", None)
            .await
            .expect("CRITICAL_FAULT: Failed to anchor in-memory corpus.");
    let corpus_session = store_client
        .open_session()
        .await
        .expect("POOL_FAULT: Unable to allocate session.");

    let vendor_repository = VendorRepository::new(&corpus_session);
    let hardware_repository = HardwareRepository::new(&corpus_session);

    let (intel_vendor, _) = vendor_repository
        .get_or_create_vendor("Intel Corp.")
        .await
        .expect("vendor upsert");

    let (processor, _) = hardware_repository
        .get_or_create_device(&DeviceSeed {
            name: "i5-7300U".to_string(),
            version: "i5-7300U".to_string(),
            vendor_id: intel_vendor.id,
            subsystem: String::new(),
            bus: BusType::Dmi,
            category: DeviceCategory::Processor,
            identifier: "dmi:0401".to_string(),
            subproduct_name: String::new(),
            device_type: String::new(),
            codename: String::new(),
        })
        .await
        .expect("device upsert");

    // El codename vacío admite el primer sellado.
    assert!(hardware_repository
        .update_processor_codename(processor.id, "Raptor Lake")
        .await
        .expect("first sealing"));

    // Un codename definitivo ya no se sobreescribe.
    assert!(!hardware_repository
        .update_processor_codename(processor.id, "Amber Lake")
        .await
        .expect("second sealing"));

    let sealed_processor = hardware_repository
        .get_cpu_for_machine(-1)
        .await
        .expect("orphan lookup");
    assert!(sealed_processor.is_none(), "no machine graph was seeded");

    println!("✅ [VEREDICTO]: Sealing discipline levelized.");
}
// FIN DEL ARCHIVO [tests/mirror/libs/infra/db/repository_integrity.test.rs]
