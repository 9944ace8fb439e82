// [tests/mirror/libs/domain/models/status_union_serialization.test.rs]
/*!
 * =================================================================
 * APARATO: CERTIFICADOR DE PARIDAD JSON DEL VEREDICTO (V2.1 - ZENITH)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L2-MIRROR
 * RESPONSABILIDAD: AUDITORÍA DE LA UNIÓN DISCRIMINADA 'status'
 *
 * # Contrato auditado:
 * El discriminante viaja embebido con los literales exactos del
 * protocolo. La carga relacionada porta los grupos de dispositivos en
 * su default (null / lista vacía).
 * =================================================================
 */

use hwapi_domain_models::responses::{
    AvailableRelease, BiosSummary, BoardSummary, CertificationStatusResponse,
    CertifiedSystemPayload, KernelPackageSummary, RelatedCertifiedSystemPayload,
};

fn build_reference_payload() -> CertifiedSystemPayload {
    CertifiedSystemPayload {
        architecture: "amd64".to_string(),
        board: BoardSummary {
            manufacturer: "Dell".to_string(),
            product_name: "BRD".to_string(),
            version: "v1".to_string(),
        },
        bios: Some(BiosSummary {
            vendor: "Dell".to_string(),
            version: "1.0".to_string(),
            revision: Some("A".to_string()),
            firmware_revision: None,
            release_date: Some("04/25/2024".to_string()),
        }),
        chassis: None,
        available_releases: vec![AvailableRelease {
            distributor: "Ubuntu".to_string(),
            version: "24.04".to_string(),
            codename: "noble".to_string(),
            kernel: Some(KernelPackageSummary {
                name: None,
                version: "6.8.0-31-generic".to_string(),
                signature: None,
                loaded_modules: Vec::new(),
            }),
        }],
    }
}

#[test]
fn certify_not_seen_literal_tag() {
    let serialized = serde_json::to_value(CertificationStatusResponse::NotSeen)
        .expect("serialization must not collapse");
    assert_eq!(serialized, serde_json::json!({ "status": "Not Seen" }));
}

#[test]
fn certify_certified_tag_and_embedded_payload() {
    println!("\n🧪 [PROVING_GROUNDS]: Validating embedded discriminant parity...");

    let serialized = serde_json::to_value(CertificationStatusResponse::Certified(
        build_reference_payload(),
    ))
    .expect("serialization must not collapse");

    assert_eq!(serialized["status"], "Certified");
    assert_eq!(serialized["architecture"], "amd64");
    assert_eq!(serialized["board"]["product_name"], "BRD");
    assert_eq!(serialized["bios"]["release_date"], "04/25/2024");
    assert!(serialized["chassis"].is_null());
    assert_eq!(serialized["available_releases"][0]["distributor"], "Ubuntu");
    assert_eq!(
        serialized["available_releases"][0]["kernel"]["loaded_modules"],
        serde_json::json!([])
    );
}

#[test]
fn certify_certified_image_exists_tag() {
    let serialized = serde_json::to_value(CertificationStatusResponse::CertifiedImageExists(
        build_reference_payload(),
    ))
    .expect("serialization must not collapse");
    assert_eq!(serialized["status"], "Certified Image Exists");
}

#[test]
fn certify_related_payload_device_group_defaults() {
    let related_payload =
        RelatedCertifiedSystemPayload::from_certified_payload(build_reference_payload());
    let serialized = serde_json::to_value(
        CertificationStatusResponse::RelatedCertifiedSystemExists(related_payload),
    )
    .expect("serialization must not collapse");

    assert_eq!(serialized["status"], "Related Certified System Exists");
    for device_group in ["gpu", "audio", "video", "network", "wireless"] {
        assert!(
            serialized[device_group].is_null(),
            "device group '{device_group}' must default to null"
        );
    }
    assert_eq!(serialized["pci_peripherals"], serde_json::json!([]));
    assert_eq!(serialized["usb_peripherals"], serde_json::json!([]));
    assert_eq!(serialized["available_releases"][0]["codename"], "noble");
}

#[test]
fn certify_union_deserialization_roundtrip() {
    let original = CertificationStatusResponse::Certified(build_reference_payload());
    let wire_form = serde_json::to_string(&original).expect("serialize");
    let recovered: CertificationStatusResponse =
        serde_json::from_str(&wire_form).expect("deserialize");
    assert_eq!(recovered, original);
    assert_eq!(recovered.status_literal(), "Certified");
}
// FIN DEL ARCHIVO [tests/mirror/libs/domain/models/status_union_serialization.test.rs]
