// [tests/mirror/libs/infra/c3/retry_schedule.test.rs]
/*!
 * =================================================================
 * APARATO: CERTIFICADOR DEL PLAN DE REINTENTOS (V3.1 - ZENITH)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L3-MIRROR
 * RESPONSABILIDAD: AUDITORÍA DEL BACKOFF, LA MATRIZ DE ESTADOS Y EL
 *                  SOBRE DE PAGINACIÓN
 * =================================================================
 */

use std::time::Duration;

use hwapi_infra_c3::client::{
    compute_backoff_delay, is_retryable_status, BACKOFF_MAX_DELAY_SECONDS,
    MAX_FETCH_ATTEMPTS,
};
use hwapi_infra_c3::response_models::{PageEnvelope, PublicCertificate};
use hwapi_infra_c3::urls::{limit_offset_suffix, C3UrlCatalog};
use reqwest::StatusCode;

#[test]
fn certify_exponential_backoff_schedule() {
    println!("\n🔁 [INICIO]: Auditing exponential backoff schedule...");

    // min(2 * 2^n, 60) segundos para n = 0..4.
    assert_eq!(compute_backoff_delay(0), Duration::from_secs(2));
    assert_eq!(compute_backoff_delay(1), Duration::from_secs(4));
    assert_eq!(compute_backoff_delay(2), Duration::from_secs(8));
    assert_eq!(compute_backoff_delay(3), Duration::from_secs(16));
    assert_eq!(compute_backoff_delay(4), Duration::from_secs(32));

    // El techo absoluto sella la progresión.
    assert_eq!(
        compute_backoff_delay(5),
        Duration::from_secs(BACKOFF_MAX_DELAY_SECONDS)
    );
    assert_eq!(
        compute_backoff_delay(30),
        Duration::from_secs(BACKOFF_MAX_DELAY_SECONDS)
    );

    assert_eq!(MAX_FETCH_ATTEMPTS, 5);
    println!("✅ [VEREDICTO]: Backoff schedule levelized.");
}

#[test]
fn certify_retryable_status_matrix() {
    for retryable_code in [429u16, 500, 502, 503, 504] {
        assert!(
            is_retryable_status(StatusCode::from_u16(retryable_code).expect("status")),
            "HTTP_{retryable_code} must be retryable"
        );
    }
    for terminal_code in [400u16, 401, 403, 404, 410, 422] {
        assert!(
            !is_retryable_status(StatusCode::from_u16(terminal_code).expect("status")),
            "HTTP_{terminal_code} must be terminal"
        );
    }
}

#[test]
fn certify_pagination_envelope_contract() {
    println!("\n🔁 [INICIO]: Auditing pagination envelope contract...");

    let wire_page = r#"{
        "count": 2,
        "next": "https://c3.example.com/api/v2/public-certificates/?pagination=limitoffset&limit=0&offset=1",
        "previous": null,
        "results": [{
            "canonical_id": "202401-28986",
            "vendor": "Dell",
            "platform": "Latitude 5480",
            "configuration": "i5",
            "created_at": "2024-05-01T00:00:00Z",
            "completed": null,
            "name": "2404-12345",
            "release": {
                "codename": "noble",
                "release": "24.04 LTS",
                "release_date": "2024-04-25",
                "supported_until": "2029-04-25",
                "i_version": 2404
            },
            "architecture": "amd64",
            "kernel_version": "6.8.0-31-generic",
            "bios": null,
            "firmware_revision": null
        }]
    }"#;

    let parsed_page: PageEnvelope<serde_json::Value> =
        serde_json::from_str(wire_page).expect("envelope parse");
    assert_eq!(parsed_page.count, 2);
    assert!(parsed_page.next.is_some());
    assert!(parsed_page.previous.is_none());
    assert_eq!(parsed_page.results.len(), 1);

    // El ítem crudo tipa al contrato del certificado público.
    let certificate_item: PublicCertificate =
        serde_json::from_value(parsed_page.results[0].clone()).expect("item parse");
    assert_eq!(certificate_item.canonical_id, "202401-28986");
    assert_eq!(certificate_item.release.release, "24.04 LTS");

    println!("✅ [VEREDICTO]: Envelope contract levelized.");
}

#[test]
fn certify_url_catalog_composition() {
    let url_catalog = C3UrlCatalog::new("https://c3.example.com");
    assert_eq!(limit_offset_suffix(0), "?pagination=limitoffset&limit=0");
    assert_eq!(
        url_catalog.public_certificates_url(),
        "https://c3.example.com/api/v2/public-certificates/?pagination=limitoffset&limit=0"
    );
    assert_eq!(
        url_catalog.public_device_instances_url(),
        "https://c3.example.com/api/v2/public-device-instances/?pagination=limitoffset&limit=1000"
    );
    assert_eq!(
        url_catalog.cpuids_url(),
        "https://c3.example.com/api/v2/cpuids/"
    );
}
// FIN DEL ARCHIVO [tests/mirror/libs/infra/c3/retry_schedule.test.rs]
