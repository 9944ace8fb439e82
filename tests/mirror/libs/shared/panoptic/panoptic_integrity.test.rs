// [tests/mirror/libs/shared/panoptic/panoptic_integrity.test.rs]
/*!
 * =================================================================
 * APARATO: CERTIFICADOR DEL OBSERVADOR PANÓPTICO (V2.0 - ZENITH)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L4-MIRROR
 * RESPONSABILIDAD: AUDITORÍA DE LA IGNICIÓN DE TRAZAS Y DEL HOOK
 * =================================================================
 */

use hwapi_shared_panoptic::init_tracing;

#[test]
fn certify_tracing_ignition_and_panic_shield() {
    println!("\n👁️  [INICIO]: Auditing observability ignition...");

    // La ignición debe ser exactamente una por proceso.
    init_tracing("panoptic_proving_grounds");

    tracing::info!("🧪 [PROVING_GROUNDS]: Trace emission after ignition.");
    tracing::warn!(signal = "audit", "🧪 [PROVING_GROUNDS]: Structured field emission.");

    // El hook de pánico quedó instalado sin desplazar el flujo normal.
    let shield_probe = std::panic::catch_unwind(|| {
        panic!("CONTROLLED_COLLAPSE_PROBE");
    });
    assert!(shield_probe.is_err());

    println!("✅ [VEREDICTO]: Observability strata levelized.");
}
// FIN DEL ARCHIVO [tests/mirror/libs/shared/panoptic/panoptic_integrity.test.rs]
