// [libs/shared/panoptic/src/lib.rs]
/*!
 * =================================================================
 * APARATO: PANOPTIC NEURAL OBSERVER (V2.1 - GOLD MASTER)
 * CLASIFICACIÓN: SHARED UTILITY (ESTRATO L4)
 * RESPONSABILIDAD: GESTIÓN DE TELEMETRÍA, TRAZADO Y CAPTURA DE PÁNICOS
 *
 * VISION HIPER-HOLÍSTICA:
 * 1. DUAL MODE: Logs interactivos compactos en desarrollo, tramas JSON
 *    planas en producción para la ingesta del colector de despliegue.
 * 2. SOVEREIGN FILTER: Prioriza los estratos 'hwapi_*' y silencia el
 *    ruido de infraestructura (Tower, Hyper, libSQL).
 * 3. PHOENIX SHIELD: Hook de pánico global con volcado forense de
 *    coordenadas de estrato y payload.
 * =================================================================
 */

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt as formatting_layer, EnvFilter};
use tracing::{error, info};
use std::panic;

/// Inicializa el sistema de trazas del servicio con blindaje de pánicos.
///
/// # Comportamiento:
/// - Desarrollo: logs compactos con resaltado y sin target.
/// - Producción: estructura JSON plana con eventos aplanados.
///
/// # Panics:
/// Si otro suscriptor global ya ha sido inicializado en el runtime.
pub fn init_tracing(service_nominal_identifier: &str) {
    // 1. CONFIGURACIÓN DEL FILTRO DINÁMICO
    let environmental_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            format!(
                "{}={level},hwapi_infra_db={level},hwapi_infra_c3={level},tower_http=warn,hyper=warn,libsql=error",
                service_nominal_identifier,
                level = if cfg!(debug_assertions) { "debug" } else { "info" }
            ).into()
        });

    let is_production_strata = !cfg!(debug_assertions);

    // 2. CONSTRUCCIÓN DE LA ARQUITECTURA DE SUSCRIPCIÓN (Dual Mode)
    if is_production_strata {
        tracing_subscriber::registry()
            .with(environmental_filter)
            .with(formatting_layer::layer().json().flatten_event(true))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(environmental_filter)
            .with(formatting_layer::layer().compact().with_target(false))
            .init();
    }

    // 3. PROTOCOLO PHOENIX SHIELD (Global Panic Hook)
    // Captura colapsos en hilos secundarios antes de la defunción del proceso.
    let service_id_snapshot = service_nominal_identifier.to_string();

    panic::set_hook(Box::new(move |panic_metadata| {
        let panic_location = panic_metadata.location()
            .map(|location| format!("{}:{}:{}", location.file(), location.line(), location.column()))
            .unwrap_or_else(|| "UNKNOWN_STRATA_COORDINATES".to_string());

        let panic_payload_message = panic_metadata.payload()
            .downcast_ref::<&str>()
            .copied()
            .or_else(|| panic_metadata.payload().downcast_ref::<String>().map(|s| s.as_str()))
            .unwrap_or("UNDEFINED_KERNEL_COLLAPSE_PAYLOAD");

        error!(
            target: "panic_monitor",
            service = %service_id_snapshot,
            estrato = %panic_location,
            "🔥 [CRITICAL_PANIC]: Thread terminated abruptly. Analysis: {}",
            panic_payload_message
        );
    }));

    info!(
        "👁️  [PANOPTIC_ONLINE]: Observability strata levelized for [{}]. Phoenix Shield ACTIVE.",
        service_nominal_identifier
    );
}
// FIN DEL ARCHIVO [libs/shared/panoptic/src/lib.rs]
