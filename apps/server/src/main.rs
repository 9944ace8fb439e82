// [apps/server/src/main.rs]
/*!
 * =================================================================
 * APARATO: HWAPI SERVER ENTRY POINT (V3.1 - GOLD MASTER)
 * CLASIFICACIÓN: APPLICATION SHELL (ESTRATO L1-APP)
 * RESPONSABILIDAD: BOOTSTRAP DE ENTORNO, TRAZAS Y RUNTIME
 *
 * # Coordenadas de entorno:
 * - DB_URL: cadena de conexión del corpus (obligatoria).
 * - PORT: puerto de escucha (default 8080).
 * =================================================================
 */

use hwapi_server::prelude::*;

use dotenvy::dotenv;
use hwapi_shared_panoptic::init_tracing;
use tracing::info;

/**
 * Punto de ignición del binario del servicio de certificación.
 */
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. CARGA DE ENTORNO
    dotenv().ok();

    // 2. INICIALIZACIÓN DE OBSERVABILIDAD (PANOPTIC)
    init_tracing("hwapi_server");

    // 3. CONSTRUCCIÓN DEL RUNTIME
    let service_runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    service_runtime.block_on(async {
        info!("🛰️  [HWAPI]: Ignition sequence starting...");

        // 4. ADQUISICIÓN DE COORDENADAS DE ENTORNO
        let database_connection_url = std::env::var("DB_URL")
            .expect("CRITICAL_FAULT: DB_URL not defined in runtime environment.");

        let database_access_token = std::env::var("DB_AUTH_TOKEN").ok();

        let listening_network_port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080);

        // 5. IGNICIÓN DEL KERNEL Y SERVICIO
        let kernel_instance = ServerKernel::ignite(
            &database_connection_url,
            database_access_token,
            listening_network_port,
        )
        .await;

        kernel_instance.launch_service_operations().await;
        Ok(())
    })
}
// FIN DEL ARCHIVO [apps/server/src/main.rs]
