// [apps/server/src/kernel.rs]
/*!
 * =================================================================
 * APARATO: SERVER KERNEL (V3.1 - COMPOSITION ROOT)
 * CLASIFICACIÓN: COMPOSITION ROOT (ESTRATO L1-APP)
 * RESPONSABILIDAD: IGNICIÓN DEL CORPUS Y DEL SERVIDOR HTTP
 *
 * # Orden de ignición:
 * El enlace al corpus (y su esquema) se establece ANTES de abrir el
 * socket TCP, previniendo peticiones contra un Ledger aún no nivelado.
 * =================================================================
 */

use crate::routes::create_certification_router;
use crate::state::AppState;
use hwapi_infra_db::CorpusStoreClient;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tracing::{info, instrument};

pub struct ServerKernel {
    pub server_network_port: u16,
    pub application_shared_state: AppState,
}

impl ServerKernel {
    /**
     * Establece el enlace al corpus y construye el estado compartido.
     */
    #[instrument(skip(database_access_token))]
    pub async fn ignite(
        database_connection_url: &str,
        database_access_token: Option<String>,
        listening_port: u16,
    ) -> Self {
        let database_client =
            CorpusStoreClient::connect(database_connection_url, database_access_token)
                .await
                .expect("FATAL: Corpus link collapse. Ignition aborted.");

        Self {
            server_network_port: listening_port,
            application_shared_state: AppState::new(database_client),
        }
    }

    /**
     * Abre el socket TCP y sirve la matriz de rutas hasta la señal de
     * apagado del proceso.
     */
    pub async fn launch_service_operations(self) {
        let certification_router =
            create_certification_router(self.application_shared_state.clone());

        let listening_address = SocketAddr::new(
            IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            self.server_network_port,
        );

        let tcp_listener = tokio::net::TcpListener::bind(listening_address)
            .await
            .expect("FATAL: TCP socket binding collapse.");

        info!(
            "🛰️  [HWAPI_ONLINE]: Certification service listening on [{}]",
            listening_address
        );

        axum::serve(tcp_listener, certification_router)
            .await
            .expect("FATAL: HTTP service collapse.");
    }
}
// FIN DEL ARCHIVO [apps/server/src/kernel.rs]
