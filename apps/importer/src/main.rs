// [apps/importer/src/main.rs]
/*!
 * =================================================================
 * APARATO: CORPUS IMPORTER SHELL (V3.1 - GOLD MASTER)
 * CLASIFICACIÓN: APPLICATION LAYER (ENTRY POINT)
 * RESPONSABILIDAD: ORQUESTACIÓN DE ARGUMENTOS Y DISPARO DE LA INGESTA
 *
 * # Cancelación:
 * La interrupción del proceso aborta en el siguiente límite de página;
 * cada get-or-create es su propia unidad de commit, por lo que el
 * Ledger queda siempre en un estado consistente.
 * =================================================================
 */

use anyhow::Result;
use clap::Parser;
use tracing::info;

use hwapi_infra_c3::{C3Client, C3UrlCatalog, CorpusImporter};
use hwapi_infra_db::CorpusStoreClient;
use hwapi_shared_panoptic::init_tracing;

/// Configuración de argumentos de la importación del corpus.
#[derive(Parser, Debug)]
#[command(
    version = "3.1",
    about = "Importador del corpus de certificación: materializa el grafo de hardware certificado desde el sistema upstream."
)]
struct CommandArguments {
    /// Cadena de conexión del Ledger local (libSQL).
    #[arg(long, env = "DB_URL")]
    database_url: String,

    /// Token de acceso para Ledgers remotos (opcional).
    #[arg(long, env = "DB_AUTH_TOKEN")]
    database_auth_token: Option<String>,

    /// Base del sistema de certificación upstream.
    #[arg(long, env = "C3_URL", default_value = hwapi_infra_c3::urls::DEFAULT_C3_URL)]
    upstream_url: String,
}

/**
 * Punto de ignición del binario del importador.
 */
fn main() -> Result<()> {
    // 1. CARGA DE ENTORNO E INICIALIZACIÓN DE TRAZAS
    dotenvy::dotenv().ok();
    init_tracing("hwapi_importer");

    // 2. PARSEO DE DIRECTIVAS DE MANDO
    let cli_configuration = CommandArguments::parse();

    // 3. CONSTRUCCIÓN DEL RUNTIME
    let importer_runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    importer_runtime.block_on(async {
        info!(
            "🚚 [IMPORTER]: Starting corpus import from [{}]",
            cli_configuration.upstream_url
        );

        // 4. IGNICIÓN DE INFRAESTRUCTURA
        let store_client = CorpusStoreClient::connect(
            &cli_configuration.database_url,
            cli_configuration.database_auth_token.clone(),
        )
        .await?;

        let upstream_client =
            C3Client::new(C3UrlCatalog::new(cli_configuration.upstream_url.as_str()))?;

        // 5. EJECUCIÓN DE LA SECUENCIA DE INGESTA
        let importer = CorpusImporter::new(upstream_client, store_client);
        let import_summary = importer.load_hardware_corpus().await?;

        info!(
            "🏁 [IMPORTER]: Done. cpuids={} certificates={} devices={}",
            import_summary.cpuid_entries_ingested,
            import_summary.certificates_ingested,
            import_summary.device_instances_ingested,
        );
        Ok(())
    })
}
// FIN DEL ARCHIVO [apps/importer/src/main.rs]
