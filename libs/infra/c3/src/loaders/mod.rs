// [libs/infra/c3/src/loaders/mod.rs]
/*!
 * =================================================================
 * APARATO: CORPUS IMPORTER ORCHESTRATOR (V3.2 - CORPUS MASTER)
 * CLASIFICACIÓN: INFRASTRUCTURE ADAPTER (ESTRATO L3)
 * RESPONSABILIDAD: SECUENCIA DE CARGA CPUIDS -> CERTIFICADOS -> DISPOSITIVOS
 *
 * VISION HIPER-HOLÍSTICA:
 * 1. ORDEN SAGRADO: El diccionario CPUID precede a los certificados y
 *    estos a los dispositivos; las instancias referencian máquinas y
 *    certificados que deben existir de antemano.
 * 2. ITEM ISOLATION: Un ítem corrupto (referencia ausente, violación de
 *    restricción, contrato malformado) se registra y se omite; la
 *    iteración jamás aborta por un único ítem.
 * 3. OPERATOR TELEMETRY: El 'count' de la primera página siembra la
 *    barra de progreso; las páginas siguientes solo avanzan el cursor.
 * =================================================================
 */

use indicatif::ProgressBar;
use tracing::{info, instrument, warn};

use hwapi_infra_db::CorpusStoreClient;

use crate::client::C3Client;
use crate::errors::ImporterError;
use crate::response_models::{PageEnvelope, PublicCertificate, PublicDeviceInstance};

/// Ingesta de certificados públicos y su grafo de entidades.
mod certificates;
/// Ingesta del diccionario CPUID -> codename.
mod cpuids;
/// Ingesta de instancias de dispositivo y adjunción a reportes.
mod devices;

/// Resultado agregado de una importación completa del corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorpusImportSummary {
    pub cpuid_entries_ingested: u64,
    pub certificates_ingested: u64,
    pub certificates_skipped: u64,
    pub device_instances_ingested: u64,
    pub device_instances_skipped: u64,
}

/// Orquestador de la importación del corpus desde el upstream C3.
pub struct CorpusImporter {
    upstream_client: C3Client,
    store_client: CorpusStoreClient,
}

impl CorpusImporter {
    pub fn new(upstream_client: C3Client, store_client: CorpusStoreClient) -> Self {
        Self {
            upstream_client,
            store_client,
        }
    }

    pub(crate) fn upstream_client(&self) -> &C3Client {
        &self.upstream_client
    }

    pub(crate) fn store_client(&self) -> &CorpusStoreClient {
        &self.store_client
    }

    /**
     * Ejecuta la secuencia completa de importación en el orden sagrado.
     */
    #[instrument(skip(self))]
    pub async fn load_hardware_corpus(&self) -> Result<CorpusImportSummary, ImporterError> {
        let mut import_summary = CorpusImportSummary::default();

        info!(
            "📚 [IMPORTER]: Importing CPUID dictionary from [{}]",
            self.upstream_client.url_catalog().upstream_base_url()
        );
        import_summary.cpuid_entries_ingested = self.load_cpuid_catalog().await?;

        info!(
            "📚 [IMPORTER]: Importing certified configurations and machines from [{}]",
            self.upstream_client.url_catalog().upstream_base_url()
        );
        let (certificates_ingested, certificates_skipped) =
            self.load_certified_configurations().await?;
        import_summary.certificates_ingested = certificates_ingested;
        import_summary.certificates_skipped = certificates_skipped;

        info!(
            "📚 [IMPORTER]: Importing device instances from [{}]",
            self.upstream_client.url_catalog().upstream_base_url()
        );
        let (devices_ingested, devices_skipped) = self.load_device_instances().await?;
        import_summary.device_instances_ingested = devices_ingested;
        import_summary.device_instances_skipped = devices_skipped;

        info!(
            "🏁 [IMPORTER]: Corpus levelized. cpuids={} certificates={}(+{} skipped) devices={}(+{} skipped)",
            import_summary.cpuid_entries_ingested,
            import_summary.certificates_ingested,
            import_summary.certificates_skipped,
            import_summary.device_instances_ingested,
            import_summary.device_instances_skipped,
        );
        Ok(import_summary)
    }

    /**
     * Recorre el listado paginado de certificados públicos siguiendo el
     * cursor 'next' autoritativo del servidor.
     */
    pub async fn load_certified_configurations(&self) -> Result<(u64, u64), ImporterError> {
        let mut next_page_url =
            Some(self.upstream_client.url_catalog().public_certificates_url());
        let mut progress_indicator: Option<ProgressBar> = None;
        let mut ingested_count = 0u64;
        let mut skipped_count = 0u64;

        while let Some(page_url) = next_page_url {
            let page: PageEnvelope<serde_json::Value> =
                self.upstream_client.fetch_json_page(&page_url).await?;

            // El count es estable entre páginas: solo la primera lo siembra.
            let indicator =
                progress_indicator.get_or_insert_with(|| ProgressBar::new(page.count));
            next_page_url = page.next.clone();

            for raw_item in page.results {
                indicator.inc(1);

                let certificate_item =
                    match serde_json::from_value::<PublicCertificate>(raw_item) {
                        Ok(parsed_item) => parsed_item,
                        Err(contract_fault) => {
                            warn!("⚠️ [IMPORTER_SKIP]: Malformed certificate item: {}", contract_fault);
                            skipped_count += 1;
                            continue;
                        }
                    };

                match self.ingest_certificate_item(&certificate_item).await {
                    Ok(()) => ingested_count += 1,
                    Err(item_fault) if item_fault.is_item_scoped() => {
                        warn!("⚠️ [IMPORTER_SKIP]: {}", item_fault);
                        skipped_count += 1;
                    }
                    Err(batch_fault) => return Err(batch_fault),
                }
            }
        }

        if let Some(indicator) = progress_indicator {
            indicator.finish_and_clear();
        }
        Ok((ingested_count, skipped_count))
    }

    /**
     * Recorre el listado paginado de instancias de dispositivo.
     */
    pub async fn load_device_instances(&self) -> Result<(u64, u64), ImporterError> {
        let mut next_page_url =
            Some(self.upstream_client.url_catalog().public_device_instances_url());
        let mut progress_indicator: Option<ProgressBar> = None;
        let mut ingested_count = 0u64;
        let mut skipped_count = 0u64;

        while let Some(page_url) = next_page_url {
            let page: PageEnvelope<serde_json::Value> =
                self.upstream_client.fetch_json_page(&page_url).await?;

            let indicator =
                progress_indicator.get_or_insert_with(|| ProgressBar::new(page.count));
            next_page_url = page.next.clone();

            for raw_item in page.results {
                indicator.inc(1);

                let device_item =
                    match serde_json::from_value::<PublicDeviceInstance>(raw_item) {
                        Ok(parsed_item) => parsed_item,
                        Err(contract_fault) => {
                            warn!("⚠️ [IMPORTER_SKIP]: Malformed device item: {}", contract_fault);
                            skipped_count += 1;
                            continue;
                        }
                    };

                match self.ingest_device_instance_item(&device_item).await {
                    Ok(()) => ingested_count += 1,
                    Err(item_fault) if item_fault.is_item_scoped() => {
                        warn!("⚠️ [IMPORTER_SKIP]: {}", item_fault);
                        skipped_count += 1;
                    }
                    Err(batch_fault) => return Err(batch_fault),
                }
            }
        }

        if let Some(indicator) = progress_indicator {
            indicator.finish_and_clear();
        }
        Ok((ingested_count, skipped_count))
    }
}

/**
 * Retira un token 'LTS' final de la cadena de release upstream:
 * "22.04 LTS" ingresa como "22.04"; "22.04" ingresa intacta.
 */
pub fn strip_lts_token(raw_release_string: &str) -> String {
    raw_release_string
        .trim_end()
        .trim_end_matches("LTS")
        .trim_end()
        .to_string()
}

// FIN DEL ARCHIVO [libs/infra/c3/src/loaders/mod.rs]
