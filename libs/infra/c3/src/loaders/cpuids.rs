// [libs/infra/c3/src/loaders/cpuids.rs]
/*!
 * =================================================================
 * APARATO: CPUID CATALOG LOADER (V3.0 - CORPUS MASTER)
 * CLASIFICACIÓN: INFRASTRUCTURE ADAPTER (ESTRATO L3)
 * RESPONSABILIDAD: INGESTA DEL DICCIONARIO {codename: [patrones]}
 * =================================================================
 */

use tracing::instrument;

use hwapi_infra_db::repositories::CpuIdRepository;

use crate::errors::ImporterError;
use crate::loaders::CorpusImporter;
use crate::response_models::CpuIdCatalog;

impl CorpusImporter {
    /// Descarga el diccionario CPUID y lo materializa en el corpus.
    #[instrument(skip(self))]
    pub(crate) async fn load_cpuid_catalog(&self) -> Result<u64, ImporterError> {
        let catalog_url = self.upstream_client().url_catalog().cpuids_url();
        let cpuid_catalog: CpuIdCatalog =
            self.upstream_client().fetch_json_page(&catalog_url).await?;
        self.ingest_cpuid_catalog(&cpuid_catalog).await
    }

    /**
     * Materializa cada par (patrón, codename) con get-or-create.
     * Los patrones vacíos se descartan en silencio.
     */
    pub async fn ingest_cpuid_catalog(
        &self,
        cpuid_catalog: &CpuIdCatalog,
    ) -> Result<u64, ImporterError> {
        let corpus_session = self.store_client().open_session().await?;
        let cpuid_repository = CpuIdRepository::new(&corpus_session);

        let mut ingested_entry_count = 0u64;
        for (codename, id_patterns) in cpuid_catalog {
            for id_pattern in id_patterns {
                if id_pattern.is_empty() {
                    continue;
                }
                cpuid_repository
                    .get_or_create_cpu_id(id_pattern, codename)
                    .await?;
                ingested_entry_count += 1;
            }
        }
        Ok(ingested_entry_count)
    }
}
// FIN DEL ARCHIVO [libs/infra/c3/src/loaders/cpuids.rs]
