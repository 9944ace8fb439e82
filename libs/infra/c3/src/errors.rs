// [libs/infra/c3/src/errors.rs]
/*!
 * =================================================================
 * APARATO: C3 ERROR CATALOG (V3.1 - CORPUS MASTER)
 * CLASIFICACIÓN: INFRASTRUCTURE CORE (ESTRATO L3)
 * RESPONSABILIDAD: CATALOGACIÓN SEMÁNTICA DE FALLOS DE ENLACE E INGESTA
 *
 * # Disciplina de propagación:
 * Los fallos de enlace agotan reintentos y se propagan al shell del
 * importador. Los defectos de datos upstream (referencias ausentes,
 * violaciones de restricción, ítems malformados) aíslan el ítem actual
 * y la iteración continúa.
 * =================================================================
 */

use hwapi_infra_db::DbError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum C3ClientError {
    /// Fallo de red terminal (DNS, TLS, cuerpo truncado no recuperable).
    #[error("[L3_C3_NET_FAULT]: UPSTREAM_UPLINK_SEVERED -> {0}")]
    Network(#[from] reqwest::Error),

    /// El upstream rechazó la petición con un estado no reintentable.
    #[error("[L3_C3_REJECTION]: HTTP_{status_code} ON {target_url}")]
    UpstreamRejection { status_code: u16, target_url: String },

    /// Presupuesto de reintentos agotado sobre fallos transitorios.
    #[error("[L3_C3_RETRY_FAULT]: RETRY_BUDGET_EXHAUSTED_AFTER_{attempt_count} ON {target_url}")]
    RetriesExhausted {
        attempt_count: u32,
        target_url: String,
    },

    /// El payload llegó pero no decodifica al contrato esperado.
    #[error("[L3_C3_DECODE_FAULT]: PAYLOAD_CONTRACT_VIOLATION -> {0}")]
    PayloadDecode(String),
}

#[derive(Error, Debug)]
pub enum ImporterError {
    /// Fallo de enlace con el upstream (ya con reintentos agotados).
    #[error("[L3_IMPORT_FAULT]: UPSTREAM -> {0}")]
    Upstream(#[from] C3ClientError),

    /// Fallo de persistencia no aislable a un ítem.
    #[error("[L3_IMPORT_FAULT]: STORE -> {0}")]
    Store(#[from] DbError),

    /// El ítem referencia una máquina o certificado inexistente.
    #[error("[L3_IMPORT_SKIP]: MISSING_REFERENCE -> {0}")]
    MissingReference(String),

    /// El ítem upstream no satisface el contrato de datos.
    #[error("[L3_IMPORT_SKIP]: MALFORMED_ITEM -> {0}")]
    MalformedItem(String),
}

impl ImporterError {
    /// Verdadero cuando el fallo se aísla al ítem actual y la ingesta
    /// debe continuar con el siguiente.
    pub fn is_item_scoped(&self) -> bool {
        match self {
            ImporterError::MissingReference(_) | ImporterError::MalformedItem(_) => true,
            ImporterError::Store(store_fault) => store_fault.is_constraint_violation(),
            _ => false,
        }
    }
}
// FIN DEL ARCHIVO [libs/infra/c3/src/errors.rs]
