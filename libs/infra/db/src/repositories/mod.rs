// [libs/infra/db/src/repositories/mod.rs]
/*!
 * =================================================================
 * APARATO: REPOSITORY ACCESS MATRIX (V3.0 - TOPOLOGY MASTER)
 * CLASIFICACIÓN: INFRASTRUCTURE LAYER (ESTRATO L3)
 * RESPONSABILIDAD: ORQUESTACIÓN DE SUBSISTEMAS DE PERSISTENCIA
 *
 * VISION HIPER-HOLÍSTICA:
 * El barrel expone un repositorio por dominio de consulta. Los
 * sub-módulos de mapeo y upsert permanecen internos; solo las
 * estructuras de autoridad (Repositories) son visibles al exterior.
 * =================================================================
 */

// --- ESTRATO 1: UTILIDADES INTERNAS DE PERSISTENCIA ---

/// Transformación fila SQLite -> entidad de dominio.
mod mapping;
/// Implementación única del patrón get-or-create (lookup -> insert -> relectura).
mod upsert;

// --- ESTRATO 2: REPOSITORIOS DEL GRAFO DE CERTIFICACIÓN ---

/// Fabricantes: resolución normalizada y creación.
pub mod vendors;
/// Placas, BIOS, máquinas, dispositivos y sus recorridos de emparejamiento.
pub mod hardware;
/// Releases, kernels, plataformas y configuraciones.
pub mod software;
/// Certificados y reportes.
pub mod certificates;
/// Diccionario CPUID -> codename.
pub mod cpuids;

// --- RE-EXPORTACIONES SOBERANAS (NOMINAL ACCESS API) ---

pub use certificates::CertificateRepository;
pub use cpuids::CpuIdRepository;
pub use hardware::HardwareRepository;
pub use software::SoftwareRepository;
pub use vendors::VendorRepository;
