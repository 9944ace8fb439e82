// [libs/domain/models/src/lib.rs]
/*!
 * =================================================================
 * APARATO: HARDWARE DOMAIN MODELS (V3.0 - CORPUS MASTER)
 * CLASIFICACIÓN: DOMAIN MODELS (ESTRATO L2)
 * RESPONSABILIDAD: FUENTE ÚNICA DE VERDAD PARA EL GRAFO DE CERTIFICACIÓN
 *
 * VISION HIPER-HOLÍSTICA:
 * 1. SSoT ABSOLUTO: Entidades del corpus, enumeraciones de buses y
 *    categorías, y contratos de petición/respuesta del endpoint de
 *    certificación viven en un único estrato sin dependencias de
 *    infraestructura.
 * 2. TAGGED UNION: El veredicto de certificación se expone como unión
 *    discriminada sobre el campo 'status' con los literales exactos
 *    del protocolo público.
 * 3. NOMINAL PURITY: Erradicación total de abreviaciones en los campos.
 * =================================================================
 */

/// Grafo persistido de entidades certificadas (Vendor -> ... -> Device).
pub mod entities;
/// Enumeraciones de protocolo: buses de hardware y categorías de dispositivo.
pub mod enums;
/// Contratos de entrada del endpoint de estado de certificación.
pub mod requests;
/// Contratos de salida: la unión discriminada de veredictos.
pub mod responses;
/// Normalización canónica de nombres de fabricante.
pub mod vendor;
