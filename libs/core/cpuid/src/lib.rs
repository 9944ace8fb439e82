// [libs/core/cpuid/src/lib.rs]
/*!
 * =================================================================
 * APARATO: CPUID DECODING CORE (V2.4 - CORPUS MASTER)
 * CLASIFICACIÓN: DOMAIN CORE (ESTRATO L1)
 * RESPONSABILIDAD: TRADUCCIÓN DE LA HOJA CPUID A CODENAME DE SILICIO
 *
 * VISION HIPER-HOLÍSTICA:
 * 1. LITTLE-ENDIAN TRUTH: La hoja CPUID llega como secuencia de bytes;
 *    byte[2] es el estrato alto, byte[1] el medio y byte[0] el bajo.
 * 2. SUBSTRING RULE: El diccionario almacena fragmentos hexadecimales
 *    cortos (sin el prefijo '0x' o sin el nibble final). La resolución
 *    es por subcadena, nunca por igualdad ni por tabla hash.
 * 3. ZERO DEPENDENCIES: Núcleo puro auditable sin I/O.
 * =================================================================
 */

/// Codename centinela cuando el diccionario no reconoce la hoja CPUID.
pub const UNKNOWN_CODENAME: &str = "Unknown";

/// Cantidad mínima de bytes significativos de la hoja CPUID.
pub const SIGNIFICANT_LEAF_BYTES: usize = 3;

/// Entrada del diccionario CPUID del corpus: fragmento -> codename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CpuIdDictionaryEntry {
    pub id_pattern: String,
    pub codename: String,
}

impl CpuIdDictionaryEntry {
    pub fn new(id_pattern: impl Into<String>, codename: impl Into<String>) -> Self {
        Self {
            id_pattern: id_pattern.into(),
            codename: codename.into(),
        }
    }
}

/**
 * Codifica los tres bytes significativos de la hoja CPUID como cadena
 * hexadecimal en minúsculas con prefijo '0x'.
 *
 * El byte alto (byte[2]) se emite sin relleno; los estratos medio y bajo
 * conservan sus dos dígitos. Ejemplo: [0x71, 0x06, 0x0B] -> "0xb0671".
 *
 * Retorna None cuando la secuencia no alcanza los tres bytes mínimos.
 */
pub fn encode_cpuid_identifier(leaf_bytes: &[u8]) -> Option<String> {
    if leaf_bytes.len() < SIGNIFICANT_LEAF_BYTES {
        return None;
    }
    Some(format!(
        "0x{:x}{:02x}{:02x}",
        leaf_bytes[2], leaf_bytes[1], leaf_bytes[0]
    ))
}

/**
 * Resuelve el codename de una hoja codificada contra el diccionario.
 *
 * Recorre las entradas en orden y retorna el primer codename cuyo
 * 'id_pattern' (plegado a minúsculas) sea subcadena del identificador
 * codificado. La regla de subcadena es deliberada: los fragmentos
 * almacenados pueden omitir el prefijo '0x' o un nibble final.
 */
pub fn match_codename<'dictionary>(
    encoded_identifier: &str,
    dictionary_entries: &'dictionary [CpuIdDictionaryEntry],
) -> Option<&'dictionary str> {
    dictionary_entries
        .iter()
        .find(|entry| {
            !entry.id_pattern.is_empty()
                && encoded_identifier.contains(&entry.id_pattern.to_ascii_lowercase())
        })
        .map(|entry| entry.codename.as_str())
}

/**
 * Conveniencia del motor de decisión: codifica y resuelve en un paso,
 * degradando a UNKNOWN_CODENAME cuando el diccionario no empareja.
 */
pub fn resolve_codename_or_unknown(
    leaf_bytes: &[u8],
    dictionary_entries: &[CpuIdDictionaryEntry],
) -> Option<String> {
    let encoded_identifier = encode_cpuid_identifier(leaf_bytes)?;
    Some(
        match_codename(&encoded_identifier, dictionary_entries)
            .unwrap_or(UNKNOWN_CODENAME)
            .to_string(),
    )
}

// FIN DEL ARCHIVO [libs/core/cpuid/src/lib.rs]
