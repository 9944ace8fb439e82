// [libs/domain/models/src/vendor.rs]
/*!
 * =================================================================
 * APARATO: VENDOR NAME NORMALIZER (V2.2 - CORPUS MASTER)
 * CLASIFICACIÓN: DOMAIN LOGIC (ESTRATO L2)
 * RESPONSABILIDAD: CANONICALIZACIÓN DE NOMBRES DE FABRICANTE
 *
 * # Invariante:
 * La normalización es idempotente: normalize(normalize(s)) == normalize(s).
 * El emparejamiento posterior es insensible a caja ASCII e independiente
 * del locale del proceso.
 * =================================================================
 */

/**
 * Canonicaliza un nombre de fabricante para el emparejamiento tolerante.
 *
 * Elimina todas las ocurrencias de los sufijos corporativos "Inc." e
 * "Inc" hasta el punto fijo y recorta el espacio en blanco circundante.
 * "Dell Inc." y "Dell" colapsan así en la misma llave de búsqueda. El
 * punto fijo cubre cadenas donde la eliminación expone una nueva
 * ocurrencia ("IIncnc").
 */
pub fn normalize_vendor_name(raw_vendor_name: &str) -> String {
    let mut normalized_name = raw_vendor_name.to_string();
    loop {
        let next_pass = normalized_name.replace("Inc.", "").replace("Inc", "");
        if next_pass == normalized_name {
            break;
        }
        normalized_name = next_pass;
    }
    normalized_name.trim().to_string()
}

/// Forma de comparación definitiva: normalizada y plegada a minúsculas ASCII.
pub fn vendor_match_key(raw_vendor_name: &str) -> String {
    normalize_vendor_name(raw_vendor_name).to_ascii_lowercase()
}

// FIN DEL ARCHIVO [libs/domain/models/src/vendor.rs]
