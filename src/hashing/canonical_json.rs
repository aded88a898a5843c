use serde_json::Value;
use std::collections::BTreeMap;

/// Serializa un `Value` de JSON a una representación canónica:
/// - Objetos con claves ordenadas
/// - Sin espacios redundantes
///
/// Dos listas de entradas estructuralmente iguales producen el mismo texto
/// canónico, y con él la misma huella de contenido.
pub fn to_canonical_json(value: &Value) -> String {
    let mut out = String::new();
    write_canonical(value, &mut out);
    out
}

fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => out.push_str(&escape(s)),
        Value::Array(items) => {
            out.push('[');
            for (ix, item) in items.iter().enumerate() {
                if ix > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            let sorted: BTreeMap<&String, &Value> = map.iter().collect();
            out.push('{');
            for (ix, (key, item)) in sorted.into_iter().enumerate() {
                if ix > 0 {
                    out.push(',');
                }
                out.push_str(&escape(key));
                out.push(':');
                write_canonical(item, out);
            }
            out.push('}');
        }
    }
}

fn escape(raw: &str) -> String {
    // serializar un &str nunca falla; el fallback existe sólo para no
    // introducir un pánico en la ruta de hashing
    serde_json::to_string(raw).unwrap_or_else(|_| format!("\"{raw}\""))
}

#[cfg(test)]
mod tests {
    use super::to_canonical_json;
    use serde_json::json;

    #[test]
    fn primitives() {
        assert_eq!(to_canonical_json(&json!(null)), "null");
        assert_eq!(to_canonical_json(&json!(false)), "false");
        assert_eq!(to_canonical_json(&json!(200)), "200");
        assert_eq!(to_canonical_json(&json!("น้ำ")), "\"น้ำ\"");
    }

    #[test]
    fn arrays_keep_order() {
        assert_eq!(to_canonical_json(&json!([3, "WP", false])), "[3,\"WP\",false]");
    }

    #[test]
    fn object_keys_are_sorted() {
        let val = json!({ "quantity": 500, "name": "mancozeb" });
        assert_eq!(to_canonical_json(&val), "{\"name\":\"mancozeb\",\"quantity\":500}");
    }

    #[test]
    fn nested_structures() {
        let val = json!({ "z": [{ "y": "yes" }, null], "a": { "x": 10 } });
        assert_eq!(to_canonical_json(&val), "{\"a\":{\"x\":10},\"z\":[{\"y\":\"yes\"},null]}");
    }
}
