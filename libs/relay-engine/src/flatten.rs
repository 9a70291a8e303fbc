use serde_json::{Map, Value};

/// Разделитель сегментов пути в ключах плоского документа.
pub const SEPARATOR: &str = "_";

#[derive(Debug, thiserror::Error)]
pub enum FlattenError {
    #[error("invalid json: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("expected a json object at the top level, got {0}")]
    NotAnObject(&'static str),
}

/// Сплющить JSON объект в одноуровневый: `{"a":{"b":[1]}}` → `{"a_b_0":1}`.
///
/// Листья (строки, числа, bool, null) сохраняются как есть. Пустые
/// вложенные объекты и массивы ключей не порождают. Ключи в результате
/// отсортированы.
///
/// Разные пути могут дать один ключ (`{"a_b":1,"a":{"b":2}}`). Тогда
/// остаётся лист, пройденный последним в порядке сортировки ключей, а
/// перезапись логируется на уровне warn.
pub fn flatten(json: &[u8]) -> Result<Vec<u8>, FlattenError> {
    let value: Value = serde_json::from_slice(json)?;
    let flat = flatten_value(&value)?;
    Ok(serde_json::to_vec(&flat)?)
}

pub fn flatten_value(value: &Value) -> Result<Map<String, Value>, FlattenError> {
    let Value::Object(root) = value else {
        return Err(FlattenError::NotAnObject(type_name(value)));
    };
    let mut out = Map::new();
    for (key, child) in root {
        flatten_into(&mut out, key.clone(), child);
    }
    Ok(out)
}

fn flatten_into(out: &mut Map<String, Value>, path: String, value: &Value) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                flatten_into(out, join(&path, key), child);
            }
        }
        Value::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                flatten_into(out, join(&path, &i.to_string()), child);
            }
        }
        leaf => {
            if let Some(old) = out.insert(path, leaf.clone()) {
                tracing::warn!(%old, new = %leaf, "flatten: colliding key overwritten");
            }
        }
    }
}

fn join(prefix: &str, segment: &str) -> String {
    let mut key = String::with_capacity(prefix.len() + SEPARATOR.len() + segment.len());
    key.push_str(prefix);
    key.push_str(SEPARATOR);
    key.push_str(segment);
    key
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn flat(v: Value) -> Value {
        let bytes = flatten(&serde_json::to_vec(&v).unwrap()).unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    /// Walk `source` along `segments`; object keys may themselves contain
    /// the separator, so every prefix is tried.
    fn lookup<'a>(source: &'a Value, segments: &[&str]) -> Option<&'a Value> {
        if segments.is_empty() {
            return Some(source);
        }
        match source {
            Value::Object(m) => (1..=segments.len()).find_map(|j| {
                m.get(&segments[..j].join(SEPARATOR))
                    .and_then(|child| lookup(child, &segments[j..]))
            }),
            Value::Array(a) => segments[0]
                .parse::<usize>()
                .ok()
                .and_then(|i| a.get(i))
                .and_then(|child| lookup(child, &segments[1..])),
            _ => None,
        }
    }

    #[test]
    fn test_flat_object_unchanged() {
        let v = json!({ "id": 1, "uei": "x", "log": true, "n": null });
        assert_eq!(flat(v.clone()), v);
    }

    #[test]
    fn test_nested_object() {
        let v = json!({ "metadata": { "hostIP": "10.0.0.1" }, "id": 3 });
        assert_eq!(flat(v), json!({ "metadata_hostIP": "10.0.0.1", "id": 3 }));
    }

    #[test]
    fn test_arrays_use_indices() {
        let v = json!({ "parameter": [ { "name": "a" }, { "name": "b", "value": [1, 2] } ] });
        assert_eq!(
            flat(v),
            json!({
                "parameter_0_name": "a",
                "parameter_1_name": "b",
                "parameter_1_value_0": 1,
                "parameter_1_value_1": 2,
            })
        );
    }

    #[test]
    fn test_empty_containers_dropped() {
        let v = json!({ "a": {}, "b": [], "c": 0 });
        assert_eq!(flat(v), json!({ "c": 0 }));
    }

    #[test]
    fn test_no_nested_values_and_paths_reconstruct() {
        let v = json!({
            "id": 9,
            "node_criteria": { "id": 1, "foreign_id": "f" },
            "related": [ { "x": { "y": [true, null] } } ],
            "last_event": null,
        });
        let out = flat(v.clone());
        let map = out.as_object().unwrap();
        assert!(!map.is_empty());
        for (key, leaf) in map {
            assert!(!leaf.is_object() && !leaf.is_array(), "nested value under {key}");
            let segments: Vec<&str> = key.split(SEPARATOR).collect();
            assert_eq!(lookup(&v, &segments), Some(leaf), "path {key} does not reconstruct");
        }
    }

    #[test]
    fn test_deterministic_output() {
        let bytes = br#"{"z":{"b":1,"a":2},"y":[3]}"#;
        let first = flatten(bytes).unwrap();
        let second = flatten(bytes).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, br#"{"y_0":3,"z_a":2,"z_b":1}"#.to_vec());
    }

    #[test]
    fn test_colliding_paths_last_wins() {
        let v = json!({ "a_b": 1, "a": { "b": 2 } });
        assert_eq!(flat(v), json!({ "a_b": 1 }));
    }

    #[test]
    fn test_invalid_json() {
        let err = flatten(b"{not json").unwrap_err();
        assert!(matches!(err, FlattenError::InvalidJson(_)));
    }

    #[test]
    fn test_top_level_must_be_object() {
        assert!(matches!(
            flatten(b"[1,2]").unwrap_err(),
            FlattenError::NotAnObject("array")
        ));
        assert!(matches!(
            flatten(b"42").unwrap_err(),
            FlattenError::NotAnObject("number")
        ));
    }
}
