// 🗂️ Generic object helpers
// Objects are ordered string-keyed maps (insertion order preserved)

use crate::truthy::is_truthy;
use serde_json::{Map, Value};
use tracing::debug;

/// Number of keys in an object
pub fn number_of_keys(obj: &Map<String, Value>) -> usize {
    obj.len()
}

/// Sum the numbers in a sequence, skipping falsy entries.
///
/// Zero is falsy, so it is skipped too (which does not change the sum).
/// Truthy values that are not numbers contribute nothing.
pub fn sum_numbers(values: &[Value]) -> f64 {
    values
        .iter()
        .filter(|v| is_truthy(v))
        .filter_map(Value::as_f64)
        .sum()
}

/// Build an object from `[key, value]` pairs.
///
/// Pairs are applied in order: a repeated key takes the value of its last pair
/// but keeps the position of its first. Keys that are not strings are
/// converted with `property_key`.
pub fn new_member_array_to_object(pairs: &[(Value, Value)]) -> Map<String, Value> {
    let mut obj = Map::new();

    for (key, value) in pairs {
        obj.insert(property_key(key), value.clone());
    }

    debug!(pairs = pairs.len(), keys = obj.len(), "converted pair array to object");
    obj
}

/// String form of a value used as an object key.
///
/// `30` -> `"30"`, `1.0` -> `"1"`, `true` -> `"true"`, `null` -> `"null"`,
/// `[1, null, "a"]` -> `"1,,a"`, any object -> `"[object Object]"`.
pub fn property_key(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_i64() {
            Some(i) => i.to_string(),
            None => match n.as_u64() {
                Some(u) => u.to_string(),
                None => n.as_f64().map(|f| f.to_string()).unwrap_or_else(|| n.to_string()),
            },
        },
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => property_key(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
        other => other.to_string(),
    }
}

/// Copy of `obj` without the given keys. Missing keys are ignored.
pub fn omit_keys(obj: &Map<String, Value>, keys: &[&str]) -> Map<String, Value> {
    obj.iter()
        .filter(|(k, _)| !keys.contains(&k.as_str()))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {}", other),
        }
    }

    #[test]
    fn test_number_of_keys() {
        assert_eq!(number_of_keys(&Map::new()), 0);
        assert_eq!(number_of_keys(&object(json!({ "a": 1, "b": 2 }))), 2);
    }

    #[test]
    fn test_number_of_keys_counts_null_values() {
        let obj = object(json!({ "a": null, "b": false, "c": 0 }));
        assert_eq!(number_of_keys(&obj), 3);
    }

    #[test]
    fn test_sum_numbers_skips_falsy() {
        let values = vec![json!(1), json!(0), json!(2), json!(null), json!(3), json!(false), json!("")];
        assert_eq!(sum_numbers(&values), 6.0);
    }

    #[test]
    fn test_sum_numbers_empty_and_all_falsy() {
        assert_eq!(sum_numbers(&[]), 0.0);
        assert_eq!(sum_numbers(&[json!(0), json!(null), json!(false)]), 0.0);
    }

    #[test]
    fn test_sum_numbers_fractions_and_negatives() {
        let values = vec![json!(1.5), json!(-0.5), json!(2)];
        assert_eq!(sum_numbers(&values), 3.0);
    }

    fn pair(key: Value, value: Value) -> (Value, Value) {
        (key, value)
    }

    #[test]
    fn test_pairs_to_object() {
        let pairs = vec![pair(json!("name"), json!("Joe")), pair(json!("age"), json!(30))];

        let obj = new_member_array_to_object(&pairs);

        assert_eq!(Value::Object(obj), json!({ "name": "Joe", "age": 30 }));
    }

    #[test]
    fn test_pairs_to_object_last_write_wins() {
        let pairs = vec![
            pair(json!("name"), json!("Joe")),
            pair(json!("age"), json!(30)),
            pair(json!("name"), json!("Joseph")),
        ];

        let obj = new_member_array_to_object(&pairs);

        assert_eq!(obj.len(), 2);
        assert_eq!(obj["name"], json!("Joseph"));
        let keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["name", "age"]);
    }

    #[test]
    fn test_pairs_to_object_empty() {
        assert!(new_member_array_to_object(&[]).is_empty());
    }

    #[test]
    fn test_pairs_parse_from_nested_arrays() {
        let pairs: Vec<(Value, Value)> =
            serde_json::from_value(json!([["name", "Ana"], ["currentMember", true]])).unwrap();

        let obj = new_member_array_to_object(&pairs);

        assert_eq!(obj["currentMember"], json!(true));
    }

    #[test]
    fn test_pairs_with_non_string_keys() {
        let pairs: Vec<(Value, Value)> = serde_json::from_value(json!([
            [1, "first"],
            [true, "yes"],
            [null, "nothing"],
            ["1", "first again"]
        ]))
        .unwrap();

        let obj = new_member_array_to_object(&pairs);

        assert_eq!(
            Value::Object(obj),
            json!({ "1": "first again", "true": "yes", "null": "nothing" })
        );
    }

    #[test]
    fn test_property_key() {
        assert_eq!(property_key(&json!("age")), "age");
        assert_eq!(property_key(&json!(30)), "30");
        assert_eq!(property_key(&json!(1.0)), "1");
        assert_eq!(property_key(&json!(2.5)), "2.5");
        assert_eq!(property_key(&json!(-4)), "-4");
        assert_eq!(property_key(&json!(false)), "false");
        assert_eq!(property_key(&json!(null)), "null");
        assert_eq!(property_key(&json!([1, null, "a"])), "1,,a");
        assert_eq!(property_key(&json!({ "a": 1 })), "[object Object]");
    }

    #[test]
    fn test_omit_keys() {
        let obj = object(json!({ "name": "Ana", "age": 41, "email": "ana@example.com" }));

        let trimmed = omit_keys(&obj, &["age", "missing"]);

        assert_eq!(Value::Object(trimmed), json!({ "name": "Ana", "email": "ana@example.com" }));
        assert_eq!(obj.len(), 3);
    }
}
