// 👤 Member record
//
// `age` and `currentMember` keep whatever the input had (including `null`
// or a missing key), so transforms hand records back unchanged.

use super::deserialize_present;
use crate::truthy::is_truthy;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub name: String,

    /// `None` = no `age` key; `Some(Value::Null)` = `"age": null`
    #[serde(default, deserialize_with = "deserialize_present")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<Value>,

    /// Raw flag, any JSON value. Read it with `is_current`.
    #[serde(default, deserialize_with = "deserialize_present")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_member: Option<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Member {
    pub fn new(name: impl Into<String>, age: Option<Value>, current_member: bool) -> Self {
        Member {
            name: name.into(),
            age,
            current_member: Some(Value::Bool(current_member)),
            extra: Map::new(),
        }
    }

    /// Builder: attach an extra field
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// True when `currentMember` is truthy (`1`, `"yes"`, `true`, ...)
    pub fn is_current(&self) -> bool {
        self.current_member.as_ref().map(is_truthy).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_member_parses_truthy_flag() {
        let member: Member = serde_json::from_value(json!({
            "name": "Priya",
            "age": 34,
            "currentMember": 1,
            "email": "priya@example.com"
        }))
        .unwrap();

        assert!(member.is_current());
        assert_eq!(member.current_member, Some(json!(1)));
        assert_eq!(member.age, Some(json!(34)));
        assert_eq!(member.extra["email"], json!("priya@example.com"));
    }

    #[test]
    fn test_member_missing_flag_is_inactive() {
        let member: Member = serde_json::from_value(json!({ "name": "Leo" })).unwrap();

        assert!(!member.is_current());
        assert_eq!(member.current_member, None);
        assert_eq!(member.age, None);
    }

    #[test]
    fn test_member_null_age_is_kept() {
        let raw = json!({ "name": "Ida", "age": null, "currentMember": true });

        let member: Member = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(member.age, Some(Value::Null));
        assert_eq!(serde_json::to_value(&member).unwrap(), raw);
    }

    #[test]
    fn test_member_round_trip_keeps_raw_fields() {
        for raw in [
            json!({ "name": "Leo", "age": 30 }),
            json!({ "name": "Ana", "age": "41", "currentMember": "yes" }),
            json!({ "name": "Ben", "currentMember": 0, "notes": [1, 2] }),
        ] {
            let member: Member = serde_json::from_value(raw.clone()).unwrap();
            assert_eq!(serde_json::to_value(&member).unwrap(), raw);
        }
    }

    #[test]
    fn test_member_without_age_serializes_without_age_key() {
        let member = Member::new("Ana", None, true);

        let value = serde_json::to_value(&member).unwrap();

        assert_eq!(value, json!({ "name": "Ana", "currentMember": true }));
    }
}
