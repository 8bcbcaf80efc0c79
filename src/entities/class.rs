// 🧘 Yoga Class record
//
// Core fields are typed; anything else on the record is kept in `extra`
// so a class round-trips through JSON unchanged. Only `title` and
// `instructor` are required.

use super::deserialize_present;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::cmp::Ordering;
use std::fmt;

// ============================================================================
// LEVEL
// ============================================================================

/// Class difficulty level. Fixtures use plain numbers, but free text
/// ("all levels") shows up too.
///
/// Ordering: numbers compare numerically, text compares lexicographically,
/// and every number sorts before every text value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Level {
    Number(Number),
    Text(String),
}

impl Level {
    pub fn number(n: i64) -> Self {
        Level::Number(Number::from(n))
    }

    pub fn text(s: impl Into<String>) -> Self {
        Level::Text(s.into())
    }
}

impl Ord for Level {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Level::Number(a), Level::Number(b)) => {
                let a = a.as_f64().unwrap_or(f64::NAN);
                let b = b.as_f64().unwrap_or(f64::NAN);
                a.total_cmp(&b)
            }
            (Level::Text(a), Level::Text(b)) => a.cmp(b),
            (Level::Number(_), Level::Text(_)) => Ordering::Less,
            (Level::Text(_), Level::Number(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Level {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Level {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Level {}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Number(n) => write!(f, "{}", n),
            Level::Text(s) => write!(f, "{}", s),
        }
    }
}

// ============================================================================
// YOGA CLASS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YogaClass {
    pub title: String,

    pub instructor: String,

    /// `None` = no `level` key; `Some(None)` = `"level": null`
    #[serde(default, deserialize_with = "deserialize_present")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<Option<Level>>,

    /// Price in cents (e.g. 1500 = $15.00), same presence rules as `level`
    #[serde(default, deserialize_with = "deserialize_present")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_in_cents: Option<Option<i64>>,

    /// Every other field on the record (times, room, description, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl YogaClass {
    pub fn new(
        title: impl Into<String>,
        instructor: impl Into<String>,
        level: Level,
        price_in_cents: i64,
    ) -> Self {
        YogaClass {
            title: title.into(),
            instructor: instructor.into(),
            level: Some(Some(level)),
            price_in_cents: Some(Some(price_in_cents)),
            extra: Map::new(),
        }
    }

    /// Level, if the record has a non-null one
    pub fn level(&self) -> Option<&Level> {
        self.level.as_ref().and_then(Option::as_ref)
    }

    /// Price in cents, if the record has a non-null one
    pub fn price_in_cents(&self) -> Option<i64> {
        self.price_in_cents.flatten()
    }

    /// Builder: attach an extra field
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}
