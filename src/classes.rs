// 📅 Class transforms - grouping, counting, dedup, ordering
// All functions take a borrowed slice and build fresh output

use crate::entities::{Level, YogaClass};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use tracing::debug;

/// Message returned when no class matches the instructor
pub const NO_INSTRUCTOR_MESSAGE: &str = "There is no instructor by that name.";

// ============================================================================
// RESULT TYPES
// ============================================================================

/// Result of counting an instructor's classes.
///
/// Serializes as a bare number (`Found`) or as the bare message string
/// (`NotFound`), so JSON consumers see either `3` or
/// `"There is no instructor by that name."`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstructorCount {
    /// At least one class; never zero
    Found(usize),
    NotFound,
}

impl InstructorCount {
    pub fn from_count(count: usize) -> Self {
        if count == 0 {
            InstructorCount::NotFound
        } else {
            InstructorCount::Found(count)
        }
    }

    pub fn count(&self) -> Option<usize> {
        match self {
            InstructorCount::Found(n) => Some(*n),
            InstructorCount::NotFound => None,
        }
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            InstructorCount::Found(_) => None,
            InstructorCount::NotFound => Some(NO_INSTRUCTOR_MESSAGE),
        }
    }
}

impl fmt::Display for InstructorCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstructorCount::Found(n) => write!(f, "{}", n),
            InstructorCount::NotFound => f.write_str(NO_INSTRUCTOR_MESSAGE),
        }
    }
}

impl Serialize for InstructorCount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            InstructorCount::Found(n) => serializer.serialize_u64(*n as u64),
            InstructorCount::NotFound => serializer.serialize_str(NO_INSTRUCTOR_MESSAGE),
        }
    }
}

/// One distinct class title and its price
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassPrice {
    pub title: String,

    /// Copied from the class as-is: missing stays missing, null stays null
    #[serde(default, deserialize_with = "crate::entities::deserialize_present")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_in_cents: Option<Option<i64>>,
}

impl ClassPrice {
    pub fn new(title: impl Into<String>, price_in_cents: i64) -> Self {
        ClassPrice {
            title: title.into(),
            price_in_cents: Some(Some(price_in_cents)),
        }
    }
}

/// A class projected down to title, instructor and level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSummary {
    pub title: String,

    pub instructor: String,

    /// Same presence rules as `YogaClass::level`
    #[serde(default, deserialize_with = "crate::entities::deserialize_present")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<Option<Level>>,
}

impl ClassSummary {
    /// Level, if the summary has a non-null one
    pub fn level(&self) -> Option<&Level> {
        self.level.as_ref().and_then(Option::as_ref)
    }
}

impl From<&YogaClass> for ClassSummary {
    fn from(class: &YogaClass) -> Self {
        ClassSummary {
            title: class.title.clone(),
            instructor: class.instructor.clone(),
            level: class.level.clone(),
        }
    }
}

// ============================================================================
// TRANSFORMS
// ============================================================================

/// Group classes by instructor.
///
/// Instructors appear in the order they are first seen; each group keeps
/// the input order of its classes.
pub fn group_class_by_instructor(classes: &[YogaClass]) -> IndexMap<String, Vec<YogaClass>> {
    let mut groups: IndexMap<String, Vec<YogaClass>> = IndexMap::new();

    for class in classes {
        groups
            .entry(class.instructor.clone())
            .or_default()
            .push(class.clone());
    }

    debug!(classes = classes.len(), instructors = groups.len(), "grouped classes by instructor");
    groups
}

/// Count classes taught by `instructor_name` (exact, case-sensitive match)
pub fn count_classes_by_instructor(classes: &[YogaClass], instructor_name: &str) -> InstructorCount {
    let count = classes
        .iter()
        .filter(|c| c.instructor == instructor_name)
        .count();

    InstructorCount::from_count(count)
}

/// One entry per distinct title, priced from the first class with that title.
///
/// Strictly first-seen: a first price of 0 (or a missing one) is kept even
/// when a later class with the same title has a price.
pub fn get_unique_classes(classes: &[YogaClass]) -> Vec<ClassPrice> {
    let mut prices: IndexMap<&str, Option<Option<i64>>> = IndexMap::new();

    for class in classes {
        prices.entry(class.title.as_str()).or_insert(class.price_in_cents);
    }

    prices
        .into_iter()
        .map(|(title, price_in_cents)| ClassPrice {
            title: title.to_string(),
            price_in_cents,
        })
        .collect()
}

/// Level order with a missing or null level above every real level
fn compare_levels(a: Option<&Level>, b: Option<&Level>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
    }
}

/// Sort by title ascending, then level descending (stable), and keep only
/// title, instructor and level.
///
/// Classes without a level come first within their title.
pub fn order_classes_by_title_and_level(classes: &[YogaClass]) -> Vec<ClassSummary> {
    let mut ordered: Vec<&YogaClass> = classes.iter().collect();

    ordered.sort_by(|a, b| {
        a.title
            .cmp(&b.title)
            .then_with(|| compare_levels(b.level(), a.level()))
    });

    ordered.into_iter().map(ClassSummary::from).collect()
}
