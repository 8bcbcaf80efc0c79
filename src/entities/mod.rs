// Entity Models
// Records are plain values: built by the caller, read by the transforms,
// never mutated in place.

pub mod class;
pub mod member;

pub use class::{Level, YogaClass};
pub use member::Member;

use serde::{Deserialize, Deserializer};

/// Marks a field as present, including an explicit `null`.
///
/// Pair with `#[serde(default)]` so a missing field stays `None`, and with
/// `skip_serializing_if = "Option::is_none"` so it stays missing on output.
pub(crate) fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
