// 📂 Fixture loading - JSON and CSV record files from a data directory

use crate::entities::{Level, Member, YogaClass};
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const SIMPLE_ARRAY_FILE: &str = "simple-array.json";
pub const CLASSES_FILE: &str = "yoga.json";
pub const MEMBERS_FILE: &str = "members.json";
pub const NEW_MEMBER_FILE: &str = "new-member.json";

/// Environment variable that overrides the default data directory
pub const DATA_DIR_ENV: &str = "STUDIO_DATA_DIR";

// ============================================================================
// CONFIG
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureConfig {
    /// Directory holding the four fixture files (default: `data`)
    pub data_dir: PathBuf,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        FixtureConfig {
            data_dir: PathBuf::from("data"),
        }
    }
}

impl FixtureConfig {
    /// Default config, with `STUDIO_DATA_DIR` applied when set
    pub fn from_env() -> Self {
        match env::var_os(DATA_DIR_ENV) {
            Some(dir) if !dir.is_empty() => FixtureConfig::default().with_data_dir(dir),
            _ => FixtureConfig::default(),
        }
    }

    /// Builder: set data directory
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn path(&self, file: &str) -> PathBuf {
        self.data_dir.join(file)
    }
}

// ============================================================================
// FIXTURE SET
// ============================================================================

/// The four fixture collections the transforms run against
#[derive(Debug, Clone)]
pub struct FixtureSet {
    pub simple_array: Vec<Value>,
    pub classes: Vec<YogaClass>,
    pub members: Vec<Member>,
    pub new_member: Vec<(Value, Value)>,
}

impl FixtureSet {
    pub fn load(config: &FixtureConfig) -> Result<Self> {
        let set = FixtureSet {
            simple_array: load_json(&config.path(SIMPLE_ARRAY_FILE))?,
            classes: load_json(&config.path(CLASSES_FILE))?,
            members: load_json(&config.path(MEMBERS_FILE))?,
            new_member: load_json(&config.path(NEW_MEMBER_FILE))?,
        };

        info!(
            data_dir = %config.data_dir.display(),
            classes = set.classes.len(),
            members = set.members.len(),
            "loaded fixtures"
        );

        Ok(set)
    }
}

// ============================================================================
// LOADERS
// ============================================================================

/// Read and parse one JSON file
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read fixture {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse fixture {}", path.display()))
}

/// CSV row: `title,instructor,level,priceInCents` (level and price may be empty)
#[derive(Debug, Deserialize)]
struct ClassRow {
    title: String,
    instructor: String,
    level: Option<String>,
    #[serde(rename = "priceInCents")]
    price_in_cents: Option<i64>,
}

impl From<ClassRow> for YogaClass {
    fn from(row: ClassRow) -> Self {
        // Numeric levels stay numeric so they order numerically
        let level = row.level.map(|level| match level.trim().parse::<i64>() {
            Ok(n) => Level::number(n),
            Err(_) => Level::text(level),
        });

        YogaClass {
            title: row.title,
            instructor: row.instructor,
            level: level.map(Some),
            price_in_cents: row.price_in_cents.map(Some),
            extra: Map::new(),
        }
    }
}

/// Load class records from a CSV file with a header row
pub fn load_classes_csv(csv_path: &Path) -> Result<Vec<YogaClass>> {
    let mut rdr = csv::Reader::from_path(csv_path)
        .with_context(|| format!("Failed to open CSV file {}", csv_path.display()))?;

    let mut classes = Vec::new();

    for (line, result) in rdr.deserialize::<ClassRow>().enumerate() {
        // +2: header is line 1
        let row = result.with_context(|| format!("Failed to deserialize class on line {}", line + 2))?;
        classes.push(YogaClass::from(row));
    }

    info!(path = %csv_path.display(), classes = classes.len(), "loaded classes from CSV");
    Ok(classes)
}
