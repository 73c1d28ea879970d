//! Plan file models, loaders and the parse-and-validate boundary in front of the trajectory engine.

use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wellpath_core::WellPlan;
use wellpath_core::constants::{DEFAULT_BUILD_RATE_DEG_PER_100FT, DEFAULT_INTERVAL_FT};

mod validate;

pub use validate::ValidationError;

/// A field as it arrives from a form, a plan file or a spreadsheet cell: either a number or text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl Default for FieldValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl FieldValue {
    /// Empty or whitespace-only text.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Number(_) => false,
            Self::Text(text) => text.trim().is_empty(),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Unvalidated north/east/TVD triple.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawLocation {
    #[serde(default)]
    pub north: FieldValue,
    #[serde(default)]
    pub east: FieldValue,
    #[serde(default)]
    pub tvd: FieldValue,
}

impl RawLocation {
    pub fn new(
        north: impl Into<FieldValue>,
        east: impl Into<FieldValue>,
        tvd: impl Into<FieldValue>,
    ) -> Self {
        Self {
            north: north.into(),
            east: east.into(),
            tvd: tvd.into(),
        }
    }

    /// Split `"north,east,tvd"` text; missing columns are left blank.
    pub fn from_triplet(text: &str) -> Self {
        let mut columns = text.split(',').map(|col| FieldValue::from(col.trim()));
        Self {
            north: columns.next().unwrap_or_default(),
            east: columns.next().unwrap_or_default(),
            tvd: columns.next().unwrap_or_default(),
        }
    }
}

/// Planning request as written in a plan file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanConfig {
    #[serde(default)]
    pub surface: RawLocation,
    #[serde(default)]
    pub targets: Vec<RawLocation>,
    /// Manual KOP depth; absent or blank means derive it.
    #[serde(default)]
    pub kop: Option<FieldValue>,
    #[serde(default = "default_interval")]
    pub interval: f64,
    #[serde(default = "default_build_rate")]
    pub build_rate: f64,
}

impl PlanConfig {
    pub fn new(surface: RawLocation, targets: Vec<RawLocation>) -> Self {
        Self {
            surface,
            targets,
            kop: None,
            interval: DEFAULT_INTERVAL_FT,
            build_rate: DEFAULT_BUILD_RATE_DEG_PER_100FT,
        }
    }

    /// Parse every field and check the request is plannable.
    pub fn validate(&self) -> Result<WellPlan, ValidationError> {
        validate::validate(self)
    }
}

fn default_interval() -> f64 {
    DEFAULT_INTERVAL_FT
}

fn default_build_rate() -> f64 {
    DEFAULT_BUILD_RATE_DEG_PER_100FT
}

/// Errors that can occur while loading plan files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read plan file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Load a plan file; `.toml` files are read as TOML, anything else as YAML.
pub fn load_plan<P: AsRef<Path>>(path: P) -> Result<PlanConfig, ConfigError> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading plan file");
    if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

/// Load and validate a plan file in one step.
pub fn load_well_plan<P: AsRef<Path>>(path: P) -> Result<WellPlan, ConfigError> {
    Ok(load_plan(path)?.validate()?)
}
