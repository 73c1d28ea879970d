//! Directional well path planning.
//!
//! Given a surface location, ordered targets and an optional kick-off point,
//! the planner builds a control-point skeleton, densifies it into stations at
//! a fixed TVD spacing and derives survey figures for every station. The
//! member crates are re-exported here so front ends depend on one library.

use std::path::Path;

use thiserror::Error;

pub use wellpath_config as config;
pub use wellpath_core as model;
pub use wellpath_export as export;
pub use wellpath_trajectory as trajectory;

pub use wellpath_core::{KopSpec, Location, Station, WellPlan};
pub use wellpath_trajectory::{PathSkeleton, SurveyRow, WellPathProfile, plan_well};

/// Failures on the way from raw inputs to a planned profile.
#[derive(Debug, Error)]
pub enum PlannerError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Invalid(#[from] config::ValidationError),
}

/// Validate raw plan inputs and plan the well path.
pub fn plan_from_config(raw: &config::PlanConfig) -> Result<WellPathProfile, PlannerError> {
    let plan = raw.validate()?;
    Ok(plan_well(&plan))
}

/// Load a YAML or TOML plan file, validate it and plan the well path.
pub fn plan_from_file<P: AsRef<Path>>(path: P) -> Result<WellPathProfile, PlannerError> {
    let plan = config::load_well_plan(path)?;
    tracing::info!(targets = plan.targets.len(), interval = plan.interval, "planning well path");
    Ok(plan_well(&plan))
}

/// Returns the version of the library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
