use thiserror::Error;
use wellpath_core::constants::MAX_STATIONS;
use wellpath_core::{KopSpec, Location, WellPlan};
use wellpath_trajectory::interpolate::station_total;
use wellpath_trajectory::assemble;
use wellpath_trajectory::kop::resolve as resolve_kop;

use crate::{FieldValue, PlanConfig, RawLocation};

/// Reasons a planning request is rejected before it reaches the engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Please fill in all Surface Location fields.")]
    IncompleteSurface,
    #[error("Please add at least one Target Location.")]
    NoTargets,
    /// 1-based target number.
    #[error("Please fill in all fields for Target {0}.")]
    IncompleteTarget(usize),
    #[error("invalid number '{value}' for {field}")]
    InvalidNumber { field: String, value: String },
    #[error("interval must be a positive number of feet (got {0})")]
    InvalidInterval(f64),
    #[error("build rate must be a positive number of degrees per 100 ft (got {0})")]
    InvalidBuildRate(f64),
    #[error("cannot derive a kick-off point: Target 1 has zero TVD")]
    ZeroTargetDepth,
    #[error("interval {interval} ft would produce {stations} stations (limit {limit})")]
    TooManyStations {
        interval: f64,
        stations: u64,
        limit: u64,
    },
}

pub(crate) fn validate(config: &PlanConfig) -> Result<WellPlan, ValidationError> {
    if is_incomplete(&config.surface) {
        return Err(ValidationError::IncompleteSurface);
    }
    if config.targets.is_empty() {
        return Err(ValidationError::NoTargets);
    }
    if let Some(index) = config.targets.iter().position(is_incomplete) {
        return Err(ValidationError::IncompleteTarget(index + 1));
    }

    let surface = parse_location(&config.surface, "surface")?;
    let targets = config
        .targets
        .iter()
        .enumerate()
        .map(|(index, raw)| parse_location(raw, &format!("target {}", index + 1)))
        .collect::<Result<Vec<_>, _>>()?;

    let kop = match &config.kop {
        Some(value) if !value.is_blank() => KopSpec::Manual(parse_number(value, "kop")?),
        _ => KopSpec::Derive,
    };

    if !(config.interval.is_finite() && config.interval > 0.0) {
        return Err(ValidationError::InvalidInterval(config.interval));
    }
    if !(config.build_rate.is_finite() && config.build_rate > 0.0) {
        return Err(ValidationError::InvalidBuildRate(config.build_rate));
    }
    if kop == KopSpec::Derive && targets[0].tvd == 0.0 {
        return Err(ValidationError::ZeroTargetDepth);
    }

    let kop_depth = resolve_kop(kop, &surface, &targets, config.build_rate);
    let stations = station_total(assemble(&surface, kop_depth, &targets).points(), config.interval);
    if stations > MAX_STATIONS {
        return Err(ValidationError::TooManyStations {
            interval: config.interval,
            stations,
            limit: MAX_STATIONS,
        });
    }

    Ok(WellPlan {
        surface,
        targets,
        kop,
        interval: config.interval,
        build_rate: config.build_rate,
    })
}

fn is_incomplete(raw: &RawLocation) -> bool {
    raw.north.is_blank() || raw.east.is_blank() || raw.tvd.is_blank()
}

fn parse_location(raw: &RawLocation, label: &str) -> Result<Location, ValidationError> {
    Ok(Location::new(
        parse_number(&raw.north, &format!("{label} north"))?,
        parse_number(&raw.east, &format!("{label} east"))?,
        parse_number(&raw.tvd, &format!("{label} tvd"))?,
    ))
}

fn parse_number(value: &FieldValue, field: &str) -> Result<f64, ValidationError> {
    let invalid = |text: String| ValidationError::InvalidNumber {
        field: field.to_string(),
        value: text,
    };
    let number = match value {
        FieldValue::Number(number) => *number,
        FieldValue::Text(text) => text.trim().parse::<f64>().map_err(|_| invalid(text.clone()))?,
    };
    if number.is_finite() {
        Ok(number)
    } else {
        Err(invalid(number.to_string()))
    }
}
