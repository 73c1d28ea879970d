//! Core units, constants, and shared primitives for the well path planner workspace.

use serde::{Deserialize, Serialize};

/// Planning defaults and conversion constants (oilfield units: feet, degrees).
pub mod constants {
    /// Default TVD spacing between interpolated stations (ft).
    pub const DEFAULT_INTERVAL_FT: f64 = 10.0;
    /// Default build rate (degrees per 100 ft of measured depth).
    pub const DEFAULT_BUILD_RATE_DEG_PER_100FT: f64 = 2.0;
    /// Course length the build rate is expressed over (ft).
    pub const BUILD_RATE_COURSE_FT: f64 = 100.0;
    /// Degrees per radian, computed the same way every formula in the planner uses it.
    pub const DEG_PER_RAD: f64 = 180.0 / std::f64::consts::PI;
    /// Radians per degree.
    pub const RAD_PER_DEG: f64 = std::f64::consts::PI / 180.0;
    /// Largest station count a plan may produce.
    pub const MAX_STATIONS: u64 = 1_000_000;
}

/// Angle conversion helpers.
pub mod units {
    use super::constants::{DEG_PER_RAD, RAD_PER_DEG};

    /// Convert radians to degrees.
    #[inline]
    pub fn rad_to_deg(v: f64) -> f64 {
        v * DEG_PER_RAD
    }

    /// Convert degrees to radians.
    #[inline]
    pub fn deg_to_rad(v: f64) -> f64 {
        v * RAD_PER_DEG
    }
}

/// Small vector helpers for north/east/TVD deltas.
pub mod vector {
    /// Horizontal (north/east plane) magnitude.
    #[inline]
    pub fn horizontal_norm(north: f64, east: f64) -> f64 {
        (north * north + east * east).sqrt()
    }

    /// Euclidean magnitude of a north/east/TVD triple.
    #[inline]
    pub fn norm3(north: f64, east: f64, tvd: f64) -> f64 {
        (north * north + east * east + tvd * tvd).sqrt()
    }
}

/// Two-digit fixed-point formatting.
///
/// Every "to 2 decimals" figure in the planner goes through here so the
/// station grid, the derived KOP and the exported text agree with each other.
/// The decimal result is the one closest to the exact binary value; exact ties
/// (only possible for odd multiples of 1/8) round away from zero.
pub mod fixed {
    /// Render `value` with exactly two fractional digits.
    ///
    /// `NaN` renders as `NaN`, infinities as `Infinity` / `-Infinity`, and
    /// negative zero as `0.00`.
    pub fn to_fixed_2(value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value.is_infinite() {
            return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
        }

        let magnitude = value.abs();
        let eighths = magnitude * 8.0;
        let magnitude = if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
            // odd eighths sit exactly halfway between two cents
            (magnitude * 100.0 + 0.5).floor() / 100.0
        } else {
            magnitude
        };

        let text = format!("{magnitude:.2}");
        if value < 0.0 { format!("-{text}") } else { text }
    }

    /// Round `value` to two decimals using [`to_fixed_2`] semantics.
    pub fn round_2(value: f64) -> f64 {
        if !value.is_finite() {
            return value;
        }
        to_fixed_2(value).parse().unwrap_or(value)
    }
}

/// Serde adapter that stores `f64` values as decimal text.
///
/// Used for station coordinates, which travel between the planner and the
/// visualization layer as strings.
pub mod text_number {
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&to_text(*value))
    }

    /// Shortest decimal text for `value`, spelling non-finite values the way
    /// [`to_fixed_2`](super::fixed::to_fixed_2) does; negative zero is `0`.
    pub fn to_text(value: f64) -> String {
        if value.is_nan() {
            "NaN".to_string()
        } else if value.is_infinite() {
            if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
        } else if value == 0.0 {
            "0".to_string()
        } else {
            value.to_string()
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.trim()
            .parse::<f64>()
            .map_err(|err| D::Error::custom(format!("invalid station number '{text}': {err}")))
    }
}

/// A point in well coordinates (feet): northing, easting and true vertical depth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub north: f64,
    pub east: f64,
    pub tvd: f64,
}

impl Location {
    pub const fn new(north: f64, east: f64, tvd: f64) -> Self {
        Self { north, east, tvd }
    }
}

/// A densified trajectory point produced by TVD interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Station {
    #[serde(with = "text_number")]
    pub north: f64,
    #[serde(with = "text_number")]
    pub east: f64,
    #[serde(with = "text_number")]
    pub tvd: f64,
}

impl Station {
    /// Station with every coordinate fixed to two decimals.
    pub fn fixed(north: f64, east: f64, tvd: f64) -> Self {
        Self {
            north: fixed::round_2(north),
            east: fixed::round_2(east),
            tvd: fixed::round_2(tvd),
        }
    }

    /// Station carrying a control point's coordinates untouched.
    pub fn verbatim(location: &Location) -> Self {
        Self {
            north: location.north,
            east: location.east,
            tvd: location.tvd,
        }
    }
}

/// How the kick-off point depth is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum KopSpec {
    /// Operator-supplied KOP depth (ft), used as given.
    Manual(f64),
    /// Derive the KOP from the surface location and the first target.
    #[default]
    Derive,
}

/// Validated planning request consumed by the trajectory engine.
#[derive(Debug, Clone, PartialEq)]
pub struct WellPlan {
    pub surface: Location,
    /// Targets in traversal order; never empty once validated.
    pub targets: Vec<Location>,
    pub kop: KopSpec,
    /// TVD spacing between stations (ft).
    pub interval: f64,
    /// Build rate (deg/100 ft) used when deriving the KOP.
    pub build_rate: f64,
}

impl WellPlan {
    /// Plan with a derived KOP and the default interval and build rate.
    pub fn new(surface: Location, targets: Vec<Location>) -> Self {
        Self {
            surface,
            targets,
            kop: KopSpec::Derive,
            interval: constants::DEFAULT_INTERVAL_FT,
            build_rate: constants::DEFAULT_BUILD_RATE_DEG_PER_100FT,
        }
    }

    pub fn with_kop(mut self, kop: KopSpec) -> Self {
        self.kop = kop;
        self
    }

    pub fn with_interval(mut self, interval: f64) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_build_rate(mut self, build_rate: f64) -> Self {
        self.build_rate = build_rate;
        self
    }
}
