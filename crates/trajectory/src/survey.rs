//! Per-station survey figures: measured depth, inclination, azimuth and curvature terms.

use serde::{Deserialize, Serialize};
use wellpath_core::Station;
use wellpath_core::units::{deg_to_rad, rad_to_deg};
use wellpath_core::vector::{horizontal_norm, norm3};

/// Survey figures for one station.
///
/// `measured_depth` is the length of the step from the previous station, not a
/// running total; on the first row it is the magnitude of the station's own
/// position vector. Angles are in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyRow {
    #[serde(with = "nullable_float")]
    pub measured_depth: f64,
    #[serde(with = "nullable_float")]
    pub inclination: f64,
    #[serde(with = "nullable_float")]
    pub azimuth: f64,
    #[serde(with = "nullable_float")]
    pub north: f64,
    #[serde(with = "nullable_float")]
    pub east: f64,
    #[serde(with = "nullable_float")]
    pub tvd: f64,
    #[serde(with = "nullable_float")]
    pub rf: f64,
    #[serde(with = "nullable_float")]
    pub dls: f64,
    #[serde(with = "nullable_float")]
    pub dogleg: f64,
}

impl SurveyRow {
    /// Look a figure up by its serialized field name (`measuredDepth`, `inclination`, `rf`, ...).
    pub fn field(&self, name: &str) -> Option<f64> {
        match name {
            "measuredDepth" => Some(self.measured_depth),
            "inclination" => Some(self.inclination),
            "azimuth" => Some(self.azimuth),
            "north" => Some(self.north),
            "east" => Some(self.east),
            "tvd" => Some(self.tvd),
            "rf" => Some(self.rf),
            "dls" => Some(self.dls),
            "dogleg" => Some(self.dogleg),
            _ => None,
        }
    }

    /// True when any figure is `NaN` or infinite.
    pub fn has_non_finite(&self) -> bool {
        [
            self.measured_depth,
            self.inclination,
            self.azimuth,
            self.rf,
            self.dls,
            self.dogleg,
        ]
        .iter()
        .any(|v| !v.is_finite())
    }

    fn origin(station: &Station) -> Self {
        Self {
            measured_depth: norm3(station.north, station.east, station.tvd),
            inclination: 0.0,
            azimuth: 0.0,
            north: station.north,
            east: station.east,
            tvd: station.tvd,
            rf: 0.0,
            dls: 0.0,
            dogleg: 0.0,
        }
    }

    fn step(previous: &Station, current: &Station) -> Self {
        let d_north = current.north - previous.north;
        let d_east = current.east - previous.east;
        let d_tvd = current.tvd - previous.tvd;

        let horizontal = horizontal_norm(d_north, d_east);
        let measured_depth = norm3(d_north, d_east, d_tvd);
        let inclination = rad_to_deg(horizontal.atan2(d_tvd));

        let mut azimuth = rad_to_deg(d_east.atan2(d_north));
        if azimuth < 0.0 {
            azimuth += 360.0;
        }

        // unguarded: vertical steps give an infinite rf, zero-length steps a NaN dls
        let rf = 1.0 / deg_to_rad(inclination).tan();
        let dls = (inclination * inclination + azimuth * azimuth).sqrt() / measured_depth;
        let dogleg = rad_to_deg(dls.atan2(rf));

        Self {
            measured_depth,
            inclination,
            azimuth,
            north: current.north,
            east: current.east,
            tvd: current.tvd,
            rf,
            dls,
            dogleg,
        }
    }
}

/// Compute one survey row per station, index-aligned with `stations`.
pub fn compute(stations: &[Station]) -> Vec<SurveyRow> {
    let Some(first) = stations.first() else {
        return Vec::new();
    };

    let rows: Vec<SurveyRow> = std::iter::once(SurveyRow::origin(first))
        .chain(
            stations
                .windows(2)
                .map(|pair| SurveyRow::step(&pair[0], &pair[1])),
        )
        .collect();

    let degenerate = rows.iter().filter(|row| row.has_non_finite()).count();
    tracing::debug!(rows = rows.len(), degenerate, "computed survey");
    rows
}

/// JSON has no NaN or infinity: non-finite figures are written as `null` and read back as `NaN`.
mod nullable_float {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}
