//! Plot handoff passed from the planning front end to the visualization layer.
//!
//! The document keeps the key names the visualization layer reads
//! (`interpolatedData`, `interpolatedmiaData`, `plot_type`, `x_axis_label`,
//! `y_axis_label`). Station coordinates travel as text, survey figures as
//! numbers with `null` for non-finite values.

use std::fmt;
use std::io::{Read, Write};
use std::str::FromStr;
use std::sync::mpsc::Sender;

use serde::{Deserialize, Serialize};
use wellpath_core::Station;
use wellpath_trajectory::{SurveyRow, WellPathProfile};

use crate::ExportError;

/// Which chart the visualization layer renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlotMode {
    #[serde(rename = "2D")]
    TwoD,
    #[serde(rename = "3D")]
    ThreeD,
}

impl fmt::Display for PlotMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TwoD => f.write_str("2D"),
            Self::ThreeD => f.write_str("3D"),
        }
    }
}

impl FromStr for PlotMode {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "2D" => Ok(Self::TwoD),
            "3D" => Ok(Self::ThreeD),
            _ => Err(ExportError::UnknownPlotMode(s.to_string())),
        }
    }
}

/// Axis choices for 2-D plots, serialized as their literal labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisLabel {
    #[serde(rename = "MD")]
    Md,
    Inc,
    Azi,
    North,
    East,
    #[serde(rename = "TVD")]
    Tvd,
    #[serde(rename = "RF")]
    Rf,
    #[serde(rename = "DLS")]
    Dls,
    Dogleg,
}

impl AxisLabel {
    pub const ALL: [AxisLabel; 9] = [
        Self::Md,
        Self::Inc,
        Self::Azi,
        Self::North,
        Self::East,
        Self::Tvd,
        Self::Rf,
        Self::Dls,
        Self::Dogleg,
    ];

    /// The literal label stored in the handoff.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Md => "MD",
            Self::Inc => "Inc",
            Self::Azi => "Azi",
            Self::North => "North",
            Self::East => "East",
            Self::Tvd => "TVD",
            Self::Rf => "RF",
            Self::Dls => "DLS",
            Self::Dogleg => "Dogleg",
        }
    }

    /// Caption shown next to the axis in menus and charts.
    pub fn caption(&self) -> &'static str {
        match self {
            Self::Md => "MD (ft)",
            Self::Inc => "Inc (deg)",
            Self::Azi => "Azi (deg)",
            Self::North => "North (ft)",
            Self::East => "East (ft)",
            Self::Tvd => "TVD (ft)",
            Self::Rf => "RF",
            Self::Dls => "DLS",
            Self::Dogleg => "Dogleg",
        }
    }

    /// Survey field key the visualization layer derives from the label: the label lowercased.
    ///
    /// Matches a [`SurveyRow`] field only for North, East, TVD, RF, DLS and
    /// Dogleg. `md`, `inc` and `azi` name no field, so those axes come back
    /// empty from [`PlotHandoff::series`].
    pub fn lookup_key(&self) -> String {
        self.as_str().to_lowercase()
    }
}

impl fmt::Display for AxisLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AxisLabel {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|axis| axis.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ExportError::UnknownAxis(s.to_string()))
    }
}

/// Computed results plus the plot selection, handed to the visualization layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotHandoff {
    #[serde(rename = "interpolatedData")]
    pub stations: Vec<Station>,
    #[serde(rename = "interpolatedmiaData")]
    pub survey_rows: Vec<SurveyRow>,
    pub plot_type: PlotMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_axis_label: Option<AxisLabel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_axis_label: Option<AxisLabel>,
}

impl PlotHandoff {
    pub fn three_d(profile: &WellPathProfile) -> Self {
        Self {
            stations: profile.stations.clone(),
            survey_rows: profile.survey.clone(),
            plot_type: PlotMode::ThreeD,
            x_axis_label: None,
            y_axis_label: None,
        }
    }

    pub fn two_d(profile: &WellPathProfile, x_axis: AxisLabel, y_axis: AxisLabel) -> Self {
        Self {
            stations: profile.stations.clone(),
            survey_rows: profile.survey.clone(),
            plot_type: PlotMode::TwoD,
            x_axis_label: Some(x_axis),
            y_axis_label: Some(y_axis),
        }
    }

    /// Build a handoff for `mode`; 2-D plots need both axes, 3-D plots ignore them.
    pub fn for_mode(
        profile: &WellPathProfile,
        mode: PlotMode,
        x_axis: Option<AxisLabel>,
        y_axis: Option<AxisLabel>,
    ) -> Result<Self, ExportError> {
        match (mode, x_axis, y_axis) {
            (PlotMode::ThreeD, _, _) => Ok(Self::three_d(profile)),
            (PlotMode::TwoD, Some(x), Some(y)) => Ok(Self::two_d(profile, x, y)),
            (PlotMode::TwoD, _, _) => Err(ExportError::MissingAxis),
        }
    }

    /// Northing, easting and TVD columns for the 3-D trajectory plot.
    pub fn track_3d(&self) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        let north = self.stations.iter().map(|s| s.north).collect();
        let east = self.stations.iter().map(|s| s.east).collect();
        let tvd = self.stations.iter().map(|s| s.tvd).collect();
        (north, east, tvd)
    }

    /// Values for one axis, looked up through [`AxisLabel::lookup_key`].
    pub fn series(&self, axis: AxisLabel) -> Option<Vec<f64>> {
        let key = axis.lookup_key();
        self.survey_rows.iter().map(|row| row.field(&key)).collect()
    }

    /// X and Y columns for the 2-D plot; `None` without a selection or when an axis does not resolve.
    pub fn series_2d(&self) -> Option<(Vec<f64>, Vec<f64>)> {
        let x = self.series(self.x_axis_label?)?;
        let y = self.series(self.y_axis_label?)?;
        Some((x, y))
    }
}

/// Destination for a finished planning result.
pub trait HandoffSink {
    fn publish(&mut self, handoff: &PlotHandoff) -> Result<(), ExportError>;
}

/// Writes the handoff as a JSON document.
pub struct JsonHandoffWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonHandoffWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> HandoffSink for JsonHandoffWriter<W> {
    fn publish(&mut self, handoff: &PlotHandoff) -> Result<(), ExportError> {
        serde_json::to_writer_pretty(&mut self.writer, handoff)?;
        self.writer.flush()?;
        tracing::debug!(
            plot_type = %handoff.plot_type,
            stations = handoff.stations.len(),
            "published plot handoff"
        );
        Ok(())
    }
}

/// In-process delivery to a visualization thread.
impl HandoffSink for Sender<PlotHandoff> {
    fn publish(&mut self, handoff: &PlotHandoff) -> Result<(), ExportError> {
        self.send(handoff.clone())
            .map_err(|_| ExportError::Disconnected)
    }
}

/// Parse a handoff document written by [`JsonHandoffWriter`].
pub fn read_handoff<R: Read>(reader: R) -> Result<PlotHandoff, ExportError> {
    Ok(serde_json::from_reader(reader)?)
}
