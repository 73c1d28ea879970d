//! Export helpers for survey artifacts (MIA text, full CSV table) and the plot handoff.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

pub mod handoff;

/// Errors raised while producing export artifacts.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no survey data to export")]
    NoData,
    #[error("Please select both X and Y axes.")]
    MissingAxis,
    #[error("unknown axis label '{0}'")]
    UnknownAxis(String),
    #[error("unknown plot mode '{0}'")]
    UnknownPlotMode(String),
    #[error("handoff receiver disconnected")]
    Disconnected,
    #[error("failed to write export: {0}")]
    Io(#[from] io::Error),
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to encode handoff: {0}")]
    Json(#[from] serde_json::Error),
}

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

/// Measured depth / inclination / azimuth listing.
pub mod mia {
    use std::io::Write;
    use std::path::Path;

    use wellpath_core::fixed::to_fixed_2;
    use wellpath_trajectory::SurveyRow;

    use crate::{ExportError, writer_for_path};

    /// File name offered for the MIA download.
    pub const FILE_NAME: &str = "MIA_Results.csv";

    const HEADER: &str = "Point,MD (ft),Inclination (deg),Azimuth (deg)";

    /// Render rows as `Point,MD,Inclination,Azimuth` lines, 1-based, figures to two decimals.
    ///
    /// Lines are newline-joined without a trailing newline. An empty survey is
    /// reported as [`ExportError::NoData`] instead of a header-only listing.
    pub fn to_delimited_text(rows: &[SurveyRow]) -> Result<String, ExportError> {
        if rows.is_empty() {
            return Err(ExportError::NoData);
        }

        let mut lines = Vec::with_capacity(rows.len() + 1);
        lines.push(HEADER.to_string());
        lines.extend(rows.iter().enumerate().map(|(index, row)| {
            format!(
                "{},{},{},{}",
                index + 1,
                to_fixed_2(row.measured_depth),
                to_fixed_2(row.inclination),
                to_fixed_2(row.azimuth),
            )
        }));
        Ok(lines.join("\n"))
    }

    /// Write the MIA listing to `path` (`-` for stdout).
    pub fn write_file(path: &Path, rows: &[SurveyRow]) -> Result<(), ExportError> {
        let text = to_delimited_text(rows)?;
        let mut writer = writer_for_path(path)?;
        writer.write_all(text.as_bytes())?;
        writer.flush()?;
        tracing::info!(path = %path.display(), rows = rows.len(), "wrote MIA export");
        Ok(())
    }
}

/// Nine-column survey table.
pub mod table {
    use std::io::Write;

    use wellpath_core::fixed::to_fixed_2;
    use wellpath_trajectory::SurveyRow;

    use crate::ExportError;

    pub const HEADER: [&str; 10] = [
        "Point",
        "MD (ft)",
        "Inc (deg)",
        "Azi (deg)",
        "North (ft)",
        "East (ft)",
        "TVD (ft)",
        "RF",
        "DLS",
        "Dogleg",
    ];

    /// Write every survey figure as CSV, one record per row plus the header.
    pub fn write_survey_table<W: Write>(writer: W, rows: &[SurveyRow]) -> Result<(), ExportError> {
        if rows.is_empty() {
            return Err(ExportError::NoData);
        }

        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(HEADER)?;
        for (index, row) in rows.iter().enumerate() {
            let point = (index + 1).to_string();
            let figures = [
                row.measured_depth,
                row.inclination,
                row.azimuth,
                row.north,
                row.east,
                row.tvd,
                row.rf,
                row.dls,
                row.dogleg,
            ]
            .map(to_fixed_2);
            csv.write_record(std::iter::once(point.as_str()).chain(figures.iter().map(String::as_str)))?;
        }
        csv.flush()?;
        Ok(())
    }
}
