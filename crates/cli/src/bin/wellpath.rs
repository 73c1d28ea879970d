use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use well_path_planner::WellPathProfile;
use well_path_planner::config::{FieldValue, PlanConfig, RawLocation, load_plan};
use well_path_planner::export::handoff::{
    AxisLabel, HandoffSink, JsonHandoffWriter, PlotHandoff, PlotMode,
};
use well_path_planner::export::{ExportError, mia, table, writer_for_path};
use well_path_planner::model::fixed::to_fixed_2;
use well_path_planner::plan_from_config;

/// Plan a directional well path and report its survey.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Directional well path planner (KOP, TVD stations, MIA survey)"
)]
struct Cli {
    /// Plan file (YAML or TOML) holding surface, targets, kop, interval and build_rate
    #[arg(long, conflicts_with_all = ["surface", "targets"])]
    plan: Option<PathBuf>,

    /// Surface location as "north,east,tvd" (ft)
    #[arg(long, allow_hyphen_values = true)]
    surface: Option<String>,

    /// Target location as "north,east,tvd" (ft); repeat in traversal order
    #[arg(long = "target", allow_hyphen_values = true)]
    targets: Vec<String>,

    /// Manual kick-off point depth in ft (derived from the first target when omitted)
    #[arg(long, allow_hyphen_values = true)]
    kop: Option<String>,

    /// TVD spacing between stations in ft (defaults to 10)
    #[arg(long)]
    interval: Option<f64>,

    /// Build rate used to derive the KOP, deg/100 ft (defaults to 2)
    #[arg(long)]
    build_rate: Option<f64>,

    /// Survey column groups to print
    #[arg(long, value_enum, value_delimiter = ',', default_values_t = [ColumnGroup::WellPath])]
    columns: Vec<ColumnGroup>,

    /// Write the MIA listing (use '-' for stdout)
    #[arg(long, num_args = 0..=1, default_missing_value = mia::FILE_NAME)]
    export: Option<PathBuf>,

    /// Write the full survey table as CSV (use '-' for stdout)
    #[arg(long)]
    table: Option<PathBuf>,

    /// Write the plot handoff document for the visualization layer
    #[arg(long, requires = "plot")]
    handoff: Option<PathBuf>,

    /// Plot mode recorded in the handoff
    #[arg(long, value_enum)]
    plot: Option<PlotArg>,

    /// X axis for 2D plots (MD, Inc, Azi, North, East, TVD, RF, DLS, Dogleg)
    #[arg(long)]
    x_axis: Option<AxisLabel>,

    /// Y axis for 2D plots
    #[arg(long)]
    y_axis: Option<AxisLabel>,

    /// Skip the printed tables
    #[arg(long, default_value_t = false)]
    quiet: bool,
}

#[derive(Copy, Clone, ValueEnum, Debug, PartialEq, Eq)]
enum ColumnGroup {
    /// MD, Inc, Azi
    WellPath,
    /// North, East, TVD
    Xyz,
    /// RF
    Curvature,
    /// DLS, Dogleg
    BuildWalk,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum PlotArg {
    #[value(name = "2d")]
    TwoD,
    #[value(name = "3d")]
    ThreeD,
}

impl From<PlotArg> for PlotMode {
    fn from(value: PlotArg) -> Self {
        match value {
            PlotArg::TwoD => PlotMode::TwoD,
            PlotArg::ThreeD => PlotMode::ThreeD,
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let raw = plan_config(&cli)?;
    let profile = plan_from_config(&raw)?;

    if !cli.quiet {
        print_control_points(&profile);
        println!();
        print_survey(&profile, &cli.columns);
    }

    if let Some(path) = &cli.export {
        match mia::write_file(path, &profile.survey) {
            Ok(()) => eprintln!("MIA export written to {}", path.display()),
            Err(ExportError::NoData) => tracing::warn!("no survey data to export"),
            Err(err) => return Err(err.into()),
        }
    }

    if let Some(path) = &cli.table {
        let writer = writer_for_path(path)?;
        table::write_survey_table(writer, &profile.survey)?;
    }

    if let Some(path) = &cli.handoff {
        let mode = cli.plot.context("--plot is required with --handoff")?;
        let handoff = PlotHandoff::for_mode(&profile, mode.into(), cli.x_axis, cli.y_axis)?;
        let mut sink = JsonHandoffWriter::new(writer_for_path(path)?);
        sink.publish(&handoff)?;
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn plan_config(cli: &Cli) -> anyhow::Result<PlanConfig> {
    let mut raw = match &cli.plan {
        Some(path) => {
            load_plan(path).with_context(|| format!("loading plan {}", path.display()))?
        }
        None => PlanConfig::new(
            cli.surface
                .as_deref()
                .map(RawLocation::from_triplet)
                .unwrap_or_default(),
            cli.targets
                .iter()
                .map(|target| RawLocation::from_triplet(target))
                .collect(),
        ),
    };

    if let Some(kop) = &cli.kop {
        raw.kop = Some(FieldValue::from(kop.as_str()));
    }
    if let Some(interval) = cli.interval {
        raw.interval = interval;
    }
    if let Some(build_rate) = cli.build_rate {
        raw.build_rate = build_rate;
    }
    Ok(raw)
}

fn print_control_points(profile: &WellPathProfile) {
    println!(
        "{:<18} {:>12} {:>12} {:>12}",
        "Location", "N (ft)", "E (ft)", "TVD (ft)"
    );
    for (kind, point) in profile.skeleton.labeled() {
        println!(
            "{:<18} {:>12} {:>12} {:>12}",
            kind.to_string(),
            to_fixed_2(point.north),
            to_fixed_2(point.east),
            to_fixed_2(point.tvd)
        );
    }
}

fn print_survey(profile: &WellPathProfile, groups: &[ColumnGroup]) {
    let shown = |group| groups.contains(&group);
    let mut header = vec!["Point"];
    if shown(ColumnGroup::WellPath) {
        header.extend(["MD (ft)", "Inc (deg)", "Azi (deg)"]);
    }
    if shown(ColumnGroup::Xyz) {
        header.extend(["North (ft)", "East (ft)", "TVD (ft)"]);
    }
    if shown(ColumnGroup::Curvature) {
        header.push("RF");
    }
    if shown(ColumnGroup::BuildWalk) {
        header.extend(["DLS", "Dogleg"]);
    }
    println!("{}", format_row(header.iter().map(|s| s.to_string())));

    for (index, row) in profile.survey.iter().enumerate() {
        let mut cells = vec![(index + 1).to_string()];
        if shown(ColumnGroup::WellPath) {
            cells.extend([row.measured_depth, row.inclination, row.azimuth].map(to_fixed_2));
        }
        if shown(ColumnGroup::Xyz) {
            cells.extend([row.north, row.east, row.tvd].map(to_fixed_2));
        }
        if shown(ColumnGroup::Curvature) {
            cells.push(to_fixed_2(row.rf));
        }
        if shown(ColumnGroup::BuildWalk) {
            cells.extend([row.dls, row.dogleg].map(to_fixed_2));
        }
        println!("{}", format_row(cells.into_iter()));
    }
}

fn format_row(cells: impl Iterator<Item = String>) -> String {
    cells
        .map(|cell| format!("{cell:>12}"))
        .collect::<Vec<_>>()
        .join(" ")
}
