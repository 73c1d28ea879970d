//! End-to-end planner chaining KOP resolution, path assembly, interpolation and survey.

use wellpath_core::{Station, WellPlan};

use crate::interpolate::interpolate;
use crate::kop;
use crate::skeleton::{self, PathSkeleton};
use crate::survey::{self, SurveyRow};

/// Everything computed for one planning request.
#[derive(Debug, Clone, PartialEq)]
pub struct WellPathProfile {
    /// KOP depth used for the skeleton (ft).
    pub kop: f64,
    pub skeleton: PathSkeleton,
    pub stations: Vec<Station>,
    /// Index-aligned with `stations`.
    pub survey: Vec<SurveyRow>,
}

/// Plan the well path for a validated request.
///
/// Pure: identical plans yield identical profiles. Degenerate geometry is not
/// rejected here and surfaces as `NaN`/infinite figures in the survey.
pub fn plan_well(plan: &WellPlan) -> WellPathProfile {
    let _span = tracing::debug_span!("plan_well", targets = plan.targets.len()).entered();

    let kop = kop::resolve(plan.kop, &plan.surface, &plan.targets, plan.build_rate);
    tracing::debug!(kop, mode = ?plan.kop, "resolved kick-off point");

    let skeleton = skeleton::assemble(&plan.surface, kop, &plan.targets);
    let stations = interpolate(skeleton.points(), plan.interval);
    let survey = survey::compute(&stations);

    WellPathProfile {
        kop,
        skeleton,
        stations,
        survey,
    }
}
