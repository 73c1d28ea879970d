//! Trajectory engine: kick-off point, control-point skeleton, TVD stations and survey figures.
//!
//! Every stage is a pure function of its inputs; [`plan_well`] chains them in
//! order (KOP → skeleton → stations → survey).

pub mod interpolate;
pub mod kop;
pub mod plan;
pub mod skeleton;
pub mod survey;

pub use interpolate::interpolate;
pub use plan::{WellPathProfile, plan_well};
pub use skeleton::{ControlPointKind, PathSkeleton, assemble};
pub use survey::{SurveyRow, compute as compute_survey};
pub use wellpath_core::{KopSpec, Location, Station, WellPlan};
