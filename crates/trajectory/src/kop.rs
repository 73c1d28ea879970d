//! Kick-off point depth for a build-and-hold profile to the first target.

use wellpath_core::constants::BUILD_RATE_COURSE_FT;
use wellpath_core::fixed::round_2;
use wellpath_core::units::rad_to_deg;
use wellpath_core::vector::horizontal_norm;
use wellpath_core::{KopSpec, Location};

/// Compute the KOP depth (ft) from the straight-line geometry to `first_target`.
///
/// The straight-line length to the target, less the course length needed to
/// build up to the target's inclination at `build_rate` deg/100 ft.
/// A target at TVD 0 yields a meaningless (or `NaN`) depth; callers reject it.
pub fn solve(surface: &Location, first_target: &Location, build_rate: f64) -> f64 {
    let x = surface.east - first_target.east;
    let y = surface.north - first_target.north;
    let tvd = first_target.tvd;

    let hd = horizontal_norm(x, y);
    let md = (tvd * tvd + hd * hd).sqrt();
    let inclination_deg = rad_to_deg((hd / tvd).atan());
    let md_inclined = (inclination_deg / build_rate) * BUILD_RATE_COURSE_FT;

    md - md_inclined
}

/// Resolve the KOP depth used for the skeleton.
///
/// Manual depths pass through untouched. A derived depth is fixed to two
/// decimals, and is `NaN` when there is no target to derive it from.
pub fn resolve(kop: KopSpec, surface: &Location, targets: &[Location], build_rate: f64) -> f64 {
    match kop {
        KopSpec::Manual(depth) => depth,
        KopSpec::Derive => targets
            .first()
            .map_or(f64::NAN, |target| round_2(solve(surface, target, build_rate))),
    }
}
