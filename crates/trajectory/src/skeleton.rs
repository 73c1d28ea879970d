//! Ordered control points: surface, kick-off point, then targets.

use std::fmt;

use wellpath_core::Location;

/// Role of a control point within the skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlPointKind {
    Surface,
    Kop,
    /// 1-based target number.
    Target(usize),
}

impl fmt::Display for ControlPointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Surface => f.write_str("Surface Location"),
            Self::Kop => f.write_str("KOP"),
            Self::Target(n) => write!(f, "Target {n}"),
        }
    }
}

/// `[surface, kop-point, target_1, ..., target_n]`.
///
/// TVD is expected to be non-decreasing along the sequence; nothing here
/// enforces it.
#[derive(Debug, Clone, PartialEq)]
pub struct PathSkeleton {
    points: Vec<Location>,
}

impl PathSkeleton {
    pub fn points(&self) -> &[Location] {
        &self.points
    }

    pub fn surface(&self) -> &Location {
        &self.points[0]
    }

    /// The synthesized point directly below the surface location at KOP depth.
    pub fn kop_point(&self) -> &Location {
        &self.points[1]
    }

    pub fn targets(&self) -> &[Location] {
        &self.points[2..]
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Control points paired with their role, in traversal order.
    pub fn labeled(&self) -> impl Iterator<Item = (ControlPointKind, &Location)> {
        self.points.iter().enumerate().map(|(index, point)| {
            let kind = match index {
                0 => ControlPointKind::Surface,
                1 => ControlPointKind::Kop,
                n => ControlPointKind::Target(n - 1),
            };
            (kind, point)
        })
    }
}

/// Build the skeleton for `surface`, a KOP depth and the ordered targets.
pub fn assemble(surface: &Location, kop: f64, targets: &[Location]) -> PathSkeleton {
    let mut points = Vec::with_capacity(targets.len() + 2);
    points.push(*surface);
    points.push(Location::new(surface.north, surface.east, kop));
    points.extend_from_slice(targets);
    PathSkeleton { points }
}
