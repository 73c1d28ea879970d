//! Densify a control-point sequence into stations at a fixed TVD spacing.

use wellpath_core::{Location, Station};

/// Interpolate stations every `interval` ft of TVD along `points`.
///
/// Each consecutive pair contributes `floor(ΔTVD / interval) + 1` stations,
/// starting at the pair's first point, with north/east interpolated linearly
/// by TVD and every coordinate fixed to two decimals. The last control point
/// is then appended verbatim, so the final station always matches it even
/// when the last interpolated station already sits on the same depth.
///
/// A pair with equal TVDs still emits its first station, whose north/east come
/// out `NaN` (`0 / 0` factor). Pairs with decreasing TVD emit nothing.
pub fn interpolate(points: &[Location], interval: f64) -> Vec<Station> {
    let Some(last) = points.last() else {
        return Vec::new();
    };

    let mut stations = Vec::new();
    for pair in points.windows(2) {
        let (start, end) = (&pair[0], &pair[1]);
        let span = end.tvd - start.tvd;

        for step in 0..station_count(span, interval) {
            let current_tvd = start.tvd + step as f64 * interval;
            let factor = (current_tvd - start.tvd) / span;
            let north = start.north + factor * (end.north - start.north);
            let east = start.east + factor * (end.east - start.east);
            stations.push(Station::fixed(north, east, current_tvd));
        }
    }
    stations.push(Station::verbatim(last));

    tracing::debug!(
        segments = points.len().saturating_sub(1),
        stations = stations.len(),
        interval,
        "interpolated stations"
    );
    stations
}

/// Stations [`interpolate`] emits for `points`, the appended endpoint included.
pub fn station_total(points: &[Location], interval: f64) -> u64 {
    if points.is_empty() {
        return 0;
    }
    points
        .windows(2)
        .map(|pair| station_count(pair[1].tvd - pair[0].tvd, interval))
        .fold(1, u64::saturating_add)
}

/// Number of stations `0..=floor(span / interval)`; zero when the floor is negative or undefined.
fn station_count(span: f64, interval: f64) -> u64 {
    let steps = (span / interval).floor();
    if steps >= 0.0 {
        (steps as u64).saturating_add(1)
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::{interpolate, station_count, station_total};
    use wellpath_core::Location;

    #[test]
    fn station_count_covers_inclusive_range() {
        assert_eq!(station_count(500.0, 500.0), 2);
        assert_eq!(station_count(2_500.0, 500.0), 6);
        assert_eq!(station_count(499.0, 500.0), 1);
        assert_eq!(station_count(0.0, 10.0), 1);
    }

    #[test]
    fn station_count_is_zero_for_rising_or_undefined_spans() {
        assert_eq!(station_count(-10.0, 10.0), 0);
        assert_eq!(station_count(f64::NAN, 10.0), 0);
        assert_eq!(station_count(100.0, f64::NAN), 0);
    }

    #[test]
    fn station_total_matches_interpolated_length() {
        let points = [
            Location::new(0.0, 0.0, 0.0),
            Location::new(0.0, 0.0, 500.0),
            Location::new(100.0, 100.0, 3_000.0),
            Location::new(120.0, 80.0, 2_900.0),
        ];
        for interval in [10.0, 333.0, 500.0, 5_000.0] {
            let expected = interpolate(&points, interval).len() as u64;
            assert_eq!(station_total(&points, interval), expected, "interval {interval}");
        }
        assert_eq!(station_total(&[], 10.0), 0);
        assert_eq!(station_total(&points, 1e-300), u64::MAX);
    }
}
