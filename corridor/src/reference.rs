//! Named reference features (start point, turning points), their
//! resolution onto the track, and the perpendicular distance markers
//! derived from them.

use crate::{
    geodesic::{distance, normalize_deg, project, Coord},
    locate::locate,
    track::Track,
};

/// One nautical mile in meters.
pub const NAUTICAL_MILE_M: f64 = 1_852.0;

/// A named point feature from the input (`SP`, `TP 1`, ...).
#[derive(Clone, Debug, PartialEq)]
pub struct ReferencePoint {
    pub name: String,
    pub coord: Coord,
}

impl ReferencePoint {
    pub fn new(name: impl Into<String>, coord: Coord) -> Self {
        Self {
            name: name.into(),
            coord,
        }
    }
}

/// The start point, if present: the feature named exactly `SP`.
pub fn start_point(points: &[ReferencePoint]) -> Option<&ReferencePoint> {
    points.iter().find(|point| point.name == "SP")
}

/// Turning points (`TP `-prefixed features), ascending by the trailing
/// number. A missing or non-numeric suffix counts as 0.
pub fn turning_points(points: &[ReferencePoint]) -> Vec<&ReferencePoint> {
    let mut turning: Vec<&ReferencePoint> = points
        .iter()
        .filter(|point| point.name.starts_with("TP "))
        .collect();
    turning.sort_by_key(|point| turning_point_number(&point.name));
    turning
}

fn turning_point_number(name: &str) -> u32 {
    name.rsplit(' ')
        .next()
        .and_then(|suffix| suffix.parse().ok())
        .unwrap_or(0)
}

/// The track index nearest to `coord`, plus the distance to it.
///
/// Linear scan with no threshold: a reference point far from any
/// track point still resolves, and the returned distance is the
/// caller's data-quality signal. `None` only for an empty track.
pub fn nearest_index(track: &Track, coord: Coord) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &point) in track.points().iter().enumerate() {
        let d = distance(point, coord);
        if best.map_or(true, |(_, best_d)| d < best_d) {
            best = Some((i, d));
        }
    }
    best
}

/// A 2-point perpendicular cut across the corridor at a fixed distance
/// past a reference point.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub name: String,
    pub left: Coord,
    pub right: Coord,
    /// The track ended before the target distance; the cut sits on the
    /// degenerate final track point.
    pub exhausted: bool,
}

/// Build the perpendicular marker `target_m` meters along the track
/// past `start_index`, spanning `corridor_distance_m` to either side
/// of the located point.
pub fn marker_past(
    track: &Track,
    start_index: usize,
    target_m: f64,
    corridor_distance_m: f64,
    name: impl Into<String>,
) -> Option<Marker> {
    let at = locate(track, start_index, target_m)?;
    Some(Marker {
        name: name.into(),
        left: project(
            at.coord,
            normalize_deg(at.bearing_deg - 90.0),
            corridor_distance_m,
        ),
        right: project(
            at.coord,
            normalize_deg(at.bearing_deg + 90.0),
            corridor_distance_m,
        ),
        exhausted: at.exhausted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{geodesic::bearing, segment::Segment};
    use approx::assert_abs_diff_eq;

    fn named(names: &[&str]) -> Vec<ReferencePoint> {
        names
            .iter()
            .map(|name| ReferencePoint::new(*name, Coord::new(0.0, 0.0, 0.0)))
            .collect()
    }

    #[test]
    fn start_point_matches_exact_name_only() {
        let points = named(&["SP 2", "SPX", "SP", "TP 1"]);
        assert_eq!(start_point(&points).unwrap().name, "SP");
        assert!(start_point(&named(&["SPX", "TP 1"])).is_none());
    }

    #[test]
    fn turning_points_sort_by_trailing_number() {
        let points = named(&["TP 2", "TP 10", "SP", "TP 1", "Target"]);
        let order: Vec<&str> = turning_points(&points)
            .iter()
            .map(|point| point.name.as_str())
            .collect();
        assert_eq!(order, ["TP 1", "TP 2", "TP 10"]);
    }

    #[test]
    fn non_numeric_suffix_sorts_as_zero() {
        let points = named(&["TP 3", "TP alt", "TP 1"]);
        let order: Vec<&str> = turning_points(&points)
            .iter()
            .map(|point| point.name.as_str())
            .collect();
        assert_eq!(order, ["TP alt", "TP 1", "TP 3"]);
    }

    #[test]
    fn nearest_index_scans_the_whole_track() {
        let a = Coord::new(0.0, 0.0, 0.0);
        let b = project(a, 0.0, 2_000.0);
        let c = project(b, 0.0, 2_000.0);
        let track = Track::from_segments(vec![Segment::new(0, "track", vec![a, b, c])]);

        let probe = project(b, 90.0, 150.0);
        let (index, snap) = nearest_index(&track, probe).unwrap();
        assert_eq!(index, 1);
        assert_abs_diff_eq!(snap, 150.0, epsilon = 0.5);

        assert!(nearest_index(&Track::default(), a).is_none());
    }

    #[test]
    fn marker_spans_the_corridor() {
        let a = Coord::new(0.0, 0.0, 0.0);
        let b = project(a, 0.0, 3_000.0);
        let track = Track::from_segments(vec![Segment::new(0, "track", vec![a, b])]);

        let marker = marker_past(&track, 0, 1_000.0, 300.0, "1NM after SP").unwrap();
        assert!(!marker.exhausted);

        let center = project(a, 0.0, 1_000.0);
        assert_abs_diff_eq!(distance(center, marker.left), 300.0, epsilon = 0.5);
        assert_abs_diff_eq!(distance(center, marker.right), 300.0, epsilon = 0.5);
        assert_abs_diff_eq!(distance(marker.left, marker.right), 600.0, epsilon = 1.0);
        assert_abs_diff_eq!(bearing(center, marker.left), 270.0, epsilon = 0.1);
        assert_abs_diff_eq!(bearing(center, marker.right), 90.0, epsilon = 0.1);
    }
}
