//! Projects the two corridor boundary lines at an exact perpendicular
//! distance from every track point.

use crate::{
    geodesic::{bearing, normalize_deg, project, signed_diff_deg, Coord},
    track::Track,
};

/// The pair of boundary lines offset from the track. `left[i]` and
/// `right[i]` are the offset points for `track[i]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Corridor {
    pub left: Vec<Coord>,
    pub right: Vec<Coord>,
}

impl Corridor {
    /// Project both boundary lines at exactly `distance_m` from every
    /// track point. `None` when the track is too short to carry a
    /// heading.
    pub fn from_track(track: &Track, distance_m: f64) -> Option<Self> {
        let points = track.points();
        if points.len() < 2 {
            return None;
        }

        let mut left = Vec::with_capacity(points.len());
        let mut right = Vec::with_capacity(points.len());
        for (i, &point) in points.iter().enumerate() {
            let heading = local_heading(points, i);
            left.push(project(point, normalize_deg(heading - 90.0), distance_m));
            right.push(project(point, normalize_deg(heading + 90.0), distance_m));
        }

        Some(Self { left, right })
    }
}

/// Smoothed heading at index `i`: the single leg bearing at either
/// end, the wrap-corrected bisector of the incoming and outgoing
/// bearings at interior points. The bisector keeps the offset smooth
/// through turns instead of jagged.
fn local_heading(points: &[Coord], i: usize) -> f64 {
    if i == 0 {
        bearing(points[0], points[1])
    } else if i == points.len() - 1 {
        bearing(points[i - 1], points[i])
    } else {
        let inbound = bearing(points[i - 1], points[i]);
        let outbound = bearing(points[i], points[i + 1]);
        normalize_deg(inbound + signed_diff_deg(inbound, outbound) / 2.0)
    }
}
