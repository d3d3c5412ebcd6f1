//! Locates the exact interpolated point at a target distance along
//! the track.

use crate::{
    geodesic::{bearing, distance, project, Coord},
    track::Track,
};

/// The resolved point at a target distance along the track.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AlongTrack {
    pub coord: Coord,
    /// Bearing of the leg the point falls on, in degrees.
    pub bearing_deg: f64,
    /// The track ended before the target distance was reached; `coord`
    /// is the final track point rather than a true interpolation.
    pub exhausted: bool,
}

/// Walk forward from `start_index` accumulating leg lengths and return
/// the exact coordinate `target_m` meters along the track, together
/// with the local leg bearing.
///
/// The point is obtained by projecting along the containing leg by the
/// remaining distance, never by snapping to the nearest vertex.
/// Returns `None` when no leg follows `start_index`; if the track runs
/// out before `target_m` the last point is returned with `exhausted`
/// set, so callers can distinguish the degenerate fallback without the
/// run failing.
pub fn locate(track: &Track, start_index: usize, target_m: f64) -> Option<AlongTrack> {
    let points = track.points();
    if start_index + 1 >= points.len() {
        return None;
    }

    let mut remaining = target_m;
    for leg in start_index..points.len() - 1 {
        let leg_len = distance(points[leg], points[leg + 1]);
        if remaining <= leg_len {
            let leg_bearing = bearing(points[leg], points[leg + 1]);
            return Some(AlongTrack {
                coord: project(points[leg], leg_bearing, remaining),
                bearing_deg: leg_bearing,
                exhausted: false,
            });
        }
        remaining -= leg_len;
    }

    let last = points.len() - 1;
    Some(AlongTrack {
        coord: points[last],
        bearing_deg: bearing(points[last - 1], points[last]),
        exhausted: true,
    })
}
