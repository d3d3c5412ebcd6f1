//! One corridor run end to end: classify raw segments, stitch the
//! track, project the boundary lines, cut the distance markers.

use crate::{
    corridor::Corridor,
    reference::{
        marker_past, nearest_index, start_point, turning_points, Marker, ReferencePoint,
        NAUTICAL_MILE_M,
    },
    segment::{partition, Segment},
    track::Track,
};
use log::{debug, info, warn};
use serde::Serialize;

/// Nautical miles past the start point at which its marker is cut.
const START_MARKER_NM: f64 = 5.0;

/// Tuning inputs for a run. The corridor distance parameterizes every
/// offset and marker computation; it is the only numeric knob besides
/// the track itself.
#[derive(Clone, Copy, Debug)]
pub struct Params {
    pub corridor_distance_m: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            corridor_distance_m: 300.0,
        }
    }
}

/// Everything one run produces.
#[derive(Clone, Debug)]
pub struct Run {
    pub track: Track,
    /// `None` when the input had no usable main-track geometry.
    pub corridor: Option<Corridor>,
    pub markers: Vec<Marker>,
    pub report: Report,
}

/// Machine-readable account of what a run did, in place of print
/// statements accumulated inside the algorithms.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Report {
    pub main_segments: usize,
    pub dashed_connectors: usize,
    pub track_points: usize,
    pub track_length_m: f64,
    pub track_length_nm: f64,
    pub corridor_distance_m: f64,
    pub markers: Vec<MarkerRecord>,
}

/// How one marker was placed.
#[derive(Clone, Debug, Serialize)]
pub struct MarkerRecord {
    pub name: String,
    /// Track index the reference feature resolved to.
    pub track_index: usize,
    /// Distance from the reference feature to that track index, in
    /// meters. Large values mean the feature sits far off the track.
    pub snap_distance_m: f64,
    /// Marker distance along the track past the resolved index.
    pub target_m: f64,
    pub exhausted: bool,
}

/// Run the whole engine over the extracted line segments and named
/// point features.
///
/// Never fails: whatever subset of corridor and marker geometry the
/// input supports is produced, and everything skipped or degenerate is
/// visible in the [`Report`].
pub fn run(segments: Vec<Segment>, points: &[ReferencePoint], params: &Params) -> Run {
    let (main, dashed) = partition(segments);
    let main_segments = main.len();
    for connector in &dashed {
        debug!(
            "dashed connector {}: {:.1}m, excluded",
            connector.index,
            connector.length()
        );
    }

    let track = Track::from_segments(main);
    let track_length_m = track.total_length();
    info!(
        "track: {} points, {:.1}m ({:.2} NM) from {} segments; {} dashed connectors excluded",
        track.len(),
        track_length_m,
        track_length_m / NAUTICAL_MILE_M,
        main_segments,
        dashed.len()
    );

    let corridor = Corridor::from_track(&track, params.corridor_distance_m);

    let mut markers = Vec::new();
    let mut records = Vec::new();
    if corridor.is_some() {
        if let Some(sp) = start_point(points) {
            place_marker(
                &track,
                sp,
                START_MARKER_NM * NAUTICAL_MILE_M,
                params.corridor_distance_m,
                format!("{START_MARKER_NM:.0}NM after SP"),
                &mut markers,
                &mut records,
            );
        }
        for tp in turning_points(points) {
            place_marker(
                &track,
                tp,
                NAUTICAL_MILE_M,
                params.corridor_distance_m,
                format!("1NM after {}", tp.name),
                &mut markers,
                &mut records,
            );
        }
    }

    let report = Report {
        main_segments,
        dashed_connectors: dashed.len(),
        track_points: track.len(),
        track_length_m,
        track_length_nm: track_length_m / NAUTICAL_MILE_M,
        corridor_distance_m: params.corridor_distance_m,
        markers: records,
    };

    Run {
        track,
        corridor,
        markers,
        report,
    }
}

fn place_marker(
    track: &Track,
    reference: &ReferencePoint,
    target_m: f64,
    corridor_distance_m: f64,
    name: String,
    markers: &mut Vec<Marker>,
    records: &mut Vec<MarkerRecord>,
) {
    let Some((track_index, snap_distance_m)) = nearest_index(track, reference.coord) else {
        return;
    };
    debug!(
        "{}: track index {track_index}, {snap_distance_m:.1}m from feature",
        reference.name
    );

    let Some(marker) = marker_past(track, track_index, target_m, corridor_distance_m, name) else {
        warn!(
            "{}: no track leg past index {track_index}, marker skipped",
            reference.name
        );
        return;
    };
    if marker.exhausted {
        warn!(
            "{}: track ends before {target_m:.0}m, marker degenerates to the track end",
            reference.name
        );
    }

    records.push(MarkerRecord {
        name: marker.name.clone(),
        track_index,
        snap_distance_m,
        target_m,
        exhausted: marker.exhausted,
    });
    markers.push(marker);
}
