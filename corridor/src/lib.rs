//! # Corridor
//!
//! `corridor` turns a raw, segmented flight track into a navigable
//! safety corridor: two boundary lines offset a fixed perpendicular
//! distance from the track, plus perpendicular distance markers cut at
//! exact great-circle distances past named reference points.
//!
//! The whole crate is a single-pass, purely computational pipeline
//! over immutable inputs; see [`run`].

mod corridor;
mod geodesic;
mod locate;
mod pipeline;
mod reference;
mod segment;
mod track;

pub use crate::{
    corridor::Corridor,
    geodesic::{bearing, distance, normalize_deg, project, Coord, EARTH_RADIUS_M},
    locate::{locate, AlongTrack},
    pipeline::{run, MarkerRecord, Params, Report, Run},
    reference::{
        marker_past, nearest_index, start_point, turning_points, Marker, ReferencePoint,
        NAUTICAL_MILE_M,
    },
    segment::{partition, Segment, DASHED_CONNECTOR_MAX_M},
    track::{Track, STITCH_TOLERANCE_M},
};
