//! Raw line segments as extracted from the input document, and the
//! classifier that separates real track legs from the short dashed
//! connector lines drawn between turning points.

use crate::geodesic::{distance, Coord};

/// A 2-point segment shorter than this is a cosmetic connector, not a
/// track leg.
pub const DASHED_CONNECTOR_MAX_M: f64 = 500.0;

/// One LineString feature from the input, with its position in the
/// original feature list.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    /// Order of appearance in the input. Sole sort key when the track
    /// is reassembled; input order encodes flight direction.
    pub index: usize,
    pub name: String,
    pub coords: Vec<Coord>,
}

impl Segment {
    pub fn new(index: usize, name: impl Into<String>, coords: Vec<Coord>) -> Self {
        Self {
            index,
            name: name.into(),
            coords,
        }
    }

    /// Whether this segment is a dashed connector between turning
    /// points rather than a leg of the track: exactly two coordinates
    /// and strictly shorter than [`DASHED_CONNECTOR_MAX_M`]. The input
    /// format carries no type tag, so point count and length are the
    /// only structural signal.
    pub fn is_dashed_connector(&self) -> bool {
        match self.coords.as_slice() {
            [a, b] => distance(*a, *b) < DASHED_CONNECTOR_MAX_M,
            _ => false,
        }
    }

    /// Sum of leg lengths in meters.
    pub fn length(&self) -> f64 {
        self.coords.windows(2).map(|leg| distance(leg[0], leg[1])).sum()
    }
}

/// Split segments into main-track candidates and dashed connectors,
/// preserving input order within each partition.
pub fn partition(segments: Vec<Segment>) -> (Vec<Segment>, Vec<Segment>) {
    segments
        .into_iter()
        .partition(|segment| !segment.is_dashed_connector())
}
