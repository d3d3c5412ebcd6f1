//! Stitches an ordered list of main-track segments into one
//! continuous, duplicate-free polyline.

use crate::{
    geodesic::{distance, Coord},
    segment::Segment,
};
use log::debug;

/// Consecutive segment endpoints closer than this are the same
/// physical vertex and are collapsed when segments are joined.
pub const STITCH_TOLERANCE_M: f64 = 50.0;

/// The continuous flight path reconstructed from main-track segments.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Track(Vec<Coord>);

impl Track {
    /// Assemble the track from main-track segments.
    ///
    /// Segments are processed ascending by origin index, never by
    /// proximity. Where a segment starts within
    /// [`STITCH_TOLERANCE_M`] of the previous end the duplicate vertex
    /// is dropped; a larger gap (the track resuming after an excluded
    /// connector) is preserved as-is, not bridged.
    pub fn from_segments(mut segments: Vec<Segment>) -> Self {
        segments.sort_by_key(|segment| segment.index);

        let mut coords: Vec<Coord> = Vec::new();
        for segment in &segments {
            debug!(
                "segment {}: {} coords, {:.1}m",
                segment.index,
                segment.coords.len(),
                segment.length()
            );
            match (coords.last().copied(), segment.coords.first().copied()) {
                (Some(last), Some(first)) if distance(last, first) < STITCH_TOLERANCE_M => {
                    coords.extend_from_slice(&segment.coords[1..]);
                }
                _ => coords.extend_from_slice(&segment.coords),
            }
        }

        Track(coords)
    }

    pub fn points(&self) -> &[Coord] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<Coord> {
        self.0.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total length in meters.
    pub fn total_length(&self) -> f64 {
        self.0.windows(2).map(|leg| distance(leg[0], leg[1])).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geodesic::project;
    use approx::assert_relative_eq;

    const START: Coord = Coord {
        lon: 8.0,
        lat: 47.0,
        alt: 1200.0,
    };

    #[test]
    fn shared_endpoint_is_collapsed() {
        let mid = project(START, 90.0, 2_000.0);
        let near_mid = project(mid, 90.0, 10.0);
        let end = project(mid, 90.0, 2_000.0);

        let first = Segment::new(0, "leg 1", vec![START, mid]);
        let second = Segment::new(1, "leg 2", vec![near_mid, end]);
        let track = Track::from_segments(vec![first, second]);

        // len(seg1) + len(seg2) - 1, no duplicate adjacent vertex.
        assert_eq!(track.len(), 3);
        for leg in track.points().windows(2) {
            assert!(distance(leg[0], leg[1]) > STITCH_TOLERANCE_M);
        }
    }

    #[test]
    fn gap_is_preserved() {
        let mid = project(START, 90.0, 2_000.0);
        let resume = project(mid, 90.0, 400.0);
        let end = project(resume, 90.0, 2_000.0);

        let first = Segment::new(0, "leg 1", vec![START, mid]);
        let second = Segment::new(1, "leg 2", vec![resume, end]);
        let track = Track::from_segments(vec![first, second]);

        assert_eq!(track.len(), 4);
        assert_relative_eq!(track.total_length(), 4_400.0, max_relative = 1e-6);
    }

    #[test]
    fn segments_join_by_origin_index_not_input_order() {
        let mid = project(START, 0.0, 1_000.0);
        let end = project(mid, 0.0, 1_000.0);

        let later = Segment::new(7, "leg 2", vec![mid, end]);
        let earlier = Segment::new(3, "leg 1", vec![START, mid]);
        let track = Track::from_segments(vec![later, earlier]);

        assert_eq!(track.len(), 3);
        assert_eq!(track.get(0), Some(START));
        assert_eq!(track.get(2), Some(end));
    }

    #[test]
    fn no_segments_yields_empty_track() {
        let track = Track::from_segments(Vec::new());
        assert!(track.is_empty());
        assert_eq!(track.total_length(), 0.0);
    }
}
