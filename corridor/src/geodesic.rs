//! Spherical-earth primitives: great-circle distance, initial
//! bearing, and direct projection. Everything else in this crate is
//! built on these three functions.

/// Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A `lon,lat,alt` triple in degrees/degrees/meters.
///
/// Altitude is carried through all computations but does not
/// participate in distance or bearing math.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coord {
    pub lon: f64,
    pub lat: f64,
    pub alt: f64,
}

impl Coord {
    pub fn new(lon: f64, lat: f64, alt: f64) -> Self {
        Self { lon, lat, alt }
    }
}

/// Great-circle distance from `a` to `b` in meters, via the Haversine
/// formula. Symmetric in its arguments.
pub fn distance(a: Coord, b: Coord) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlon = (b.lon - a.lon).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().asin()
}

/// Initial bearing from `a` to `b` in degrees `[0, 360)`.
///
/// Degenerate when the points coincide; returns 0 so a duplicated
/// vertex in noisy input cannot abort a run.
pub fn bearing(a: Coord, b: Coord) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlon = (b.lon - a.lon).to_radians();

    let y = dlon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();
    normalize_deg(y.atan2(x).to_degrees())
}

/// The coordinate reached by traveling `distance_m` meters from
/// `origin` along `bearing_deg`, via the direct spherical solution.
/// Altitude passes through unchanged.
pub fn project(origin: Coord, bearing_deg: f64, distance_m: f64) -> Coord {
    let lat1 = origin.lat.to_radians();
    let lon1 = origin.lon.to_radians();
    let brg = bearing_deg.to_radians();
    let angular = distance_m / EARTH_RADIUS_M;

    let lat2 = (lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * brg.cos()).asin();
    let lon2 = lon1
        + (brg.sin() * angular.sin() * lat1.cos()).atan2(angular.cos() - lat1.sin() * lat2.sin());

    Coord {
        lon: lon2.to_degrees(),
        lat: lat2.to_degrees(),
        alt: origin.alt,
    }
}

/// Normalize an angle in degrees into `[0, 360)`.
pub fn normalize_deg(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Signed angular difference `b - a` in degrees, normalized into
/// `(-180, 180]` so headings that straddle north compare correctly.
pub(crate) fn signed_diff_deg(a: f64, b: f64) -> f64 {
    let diff = (b - a).rem_euclid(360.0);
    if diff > 180.0 {
        diff - 360.0
    } else {
        diff
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    const ORIGIN: Coord = Coord {
        lon: 0.0,
        lat: 0.0,
        alt: 0.0,
    };

    #[test]
    fn one_degree_of_latitude() {
        let north = Coord::new(0.0, 1.0, 0.0);
        // 2πR / 360
        assert_relative_eq!(distance(ORIGIN, north), 111_194.926, max_relative = 1e-6);
        assert_relative_eq!(
            distance(ORIGIN, north),
            distance(north, ORIGIN),
            max_relative = 1e-12
        );
    }

    #[test]
    fn bearing_cardinal_directions() {
        assert_abs_diff_eq!(bearing(ORIGIN, Coord::new(0.0, 1.0, 0.0)), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(bearing(ORIGIN, Coord::new(1.0, 0.0, 0.0)), 90.0, epsilon = 1e-9);
        assert_abs_diff_eq!(
            bearing(ORIGIN, Coord::new(0.0, -1.0, 0.0)),
            180.0,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            bearing(ORIGIN, Coord::new(-1.0, 0.0, 0.0)),
            270.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn bearing_of_coincident_points_is_zero() {
        assert_eq!(bearing(ORIGIN, ORIGIN), 0.0);
    }

    #[test]
    fn project_inverts_distance_and_bearing() {
        let start = Coord::new(11.57, 48.14, 520.0);
        for brg in [0.0, 37.5, 90.0, 215.0, 359.0] {
            let there = project(start, brg, 12_345.0);
            assert_relative_eq!(distance(start, there), 12_345.0, max_relative = 1e-9);
            assert_abs_diff_eq!(bearing(start, there), brg, epsilon = 1e-6);
            assert_eq!(there.alt, 520.0);
        }
    }

    #[test]
    fn normalize_wraps_into_range() {
        assert_eq!(normalize_deg(-90.0), 270.0);
        assert_eq!(normalize_deg(360.0), 0.0);
        assert_eq!(normalize_deg(725.0), 5.0);
    }

    #[test]
    fn signed_diff_straddles_north() {
        assert_eq!(signed_diff_deg(350.0, 10.0), 20.0);
        assert_eq!(signed_diff_deg(10.0, 350.0), -20.0);
        assert_eq!(signed_diff_deg(0.0, 180.0), 180.0);
    }
}
