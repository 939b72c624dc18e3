//! Geographic coordinate type and spherical geometry.
//!
//! `GeoPoint` stores `f64` longitude/latitude.  Tile-boundary arithmetic
//! divides the root span by `2^max_depth`, and the deepest cuts must stay
//! exact enough for boundary binary search; single precision is not.

/// A WGS-84 coordinate pair.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Haversine great-circle distance in metres.
    ///
    /// Accuracy is within ~0.5 % of the ellipsoidal value at city scale,
    /// which is what both edge weights and the router's heuristic need.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        const R: f64 = 6_371_000.0; // mean Earth radius, metres

        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        R * c
    }

    /// Initial bearing (forward azimuth) from `self` toward `other`, in
    /// degrees clockwise from true north, normalized to `[0, 360)`.
    pub fn bearing_deg(self, other: GeoPoint) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let y = d_lon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

        y.atan2(x).to_degrees().rem_euclid(360.0)
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lon, self.lat)
    }
}
