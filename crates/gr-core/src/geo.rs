//! Geographic coordinate type and spatial utilities.
//!
//! `GeoPoint` uses `f64` latitude/longitude.  Pollution surfaces are
//! evaluated at edge midpoints only a few metres apart, so single precision
//! would collapse neighbouring samples.

/// A WGS-84 geographic coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in metres.
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

    /// Arithmetic mean of the two coordinates.
    ///
    /// Not the great-circle midpoint; at road-segment scale the difference is
    /// far below the resolution of any pollution surface.
    #[inline]
    pub fn midpoint(self, other: GeoPoint) -> GeoPoint {
        GeoPoint {
            lat: (self.lat + other.lat) * 0.5,
            lon: (self.lon + other.lon) * 0.5,
        }
    }

    /// `true` if both components are finite numbers.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
