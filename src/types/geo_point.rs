use serde::{Deserialize, Serialize};

use crate::utils::distance::distance;

/// A position on the globe in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        GeoPoint {
            latitude,
            longitude,
        }
    }

    /// Builds a point from a GeoJSON-style `[lon, lat]` pair.
    pub fn from_lon_lat(longitude: f64, latitude: f64) -> Self {
        GeoPoint {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to `other` in kilometers.
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        distance(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lon_lat_constructor_swaps_axes() {
        let point = GeoPoint::from_lon_lat(-74.0, 40.71);

        assert_eq!(point, GeoPoint::new(40.71, -74.0));
    }

    #[test]
    fn distance_to_matches_calculator() {
        let a = GeoPoint::new(40.7128, -74.0060);
        let b = GeoPoint::new(34.0522, -118.2437);

        assert_eq!(a.distance_to(&b), distance(&a, &b));
        assert!(a.distance_to(&b) > 3900.0 && a.distance_to(&b) < 4000.0);
    }
}
