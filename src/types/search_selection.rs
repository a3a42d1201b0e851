use super::{geo_point::GeoPoint, place_category::PlaceCategory};

pub const INITIAL_LATITUDE: f64 = 40.7128;
pub const INITIAL_LONGITUDE: f64 = -74.0060;

/// The location and category a caller has currently picked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchSelection {
    pub center: GeoPoint,
    pub category: PlaceCategory,
}

impl Default for SearchSelection {
    fn default() -> Self {
        SearchSelection {
            center: GeoPoint::new(INITIAL_LATITUDE, INITIAL_LONGITUDE),
            category: PlaceCategory::default(),
        }
    }
}
