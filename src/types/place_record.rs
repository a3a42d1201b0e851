use std::fmt;

use serde_json::Value;

use super::geo_point::GeoPoint;

/// Placeholder for a field the provider did not return.
pub const UNKNOWN_SENTINEL: &str = "N/A";

#[derive(Debug, Clone, PartialEq)]
pub enum PlaceField {
    Known(String),
    Unknown,
}

impl PlaceField {
    pub fn as_str(&self) -> &str {
        match self {
            PlaceField::Known(value) => value,
            PlaceField::Unknown => UNKNOWN_SENTINEL,
        }
    }
}

/// Strings are kept as-is, numbers and booleans keep their JSON text,
/// anything else counts as missing.
impl From<Option<Value>> for PlaceField {
    fn from(value: Option<Value>) -> Self {
        match value {
            Some(Value::String(s)) => PlaceField::Known(s),
            Some(v @ (Value::Number(_) | Value::Bool(_))) => PlaceField::Known(v.to_string()),
            _ => PlaceField::Unknown,
        }
    }
}

impl fmt::Display for PlaceField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaceRecord {
    pub name: PlaceField,
    pub street: PlaceField,
    pub city: PlaceField,
    pub phone: PlaceField,
    pub website: PlaceField,
    pub location: GeoPoint,
    pub distance_km: f64,
}
