use serde::{Deserialize, Serialize};
use serde_json::Value;

// Values stay untyped here; `normalize_feature` decides what each one becomes.

#[derive(Serialize, Deserialize, Default)]
pub struct GeoapifyPlacesResponseFeatureProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<Value>,
}

#[derive(Serialize, Deserialize)]
pub struct GeoapifyPlacesResponseFeatureGeometry {
    // [lon, lat] for points, nested arrays for other shapes
    #[serde(default)]
    pub coordinates: Value,
}

#[derive(Serialize, Deserialize)]
pub struct GeoapifyPlacesResponseFeature {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<GeoapifyPlacesResponseFeatureProperties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<GeoapifyPlacesResponseFeatureGeometry>,
}

#[derive(Serialize, Deserialize, Default)]
pub struct GeoapifyPlacesResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<GeoapifyPlacesResponseFeature>>,
}
