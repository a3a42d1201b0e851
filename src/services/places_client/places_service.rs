use std::time::Duration;

use serde_json::Value;
use tracing::{debug, info, warn};
use urlencoding::encode;

use super::types::{
    geoapify_places_response::{GeoapifyPlacesResponse, GeoapifyPlacesResponseFeature},
    query_error::QueryError,
};
use crate::types::{
    geo_point::GeoPoint,
    place_category::PlaceCategory,
    place_record::{PlaceField, PlaceRecord},
};

pub const DEFAULT_RADIUS_METERS: u32 = 5000;
pub const DEFAULT_LIMIT: u32 = 20;

#[derive(Clone)]
pub struct PlacesServiceConfig {
    pub api_key: String,
    pub host: String,
    pub timeout: Duration,
}

#[derive(Clone)]
pub struct PlacesService {
    config: PlacesServiceConfig,
    client: reqwest::Client,
}

#[derive(Debug, Clone, Copy)]
pub struct NearbySearchInput {
    pub center: GeoPoint,
    pub category: PlaceCategory,
    pub radius_meters: u32,
    pub limit: u32,
}

impl NearbySearchInput {
    pub fn new(center: GeoPoint, category: PlaceCategory) -> Self {
        Self {
            center,
            category,
            radius_meters: DEFAULT_RADIUS_METERS,
            limit: DEFAULT_LIMIT,
        }
    }

    pub fn with_radius_meters(mut self, radius_meters: u32) -> Self {
        self.radius_meters = radius_meters;
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

impl PlacesService {
    pub fn new(config: PlacesServiceConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Searches the provider for places of `input.category` within a circle
    /// around `input.center`. Results keep the provider's order and carry
    /// their distance to the center. An empty list means the search succeeded
    /// but nothing matched.
    pub async fn find_nearby(
        &self,
        input: NearbySearchInput,
    ) -> Result<Vec<PlaceRecord>, QueryError> {
        info!("Fetching nearby {}s...", input.category.noun());

        let url = format!(
            "{}/v2/places?categories={}&filter=circle:{},{},{}&limit={}&apiKey={}",
            self.config.host,
            encode(input.category.provider_code()),
            input.center.longitude,
            input.center.latitude,
            input.radius_meters,
            input.limit,
            encode(&self.config.api_key)
        );

        let resp = self
            .client
            .get(&url)
            .timeout(self.config.timeout)
            .send()
            .await
            .map_err(|e| {
                // the url carries the api key
                let e = e.without_url();
                warn!("Places request failed: {}", e);
                QueryError::TransportFailure(format!("Failed to send request: {}", e))
            })?;

        let status = resp.status();
        if !status.is_success() {
            warn!("Places provider responded with status {}", status);
            return Err(QueryError::TransportFailure(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let body = resp.json::<GeoapifyPlacesResponse>().await.map_err(|e| {
            let e = e.without_url();
            warn!("Failed to decode places response: {}", e);
            QueryError::TransportFailure(format!("Failed to get response body: {}", e))
        })?;

        let places = body
            .features
            .unwrap_or_default()
            .into_iter()
            .filter_map(|feature| normalize_feature(feature, &input.center))
            .collect::<Vec<PlaceRecord>>();

        info!("Found {} places nearby", places.len());

        Ok(places)
    }
}

fn normalize_feature(
    feature: GeoapifyPlacesResponseFeature,
    center: &GeoPoint,
) -> Option<PlaceRecord> {
    let properties = feature.properties.unwrap_or_default();

    let location = match feature.geometry.as_ref().and_then(|g| point_coordinates(&g.coordinates)) {
        Some(location) => location,
        None => {
            debug!(
                "Skipping place without a point geometry: {}",
                properties
                    .name
                    .as_ref()
                    .and_then(|n| n.as_str())
                    .unwrap_or("unnamed")
            );
            return None;
        }
    };

    Some(PlaceRecord {
        name: PlaceField::from(properties.name),
        street: PlaceField::from(properties.street),
        city: PlaceField::from(properties.city),
        phone: PlaceField::from(properties.phone),
        website: PlaceField::from(properties.website),
        location,
        distance_km: center.distance_to(&location),
    })
}

fn point_coordinates(coordinates: &Value) -> Option<GeoPoint> {
    match coordinates.as_array()?.as_slice() {
        [lon, lat, ..] => {
            let (lon, lat) = (lon.as_f64()?, lat.as_f64()?);
            (lon.is_finite() && lat.is_finite()).then(|| GeoPoint::from_lon_lat(lon, lat))
        }
        _ => None,
    }
}
