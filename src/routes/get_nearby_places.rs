use crate::{
    services::places_client::places_service::NearbySearchInput,
    types::{
        app_state::AppState,
        geo_point::GeoPoint,
        place_category::PlaceCategory,
        search_selection::SearchSelection,
    },
    utils::{app_error::AppError, validated_query::ValidatedQuery},
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
#[cfg(test)]
use axum_macros::debug_handler;
use serde::{Deserialize, Serialize};
use std::{borrow::Borrow, borrow::Cow};
use tracing::error;
use validator::{Validate, ValidationError};

#[derive(Validate, Deserialize)]
pub struct GetNearbyPlacesPayload {
    #[validate(custom(function = "validate_latitude"))]
    #[serde(default = "default_lat")]
    pub lat: f64,

    #[validate(custom(function = "validate_longitude"))]
    #[serde(default = "default_lon")]
    pub lon: f64,

    #[serde(default = "default_category")]
    pub category: PlaceCategory,

    #[validate(range(min = 1, max = 50000, message = "Must be between 1 and 50000 meters"))]
    pub radius: Option<u32>,

    #[validate(range(min = 1, max = 100, message = "Must be between 1 and 100"))]
    pub limit: Option<u32>,
}

fn default_lat() -> f64 {
    SearchSelection::default().center.latitude
}

fn default_lon() -> f64 {
    SearchSelection::default().center.longitude
}

fn default_category() -> PlaceCategory {
    SearchSelection::default().category
}

fn validate_latitude<T: Borrow<f64>>(lat: T) -> Result<(), ValidationError> {
    coordinate_in_range(*lat.borrow(), 90.0, "Must be between -90 and 90")
}

fn validate_longitude<T: Borrow<f64>>(lon: T) -> Result<(), ValidationError> {
    coordinate_in_range(*lon.borrow(), 180.0, "Must be between -180 and 180")
}

fn coordinate_in_range(value: f64, bound: f64, message: &'static str) -> Result<(), ValidationError> {
    if (-bound..=bound).contains(&value) {
        return Ok(());
    }

    let mut err = ValidationError::new("range");
    err.message = Some(Cow::from(message));
    Err(err)
}

impl From<&GetNearbyPlacesPayload> for SearchSelection {
    fn from(payload: &GetNearbyPlacesPayload) -> Self {
        SearchSelection {
            center: GeoPoint::new(payload.lat, payload.lon),
            category: payload.category,
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct GetNearbyPlacesResponseDataPlace {
    pub name: String,
    pub street: String,
    pub city: String,
    pub phone: String,
    pub website: String,
    pub latitude: f64,
    pub longitude: f64,
    pub distance_km: f64,
}

#[derive(Serialize, Deserialize)]
pub struct GetNearbyPlacesResponseData {
    pub center: GeoPoint,
    pub category: PlaceCategory,
    pub message: String,
    pub places: Vec<GetNearbyPlacesResponseDataPlace>,
}

#[derive(Serialize, Deserialize)]
pub struct GetNearbyPlacesResponse {
    pub data: GetNearbyPlacesResponseData,
}

#[cfg_attr(test, debug_handler)]
pub async fn get_nearby_places(
    State(state): State<AppState>,
    ValidatedQuery(payload): ValidatedQuery<GetNearbyPlacesPayload>,
) -> Result<Response, AppError> {
    let selection = SearchSelection::from(&payload);

    let mut input = NearbySearchInput::new(selection.center, selection.category);
    if let Some(radius) = payload.radius {
        input = input.with_radius_meters(radius);
    }
    if let Some(limit) = payload.limit {
        input = input.with_limit(limit);
    }

    let places = state
        .places_service
        .find_nearby(input)
        .await
        .map_err(|e| {
            error!("Failed to fetch nearby places: {}", e);
            AppError::new(StatusCode::BAD_GATEWAY, "Failed to fetch data from the API.")
        })?;

    let message = match places.len() {
        0 => "No places found nearby.".to_string(),
        n => format!("Found {} places nearby", n),
    };

    let places = places
        .into_iter()
        .map(|p| GetNearbyPlacesResponseDataPlace {
            name: p.name.to_string(),
            street: p.street.to_string(),
            city: p.city.to_string(),
            phone: p.phone.to_string(),
            website: p.website.to_string(),
            latitude: p.location.latitude,
            longitude: p.location.longitude,
            distance_km: p.distance_km,
        })
        .collect::<Vec<GetNearbyPlacesResponseDataPlace>>();

    Ok((
        StatusCode::OK,
        Json(GetNearbyPlacesResponse {
            data: GetNearbyPlacesResponseData {
                center: selection.center,
                category: selection.category,
                message,
                places,
            },
        }),
    )
        .into_response())
}
