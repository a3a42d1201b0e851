use crate::services::places_client::places_service::PlacesService;

#[derive(Clone)]
pub struct AppState {
    pub places_service: PlacesService,
}
