use axum::{routing::get, Router};

use crate::types::app_state::AppState;

mod get_nearby_places;
mod get_place_categories;

pub fn apply_routes(app: Router<AppState>) -> Router<AppState> {
    app.route(
        "/nearby-places",
        get(get_nearby_places::get_nearby_places),
    )
    .route(
        "/place-categories",
        get(get_place_categories::get_place_categories),
    )
}
