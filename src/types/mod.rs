pub mod app_state;
pub mod geo_point;
pub mod place_category;
pub mod place_record;
pub mod search_selection;
