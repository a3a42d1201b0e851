pub mod geoapify_places_response;
pub mod query_error;
