pub mod app_error;
pub mod distance;
pub mod validated_query;
