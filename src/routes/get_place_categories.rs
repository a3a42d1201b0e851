use crate::types::place_category::PlaceCategory;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct GetPlaceCategoriesResponseDataCategory {
    pub id: String,
    pub code: String,
    pub label: String,
}

#[derive(Serialize, Deserialize)]
pub struct GetPlaceCategoriesResponseData {
    pub categories: Vec<GetPlaceCategoriesResponseDataCategory>,
}

#[derive(Serialize, Deserialize)]
pub struct GetPlaceCategoriesResponse {
    pub data: GetPlaceCategoriesResponseData,
}

pub async fn get_place_categories() -> Response {
    let categories = PlaceCategory::ALL
        .iter()
        .map(|c| GetPlaceCategoriesResponseDataCategory {
            id: c.id().to_string(),
            code: c.provider_code().to_string(),
            label: c.label().to_string(),
        })
        .collect::<Vec<GetPlaceCategoriesResponseDataCategory>>();

    (
        StatusCode::OK,
        Json(GetPlaceCategoriesResponse {
            data: GetPlaceCategoriesResponseData { categories },
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::app::gen_mock_app;

    #[tokio::test]
    async fn lists_all_categories_in_order() {
        let mock_app = gen_mock_app().await;

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .uri("/place-categories")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: GetPlaceCategoriesResponse = serde_json::from_slice(&body).unwrap();

        let ids: Vec<&str> = body.data.categories.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["restaurant", "fuel", "entertainment", "accommodation"]);
        assert_eq!(body.data.categories[1].code, "commercial.fuel");
        assert_eq!(body.data.categories[3].label, "Hotel 🏨");
    }
}
