use std::time::Duration;

use crate::{
    routes::apply_routes,
    services::places_client::places_service::{PlacesService, PlacesServiceConfig},
    types::app_state::AppState,
};
use axum::{routing::get, Router};
use serde::Deserialize;
use tower_http::cors::CorsLayer;

/// Settings read from the environment (`PLACES_API_KEY`, `PLACES_HOST`, ...).
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub places_api_key: String,

    #[serde(default = "default_places_host")]
    pub places_host: String,

    #[serde(default = "default_places_timeout_seconds")]
    pub places_timeout_seconds: u64,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_places_host() -> String {
    "https://api.geoapify.com".to_string()
}

fn default_places_timeout_seconds() -> u64 {
    30
}

fn default_port() -> u16 {
    3000
}

impl AppConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env::<AppConfig>()
    }
}

pub fn gen_app(config: AppConfig) -> Router {
    let cors_middleware = CorsLayer::new();
    let state = AppState {
        places_service: PlacesService::new(PlacesServiceConfig {
            api_key: config.places_api_key,
            host: config.places_host.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(config.places_timeout_seconds),
        }),
    };

    apply_routes(Router::new())
        .route("/", get(root))
        .layer(cors_middleware)
        .with_state(state)
}

// basic handler that responds with a static string
async fn root() -> &'static str {
    "Nearby places finder"
}

#[cfg(test)]
pub struct MockApp {
    pub app: Router,
    pub places_server: mockito::ServerGuard,
}

#[cfg(test)]
pub async fn gen_mock_app() -> MockApp {
    let places_server = mockito::Server::new_async().await;

    let app = gen_app(AppConfig {
        places_api_key: "key".to_string(),
        places_host: places_server.url(),
        places_timeout_seconds: 5,
        port: 0,
    });

    MockApp { app, places_server }
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    use super::*;

    #[tokio::test]
    async fn hello_world() {
        let mock_app = gen_mock_app().await;

        let response = mock_app
            .app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn config_defaults() {
        let config: AppConfig =
            envy::from_iter(vec![("PLACES_API_KEY".to_string(), "abc".to_string())]).unwrap();

        assert_eq!(config.places_api_key, "abc");
        assert_eq!(config.places_host, "https://api.geoapify.com");
        assert_eq!(config.places_timeout_seconds, 30);
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn config_requires_api_key() {
        let result = envy::from_iter::<_, AppConfig>(vec![(
            "PLACES_HOST".to_string(),
            "http://localhost:9000".to_string(),
        )]);

        assert!(result.is_err());
    }

    #[test]
    fn config_overrides() {
        let config: AppConfig = envy::from_iter(vec![
            ("PLACES_API_KEY".to_string(), "abc".to_string()),
            ("PLACES_HOST".to_string(), "http://localhost:9000".to_string()),
            ("PLACES_TIMEOUT_SECONDS".to_string(), "7".to_string()),
            ("PORT".to_string(), "8080".to_string()),
        ])
        .unwrap();

        assert_eq!(config.places_host, "http://localhost:9000");
        assert_eq!(config.places_timeout_seconds, 7);
        assert_eq!(config.port, 8080);
    }
}
