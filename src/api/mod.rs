use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    Json, Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use self::rest::router as rest_router;

pub mod graphql;
pub mod rest;

use crate::{
    infrastructure::config::Config,
    services::errors::{to_response, ServiceError},
};

pub fn build_router(config: Arc<Config>) -> Router {
    let router = Router::new()
        .nest("/api", rest_router())
        .merge(graphql::router())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = cors_layer(&config.app.cors_origins) {
        router.layer(cors)
    } else {
        router
    }
}

pub async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    to_response(ServiceError::NotFound)
}

fn cors_layer(origins: &[String]) -> Option<CorsLayer> {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(%origin, error = %err, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return None;
    }

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cors_disabled_without_valid_origins() {
        assert!(cors_layer(&[]).is_none());
        assert!(cors_layer(&["bad\norigin".to_string()]).is_none());
        assert!(cors_layer(&["http://localhost:3000".to_string()]).is_some());
    }
}
