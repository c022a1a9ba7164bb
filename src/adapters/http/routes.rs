//! HTTP routes and middleware for the API surface.

use std::time::Duration;

use axum::http::HeaderValue;
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

use super::handlers::{
    create_profile, generate_plan, get_plan, root, submit_questionnaire, ApiState,
};

/// Builds the application router: all operations under `/api`, with tracing,
/// CORS, and a request timeout.
pub fn api_router(state: ApiState, server: &ServerConfig) -> Router {
    let api = Router::new()
        .route("/", get(root))
        .route("/questionnaire", post(submit_questionnaire))
        .route("/profile", post(create_profile))
        .route("/plan", post(generate_plan))
        .route("/plan/:profile_id", get(get_plan))
        .with_state(state);

    Router::new().nest("/api", api).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer(server))
            .layer(TimeoutLayer::new(Duration::from_secs(
                server.request_timeout_secs,
            ))),
    )
}

/// CORS policy: operator-configured origin allow-list with credentials.
///
/// With no configured origins every origin is allowed. Credentialed responses
/// cannot use wildcards, so "allow everything" mirrors the request's own
/// origin, method, and headers instead.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins = server.cors_origins_list();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::mirror_request()
    } else {
        AllowOrigin::list(
            origins
                .iter()
                .filter_map(|origin| origin.parse::<HeaderValue>().ok()),
        )
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cors_layer_accepts_configured_origins() {
        let config = ServerConfig {
            cors_origins: Some("http://localhost:5173,http://example.com".to_string()),
            ..Default::default()
        };
        // Construction must not panic; tower-http rejects some combinations
        // (wildcard + credentials) at runtime.
        let _ = cors_layer(&config);
    }

    #[test]
    fn cors_layer_defaults_to_mirrored_origin() {
        let _ = cors_layer(&ServerConfig::default());
    }
}
