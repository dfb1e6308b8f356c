use axum::{
    http::HeaderValue,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::{self, AppConfig, Environment};
use crate::handlers::{self, watch};
use crate::middleware::authenticate;
use crate::state::AppState;

/// Full application router using the global configuration
pub fn app(state: AppState) -> Router {
    app_with_config(state, config::config())
}

pub fn app_with_config(state: AppState, config: &AppConfig) -> Router {
    let mut router = Router::new()
        // Public
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        // Authenticated
        .merge(watch_routes(state.clone()))
        .with_state(state);

    // Global middleware
    if let Some(cors) = cors_layer(config) {
        router = router.layer(cors);
    }
    if config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }
    router
}

fn watch_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/watch/:type/:id",
            get(watch::watchers_get)
                .post(watch::watch_post)
                .delete(watch::watch_delete),
        )
        .route("/watch/:type", get(watch::watch_list))
        .route_layer(middleware::from_fn_with_state(state, authenticate))
}

fn cors_layer(config: &AppConfig) -> Option<CorsLayer> {
    if !config.security.enable_cors {
        return None;
    }
    if config.environment == Environment::Development
        || config.security.cors_origins.iter().any(|origin| origin == "*")
    {
        return Some(CorsLayer::permissive());
    }

    let origins: Vec<HeaderValue> = config
        .security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any),
    )
}
