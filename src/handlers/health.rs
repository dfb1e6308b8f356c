use axum::{
    extract::State,
    response::{IntoResponse, Json, Response},
};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::state::AppState;

pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "Watcher API",
            "version": version,
            "description": "Entity watch subscriptions",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "watch": "POST|DELETE /watch/:type/:id (admin)",
                "watches": "GET /watch/:type (admin)",
                "watchers": "GET /watch/:type/:id (admin)",
            }
        }
    }))
}

/// 200 with the success envelope while storage answers, otherwise the
/// standard 503 error envelope
pub async fn health(State(state): State<AppState>) -> Response {
    match state.watcher_service.health_check().await {
        Ok(()) => Json(json!({
            "success": true,
            "data": {
                "status": "ok",
                "timestamp": chrono::Utc::now(),
                "storage": "ok"
            }
        }))
        .into_response(),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            ApiError::service_unavailable("Watcher storage unavailable").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::router::app;
    use crate::services::WatcherService;
    use crate::testing::{test_state, Behavior, RecordingWatcherService};

    async fn get_health(service: Arc<dyn WatcherService>) -> (StatusCode, Value) {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = app(test_state(None, service)).oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn reachable_storage_is_ok() {
        let (status, body) = get_health(Arc::new(RecordingWatcherService::new(Behavior::Succeed))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["status"], "ok");
    }

    #[tokio::test]
    async fn unreachable_storage_uses_error_envelope() {
        let (status, body) = get_health(Arc::new(RecordingWatcherService::new(Behavior::Fail))).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            body,
            serde_json::json!({
                "error": true,
                "message": "Watcher storage unavailable",
                "code": "SERVICE_UNAVAILABLE"
            })
        );
    }
}
