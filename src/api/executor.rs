//! Runs a single unit of request work and turns its outcome into a response.
//!
//! Failures never escape: typed errors become their mapped status, a panic
//! inside the work becomes a 500.

use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;

use axum::response::{IntoResponse, Response};
use futures::FutureExt;
use serde::Serialize;

use crate::error::ApiError;
use crate::middleware::ApiResult;

pub struct RestExecutor<F> {
    operation: &'static str,
    work: F,
}

impl<F, Fut, T> RestExecutor<F>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = ApiResult<T>>,
    T: Serialize,
{
    pub fn new(operation: &'static str, work: F) -> Self {
        Self { operation, work }
    }

    pub async fn response(self) -> Response {
        let Self { operation, work } = self;
        let outcome = AssertUnwindSafe(async move { work().await })
            .catch_unwind()
            .await;

        match outcome {
            Ok(Ok(success)) => success.into_response(),
            Ok(Err(err)) => {
                if err.is_server_error() {
                    tracing::error!(operation, status = %err.status_code(), "{}", err);
                } else {
                    tracing::warn!(operation, status = %err.status_code(), "{}", err);
                }
                err.into_response()
            }
            Err(panic) => {
                tracing::error!(operation, "request work panicked: {}", panic_message(&panic));
                ApiError::internal_server_error("Unexpected error while processing request")
                    .into_response()
            }
        }
    }
}

fn panic_message(panic: &Box<dyn Any + Send>) -> &str {
    if let Some(msg) = panic.downcast_ref::<&str>() {
        msg
    } else if let Some(msg) = panic.downcast_ref::<String>() {
        msg.as_str()
    } else {
        "non-string panic payload"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::ApiResponse;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn unit_success_is_no_content() {
        let response = RestExecutor::new("test", || async { Ok::<_, ApiError>(ApiResponse::no_content()) })
            .response()
            .await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn typed_error_keeps_its_status() {
        let response = RestExecutor::new("test", || async {
            Err::<ApiResponse<()>, _>(ApiError::forbidden("nope"))
        })
        .response()
        .await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn panic_becomes_internal_error() {
        let response = RestExecutor::new("test", || async {
            if true {
                panic!("collaborator exploded");
            }
            Ok::<_, ApiError>(ApiResponse::no_content())
        })
        .response()
        .await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
