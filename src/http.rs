//! HTTP transport for landing-forge
//!
//! `POST /api/generate` takes the seven answers as JSON and returns
//! `{ "html", "css" }`, or `{ "error" }` with a non-2xx status.

use std::time::{Duration, Instant};

use axum::{
    BoxError, Json, Router,
    error_handling::HandleErrorLayer,
    extract::{Request, State, rejection::JsonRejection},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tracing::{Instrument, info, warn};
use uuid::Uuid;

use crate::config::Config;
use crate::error::{LandingForgeError, Result};
use crate::form::{FormData, GeneratedPage, RequestError};
use crate::generator::PageGenerator;

/// Shared state for HTTP server
#[derive(Clone)]
pub struct HttpState {
    pub generator: PageGenerator,
}

/// Health check endpoint
pub async fn health_handler() -> impl IntoResponse {
    "ok"
}

/// Generate endpoint
pub async fn generate_handler(
    State(state): State<HttpState>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<GeneratedPage>> {
    let Json(body) = payload.map_err(|e| RequestError::InvalidBody(e.body_text()))?;
    let data = FormData::from_json(&body).inspect_err(|e| warn!("Rejected request: {}", e))?;

    let page = state.generator.generate(&data).await?;
    Ok(Json(page))
}

async fn handle_timeout(err: BoxError) -> Response {
    if err.is::<tower::timeout::error::Elapsed>() {
        warn!("Request timed out");
        (
            StatusCode::GATEWAY_TIMEOUT,
            Json(json!({ "error": "Request timed out" })),
        )
            .into_response()
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": format!("Unhandled internal error: {err}") })),
        )
            .into_response()
    }
}

async fn trace_request(req: Request, next: Next) -> Response {
    let span = tracing::info_span!(
        "request",
        id = %Uuid::new_v4(),
        method = %req.method(),
        path = %req.uri().path(),
    );
    async move {
        let start = Instant::now();
        let resp = next.run(req).await;
        info!(
            "{} in {}ms",
            resp.status(),
            start.elapsed().as_millis()
        );
        resp
    }
    .instrument(span)
    .await
}

/// Build the application router. `request_timeout` of `None` disables the timeout layer.
pub fn router(state: HttpState, request_timeout: Option<Duration>) -> Router {
    let mut app = Router::new()
        .route("/health", get(health_handler))
        .route("/api/generate", post(generate_handler))
        .with_state(state);

    if let Some(timeout) = request_timeout {
        app = app.layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_timeout))
                .timeout(timeout),
        );
    }

    app.layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(middleware::from_fn(trace_request))
}

/// Start the HTTP server
pub async fn serve(config: &Config, generator: PageGenerator) -> Result<()> {
    let timeout = (config.http.request_timeout_ms > 0)
        .then(|| Duration::from_millis(config.http.request_timeout_ms));
    let mode = generator.mode();
    let app = router(HttpState { generator }, timeout);

    let listener = tokio::net::TcpListener::bind(config.http.bind).await?;
    info!(
        "landing-forge listening on http://{} ({:?} mode)",
        config.http.bind, mode
    );

    axum::serve(listener, app)
        .await
        .map_err(|e| LandingForgeError::Http {
            message: e.to_string(),
        })
}
