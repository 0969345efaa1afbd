//! HTTP front end: an index page and a route that renders the configured
//! report to PDF.

use crate::config::Config;
use crate::error::AppError;
use crate::report::load_report;
use axum::{
    Json, Router,
    extract::{Request, State},
    http::{StatusCode, header},
    middleware::{self, Next},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde_json::json;
use std::sync::Arc;
use std::time::Instant;

const INDEX_HTML: &str = include_str!("../assets/index.html");

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Report generation failed: {0}")]
    GenerationFailed(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<AppError> for ServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Template(_)
            | AppError::Json(_)
            | AppError::Geometry(_)
            | AppError::Report(_) => ServiceError::GenerationFailed(err.to_string()),
            other => ServiceError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            Self::GenerationFailed(_) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "GenerationFailed",
                self.to_string(),
            ),
            Self::Internal(_) => {
                log::error!("{}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "InternalError",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": code,
            "message": message,
        }));

        (status, body).into_response()
    }
}

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/report", get(report_pdf))
        .route("/health", get(health_check))
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health_check() -> &'static str {
    "ok"
}

/// Renders the configured report. The tree is rebuilt on every request so
/// template edits show up without a restart.
async fn report_pdf(State(state): State<AppState>) -> Result<impl IntoResponse, ServiceError> {
    let config = state.config.clone();
    let pdf_bytes = tokio::task::spawn_blocking(move || {
        let report = load_report(&config.report)?;
        report.to_pdf_bytes()
    })
    .await
    .map_err(|e| ServiceError::Internal(format!("render task failed: {}", e)))??;

    log::info!("Rendered report ({} bytes)", pdf_bytes.len());

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (
                header::CONTENT_DISPOSITION,
                "inline; filename=\"report.pdf\"",
            ),
        ],
        pdf_bytes,
    ))
}

async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;

    log::info!(
        "{} {} -> {} in {:?}",
        method,
        uri,
        response.status().as_u16(),
        started.elapsed()
    );
    response
}

/// Binds the configured address and serves until interrupted.
pub async fn serve(config: Config) -> Result<(), AppError> {
    let address = config.web_server.address.clone();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    log::info!("Listening on {}", listener.local_addr()?);
    log::info!("Endpoints:");
    log::info!("  - GET /");
    log::info!("  - GET /report");
    log::info!("  - GET /health");

    axum::serve(listener, build_router(AppState::new(config)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("Cannot listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http;
    use std::path::PathBuf;
    use tower::ServiceExt;

    fn router(config: Config) -> Router {
        build_router(AppState::new(config))
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
        let response = app
            .oneshot(http::Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|value| value.to_str().unwrap().to_string());
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, content_type, body.to_vec())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, _, body) = get(router(Config::default()), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"ok");
    }

    #[tokio::test]
    async fn test_index_page() {
        let (status, content_type, body) = get(router(Config::default()), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.unwrap().starts_with("text/html"));
        assert!(String::from_utf8(body).unwrap().contains("/report"));
    }

    #[test]
    fn test_index_page_is_self_contained() {
        let page = include_str!("../assets/index.html");
        for marker in ["<link", "<script", "/static/", "src=\"http", "href=\"http"] {
            assert!(!page.contains(marker), "index page references {marker}");
        }
    }

    #[tokio::test]
    async fn test_report_is_pdf() {
        let (status, content_type, body) = get(router(Config::default()), "/report").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/pdf"));
        assert!(body.starts_with(b"%PDF-"));
    }

    #[tokio::test]
    async fn test_missing_template_is_reported_as_json() {
        let mut config = Config::default();
        config.report.template = Some(PathBuf::from("/no/such/template.json"));

        let (status, content_type, body) = get(router(config), "/report").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"], "GenerationFailed");
        assert!(body["message"].as_str().unwrap().contains("template.json"));
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (status, _, _) = get(router(Config::default()), "/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
