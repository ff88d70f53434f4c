//! Static Site Server
//!
//! Serves the built frontend with Axum.
//!
//! # Endpoints
//!
//! - `GET /health/live` - Liveness probe
//! - Files under the dist directory are served as-is
//! - Any other path gets `index.html` so the frontend router can take over.
//!   Known routes answer 200, unknown ones 404.
//!
//! # Example
//!
//! ```rust,ignore
//! use mediclean::config::Config;
//! use mediclean::site::serve;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default().config;
//!     serve(&config.site).await?;
//!     Ok(())
//! }
//! ```

pub mod error;

pub use error::{SiteError, SiteResult};

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::Html,
    routing::{get, MethodRouter},
    Router,
};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::config::SiteConfig;
use crate::routing::Page;

/// Shared state for the app shell handler
#[derive(Debug, Clone)]
pub struct SiteState {
    dist_dir: PathBuf,
}

impl SiteState {
    pub fn new(dist_dir: impl Into<PathBuf>) -> Self {
        Self {
            dist_dir: dist_dir.into(),
        }
    }

    pub fn index_path(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }
}

/// Build the site router with all routes and middleware
pub fn build_router(state: SiteState) -> Router {
    let dist_dir = state.dist_dir.clone();
    let shell: MethodRouter = get(app_shell).with_state(Arc::new(state));

    Router::new()
        .route("/health/live", get(liveness))
        .fallback_service(ServeDir::new(dist_dir).fallback(shell))
        .layer(TraceLayer::new_for_http())
}

/// GET /health/live
async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// Serve `index.html` for paths with no matching file
async fn app_shell(
    State(state): State<Arc<SiteState>>,
    uri: Uri,
) -> SiteResult<(StatusCode, Html<String>)> {
    let path = state.index_path();
    let body = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| SiteError::MissingIndex {
            path: path.clone(),
            error: e.to_string(),
        })?;

    let status = match Page::parse(uri.path()) {
        Page::NotFound => {
            tracing::debug!(path = %uri.path(), "Unknown route");
            StatusCode::NOT_FOUND
        }
        _ => StatusCode::OK,
    };

    Ok((status, Html(body)))
}

/// Start the site server
pub async fn serve(config: &SiteConfig) -> SiteResult<()> {
    let router = build_router(SiteState::new(&config.dist_dir));

    let addr = config.addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(dist_dir = %config.dist_dir, "MediClean site listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| SiteError::Server(e.to_string()))?;

    tracing::info!("MediClean site shut down gracefully");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tempfile::{tempdir, TempDir};
    use tower::util::ServiceExt;

    const SHELL: &str = "<!DOCTYPE html><html><body>MediClean</body></html>";

    fn create_test_app() -> (Router, TempDir) {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), SHELL).unwrap();
        std::fs::write(dir.path().join("app.js"), "console.log('hi');").unwrap();
        (build_router(SiteState::new(dir.path())), dir)
    }

    async fn get_path(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health_live() {
        let (app, _dir) = create_test_app();
        let (status, _) = get_path(app, "/health/live").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_root_serves_shell() {
        let (app, _dir) = create_test_app();
        let (status, body) = get_path(app, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, SHELL);
    }

    #[tokio::test]
    async fn test_known_route_serves_shell() {
        let (app, _dir) = create_test_app();
        let (status, body) = get_path(app, "/bookings").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, SHELL);
    }

    #[tokio::test]
    async fn test_unknown_route_is_404_with_shell() {
        let (app, _dir) = create_test_app();
        let (status, body) = get_path(app, "/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, SHELL);
    }

    #[tokio::test]
    async fn test_static_asset() {
        let (app, _dir) = create_test_app();
        let (status, body) = get_path(app, "/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("console.log"));
    }

    #[tokio::test]
    async fn test_missing_index_is_server_error() {
        let dir = tempdir().unwrap();
        let app = build_router(SiteState::new(dir.path()));
        let (status, body) = get_path(app, "/dashboard").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("APP_SHELL_MISSING"));
        assert!(body.contains("request_id"));
    }
}
