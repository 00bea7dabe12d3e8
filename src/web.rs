//! Read-only web viewer.
//!
//! Routes:
//! - `GET /` redirects to `/domain`
//! - `GET /domain` lists domains
//! - `GET /domain/:name` shows the items of one domain (`/domain/` is the empty name)
//!
//! Handlers share one client handle and one compiled template set; nothing is cached
//! between requests.

mod handlers;
mod templates;

pub use handlers::domain_items_query;
pub use templates::Templates;

use crate::config::WebConfig;
use crate::error::AppError;
use crate::store::SharedClient;
use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// State cloned into every request.
#[derive(Clone)]
pub struct AppState {
    pub client: SharedClient,
    pub templates: Arc<Templates>,
}

impl AppState {
    pub fn new(client: SharedClient) -> Result<Self, AppError> {
        Ok(Self {
            client,
            templates: Arc::new(Templates::new()?),
        })
    }
}

/// Bind address for the web viewer.
#[derive(Debug, Clone)]
pub struct WebServerConfig {
    host: String,
    port: u16,
}

impl WebServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Config values, with flag overrides applied when present.
    pub fn from_config(config: &WebConfig, host: Option<String>, port: Option<u16>) -> Self {
        Self::new(
            host.unwrap_or_else(|| config.host.clone()),
            port.unwrap_or(config.port),
        )
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for WebServerConfig {
    fn default() -> Self {
        Self::from_config(&WebConfig::default(), None, None)
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::redirect_root))
        .route("/domain", get(handlers::list_domains))
        .route("/domain/", get(handlers::missing_domain_name))
        .route("/domain/:name", get(handlers::show_domain))
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();
    let response = next.run(req).await;
    info!(
        target: "sdbview.web",
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request"
    );
    response
}

/// Serve until ctrl-c.
pub async fn run_web_server(config: WebServerConfig, client: SharedClient) -> Result<(), AppError> {
    let state = AppState::new(client)?;
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    let addr = listener.local_addr()?;
    info!(%addr, "web viewer listening");
    println!("Listening on {}...", addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await?;
    info!("web viewer stopped");
    Ok(())
}

async fn wait_for_shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
