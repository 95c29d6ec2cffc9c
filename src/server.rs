//! HTTP adapter over the badge service
//!
//! Thin framing only: parse the query surface, call the service, set the
//! content type. Badge-level failures are the core's in-band documents and
//! still travel as 200 responses; the 500 path exists only for faults in
//! the adapter itself.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::query::{clamp_per_line, parse_keys};
use crate::service::BadgeService;

const CACHE_CONTROL: &str = "public, max-age=3600";
const SVG_CONTENT_TYPE: &str = "image/svg+xml";

#[derive(Debug, Deserialize)]
pub struct GridParams {
    /// Comma-separated badge keys
    c: Option<String>,
    /// Badges per row, clamped to [1, 20]
    perline: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BadgeParams {
    /// Badge key to render
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Substring filter over keys and labels
    search: Option<String>,
    /// Maximum number of entries returned
    limit: Option<String>,
}

/// Build the router for a shared badge service
pub fn app(service: Arc<BadgeService>) -> Router {
    Router::new()
        .route("/s", get(grid_handler))
        .route("/d", get(grid_handler))
        .route("/badge", get(badge_handler))
        .route("/list", get(list_handler))
        .layer(CorsLayer::permissive())
        .with_state(service)
}

/// Bind and serve until interrupted
pub async fn serve(service: BadgeService, address: SocketAddr) -> anyhow::Result<()> {
    let listener = TcpListener::bind(address).await?;
    info!(address = %address, "serving badges");
    axum::serve(listener, app(Arc::new(service)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

async fn grid_handler(
    State(service): State<Arc<BadgeService>>,
    Query(params): Query<GridParams>,
) -> Response {
    let keys = params.c.as_deref().map(parse_keys).unwrap_or_default();
    let per_line = clamp_per_line(params.perline.as_deref());
    svg_response(service.grid(&keys, per_line).svg)
}

async fn badge_handler(
    State(service): State<Arc<BadgeService>>,
    Query(params): Query<BadgeParams>,
) -> Response {
    match params.name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => svg_response(service.badge(name).svg),
        _ => svg_response(service.usage().svg),
    }
}

async fn list_handler(
    State(service): State<Arc<BadgeService>>,
    Query(params): Query<ListParams>,
) -> Response {
    // a malformed limit is ignored rather than rejected
    let limit = params
        .limit
        .as_deref()
        .and_then(|value| value.trim().parse::<usize>().ok());
    let listing = service.listing(params.search.as_deref(), limit);
    ([(header::CACHE_CONTROL, CACHE_CONTROL)], Json(listing)).into_response()
}

fn svg_response(svg: String) -> Response {
    (
        [
            (header::CONTENT_TYPE, SVG_CONTENT_TYPE),
            (header::CACHE_CONTROL, CACHE_CONTROL),
        ],
        svg,
    )
        .into_response()
}
