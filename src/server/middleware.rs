// HTTP middleware
// Author: kelexine (https://github.com/kelexine)

use super::routes::{endpoint_label, AppState};
use crate::metrics;
use axum::{
    extract::{ConnectInfo, Query, Request, State},
    middleware::Next,
    response::Response,
};
use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::time::Instant;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tracing::info;

/// Create request ID layers for the application
pub fn request_id_layers() -> (SetRequestIdLayer<MakeRequestUuid>, PropagateRequestIdLayer) {
    (
        SetRequestIdLayer::x_request_id(MakeRequestUuid),
        PropagateRequestIdLayer::x_request_id(),
    )
}

/// Log every inbound request before it is handled, then record request metrics.
pub async fn log_requests(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    // Only present when served with `into_make_service_with_connect_info`
    let client = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string());
    let query = Query::<BTreeMap<String, String>>::try_from_uri(&uri)
        .map(|Query(q)| q)
        .unwrap_or_default();
    // Compact JSON object text so log consumers can parse the map back
    let query = serde_json::to_string(&query).unwrap_or_else(|_| "{}".to_string());

    info!(
        service = state.service_name(),
        method = %method,
        uri = %uri,
        client = %client,
        query = %query,
        "Incoming request"
    );

    let started = Instant::now();
    let response = next.run(req).await;

    metrics::record_request(
        method.as_str(),
        endpoint_label(uri.path()),
        response.status().as_u16(),
        started.elapsed().as_secs_f64(),
    );

    response
}
