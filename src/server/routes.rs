// HTTP routes configuration
// Author: kelexine (https://github.com/kelexine)

use super::handlers::{calculate, health_handler, index_handler, metrics_handler};
use super::middleware::{log_requests, request_id_layers};
use crate::calculator::Operation;
use crate::config::AppConfig;
use axum::{
    extract::{Query, State},
    middleware,
    routing::get,
    Router,
};
use std::collections::HashMap;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Constant tag attached to every request and computation log entry.
    pub fn service_name(&self) -> &str {
        &self.config.logging.service_name
    }
}

pub fn create_router(config: AppConfig) -> Router {
    let state = AppState::new(config);
    let (set_request_id, propagate_request_id) = request_id_layers();

    let mut router: Router<AppState> = Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler));

    for op in Operation::ALL {
        router = router.route(
            op.path(),
            get(
                move |state: State<AppState>, query: Query<HashMap<String, String>>| {
                    calculate(op, state, query)
                },
            ),
        );
    }

    router
        .layer(middleware::from_fn_with_state(state.clone(), log_requests))
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id)
        .layer(set_request_id)
        .with_state(state)
}

/// Metrics label for a request path; anything outside the known routes
/// collapses to `unmatched` to bound label cardinality.
pub fn endpoint_label(path: &str) -> &'static str {
    match path {
        "/" => "/",
        "/health" => "/health",
        "/metrics" => "/metrics",
        _ => Operation::ALL
            .iter()
            .map(|op| op.path())
            .find(|p| *p == path)
            .unwrap_or("unmatched"),
    }
}
