//! Axum-based HTTP server for the calculator service.
//!
//! One GET route per arithmetic operation, all served by the same
//! validate → compute → log → respond pipeline, plus a landing page,
//! a health check and a Prometheus endpoint.
//!
//! # Components
//!
//! - `handlers`: The calculation pipeline and the auxiliary endpoints.
//! - `middleware`: Request logging, request metrics and request ID tracking.
//! - `routes`: The router configuration that ties everything together.
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod handlers;
mod middleware;
mod routes;

pub use handlers::{CalculationResponse, HealthResponse};
pub use routes::{create_router, AppState};
