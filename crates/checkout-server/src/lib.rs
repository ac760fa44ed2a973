//! # checkout-server
//!
//! Callable HTTP endpoint returning a Stripe hosted checkout URL for a
//! number of compute hours.
//!
//! ```text
//! POST /get_payment_url   {"data": {"plan"?: string, "compute_hours"?: number}}
//!   200 {"result": {"url": "https://checkout.stripe.com/..."}}
//!   401 {"error": {"status": "UNAUTHENTICATED", "message": ...}}
//!   500 {"error": {"status": "INTERNAL", "message": ...}}
//! ```

pub mod auth;
pub mod callable;
pub mod config;
pub mod error;
pub mod handlers;
pub mod setup;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::handlers::{get_payment_url, health_check};
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = match &state.config.cors_allow_origin {
        Some(origin) => CorsLayer::new().allow_origin(AllowOrigin::exact(origin.clone())),
        None => CorsLayer::new().allow_origin(Any),
    }
    .allow_methods(Any)
    .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/get_payment_url", post(get_payment_url))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
