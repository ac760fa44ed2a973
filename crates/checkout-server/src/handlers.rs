//! HTTP Handlers

use axum::{
    body::Bytes,
    extract::State,
    http::HeaderMap,
    Json,
};
use checkout_payments::{
    pricing::DEFAULT_COMPUTE_HOURS, product::DEFAULT_PLAN, CheckoutProvider,
    CheckoutSessionRequest, RedirectUrls,
};
use serde::{Deserialize, Serialize};

use crate::auth::{caller_identity, CallerIdentity};
use crate::callable::{parse_request, CallableResponse};
use crate::error::CallableError;
use crate::state::AppState;

// ============================================================================
// Request / Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub stripe_configured: bool,
}

/// Payload of `get_payment_url`; absent fields take their defaults
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct PaymentUrlRequest {
    #[serde(default)]
    pub plan: Option<String>,
    #[serde(default)]
    pub compute_hours: Option<f64>,
}

impl PaymentUrlRequest {
    pub fn plan(&self) -> &str {
        self.plan.as_deref().unwrap_or(DEFAULT_PLAN)
    }

    pub fn compute_hours(&self) -> f64 {
        self.compute_hours.unwrap_or(DEFAULT_COMPUTE_HOURS)
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentUrl {
    pub url: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        stripe_configured: state.checkout.is_configured(),
    })
}

/// Callable `get_payment_url`: checkout URL for the authenticated caller
pub async fn get_payment_url(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<CallableResponse<PaymentUrl>>, CallableError> {
    let Some(identity) = caller_identity(&headers, state.verifier.as_ref()) else {
        tracing::warn!("Rejected unauthenticated checkout request");
        return Err(CallableError::unauthenticated());
    };

    let payload: PaymentUrlRequest = parse_request(&body).inspect_err(|e| {
        tracing::warn!(uid = %identity.uid, error = %e, "Malformed checkout request");
    })?;

    let url = create_payment_url(
        state.checkout.as_ref(),
        &state.config.redirect_urls,
        &identity,
        &payload,
    )
    .await?;

    Ok(Json(CallableResponse::new(url)))
}

/// Price the request and create one checkout session for it.
///
/// Makes exactly one provider call. Any provider failure becomes
/// [`CallableError::Internal`] carrying the provider's message.
pub async fn create_payment_url(
    checkout: &dyn CheckoutProvider,
    urls: &RedirectUrls,
    identity: &CallerIdentity,
    payload: &PaymentUrlRequest,
) -> Result<PaymentUrl, CallableError> {
    let plan = payload.plan();
    let compute_hours = payload.compute_hours();
    let request = CheckoutSessionRequest::compute_hours(plan, compute_hours, &identity.uid, urls);

    tracing::info!(
        uid = %identity.uid,
        plan,
        compute_hours,
        price_cents = request.amount_total_cents(),
        provider = checkout.name(),
        "Creating checkout session"
    );

    let session = checkout.create_checkout_session(&request).await.map_err(|e| {
        tracing::error!(uid = %identity.uid, kind = e.kind(), error = %e, "Checkout error");
        CallableError::from(e)
    })?;

    tracing::info!(uid = %identity.uid, session_id = %session.id, "Checkout session created");

    Ok(PaymentUrl { url: session.url })
}
