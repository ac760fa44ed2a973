//! Application State

use std::sync::Arc;

use checkout_payments::CheckoutProvider;

use crate::auth::IdentityVerifier;
use crate::config::AppConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,

    /// Verifies caller ID tokens
    pub verifier: Arc<dyn IdentityVerifier>,

    /// Stripe, or a provider that fails every call when no key is configured
    pub checkout: Arc<dyn CheckoutProvider>,
}
