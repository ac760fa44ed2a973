//! Startup routine
//!
//! Runs once, before the router is built. Credentials come in through
//! [`AppConfig`] and end up owned by the providers in [`AppState`].

use std::sync::Arc;

use checkout_payments::{CheckoutProvider, StripeCheckoutProvider, UnconfiguredProvider};

use crate::auth::JwtIdentityVerifier;
use crate::config::AppConfig;
use crate::state::AppState;

pub fn init_app_state(config: AppConfig) -> AppState {
    let checkout: Arc<dyn CheckoutProvider> = match &config.stripe_secret_key {
        Some(secret_key) => {
            tracing::info!("✓ Stripe configured");
            Arc::new(StripeCheckoutProvider::new(secret_key))
        }
        None => {
            tracing::warn!("⚠ Stripe not configured - checkouts will fail");
            tracing::warn!("  Set STRIPE_SECRET_KEY in .env");
            Arc::new(UnconfiguredProvider)
        }
    };

    let verifier = Arc::new(JwtIdentityVerifier::new(
        &config.auth_jwt_secret,
        config.auth_jwt_issuer.as_deref(),
        config.auth_jwt_audience.as_deref(),
    ));

    tracing::info!(
        success_url = %config.redirect_urls.success_url,
        cancel_url = %config.redirect_urls.cancel_url,
        "Checkout redirect targets"
    );

    AppState {
        config: Arc::new(config),
        verifier,
        checkout,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        AppConfig::from_lookup(|name| {
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value).to_string())
        })
        .unwrap()
    }

    #[test]
    fn test_without_stripe_key() {
        let state = init_app_state(config(&[("AUTH_JWT_SECRET", "secret")]));
        assert!(!state.checkout.is_configured());
        assert_eq!(state.checkout.name(), "unconfigured");
    }

    #[test]
    fn test_with_stripe_key() {
        let state = init_app_state(config(&[
            ("AUTH_JWT_SECRET", "secret"),
            ("STRIPE_SECRET_KEY", "sk_test_fake"),
        ]));
        assert!(state.checkout.is_configured());
        assert_eq!(state.checkout.name(), "stripe");
    }
}
