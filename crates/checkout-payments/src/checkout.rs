//! Hosted Checkout Sessions
//!
//! Provider-agnostic description of a checkout session and the
//! [`CheckoutProvider`] trait that turns it into a redirect URL.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::{PaymentError, Result};
use crate::pricing::price_cents;
use crate::product::product_display_name;

/// Checkout provider trait (Strategy pattern)
///
/// Implemented by [`crate::StripeCheckoutProvider`]; tests substitute a
/// recording fake.
#[async_trait]
pub trait CheckoutProvider: Send + Sync {
    /// Create a hosted checkout session. One call is one outbound request.
    async fn create_checkout_session(&self, request: &CheckoutSessionRequest) -> Result<CheckoutSession>;

    /// Whether the provider holds credentials
    fn is_configured(&self) -> bool {
        true
    }

    /// Provider name
    fn name(&self) -> &str;
}

/// Provider used when no Stripe secret key was supplied at startup.
///
/// Every call fails with [`PaymentError::Config`].
#[derive(Debug, Default)]
pub struct UnconfiguredProvider;

#[async_trait]
impl CheckoutProvider for UnconfiguredProvider {
    async fn create_checkout_session(&self, _request: &CheckoutSessionRequest) -> Result<CheckoutSession> {
        Err(PaymentError::Config("STRIPE_SECRET_KEY not set".into()))
    }

    fn is_configured(&self) -> bool {
        false
    }

    fn name(&self) -> &str {
        "unconfigured"
    }
}

/// Session mode
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckoutMode {
    /// One-time payment
    Payment,
    /// Recurring billing (not used by the compute-hour checkout)
    Subscription,
}

/// Settlement currency
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Currency {
    Usd,
}

impl Currency {
    pub fn as_str(self) -> &'static str {
        match self {
            Currency::Usd => "usd",
        }
    }
}

/// Payment methods offered on the hosted page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaymentMethodType {
    Card,
}

/// A single priced line on the checkout page
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineItem {
    pub currency: Currency,
    pub product_name: String,
    pub unit_amount_cents: i64,
    pub quantity: u64,
}

/// Everything the provider needs to create one session
#[derive(Clone, Debug, PartialEq)]
pub struct CheckoutSessionRequest {
    pub payment_method_types: Vec<PaymentMethodType>,
    pub line_items: Vec<LineItem>,
    pub mode: CheckoutMode,
    pub success_url: String,
    pub cancel_url: String,

    /// Caller-correlation token, matched back to the user by the provider record
    pub client_reference_id: String,

    pub metadata: HashMap<String, String>,
}

impl CheckoutSessionRequest {
    /// One-time card payment for `compute_hours` hours of `plan`.
    pub fn compute_hours(
        plan: &str,
        compute_hours: f64,
        client_reference_id: impl Into<String>,
        urls: &RedirectUrls,
    ) -> Self {
        let mut metadata = HashMap::new();
        metadata.insert("plan".to_string(), plan.to_string());
        metadata.insert("compute_hours".to_string(), compute_hours.to_string());

        Self {
            payment_method_types: vec![PaymentMethodType::Card],
            line_items: vec![LineItem {
                currency: Currency::Usd,
                product_name: product_display_name(plan),
                unit_amount_cents: price_cents(compute_hours),
                quantity: 1,
            }],
            mode: CheckoutMode::Payment,
            success_url: urls.success_url.clone(),
            cancel_url: urls.cancel_url.clone(),
            client_reference_id: client_reference_id.into(),
            metadata,
        }
    }

    /// Total of all line items in cents
    pub fn amount_total_cents(&self) -> i64 {
        self.line_items
            .iter()
            .map(|item| item.unit_amount_cents * i64::try_from(item.quantity).unwrap_or(i64::MAX))
            .sum()
    }
}

/// Where the hosted page sends the customer afterwards
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedirectUrls {
    pub success_url: String,
    pub cancel_url: String,
}

/// A session created by the provider
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckoutSession {
    /// Provider session ID
    pub id: String,

    /// URL to redirect the user to
    pub url: String,
}
