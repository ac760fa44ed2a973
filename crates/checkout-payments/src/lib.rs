//! # checkout-payments
//!
//! Compute-hour pricing and Stripe hosted checkout sessions.
//!
//! ```text
//! ┌─────────────┐     ┌─────────────────┐     ┌─────────────┐
//! │   Caller    │────▶│  Stripe Hosted  │────▶│  Your Site  │
//! │ (get url)   │     │  Checkout Page  │     │  (success)  │
//! └─────────────┘     └─────────────────┘     └─────────────┘
//! ```
//!
//! A checkout is one card payment of `1000 + 500 * compute_hours` cents for a
//! line item named after the plan.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use checkout_payments::{CheckoutProvider, CheckoutSessionRequest, RedirectUrls, StripeCheckoutProvider};
//!
//! let provider = StripeCheckoutProvider::new(&secret_key);
//! let urls = RedirectUrls {
//!     success_url: "https://yoursite.com/success".into(),
//!     cancel_url: "https://yoursite.com/cancel".into(),
//! };
//!
//! let request = CheckoutSessionRequest::compute_hours("magician", 10.0, uid, &urls);
//! let session = provider.create_checkout_session(&request).await?;
//!
//! // Redirect user to: session.url
//! ```

mod checkout;
mod error;
pub mod pricing;
pub mod product;
mod stripe_checkout;

pub use checkout::{
    CheckoutMode, CheckoutProvider, CheckoutSession, CheckoutSessionRequest, Currency, LineItem,
    PaymentMethodType, RedirectUrls, UnconfiguredProvider,
};
pub use error::{PaymentError, Result};
pub use pricing::price_cents;
pub use product::product_display_name;
pub use stripe_checkout::StripeCheckoutProvider;
