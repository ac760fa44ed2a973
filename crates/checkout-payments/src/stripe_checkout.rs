//! Stripe Checkout Integration
//!
//! Implements the "Stripe Checkout (Hosted)" approach: create a session,
//! hand the customer its URL.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use stripe::{
    CheckoutSession as StripeCheckoutSession, CheckoutSessionMode, Client,
    CreateCheckoutSession, CreateCheckoutSessionLineItems,
    CreateCheckoutSessionLineItemsPriceData,
    CreateCheckoutSessionLineItemsPriceDataProductData,
    CreateCheckoutSessionPaymentMethodTypes,
};

use crate::checkout::{
    CheckoutMode, CheckoutProvider, CheckoutSession, CheckoutSessionRequest, Currency,
    LineItem, PaymentMethodType,
};
use crate::error::{PaymentError, Result};

/// Stripe client wrapper
pub struct StripeCheckoutProvider {
    client: Client,
}

impl StripeCheckoutProvider {
    /// Create a new Stripe client from the secret API key
    pub fn new(secret_key: &SecretString) -> Self {
        Self {
            client: Client::new(secret_key.expose_secret()),
        }
    }
}

#[async_trait]
impl CheckoutProvider for StripeCheckoutProvider {
    async fn create_checkout_session(&self, request: &CheckoutSessionRequest) -> Result<CheckoutSession> {
        let params = session_params(request);
        let session = StripeCheckoutSession::create(&self.client, params).await?;

        tracing::debug!(session_id = %session.id, "Stripe checkout session created");

        let url = session
            .url
            .ok_or_else(|| PaymentError::MissingUrl("No checkout URL returned".into()))?;

        Ok(CheckoutSession {
            id: session.id.to_string(),
            url,
        })
    }

    fn name(&self) -> &str {
        "stripe"
    }
}

/// Stripe parameters for `request`
fn session_params(request: &CheckoutSessionRequest) -> CreateCheckoutSession<'_> {
    let mut params = CreateCheckoutSession::new();
    params.payment_method_types = Some(
        request
            .payment_method_types
            .iter()
            .map(|method| match method {
                PaymentMethodType::Card => CreateCheckoutSessionPaymentMethodTypes::Card,
            })
            .collect(),
    );
    params.line_items = Some(request.line_items.iter().map(line_item).collect());
    params.mode = Some(match request.mode {
        CheckoutMode::Payment => CheckoutSessionMode::Payment,
        CheckoutMode::Subscription => CheckoutSessionMode::Subscription,
    });
    params.success_url = Some(&request.success_url);
    params.cancel_url = Some(&request.cancel_url);
    params.client_reference_id = Some(&request.client_reference_id);
    params.metadata = Some(request.metadata.clone());

    params
}

fn line_item(item: &LineItem) -> CreateCheckoutSessionLineItems {
    CreateCheckoutSessionLineItems {
        quantity: Some(item.quantity),
        price_data: Some(CreateCheckoutSessionLineItemsPriceData {
            currency: match item.currency {
                Currency::Usd => stripe::Currency::USD,
            },
            unit_amount: Some(item.unit_amount_cents),
            product_data: Some(CreateCheckoutSessionLineItemsPriceDataProductData {
                name: item.product_name.clone(),
                ..Default::default()
            }),
            ..Default::default()
        }),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::RedirectUrls;

    #[test]
    fn test_line_item_mapping() {
        let item = LineItem {
            currency: Currency::Usd,
            product_name: "Magician Plan".into(),
            unit_amount_cents: 6000,
            quantity: 1,
        };

        let mapped = line_item(&item);
        assert_eq!(mapped.quantity, Some(1));

        let price_data = mapped.price_data.unwrap();
        assert_eq!(price_data.currency, stripe::Currency::USD);
        assert_eq!(price_data.unit_amount, Some(6000));
        assert_eq!(price_data.product_data.unwrap().name, "Magician Plan");
    }

    fn request() -> CheckoutSessionRequest {
        CheckoutSessionRequest::compute_hours(
            "magician",
            10.0,
            "uid_123",
            &RedirectUrls {
                success_url: "https://yourapp.com/success".into(),
                cancel_url: "https://yourapp.com/cancel".into(),
            },
        )
    }

    #[test]
    fn test_session_params() {
        let request = request();
        let params = session_params(&request);

        assert_eq!(
            params.payment_method_types,
            Some(vec![CreateCheckoutSessionPaymentMethodTypes::Card])
        );
        assert_eq!(params.mode, Some(CheckoutSessionMode::Payment));
        assert_eq!(params.success_url, Some("https://yourapp.com/success"));
        assert_eq!(params.cancel_url, Some("https://yourapp.com/cancel"));
        assert_eq!(params.client_reference_id, Some("uid_123"));

        let metadata = params.metadata.as_ref().unwrap();
        assert_eq!(metadata.len(), 2);
        assert_eq!(metadata["plan"], "magician");
        assert_eq!(metadata["compute_hours"], "10");

        let line_items = params.line_items.as_ref().unwrap();
        assert_eq!(line_items.len(), 1);
        assert_eq!(line_items[0].quantity, Some(1));
        let price_data = line_items[0].price_data.as_ref().unwrap();
        assert_eq!(price_data.currency, stripe::Currency::USD);
        assert_eq!(price_data.unit_amount, Some(6000));
        assert_eq!(price_data.product_data.as_ref().unwrap().name, "Magician Plan");
    }

    #[test]
    fn test_subscription_mode_mapping() {
        let mut request = request();
        request.mode = CheckoutMode::Subscription;
        assert_eq!(
            session_params(&request).mode,
            Some(CheckoutSessionMode::Subscription)
        );
    }

    #[test]
    fn test_provider_name() {
        let provider = StripeCheckoutProvider::new(&SecretString::from("sk_test_fake".to_string()));
        assert_eq!(provider.name(), "stripe");
        assert!(provider.is_configured());
    }
}
