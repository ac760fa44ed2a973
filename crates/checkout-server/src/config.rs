//! Environment configuration

use std::net::SocketAddr;

use axum::http::HeaderValue;
use checkout_payments::RedirectUrls;
use secrecy::SecretString;
use url::Url;

use crate::error::ConfigError;

const DEFAULT_SUCCESS_URL: &str = "https://yourapp.com/success";
const DEFAULT_CANCEL_URL: &str = "https://yourapp.com/cancel";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Settings read once at startup
#[derive(Debug)]
pub struct AppConfig {
    /// Stripe secret key; checkouts fail when absent
    pub stripe_secret_key: Option<SecretString>,

    pub redirect_urls: RedirectUrls,

    /// HS256 key used to verify caller ID tokens
    pub auth_jwt_secret: SecretString,
    pub auth_jwt_issuer: Option<String>,
    pub auth_jwt_audience: Option<String>,

    pub bind_addr: SocketAddr,

    /// `None` allows any origin
    pub cors_allow_origin: Option<HeaderValue>,
}

impl AppConfig {
    /// Read from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read through `lookup`, which returns the value of a variable if set.
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let stripe_secret_key = get("STRIPE_SECRET_KEY").map(SecretString::from);

        let success_url = parse_url(
            "CHECKOUT_SUCCESS_URL",
            get("CHECKOUT_SUCCESS_URL").unwrap_or_else(|| DEFAULT_SUCCESS_URL.into()),
        )?;
        let cancel_url = parse_url(
            "CHECKOUT_CANCEL_URL",
            get("CHECKOUT_CANCEL_URL").unwrap_or_else(|| DEFAULT_CANCEL_URL.into()),
        )?;

        let auth_jwt_secret = get("AUTH_JWT_SECRET")
            .map(SecretString::from)
            .ok_or(ConfigError::Missing("AUTH_JWT_SECRET"))?;

        let bind_addr = get("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.into())
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                name: "BIND_ADDR",
                reason: e.to_string(),
            })?;

        let cors_allow_origin = get("CORS_ALLOW_ORIGIN")
            .map(|origin| {
                HeaderValue::from_str(&origin).map_err(|e| ConfigError::Invalid {
                    name: "CORS_ALLOW_ORIGIN",
                    reason: e.to_string(),
                })
            })
            .transpose()?;

        Ok(Self {
            stripe_secret_key,
            redirect_urls: RedirectUrls {
                success_url,
                cancel_url,
            },
            auth_jwt_secret,
            auth_jwt_issuer: get("AUTH_JWT_ISSUER"),
            auth_jwt_audience: get("AUTH_JWT_AUDIENCE"),
            bind_addr,
            cors_allow_origin,
        })
    }
}

fn parse_url(name: &'static str, value: String) -> Result<String, ConfigError> {
    Url::parse(&value).map_err(|e| ConfigError::InvalidUrl {
        name,
        reason: e.to_string(),
    })?;
    Ok(value)
}
