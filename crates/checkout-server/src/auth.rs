//! Caller identity
//!
//! Callers present an ID token as `Authorization: Bearer <token>`. The
//! verifier turns a token into a [`CallerIdentity`] or rejects it.

use axum::http::{header::AUTHORIZATION, HeaderMap};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

/// Verified identity of the caller
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallerIdentity {
    /// Opaque user ID
    pub uid: String,
}

/// Token verification trait
pub trait IdentityVerifier: Send + Sync {
    /// Returns the caller's identity, or `None` if the token is not acceptable
    fn verify(&self, token: &str) -> Option<CallerIdentity>;
}

#[derive(Debug, Deserialize)]
struct IdTokenClaims {
    sub: String,
}

/// HS256 ID token verifier
pub struct JwtIdentityVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl JwtIdentityVerifier {
    pub fn new(secret: &SecretString, issuer: Option<&str>, audience: Option<&str>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp", "sub"]);
        if let Some(issuer) = issuer {
            validation.set_issuer(&[issuer]);
        }
        match audience {
            Some(audience) => validation.set_audience(&[audience]),
            None => validation.validate_aud = false,
        }

        Self {
            key: DecodingKey::from_secret(secret.expose_secret().as_bytes()),
            validation,
        }
    }
}

impl IdentityVerifier for JwtIdentityVerifier {
    fn verify(&self, token: &str) -> Option<CallerIdentity> {
        match decode::<IdTokenClaims>(token, &self.key, &self.validation) {
            Ok(data) if !data.claims.sub.is_empty() => Some(CallerIdentity { uid: data.claims.sub }),
            Ok(_) => {
                tracing::debug!("ID token has an empty subject");
                None
            }
            Err(e) => {
                tracing::debug!(error = %e, "ID token rejected");
                None
            }
        }
    }
}

/// Extract the bearer token from the Authorization header
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Resolve the caller identity of a request, if any
pub fn caller_identity(headers: &HeaderMap, verifier: &dyn IdentityVerifier) -> Option<CallerIdentity> {
    bearer_token(headers).and_then(|token| verifier.verify(token))
}
