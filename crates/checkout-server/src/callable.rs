//! Callable protocol envelope
//!
//! Requests arrive as `{"data": <payload>}` and succeed as
//! `{"result": <value>}`. Errors are rendered by [`CallableError`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CallableError;

/// Successful callable response
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CallableResponse<T> {
    pub result: T,
}

impl<T> CallableResponse<T> {
    pub fn new(result: T) -> Self {
        Self { result }
    }
}

/// Decode the `data` member of a callable request body.
///
/// `"data": null` decodes as `T::default()`. A body that is not a JSON
/// object with a `data` member, or whose payload has fields of the wrong
/// type, is an [`CallableError::InvalidArgument`].
pub fn parse_request<T>(body: &[u8]) -> Result<T, CallableError>
where
    T: DeserializeOwned + Default,
{
    let envelope: Value = serde_json::from_slice(body)
        .map_err(|e| CallableError::InvalidArgument(format!("Request body is not valid JSON: {e}")))?;

    let Value::Object(mut envelope) = envelope else {
        return Err(CallableError::InvalidArgument("Request body must be a JSON object".into()));
    };

    match envelope.remove("data") {
        None => Err(CallableError::InvalidArgument("Request body is missing data.".into())),
        Some(Value::Null) => Ok(T::default()),
        Some(data) => serde_json::from_value(data)
            .map_err(|e| CallableError::InvalidArgument(format!("Invalid request data: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Payload {
        #[serde(default)]
        name: Option<String>,
    }

    #[test]
    fn test_parse_data() {
        let payload: Payload = parse_request(br#"{"data": {"name": "x"}}"#).unwrap();
        assert_eq!(payload.name.as_deref(), Some("x"));
    }

    #[test]
    fn test_null_data_is_default() {
        let payload: Payload = parse_request(br#"{"data": null}"#).unwrap();
        assert_eq!(payload, Payload::default());
    }

    #[test]
    fn test_missing_data() {
        let err = parse_request::<Payload>(br#"{"name": "x"}"#).unwrap_err();
        assert_eq!(err.status(), "INVALID_ARGUMENT");
    }

    #[test]
    fn test_not_json() {
        assert!(matches!(
            parse_request::<Payload>(b"plan=wizard"),
            Err(CallableError::InvalidArgument(_))
        ));
        assert!(matches!(parse_request::<Payload>(b""), Err(CallableError::InvalidArgument(_))));
    }

    #[test]
    fn test_not_an_object() {
        assert!(matches!(
            parse_request::<Payload>(b"[1, 2]"),
            Err(CallableError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_wrong_field_type() {
        assert!(matches!(
            parse_request::<Payload>(br#"{"data": {"name": 5}}"#),
            Err(CallableError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_response_shape() {
        let json = serde_json::to_value(CallableResponse::new("ok")).unwrap();
        assert_eq!(json, serde_json::json!({"result": "ok"}));
    }
}
