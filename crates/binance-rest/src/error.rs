//! Binance REST API error types.

use auth::AuthError;
use model::OrderError;
use rest_client::{RestError, RestResponse};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors that can occur when interacting with the Binance REST API.
///
/// Transport failures, exchange error payloads and schema mismatches are
/// separate variants so the caller can tell them apart.
#[derive(Debug, Error)]
pub enum BinanceRestError {
    /// REST client error (network, timeout, unexpected HTTP status).
    #[error("REST client error: {0}")]
    Rest(#[from] RestError),

    /// Binance API error (returned by the exchange as `{"code", "msg"}`).
    #[error("Binance API error {code}: {message}")]
    ApiError {
        /// Binance error code.
        code: i64,
        /// Error message.
        message: String,
    },

    /// Response body did not match the expected schema.
    #[error("Failed to decode response: {message}")]
    Decode {
        /// Parser error.
        message: String,
        /// Raw response body, kept for diagnostics.
        body: String,
    },

    /// Authentication error.
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Order request rejected before it was sent.
    #[error("Invalid order: {0}")]
    InvalidOrder(#[from] OrderError),

    /// Query parameters could not be encoded.
    #[error("Failed to encode query: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),
}

impl BinanceRestError {
    /// Parse a Binance API error response.
    ///
    /// Binance returns errors in the format: `{"code": -1000, "msg": "..."}`.
    /// Returns `None` when the body has any other shape.
    pub fn from_api_response(body: &str) -> Option<Self> {
        #[derive(serde::Deserialize)]
        struct ApiError {
            code: i64,
            msg: String,
        }

        serde_json::from_str::<ApiError>(body)
            .ok()
            .map(|err| Self::ApiError {
                code: err.code,
                message: err.msg,
            })
    }

    /// Exchange error code, if this is an API error.
    pub fn api_code(&self) -> Option<i64> {
        match self {
            Self::ApiError { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// True for network, timeout and HTTP status failures.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Rest(_))
    }

    /// True for exchange-level error payloads.
    pub fn is_api_error(&self) -> bool {
        matches!(self, Self::ApiError { .. })
    }

    /// True for responses that did not match the expected schema.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}

/// Decode a response into `T`.
///
/// An exchange error payload is recognised first, whatever the status code.
/// Any other non-success status is a transport error. A success body that
/// does not match `T` is a decode error carrying the raw body.
pub(crate) fn decode_response<T: DeserializeOwned>(
    response: RestResponse,
) -> Result<T, BinanceRestError> {
    if let Some(err) = BinanceRestError::from_api_response(response.body()) {
        tracing::warn!(status = response.status(), error = %err, "Binance returned an error");
        return Err(err);
    }

    if !response.is_success() {
        return Err(BinanceRestError::Rest(response.into_http_error()));
    }

    serde_json::from_str(response.body()).map_err(|e| {
        tracing::warn!(body = %response.body(), error = %e, "Failed to parse response");
        BinanceRestError::Decode {
            message: e.to_string(),
            body: response.body().to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responses::{Account, Order, ServerTime};

    #[test]
    fn test_from_api_response() {
        let err = BinanceRestError::from_api_response(
            r#"{"code":-1021,"msg":"Timestamp outside recvWindow"}"#,
        )
        .unwrap();

        assert_eq!(err.api_code(), Some(-1021));
        assert!(err.is_api_error());
        assert_eq!(
            err.to_string(),
            "Binance API error -1021: Timestamp outside recvWindow"
        );
    }

    #[test]
    fn test_from_api_response_ignores_other_shapes() {
        assert!(BinanceRestError::from_api_response(r#"{"serverTime": 1}"#).is_none());
        assert!(BinanceRestError::from_api_response("[]").is_none());
        assert!(BinanceRestError::from_api_response("<html>").is_none());
    }

    #[test]
    fn test_api_error_body_is_not_decoded_as_entity() {
        let body = r#"{"code":-1021,"msg":"Timestamp outside recvWindow"}"#;

        let account = decode_response::<Account>(RestResponse::new(400, body)).unwrap_err();
        assert_eq!(account.api_code(), Some(-1021));

        let order = decode_response::<Order>(RestResponse::new(200, body)).unwrap_err();
        assert_eq!(order.api_code(), Some(-1021));

        let trades = decode_response::<Vec<Order>>(RestResponse::new(200, body)).unwrap_err();
        assert!(trades.is_api_error());
    }

    #[test]
    fn test_schema_mismatch_is_decode_error_with_body() {
        let body = r#"{"unexpected": true}"#;
        let err = decode_response::<ServerTime>(RestResponse::new(200, body)).unwrap_err();

        assert!(err.is_decode());
        match err {
            BinanceRestError::Decode { body: raw, .. } => assert_eq!(raw, body),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_json_error_status_is_transport_error() {
        let err =
            decode_response::<ServerTime>(RestResponse::new(502, "Bad Gateway")).unwrap_err();

        assert!(err.is_transport());
        match err {
            BinanceRestError::Rest(RestError::HttpError { status, message }) => {
                assert_eq!(status, 502);
                assert_eq!(message, "Bad Gateway");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_success_decodes() {
        let time = decode_response::<ServerTime>(RestResponse::new(200, r#"{"serverTime":7}"#))
            .unwrap();
        assert_eq!(time.server_time, 7);
    }
}
