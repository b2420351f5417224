//! HMAC-SHA256 request signing for the Binance API.

use crate::credentials::ApiCredentials;
use crate::error::AuthError;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Name of the timestamp parameter appended before signing.
pub const TIMESTAMP_PARAM: &str = "timestamp";

/// Name of the signature parameter appended after signing.
pub const SIGNATURE_PARAM: &str = "signature";

/// A parameter set that has been timestamped and signed.
///
/// `payload` is the URL-encoded string the signature was computed over. It is
/// also the exact string sent on the wire, so parameter order can never drift
/// between signing and sending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    params: Vec<(String, String)>,
    payload: String,
    timestamp_ms: i64,
    signature: String,
}

impl SignedRequest {
    /// Parameters in wire order, including `timestamp`, excluding `signature`.
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// The URL-encoded string that was signed.
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Server timestamp embedded in the request.
    pub fn timestamp_ms(&self) -> i64 {
        self.timestamp_ms
    }

    /// Lowercase hex HMAC-SHA256 of the payload.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Complete query string: the signed payload followed by `&signature=`.
    pub fn to_query_string(&self) -> String {
        format!("{}&{}={}", self.payload, SIGNATURE_PARAM, self.signature)
    }
}

/// Request signer for authenticated Binance API calls.
pub struct RequestSigner<'a> {
    credentials: &'a ApiCredentials,
}

impl<'a> RequestSigner<'a> {
    /// Create a new request signer with the given credentials.
    pub fn new(credentials: &'a ApiCredentials) -> Self {
        Self { credentials }
    }

    /// Sign a message and return the hex-encoded signature.
    ///
    /// This computes HMAC-SHA256 of the message using the secret key
    /// and returns the result as a lowercase hex string.
    pub fn sign(&self, message: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.credentials.expose_secret().as_bytes())
            .expect("HMAC can take key of any size");

        mac.update(message.as_bytes());
        let result = mac.finalize();
        hex::encode(result.into_bytes())
    }

    /// Timestamp and sign a parameter set, preserving insertion order.
    ///
    /// 1. Appends `timestamp` after the given parameters
    /// 2. URL-encodes the list in order
    /// 3. Signs the encoded string
    ///
    /// # Arguments
    /// * `params` - Key-value pairs in the order they must be sent
    /// * `timestamp_ms` - Exchange server time in milliseconds
    ///
    /// # Errors
    /// Returns `AuthError::Encode` if the parameters cannot be URL-encoded.
    pub fn sign_params(
        &self,
        params: &[(&str, &str)],
        timestamp_ms: i64,
    ) -> Result<SignedRequest, AuthError> {
        let mut all_params: Vec<(String, String)> = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        all_params.push((TIMESTAMP_PARAM.to_string(), timestamp_ms.to_string()));

        let payload = serde_urlencoded::to_string(&all_params)?;
        let signature = self.sign(&payload);

        Ok(SignedRequest {
            params: all_params,
            payload,
            timestamp_ms,
            signature,
        })
    }
}
