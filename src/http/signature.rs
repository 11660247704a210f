/*
[INPUT]:  Application key/secret, nonce and timestamp
[OUTPUT]: Fixed authentication headers (rc-app-key, rc-nonce, rc-timestamp, rc-signature)
[POS]:    HTTP layer - credential signing for every request
[UPDATE]: When changing signing algorithm or header format
*/

use chrono::Utc;
use rand::Rng;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use sha1::{Digest, Sha1};

use crate::http::Result;

/// Header carrying the application key
pub const APP_KEY_HEADER: &str = "rc-app-key";
/// Header carrying the random nonce
pub const NONCE_HEADER: &str = "rc-nonce";
/// Header carrying the signing timestamp (seconds since epoch)
pub const TIMESTAMP_HEADER: &str = "rc-timestamp";
/// Header carrying the request signature
pub const SIGNATURE_HEADER: &str = "rc-signature";

/// Sign credentials the way the RongCloud API expects.
///
/// The signature is the hex SHA-1 digest of `secret + nonce + timestamp`.
/// SHA-1 is a wire-compatibility requirement of the remote API, not a choice.
pub fn sign(app_secret: &str, nonce: u64, timestamp: i64) -> String {
    let message = format!("{app_secret}{nonce}{timestamp}");
    hex::encode(Sha1::digest(message.as_bytes()))
}

/// Immutable signing context shared by every request of one facade instance.
///
/// Nonce, timestamp and signature are fixed at construction and reused for the
/// lifetime of the owning [`RongCloud`](crate::RongCloud); they are never
/// regenerated per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedContext {
    app_key: String,
    nonce: u64,
    timestamp: i64,
    signature: String,
}

impl SignedContext {
    /// Build a context from explicit nonce and timestamp values
    pub fn new(app_key: &str, app_secret: &str, nonce: u64, timestamp: i64) -> Self {
        Self {
            app_key: app_key.to_string(),
            nonce,
            timestamp,
            signature: sign(app_secret, nonce, timestamp),
        }
    }

    /// Build a context with a random nonce and the current time
    pub fn generate(app_key: &str, app_secret: &str) -> Self {
        let nonce = u64::from(rand::thread_rng().r#gen::<u32>());
        let timestamp = Utc::now().timestamp();
        Self::new(app_key, app_secret, nonce, timestamp)
    }

    /// The application key
    pub fn app_key(&self) -> &str {
        &self.app_key
    }

    /// The nonce fixed at construction
    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    /// The timestamp fixed at construction, in whole seconds since epoch
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// The hex SHA-1 signature derived from the secret, nonce and timestamp
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// The four authentication headers sent with every request
    pub(crate) fn header_map(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(APP_KEY_HEADER),
            HeaderValue::from_str(&self.app_key)?,
        );
        headers.insert(
            HeaderName::from_static(NONCE_HEADER),
            HeaderValue::from_str(&self.nonce.to_string())?,
        );
        headers.insert(
            HeaderName::from_static(TIMESTAMP_HEADER),
            HeaderValue::from_str(&self.timestamp.to_string())?,
        );
        headers.insert(
            HeaderName::from_static(SIGNATURE_HEADER),
            HeaderValue::from_str(&self.signature)?,
        );
        Ok(headers)
    }
}
