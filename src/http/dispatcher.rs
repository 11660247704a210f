/*
[INPUT]:  Signed context, HTTP configuration and per-request payloads
[OUTPUT]: Raw response body strings from the remote API
[POS]:    HTTP layer - shared request dispatch for all resource modules
[UPDATE]: When adding connection options or changing dispatch behavior
*/

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use tracing::debug;

use crate::http::{Result, RongCloudError, SignedContext};

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Body of an outgoing request
#[derive(Debug, Clone)]
pub enum Payload {
    /// `application/x-www-form-urlencoded` pairs (query string for GET)
    Form(Vec<(String, String)>),
    /// A pre-built JSON document forwarded verbatim
    Json(String),
}

/// Shared HTTP dispatcher carrying the fixed authentication headers.
///
/// The four signing headers are installed as client defaults at construction
/// and reused unchanged for every request; the dispatcher holds no per-call
/// state and clones cheaply.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    http: Client,
}

impl Dispatcher {
    /// Build a dispatcher whose every request carries the context's headers
    pub fn new(context: &SignedContext, config: &ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .default_headers(context.header_map()?)
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;
        Ok(Self { http })
    }

    /// Send one request and return the raw body.
    ///
    /// Non-2xx statuses and transport failures surface as
    /// [`RongCloudError::Http`]; a 2xx answer with an empty body is reported
    /// as [`RongCloudError::BadRequest`].
    pub async fn send(&self, method: Method, url: &str, payload: Payload) -> Result<String> {
        debug!(%method, url, "dispatching API request");
        let builder = match payload {
            Payload::Form(pairs) if method == Method::GET => self.http.get(url).query(&pairs),
            Payload::Form(pairs) => self.http.request(method, url).form(&pairs),
            Payload::Json(document) => self
                .http
                .request(method, url)
                .header(CONTENT_TYPE, "application/json")
                .body(document),
        };

        let response = builder.send().await?.error_for_status()?;
        let body = response.text().await?;
        if body.is_empty() {
            return Err(RongCloudError::BadRequest);
        }
        Ok(body)
    }
}
