/*
[INPUT]:  Application credentials and client configuration
[OUTPUT]: Facade exposing one accessor per resource module
[POS]:    Client layer - top-level entry point
[UPDATE]: When adding resource modules or changing construction options
*/

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::api::{ChatRoom, Group, Message, Push, SensitiveWord, Sms, User};
use crate::http::{ClientConfig, Dispatcher, Result, SignedContext};

/// Base URL of the instant-messaging API
pub const IM_API_URL: &str = "https://api-cn.ronghub.com";
/// Base URL of the SMS gateway
pub const SMS_API_URL: &str = "http://api.sms.ronghub.com";

/// Response body format requested from the remote API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Json,
    Xml,
}

impl Format {
    /// The path suffix for this format
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Xml => "xml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level client facade.
///
/// Owns the signing context and the shared [`Dispatcher`]; every accessor
/// constructs a fresh resource module sharing them. Nonce, timestamp and
/// signature are fixed when the facade is built and reused for its whole
/// lifetime.
#[derive(Debug, Clone)]
pub struct RongCloud {
    dispatcher: Dispatcher,
    context: SignedContext,
    im_base_url: String,
    sms_base_url: String,
    format: Format,
}

impl RongCloud {
    /// Create a client requesting JSON responses
    pub fn new(app_key: &str, app_secret: &str) -> Result<Self> {
        Self::with_format(app_key, app_secret, Format::Json)
    }

    /// Create a client with an explicit response format
    pub fn with_format(app_key: &str, app_secret: &str, format: Format) -> Result<Self> {
        Self::with_context(
            SignedContext::generate(app_key, app_secret),
            ClientConfig::default(),
            format,
        )
    }

    /// Create a client from a pre-built signing context.
    ///
    /// Allows fixing nonce and timestamp, which makes request signatures
    /// reproducible.
    pub fn with_context(
        context: SignedContext,
        config: ClientConfig,
        format: Format,
    ) -> Result<Self> {
        let dispatcher = Dispatcher::new(&context, &config)?;
        Ok(Self {
            dispatcher,
            context,
            im_base_url: IM_API_URL.to_string(),
            sms_base_url: SMS_API_URL.to_string(),
            format,
        })
    }

    /// Override both base URLs, validating them first. Trailing slashes are
    /// trimmed so path joining stays uniform.
    pub fn with_base_urls(mut self, im_base_url: &str, sms_base_url: &str) -> Result<Self> {
        Url::parse(im_base_url)?;
        Url::parse(sms_base_url)?;
        self.im_base_url = im_base_url.trim_end_matches('/').to_string();
        self.sms_base_url = sms_base_url.trim_end_matches('/').to_string();
        Ok(self)
    }

    /// The signing context fixed at construction
    pub fn context(&self) -> &SignedContext {
        &self.context
    }

    /// The configured response format
    pub fn format(&self) -> Format {
        self.format
    }

    /// User resource module
    pub fn user(&self) -> User {
        User::new(self.dispatcher.clone(), &self.im_base_url, self.format)
    }

    /// Group resource module
    pub fn group(&self) -> Group {
        Group::new(self.dispatcher.clone(), &self.im_base_url, self.format)
    }

    /// Chat room resource module
    pub fn chatroom(&self) -> ChatRoom {
        ChatRoom::new(self.dispatcher.clone(), &self.im_base_url, self.format)
    }

    /// Message resource module
    pub fn message(&self) -> Message {
        Message::new(self.dispatcher.clone(), &self.im_base_url, self.format)
    }

    /// Push resource module
    pub fn push(&self) -> Push {
        Push::new(self.dispatcher.clone(), &self.im_base_url, self.format)
    }

    /// Sensitive word resource module
    pub fn sensitive_word(&self) -> SensitiveWord {
        SensitiveWord::new(self.dispatcher.clone(), &self.im_base_url, self.format)
    }

    /// SMS resource module; the only one targeting the SMS gateway
    pub fn sms(&self) -> Sms {
        Sms::new(self.dispatcher.clone(), &self.sms_base_url, self.format)
    }
}
