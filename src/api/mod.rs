/*
[INPUT]:  Shared dispatcher, base URL and response format
[OUTPUT]: Resource modules covering the remote API surface
[POS]:    API layer - one module per remote resource group
[UPDATE]: When adding resource modules or changing the dispatch contract
*/

use reqwest::Method;

use crate::client::Format;
use crate::http::{Dispatcher, Params, Payload, Result};

pub mod chatroom;
pub mod group;
pub mod message;
pub mod push;
pub mod sensitive_word;
pub mod sms;
pub mod user;

pub use chatroom::ChatRoom;
pub use group::Group;
pub use message::{
    BroadcastMessage, GroupMessage, Message, PrivateMessage, SystemMessage,
};
pub use push::Push;
pub use sensitive_word::SensitiveWord;
pub use sms::Sms;
pub use user::User;

/// Plumbing injected into every resource module: the shared dispatcher, the
/// module's base URL and the response format. Modules hold no other state.
#[derive(Debug, Clone)]
pub(crate) struct ModuleHandle {
    dispatcher: Dispatcher,
    base_url: String,
    format: Format,
}

impl ModuleHandle {
    pub(crate) fn new(dispatcher: Dispatcher, base_url: &str, format: Format) -> Self {
        Self {
            dispatcher,
            base_url: base_url.to_string(),
            format,
        }
    }

    fn url(&self, action: &str) -> String {
        format!("{}/{}.{}", self.base_url, action, self.format.as_str())
    }

    /// POST form-encoded parameters to `{base}/{action}.{format}`
    pub(crate) async fn post_form(&self, action: &str, params: Params) -> Result<String> {
        self.dispatcher
            .send(Method::POST, &self.url(action), Payload::Form(params.into_pairs()))
            .await
    }

    /// GET `{base}/{action}.{format}` with the parameters as a query string
    pub(crate) async fn get_form(&self, action: &str, params: Params) -> Result<String> {
        self.dispatcher
            .send(Method::GET, &self.url(action), Payload::Form(params.into_pairs()))
            .await
    }

    /// POST a pre-built JSON document verbatim with a JSON content type
    pub(crate) async fn post_json(&self, action: &str, document: &str) -> Result<String> {
        self.dispatcher
            .send(Method::POST, &self.url(action), Payload::Json(document.to_string()))
            .await
    }
}
