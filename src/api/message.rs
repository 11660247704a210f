/*
[INPUT]:  Message request structs and template JSON documents
[OUTPUT]: Raw API responses for publish, recall and history operations
[POS]:    API layer - message resource endpoints
[UPDATE]: When the remote message API adds or changes endpoints
*/

use serde::{Deserialize, Serialize};

use crate::api::ModuleHandle;
use crate::client::Format;
use crate::http::{Dispatcher, Params, Result};

/// One-to-one message. Optional fields default to the values the remote API
/// documents; they are transmitted even when defaulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivateMessage {
    pub from_user_id: String,
    pub to_user_id: String,
    pub object_name: String,
    pub content: String,
    pub push_content: String,
    pub push_data: String,
    /// iOS unread badge override; only honored for a single recipient
    pub count: String,
    pub verify_blacklist: i64,
    pub is_persisted: i64,
    pub is_counted: i64,
    pub is_include_sender: i64,
    pub content_available: i64,
}

impl Default for PrivateMessage {
    fn default() -> Self {
        Self {
            from_user_id: String::new(),
            to_user_id: String::new(),
            object_name: String::new(),
            content: String::new(),
            push_content: String::new(),
            push_data: String::new(),
            count: String::new(),
            verify_blacklist: 0,
            is_persisted: 1,
            is_counted: 1,
            is_include_sender: 1,
            content_available: 0,
        }
    }
}

/// System message addressed to up to 100 users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemMessage {
    pub from_user_id: String,
    pub to_user_id: String,
    pub object_name: String,
    pub content: String,
    pub push_content: String,
    pub push_data: String,
    pub is_persisted: i64,
    pub is_counted: i64,
    pub content_available: i64,
}

impl Default for SystemMessage {
    fn default() -> Self {
        Self {
            from_user_id: String::new(),
            to_user_id: String::new(),
            object_name: String::new(),
            content: String::new(),
            push_content: String::new(),
            push_data: String::new(),
            is_persisted: 1,
            is_counted: 1,
            content_available: 0,
        }
    }
}

/// Group message addressed to up to 3 groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMessage {
    pub from_user_id: String,
    pub to_group_id: String,
    pub object_name: String,
    pub content: String,
    pub push_content: String,
    pub push_data: String,
    pub is_persisted: i64,
    pub is_counted: i64,
    pub is_include_sender: i64,
}

impl Default for GroupMessage {
    fn default() -> Self {
        Self {
            from_user_id: String::new(),
            to_group_id: String::new(),
            object_name: String::new(),
            content: String::new(),
            push_content: String::new(),
            push_data: String::new(),
            is_persisted: 1,
            is_counted: 1,
            is_include_sender: 1,
        }
    }
}

/// Application-wide broadcast message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastMessage {
    pub from_user_id: String,
    pub object_name: String,
    pub content: String,
    pub push_content: String,
    pub push_data: String,
    /// "iOS" or "Android" to target one platform; empty targets both
    pub os: String,
    pub content_available: i64,
}

impl Default for BroadcastMessage {
    fn default() -> Self {
        Self {
            from_user_id: String::new(),
            object_name: String::new(),
            content: String::new(),
            push_content: String::new(),
            push_data: String::new(),
            os: String::new(),
            content_available: 0,
        }
    }
}

/// Message resource module.
#[derive(Debug, Clone)]
pub struct Message {
    inner: ModuleHandle,
}

impl Message {
    pub(crate) fn new(dispatcher: Dispatcher, base_url: &str, format: Format) -> Self {
        Self {
            inner: ModuleHandle::new(dispatcher, base_url, format),
        }
    }

    /// Send a one-to-one message.
    ///
    /// POST /message/private/publish
    pub async fn publish_private(&self, message: &PrivateMessage) -> Result<String> {
        let params = Params::new()
            .required("fromUserId", message.from_user_id.as_str())?
            .required("toUserId", message.to_user_id.as_str())?
            .required("objectName", message.object_name.as_str())?
            .required("content", message.content.as_str())?
            .with("pushContent", message.push_content.as_str())
            .with("pushData", message.push_data.as_str())
            .with("count", message.count.as_str())
            .with("verifyBlacklist", message.verify_blacklist)
            .with("isPersisted", message.is_persisted)
            .with("isCounted", message.is_counted)
            .with("isIncludeSender", message.is_include_sender)
            .with("contentAvailable", message.content_available);
        self.inner.post_form("message/private/publish", params).await
    }

    /// Send a one-to-one template message. The document is forwarded verbatim
    /// as the request body with a JSON content type.
    ///
    /// POST /message/private/publish_template
    pub async fn publish_template(&self, template_message: &str) -> Result<String> {
        if template_message.is_empty() {
            return Err(crate::http::RongCloudError::MissingParameter("templateMessage"));
        }
        self.inner
            .post_json("message/private/publish_template", template_message)
            .await
    }

    /// Send a system message.
    ///
    /// POST /message/system/publish
    pub async fn publish_system(&self, message: &SystemMessage) -> Result<String> {
        let params = Params::new()
            .required("fromUserId", message.from_user_id.as_str())?
            .required("toUserId", message.to_user_id.as_str())?
            .required("objectName", message.object_name.as_str())?
            .required("content", message.content.as_str())?
            .with("pushContent", message.push_content.as_str())
            .with("pushData", message.push_data.as_str())
            .with("isPersisted", message.is_persisted)
            .with("isCounted", message.is_counted)
            .with("contentAvailable", message.content_available);
        self.inner.post_form("message/system/publish", params).await
    }

    /// Send a system template message; same verbatim JSON contract as
    /// [`publish_template`](Self::publish_template).
    ///
    /// POST /message/system/publish_template
    pub async fn publish_system_template(&self, template_message: &str) -> Result<String> {
        if template_message.is_empty() {
            return Err(crate::http::RongCloudError::MissingParameter("templateMessage"));
        }
        self.inner
            .post_json("message/system/publish_template", template_message)
            .await
    }

    /// Send a group message.
    ///
    /// POST /message/group/publish
    pub async fn publish_group(&self, message: &GroupMessage) -> Result<String> {
        let params = Params::new()
            .required("fromUserId", message.from_user_id.as_str())?
            .required("toGroupId", message.to_group_id.as_str())?
            .required("objectName", message.object_name.as_str())?
            .required("content", message.content.as_str())?
            .with("pushContent", message.push_content.as_str())
            .with("pushData", message.push_data.as_str())
            .with("isPersisted", message.is_persisted)
            .with("isCounted", message.is_counted)
            .with("isIncludeSender", message.is_include_sender);
        self.inner.post_form("message/group/publish", params).await
    }

    /// Send a chat room message.
    ///
    /// POST /message/chatroom/publish
    pub async fn publish_chatroom(
        &self,
        from_user_id: &str,
        to_chatroom_id: &str,
        object_name: &str,
        content: &str,
    ) -> Result<String> {
        let params = Params::new()
            .required("fromUserId", from_user_id)?
            .required("toChatroomId", to_chatroom_id)?
            .required("objectName", object_name)?
            .required("content", content)?;
        self.inner.post_form("message/chatroom/publish", params).await
    }

    /// Broadcast a message to every chat room.
    ///
    /// POST /message/chatroom/broadcast
    pub async fn chatroom_broadcast(
        &self,
        from_user_id: &str,
        object_name: &str,
        content: &str,
    ) -> Result<String> {
        let params = Params::new()
            .required("fromUserId", from_user_id)?
            .required("objectName", object_name)?
            .required("content", content)?;
        self.inner
            .post_form("message/chatroom/broadcast", params)
            .await
    }

    /// Broadcast a message to every user of the application.
    ///
    /// POST /message/broadcast
    pub async fn broadcast(&self, message: &BroadcastMessage) -> Result<String> {
        let params = Params::new()
            .required("fromUserId", message.from_user_id.as_str())?
            .required("objectName", message.object_name.as_str())?
            .required("content", message.content.as_str())?
            .with("pushContent", message.push_content.as_str())
            .with("pushData", message.push_data.as_str())
            .with("os", message.os.as_str())
            .with("contentAvailable", message.content_available);
        self.inner.post_form("message/broadcast", params).await
    }

    /// Recall a sent message. `conversation_type` is 1 for one-to-one and 3
    /// for group conversations; `sent_time` is the original send timestamp in
    /// milliseconds.
    ///
    /// POST /message/recall
    pub async fn recall(
        &self,
        from_user_id: &str,
        conversation_type: i64,
        target_id: &str,
        message_uid: &str,
        sent_time: i64,
    ) -> Result<String> {
        let params = Params::new()
            .required("fromUserId", from_user_id)?
            .required("conversationType", conversation_type)?
            .required("targetId", target_id)?
            .required("messageUID", message_uid)?
            .required("sentTime", sent_time)?;
        self.inner.post_form("message/recall", params).await
    }

    /// Fetch the download URL of one hour of message history; `date` uses the
    /// `YYYYMMDDHH` format.
    ///
    /// POST /message/history
    pub async fn get_history(&self, date: &str) -> Result<String> {
        let params = Params::new().required("date", date)?;
        self.inner.post_form("message/history", params).await
    }

    /// Permanently delete one hour of message history.
    ///
    /// POST /message/history/delete
    pub async fn delete_history(&self, date: &str) -> Result<String> {
        let params = Params::new().required("date", date)?;
        self.inner.post_form("message/history/delete", params).await
    }
}
