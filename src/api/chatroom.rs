/*
[INPUT]:  Chat room and member identifiers, room info maps
[OUTPUT]: Raw API responses for room lifecycle, membership and moderation
[POS]:    API layer - chat room resource endpoints
[UPDATE]: When the remote chat room API adds or changes endpoints
*/

use crate::api::ModuleHandle;
use crate::client::Format;
use crate::http::{Dispatcher, Params, Result};

/// Chat room resource module.
#[derive(Debug, Clone)]
pub struct ChatRoom {
    inner: ModuleHandle,
}

impl ChatRoom {
    pub(crate) fn new(dispatcher: Dispatcher, base_url: &str, format: Format) -> Self {
        Self {
            inner: ModuleHandle::new(dispatcher, base_url, format),
        }
    }

    /// Create chat rooms. `info` maps room ids to room names and is flattened
    /// into `chatroom[<id>]` form keys.
    ///
    /// POST /chatroom/create
    pub async fn create(&self, info: &[(&str, &str)]) -> Result<String> {
        let params = Params::new().required_nested("chatRoomInfo", "chatroom", info)?;
        self.inner.post_form("chatroom/create", params).await
    }

    /// Destroy a chat room.
    ///
    /// POST /chatroom/destroy
    pub async fn destroy(&self, chatroom_id: &str) -> Result<String> {
        let params = Params::new().required("chatroomId", chatroom_id)?;
        self.inner.post_form("chatroom/destroy", params).await
    }

    /// Query chat room information.
    ///
    /// POST /chatroom/query
    pub async fn query(&self, chatroom_id: &str) -> Result<String> {
        let params = Params::new().required("chatroomId", chatroom_id)?;
        self.inner.post_form("chatroom/query", params).await
    }

    /// List room members; `count` is capped at 500 by the remote side, `order`
    /// is 1 for join-time ascending and 2 for descending.
    ///
    /// POST /chatroom/user/query
    pub async fn query_user(&self, chatroom_id: &str, count: i64, order: i64) -> Result<String> {
        let params = Params::new()
            .required("chatroomId", chatroom_id)?
            .required("count", count)?
            .required("order", order)?;
        self.inner.post_form("chatroom/user/query", params).await
    }

    /// Check whether a user is in a chat room.
    ///
    /// POST /chatroom/user/exist
    pub async fn user_exist(&self, chatroom_id: &str, user_id: &str) -> Result<String> {
        let params = Params::new()
            .required("chatroomId", chatroom_id)?
            .required("userId", user_id)?;
        self.inner.post_form("chatroom/user/exist", params).await
    }

    /// Check several users at once; ids expand into `userId[i]` form keys.
    ///
    /// POST /chatroom/users/exist
    pub async fn users_exist(&self, chatroom_id: &str, user_ids: &[&str]) -> Result<String> {
        let params = Params::new()
            .required("chatroomId", chatroom_id)?
            .required("userId", user_ids)?;
        self.inner.post_form("chatroom/users/exist", params).await
    }

    /// Add a user to a chat room.
    ///
    /// POST /chatroom/join
    pub async fn join(&self, user_id: &str, chatroom_id: &str) -> Result<String> {
        let params = Params::new()
            .required("userId", user_id)?
            .required("chatroomId", chatroom_id)?;
        self.inner.post_form("chatroom/join", params).await
    }

    /// Stop message distribution in a room.
    ///
    /// POST /chatroom/message/stopDistribution
    pub async fn stop_distribution_message(&self, chatroom_id: &str) -> Result<String> {
        let params = Params::new().required("chatroomId", chatroom_id)?;
        self.inner
            .post_form("chatroom/message/stopDistribution", params)
            .await
    }

    /// Resume message distribution in a room.
    ///
    /// POST /chatroom/message/resumeDistribution
    pub async fn resume_distribution_message(&self, chatroom_id: &str) -> Result<String> {
        let params = Params::new().required("chatroomId", chatroom_id)?;
        self.inner
            .post_form("chatroom/message/resumeDistribution", params)
            .await
    }

    /// Gag a room member for `minute` minutes (maximum 43200).
    ///
    /// POST /chatroom/user/gag/add
    pub async fn add_gag_user(
        &self,
        user_id: &str,
        chatroom_id: &str,
        minute: i64,
    ) -> Result<String> {
        let params = Params::new()
            .required("userId", user_id)?
            .required("chatroomId", chatroom_id)?
            .required("minute", minute)?;
        self.inner.post_form("chatroom/user/gag/add", params).await
    }

    /// List gagged members of a room.
    ///
    /// POST /chatroom/user/gag/list
    pub async fn list_gag_user(&self, chatroom_id: &str) -> Result<String> {
        let params = Params::new().required("chatroomId", chatroom_id)?;
        self.inner.post_form("chatroom/user/gag/list", params).await
    }

    /// Lift a member gag.
    ///
    /// POST /chatroom/user/gag/rollback
    pub async fn rollback_gag_user(&self, user_id: &str, chatroom_id: &str) -> Result<String> {
        let params = Params::new()
            .required("userId", user_id)?
            .required("chatroomId", chatroom_id)?;
        self.inner
            .post_form("chatroom/user/gag/rollback", params)
            .await
    }

    /// Block a user from a room for `minute` minutes (maximum 43200).
    ///
    /// POST /chatroom/user/block/add
    pub async fn add_block_user(
        &self,
        user_id: &str,
        chatroom_id: &str,
        minute: i64,
    ) -> Result<String> {
        let params = Params::new()
            .required("userId", user_id)?
            .required("chatroomId", chatroom_id)?
            .required("minute", minute)?;
        self.inner.post_form("chatroom/user/block/add", params).await
    }

    /// List users blocked from a room.
    ///
    /// POST /chatroom/user/block/list
    pub async fn list_block_user(&self, chatroom_id: &str) -> Result<String> {
        let params = Params::new().required("chatroomId", chatroom_id)?;
        self.inner.post_form("chatroom/user/block/list", params).await
    }

    /// Lift a room block.
    ///
    /// POST /chatroom/user/block/rollback
    pub async fn rollback_block_user(&self, user_id: &str, chatroom_id: &str) -> Result<String> {
        let params = Params::new()
            .required("userId", user_id)?
            .required("chatroomId", chatroom_id)?;
        self.inner
            .post_form("chatroom/user/block/rollback", params)
            .await
    }

    /// Mark a message type as low priority for room distribution.
    ///
    /// POST /chatroom/message/priority/add
    pub async fn add_priority(&self, object_name: &str) -> Result<String> {
        let params = Params::new().required("objectName", object_name)?;
        self.inner
            .post_form("chatroom/message/priority/add", params)
            .await
    }

    /// Add a member to the room whitelist (at most 5 per room).
    ///
    /// POST /chatroom/user/whitelist/add
    pub async fn add_whitelist_user(&self, chatroom_id: &str, user_id: &str) -> Result<String> {
        let params = Params::new()
            .required("chatroomId", chatroom_id)?
            .required("userId", user_id)?;
        self.inner
            .post_form("chatroom/user/whitelist/add", params)
            .await
    }

    /// Remove a member from the room whitelist.
    ///
    /// POST /chatroom/user/whitelist/remove
    pub async fn remove_whitelist_user(&self, chatroom_id: &str, user_id: &str) -> Result<String> {
        let params = Params::new()
            .required("chatroomId", chatroom_id)?
            .required("userId", user_id)?;
        self.inner
            .post_form("chatroom/user/whitelist/remove", params)
            .await
    }

    /// List the room whitelist.
    ///
    /// POST /chatroom/user/whitelist/query
    pub async fn query_whitelist_user(&self, chatroom_id: &str) -> Result<String> {
        let params = Params::new().required("chatroomId", chatroom_id)?;
        self.inner
            .post_form("chatroom/user/whitelist/query", params)
            .await
    }
}
