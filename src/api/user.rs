/*
[INPUT]:  User identifiers and profile fields
[OUTPUT]: Raw API responses for token, status, block and blacklist operations
[POS]:    API layer - user resource endpoints
[UPDATE]: When the remote user API adds or changes endpoints
*/

use crate::api::ModuleHandle;
use crate::client::Format;
use crate::http::{Dispatcher, Params, Result};

/// User resource module.
///
/// Created fresh by [`RongCloud::user`](crate::RongCloud::user); safe to treat
/// as an immutable value.
#[derive(Debug, Clone)]
pub struct User {
    inner: ModuleHandle,
}

impl User {
    pub(crate) fn new(dispatcher: Dispatcher, base_url: &str, format: Format) -> Self {
        Self {
            inner: ModuleHandle::new(dispatcher, base_url, format),
        }
    }

    /// Obtain a connection token for a user.
    ///
    /// POST /user/getToken
    pub async fn get_token(&self, user_id: &str, name: &str, portrait_uri: &str) -> Result<String> {
        let params = Params::new()
            .required("userId", user_id)?
            .required("name", name)?
            .required("portraitUri", portrait_uri)?;
        self.inner.post_form("user/getToken", params).await
    }

    /// Refresh a user's name and portrait. Empty optional fields are ignored
    /// by the remote side.
    ///
    /// POST /user/refresh
    pub async fn refresh(
        &self,
        user_id: &str,
        name: Option<&str>,
        portrait_uri: Option<&str>,
    ) -> Result<String> {
        let params = Params::new()
            .required("userId", user_id)?
            .with("name", name.unwrap_or_default())
            .with("portraitUri", portrait_uri.unwrap_or_default());
        self.inner.post_form("user/refresh", params).await
    }

    /// Check whether a user is online.
    ///
    /// POST /user/checkOnline
    pub async fn check_online(&self, user_id: &str) -> Result<String> {
        let params = Params::new().required("userId", user_id)?;
        self.inner.post_form("user/checkOnline", params).await
    }

    /// Block a user for `minute` minutes (maximum 43200).
    ///
    /// POST /user/block
    pub async fn block(&self, user_id: &str, minute: i64) -> Result<String> {
        let params = Params::new()
            .required("userId", user_id)?
            .required("minute", minute)?;
        self.inner.post_form("user/block", params).await
    }

    /// Lift a user block.
    ///
    /// POST /user/unblock
    pub async fn unblock(&self, user_id: &str) -> Result<String> {
        let params = Params::new().required("userId", user_id)?;
        self.inner.post_form("user/unblock", params).await
    }

    /// List currently blocked users.
    ///
    /// POST /user/block/query
    pub async fn query_block(&self) -> Result<String> {
        self.inner.post_form("user/block/query", Params::new()).await
    }

    /// Add a user to another user's blacklist.
    ///
    /// POST /user/blacklist/add
    pub async fn add_blacklist(&self, user_id: &str, black_user_id: &str) -> Result<String> {
        let params = Params::new()
            .required("userId", user_id)?
            .required("blackUserId", black_user_id)?;
        self.inner.post_form("user/blacklist/add", params).await
    }

    /// Remove a user from another user's blacklist.
    ///
    /// POST /user/blacklist/remove
    pub async fn remove_blacklist(&self, user_id: &str, black_user_id: &str) -> Result<String> {
        let params = Params::new()
            .required("userId", user_id)?
            .required("blackUserId", black_user_id)?;
        self.inner.post_form("user/blacklist/remove", params).await
    }

    /// List a user's blacklist.
    ///
    /// POST /user/blacklist/query
    pub async fn query_blacklist(&self, user_id: &str) -> Result<String> {
        let params = Params::new().required("userId", user_id)?;
        self.inner.post_form("user/blacklist/query", params).await
    }
}
