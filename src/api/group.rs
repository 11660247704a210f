/*
[INPUT]:  Group and member identifiers, group info maps
[OUTPUT]: Raw API responses for membership, gag and ban operations
[POS]:    API layer - group resource endpoints
[UPDATE]: When the remote group API adds or changes endpoints
*/

use crate::api::ModuleHandle;
use crate::client::Format;
use crate::http::{Dispatcher, Params, Result};

/// Group resource module.
#[derive(Debug, Clone)]
pub struct Group {
    inner: ModuleHandle,
}

impl Group {
    pub(crate) fn new(dispatcher: Dispatcher, base_url: &str, format: Format) -> Self {
        Self {
            inner: ModuleHandle::new(dispatcher, base_url, format),
        }
    }

    /// Sync a user's group memberships. `group_info` maps group ids to group
    /// names and is flattened into `group[<id>]` form keys.
    ///
    /// POST /group/sync
    pub async fn sync(&self, user_id: &str, group_info: &[(&str, &str)]) -> Result<String> {
        let params = Params::new()
            .required("userId", user_id)?
            .required_nested("groupInfo", "group", group_info)?;
        self.inner.post_form("group/sync", params).await
    }

    /// Create a group with the given member.
    ///
    /// POST /group/create
    pub async fn create(&self, user_id: &str, group_id: &str, group_name: &str) -> Result<String> {
        let params = Params::new()
            .required("userId", user_id)?
            .required("groupId", group_id)?
            .required("groupName", group_name)?;
        self.inner.post_form("group/create", params).await
    }

    /// Add a user to a group.
    ///
    /// POST /group/join
    pub async fn join(&self, user_id: &str, group_id: &str, group_name: &str) -> Result<String> {
        let params = Params::new()
            .required("userId", user_id)?
            .required("groupId", group_id)?
            .required("groupName", group_name)?;
        self.inner.post_form("group/join", params).await
    }

    /// Remove a user from a group.
    ///
    /// POST /group/quit
    pub async fn quit(&self, user_id: &str, group_id: &str) -> Result<String> {
        let params = Params::new()
            .required("userId", user_id)?
            .required("groupId", group_id)?;
        self.inner.post_form("group/quit", params).await
    }

    /// Dismiss a group.
    ///
    /// POST /group/dismiss
    pub async fn dismiss(&self, user_id: &str, group_id: &str) -> Result<String> {
        let params = Params::new()
            .required("userId", user_id)?
            .required("groupId", group_id)?;
        self.inner.post_form("group/dismiss", params).await
    }

    /// Refresh a group's name.
    ///
    /// POST /group/refresh
    pub async fn refresh(&self, group_id: &str, group_name: &str) -> Result<String> {
        let params = Params::new()
            .required("groupId", group_id)?
            .required("groupName", group_name)?;
        self.inner.post_form("group/refresh", params).await
    }

    /// List the members of a group.
    ///
    /// POST /group/user/query
    pub async fn query_user(&self, group_id: &str) -> Result<String> {
        let params = Params::new().required("groupId", group_id)?;
        self.inner.post_form("group/user/query", params).await
    }

    /// Gag a group member for `minute` minutes (maximum 43200).
    ///
    /// POST /group/user/gag/add
    pub async fn add_gag_user(&self, user_id: &str, group_id: &str, minute: i64) -> Result<String> {
        let params = Params::new()
            .required("userId", user_id)?
            .required("groupId", group_id)?
            .required("minute", minute)?;
        self.inner.post_form("group/user/gag/add", params).await
    }

    /// Lift a member gag.
    ///
    /// POST /group/user/gag/rollback
    pub async fn rollback_gag_user(&self, user_id: &str, group_id: &str) -> Result<String> {
        let params = Params::new()
            .required("userId", user_id)?
            .required("groupId", group_id)?;
        self.inner.post_form("group/user/gag/rollback", params).await
    }

    /// List gagged members of a group.
    ///
    /// POST /group/user/gag/list
    pub async fn list_gag_user(&self, group_id: &str) -> Result<String> {
        let params = Params::new().required("groupId", group_id)?;
        self.inner.post_form("group/user/gag/list", params).await
    }

    /// Mute an entire group.
    ///
    /// POST /group/ban/add
    pub async fn add_ban_group(&self, group_id: &str) -> Result<String> {
        let params = Params::new().required("groupId", group_id)?;
        self.inner.post_form("group/ban/add", params).await
    }

    /// Lift a group mute.
    ///
    /// POST /group/ban/rollback
    pub async fn rollback_ban_group(&self, group_id: &str) -> Result<String> {
        let params = Params::new().required("groupId", group_id)?;
        self.inner.post_form("group/ban/rollback", params).await
    }

    /// Query muted groups. Without `group_id` all muted groups are listed;
    /// with it, only the given ids are checked.
    ///
    /// POST /group/ban/query
    pub async fn list_ban_group(&self, group_id: Option<&str>) -> Result<String> {
        let params = Params::new().with("groupId", group_id.unwrap_or_default());
        self.inner.post_form("group/ban/query", params).await
    }

    /// Exempt a member from a group mute.
    ///
    /// POST /group/user/ban/whitelist/add
    pub async fn add_ban_whitelist_user(&self, user_id: &str, group_id: &str) -> Result<String> {
        let params = Params::new()
            .required("userId", user_id)?
            .required("groupId", group_id)?;
        self.inner
            .post_form("group/user/ban/whitelist/add", params)
            .await
    }

    /// Remove a member's mute exemption.
    ///
    /// POST /group/user/ban/whitelist/rollback
    pub async fn rollback_ban_whitelist_user(
        &self,
        user_id: &str,
        group_id: &str,
    ) -> Result<String> {
        let params = Params::new()
            .required("userId", user_id)?
            .required("groupId", group_id)?;
        self.inner
            .post_form("group/user/ban/whitelist/rollback", params)
            .await
    }

    /// List mute-exempt members of a group.
    ///
    /// POST /group/user/ban/whitelist/query
    pub async fn list_ban_whitelist_user(&self, group_id: &str) -> Result<String> {
        let params = Params::new().required("groupId", group_id)?;
        self.inner
            .post_form("group/user/ban/whitelist/query", params)
            .await
    }
}
