/*
[INPUT]:  Push tags and broadcast push JSON documents
[OUTPUT]: Raw API responses for tag and push operations
[POS]:    API layer - push resource endpoints
[UPDATE]: When the remote push API adds or changes endpoints
*/

use crate::api::ModuleHandle;
use crate::client::Format;
use crate::http::{Dispatcher, Params, Result, RongCloudError};

/// Push resource module.
#[derive(Debug, Clone)]
pub struct Push {
    inner: ModuleHandle,
}

impl Push {
    pub(crate) fn new(dispatcher: Dispatcher, base_url: &str, format: Format) -> Self {
        Self {
            inner: ModuleHandle::new(dispatcher, base_url, format),
        }
    }

    /// Replace a user's push tags (at most 20 per user); tags expand into
    /// `tags[i]` form keys.
    ///
    /// POST /user/tag/set
    pub async fn set_user_push_tag(&self, user_id: &str, tags: &[&str]) -> Result<String> {
        let params = Params::new()
            .required("userId", user_id)?
            .required("tags", tags)?;
        self.inner.post_form("user/tag/set", params).await
    }

    /// Replace push tags for several users at once; both ids and tags expand
    /// into indexed form keys.
    ///
    /// POST /user/tag/batch/set
    pub async fn batch_set_user_push_tag(
        &self,
        user_ids: &[&str],
        tags: &[&str],
    ) -> Result<String> {
        let params = Params::new()
            .required("userId", user_ids)?
            .required("tags", tags)?;
        self.inner.post_form("user/tag/batch/set", params).await
    }

    /// Broadcast a push. The JSON document is parsed and flattened into
    /// bracketed form keys the way the remote API expects; a malformed
    /// document fails before any network call.
    ///
    /// POST /push
    pub async fn broadcast_push(&self, push_message: &str) -> Result<String> {
        if push_message.is_empty() {
            return Err(RongCloudError::MissingParameter("pushMessage"));
        }
        let params = Params::from_json(push_message)?;
        self.inner.post_form("push", params).await
    }
}
