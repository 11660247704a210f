/*
[INPUT]:  Sensitive words and replacement rules
[OUTPUT]: Raw API responses for the word filter
[POS]:    API layer - sensitive word resource endpoints
[UPDATE]: When the remote word filter API adds or changes endpoints
*/

use crate::api::ModuleHandle;
use crate::client::Format;
use crate::http::{Dispatcher, Params, Result};

/// Sensitive word resource module.
#[derive(Debug, Clone)]
pub struct SensitiveWord {
    inner: ModuleHandle,
}

impl SensitiveWord {
    pub(crate) fn new(dispatcher: Dispatcher, base_url: &str, format: Format) -> Self {
        Self {
            inner: ModuleHandle::new(dispatcher, base_url, format),
        }
    }

    /// Register a sensitive word. With a replacement the word is substituted
    /// in delivered messages; without one matching messages are dropped.
    ///
    /// POST /sensitiveword/add
    pub async fn add(&self, word: &str, replace_word: Option<&str>) -> Result<String> {
        let params = Params::new()
            .required("word", word)?
            .with("replaceWord", replace_word.unwrap_or_default());
        self.inner.post_form("sensitiveword/add", params).await
    }

    /// List registered words. `word_type` is 0 for replaced words, 1 for
    /// blocked words (the default) and 2 for both.
    ///
    /// POST /sensitiveword/list
    pub async fn list(&self, word_type: Option<i64>) -> Result<String> {
        let params = Params::new().with("type", word_type.unwrap_or(1));
        self.inner.post_form("sensitiveword/list", params).await
    }

    /// Remove one registered word.
    ///
    /// POST /sensitiveword/delete
    pub async fn delete(&self, word: &str) -> Result<String> {
        let params = Params::new().required("word", word)?;
        self.inner.post_form("sensitiveword/delete", params).await
    }

    /// Remove up to 50 words at once; they expand into `words[i]` form keys.
    ///
    /// POST /sensitiveword/batch/delete
    pub async fn batch_delete(&self, words: &[&str]) -> Result<String> {
        let params = Params::new().required("words", words)?;
        self.inner
            .post_form("sensitiveword/batch/delete", params)
            .await
    }
}
