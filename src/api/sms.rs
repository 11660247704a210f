/*
[INPUT]:  Mobile numbers, template ids and verification codes
[OUTPUT]: Raw API responses from the SMS gateway
[POS]:    API layer - SMS resource endpoints (distinct gateway base URL)
[UPDATE]: When the SMS gateway adds or changes endpoints
*/

use crate::api::ModuleHandle;
use crate::client::Format;
use crate::http::{Dispatcher, Params, Result};

/// SMS resource module. The only module targeting the SMS gateway base URL
/// instead of the IM API.
#[derive(Debug, Clone)]
pub struct Sms {
    inner: ModuleHandle,
}

impl Sms {
    pub(crate) fn new(dispatcher: Dispatcher, base_url: &str, format: Format) -> Self {
        Self {
            inner: ModuleHandle::new(dispatcher, base_url, format),
        }
    }

    /// Fetch an image captcha. The one GET endpoint of the API; parameters
    /// travel in the query string.
    ///
    /// GET /getImgCode
    pub async fn get_image_code(&self, app_key: &str) -> Result<String> {
        let params = Params::new().required("appKey", app_key)?;
        self.inner.get_form("getImgCode", params).await
    }

    /// Send a verification code SMS. `verify_id` and `verify_code` are only
    /// needed when image verification is enabled for the application.
    ///
    /// POST /sendCode
    pub async fn send_code(
        &self,
        mobile: &str,
        template_id: &str,
        region: &str,
        verify_id: Option<&str>,
        verify_code: Option<&str>,
    ) -> Result<String> {
        let params = Params::new()
            .required("mobile", mobile)?
            .required("templateId", template_id)?
            .required("region", region)?
            .with("verifyId", verify_id.unwrap_or_default())
            .with("verifyCode", verify_code.unwrap_or_default());
        self.inner.post_form("sendCode", params).await
    }

    /// Verify a previously sent code.
    ///
    /// POST /verifyCode
    pub async fn verify_code(&self, session_id: &str, code: &str) -> Result<String> {
        let params = Params::new()
            .required("sessionId", session_id)?
            .required("code", code)?;
        self.inner.post_form("verifyCode", params).await
    }

    /// Send a notification SMS; `p1`-`p3` substitute the template variables of
    /// the same names when the template declares them.
    ///
    /// POST /sendNotify
    pub async fn send_notify(
        &self,
        mobile: &str,
        template_id: &str,
        region: &str,
        p1: Option<&str>,
        p2: Option<&str>,
        p3: Option<&str>,
    ) -> Result<String> {
        let params = Params::new()
            .required("mobile", mobile)?
            .required("templateId", template_id)?
            .required("region", region)?
            .with("p1", p1.unwrap_or_default())
            .with("p2", p2.unwrap_or_default())
            .with("p3", p3.unwrap_or_default());
        self.inner.post_form("sendNotify", params).await
    }
}
