/*
[INPUT]:  Test credentials and mock server requirements
[OUTPUT]: Shared test utilities and fixtures
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for rongcloud-server-api tests

use rongcloud_server_api::{ClientConfig, Format, RongCloud, SignedContext};
use wiremock::MockServer;

pub const TEST_APP_KEY: &str = "test-app-key";
pub const TEST_APP_SECRET: &str = "test-app-secret";
pub const TEST_NONCE: u64 = 42;
pub const TEST_TIMESTAMP: i64 = 1000;

/// sha1("test-app-secret" + "42" + "1000")
pub const TEST_SIGNATURE: &str = "bab1e3329cdfef854eb9747b2e125625ac780b68";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Build a facade with a fixed signing context pointing at mock base URLs
pub fn test_client(im_base_url: &str, sms_base_url: &str) -> RongCloud {
    test_client_with_format(im_base_url, sms_base_url, Format::Json)
}

#[allow(dead_code)]
pub fn test_client_with_format(
    im_base_url: &str,
    sms_base_url: &str,
    format: Format,
) -> RongCloud {
    let context = SignedContext::new(TEST_APP_KEY, TEST_APP_SECRET, TEST_NONCE, TEST_TIMESTAMP);
    RongCloud::with_context(context, ClientConfig::default(), format)
        .expect("client init")
        .with_base_urls(im_base_url, sms_base_url)
        .expect("base urls")
}
