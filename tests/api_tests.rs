/*
[INPUT]:  Mock HTTP responses
[OUTPUT]: Test results for the facade and resource modules
[POS]:    Integration tests - end-to-end request contracts
[UPDATE]: When endpoints or the dispatch contract change
*/

mod common;

use common::{
    TEST_APP_KEY, TEST_NONCE, TEST_SIGNATURE, TEST_TIMESTAMP, setup_mock_server, test_client,
    test_client_with_format,
};
use rongcloud_server_api::{Format, GroupMessage, RongCloudError};
use tokio_test::assert_ok;
use wiremock::matchers::{body_string, body_string_contains, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_missing_parameter_fails_before_network() {
    let server = setup_mock_server().await;
    let client = test_client(&server.uri(), &server.uri());

    let err = client.user().get_token("", "Alice", "http://a/p.png").await.unwrap_err();
    assert_eq!(err.missing_parameter(), Some("userId"));

    // Validation short-circuits in declaration order
    let err = client.user().get_token("u1", "", "").await.unwrap_err();
    assert_eq!(err.missing_parameter(), Some("name"));

    let err = client.user().block("u1", 0).await.unwrap_err();
    assert_eq!(err.missing_parameter(), Some("minute"));

    let requests = server.received_requests().await.expect("recording enabled");
    assert!(requests.is_empty(), "no network call may be attempted");
}

#[tokio::test]
async fn test_successful_response_returned_byte_for_byte() {
    let server = setup_mock_server().await;
    let raw = r#"{"code":200,"users":[{"id":"u1","time":"2017-01-01"}]}  "#;
    Mock::given(method("POST"))
        .and(path("/user/blacklist/query.json"))
        .and(body_string("userId=u1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(raw))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), &server.uri());
    let body = client.user().query_blacklist("u1").await.expect("query");
    assert_eq!(body, raw);
}

#[tokio::test]
async fn test_empty_response_body_is_bad_request() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/user/block/query.json"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), &server.uri());
    let err = client.user().query_block().await.unwrap_err();
    assert!(matches!(err, RongCloudError::BadRequest));
}

#[tokio::test]
async fn test_chatroom_create_flattens_info() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/chatroom/create.json"))
        .and(body_string("chatroom%5Bid%5D=r1&chatroom%5Bname%5D=Room"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"code":200}"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), &server.uri());
    client
        .chatroom()
        .create(&[("id", "r1"), ("name", "Room")])
        .await
        .expect("create");
}

#[tokio::test]
async fn test_group_sync_flattens_with_group_prefix() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/group/sync.json"))
        .and(body_string("userId=u1&group%5Bg1%5D=Team&group%5Bg2%5D=Friends"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"code":200}"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), &server.uri());
    client
        .group()
        .sync("u1", &[("g1", "Team"), ("g2", "Friends")])
        .await
        .expect("sync");
}

#[tokio::test]
async fn test_template_message_forwarded_verbatim() {
    let server = setup_mock_server().await;
    let document = r#"{"toUserId":["1"],"content":{"content":"hi"}}"#;
    Mock::given(method("POST"))
        .and(path("/message/private/publish_template.json"))
        .and(header("content-type", "application/json"))
        .and(body_string(document))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"code":200}"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), &server.uri());
    client
        .message()
        .publish_template(document)
        .await
        .expect("publish_template");

    let err = client.message().publish_template("").await.unwrap_err();
    assert_eq!(err.missing_parameter(), Some("templateMessage"));
}

#[tokio::test]
async fn test_group_publish_sends_documented_defaults() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/message/group/publish.json"))
        .and(body_string(
            "fromUserId=u1&toGroupId=g1&objectName=RC%3ATxtMsg&content=hello\
             &pushContent=&pushData=&isPersisted=1&isCounted=1&isIncludeSender=1",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"code":200}"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), &server.uri());
    client
        .message()
        .publish_group(&GroupMessage {
            from_user_id: "u1".to_string(),
            to_group_id: "g1".to_string(),
            object_name: "RC:TxtMsg".to_string(),
            content: "hello".to_string(),
            ..Default::default()
        })
        .await
        .expect("publish_group");
}

#[tokio::test]
async fn test_push_tags_expand_indexed() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/user/tag/set.json"))
        .and(body_string("userId=u1&tags%5B0%5D=vip&tags%5B1%5D=beta"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"code":200}"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), &server.uri());
    client
        .push()
        .set_user_push_tag("u1", &["vip", "beta"])
        .await
        .expect("set tags");
}

#[tokio::test]
async fn test_broadcast_push_flattens_json_document() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/push.json"))
        .and(body_string_contains("platform%5B0%5D=ios"))
        .and(body_string_contains("audience%5Bis_to_all%5D=1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"code":200}"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), &server.uri());
    client
        .push()
        .broadcast_push(r#"{"platform":["ios"],"audience":{"is_to_all":true}}"#)
        .await
        .expect("broadcast push");

    let err = client.push().broadcast_push("{not json").await.unwrap_err();
    assert!(matches!(err, RongCloudError::Payload(_)));
}

#[tokio::test]
async fn test_sms_module_targets_sms_base_url() {
    let im_server = setup_mock_server().await;
    let sms_server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/sendCode.json"))
        .and(body_string(
            "mobile=13800000000&templateId=t1&region=86&verifyId=&verifyCode=",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"code":200}"#))
        .expect(1)
        .mount(&sms_server)
        .await;

    let client = test_client(&im_server.uri(), &sms_server.uri());
    client
        .sms()
        .send_code("13800000000", "t1", "86", None, None)
        .await
        .expect("send code");

    let im_requests = im_server.received_requests().await.expect("recording");
    assert!(im_requests.is_empty(), "SMS calls must not hit the IM base URL");
}

#[tokio::test]
async fn test_image_code_uses_get_with_query() {
    let im_server = setup_mock_server().await;
    let sms_server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/getImgCode.json"))
        .and(query_param("appKey", TEST_APP_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"code":200,"url":"x"}"#))
        .expect(1)
        .mount(&sms_server)
        .await;

    let client = test_client(&im_server.uri(), &sms_server.uri());
    client
        .sms()
        .get_image_code(TEST_APP_KEY)
        .await
        .expect("image code");
}

#[tokio::test]
async fn test_module_instances_share_identical_auth_headers() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/user/checkOnline.json"))
        .and(header("rc-app-key", TEST_APP_KEY))
        .and(header("rc-nonce", TEST_NONCE.to_string().as_str()))
        .and(header("rc-timestamp", TEST_TIMESTAMP.to_string().as_str()))
        .and(header("rc-signature", TEST_SIGNATURE))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"code":200}"#))
        .expect(2)
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), &server.uri());
    // Two accessor calls give independent module values sharing the headers
    let first = client.user();
    let second = client.user();
    first.check_online("u1").await.expect("first call");
    second.check_online("u1").await.expect("second call");
}

#[tokio::test]
async fn test_xml_format_changes_path_suffix() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/user/checkOnline.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<code>200</code>"))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client_with_format(&server.uri(), &server.uri(), Format::Xml);
    let body = assert_ok!(client.user().check_online("u1").await);
    assert_eq!(body, "<code>200</code>");
}

#[tokio::test]
async fn test_transport_failure_surfaces_as_http_error() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/message/recall.json"))
        .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), &server.uri());
    let err = client
        .message()
        .recall("u1", 1, "u2", "uid-1", 1_700_000_000_000)
        .await
        .unwrap_err();
    assert!(matches!(err, RongCloudError::Http(_)));
}
