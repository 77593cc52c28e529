use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_json, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use x_mcp_core::MediaReference;
use x_mcp_error::{XApiErrorKind, XMcpErrorKind};
use x_mcp_social::{Credentials, MediaId, TweetId, XApiSettings, XClient, XPlatform};

fn client_for(server: &MockServer) -> XClient {
    let settings = XApiSettings::builder()
        .api_url(server.uri())
        .upload_url(server.uri())
        .timeout_secs(5)
        .build();
    XClient::new(Credentials::new("key", "secret", "token", "token-secret"), &settings).unwrap()
}

fn api_error_kind(err: &x_mcp_error::XMcpError) -> XApiErrorKind {
    match err.kind() {
        XMcpErrorKind::XApi(e) => e.kind().clone(),
        other => panic!("expected X API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_create_post_sends_signed_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/2/tweets"))
        .and(header_exists("authorization"))
        .and(body_json(json!({"text": "hello world"})))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"data": {"id": "1001", "text": "hello world"}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let posted = client_for(&server)
        .create_post("hello world", None, &[])
        .await
        .unwrap();
    assert_eq!(posted.id().as_str(), "1001");
    assert_eq!(posted.text(), "hello world");

    let requests = server.received_requests().await.unwrap();
    let auth = requests[0].headers.get("authorization").unwrap().to_str().unwrap();
    assert!(auth.starts_with("OAuth "));
    assert!(auth.contains("oauth_consumer_key=\"key\""));
    assert!(auth.contains("oauth_token=\"token\""));
    assert!(auth.contains("oauth_signature_method=\"HMAC-SHA1\""));
}

#[tokio::test]
async fn test_create_post_includes_reply_and_media() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/2/tweets"))
        .and(body_json(json!({
            "text": "part two",
            "reply": {"in_reply_to_tweet_id": "1001"},
            "media": {"media_ids": ["55"]}
        })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"data": {"id": "1002", "text": "part two"}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let posted = client_for(&server)
        .create_post("part two", Some(&TweetId::new("1001")), &[MediaId::new("55")])
        .await
        .unwrap();
    assert_eq!(posted.id().as_str(), "1002");
}

#[tokio::test]
async fn test_rate_limit_maps_to_rate_limited() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/2/tweets"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("retry-after", "30")
                .set_body_json(json!({"title": "Too Many Requests", "status": 429})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .create_post("hi", None, &[])
        .await
        .unwrap_err();
    assert_eq!(
        api_error_kind(&err),
        XApiErrorKind::RateLimited {
            retry_after: Some(30)
        }
    );
    assert_eq!(err.kind().category(), "upstream");
}

#[tokio::test]
async fn test_unauthorized_carries_api_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/2/tweets"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "title": "Unauthorized",
            "detail": "Unauthorized",
            "status": 401
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .create_post("hi", None, &[])
        .await
        .unwrap_err();
    assert_eq!(
        api_error_kind(&err),
        XApiErrorKind::Unauthorized("Unauthorized".to_string())
    );
}

#[tokio::test]
async fn test_other_statuses_keep_code_and_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/2/tweets"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "errors": [{"message": "Your Tweet text is too long."}]
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .create_post("hi", None, &[])
        .await
        .unwrap_err();
    assert_eq!(
        api_error_kind(&err),
        XApiErrorKind::Status {
            status: 400,
            message: "Your Tweet text is too long.".to_string()
        }
    );
}

#[tokio::test]
async fn test_undecodable_success_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/2/tweets"))
        .respond_with(ResponseTemplate::new(201).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .create_post("hi", None, &[])
        .await
        .unwrap_err();
    assert!(matches!(
        api_error_kind(&err),
        XApiErrorKind::MalformedResponse(_)
    ));
}

#[tokio::test]
async fn test_upload_media_posts_multipart_form() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/1.1/media/upload.json"))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "media_id": 710511363345354753u64,
            "media_id_string": "710511363345354753",
            "size": 4
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let file = dir.path().join("cat.png");
    std::fs::write(&file, b"\x89PNG").unwrap();
    let media = MediaReference::resolve(&file).unwrap();

    let id = client_for(&server).upload_media(&media).await.unwrap();
    assert_eq!(id.as_str(), "710511363345354753");

    let requests = server.received_requests().await.unwrap();
    let content_type = requests[0]
        .headers
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.starts_with("multipart/form-data"));
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("name=\"media_category\""));
    assert!(body.contains("tweet_image"));
    assert!(body.contains("filename=\"cat.png\""));
}

#[tokio::test]
async fn test_upload_of_removed_file_fails_before_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let file = dir.path().join("gone.gif");
    std::fs::write(&file, b"GIF89a").unwrap();
    let media = MediaReference::resolve(&file).unwrap();
    std::fs::remove_file(&file).unwrap();

    let err = client_for(&server).upload_media(&media).await.unwrap_err();
    assert!(err.is_validation());
}
