use std::collections::BTreeMap;

use jwplatform_client::{Credentials, JwPlatformError, V1Client};
use mockito::Matcher;
use serde_json::json;

fn client(server: &mockito::Server) -> V1Client {
    let credentials = Credentials::new("test-key", "test-secret").unwrap();
    V1Client::with_host(credentials, &server.url()).unwrap()
}

#[tokio::test]
async fn test_request_is_signed() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/videos/list")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("api_key".into(), "test-key".into()),
            Matcher::UrlEncoded("api_format".into(), "json".into()),
            Matcher::Regex("api_nonce=[0-9]{8}".into()),
            Matcher::Regex("api_timestamp=[0-9]+".into()),
            Matcher::Regex("api_signature=[0-9a-f]{40}".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"status": "ok", "videos": []}"#)
        .create_async()
        .await;

    let response = client(&server).request("/videos/list").await.unwrap();

    mock.assert_async().await;
    assert_eq!(response["status"], "ok");
}

#[tokio::test]
async fn test_caller_params_are_forwarded_and_signed() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/videos/show")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("video_key".into(), "AbCdEfGh".into()),
            Matcher::Regex("api_signature=[0-9a-f]{40}".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"status": "ok", "video": {"key": "AbCdEfGh"}}"#)
        .create_async()
        .await;

    let mut params = BTreeMap::new();
    params.insert("video_key".to_string(), "AbCdEfGh".to_string());

    let response = client(&server)
        .request_with_params("/videos/show", &params)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response["video"]["key"], "AbCdEfGh");
}

#[tokio::test]
async fn test_body_params_post_keeps_params_out_of_signature() {
    let mut server = mockito::Server::new_async().await;
    // The full query is exactly the api_* params plus the signature.
    let mock = server
        .mock("POST", "/videos/update")
        .match_query(Matcher::Regex(
            "^api_format=json&api_key=test-key&api_nonce=[0-9]{8}&api_timestamp=[0-9]+&api_signature=[0-9a-f]{40}$".into(),
        ))
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "video_key": "AbCdEfGh",
            "title": "Renamed"
        })))
        .with_status(200)
        .with_body(r#"{"status": "ok"}"#)
        .create_async()
        .await;

    let mut params = BTreeMap::new();
    params.insert("video_key".to_string(), "AbCdEfGh".to_string());
    params.insert("title".to_string(), "Renamed".to_string());

    let response = client(&server)
        .post_with_body_params("/videos/update", &params)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response["status"], "ok");
}

#[tokio::test]
async fn test_error_code_is_classified() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/videos/show")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body(r#"{"status": "error", "code": "NotFound", "title": "Not Found"}"#)
        .create_async()
        .await;

    let err = client(&server)
        .request("/videos/show")
        .await
        .unwrap_err();

    assert!(matches!(err, JwPlatformError::NotFound(_)));
}

#[tokio::test]
async fn test_upload_posts_multipart_to_link() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/videos/upload")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("api_format".into(), "json".into()),
            Matcher::UrlEncoded("key".into(), "upload-key".into()),
            Matcher::UrlEncoded("token".into(), "upload-token".into()),
        ]))
        .match_header(
            "content-type",
            Matcher::Regex("multipart/form-data.*".into()),
        )
        .with_status(200)
        .with_body(r#"{"status": "ok", "media": {"key": "AbCdEfGh"}}"#)
        .create_async()
        .await;

    let file_path = std::env::temp_dir().join("jwplatform_v1_upload_test.mp4");
    std::fs::write(&file_path, b"not really a video").unwrap();

    // Point the upload link at the mock server.
    let address = server.url().trim_start_matches("http://").to_string();
    let create_response = json!({
        "status": "ok",
        "link": {
            "protocol": "http",
            "address": address,
            "path": "/v1/videos/upload",
            "query": {
                "key": "upload-key",
                "token": "upload-token"
            }
        }
    });

    let response = client(&server)
        .upload(&create_response, file_path.to_str().unwrap())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response["media"]["key"], "AbCdEfGh");

    std::fs::remove_file(&file_path).ok();
}

#[tokio::test]
async fn test_upload_rejects_response_without_link() {
    let server = mockito::Server::new_async().await;
    let err = client(&server)
        .upload(&json!({"status": "ok"}), "/tmp/nope.mp4")
        .await
        .unwrap_err();

    assert!(matches!(err, JwPlatformError::Parse(_)));
}
