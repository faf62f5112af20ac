use std::collections::BTreeMap;

use jwplatform_client::v2::{ApiClient, BodyParams, QueryParams};
use jwplatform_client::{
    ChannelsClient, JwPlatformError, MediaClient, PlaylistKind, PlaylistsClient, TextTracksClient,
    UsageClient, V2Credentials, WebhooksClient,
};
use mockito::Matcher;
use serde_json::{json, Value};

fn client(server: &mockito::Server) -> ApiClient {
    let credentials = V2Credentials::new("test-v2-secret").unwrap();
    ApiClient::with_host(credentials, &server.url()).unwrap()
}

#[tokio::test]
async fn test_request_sends_bearer_and_accept_headers() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v2/sites/site1/media/")
        .match_header("authorization", "Bearer test-v2-secret")
        .match_header("accept", "application/json")
        .with_status(200)
        .with_body(r#"{"media": [], "total": 0}"#)
        .create_async()
        .await;

    let media = MediaClient::new(client(&server));
    let response = media.list("site1", &QueryParams::new()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response["total"], 0);
}

#[tokio::test]
async fn test_list_forwards_query_parameters() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v2/sites/site1/media/")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("page".into(), "2".into()),
            Matcher::UrlEncoded("page_length".into(), "50".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"media": [], "page": 2}"#)
        .create_async()
        .await;

    let mut query = QueryParams::new();
    query.insert("page".to_string(), "2".to_string());
    query.insert("page_length".to_string(), "50".to_string());

    let media = MediaClient::new(client(&server));
    let response = media.list("site1", &query).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response["page"], 2);
}

#[tokio::test]
async fn test_create_sends_json_body_and_accepts_201() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v2/sites/site1/media/")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "metadata": {"title": "My Video"},
            "upload": {"method": "fetch"}
        })))
        .with_status(201)
        .with_body(r#"{"id": "mediaXYZ", "status": "created"}"#)
        .create_async()
        .await;

    let mut body = BodyParams::new();
    body.insert(
        "metadata".to_string(),
        json!({"title": "My Video"}),
    );
    body.insert("upload".to_string(), json!({"method": "fetch"}));

    let media = MediaClient::new(client(&server));
    let response = media.create("site1", &body).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response["id"], "mediaXYZ");
}

#[tokio::test]
async fn test_update_uses_patch() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PATCH", "/v2/sites/site1/media/mediaXYZ/")
        .match_body(Matcher::Json(json!({"metadata": {"title": "Renamed"}})))
        .with_status(200)
        .with_body(r#"{"id": "mediaXYZ"}"#)
        .create_async()
        .await;

    let mut body = BodyParams::new();
    body.insert("metadata".to_string(), json!({"title": "Renamed"}));

    let media = MediaClient::new(client(&server));
    media.update("site1", "mediaXYZ", &body).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_delete_media() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("DELETE", "/v2/sites/site1/media/mediaXYZ/")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let media = MediaClient::new(client(&server));
    media.delete("site1", "mediaXYZ").await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_not_found_is_classified() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v2/sites/site1/media/missing/")
        .with_status(404)
        .with_body(r#"{"code": "NotFoundError", "title": "Media not found"}"#)
        .create_async()
        .await;

    let media = MediaClient::new(client(&server));
    let err = media
        .get("site1", "missing", &QueryParams::new())
        .await
        .unwrap_err();

    assert!(matches!(err, JwPlatformError::NotFound(_)));
    assert_eq!(err.error_code(), "NOT_FOUND");
    assert!(!err.is_recoverable());
}

#[tokio::test]
async fn test_rate_limit_is_recoverable() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v2/sites/site1/media/")
        .with_status(429)
        .with_body(r#"{"code": "RateLimitExceededError", "title": "Too many requests"}"#)
        .create_async()
        .await;

    let media = MediaClient::new(client(&server));
    let err = media.list("site1", &QueryParams::new()).await.unwrap_err();

    assert!(matches!(err, JwPlatformError::RateLimitExceeded(_)));
    assert!(err.is_rate_limited());
    assert!(err.is_recoverable());
}

#[tokio::test]
async fn test_non_json_error_body_is_unknown() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v2/sites/site1/media/")
        .with_status(502)
        .with_body("<html>502 Bad Gateway</html>")
        .create_async()
        .await;

    let media = MediaClient::new(client(&server));
    let err = media.list("site1", &QueryParams::new()).await.unwrap_err();

    assert!(matches!(err, JwPlatformError::Unknown(_)));
    assert!(err.to_string().contains("502 Bad Gateway"));
}

#[tokio::test]
async fn test_empty_site_id_fails_without_network() {
    let server = mockito::Server::new_async().await;
    let media = MediaClient::new(client(&server));

    let err = media.list("", &QueryParams::new()).await.unwrap_err();
    assert!(matches!(err, JwPlatformError::ParameterEmpty(_)));
}

#[tokio::test]
async fn test_playlist_create_uses_flavor_route() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v2/sites/site1/playlists/manual_playlist/")
        .match_body(Matcher::Json(json!({"metadata": {"title": "Favorites"}})))
        .with_status(201)
        .with_body(r#"{"id": "plA"}"#)
        .create_async()
        .await;

    let mut body = BodyParams::new();
    body.insert("metadata".to_string(), json!({"title": "Favorites"}));

    let playlists = PlaylistsClient::new(client(&server));
    playlists
        .create("site1", PlaylistKind::Manual, &body)
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_playlist_update_uses_flavor_route() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PATCH", "/v2/sites/site1/playlists/plA/dynamic_playlist/")
        .with_status(200)
        .with_body(r#"{"id": "plA"}"#)
        .create_async()
        .await;

    let playlists = PlaylistsClient::new(client(&server));
    playlists
        .update("site1", "plA", PlaylistKind::Dynamic, &BodyParams::new())
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_channel_settings_update() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PATCH", "/v2/sites/site1/channels/chan1/")
        .match_body(Matcher::Json(json!({"latency_mode": "low"})))
        .with_status(200)
        .with_body(r#"{"id": "chan1", "latency_mode": "low"}"#)
        .create_async()
        .await;

    let mut body = BodyParams::new();
    body.insert("latency_mode".to_string(), json!("low"));

    let channels = ChannelsClient::new(client(&server));
    let response = channels.update("site1", "chan1", &body).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response["latency_mode"], "low");
}

#[tokio::test]
async fn test_webhooks_are_account_scoped() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v2/webhooks/")
        .match_body(Matcher::Json(json!({
            "metadata": {
                "name": "reconcile",
                "webhook_url": "https://example.com/hook",
                "events": ["media_available"]
            }
        })))
        .with_status(201)
        .with_body(r#"{"id": "wh1", "secret": "whsec"}"#)
        .create_async()
        .await;

    let mut body = BodyParams::new();
    body.insert(
        "metadata".to_string(),
        json!({
            "name": "reconcile",
            "webhook_url": "https://example.com/hook",
            "events": ["media_available"]
        }),
    );

    let webhooks = WebhooksClient::new(client(&server));
    let response = webhooks.create(&body).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response["id"], "wh1");
}

#[tokio::test]
async fn test_text_track_publish_uses_put() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", "/v2/sites/site1/media/m1/text_tracks/t1/publish/")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let tracks = TextTracksClient::new(client(&server));
    tracks.publish("site1", "m1", "t1").await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_account_usage_query() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PUT", "/v2/query_usage/")
        .match_body(Matcher::Json(json!({
            "start_date": "2024-01-01",
            "end_date": "2024-01-31"
        })))
        .with_status(200)
        .with_body(r#"{"usage": []}"#)
        .create_async()
        .await;

    let mut body = BodyParams::new();
    body.insert("start_date".to_string(), json!("2024-01-01"));
    body.insert("end_date".to_string(), json!("2024-01-31"));

    let usage = UsageClient::new(client(&server));
    usage.query_account_usage(&body).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_analytics_defaults_source_and_format() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v2/sites/site1/analytics/queries/")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("source".into(), "default".into()),
            Matcher::UrlEncoded("format".into(), "json".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"rows": []}"#)
        .create_async()
        .await;

    let analytics = jwplatform_client::AnalyticsClient::new(client(&server));
    analytics
        .run_query("site1", None, None, &BTreeMap::new())
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_response_is_raw_json_value() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v2/sites/site1/media/m1/")
        .with_status(200)
        .with_body(r#"{"id": "m1", "relationships": {"protection_rule": {"id": "pr1"}}}"#)
        .create_async()
        .await;

    let media = MediaClient::new(client(&server));
    let response: Value = media
        .get("site1", "m1", &QueryParams::new())
        .await
        .unwrap();

    assert_eq!(response["relationships"]["protection_rule"]["id"], "pr1");
}
