//! Clients for the v2 Management API.
//!
//! [`ApiClient`] holds the HTTP connection, the bearer secret, and the
//! default headers; every per-resource client wraps a clone of it and
//! fills in the endpoint templates for its resource.

mod advertising;
mod analytics;
mod channels;
mod events;
mod imports;
mod media;
mod media_renditions;
mod originals;
mod player_bidding;
mod playlists;
mod protection_rules;
mod tags;
mod text_tracks;
mod thumbnails;
mod uploads;
mod usage;
mod vpb_configs;
mod webhooks;

pub use advertising::AdvertisingClient;
pub use analytics::AnalyticsClient;
pub use channels::ChannelsClient;
pub use events::EventsClient;
pub use imports::ImportsClient;
pub use media::MediaClient;
pub use media_renditions::MediaRenditionsClient;
pub use originals::OriginalsClient;
pub use player_bidding::PlayerBiddingConfigsClient;
pub use playlists::{PlaylistKind, PlaylistsClient};
pub use protection_rules::ProtectionRulesClient;
pub use tags::TagsClient;
pub use text_tracks::TextTracksClient;
pub use thumbnails::ThumbnailsClient;
pub use uploads::UploadsClient;
pub use usage::UsageClient;
pub use vpb_configs::VpbConfigsClient;
pub use webhooks::WebhooksClient;

use std::collections::BTreeMap;
use std::time::Duration;

use jwplatform_core::config::{V2Credentials, V2_HOST};
use jwplatform_core::error::{JwPlatformError, JwPlatformResult};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde_json::Value;
use tracing::debug;

use crate::response::parse_response;

const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Query parameters for a v2 request.
pub type QueryParams = BTreeMap<String, String>;

/// JSON body parameters for a v2 request.
pub type BodyParams = BTreeMap<String, Value>;

/// Dispatcher for the v2 Management API (bearer auth).
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    headers: HeaderMap,
}

impl ApiClient {
    /// Create a client against the production v2 host.
    pub fn new(credentials: V2Credentials) -> JwPlatformResult<Self> {
        Self::with_host(credentials, V2_HOST)
    }

    /// Create a client against a custom host, e.g. a test server.
    pub fn with_host(credentials: V2Credentials, host: &str) -> JwPlatformResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| JwPlatformError::Request(format!("Failed to build client: {}", e)))?;

        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", credentials.secret))
            .map_err(|e| JwPlatformError::Configuration(format!("Invalid secret: {}", e)))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(Self {
            client,
            base_url: host.trim_end_matches('/').to_string(),
            headers,
        })
    }

    /// Add or replace a default header sent with every request.
    pub fn add_header(&mut self, name: &str, value: &str) -> JwPlatformResult<()> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| JwPlatformError::Configuration(format!("Invalid header name: {}", e)))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| JwPlatformError::Configuration(format!("Invalid header value: {}", e)))?;
        self.headers.insert(name, value);
        Ok(())
    }

    /// Remove a default header.
    pub fn remove_header(&mut self, name: &str) {
        self.headers.remove(name);
    }

    /// Send a request to a v2 route.
    ///
    /// GET and DELETE carry `query`; PATCH and PUT carry `body` as JSON;
    /// POST carries `body` as JSON when non-empty, otherwise `query`.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        query: &QueryParams,
        body: &BodyParams,
    ) -> JwPlatformResult<Value> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, path, "v2 request");

        let request = self.client.request(method.clone(), &url);
        let request = if method == Method::GET || method == Method::DELETE {
            request.query(query)
        } else if method == Method::POST {
            if body.is_empty() {
                request.query(query)
            } else {
                request.json(body)
            }
        } else if method == Method::PATCH || method == Method::PUT {
            request.json(body)
        } else {
            return Err(JwPlatformError::UnsupportedRequestType(method.to_string()));
        };

        let response = request
            .headers(self.headers.clone())
            .send()
            .await
            .map_err(|e| JwPlatformError::Request(e.to_string()))?;

        parse_response(response).await
    }

    pub(crate) async fn get(&self, path: &str, query: &QueryParams) -> JwPlatformResult<Value> {
        self.request(Method::GET, path, query, &BodyParams::new()).await
    }

    pub(crate) async fn post(
        &self,
        path: &str,
        query: &QueryParams,
        body: &BodyParams,
    ) -> JwPlatformResult<Value> {
        self.request(Method::POST, path, query, body).await
    }

    pub(crate) async fn patch(&self, path: &str, body: &BodyParams) -> JwPlatformResult<Value> {
        self.request(Method::PATCH, path, &QueryParams::new(), body).await
    }

    pub(crate) async fn put(&self, path: &str, body: &BodyParams) -> JwPlatformResult<Value> {
        self.request(Method::PUT, path, &QueryParams::new(), body).await
    }

    pub(crate) async fn delete(&self, path: &str) -> JwPlatformResult<Value> {
        self.request(Method::DELETE, path, &QueryParams::new(), &BodyParams::new())
            .await
    }
}

/// Reject blank path segments before they reach the URL.
pub(crate) fn require_id(name: &str, value: &str) -> JwPlatformResult<()> {
    if value.trim().is_empty() {
        return Err(JwPlatformError::ParameterEmpty(format!(
            "{} must not be empty",
            name
        )));
    }
    Ok(())
}
