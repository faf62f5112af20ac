//! Client for the legacy v1 Management API.
//!
//! Every call carries `api_key`, `api_format=json`, a random nonce, the
//! current unix timestamp, and an `api_signature` computed by the
//! [`signing`] module. Uploads run in two steps: a signed call that
//! returns an upload link, then a multipart POST of the file to that link.

mod signing;

use std::collections::BTreeMap;
use std::time::Duration;

use jwplatform_core::config::{Credentials, V1_HOST};
use jwplatform_core::error::{JwPlatformError, JwPlatformResult};
use reqwest::multipart;
use reqwest::Method;
use serde_json::Value;
use tracing::debug;

use crate::response::parse_response;

const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Client for the v1 Management API (signed requests).
#[derive(Debug, Clone)]
pub struct V1Client {
    client: reqwest::Client,
    host: String,
    credentials: Credentials,
}

impl V1Client {
    /// Create a client against the production v1 host.
    pub fn new(credentials: Credentials) -> JwPlatformResult<Self> {
        Self::with_host(credentials, V1_HOST)
    }

    /// Create a client against a custom host, e.g. a test server.
    pub fn with_host(credentials: Credentials, host: &str) -> JwPlatformResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| JwPlatformError::Request(format!("Failed to build client: {}", e)))?;

        Ok(Self {
            client,
            host: host.trim_end_matches('/').to_string(),
            credentials,
        })
    }

    /// Call a v1 route with no caller parameters, e.g. `/videos/list`.
    pub async fn request(&self, path: &str) -> JwPlatformResult<Value> {
        self.request_with_params(path, &BTreeMap::new()).await
    }

    /// Call a v1 route with parameters. The required `api_*` parameters
    /// and the signature are added automatically.
    pub async fn request_with_params(
        &self,
        path: &str,
        params: &BTreeMap<String, String>,
    ) -> JwPlatformResult<Value> {
        self.execute(path, params, Method::GET).await
    }

    /// Call a v1 route with POST, parameters in the signed query string.
    pub async fn post(
        &self,
        path: &str,
        params: &BTreeMap<String, String>,
    ) -> JwPlatformResult<Value> {
        self.execute(path, params, Method::POST).await
    }

    /// Call a v1 route with POST, sending `params` as a JSON body.
    ///
    /// Body parameters are not part of the signature; only the `api_*`
    /// parameters are signed into the query string.
    pub async fn post_with_body_params(
        &self,
        path: &str,
        params: &BTreeMap<String, String>,
    ) -> JwPlatformResult<Value> {
        let url = self.build_request_url(path, &BTreeMap::new());
        debug!(path, "v1 request");

        let response = self
            .client
            .post(&url)
            .json(params)
            .send()
            .await
            .map_err(|e| JwPlatformError::Request(e.to_string()))?;

        parse_response(response).await
    }

    async fn execute(
        &self,
        path: &str,
        params: &BTreeMap<String, String>,
        method: Method,
    ) -> JwPlatformResult<Value> {
        let url = self.build_request_url(path, params);
        debug!(%method, path, "v1 request");

        let request = if method == Method::GET {
            self.client.get(&url)
        } else if method == Method::POST {
            self.client.post(&url)
        } else {
            return Err(JwPlatformError::UnsupportedRequestType(method.to_string()));
        };

        let response = request
            .send()
            .await
            .map_err(|e| JwPlatformError::Request(e.to_string()))?;

        parse_response(response).await
    }

    /// Create a video resource and upload its file in one call.
    ///
    /// `params` are forwarded to `/videos/create`; the returned upload
    /// link is then used to POST the file.
    pub async fn upload_video(
        &self,
        params: &BTreeMap<String, String>,
        file_path: &str,
    ) -> JwPlatformResult<Value> {
        let created = self.request_with_params("/videos/create", params).await?;
        self.upload(&created, file_path).await
    }

    /// Upload a file to the link embedded in a `/videos/create` response.
    pub async fn upload(&self, create_response: &Value, file_path: &str) -> JwPlatformResult<Value> {
        let url = upload_url(create_response)?;
        debug!(file_path, "v1 upload");

        let bytes = std::fs::read(file_path)
            .map_err(|e| JwPlatformError::Request(format!("Failed to read {}: {}", file_path, e)))?;

        let file_name = std::path::Path::new(file_path)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("file")
            .to_string();

        let form =
            multipart::Form::new().part("file", multipart::Part::bytes(bytes).file_name(file_name));

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| JwPlatformError::Request(e.to_string()))?;

        parse_response(response).await
    }

    fn build_request_url(&self, path: &str, params: &BTreeMap<String, String>) -> String {
        let mut signed = params.clone();
        signed.insert("api_key".to_string(), self.credentials.api_key.clone());
        signed.insert("api_format".to_string(), "json".to_string());
        signed.insert("api_nonce".to_string(), signing::random_nonce());
        signed.insert("api_timestamp".to_string(), unix_timestamp().to_string());

        let query = signing::signed_query(&signed, &self.credentials.api_secret);
        format!("{}{}?{}", self.host, path, query)
    }
}

/// Extract the upload URL from a `/videos/create` response.
///
/// The link object carries the protocol, address, path, and the
/// `key`/`token` query pair that authorizes the upload.
fn upload_url(create_response: &Value) -> JwPlatformResult<String> {
    let link = create_response
        .get("link")
        .ok_or_else(|| JwPlatformError::Parse("Missing link in create response".to_string()))?;

    let field = |name: &str| -> JwPlatformResult<&str> {
        link.get(name).and_then(Value::as_str).ok_or_else(|| {
            JwPlatformError::Parse(format!("Missing link.{} in create response", name))
        })
    };
    let query_field = |name: &str| -> JwPlatformResult<&str> {
        link.get("query")
            .and_then(|query| query.get(name))
            .and_then(Value::as_str)
            .ok_or_else(|| {
                JwPlatformError::Parse(format!("Missing link.query.{} in create response", name))
            })
    };

    Ok(format!(
        "{}://{}{}?api_format=json&key={}&token={}",
        field("protocol")?,
        field("address")?,
        field("path")?,
        query_field("key")?,
        query_field("token")?,
    ))
}

fn unix_timestamp() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
