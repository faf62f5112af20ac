//! Multipart upload endpoints.
//!
//! Upload IDs come from creating a media resource with the `multipart`
//! upload method; the routes here list the part links and finalize the
//! upload once every part is on S3.

use jwplatform_core::error::JwPlatformResult;
use serde_json::Value;

use super::{require_id, ApiClient, BodyParams, QueryParams};

/// Client for `/v2/uploads/`.
#[derive(Debug, Clone)]
pub struct UploadsClient {
    api: ApiClient,
}

impl UploadsClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// List the presigned part upload links for an upload.
    pub async fn list_parts(&self, upload_id: &str, query: &QueryParams) -> JwPlatformResult<Value> {
        require_id("upload_id", upload_id)?;
        self.api
            .get(&format!("/v2/uploads/{}/parts/", upload_id), query)
            .await
    }

    /// Mark an upload complete after all parts are transferred.
    pub async fn complete(&self, upload_id: &str) -> JwPlatformResult<Value> {
        require_id("upload_id", upload_id)?;
        self.api
            .put(&format!("/v2/uploads/{}/complete/", upload_id), &BodyParams::new())
            .await
    }
}
