//! Bulk tag operations.

use jwplatform_core::error::JwPlatformResult;
use serde_json::Value;

use super::{require_id, ApiClient, BodyParams};

/// Client for the site-wide tag routes.
#[derive(Debug, Clone)]
pub struct TagsClient {
    api: ApiClient,
}

impl TagsClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Remove a tag from every media item on the site.
    pub async fn bulk_remove(&self, site_id: &str, body: &BodyParams) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        self.api
            .put(&format!("/v2/sites/{}/remove_tag/", site_id), body)
            .await
    }

    /// Rename a tag on every media item on the site.
    pub async fn bulk_rename(&self, site_id: &str, body: &BodyParams) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        self.api
            .put(&format!("/v2/sites/{}/rename_tag/", site_id), body)
            .await
    }
}
