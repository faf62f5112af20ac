//! Thumbnail endpoints.

use jwplatform_core::error::JwPlatformResult;
use serde_json::Value;

use super::{require_id, ApiClient, BodyParams, QueryParams};

/// Client for `/v2/sites/{site_id}/thumbnails/`.
#[derive(Debug, Clone)]
pub struct ThumbnailsClient {
    api: ApiClient,
}

impl ThumbnailsClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self, site_id: &str, query: &QueryParams) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        self.api
            .get(&format!("/v2/sites/{}/thumbnails/", site_id), query)
            .await
    }

    /// Create a thumbnail from a video frame (`video_frame` source) or
    /// request an upload link for a static image (`custom_upload`).
    pub async fn create(&self, site_id: &str, body: &BodyParams) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        self.api
            .post(
                &format!("/v2/sites/{}/thumbnails/", site_id),
                &QueryParams::new(),
                body,
            )
            .await
    }

    pub async fn get(&self, site_id: &str, thumbnail_id: &str) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        require_id("thumbnail_id", thumbnail_id)?;
        self.api
            .get(
                &format!("/v2/sites/{}/thumbnails/{}/", site_id, thumbnail_id),
                &QueryParams::new(),
            )
            .await
    }

    pub async fn update(
        &self,
        site_id: &str,
        thumbnail_id: &str,
        body: &BodyParams,
    ) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        require_id("thumbnail_id", thumbnail_id)?;
        self.api
            .patch(
                &format!("/v2/sites/{}/thumbnails/{}/", site_id, thumbnail_id),
                body,
            )
            .await
    }

    pub async fn delete(&self, site_id: &str, thumbnail_id: &str) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        require_id("thumbnail_id", thumbnail_id)?;
        self.api
            .delete(&format!("/v2/sites/{}/thumbnails/{}/", site_id, thumbnail_id))
            .await
    }
}
