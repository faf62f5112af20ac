//! Media resource endpoints.

use jwplatform_core::error::JwPlatformResult;
use serde_json::Value;

use super::{require_id, ApiClient, BodyParams, QueryParams};

/// Client for `/v2/sites/{site_id}/media/`.
#[derive(Debug, Clone)]
pub struct MediaClient {
    api: ApiClient,
}

impl MediaClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// List media for a site. Supports `page`, `page_length`, `q`, and
    /// `sort` query parameters.
    pub async fn list(&self, site_id: &str, query: &QueryParams) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        self.api
            .get(&format!("/v2/sites/{}/media/", site_id), query)
            .await
    }

    /// Create a media resource. With an empty `body` the API creates a
    /// placeholder awaiting an upload.
    pub async fn create(&self, site_id: &str, body: &BodyParams) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        self.api
            .post(&format!("/v2/sites/{}/media/", site_id), &QueryParams::new(), body)
            .await
    }

    pub async fn get(
        &self,
        site_id: &str,
        media_id: &str,
        query: &QueryParams,
    ) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        require_id("media_id", media_id)?;
        self.api
            .get(&format!("/v2/sites/{}/media/{}/", site_id, media_id), query)
            .await
    }

    pub async fn update(
        &self,
        site_id: &str,
        media_id: &str,
        body: &BodyParams,
    ) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        require_id("media_id", media_id)?;
        self.api
            .patch(&format!("/v2/sites/{}/media/{}/", site_id, media_id), body)
            .await
    }

    pub async fn delete(&self, site_id: &str, media_id: &str) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        require_id("media_id", media_id)?;
        self.api
            .delete(&format!("/v2/sites/{}/media/{}/", site_id, media_id))
            .await
    }

    /// Request a new upload link for an existing media resource.
    pub async fn reupload(
        &self,
        site_id: &str,
        media_id: &str,
        body: &BodyParams,
    ) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        require_id("media_id", media_id)?;
        self.api
            .put(
                &format!("/v2/sites/{}/media/{}/reupload/", site_id, media_id),
                body,
            )
            .await
    }
}
