//! Media rendition endpoints.

use jwplatform_core::error::JwPlatformResult;
use serde_json::Value;

use super::{require_id, ApiClient, BodyParams, QueryParams};

/// Client for `/v2/sites/{site_id}/media/{media_id}/media_renditions/`.
#[derive(Debug, Clone)]
pub struct MediaRenditionsClient {
    api: ApiClient,
}

impl MediaRenditionsClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(
        &self,
        site_id: &str,
        media_id: &str,
        query: &QueryParams,
    ) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        require_id("media_id", media_id)?;
        self.api
            .get(
                &format!("/v2/sites/{}/media/{}/media_renditions/", site_id, media_id),
                query,
            )
            .await
    }

    /// Request a new rendition from a template.
    pub async fn create(
        &self,
        site_id: &str,
        media_id: &str,
        body: &BodyParams,
    ) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        require_id("media_id", media_id)?;
        self.api
            .post(
                &format!("/v2/sites/{}/media/{}/media_renditions/", site_id, media_id),
                &QueryParams::new(),
                body,
            )
            .await
    }

    pub async fn get(
        &self,
        site_id: &str,
        media_id: &str,
        rendition_id: &str,
    ) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        require_id("media_id", media_id)?;
        require_id("rendition_id", rendition_id)?;
        self.api
            .get(
                &format!(
                    "/v2/sites/{}/media/{}/media_renditions/{}/",
                    site_id, media_id, rendition_id
                ),
                &QueryParams::new(),
            )
            .await
    }

    pub async fn delete(
        &self,
        site_id: &str,
        media_id: &str,
        rendition_id: &str,
    ) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        require_id("media_id", media_id)?;
        require_id("rendition_id", rendition_id)?;
        self.api
            .delete(&format!(
                "/v2/sites/{}/media/{}/media_renditions/{}/",
                site_id, media_id, rendition_id
            ))
            .await
    }
}
