//! Live channel endpoints.

use jwplatform_core::error::JwPlatformResult;
use serde_json::Value;

use super::{require_id, ApiClient, BodyParams, QueryParams};

/// Client for `/v2/sites/{site_id}/channels/`.
#[derive(Debug, Clone)]
pub struct ChannelsClient {
    api: ApiClient,
}

impl ChannelsClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self, site_id: &str, query: &QueryParams) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        self.api
            .get(&format!("/v2/sites/{}/channels/", site_id), query)
            .await
    }

    pub async fn create(&self, site_id: &str, body: &BodyParams) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        self.api
            .post(
                &format!("/v2/sites/{}/channels/", site_id),
                &QueryParams::new(),
                body,
            )
            .await
    }

    pub async fn get(&self, site_id: &str, channel_id: &str) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        require_id("channel_id", channel_id)?;
        self.api
            .get(
                &format!("/v2/sites/{}/channels/{}/", site_id, channel_id),
                &QueryParams::new(),
            )
            .await
    }

    /// Update channel settings such as `title`, `latency_mode`, and
    /// `dvr_window`.
    pub async fn update(
        &self,
        site_id: &str,
        channel_id: &str,
        body: &BodyParams,
    ) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        require_id("channel_id", channel_id)?;
        self.api
            .patch(&format!("/v2/sites/{}/channels/{}/", site_id, channel_id), body)
            .await
    }

    pub async fn delete(&self, site_id: &str, channel_id: &str) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        require_id("channel_id", channel_id)?;
        self.api
            .delete(&format!("/v2/sites/{}/channels/{}/", site_id, channel_id))
            .await
    }
}
