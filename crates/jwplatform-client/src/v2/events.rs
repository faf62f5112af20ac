//! Live channel event endpoints.

use jwplatform_core::error::JwPlatformResult;
use serde_json::Value;

use super::{require_id, ApiClient, BodyParams, QueryParams};

/// Client for `/v2/sites/{site_id}/channels/{channel_id}/events/`.
#[derive(Debug, Clone)]
pub struct EventsClient {
    api: ApiClient,
}

impl EventsClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(
        &self,
        site_id: &str,
        channel_id: &str,
        query: &QueryParams,
    ) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        require_id("channel_id", channel_id)?;
        self.api
            .get(
                &format!("/v2/sites/{}/channels/{}/events/", site_id, channel_id),
                query,
            )
            .await
    }

    // The details route has no trailing slash.
    pub async fn get(
        &self,
        site_id: &str,
        channel_id: &str,
        event_id: &str,
    ) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        require_id("channel_id", channel_id)?;
        require_id("event_id", event_id)?;
        self.api
            .get(
                &format!(
                    "/v2/sites/{}/channels/{}/events/{}",
                    site_id, channel_id, event_id
                ),
                &QueryParams::new(),
            )
            .await
    }

    /// Request a master asset for a finished event, to be fetched later
    /// via [`EventsClient::download_master`].
    pub async fn request_master(
        &self,
        site_id: &str,
        channel_id: &str,
        event_id: &str,
    ) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        require_id("channel_id", channel_id)?;
        require_id("event_id", event_id)?;
        self.api
            .put(
                &format!(
                    "/v2/sites/{}/channels/{}/events/{}/request_master/",
                    site_id, channel_id, event_id
                ),
                &BodyParams::new(),
            )
            .await
    }

    /// Clip a section of an event into a new VOD media item.
    pub async fn clip(
        &self,
        site_id: &str,
        channel_id: &str,
        event_id: &str,
        body: &BodyParams,
    ) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        require_id("channel_id", channel_id)?;
        require_id("event_id", event_id)?;
        self.api
            .put(
                &format!(
                    "/v2/sites/{}/channels/{}/events/{}/clip/",
                    site_id, channel_id, event_id
                ),
                body,
            )
            .await
    }

    /// Fetch the download link for a previously requested master asset.
    pub async fn download_master(
        &self,
        site_id: &str,
        channel_id: &str,
        event_id: &str,
    ) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        require_id("channel_id", channel_id)?;
        require_id("event_id", event_id)?;
        self.api
            .get(
                &format!(
                    "/v2/sites/{}/channels/{}/events/{}/master/",
                    site_id, channel_id, event_id
                ),
                &QueryParams::new(),
            )
            .await
    }
}
