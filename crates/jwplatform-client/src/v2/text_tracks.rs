//! Text track (caption and chapter) endpoints.

use jwplatform_core::error::JwPlatformResult;
use serde_json::Value;

use super::{require_id, ApiClient, BodyParams, QueryParams};

/// Client for `/v2/sites/{site_id}/media/{media_id}/text_tracks/`.
#[derive(Debug, Clone)]
pub struct TextTracksClient {
    api: ApiClient,
}

impl TextTracksClient {
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
                &format!("/v2/sites/{}/media/{}/text_tracks/", site_id, media_id),
                query,
            )
            .await
    }

    /// Create a text track, either from an upload or a fetch URL.
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
                &format!("/v2/sites/{}/media/{}/text_tracks/", site_id, media_id),
                &QueryParams::new(),
                body,
            )
            .await
    }

    pub async fn get(
        &self,
        site_id: &str,
        media_id: &str,
        track_id: &str,
    ) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        require_id("media_id", media_id)?;
        require_id("track_id", track_id)?;
        self.api
            .get(
                &format!(
                    "/v2/sites/{}/media/{}/text_tracks/{}/",
                    site_id, media_id, track_id
                ),
                &QueryParams::new(),
            )
            .await
    }

    pub async fn update(
        &self,
        site_id: &str,
        media_id: &str,
        track_id: &str,
        body: &BodyParams,
    ) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        require_id("media_id", media_id)?;
        require_id("track_id", track_id)?;
        self.api
            .patch(
                &format!(
                    "/v2/sites/{}/media/{}/text_tracks/{}/",
                    site_id, media_id, track_id
                ),
                body,
            )
            .await
    }

    pub async fn delete(
        &self,
        site_id: &str,
        media_id: &str,
        track_id: &str,
    ) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        require_id("media_id", media_id)?;
        require_id("track_id", track_id)?;
        self.api
            .delete(&format!(
                "/v2/sites/{}/media/{}/text_tracks/{}/",
                site_id, media_id, track_id
            ))
            .await
    }

    /// Publish a track so players deliver it.
    pub async fn publish(
        &self,
        site_id: &str,
        media_id: &str,
        track_id: &str,
    ) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        require_id("media_id", media_id)?;
        require_id("track_id", track_id)?;
        self.api
            .put(
                &format!(
                    "/v2/sites/{}/media/{}/text_tracks/{}/publish/",
                    site_id, media_id, track_id
                ),
                &BodyParams::new(),
            )
            .await
    }

    /// Withdraw a published track.
    pub async fn unpublish(
        &self,
        site_id: &str,
        media_id: &str,
        track_id: &str,
    ) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        require_id("media_id", media_id)?;
        require_id("track_id", track_id)?;
        self.api
            .put(
                &format!(
                    "/v2/sites/{}/media/{}/text_tracks/{}/unpublish/",
                    site_id, media_id, track_id
                ),
                &BodyParams::new(),
            )
            .await
    }
}
