//! Playlist resource endpoints.
//!
//! Plain list/get/delete work on `/playlists/`; creating or updating a
//! playlist goes through the flavor-specific routes selected by
//! [`PlaylistKind`].

use jwplatform_core::error::JwPlatformResult;
use serde_json::Value;

use super::{require_id, ApiClient, BodyParams, QueryParams};

/// The playlist flavors the v2 API distinguishes by route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaylistKind {
    Manual,
    Dynamic,
    Trending,
    ArticleMatching,
    Search,
    Recommendations,
}

impl PlaylistKind {
    /// Route segment for this flavor, e.g. `manual_playlist`.
    pub fn segment(&self) -> &'static str {
        match self {
            PlaylistKind::Manual => "manual_playlist",
            PlaylistKind::Dynamic => "dynamic_playlist",
            PlaylistKind::Trending => "trending_playlist",
            PlaylistKind::ArticleMatching => "article_matching_playlist",
            PlaylistKind::Search => "search_playlist",
            PlaylistKind::Recommendations => "recommendations_playlist",
        }
    }
}

/// Client for `/v2/sites/{site_id}/playlists/`.
#[derive(Debug, Clone)]
pub struct PlaylistsClient {
    api: ApiClient,
}

impl PlaylistsClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self, site_id: &str, query: &QueryParams) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        self.api
            .get(&format!("/v2/sites/{}/playlists/", site_id), query)
            .await
    }

    pub async fn get(&self, site_id: &str, playlist_id: &str) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        require_id("playlist_id", playlist_id)?;
        self.api
            .get(
                &format!("/v2/sites/{}/playlists/{}/", site_id, playlist_id),
                &QueryParams::new(),
            )
            .await
    }

    pub async fn delete(&self, site_id: &str, playlist_id: &str) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        require_id("playlist_id", playlist_id)?;
        self.api
            .delete(&format!("/v2/sites/{}/playlists/{}/", site_id, playlist_id))
            .await
    }

    /// Create a playlist of the given flavor.
    pub async fn create(
        &self,
        site_id: &str,
        kind: PlaylistKind,
        body: &BodyParams,
    ) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        self.api
            .post(
                &format!("/v2/sites/{}/playlists/{}/", site_id, kind.segment()),
                &QueryParams::new(),
                body,
            )
            .await
    }

    /// Fetch a playlist through its flavor-specific route, which returns
    /// the flavor's full configuration.
    pub async fn get_by_kind(
        &self,
        site_id: &str,
        playlist_id: &str,
        kind: PlaylistKind,
    ) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        require_id("playlist_id", playlist_id)?;
        self.api
            .get(
                &format!(
                    "/v2/sites/{}/playlists/{}/{}/",
                    site_id,
                    playlist_id,
                    kind.segment()
                ),
                &QueryParams::new(),
            )
            .await
    }

    pub async fn update(
        &self,
        site_id: &str,
        playlist_id: &str,
        kind: PlaylistKind,
        body: &BodyParams,
    ) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        require_id("playlist_id", playlist_id)?;
        self.api
            .patch(
                &format!(
                    "/v2/sites/{}/playlists/{}/{}/",
                    site_id,
                    playlist_id,
                    kind.segment()
                ),
                body,
            )
            .await
    }

    pub async fn delete_by_kind(
        &self,
        site_id: &str,
        playlist_id: &str,
        kind: PlaylistKind,
    ) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        require_id("playlist_id", playlist_id)?;
        self.api
            .delete(&format!(
                "/v2/sites/{}/playlists/{}/{}/",
                site_id,
                playlist_id,
                kind.segment()
            ))
            .await
    }
}
