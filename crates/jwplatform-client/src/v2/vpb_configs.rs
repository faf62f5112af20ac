//! Video player bidding (VPB) configuration endpoints.

use jwplatform_core::error::JwPlatformResult;
use serde_json::Value;

use super::{require_id, ApiClient, BodyParams, QueryParams};

/// Client for `/v2/sites/{site_id}/advertising/vpb_configs/`.
#[derive(Debug, Clone)]
pub struct VpbConfigsClient {
    api: ApiClient,
}

impl VpbConfigsClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self, site_id: &str, query: &QueryParams) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        self.api
            .get(&format!("/v2/sites/{}/advertising/vpb_configs/", site_id), query)
            .await
    }

    pub async fn create(&self, site_id: &str, body: &BodyParams) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        self.api
            .post(
                &format!("/v2/sites/{}/advertising/vpb_configs/", site_id),
                &QueryParams::new(),
                body,
            )
            .await
    }

    pub async fn get(&self, site_id: &str, config_id: &str) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        require_id("config_id", config_id)?;
        self.api
            .get(
                &format!("/v2/sites/{}/advertising/vpb_configs/{}/", site_id, config_id),
                &QueryParams::new(),
            )
            .await
    }

    pub async fn update(
        &self,
        site_id: &str,
        config_id: &str,
        body: &BodyParams,
    ) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        require_id("config_id", config_id)?;
        self.api
            .patch(
                &format!("/v2/sites/{}/advertising/vpb_configs/{}/", site_id, config_id),
                body,
            )
            .await
    }

    pub async fn delete(&self, site_id: &str, config_id: &str) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        require_id("config_id", config_id)?;
        self.api
            .delete(&format!(
                "/v2/sites/{}/advertising/vpb_configs/{}/",
                site_id, config_id
            ))
            .await
    }

    /// Attach a VPB config to a set of ad schedules.
    pub async fn update_schedules(&self, site_id: &str, body: &BodyParams) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        self.api
            .put(
                &format!("/v2/sites/{}/advertising/update_schedules_vpb_config/", site_id),
                body,
            )
            .await
    }
}
