//! Ad schedule endpoints.

use jwplatform_core::error::JwPlatformResult;
use serde_json::Value;

use super::{require_id, ApiClient, BodyParams, QueryParams};

/// Client for `/v2/sites/{site_id}/advertising/schedules`.
#[derive(Debug, Clone)]
pub struct AdvertisingClient {
    api: ApiClient,
}

impl AdvertisingClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list_schedules(
        &self,
        site_id: &str,
        query: &QueryParams,
    ) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        self.api
            .get(&format!("/v2/sites/{}/advertising/schedules", site_id), query)
            .await
    }

    pub async fn create_schedule(&self, site_id: &str, body: &BodyParams) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        self.api
            .post(
                &format!("/v2/sites/{}/advertising/schedules", site_id),
                &QueryParams::new(),
                body,
            )
            .await
    }

    pub async fn get_schedule(&self, site_id: &str, schedule_id: &str) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        require_id("schedule_id", schedule_id)?;
        self.api
            .get(
                &format!("/v2/sites/{}/advertising/schedules/{}", site_id, schedule_id),
                &QueryParams::new(),
            )
            .await
    }

    pub async fn update_schedule(
        &self,
        site_id: &str,
        schedule_id: &str,
        body: &BodyParams,
    ) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        require_id("schedule_id", schedule_id)?;
        self.api
            .patch(
                &format!("/v2/sites/{}/advertising/schedules/{}", site_id, schedule_id),
                body,
            )
            .await
    }

    pub async fn delete_schedule(
        &self,
        site_id: &str,
        schedule_id: &str,
    ) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        require_id("schedule_id", schedule_id)?;
        self.api
            .delete(&format!(
                "/v2/sites/{}/advertising/schedules/{}",
                site_id, schedule_id
            ))
            .await
    }
}
