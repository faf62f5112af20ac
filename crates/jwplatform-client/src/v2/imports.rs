//! Bulk import (MRSS feed) endpoints.

use jwplatform_core::error::JwPlatformResult;
use serde_json::Value;

use super::{require_id, ApiClient, BodyParams, QueryParams};

/// Client for `/v2/sites/{site_id}/imports/`.
#[derive(Debug, Clone)]
pub struct ImportsClient {
    api: ApiClient,
}

impl ImportsClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self, site_id: &str, query: &QueryParams) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        self.api
            .get(&format!("/v2/sites/{}/imports/", site_id), query)
            .await
    }

    pub async fn create(&self, site_id: &str, body: &BodyParams) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        self.api
            .post(
                &format!("/v2/sites/{}/imports/", site_id),
                &QueryParams::new(),
                body,
            )
            .await
    }

    pub async fn get(&self, site_id: &str, import_id: &str) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        require_id("import_id", import_id)?;
        self.api
            .get(
                &format!("/v2/sites/{}/imports/{}/", site_id, import_id),
                &QueryParams::new(),
            )
            .await
    }

    pub async fn update(
        &self,
        site_id: &str,
        import_id: &str,
        body: &BodyParams,
    ) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        require_id("import_id", import_id)?;
        self.api
            .patch(&format!("/v2/sites/{}/imports/{}/", site_id, import_id), body)
            .await
    }

    pub async fn delete(&self, site_id: &str, import_id: &str) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        require_id("import_id", import_id)?;
        self.api
            .delete(&format!("/v2/sites/{}/imports/{}/", site_id, import_id))
            .await
    }
}
