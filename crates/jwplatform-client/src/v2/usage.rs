//! Usage reporting endpoints.

use jwplatform_core::error::JwPlatformResult;
use serde_json::Value;

use super::{require_id, ApiClient, BodyParams};

/// Client for the account and site usage query routes.
#[derive(Debug, Clone)]
pub struct UsageClient {
    api: ApiClient,
}

impl UsageClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Query usage across the whole account.
    pub async fn query_account_usage(&self, body: &BodyParams) -> JwPlatformResult<Value> {
        self.api.put("/v2/query_usage/", body).await
    }

    /// Query usage for a single site.
    pub async fn query_site_usage(&self, site_id: &str, body: &BodyParams) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        self.api
            .put(&format!("/v2/sites/{}/query_usage/", site_id), body)
            .await
    }
}
