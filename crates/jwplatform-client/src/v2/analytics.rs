//! Analytics query endpoints.

use jwplatform_core::error::JwPlatformResult;
use serde_json::Value;

use super::{require_id, ApiClient, QueryParams};

/// Client for `/v2/sites/{site_id}/analytics/queries/`.
#[derive(Debug, Clone)]
pub struct AnalyticsClient {
    api: ApiClient,
}

impl AnalyticsClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Run an analytics query.
    ///
    /// `source` defaults to `default` and `format` to `json`; any extra
    /// query dimensions go in `params`.
    pub async fn run_query(
        &self,
        site_id: &str,
        source: Option<&str>,
        format: Option<&str>,
        params: &QueryParams,
    ) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;

        let mut query = params.clone();
        query.insert(
            "source".to_string(),
            source.unwrap_or("default").to_string(),
        );
        query.insert("format".to_string(), format.unwrap_or("json").to_string());

        self.api
            .get(&format!("/v2/sites/{}/analytics/queries/", site_id), &query)
            .await
    }
}
