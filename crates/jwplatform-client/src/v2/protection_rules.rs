//! Content protection rule endpoints.
//!
//! Media rules are a collection; the site rule is a singleton that can
//! only be fetched or updated.

use jwplatform_core::error::JwPlatformResult;
use serde_json::Value;

use super::{require_id, ApiClient, BodyParams, QueryParams};

/// Client for the protection rule routes under `/v2/sites/{site_id}/`.
#[derive(Debug, Clone)]
pub struct ProtectionRulesClient {
    api: ApiClient,
}

impl ProtectionRulesClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list_media_rules(
        &self,
        site_id: &str,
        query: &QueryParams,
    ) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        self.api
            .get(&format!("/v2/sites/{}/media_protection_rules/", site_id), query)
            .await
    }

    pub async fn create_media_rule(
        &self,
        site_id: &str,
        body: &BodyParams,
    ) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        self.api
            .post(
                &format!("/v2/sites/{}/media_protection_rules/", site_id),
                &QueryParams::new(),
                body,
            )
            .await
    }

    pub async fn get_media_rule(&self, site_id: &str, rule_id: &str) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        require_id("rule_id", rule_id)?;
        self.api
            .get(
                &format!("/v2/sites/{}/media_protection_rules/{}/", site_id, rule_id),
                &QueryParams::new(),
            )
            .await
    }

    pub async fn update_media_rule(
        &self,
        site_id: &str,
        rule_id: &str,
        body: &BodyParams,
    ) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        require_id("rule_id", rule_id)?;
        self.api
            .patch(
                &format!("/v2/sites/{}/media_protection_rules/{}/", site_id, rule_id),
                body,
            )
            .await
    }

    pub async fn delete_media_rule(&self, site_id: &str, rule_id: &str) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        require_id("rule_id", rule_id)?;
        self.api
            .delete(&format!(
                "/v2/sites/{}/media_protection_rules/{}/",
                site_id, rule_id
            ))
            .await
    }

    /// Fetch the site-wide protection rule.
    pub async fn get_site_rule(&self, site_id: &str) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        self.api
            .get(
                &format!("/v2/sites/{}/site_protection_rule/", site_id),
                &QueryParams::new(),
            )
            .await
    }

    /// Update the site-wide protection rule.
    pub async fn update_site_rule(&self, site_id: &str, body: &BodyParams) -> JwPlatformResult<Value> {
        require_id("site_id", site_id)?;
        self.api
            .patch(&format!("/v2/sites/{}/site_protection_rule/", site_id), body)
            .await
    }
}
