//! Webhook endpoints. Webhooks are account-scoped, not site-scoped.

use jwplatform_core::error::JwPlatformResult;
use serde_json::Value;

use super::{require_id, ApiClient, BodyParams, QueryParams};

/// Client for `/v2/webhooks/`.
#[derive(Debug, Clone)]
pub struct WebhooksClient {
    api: ApiClient,
}

impl WebhooksClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self, query: &QueryParams) -> JwPlatformResult<Value> {
        self.api.get("/v2/webhooks/", query).await
    }

    /// Register a webhook. The response carries the signing secret used
    /// to verify deliveries; it is only returned once.
    pub async fn create(&self, body: &BodyParams) -> JwPlatformResult<Value> {
        self.api.post("/v2/webhooks/", &QueryParams::new(), body).await
    }

    pub async fn get(&self, webhook_id: &str) -> JwPlatformResult<Value> {
        require_id("webhook_id", webhook_id)?;
        self.api
            .get(&format!("/v2/webhooks/{}/", webhook_id), &QueryParams::new())
            .await
    }

    pub async fn update(&self, webhook_id: &str, body: &BodyParams) -> JwPlatformResult<Value> {
        require_id("webhook_id", webhook_id)?;
        self.api
            .patch(&format!("/v2/webhooks/{}/", webhook_id), body)
            .await
    }

    pub async fn delete(&self, webhook_id: &str) -> JwPlatformResult<Value> {
        require_id("webhook_id", webhook_id)?;
        self.api.delete(&format!("/v2/webhooks/{}/", webhook_id)).await
    }
}
