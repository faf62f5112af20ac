//! Configuration module
//!
//! Credential structures for both API generations. The v1 Management API
//! needs a key/secret pair for request signing; the v2 API needs only a
//! bearer secret. Constructors validate that nothing is blank so misconfig
//! surfaces before the first request.

use std::env;

use crate::error::{JwPlatformError, JwPlatformResult};

/// Default host for the v1 Management API.
pub const V1_HOST: &str = "https://api.jwplatform.com/v1";

/// Default host for the v2 API.
pub const V2_HOST: &str = "https://api.jwplayer.com";

/// Key/secret pair for the v1 Management API.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub api_key: String,
    pub api_secret: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> JwPlatformResult<Self> {
        let api_key = api_key.into();
        let api_secret = api_secret.into();
        if api_key.trim().is_empty() {
            return Err(JwPlatformError::ApiKeyMissing(
                "API key must not be empty".to_string(),
            ));
        }
        if api_secret.trim().is_empty() {
            return Err(JwPlatformError::ApiKeyMissing(
                "API secret must not be empty".to_string(),
            ));
        }
        Ok(Self {
            api_key,
            api_secret,
        })
    }

    /// Read credentials from `JWPLATFORM_API_KEY` and `JWPLATFORM_API_SECRET`.
    pub fn from_env() -> JwPlatformResult<Self> {
        let api_key = env::var("JWPLATFORM_API_KEY").map_err(|_| {
            JwPlatformError::Configuration("JWPLATFORM_API_KEY is not set".to_string())
        })?;
        let api_secret = env::var("JWPLATFORM_API_SECRET").map_err(|_| {
            JwPlatformError::Configuration("JWPLATFORM_API_SECRET is not set".to_string())
        })?;
        Self::new(api_key, api_secret)
    }
}

/// Bearer secret for the v2 API.
#[derive(Clone, Debug)]
pub struct V2Credentials {
    pub secret: String,
}

impl V2Credentials {
    pub fn new(secret: impl Into<String>) -> JwPlatformResult<Self> {
        let secret = secret.into();
        if secret.trim().is_empty() {
            return Err(JwPlatformError::ApiKeyMissing(
                "API secret must not be empty".to_string(),
            ));
        }
        Ok(Self { secret })
    }

    /// Read the secret from `JWPLATFORM_V2_SECRET`.
    pub fn from_env() -> JwPlatformResult<Self> {
        let secret = env::var("JWPLATFORM_V2_SECRET").map_err(|_| {
            JwPlatformError::Configuration("JWPLATFORM_V2_SECRET is not set".to_string())
        })?;
        Self::new(secret)
    }
}
