//! JW Platform Core Library
//!
//! Shared error types, credential configuration, and resource models for
//! the JW Platform API client crates.

pub mod config;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::{Credentials, V2Credentials, V1_HOST, V2_HOST};
pub use error::{JwPlatformError, JwPlatformResult};
