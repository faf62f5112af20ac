//! Error types module
//!
//! This module provides the error types used throughout the JW Platform
//! client. API errors carry a string `code` in the response body; the
//! `from_error_code` table maps each known code to its own variant so that
//! callers can match on the failure kind instead of parsing messages.

use thiserror::Error;

/// Result type for JW Platform operations.
pub type JwPlatformResult<T> = Result<T, JwPlatformError>;

/// Errors returned by the JW Platform API or by the client itself.
///
/// One variant per documented API error code, plus transport-level variants
/// for failures that never reach the API (`Request`, `Parse`,
/// `Configuration`, `UnsupportedRequestType`). The message payload is the
/// raw response body so nothing the server said is lost.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum JwPlatformError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("No method: {0}")]
    NoMethod(String),

    #[error("Not implemented: {0}")]
    NotImplemented(String),

    #[error("Not supported: {0}")]
    NotSupported(String),

    #[error("Call failed: {0}")]
    CallFailed(String),

    #[error("Call unavailable: {0}")]
    CallUnavailable(String),

    #[error("Call invalid: {0}")]
    CallInvalid(String),

    #[error("Parameter missing: {0}")]
    ParameterMissing(String),

    #[error("Parameter empty: {0}")]
    ParameterEmpty(String),

    #[error("Parameter encoding: {0}")]
    ParameterEncoding(String),

    #[error("Parameter invalid: {0}")]
    ParameterInvalid(String),

    #[error("Precondition failed: {0}")]
    PreconditionFailed(String),

    #[error("Item already exists: {0}")]
    ItemAlreadyExists(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Integrity error: {0}")]
    Integrity(String),

    #[error("Digest missing: {0}")]
    DigestMissing(String),

    #[error("Digest invalid: {0}")]
    DigestInvalid(String),

    #[error("File upload failed: {0}")]
    FileUploadFailed(String),

    #[error("File size missing: {0}")]
    FileSizeMissing(String),

    #[error("File size invalid: {0}")]
    FileSizeInvalid(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("API key missing: {0}")]
    ApiKeyMissing(String),

    #[error("API key invalid: {0}")]
    ApiKeyInvalid(String),

    #[error("Timestamp missing: {0}")]
    TimestampMissing(String),

    #[error("Timestamp invalid: {0}")]
    TimestampInvalid(String),

    #[error("Nonce invalid: {0}")]
    NonceInvalid(String),

    #[error("Signature missing: {0}")]
    SignatureMissing(String),

    #[error("Signature invalid: {0}")]
    SignatureInvalid(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    #[error("Unknown API error: {0}")]
    Unknown(String),

    /// HTTP transport failure before a response body could be classified.
    #[error("Request error: {0}")]
    Request(String),

    /// Response body could not be parsed as JSON.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Client-side configuration problem (bad host, invalid header, etc.).
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("{0} is not a supported request type")]
    UnsupportedRequestType(String),
}

impl JwPlatformError {
    /// Map a server-supplied error code to the matching variant.
    ///
    /// The API sends codes like `"NotFoundError"`; the trailing `Error`
    /// suffix is stripped before lookup. Unrecognized codes fall back to
    /// [`JwPlatformError::Unknown`].
    pub fn from_error_code(code: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        match code.strip_suffix("Error").unwrap_or(code) {
            "NotFound" => Self::NotFound(message),
            "NoMethod" => Self::NoMethod(message),
            "NotImplemented" => Self::NotImplemented(message),
            "NotSupported" => Self::NotSupported(message),
            "CallFailed" => Self::CallFailed(message),
            "CallUnavailable" => Self::CallUnavailable(message),
            "CallInvalid" => Self::CallInvalid(message),
            "ParameterMissing" => Self::ParameterMissing(message),
            "ParameterEmpty" => Self::ParameterEmpty(message),
            "ParameterEncoding" => Self::ParameterEncoding(message),
            "ParameterInvalid" => Self::ParameterInvalid(message),
            "PreconditionFailed" => Self::PreconditionFailed(message),
            "ItemAlreadyExists" => Self::ItemAlreadyExists(message),
            "PermissionDenied" => Self::PermissionDenied(message),
            "Database" => Self::Database(message),
            "Integrity" => Self::Integrity(message),
            "DigestMissing" => Self::DigestMissing(message),
            "DigestInvalid" => Self::DigestInvalid(message),
            "FileUploadFailed" => Self::FileUploadFailed(message),
            "FileSizeMissing" => Self::FileSizeMissing(message),
            "FileSizeInvalid" => Self::FileSizeInvalid(message),
            "Internal" => Self::Internal(message),
            "ApiKeyMissing" => Self::ApiKeyMissing(message),
            "ApiKeyInvalid" => Self::ApiKeyInvalid(message),
            "TimestampMissing" => Self::TimestampMissing(message),
            "TimestampInvalid" => Self::TimestampInvalid(message),
            "NonceInvalid" => Self::NonceInvalid(message),
            "SignatureMissing" => Self::SignatureMissing(message),
            "SignatureInvalid" => Self::SignatureInvalid(message),
            "RateLimitExceeded" => Self::RateLimitExceeded(message),
            _ => Self::Unknown(message),
        }
    }

    /// Machine-readable error code (e.g. "NOT_FOUND").
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::NoMethod(_) => "NO_METHOD",
            Self::NotImplemented(_) => "NOT_IMPLEMENTED",
            Self::NotSupported(_) => "NOT_SUPPORTED",
            Self::CallFailed(_) => "CALL_FAILED",
            Self::CallUnavailable(_) => "CALL_UNAVAILABLE",
            Self::CallInvalid(_) => "CALL_INVALID",
            Self::ParameterMissing(_) => "PARAMETER_MISSING",
            Self::ParameterEmpty(_) => "PARAMETER_EMPTY",
            Self::ParameterEncoding(_) => "PARAMETER_ENCODING",
            Self::ParameterInvalid(_) => "PARAMETER_INVALID",
            Self::PreconditionFailed(_) => "PRECONDITION_FAILED",
            Self::ItemAlreadyExists(_) => "ITEM_ALREADY_EXISTS",
            Self::PermissionDenied(_) => "PERMISSION_DENIED",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Integrity(_) => "INTEGRITY_ERROR",
            Self::DigestMissing(_) => "DIGEST_MISSING",
            Self::DigestInvalid(_) => "DIGEST_INVALID",
            Self::FileUploadFailed(_) => "FILE_UPLOAD_FAILED",
            Self::FileSizeMissing(_) => "FILE_SIZE_MISSING",
            Self::FileSizeInvalid(_) => "FILE_SIZE_INVALID",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::ApiKeyMissing(_) => "API_KEY_MISSING",
            Self::ApiKeyInvalid(_) => "API_KEY_INVALID",
            Self::TimestampMissing(_) => "TIMESTAMP_MISSING",
            Self::TimestampInvalid(_) => "TIMESTAMP_INVALID",
            Self::NonceInvalid(_) => "NONCE_INVALID",
            Self::SignatureMissing(_) => "SIGNATURE_MISSING",
            Self::SignatureInvalid(_) => "SIGNATURE_INVALID",
            Self::RateLimitExceeded(_) => "RATE_LIMIT_EXCEEDED",
            Self::Unknown(_) => "UNKNOWN",
            Self::Request(_) => "REQUEST_ERROR",
            Self::Parse(_) => "PARSE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::UnsupportedRequestType(_) => "UNSUPPORTED_REQUEST_TYPE",
        }
    }

    /// Whether a retry of the same call could succeed.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::RateLimitExceeded(_)
                | Self::CallUnavailable(_)
                | Self::Database(_)
                | Self::Internal(_)
                | Self::Request(_)
        )
    }

    /// Whether this is a rate limit error.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimitExceeded(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_error_code_strips_suffix() {
        let err = JwPlatformError::from_error_code("NotFoundError", "no such media");
        assert!(matches!(err, JwPlatformError::NotFound(_)));
        assert_eq!(err.error_code(), "NOT_FOUND");
    }

    #[test]
    fn test_from_error_code_without_suffix() {
        let err = JwPlatformError::from_error_code("PermissionDenied", "nope");
        assert!(matches!(err, JwPlatformError::PermissionDenied(_)));
    }

    #[test]
    fn test_from_error_code_unknown_fallback() {
        let err = JwPlatformError::from_error_code("SomethingNew", "??");
        assert!(matches!(err, JwPlatformError::Unknown(_)));
        assert_eq!(err.error_code(), "UNKNOWN");
    }

    #[test]
    fn test_rate_limit_is_recoverable() {
        let err = JwPlatformError::from_error_code("RateLimitExceededError", "slow down");
        assert!(err.is_rate_limited());
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_not_found_is_not_recoverable() {
        let err = JwPlatformError::NotFound("gone".to_string());
        assert!(!err.is_recoverable());
        assert!(!err.is_rate_limited());
    }

    #[test]
    fn test_message_is_preserved() {
        let body = r#"{"code":"ParameterInvalidError","title":"bad tag"}"#;
        let err = JwPlatformError::from_error_code("ParameterInvalidError", body);
        assert!(err.to_string().contains("bad tag"));
    }

    #[test]
    fn test_signature_codes_map() {
        for (code, expected) in [
            ("SignatureMissingError", "SIGNATURE_MISSING"),
            ("SignatureInvalidError", "SIGNATURE_INVALID"),
            ("NonceInvalidError", "NONCE_INVALID"),
            ("TimestampInvalidError", "TIMESTAMP_INVALID"),
        ] {
            let err = JwPlatformError::from_error_code(code, "");
            assert_eq!(err.error_code(), expected);
        }
    }
}
