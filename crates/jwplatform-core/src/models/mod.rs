//! Typed resource models.
//!
//! Endpoint methods return raw `serde_json::Value`; these types cover the
//! documented shapes for callers who want structure. Every field is
//! optional because the API omits nulls rather than sending them.

mod media;
mod protection_rule;

pub use media::{CustomParams, Media, Metadata, Relationships};
pub use protection_rule::ProtectionRule;
