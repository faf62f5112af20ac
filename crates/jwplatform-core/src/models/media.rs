use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::ProtectionRule;

/// User-defined custom key/value pairs attached to a media item.
pub type CustomParams = BTreeMap<String, String>;

/// A media item as returned by `GET /v2/sites/{site_id}/media/{media_id}/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Media {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub resource_type: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub last_modified: Option<DateTime<Utc>>,
    pub duration: Option<f64>,
    pub error_message: Option<String>,
    pub hosting_type: Option<String>,
    pub media_type: Option<String>,
    pub mime_type: Option<String>,
    pub status: Option<String>,
    pub trim_in_point: Option<String>,
    pub trim_out_point: Option<String>,
    pub metadata: Option<Metadata>,
    pub relationships: Option<Relationships>,
}

/// Editorial metadata for a media item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    pub title: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub permalink: Option<String>,
    pub publish_start_date: Option<String>,
    pub publish_end_date: Option<String>,
    pub custom_params: Option<CustomParams>,
}

/// Links from a media item to related resources.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Relationships {
    pub protection_rule: Option<ProtectionRule>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_deserializes_from_api_shape() {
        let body = serde_json::json!({
            "id": "Ah6df83q",
            "type": "media",
            "created": "2024-05-01T10:30:00+00:00",
            "last_modified": "2024-05-02T08:00:00+00:00",
            "duration": 134.9,
            "hosting_type": "hosted",
            "media_type": "video",
            "mime_type": "video/mp4",
            "status": "ready",
            "metadata": {
                "title": "Launch teaser",
                "author": "marketing",
                "custom_params": { "campaign": "spring" }
            },
            "relationships": {
                "protection_rule": { "id": "rule01" }
            }
        });

        let media: Media = serde_json::from_value(body).unwrap();
        assert_eq!(media.id.as_deref(), Some("Ah6df83q"));
        assert_eq!(media.resource_type.as_deref(), Some("media"));
        assert_eq!(media.duration, Some(134.9));
        let metadata = media.metadata.unwrap();
        assert_eq!(metadata.title.as_deref(), Some("Launch teaser"));
        assert_eq!(
            metadata.custom_params.unwrap().get("campaign").map(String::as_str),
            Some("spring")
        );
        let rule = media.relationships.unwrap().protection_rule.unwrap();
        assert_eq!(rule.id.as_deref(), Some("rule01"));
    }

    #[test]
    fn test_media_tolerates_sparse_body() {
        let media: Media = serde_json::from_value(serde_json::json!({ "id": "x" })).unwrap();
        assert_eq!(media.id.as_deref(), Some("x"));
        assert!(media.metadata.is_none());
        assert!(media.created.is_none());
    }
}
