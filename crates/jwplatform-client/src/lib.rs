//! HTTP clients for the JW Platform management APIs.
//!
//! Two API generations are covered:
//!
//! - [`v1::V1Client`] talks to the legacy Management API, which requires a
//!   per-request SHA1 signature over the sorted, URL-encoded parameters
//!   plus the shared secret.
//! - [`v2::ApiClient`] is the shared dispatcher for the v2 API (bearer
//!   auth); the per-resource clients in [`v2`] wrap it with the endpoint
//!   templates for media, playlists, channels, webhooks, and the rest.
//!
//! Non-2xx responses are classified into [`JwPlatformError`] variants via
//! the `code` field the API embeds in error bodies.

pub mod v1;
pub mod v2;

mod response;

pub use jwplatform_core::config::{Credentials, V2Credentials, V1_HOST, V2_HOST};
pub use jwplatform_core::error::{JwPlatformError, JwPlatformResult};
pub use jwplatform_core::models;

pub use v1::V1Client;
pub use v2::{
    AdvertisingClient, AnalyticsClient, ApiClient, ChannelsClient, EventsClient, ImportsClient,
    MediaClient, MediaRenditionsClient, OriginalsClient, PlayerBiddingConfigsClient,
    PlaylistKind, PlaylistsClient, ProtectionRulesClient, TagsClient, TextTracksClient,
    ThumbnailsClient, UploadsClient, UsageClient, VpbConfigsClient, WebhooksClient,
};
