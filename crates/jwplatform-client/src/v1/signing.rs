//! Request signing for the v1 Management API.
//!
//! The signature is a SHA1 hex digest over the canonical query string
//! (parameters sorted by key, values URL-encoded) with the API secret
//! appended. Encoding follows RFC3986 with the platform's adjustments:
//! space becomes `%20` (never `+`), `*` becomes `%2A`, and `~` stays bare.

use std::collections::BTreeMap;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use rand::Rng;
use sha1::{Digest, Sha1};

/// RFC3986 unreserved characters stay bare; everything else is escaped
/// with uppercase hex.
const JW_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// URL-encode a parameter value the way the JW Platform API expects.
pub(crate) fn encode_param(value: &str) -> String {
    utf8_percent_encode(value, JW_ENCODE_SET).to_string()
}

/// Build the canonical query string: sorted keys, encoded values, `&`-joined.
pub(crate) fn canonical_query(params: &BTreeMap<String, String>) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", key, encode_param(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// SHA1 hex digest over the canonical query plus the API secret.
pub(crate) fn signature(canonical: &str, api_secret: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(canonical.as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}

/// Full signed query string with `api_signature` appended.
pub(crate) fn signed_query(params: &BTreeMap<String, String>, api_secret: &str) -> String {
    let canonical = canonical_query(params);
    let digest = signature(&canonical, api_secret);
    format!("{}&api_signature={}", canonical, digest)
}

/// Random 8-digit nonce.
pub(crate) fn random_nonce() -> String {
    rand::rng().random_range(10_000_000..100_000_000u32).to_string()
}
