//! Endpoint settings for the X API.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Where and how to reach the X API.
///
/// Overridable in tests to point at a local mock server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, TypedBuilder)]
pub struct XApiSettings {
    /// Base URL for the v2 API.
    #[builder(default = default_api_url(), setter(into))]
    #[serde(default = "default_api_url")]
    api_url: String,

    /// Base URL for media upload.
    #[builder(default = default_upload_url(), setter(into))]
    #[serde(default = "default_upload_url")]
    upload_url: String,

    /// Per-request timeout in seconds.
    #[builder(default = 30)]
    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,
}

fn default_api_url() -> String {
    "https://api.twitter.com".to_string()
}

fn default_upload_url() -> String {
    "https://upload.twitter.com".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for XApiSettings {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            upload_url: default_upload_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
