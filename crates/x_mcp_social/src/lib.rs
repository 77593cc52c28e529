//! X (Twitter) API client for the x_mcp server.
//!
//! - [`Credentials`] loads the four OAuth 1.0a secrets from the environment.
//! - [`XClient`] signs and sends post and media-upload requests.
//! - [`XPlatform`] is the seam the tool handlers publish through, so tests
//!   can substitute a recording mock for the network.
//! - [`post_single`] and [`post_thread`] turn draft segments into posts,
//!   uploading each segment's media before the post that references it.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod credentials;
mod oauth;
mod platform;
mod publish;
mod settings;
mod types;

pub use client::XClient;
pub use credentials::{
    ACCESS_TOKEN_SECRET_VAR, ACCESS_TOKEN_VAR, API_KEY_VAR, API_SECRET_VAR, Credentials,
    REQUIRED_VARS,
};
pub use oauth::OAuthSigner;
pub use platform::XPlatform;
pub use publish::{ThreadOutcome, post_single, post_thread};
pub use settings::XApiSettings;
pub use types::{
    CreateTweetRequest, CreateTweetResponse, CreatedTweet, MediaId, MediaUploadResponse,
    PostedTweet, ReplySettings, TweetId, TweetMedia,
};
