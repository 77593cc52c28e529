//! HTTP client for the X API.

use crate::{
    Credentials, MediaId, OAuthSigner, PostedTweet, TweetId, XApiSettings, XPlatform,
    types::{ApiErrorBody, CreateTweetRequest, CreateTweetResponse, MediaUploadResponse},
};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, header::HeaderMap, multipart};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use x_mcp_core::MediaReference;
use x_mcp_error::{
    HttpError, ValidationError, ValidationErrorKind, XApiError, XApiErrorKind, XMcpResult,
};

const CREATE_TWEET_PATH: &str = "/2/tweets";
const MEDIA_UPLOAD_PATH: &str = "/1.1/media/upload.json";

/// Signed client for posting and uploading media.
///
/// Requests are sent once. Failures are mapped to [`XApiErrorKind`] and
/// returned to the caller without retrying.
#[derive(Debug, Clone)]
pub struct XClient {
    client: Client,
    signer: OAuthSigner,
    api_url: String,
    upload_url: String,
}

impl XClient {
    /// Create a client for the given credentials and endpoints.
    pub fn new(credentials: Credentials, settings: &XApiSettings) -> XMcpResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(*settings.timeout_secs()))
            .user_agent(format!("x_mcp/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| HttpError::new(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            signer: OAuthSigner::new(credentials),
            api_url: settings.api_url().trim_end_matches('/').to_string(),
            upload_url: settings.upload_url().trim_end_matches('/').to_string(),
        })
    }

    async fn handle_response<T: DeserializeOwned>(response: Response) -> XMcpResult<T> {
        let status = response.status();
        let retry_after = retry_after_secs(response.headers());

        let bytes = response
            .bytes()
            .await
            .map_err(|e| HttpError::new(format!("Failed to read response body: {}", e)))?;

        if status.is_success() {
            return serde_json::from_slice(&bytes).map_err(|e| {
                XApiError::new(XApiErrorKind::MalformedResponse(e.to_string())).into()
            });
        }

        let message = serde_json::from_slice::<ApiErrorBody>(&bytes)
            .ok()
            .and_then(ApiErrorBody::message)
            .unwrap_or_else(|| {
                let raw = String::from_utf8_lossy(&bytes).trim().to_string();
                if raw.is_empty() {
                    status
                        .canonical_reason()
                        .unwrap_or("Unknown error")
                        .to_string()
                } else {
                    raw
                }
            });

        warn!(status = status.as_u16(), %message, "X API request failed");

        let kind = match status {
            StatusCode::UNAUTHORIZED => XApiErrorKind::Unauthorized(message),
            StatusCode::FORBIDDEN => XApiErrorKind::Forbidden(message),
            StatusCode::TOO_MANY_REQUESTS => XApiErrorKind::RateLimited { retry_after },
            _ => XApiErrorKind::Status {
                status: status.as_u16(),
                message,
            },
        };
        Err(XApiError::new(kind).into())
    }
}

/// Seconds until the rate limit resets.
///
/// Prefers `x-rate-limit-reset` (Unix epoch seconds) and falls back to a
/// standard `retry-after` header.
fn retry_after_secs(headers: &HeaderMap) -> Option<u64> {
    let header_u64 = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok())
    };

    if let Some(reset) = header_u64("x-rate-limit-reset") {
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        return Some(reset.saturating_sub(now));
    }
    header_u64("retry-after")
}

#[async_trait]
impl XPlatform for XClient {
    #[instrument(skip(self, media), fields(path = %media.path().display(), media_type = %media.media_type()))]
    async fn upload_media(&self, media: &MediaReference) -> XMcpResult<MediaId> {
        let bytes = tokio::fs::read(media.path()).await.map_err(|e| {
            let path = media.path().display().to_string();
            let kind = if e.kind() == std::io::ErrorKind::NotFound {
                ValidationErrorKind::MediaNotFound(path)
            } else {
                ValidationErrorKind::MediaUnreadable(format!("{}: {}", path, e))
            };
            ValidationError::new(kind)
        })?;

        let part = multipart::Part::bytes(bytes)
            .file_name(media.file_name())
            .mime_str(media.mime_type())
            .map_err(|e| HttpError::new(format!("Invalid MIME type: {}", e)))?;
        let form = multipart::Form::new()
            .part("media", part)
            .text("media_category", media.media_type().media_category());

        let url = format!("{}{}", self.upload_url, MEDIA_UPLOAD_PATH);
        // Multipart fields are not part of the signature base string.
        let auth_header = self.signer.sign("POST", &url, &[])?;

        debug!(url = %url, "Uploading media");
        let response = self
            .client
            .post(&url)
            .header("Authorization", auth_header)
            .multipart(form)
            .send()
            .await
            .map_err(|e| HttpError::new(format!("Media upload request failed: {}", e)))?;

        let uploaded: MediaUploadResponse = Self::handle_response(response).await?;
        debug!(media_id = %uploaded.media_id_string, "Media uploaded");
        Ok(MediaId::new(uploaded.media_id_string))
    }

    #[instrument(skip(self, text, media_ids), fields(reply_to = ?reply_to.map(TweetId::as_str), media = media_ids.len()))]
    async fn create_post(
        &self,
        text: &str,
        reply_to: Option<&TweetId>,
        media_ids: &[MediaId],
    ) -> XMcpResult<PostedTweet> {
        let url = format!("{}{}", self.api_url, CREATE_TWEET_PATH);
        // JSON bodies are not signed either.
        let auth_header = self.signer.sign("POST", &url, &[])?;
        let body = CreateTweetRequest::new(text, reply_to, media_ids);

        debug!(url = %url, "Creating post");
        let response = self
            .client
            .post(&url)
            .header("Authorization", auth_header)
            .json(&body)
            .send()
            .await
            .map_err(|e| HttpError::new(format!("Create post request failed: {}", e)))?;

        let created: CreateTweetResponse = Self::handle_response(response).await?;
        debug!(tweet_id = %created.data.id, "Post created");
        Ok(created.data.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_retry_after_prefers_reset_header() {
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_secs();
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-rate-limit-reset",
            HeaderValue::from_str(&(now + 120).to_string()).unwrap(),
        );
        headers.insert("retry-after", HeaderValue::from_static("5"));

        let secs = retry_after_secs(&headers).unwrap();
        assert!((118..=120).contains(&secs));
    }

    #[test]
    fn test_retry_after_fallbacks() {
        let mut headers = HeaderMap::new();
        assert_eq!(retry_after_secs(&headers), None);

        headers.insert("retry-after", HeaderValue::from_static("42"));
        assert_eq!(retry_after_secs(&headers), Some(42));

        headers.insert("x-rate-limit-reset", HeaderValue::from_static("1"));
        assert_eq!(retry_after_secs(&headers), Some(0));
    }
}
