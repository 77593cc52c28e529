//! Media attachment types.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use x_mcp_error::{ValidationError, ValidationErrorKind, XMcpResult};

const MIB: u64 = 1024 * 1024;

/// Kind of media that can be attached to a post.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    /// Still image (PNG, JPEG, WebP)
    #[display("image")]
    Image,
    /// Animated GIF
    #[display("gif")]
    Gif,
}

impl MediaType {
    /// Resolve a media type from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" | "jpg" | "jpeg" | "webp" => Some(Self::Image),
            "gif" => Some(Self::Gif),
            _ => None,
        }
    }

    /// Resolve a media type from a path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Largest file the X simple upload endpoint accepts for this type.
    ///
    /// GIFs above 5 MiB need the chunked upload flow, which is not used.
    pub fn max_bytes(&self) -> u64 {
        match self {
            Self::Image | Self::Gif => 5 * MIB,
        }
    }

    /// Value for the `media_category` upload field.
    pub fn media_category(&self) -> &'static str {
        match self {
            Self::Image => "tweet_image",
            Self::Gif => "tweet_gif",
        }
    }
}

fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => "application/octet-stream",
    }
}

/// A local media file attached to a draft segment.
///
/// Created with [`MediaReference::resolve`], which checks that the file
/// exists, has a supported extension and fits the size limit for its type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct MediaReference {
    /// Path to the file on the local filesystem
    path: PathBuf,
    /// Image or GIF
    media_type: MediaType,
    /// MIME type derived from the extension
    mime_type: String,
    /// File size at the time the reference was resolved
    size_bytes: u64,
}

impl MediaReference {
    /// Validate a path and build a reference to it.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the path is not an existing regular
    /// file, if its extension is not a supported image/GIF type, or if the
    /// file is larger than the type allows.
    pub fn resolve(path: impl AsRef<Path>) -> XMcpResult<Self> {
        let path = path.as_ref();
        let shown = path.display().to_string();

        let metadata = match std::fs::metadata(path) {
            Ok(m) if m.is_file() => m,
            _ => {
                return Err(
                    ValidationError::new(ValidationErrorKind::MediaNotFound(shown)).into(),
                );
            }
        };

        let media_type = MediaType::from_path(path).ok_or_else(|| {
            ValidationError::new(ValidationErrorKind::UnsupportedMedia(shown.clone()))
        })?;

        let size = metadata.len();
        if size > media_type.max_bytes() {
            return Err(ValidationError::new(ValidationErrorKind::MediaTooLarge {
                path: shown,
                size,
                max: media_type.max_bytes(),
            })
            .into());
        }

        tracing::debug!(path = %shown, %media_type, size, "Resolved media reference");
        Ok(Self {
            path: path.to_path_buf(),
            media_type,
            mime_type: mime_for(path).to_string(),
            size_bytes: size,
        })
    }

    /// Check that the file is still present.
    ///
    /// Called before publishing so that a file removed after the draft was
    /// created fails validation before any upload starts.
    pub fn verify(&self) -> XMcpResult<()> {
        match std::fs::metadata(&self.path) {
            Ok(m) if m.is_file() => Ok(()),
            _ => Err(ValidationError::new(ValidationErrorKind::MediaNotFound(
                self.path.display().to_string(),
            ))
            .into()),
        }
    }

    /// File name component, used as the multipart file name.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "media".to_string())
    }
}
