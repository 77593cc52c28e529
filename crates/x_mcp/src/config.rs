//! Layered configuration for the x_mcp server.
//!
//! Sources, lowest to highest precedence:
//! - Bundled defaults (include_str! from x_mcp.toml)
//! - `~/.config/x_mcp/x_mcp.toml`
//! - `./x_mcp.toml`
//! - An explicit file passed with `--config`
//!
//! Credentials are never read from these files.

use config::{Config, File, FileFormat};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument};
use typed_builder::TypedBuilder;
use x_mcp_core::PostLimits;
use x_mcp_error::{ConfigError, XMcpResult};
use x_mcp_social::XApiSettings;
use x_mcp_storage::{DraftStore, FileSystemDraftStore, MemoryDraftStore, StoreBackend};

const DEFAULT_CONFIG: &str = include_str!("../../../x_mcp.toml");

/// Complete server configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Getters, TypedBuilder)]
pub struct XMcpConfig {
    /// X API endpoints
    #[builder(default)]
    #[serde(default)]
    x_api: XApiSettings,

    /// Draft storage
    #[builder(default)]
    #[serde(default)]
    drafts: DraftSettings,

    /// Text, media and thread limits
    #[builder(default)]
    #[serde(default)]
    limits: PostLimits,

    /// Thread publishing
    #[builder(default)]
    #[serde(default)]
    publishing: PublishingSettings,
}

/// Where drafts are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, TypedBuilder)]
pub struct DraftSettings {
    /// Storage backend.
    #[builder(default)]
    #[serde(default)]
    backend: StoreBackend,

    /// Directory for the filesystem backend.
    #[builder(default = default_drafts_directory(), setter(into))]
    #[serde(default = "default_drafts_directory")]
    directory: PathBuf,
}

fn default_drafts_directory() -> PathBuf {
    PathBuf::from("drafts")
}

impl Default for DraftSettings {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            directory: default_drafts_directory(),
        }
    }
}

impl DraftSettings {
    /// Open the configured store.
    pub fn open_store(&self) -> XMcpResult<Arc<dyn DraftStore>> {
        let store: Arc<dyn DraftStore> = match self.backend {
            StoreBackend::Memory => Arc::new(MemoryDraftStore::new()),
            StoreBackend::Filesystem => Arc::new(FileSystemDraftStore::new(&self.directory)?),
        };
        info!(backend = %self.backend, "Opened draft store");
        Ok(store)
    }
}

/// Thread publishing settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, TypedBuilder)]
pub struct PublishingSettings {
    /// Pause between posts of a thread, in milliseconds.
    #[builder(default = 1000)]
    #[serde(default = "default_thread_delay_ms")]
    thread_delay_ms: u64,
}

fn default_thread_delay_ms() -> u64 {
    1000
}

impl Default for PublishingSettings {
    fn default() -> Self {
        Self {
            thread_delay_ms: default_thread_delay_ms(),
        }
    }
}

impl PublishingSettings {
    /// Delay between thread posts as a `Duration`.
    pub fn thread_delay(&self) -> Duration {
        Duration::from_millis(self.thread_delay_ms)
    }
}

impl XMcpConfig {
    /// Load configuration with precedence: explicit file > current dir >
    /// home dir > bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the explicit file is missing or any
    /// source fails to parse.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> XMcpResult<Self> {
        debug!("Loading configuration");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(config_dir) = dirs::home_dir().map(|home| home.join(".config/x_mcp/x_mcp.toml"))
        {
            builder = builder.add_source(File::from(config_dir).required(false));
        }

        builder = builder.add_source(File::with_name("x_mcp").required(false));

        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(ConfigError::new(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
                .into());
            }
            builder = builder.add_source(File::from(path));
        }

        Self::build(builder)
    }

    /// Parse configuration from TOML text layered over the bundled defaults.
    pub fn from_toml_str(toml: &str) -> XMcpResult<Self> {
        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from_str(toml, FileFormat::Toml));
        Self::build(builder)
    }

    fn build(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> XMcpResult<Self> {
        let config = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;
        Ok(config)
    }

    /// Replace the drafts directory and switch to the filesystem backend.
    pub fn with_drafts_dir(mut self, directory: impl Into<PathBuf>) -> Self {
        self.drafts = DraftSettings {
            backend: StoreBackend::Filesystem,
            directory: directory.into(),
        };
        self
    }
}
