//! Model Context Protocol (MCP) server for X (Twitter) drafts.
//!
//! Exposes four tools to a chat assistant:
//!
//! - `create_draft`: validate and store a post or thread
//! - `list_drafts`: show every stored draft
//! - `publish_draft`: post a draft through the X API and remove it
//! - `delete_draft`: discard a draft
//!
//! The server speaks MCP over stdio through `rmcp`. Tool failures come back
//! as results with `isError` set and a `{"error": {"kind", "message"}}` body.
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use x_mcp::{ToolContext, XMcpConfig, XMcpServer};
//! use x_mcp_social::{Credentials, XClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = XMcpConfig::load(None)?;
//!     let client = XClient::new(Credentials::from_env()?, config.x_api())?;
//!
//!     let context = ToolContext::builder()
//!         .store(config.drafts().open_store()?)
//!         .platform(Arc::new(client))
//!         .limits(*config.limits())
//!         .thread_delay(config.publishing().thread_delay())
//!         .build();
//!
//!     XMcpServer::new(context).run_stdio().await
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod server;
pub mod tools;

pub use config::{DraftSettings, PublishingSettings, XMcpConfig};
pub use server::XMcpServer;
pub use tools::{CreateDraftParams, DraftIdParams, ThreadPost, ToolContext, ToolError, ToolResult};
