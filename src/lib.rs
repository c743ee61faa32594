//! # article-sync
//!
//! Session-aware synchronization controller for a remote article service.
//!
//! ## Design Philosophy
//!
//! article-sync is designed to be:
//! - **Library-first** - No CLI or UI, purely a Rust crate for embedding
//! - **Collaborator-driven** - Storage and navigation are injected traits,
//!   so the controller runs headless and tests without a real platform
//! - **Observable** - One status cell with overwrite semantics; consumers
//!   read it synchronously or subscribe, no polling loop required
//!
//! The controller authenticates against the service, holds the session
//! token, and keeps a local article collection synchronized through
//! create/read/update/delete calls. Authorization failures invalidate the
//! session and redirect to login; every operation leaves the busy flag
//! false no matter how it exits.
//!
//! ## Quick Start
//!
//! ```no_run
//! use article_sync::{
//!     ArticleController, ArticleDraft, Config, Credentials, MemorySessionStore, NoOpNavigator,
//! };
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let controller = ArticleController::new(
//!         Config::default(),
//!         Arc::new(MemorySessionStore::new()),
//!         Arc::new(NoOpNavigator),
//!     )
//!     .await?;
//!
//!     controller
//!         .login(Credentials::new("username", "long-enough-password"))
//!         .await?;
//!
//!     controller.fetch_articles().await?;
//!     controller
//!         .create_article(ArticleDraft::new("Hello", "First article", "React"))
//!         .await?;
//!
//!     println!("{} articles", controller.articles().await.len());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Wire client for the remote article service
pub mod api;
/// Configuration types
pub mod config;
/// Session-and-synchronization controller
pub mod controller;
/// Error types
pub mod error;
/// Navigation directives
pub mod navigator;
/// Durable session token storage
pub mod session_store;
/// Request status channel
pub mod status;
/// Core types
pub mod types;

// Re-export commonly used types
pub use api::{ApiClient, ArticleListResponse, ArticleResponse, LoginResponse, MessageResponse};
pub use config::{Config, ServiceConfig, SessionConfig, ValidationConfig};
pub use controller::{ArticleController, GOODBYE_MESSAGE, NO_TOKEN_MESSAGE};
pub use error::{Error, Result};
pub use navigator::{Navigator, NoOpNavigator};
pub use session_store::{FileSessionStore, MemorySessionStore, SessionStore};
pub use status::StatusChannel;
pub use types::{
    Article, ArticleDraft, ArticleId, Credentials, RequestStatus, SessionPhase, Topic, View,
};
