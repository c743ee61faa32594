//! Durable session token storage
//!
//! The controller never touches storage directly; it goes through the
//! [`SessionStore`] trait so embedders can plug in whatever their platform
//! provides (browser local storage, a keychain, a config directory).
//! Two implementations ship with the crate: an in-process store for tests
//! and embedders with their own persistence, and a file-backed store for
//! processes that should survive a restart logged in.

use crate::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Storage for the single session token
///
/// The token lives under one well-known key; there is never more than one.
/// An empty or whitespace-only stored value is treated as no token at all.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Read the stored token, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read. A missing
    /// token is `Ok(None)`, not an error.
    async fn load(&self) -> Result<Option<String>>;

    /// Store a token, replacing any previous one
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    async fn save(&self, token: &str) -> Result<()>;

    /// Remove the stored token
    ///
    /// Clearing when no token is stored is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    async fn clear(&self) -> Result<()>;
}

/// Normalize a raw stored value: whitespace-only tokens count as absent
fn normalize(raw: String) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// In-process session store
///
/// Holds the token in memory only. Suitable for tests and for embedders
/// that persist sessions through their own machinery.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: Mutex<Option<String>>,
}

impl MemorySessionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a token (session restore in tests)
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        // A poisoned lock only happens if a holder panicked; the stored
        // Option is still coherent, so keep going with it.
        match self.token.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self) -> Result<Option<String>> {
        Ok(self.lock().clone().and_then(normalize))
    }

    async fn save(&self, token: &str) -> Result<()> {
        *self.lock() = Some(token.to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        *self.lock() = None;
        Ok(())
    }
}

/// File-backed session store
///
/// The token is kept in a single file named by the configured token key
/// inside a directory the embedder chooses. Reads of a missing file yield
/// `None`; clearing a missing file is a no-op.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Create a store writing `<dir>/<token_key>`
    ///
    /// The directory is created lazily on the first `save`.
    pub fn new(dir: impl AsRef<Path>, token_key: &str) -> Self {
        Self {
            path: dir.as_ref().join(token_key),
        }
    }

    /// The file the token is stored in
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self) -> Result<Option<String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => Ok(normalize(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, token).await?;
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn memory_store_round_trips() {
        let store = MemorySessionStore::new();
        assert_eq!(store.load().await.unwrap(), None);

        store.save("t1").await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some("t1".to_string()));

        store.clear().await.unwrap();
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn whitespace_token_reads_as_absent() {
        let store = MemorySessionStore::with_token("   ");
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn file_store_persists_across_instances() {
        let dir = tempdir().unwrap();
        let store = FileSessionStore::new(dir.path(), "token");

        assert_eq!(store.load().await.unwrap(), None);
        store.save("t2").await.unwrap();

        // A fresh instance over the same directory sees the token
        let reopened = FileSessionStore::new(dir.path(), "token");
        assert_eq!(reopened.load().await.unwrap(), Some("t2".to_string()));
    }

    #[tokio::test]
    async fn file_store_clear_is_idempotent() {
        let dir = tempdir().unwrap();
        let store = FileSessionStore::new(dir.path(), "token");

        // Clearing with no file present must not error
        store.clear().await.unwrap();

        store.save("t3").await.unwrap();
        store.clear().await.unwrap();
        store.clear().await.unwrap();
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn file_store_creates_parent_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("state").join("session");
        let store = FileSessionStore::new(&nested, "token");

        store.save("t4").await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some("t4".to_string()));
        assert!(store.path().starts_with(&nested));
    }
}
