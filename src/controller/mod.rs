//! Session-and-synchronization controller split into focused submodules.
//!
//! The `ArticleController` struct and its methods are organized by domain:
//! - [`session`] - Login, logout, and session invalidation
//! - [`articles`] - Article fetch/create/update/delete and local mutations
//!
//! Everything the UI layer triggers enters through one of these two
//! domains; each operation reads and writes the status channel, touches
//! the session store when it must, and issues at most one outbound
//! request per invocation.

mod articles;
mod session;

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
pub(crate) mod test_helpers;
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests;

use crate::api::ApiClient;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::navigator::Navigator;
use crate::session_store::SessionStore;
use crate::status::StatusChannel;
use crate::types::{Article, ArticleId, RequestStatus, SessionPhase};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Fixed farewell message set by `logout`
pub const GOODBYE_MESSAGE: &str = "Goodbye!";

/// Message surfaced when an authenticated operation finds no stored token
pub const NO_TOKEN_MESSAGE: &str = "No token, try again";

/// Fallback message for failures with no server-provided text
pub(crate) const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong, try again";

/// Fallback message for failed logins with no server-provided text
pub(crate) const LOGIN_FAILURE_MESSAGE: &str = "Login failed, try again";

/// Validation message for drafts with an empty title or text
pub(crate) const DRAFT_VALIDATION_MESSAGE: &str =
    "Title and text must contain at least one character.";

/// Validation message for updates with a bad title, text, or topic
pub(crate) const UPDATE_VALIDATION_MESSAGE: &str =
    "Validation error: Check title, text, and topic.";

/// Controller that authenticates against the article service and keeps a
/// local article collection synchronized with it
///
/// Cloneable; all clones share the same state. Collection mutations are
/// applied to the current collection inside each call's completion, never
/// to a snapshot captured at call time, so independent in-flight
/// operations cannot clobber each other's results.
#[derive(Clone)]
pub struct ArticleController {
    /// Wire client for the article service
    pub(crate) api: ApiClient,
    /// Durable session token storage (sole writer: the session domain)
    pub(crate) store: Arc<dyn SessionStore>,
    /// Navigation directives sink
    pub(crate) navigator: Arc<dyn Navigator>,
    /// The single process-wide `{busy, message}` cell
    pub(crate) status: StatusChannel,
    /// Local mirror of the server-side article collection, in server order
    pub(crate) articles: Arc<tokio::sync::RwLock<Vec<Article>>>,
    /// Current authentication phase
    pub(crate) phase: Arc<std::sync::RwLock<SessionPhase>>,
    /// Article currently selected for editing, if any
    pub(crate) selected: Arc<std::sync::Mutex<Option<ArticleId>>>,
    /// Cancelled on shutdown; in-flight completions then become no-ops
    pub(crate) teardown: CancellationToken,
    /// Validated configuration
    pub(crate) config: Arc<Config>,
}

impl ArticleController {
    /// Create a controller, restoring any persisted session
    ///
    /// Reads the session store once: a stored token seeds the phase as
    /// [`SessionPhase::Authenticated`], otherwise the controller starts
    /// [`SessionPhase::Anonymous`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for invalid configuration,
    /// [`Error::Transport`] if the HTTP client cannot be built, or
    /// [`Error::Storage`] if the session store cannot be read.
    pub async fn new(
        config: Config,
        store: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self> {
        config.validate()?;
        let api = ApiClient::new(&config.service)?;

        let restored = store.load().await?;
        let phase = if restored.is_some() {
            tracing::info!("session restored from store");
            SessionPhase::Authenticated
        } else {
            SessionPhase::Anonymous
        };

        Ok(Self {
            api,
            store,
            navigator,
            status: StatusChannel::new(),
            articles: Arc::new(tokio::sync::RwLock::new(Vec::new())),
            phase: Arc::new(std::sync::RwLock::new(phase)),
            selected: Arc::new(std::sync::Mutex::new(None)),
            teardown: CancellationToken::new(),
            config: Arc::new(config),
        })
    }

    /// Tear the controller down
    ///
    /// Any operation whose request is still in flight completes as a
    /// no-op: no state is mutated and the call returns
    /// [`Error::Cancelled`]. That includes the status cell: it is frozen
    /// as-is, so an operation caught mid-flight leaves `busy` raised
    /// forever. Do not wait on `busy` going false after teardown.
    pub fn shutdown(&self) {
        tracing::debug!("controller shutdown requested");
        self.teardown.cancel();
    }

    /// Snapshot of the local article collection, in collection order
    pub async fn articles(&self) -> Vec<Article> {
        self.articles.read().await.clone()
    }

    /// Current authentication phase
    pub fn phase(&self) -> SessionPhase {
        match self.phase.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    /// Current request status
    pub fn status(&self) -> RequestStatus {
        self.status.current()
    }

    /// Subscribe to request status changes (latest value, overwrite semantics)
    pub fn subscribe_status(&self) -> tokio::sync::watch::Receiver<RequestStatus> {
        self.status.subscribe()
    }

    /// Mark an article as selected for editing, or clear the selection
    pub fn select_article(&self, id: Option<ArticleId>) {
        *self.selected_lock() = id;
    }

    /// The article currently selected for editing, if any
    pub fn selected_article(&self) -> Option<ArticleId> {
        *self.selected_lock()
    }

    pub(crate) fn set_phase(&self, phase: SessionPhase) {
        let mut guard = match self.phase.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = phase;
    }

    pub(crate) fn selected_lock(&self) -> std::sync::MutexGuard<'_, Option<ArticleId>> {
        match self.selected.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// The stored token, or [`Error::MissingSession`] when there is none
    pub(crate) async fn require_token(&self) -> Result<String> {
        match self.store.load().await? {
            Some(token) => Ok(token),
            None => Err(Error::MissingSession),
        }
    }

    /// Shared failure path for authenticated operations
    ///
    /// An unauthorized response invalidates the session: the token is
    /// cleared, the phase drops to anonymous, and the navigator is
    /// directed to the login screen. Every other failure only surfaces a
    /// message. Returns the error unchanged for the caller to propagate.
    pub(crate) async fn fail_authenticated(&self, err: Error) -> Error {
        if err.is_unauthorized() {
            if let Err(clear_err) = self.store.clear().await {
                tracing::warn!(error = %clear_err, "failed to clear token after 401");
            }
            self.set_phase(SessionPhase::Anonymous);
            self.status.finish(err.user_message(GENERIC_FAILURE_MESSAGE));
            self.navigator.show_login();
            tracing::warn!("session invalidated by unauthorized response");
        } else {
            self.status.finish(err.user_message(GENERIC_FAILURE_MESSAGE));
        }
        err
    }
}
