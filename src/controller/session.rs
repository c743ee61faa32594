//! Login, logout, and the session phase transitions around them.

use super::{ArticleController, GOODBYE_MESSAGE, LOGIN_FAILURE_MESSAGE};
use crate::error::{Error, Result};
use crate::types::{Credentials, SessionPhase};

impl ArticleController {
    /// Authenticate against the article service
    ///
    /// Trims both fields and rejects them locally against the configured
    /// thresholds before any request is issued. On success the token is
    /// persisted, the phase becomes authenticated, and the navigator is
    /// directed to the articles screen. On failure the phase drops back
    /// to anonymous and no token is stored.
    ///
    /// The busy flag is raised strictly before the request starts and
    /// cleared exactly once on every exit path.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] for rejected credentials (no request issued),
    /// [`Error::Server`] / [`Error::Transport`] for failed attempts,
    /// [`Error::Storage`] if the token cannot be persisted, or
    /// [`Error::Cancelled`] if the controller was shut down mid-flight.
    pub async fn login(&self, credentials: Credentials) -> Result<()> {
        if self.teardown.is_cancelled() {
            return Err(Error::Cancelled);
        }

        let username = credentials.username.trim();
        let password = credentials.password.trim();

        let validation = &self.config.validation;
        if username.chars().count() < validation.min_username_len
            || password.chars().count() < validation.min_password_len
        {
            let message = format!(
                "Username must be at least {} characters and password at least {} characters.",
                validation.min_username_len, validation.min_password_len
            );
            tracing::debug!("login rejected by local validation");
            self.status.finish(message.clone());
            return Err(Error::Validation(message));
        }

        self.set_phase(SessionPhase::Authenticating);
        self.status.begin();

        let outcome = self.api.login(username, password).await;
        if self.teardown.is_cancelled() {
            return Err(Error::Cancelled);
        }

        match outcome {
            Ok(response) => {
                if let Err(err) = self.store.save(&response.token).await {
                    // Token unusable if it cannot be persisted; treat as a failed login
                    tracing::error!(error = %err, "failed to persist session token");
                    self.set_phase(SessionPhase::Anonymous);
                    self.status.finish(LOGIN_FAILURE_MESSAGE);
                    return Err(err);
                }
                self.set_phase(SessionPhase::Authenticated);
                self.status.finish(response.message);
                self.navigator.show_articles();
                tracing::info!(username, "login succeeded");
                Ok(())
            }
            Err(err) => {
                self.set_phase(SessionPhase::Anonymous);
                self.status.finish(err.user_message(LOGIN_FAILURE_MESSAGE));
                tracing::debug!(error = %err, "login failed");
                Err(err)
            }
        }
    }

    /// End the session
    ///
    /// Unconditional: the stored token is cleared whether or not one was
    /// present, the status message becomes "Goodbye!", the phase drops to
    /// anonymous, and the navigator is directed to the login screen.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Storage`] if the store could not be cleared; the
    /// phase transition, message, and redirect happen regardless.
    pub async fn logout(&self) -> Result<()> {
        let cleared = self.store.clear().await;
        if let Err(err) = &cleared {
            tracing::warn!(error = %err, "failed to clear session store on logout");
        }

        self.set_phase(SessionPhase::Anonymous);
        self.status.finish(GOODBYE_MESSAGE);
        self.navigator.show_login();
        tracing::info!("logged out");
        cleared
    }
}
