//! Article synchronization: fetch/create/update/delete and the local
//! collection mutation rules.
//!
//! Every operation here follows the same skeleton: validate locally,
//! require a token, raise busy, issue exactly one request, and apply the
//! outcome to the *current* collection inside the completion. Unauthorized
//! responses invalidate the session regardless of which operation drew
//! them.

use super::{
    ArticleController, DRAFT_VALIDATION_MESSAGE, GENERIC_FAILURE_MESSAGE,
    UPDATE_VALIDATION_MESSAGE,
};
use crate::error::{Error, Result};
use crate::types::{Article, ArticleDraft, ArticleId, Topic};

impl ArticleController {
    /// Fetch the article list and replace the local collection with it
    ///
    /// Success replaces the collection wholesale, in server order.
    /// An unauthorized response clears the token and redirects to login;
    /// any other failure leaves both collection and session unchanged.
    ///
    /// # Errors
    ///
    /// [`Error::MissingSession`] when no token is stored (no request is
    /// issued), or the classified request failure.
    pub async fn fetch_articles(&self) -> Result<Vec<Article>> {
        if self.teardown.is_cancelled() {
            return Err(Error::Cancelled);
        }

        let token = match self.require_token().await {
            Ok(token) => token,
            Err(err) => {
                self.status.finish(err.user_message(GENERIC_FAILURE_MESSAGE));
                return Err(err);
            }
        };

        self.status.begin();
        let outcome = self.api.fetch_articles(&token).await;
        if self.teardown.is_cancelled() {
            return Err(Error::Cancelled);
        }

        match outcome {
            Ok(response) => {
                {
                    let mut articles = self.articles.write().await;
                    *articles = response.articles.clone();
                }
                self.status.finish(response.message);
                tracing::debug!(count = response.articles.len(), "article list replaced");
                Ok(response.articles)
            }
            Err(err) => Err(self.fail_authenticated(err).await),
        }
    }

    /// Create an article from a draft and append the result locally
    ///
    /// The draft's trimmed title and text must be non-empty; violations
    /// are rejected locally with no request issued. Success appends the
    /// server-returned article, preserving existing order.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`], [`Error::MissingSession`], or the classified
    /// request failure.
    pub async fn create_article(&self, draft: ArticleDraft) -> Result<Article> {
        if self.teardown.is_cancelled() {
            return Err(Error::Cancelled);
        }

        if draft.title.trim().is_empty() || draft.text.trim().is_empty() {
            tracing::debug!("create rejected by local validation");
            self.status.finish(DRAFT_VALIDATION_MESSAGE);
            return Err(Error::Validation(DRAFT_VALIDATION_MESSAGE.to_string()));
        }

        let token = match self.require_token().await {
            Ok(token) => token,
            Err(err) => {
                self.status.finish(err.user_message(GENERIC_FAILURE_MESSAGE));
                return Err(err);
            }
        };

        self.status.begin();
        let outcome = self.api.create_article(&token, &draft).await;
        if self.teardown.is_cancelled() {
            return Err(Error::Cancelled);
        }

        match outcome {
            Ok(response) => {
                {
                    let mut articles = self.articles.write().await;
                    articles.push(response.article.clone());
                }
                self.status.finish(response.message);
                tracing::info!(article_id = %response.article.id, "article created");
                Ok(response.article)
            }
            Err(err) => Err(self.fail_authenticated(err).await),
        }
    }

    /// Replace the article at `id` with a draft
    ///
    /// The draft's trimmed title and text must be non-empty and its topic
    /// must be one [`Topic`] accepts; violations are rejected locally with
    /// no request issued. Success replaces the matching local entry in
    /// place, preserving its position, and clears the editing selection if
    /// it pointed at `id`.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`], [`Error::MissingSession`], or the classified
    /// request failure.
    pub async fn update_article(&self, id: ArticleId, draft: ArticleDraft) -> Result<Article> {
        if self.teardown.is_cancelled() {
            return Err(Error::Cancelled);
        }

        let topic_ok = draft.topic.parse::<Topic>().is_ok();
        if draft.title.trim().is_empty() || draft.text.trim().is_empty() || !topic_ok {
            tracing::debug!(article_id = %id, "update rejected by local validation");
            self.status.finish(UPDATE_VALIDATION_MESSAGE);
            return Err(Error::Validation(UPDATE_VALIDATION_MESSAGE.to_string()));
        }

        let token = match self.require_token().await {
            Ok(token) => token,
            Err(err) => {
                self.status.finish(err.user_message(GENERIC_FAILURE_MESSAGE));
                return Err(err);
            }
        };

        self.status.begin();
        let outcome = self.api.update_article(&token, id, &draft).await;
        if self.teardown.is_cancelled() {
            return Err(Error::Cancelled);
        }

        match outcome {
            Ok(response) => {
                {
                    let mut articles = self.articles.write().await;
                    if let Some(entry) = articles.iter_mut().find(|a| a.id == id) {
                        *entry = response.article.clone();
                    } else {
                        // Server knows an article the local mirror has not
                        // fetched yet; leave the collection alone
                        tracing::debug!(article_id = %id, "updated article not in local collection");
                    }
                }
                let mut selected = self.selected_lock();
                if *selected == Some(id) {
                    *selected = None;
                }
                drop(selected);
                self.status.finish(response.message);
                tracing::info!(article_id = %id, "article updated");
                Ok(response.article)
            }
            Err(err) => Err(self.fail_authenticated(err).await),
        }
    }

    /// Delete the article at `id` and remove it locally
    ///
    /// Success removes exactly the matching entry without reordering the
    /// remainder, and clears the editing selection if it pointed at `id`.
    ///
    /// # Errors
    ///
    /// [`Error::MissingSession`] when no token is stored (no request is
    /// issued), or the classified request failure.
    pub async fn delete_article(&self, id: ArticleId) -> Result<()> {
        if self.teardown.is_cancelled() {
            return Err(Error::Cancelled);
        }

        let token = match self.require_token().await {
            Ok(token) => token,
            Err(err) => {
                self.status.finish(err.user_message(GENERIC_FAILURE_MESSAGE));
                return Err(err);
            }
        };

        self.status.begin();
        let outcome = self.api.delete_article(&token, id).await;
        if self.teardown.is_cancelled() {
            return Err(Error::Cancelled);
        }

        match outcome {
            Ok(response) => {
                {
                    let mut articles = self.articles.write().await;
                    articles.retain(|a| a.id != id);
                }
                let mut selected = self.selected_lock();
                if *selected == Some(id) {
                    *selected = None;
                }
                drop(selected);
                self.status.finish(response.message);
                tracing::info!(article_id = %id, "article deleted");
                Ok(())
            }
            Err(err) => Err(self.fail_authenticated(err).await),
        }
    }
}
