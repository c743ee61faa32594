//! Wire client for the remote article service
//!
//! One method per endpoint, exact request and response shapes, and shared
//! response classification into the crate's error taxonomy. The client
//! issues exactly one outbound request per call and does no retrying;
//! what to do with an outcome is the controller's decision.

use crate::config::ServiceConfig;
use crate::error::{Error, Result};
use crate::types::{Article, ArticleDraft, ArticleId};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use url::Url;

/// Successful authentication response
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    /// Session token to present on authenticated calls
    pub token: String,
    /// Server-provided welcome message
    pub message: String,
}

/// Successful article-list response
#[derive(Clone, Debug, Deserialize)]
pub struct ArticleListResponse {
    /// Full server-side article list, in server order
    pub articles: Vec<Article>,
    /// Server-provided outcome message
    pub message: String,
}

/// Successful create/update response carrying the persisted article
#[derive(Clone, Debug, Deserialize)]
pub struct ArticleResponse {
    /// The article as the server persisted it
    pub article: Article,
    /// Server-provided outcome message
    pub message: String,
}

/// Successful response carrying only an outcome message
#[derive(Clone, Debug, Deserialize)]
pub struct MessageResponse {
    /// Server-provided outcome message
    pub message: String,
}

/// Failure body shape shared by all endpoints
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// HTTP client for the article service
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Build a client from service configuration
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the underlying HTTP client cannot be
    /// constructed, or [`Error::Config`] if the base URL cannot have
    /// endpoint paths joined onto it.
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        if config.base_url.cannot_be_a_base() {
            return Err(Error::config(
                "service.base_url",
                format!("URL cannot serve as a base: {}", config.base_url),
            ));
        }
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Join endpoint path segments onto the base URL
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        {
            // new() verified the URL can be a base, so path segments exist
            #[allow(clippy::expect_used)]
            let mut path = url.path_segments_mut().expect("base URL validated");
            // A trailing slash on the base leaves an empty segment behind
            path.pop_if_empty();
            for segment in segments {
                path.push(segment);
            }
        }
        url
    }

    /// Authenticate, exchanging credentials for a session token
    ///
    /// `POST /api/login` with a JSON `{username, password}` body.
    ///
    /// # Errors
    ///
    /// [`Error::Server`] on non-2xx, [`Error::Transport`] if the call
    /// could not complete or the success body was malformed.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        let url = self.endpoint(&["api", "login"]);
        tracing::debug!(%url, "issuing login request");
        let response = self
            .client
            .post(url)
            .json(&LoginRequest { username, password })
            .send()
            .await?;
        classify(response).await
    }

    /// Fetch the full article list
    ///
    /// `GET /api/articles` with the token in the `Authorization` header.
    ///
    /// # Errors
    ///
    /// [`Error::Unauthorized`] on 401, [`Error::Server`] on any other
    /// non-2xx, [`Error::Transport`] on connectivity or body failures.
    pub async fn fetch_articles(&self, token: &str) -> Result<ArticleListResponse> {
        let url = self.endpoint(&["api", "articles"]);
        tracing::debug!(%url, "issuing article list request");
        let response = self
            .client
            .get(url)
            .header("Authorization", token)
            .send()
            .await?;
        classify(response).await
    }

    /// Create an article from a draft
    ///
    /// `POST /api/articles` with the draft as the JSON body.
    ///
    /// # Errors
    ///
    /// Same classification as [`fetch_articles`](Self::fetch_articles).
    pub async fn create_article(
        &self,
        token: &str,
        draft: &ArticleDraft,
    ) -> Result<ArticleResponse> {
        let url = self.endpoint(&["api", "articles"]);
        tracing::debug!(%url, "issuing article create request");
        let response = self
            .client
            .post(url)
            .header("Authorization", token)
            .json(draft)
            .send()
            .await?;
        classify(response).await
    }

    /// Replace the article at `id` with a draft
    ///
    /// `PUT /api/articles/{id}` with the draft as the JSON body.
    ///
    /// # Errors
    ///
    /// Same classification as [`fetch_articles`](Self::fetch_articles).
    pub async fn update_article(
        &self,
        token: &str,
        id: ArticleId,
        draft: &ArticleDraft,
    ) -> Result<ArticleResponse> {
        let url = self.endpoint(&["api", "articles", &id.to_string()]);
        tracing::debug!(%url, article_id = %id, "issuing article update request");
        let response = self
            .client
            .put(url)
            .header("Authorization", token)
            .json(draft)
            .send()
            .await?;
        classify(response).await
    }

    /// Delete the article at `id`
    ///
    /// `DELETE /api/articles/{id}`.
    ///
    /// # Errors
    ///
    /// Same classification as [`fetch_articles`](Self::fetch_articles).
    pub async fn delete_article(&self, token: &str, id: ArticleId) -> Result<MessageResponse> {
        let url = self.endpoint(&["api", "articles", &id.to_string()]);
        tracing::debug!(%url, article_id = %id, "issuing article delete request");
        let response = self
            .client
            .delete(url)
            .header("Authorization", token)
            .send()
            .await?;
        classify(response).await
    }
}

/// Classify a response: 2xx deserializes, 401 invalidates, the rest is a
/// server error carrying the body's `{message}` when one can be parsed
async fn classify<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message);

    if status == StatusCode::UNAUTHORIZED {
        Err(Error::Unauthorized { message })
    } else {
        Err(Error::Server {
            status: status.as_u16(),
            message,
        })
    }
}
