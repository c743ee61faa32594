//! Core types for article-sync

use serde::{Deserialize, Serialize};

/// Unique identifier for an article
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ArticleId(pub i64);

impl ArticleId {
    /// Create a new ArticleId
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    pub fn get(&self) -> i64 {
        self.0
    }
}

impl From<i64> for ArticleId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<ArticleId> for i64 {
    fn from(id: ArticleId) -> Self {
        id.0
    }
}

impl PartialEq<i64> for ArticleId {
    fn eq(&self, other: &i64) -> bool {
        self.0 == *other
    }
}

impl PartialEq<ArticleId> for i64 {
    fn eq(&self, other: &ArticleId) -> bool {
        *self == other.0
    }
}

impl std::fmt::Display for ArticleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ArticleId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}

/// Topic an article is filed under
///
/// The variant names are the exact strings the remote service accepts and
/// returns; serde serializes them verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Topic {
    /// React articles
    React,
    /// JavaScript articles
    JavaScript,
    /// Node articles
    Node,
}

impl Topic {
    /// All topics the remote service accepts
    pub const ALL: [Topic; 3] = [Topic::React, Topic::JavaScript, Topic::Node];

    /// The wire string for this topic
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::React => "React",
            Topic::JavaScript => "JavaScript",
            Topic::Node => "Node",
        }
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Topic {
    type Err = UnknownTopic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "React" => Ok(Topic::React),
            "JavaScript" => Ok(Topic::JavaScript),
            "Node" => Ok(Topic::Node),
            other => Err(UnknownTopic(other.to_string())),
        }
    }
}

/// Error returned when parsing a topic string the service does not accept
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTopic(pub String);

impl std::fmt::Display for UnknownTopic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown topic: {}", self.0)
    }
}

impl std::error::Error for UnknownTopic {}

/// An article as stored on the remote service and mirrored locally
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Server-assigned identifier (wire name `article_id`)
    #[serde(rename = "article_id")]
    pub id: ArticleId,
    /// Article title
    pub title: String,
    /// Article body text
    pub text: String,
    /// Topic the article is filed under
    pub topic: Topic,
}

/// User-supplied article fields prior to persistence
///
/// `topic` stays a free-form string so invalid input is representable;
/// validation rejects anything [`Topic`] cannot parse.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleDraft {
    /// Draft title
    pub title: String,
    /// Draft body text
    pub text: String,
    /// Draft topic as entered (validated against [`Topic`])
    pub topic: String,
}

impl ArticleDraft {
    /// Create a draft from its three fields
    pub fn new(
        title: impl Into<String>,
        text: impl Into<String>,
        topic: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            topic: topic.into(),
        }
    }
}

/// Login credentials as entered by the user
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Account username
    pub username: String,
    /// Account password
    pub password: String,
}

impl Credentials {
    /// Create credentials from username and password
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Authentication state of the controller
///
/// Transitions: `Anonymous` → `Authenticating` on a login attempt,
/// `Authenticating` → `Authenticated` on success or back to `Anonymous` on
/// failure, and `Authenticated` → `Anonymous` on logout or on any
/// unauthorized response. The machine is cyclic for the life of the process.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// No session; only login is possible
    #[default]
    Anonymous,
    /// A login request is in flight
    Authenticating,
    /// A session token is held
    Authenticated,
}

impl std::fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SessionPhase::Anonymous => "anonymous",
            SessionPhase::Authenticating => "authenticating",
            SessionPhase::Authenticated => "authenticated",
        };
        f.write_str(s)
    }
}

/// The single process-wide request status observed by the UI layer
///
/// Overwrite semantics: every operation replaces the previous value, no
/// history is kept. `busy` is true exactly while a request is in flight.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestStatus {
    /// Whether a request is currently in flight
    pub busy: bool,
    /// Latest human-readable outcome text (empty while a request runs)
    pub message: String,
}

/// Navigation target the controller can direct the UI toward
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    /// The login screen
    Login,
    /// The articles screen
    Articles,
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            View::Login => "login",
            View::Articles => "articles",
        };
        f.write_str(s)
    }
}
