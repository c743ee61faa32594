//! Shared test helpers for creating ArticleController instances in tests.

use crate::config::Config;
use crate::controller::ArticleController;
use crate::navigator::Navigator;
use crate::session_store::MemorySessionStore;
use crate::types::View;
use std::sync::{Arc, Mutex};
use url::Url;
use wiremock::MockServer;

/// Navigator that records every directive for later assertions.
#[derive(Debug, Default)]
pub(crate) struct RecordingNavigator {
    views: Mutex<Vec<View>>,
}

impl RecordingNavigator {
    /// All directives issued so far, in order
    pub(crate) fn views(&self) -> Vec<View> {
        self.views.lock().unwrap().clone()
    }

    /// The most recent directive, if any
    pub(crate) fn last_view(&self) -> Option<View> {
        self.views.lock().unwrap().last().copied()
    }
}

impl Navigator for RecordingNavigator {
    fn show_login(&self) {
        self.views.lock().unwrap().push(View::Login);
    }

    fn show_articles(&self) {
        self.views.lock().unwrap().push(View::Articles);
    }
}

/// A controller wired to a mock server plus handles to its collaborators.
pub(crate) struct TestContext {
    pub(crate) controller: ArticleController,
    pub(crate) store: Arc<MemorySessionStore>,
    pub(crate) navigator: Arc<RecordingNavigator>,
}

/// Build a controller pointed at `server`, optionally with a stored token.
pub(crate) async fn create_test_controller(
    server: &MockServer,
    token: Option<&str>,
) -> TestContext {
    let mut config = Config::default();
    config.service.base_url = Url::parse(&server.uri()).unwrap();

    let store = Arc::new(match token {
        Some(token) => MemorySessionStore::with_token(token),
        None => MemorySessionStore::new(),
    });
    let navigator = Arc::new(RecordingNavigator::default());

    let controller = ArticleController::new(config, store.clone(), navigator.clone())
        .await
        .unwrap();

    TestContext {
        controller,
        store,
        navigator,
    }
}

/// JSON for one article in the service's wire shape.
pub(crate) fn article_json(id: i64, title: &str, topic: &str) -> serde_json::Value {
    serde_json::json!({
        "article_id": id,
        "title": title,
        "text": format!("{title} body"),
        "topic": topic,
    })
}
