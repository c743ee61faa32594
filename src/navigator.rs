//! Navigation directives issued by the controller
//!
//! The controller only ever tells the UI which screen to show; it never
//! reads view state back. Implement [`Navigator`] over whatever routing
//! the embedding application uses.

/// Capability to switch the active view between login and articles
pub trait Navigator: Send + Sync {
    /// Direct the UI to the login screen
    fn show_login(&self);

    /// Direct the UI to the articles screen
    fn show_articles(&self);
}

/// Navigator that ignores all directives
///
/// Used when embedding the controller headless (scripts, tests, services
/// with no screen to switch).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpNavigator;

impl Navigator for NoOpNavigator {
    fn show_login(&self) {}

    fn show_articles(&self) {}
}
