//! The external match capability.
//!
//! A match source answers "does this media condition currently hold?" and
//! notifies subscribed listeners when the answer changes. The browser's
//! media-query list is one such source; [`crate::viewport::ViewportSource`]
//! is the built-in one. Environments without any source simply never bind,
//! and the matcher stays on its fallback value.

/// Callback invoked with the new match state.
pub type Listener = std::sync::Arc<dyn Fn(bool) + Send + Sync>;

/// A capability that evaluates media conditions and reports changes.
pub trait MatchSource: Send + Sync {
    /// Whether the query currently matches.
    fn matches(&self, query: &str) -> bool;

    /// Register a listener for changes to the query's match state.
    ///
    /// The listener must stop firing once the returned handle is released.
    fn subscribe(&self, query: &str, listener: Listener) -> Subscription;
}

/// A held listener registration, released on drop.
///
/// Subscription lifetime is exactly the component's mounted lifetime for a
/// given breakpoint: replace-on-rebind and drop-on-unmount both funnel
/// through this handle.
pub struct Subscription {
    release: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    /// Wrap a release action to run when the handle is dropped.
    pub fn new(release: impl FnOnce() + Send + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A handle with nothing to release, for sources without change
    /// notification.
    pub fn detached() -> Self {
        Self { release: None }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            log::trace!("releasing match-source subscription");
            release();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("held", &self.release.is_some())
            .finish()
    }
}
