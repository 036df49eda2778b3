//! Breakpoint matching: one subscription, one boolean.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::breakpoint::Breakpoint;
use crate::source::{Listener, MatchSource, Subscription};

/// Tracks whether the current viewport is narrow for a breakpoint.
///
/// Unbound, the flag is a constant fallback supplied by the caller; bound to
/// a [`MatchSource`], it is evaluated synchronously on every (re)subscribe
/// and updated by change notifications. "Matches" is wide, "does not match"
/// is narrow.
///
/// Exactly one subscription is held at a time: rebinding or changing the
/// breakpoint releases the old one before acquiring the new, and dropping
/// the matcher releases the last.
pub struct BreakpointMatcher {
    breakpoint: Breakpoint,
    source: Option<Arc<dyn MatchSource>>,
    subscription: Option<Subscription>,
    narrow: Arc<AtomicBool>,
    dirty: Arc<AtomicBool>,
}

impl BreakpointMatcher {
    /// Create an unbound matcher reporting the fallback value.
    pub fn new(breakpoint: impl Into<Breakpoint>, initial_narrow: bool) -> Self {
        Self {
            breakpoint: breakpoint.into(),
            source: None,
            subscription: None,
            narrow: Arc::new(AtomicBool::new(initial_narrow)),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn breakpoint(&self) -> &Breakpoint {
        &self.breakpoint
    }

    /// Current narrow flag.
    pub fn is_narrow(&self) -> bool {
        self.narrow.load(Ordering::SeqCst)
    }

    /// Whether a change arrived since the last call, clearing the flag.
    ///
    /// Any number of notifications between two calls collapse into one
    /// `true`; this is the render-coalescing point.
    pub fn take_dirty(&self) -> bool {
        self.dirty.swap(false, Ordering::SeqCst)
    }

    /// Adjust the fallback value. Has no effect while bound to a source.
    pub fn set_fallback(&self, narrow: bool) {
        if self.source.is_none() {
            self.narrow.store(narrow, Ordering::SeqCst);
        }
    }

    /// Bind to a match source: evaluate synchronously and subscribe for
    /// changes. A previous binding is released first.
    pub fn bind(&mut self, source: Arc<dyn MatchSource>) {
        self.source = Some(source);
        self.resubscribe();
    }

    /// Release the source and subscription; the flag keeps its last value.
    pub fn unbind(&mut self) {
        self.subscription = None;
        self.source = None;
    }

    /// Swap the breakpoint. Equal values are a no-op; otherwise the old
    /// subscription is released and a new one established for the new query.
    pub fn set_breakpoint(&mut self, breakpoint: impl Into<Breakpoint>) {
        let breakpoint = breakpoint.into();
        if breakpoint == self.breakpoint {
            return;
        }
        self.breakpoint = breakpoint;
        self.dirty.store(true, Ordering::SeqCst);
        self.resubscribe();
    }

    fn resubscribe(&mut self) {
        // Release before acquire so a stale listener can never fire once a
        // replacement exists.
        self.subscription = None;

        let Some(source) = &self.source else {
            return;
        };
        let query = self.breakpoint.media_query();
        self.narrow.store(!source.matches(&query), Ordering::SeqCst);

        let narrow = Arc::clone(&self.narrow);
        let dirty = Arc::clone(&self.dirty);
        let listener: Listener = Arc::new(move |matches| {
            narrow.store(!matches, Ordering::SeqCst);
            dirty.store(true, Ordering::SeqCst);
        });
        log::debug!("subscribing to {query:?}");
        self.subscription = Some(source.subscribe(&query, listener));
    }
}

impl std::fmt::Debug for BreakpointMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BreakpointMatcher")
            .field("breakpoint", &self.breakpoint)
            .field("bound", &self.source.is_some())
            .field("narrow", &self.is_narrow())
            .finish()
    }
}
