//! A match source backed by an explicit viewport.
//!
//! Useful anywhere the embedder knows the viewport dimensions itself: tests,
//! static rendering with a chosen width, or a host shell that forwards its
//! own resize events via [`ViewportSource::set_width`].

use std::str::FromStr;
use std::sync::{Arc, Mutex, Weak};

use crate::query::{MediaQuery, MediaType, Viewport};
use crate::source::{Listener, MatchSource, Subscription};

struct Entry {
    id: u64,
    query: String,
    /// Last match state delivered; listeners only hear actual changes.
    last: bool,
    listener: Listener,
}

struct Inner {
    viewport: Viewport,
    entries: Vec<Entry>,
    next_id: u64,
}

/// A cloneable, thread-safe match source over a width + media type.
#[derive(Clone)]
pub struct ViewportSource {
    inner: Arc<Mutex<Inner>>,
}

impl ViewportSource {
    /// Create a source for a `screen` viewport of the given width.
    pub fn new(width: u32) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                viewport: Viewport::new(width),
                entries: Vec::new(),
                next_id: 0,
            })),
        }
    }

    pub fn width(&self) -> u32 {
        self.lock().viewport.width
    }

    /// Update the viewport width and notify listeners whose match state
    /// changed.
    pub fn set_width(&self, width: u32) {
        self.update(|viewport| viewport.width = width);
    }

    /// Update the media type (e.g. switching to print) and notify listeners
    /// whose match state changed.
    pub fn set_media_type(&self, media_type: MediaType) {
        self.update(|viewport| viewport.media_type = media_type);
    }

    fn update(&self, apply: impl FnOnce(&mut Viewport)) {
        let changed = {
            let mut inner = self.lock();
            apply(&mut inner.viewport);
            let viewport = inner.viewport;
            let mut changed = Vec::new();
            for entry in &mut inner.entries {
                let now = evaluate(&entry.query, &viewport);
                if now != entry.last {
                    entry.last = now;
                    changed.push((Arc::clone(&entry.listener), now));
                }
            }
            changed
        };
        // Listeners run outside the lock so they may call back in.
        for (listener, now) in changed {
            listener(now);
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl MatchSource for ViewportSource {
    fn matches(&self, query: &str) -> bool {
        let inner = self.lock();
        evaluate(query, &inner.viewport)
    }

    fn subscribe(&self, query: &str, listener: Listener) -> Subscription {
        let mut inner = self.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        let last = evaluate(query, &inner.viewport);
        inner.entries.push(Entry {
            id,
            query: query.to_string(),
            last,
            listener,
        });
        log::trace!("viewport source: subscribed {id} to {query:?}");

        let weak: Weak<Mutex<Inner>> = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            // The source may already be gone; nothing to release then.
            if let Some(inner) = weak.upgrade() {
                let mut inner = inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
                inner.entries.retain(|entry| entry.id != id);
            }
        })
    }
}

/// Evaluate a query against the viewport; unsupported queries report
/// non-matching, which yields the narrow layout.
fn evaluate(query: &str, viewport: &Viewport) -> bool {
    match MediaQuery::from_str(query) {
        Ok(parsed) => parsed.matches(viewport),
        Err(err) => {
            log::warn!("viewport source: {err}; treating as non-matching");
            false
        }
    }
}
