//! The narrow/wide threshold.

use serde::{Deserialize, Serialize};

/// Where the layout flips between narrow and wide.
///
/// A pixel width means "narrow below this width"; a raw media-query string is
/// handed to the match source verbatim, and the layout is narrow whenever the
/// query does not match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Breakpoint {
    /// Viewport width threshold in pixels.
    Width(u32),
    /// Raw media-query expression.
    Query(String),
}

impl Breakpoint {
    /// The media query handed to the match source.
    pub fn media_query(&self) -> String {
        match self {
            Self::Width(px) => format!("(min-width: {px}px)"),
            Self::Query(query) => query.clone(),
        }
    }
}

impl From<u32> for Breakpoint {
    fn from(px: u32) -> Self {
        Self::Width(px)
    }
}

impl From<&str> for Breakpoint {
    fn from(query: &str) -> Self {
        Self::Query(query.to_string())
    }
}

impl From<String> for Breakpoint {
    fn from(query: String) -> Self {
        Self::Query(query)
    }
}
