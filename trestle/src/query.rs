//! A minimal media-query grammar for the built-in viewport source.
//!
//! Covers an optional media type joined by `and` with any number of
//! `(min-width: Npx)` / `(max-width: Npx)` terms. Custom match sources
//! receive query strings verbatim and are free to support more.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The query is outside the supported grammar.
    #[error("unsupported media query: {0:?}")]
    Unsupported(String),
    /// A width term's length could not be read as whole pixels.
    #[error("invalid length in media query: {0:?}")]
    InvalidLength(String),
}

/// The media type a query is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaType {
    #[default]
    All,
    Screen,
    Print,
}

impl MediaType {
    /// Whether a query scoped to `self` applies to a `target` viewport.
    fn applies_to(self, target: MediaType) -> bool {
        self == MediaType::All || self == target
    }
}

/// A width constraint, compared inclusively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthBound {
    Min(u32),
    Max(u32),
}

/// The environment a query is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    pub media_type: MediaType,
}

impl Viewport {
    pub fn new(width: u32) -> Self {
        Self {
            width,
            media_type: MediaType::Screen,
        }
    }
}

/// A parsed media query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaQuery {
    media_type: MediaType,
    bounds: Vec<WidthBound>,
}

impl MediaQuery {
    /// Whether this query currently holds for the viewport.
    pub fn matches(&self, viewport: &Viewport) -> bool {
        if !self.media_type.applies_to(viewport.media_type) {
            return false;
        }
        self.bounds.iter().all(|bound| match bound {
            WidthBound::Min(px) => viewport.width >= *px,
            WidthBound::Max(px) => viewport.width <= *px,
        })
    }
}

static AND_SPLIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\band\b").unwrap());

static WIDTH_TERM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(\s*(min|max)-width\s*:\s*(\d+)\s*px\s*\)$").unwrap());

impl FromStr for MediaQuery {
    type Err = QueryError;

    fn from_str(query: &str) -> Result<Self, Self::Err> {
        let mut media_type = None;
        let mut bounds = Vec::new();

        for part in AND_SPLIT.split(query) {
            let part = part.trim();
            match part {
                "" => return Err(QueryError::Unsupported(query.to_string())),
                // A media type is only valid as the leading term.
                "all" | "screen" | "print" if media_type.is_none() && bounds.is_empty() => {
                    media_type = Some(match part {
                        "all" => MediaType::All,
                        "screen" => MediaType::Screen,
                        _ => MediaType::Print,
                    });
                }
                term => {
                    let captures = WIDTH_TERM
                        .captures(term)
                        .ok_or_else(|| QueryError::Unsupported(query.to_string()))?;
                    let px: u32 = captures[2]
                        .parse()
                        .map_err(|_| QueryError::InvalidLength(term.to_string()))?;
                    bounds.push(match &captures[1] {
                        "min" => WidthBound::Min(px),
                        _ => WidthBound::Max(px),
                    });
                }
            }
        }

        if media_type.is_none() && bounds.is_empty() {
            return Err(QueryError::Unsupported(query.to_string()));
        }

        Ok(Self {
            media_type: media_type.unwrap_or_default(),
            bounds,
        })
    }
}
