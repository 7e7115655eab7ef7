// src/error.rs
// =============================================================================
// Error types for the link pipeline.
//
// Only two failures really matter:
// - A single link can't be turned into a URL (InvalidUrl). The caller drops
//   that one link and keeps going.
// - The page itself can't be read (HostUnavailable). Nothing useful can come
//   out of the call, so it aborts with no partial results.
//
// An empty page is NOT an error, it's just an empty list of links.
// =============================================================================

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LinkError {
    /// One href couldn't be parsed as an absolute URL
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The page or tree we were asked to read is not reachable
    #[error("page unavailable: {0}")]
    HostUnavailable(String),

    /// A CSS selector given for a scoped scrape didn't parse
    #[error("invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// A scoped scrape pointed at an element that isn't on the page
    #[error("no element matches '{0}'")]
    NoTarget(String),
}

impl LinkError {
    pub(crate) fn invalid_url(url: &str, reason: impl ToString) -> Self {
        LinkError::InvalidUrl {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Shorthand used across the library
pub type Result<T> = std::result::Result<T, LinkError>;
