// src/scrape.rs
// =============================================================================
// The three ways to scrape a page, tying collection and normalization together.
//
// - All: every link on the page, each URL once
// - Social: every link on the page that points at a known platform
// - Near: the links around one element (see extract::select_container)
//
// Every action either returns the whole batch or fails as a whole; there is
// no partial result.
// =============================================================================

use crate::dom::{Document, Element};
use crate::error::{LinkError, Result};
use crate::extract::{collect_anchors, select_container};
use crate::normalize::{normalize_batch, normalize_filtered_batch, normalize_unique_batch, Batch};

/// Platforms the social scrape keeps links for, unless configured otherwise
pub const DEFAULT_SOCIAL_DOMAINS: &[&str] = &[
    "soundcloud.com",
    "facebook.com",
    "twitter.com",
    "instagram.com",
    "bandcamp.com",
    "youtube.com",
    "music.amazon.com",
    "music.apple.com",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Whole page, deduplicated by canonical URL
    All,
    /// Whole page, only links on these domains
    Social(Vec<String>),
    /// Links in the container around the first element matching this CSS selector
    Near(String),
}

impl Action {
    /// Social scrape with the built-in platform list
    pub fn social() -> Self {
        Action::Social(DEFAULT_SOCIAL_DOMAINS.iter().map(|d| d.to_string()).collect())
    }
}

/// Runs one scrape action against a page
pub fn run<D: Document>(document: D, action: &Action) -> Result<Batch> {
    let batch = match action {
        Action::All => {
            let anchors = collect_anchors(&document.root()?);
            normalize_unique_batch(&anchors)
        }
        Action::Social(domains) => {
            let anchors = collect_anchors(&document.root()?);
            normalize_filtered_batch(&anchors, domains.as_slice())
        }
        Action::Near(selector) => {
            let point = document
                .query(selector)?
                .ok_or_else(|| LinkError::NoTarget(selector.clone()))?;
            let container = select_container(&point, document)?;
            tracing::info!("collecting links inside <{}>", container.tag_name());
            normalize_batch(&collect_anchors(&container))
        }
    };

    tracing::info!("{} links found", batch.len());
    Ok(batch)
}
