// src/normalize/records.rs
// =============================================================================
// Turns collected anchors into the link records we hand to the exporters.
//
// Three flavors, one per scrape action:
// - normalize: every anchor that canonicalizes, in page order
// - normalize_unique: same, but each canonical URL only once (first wins)
// - normalize_filtered: same as normalize, restricted to an allow-list of
//   domains
//
// A link that fails to canonicalize never aborts the batch. It's logged,
// counted in `Batch::skipped`, and dropped.
// =============================================================================

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::canonical::{canonicalize, CanonicalLink};
use crate::extract::RawAnchor;

/// Text used when an anchor has neither visible text nor a title
pub const NO_TITLE: &str = "No title";

/// One exported link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    /// What the link says on the page
    pub text: String,
    /// The cleaned-up URL and its pieces
    #[serde(flatten)] // Serialized side by side with `text`
    pub link: CanonicalLink,
}

/// Records from one normalization pass plus how many anchors were dropped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Batch {
    /// Records that made it through, in page order
    pub records: Vec<LinkRecord>,
    /// Anchors dropped because their URL didn't canonicalize
    pub skipped: usize,
}

impl Batch {
    /// Number of records (skipped anchors not included)
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no record made it through
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Every anchor that canonicalizes, in page order. See `normalize_batch`.
pub fn normalize(anchors: &[RawAnchor]) -> Vec<LinkRecord> {
    normalize_batch(anchors).records
}

/// One record per canonical URL, first occurrence wins. See `normalize_unique_batch`.
pub fn normalize_unique(anchors: &[RawAnchor]) -> Vec<LinkRecord> {
    normalize_unique_batch(anchors).records
}

/// Only records on `allowed_domains` or their subdomains. See `normalize_filtered_batch`.
pub fn normalize_filtered<S: AsRef<str>>(anchors: &[RawAnchor], allowed_domains: &[S]) -> Vec<LinkRecord> {
    normalize_filtered_batch(anchors, allowed_domains).records
}

/// Canonicalizes every anchor, keeping page order and duplicates
pub fn normalize_batch(anchors: &[RawAnchor]) -> Batch {
    let mut batch = Batch::default();

    for anchor in anchors {
        match canonicalize(&anchor.href) {
            Ok(link) => batch.records.push(LinkRecord {
                text: resolve_text(anchor),
                link,
            }),
            Err(e) => {
                tracing::warn!("skipping link: {}", e);
                batch.skipped += 1;
            }
        }
    }

    tracing::debug!(
        "normalized {} of {} anchors ({} skipped)",
        batch.records.len(),
        anchors.len(),
        batch.skipped
    );
    batch
}

/// Like `normalize_batch`, but drops every record whose canonical URL was
/// already seen. The first record for a URL keeps its text.
pub fn normalize_unique_batch(anchors: &[RawAnchor]) -> Batch {
    let mut batch = normalize_batch(anchors);

    let mut seen = HashSet::new();
    batch.records.retain(|record| seen.insert(record.link.url.clone()));

    tracing::debug!("{} unique links", batch.records.len());
    batch
}

/// Like `normalize_batch`, but only keeps records on one of `allowed_domains`
/// (or a subdomain of one).
pub fn normalize_filtered_batch<S: AsRef<str>>(anchors: &[RawAnchor], allowed_domains: &[S]) -> Batch {
    let allowed: Vec<String> = allowed_domains
        .iter()
        .map(|d| {
            let d = d.as_ref().trim().to_ascii_lowercase();
            d.strip_prefix("www.").map(str::to_string).unwrap_or(d)
        })
        .filter(|d| !d.is_empty())
        .collect();

    let mut batch = normalize_batch(anchors);
    batch
        .records
        .retain(|record| allowed.iter().any(|d| domain_matches(&record.link.domain, d)));

    tracing::debug!("{} links on allowed domains", batch.records.len());
    batch
}

// "music.apple.com" matches "music.apple.com" and "beta.music.apple.com",
// but not "apple.com" or "notmusic.apple.com"
fn domain_matches(domain: &str, allowed: &str) -> bool {
    match domain.strip_suffix(allowed) {
        Some("") => true,
        Some(prefix) => prefix.ends_with('.'),
        None => false,
    }
}

// Visible text, then the title attribute, then a placeholder. Both are
// trimmed, so a whitespace-only title counts as missing, same as the text.
fn resolve_text(anchor: &RawAnchor) -> String {
    let text = anchor.text.trim();
    if !text.is_empty() {
        return text.to_string();
    }

    let title = anchor.title.trim();
    if !title.is_empty() {
        return title.to_string();
    }

    NO_TITLE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn anchor(href: &str, text: &str) -> RawAnchor {
        RawAnchor::new(href, text, "")
    }

    #[test]
    fn test_text_falls_back_to_title_then_placeholder() {
        let anchors = vec![
            RawAnchor::new("https://a.example", "  Visible  ", "Title A"),
            RawAnchor::new("https://b.example", "   ", "Title B"),
            RawAnchor::new("https://c.example", "", ""),
        ];
        let texts: Vec<String> = normalize(&anchors).into_iter().map(|r| r.text).collect();
        assert_eq!(texts, vec!["Visible", "Title B", "No title"]);
    }

    #[test]
    fn test_blank_title_counts_as_missing() {
        let anchors = vec![
            RawAnchor::new("https://a.example", "", " \t "),
            RawAnchor::new("https://b.example", "", "  Padded title "),
        ];
        let texts: Vec<String> = normalize(&anchors).into_iter().map(|r| r.text).collect();
        assert_eq!(texts, vec!["No title", "Padded title"]);
    }

    #[test]
    fn test_invalid_link_is_skipped_not_fatal() {
        let anchors = vec![
            anchor("https://one.example/a", "1"),
            anchor("not a url", "broken"),
            anchor("https://two.example/b", "2"),
            anchor("https://three.example/c", "3"),
        ];
        let batch = normalize_batch(&anchors);
        assert_eq!(batch.len(), 3);
        assert_eq!(batch.skipped, 1);
        assert!(batch.records.iter().all(|r| r.text != "broken"));
    }

    #[test]
    fn test_plain_normalize_keeps_duplicates() {
        let anchors = vec![
            anchor("https://example.com/x?utm_source=a", "first"),
            anchor("https://example.com/x", "second"),
        ];
        assert_eq!(normalize(&anchors).len(), 2);
    }

    #[test]
    fn test_unique_keeps_first_occurrence() {
        let anchors = vec![
            anchor("https://example.com/x?utm_source=a", "first"),
            anchor("https://other.example/", "other"),
            anchor("https://example.com/x?fbclid=zzz", "second"),
            anchor("https://example.com/x", "third"),
        ];
        let records = normalize_unique(&anchors);

        let summary: Vec<(&str, &str)> = records
            .iter()
            .map(|r| (r.link.url.as_str(), r.text.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("https://example.com/x", "first"),
                ("https://other.example/", "other"),
            ]
        );
        assert_eq!(records[0].link.raw_url, "https://example.com/x?utm_source=a");
    }

    #[test]
    fn test_filtered_keeps_allowed_domains_only() {
        let anchors = vec![
            anchor("https://www.youtube.com/watch?v=1", "yt"),
            anchor("https://m.facebook.com/band", "fb mobile"),
            anchor("https://example.com/", "other"),
            anchor("https://apple.com/", "not music"),
            anchor("https://music.apple.com/album/1", "apple music"),
            anchor("https://notyoutube.com/", "lookalike"),
        ];
        let allowed = ["youtube.com", "facebook.com", "music.apple.com"];
        let texts: Vec<String> = normalize_filtered(&anchors, &allowed)
            .into_iter()
            .map(|r| r.text)
            .collect();
        assert_eq!(texts, vec!["yt", "fb mobile", "apple music"]);
    }

    #[test]
    fn test_filtered_matches_on_redirect_target() {
        let anchors = vec![anchor(
            "https://www.youtube.com/redirect?q=https%3A%2F%2Fartist.bandcamp.com%2F&redir_token=x",
            "bandcamp",
        )];
        let records = normalize_filtered(&anchors, &["bandcamp.com"]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].link.domain, "artist.bandcamp.com");
    }

    #[test]
    fn test_empty_input_is_empty_output() {
        let batch = normalize_unique_batch(&[]);
        assert!(batch.is_empty());
        assert_eq!(batch.skipped, 0);
    }

    #[test]
    fn test_record_serializes_flat() {
        let records = normalize(&[anchor("https://www.example.com/a/", "A")]);
        let json = serde_json::to_value(&records[0]).unwrap();
        assert_eq!(json["text"], "A");
        assert_eq!(json["domain"], "example.com");
        assert_eq!(json["domain_path"], "example.com/a");
        assert_eq!(json["url"], "https://www.example.com/a/");
    }
}
