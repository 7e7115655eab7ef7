// src/extract/collect.rs
// =============================================================================
// Collects the anchors under a DOM element.
//
// An anchor "qualifies" when it is an <a> element whose href is
// - present and not blank
// - not a `javascript:` pseudo-link (those don't go anywhere)
//
// Everything else (mailto:, tel:, relative links that couldn't be resolved...)
// is kept here. Deciding whether it's a usable URL is the canonicalizer's job.
// =============================================================================

use crate::dom::Element;

/// An anchor as found in the page, before any cleanup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAnchor {
    /// Resolved link target, never empty
    pub href: String,
    /// Text inside the anchor, untrimmed (may be empty)
    pub text: String,
    /// The anchor's `title` attribute (may be empty)
    pub title: String,
}

impl RawAnchor {
    /// Builds an anchor by hand, mostly useful for callers that don't have a DOM
    pub fn new(href: impl Into<String>, text: impl Into<String>, title: impl Into<String>) -> Self {
        RawAnchor {
            href: href.into(),
            text: text.into(),
            title: title.into(),
        }
    }
}

/// Returns every qualifying anchor under `root` (including `root` itself), in
/// document order. Duplicates are kept.
pub fn collect_anchors<E: Element>(root: &E) -> Vec<RawAnchor> {
    root.subtree()
        .iter()
        .filter_map(|el| {
            let href = qualifying_href(el)?;
            Some(RawAnchor {
                href,
                text: el.text(),
                title: el.attr("title").unwrap_or_default().to_string(),
            })
        })
        .collect()
}

/// Number of qualifying anchors under `root`, without building the anchors
pub fn count_anchors<E: Element>(root: &E) -> usize {
    root.subtree()
        .iter()
        .filter(|el| qualifying_href(*el).is_some())
        .count()
}

// The element's href if it is an <a> worth collecting
fn qualifying_href<E: Element>(el: &E) -> Option<String> {
    if !el.tag_name().eq_ignore_ascii_case("a") {
        return None;
    }

    let href = el.href()?;
    if is_script_href(&href) {
        return None;
    }
    Some(href)
}

fn is_script_href(href: &str) -> bool {
    href.trim_start()
        .get(..11)
        .map_or(false, |scheme| scheme.eq_ignore_ascii_case("javascript:"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::html::HtmlPage;
    use crate::dom::Document;

    #[test]
    fn test_collects_in_document_order() {
        let html = r#"
            <a href="https://one.example">One</a>
            <p><a href="https://two.example" title="Second">Two</a></p>
            <a href="https://one.example">One again</a>
        "#;
        let page = HtmlPage::parse(html, None);
        let anchors = collect_anchors(&page.root().unwrap());

        let hrefs: Vec<&str> = anchors.iter().map(|a| a.href.as_str()).collect();
        assert_eq!(
            hrefs,
            vec!["https://one.example/", "https://two.example/", "https://one.example/"]
        );
        assert_eq!(anchors[1].title, "Second");
        assert_eq!(anchors[1].text, "Two");
    }

    #[test]
    fn test_skips_script_and_empty_hrefs() {
        let html = r#"
            <a href="javascript:void(0)">JS</a>
            <a href="JavaScript:alert(1)">JS upper</a>
            <a href="">Empty</a>
            <a>No href</a>
            <a href="mailto:test@example.com">Mail</a>
        "#;
        let page = HtmlPage::parse(html, None);
        let anchors = collect_anchors(&page.root().unwrap());

        assert_eq!(anchors.len(), 1);
        assert_eq!(anchors[0].href, "mailto:test@example.com");
    }

    #[test]
    fn test_root_anchor_is_included() {
        let page = HtmlPage::parse(r#"<a id="me" href="https://solo.example">Solo</a>"#, None);
        let a = page.query("#me").unwrap().unwrap();
        assert_eq!(collect_anchors(&a).len(), 1);
        assert_eq!(count_anchors(&a), 1);
    }

    #[test]
    fn test_empty_scope_yields_nothing() {
        let page = HtmlPage::parse("<div><p>No links here</p></div>", None);
        assert!(collect_anchors(&page.root().unwrap()).is_empty());
    }
}
