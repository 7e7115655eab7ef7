// src/dom/html.rs
// =============================================================================
// The `scraper`-backed implementation of the DOM traits.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// We also use the `url` crate to resolve relative hrefs against the page URL,
// so an anchor's `href()` behaves like `a.href` in a browser: it always hands
// back an absolute URL when it can.
// =============================================================================

use scraper::{ElementRef, Html, Selector};
use url::Url;

use super::{Document, Element};
use crate::error::{LinkError, Result};

/// A parsed HTML page plus the URL its relative links are resolved against
pub struct HtmlPage {
    html: Html,
    base: Option<Url>,
}

impl HtmlPage {
    /// Parses a full HTML document.
    ///
    /// `page_url` is where the page came from (if known). A `<base href>` in
    /// the document takes priority over it, the same way browsers do it.
    pub fn parse(html: &str, page_url: Option<&str>) -> Self {
        let html = Html::parse_document(html);

        let page_base = page_url.and_then(|u| match Url::parse(u) {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::warn!("ignoring invalid base URL '{}': {}", u, e);
                None
            }
        });

        let base = match find_base_href(&html) {
            Some(href) => resolve_url(page_base.as_ref(), &href)
                .and_then(|u| Url::parse(&u).ok())
                .or(page_base),
            None => page_base,
        };

        HtmlPage { html, base }
    }

    /// The URL relative links on this page resolve against
    pub fn base_url(&self) -> Option<&Url> {
        self.base.as_ref()
    }

    fn wrap<'a>(&'a self, node: ElementRef<'a>) -> PageElement<'a> {
        PageElement {
            node,
            base: self.base.as_ref(),
        }
    }
}

impl<'a> Document for &'a HtmlPage {
    type Element = PageElement<'a>;

    fn root(self) -> Result<Self::Element> {
        Ok(self.wrap(self.html.root_element()))
    }

    fn query(self, selector: &str) -> Result<Option<Self::Element>> {
        let parsed = Selector::parse(selector).map_err(|e| LinkError::InvalidSelector {
            selector: selector.to_string(),
            reason: format!("{:?}", e),
        })?;

        Ok(self.html.select(&parsed).next().map(|node| self.wrap(node)))
    }
}

/// A handle to one element of an `HtmlPage`
#[derive(Clone, Copy)]
pub struct PageElement<'a> {
    node: ElementRef<'a>,
    base: Option<&'a Url>,
}

impl<'a> Element for PageElement<'a> {
    fn tag_name(&self) -> &str {
        self.node.value().name()
    }

    fn attr(&self, name: &str) -> Option<&str> {
        self.node.value().attr(name)
    }

    fn text(&self) -> String {
        self.node.text().collect()
    }

    fn href(&self) -> Option<String> {
        let raw = self.attr("href")?.trim();
        if raw.is_empty() {
            return None;
        }

        // Fall back to the raw value: an href we can't resolve is still an
        // href, it just fails canonicalization later and gets counted there.
        Some(resolve_url(self.base, raw).unwrap_or_else(|| raw.to_string()))
    }

    fn parent_element(&self) -> Option<Self> {
        let base = self.base;
        self.node
            .parent()
            .and_then(ElementRef::wrap)
            .map(|node| PageElement { node, base })
    }

    fn subtree(&self) -> Vec<Self> {
        let base = self.base;
        self.node
            .descendants()
            .filter_map(ElementRef::wrap)
            .map(|node| PageElement { node, base })
            .collect()
    }

    fn same_node(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

// Finds the first <base href="..."> in the document, if any
fn find_base_href(html: &Html) -> Option<String> {
    html.root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "base" && el.value().attr("href").is_some())
        .and_then(|el| el.value().attr("href"))
        .map(|href| href.trim().to_string())
}

// Resolves a possibly-relative URL to an absolute URL
//
// Examples (base = "https://example.com/page"):
//   "/docs"              -> Some("https://example.com/docs")
//   "../other"           -> Some("https://example.com/other")
//   "https://other.com"  -> Some("https://other.com/")
//   "/docs" with no base -> None
fn resolve_url(base: Option<&Url>, href: &str) -> Option<String> {
    match Url::parse(href) {
        Ok(url) => Some(url.to_string()),
        Err(_) => base?.join(href).ok().map(|url| url.to_string()),
    }
}
