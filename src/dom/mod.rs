// src/dom/mod.rs
// =============================================================================
// The DOM capability the link pipeline runs on.
//
// The extraction code never talks to a concrete HTML library. It only needs a
// handful of things from a tree:
// - an element's tag name and attributes
// - its visible text
// - its resolved link target (like the browser's `a.href` property)
// - its parent, and every element below it
//
// Those are the two traits below. `html` implements them on top of `scraper`,
// tests and other hosts can bring their own.
// =============================================================================

pub mod html;

use crate::error::Result;

/// One element of a DOM-like tree.
///
/// Handles are cheap to clone and compare; they never own the tree.
pub trait Element: Clone {
    /// Lowercase tag name, e.g. "a" or "section"
    fn tag_name(&self) -> &str;

    /// Raw attribute value as written in the markup
    fn attr(&self, name: &str) -> Option<&str>;

    /// Concatenated text of this element and everything inside it
    fn text(&self) -> String;

    /// The link target with relative references already resolved.
    ///
    /// `None` when the element has no href or it is blank.
    fn href(&self) -> Option<String>;

    /// The enclosing element, or `None` at the top of the tree
    fn parent_element(&self) -> Option<Self>;

    /// This element followed by all of its descendant elements, in document order
    fn subtree(&self) -> Vec<Self>;

    /// True when both handles point at the same node
    fn same_node(&self, other: &Self) -> bool;
}

/// A whole page: gives access to its root element and lets callers look up a
/// point of interest.
///
/// Implemented on a shared reference to the page (`&HtmlPage`), so the
/// element handles it gives out can borrow from it.
pub trait Document: Copy {
    type Element: Element;

    /// The top element of the page (`<html>` for HTML documents).
    ///
    /// Fails with `HostUnavailable` when the tree can't be read.
    fn root(self) -> Result<Self::Element>;

    /// First element matching a CSS selector, if any
    fn query(self, selector: &str) -> Result<Option<Self::Element>>;
}
