// src/extract/container.rs
// =============================================================================
// Picks the element a scoped scrape should collect from.
//
// The element the user points at is rarely a list of links itself: it's a
// <span> inside an <li> inside a <ul> inside a <nav>... So we climb up a few
// levels looking for the ancestor that best "owns" the nearby links.
//
// How it works:
// 1. If the target already holds 2+ links, use it as is
// 2. Otherwise climb at most 5 ancestors, counting links at each level
//    - remember the first ancestor with the highest count so far
//    - stop right away at a <section>/<article> that has any links
//    - stop right away at an element whose class or id mentions "link"
//      and that has any links
// 3. If nothing stopped us, use the best ancestor we saw
//
// This is a greedy heuristic. It is deterministic and never touches the tree.
// =============================================================================

use crate::dom::{Document, Element};
use crate::error::Result;

use super::collect::count_anchors;

/// How many ancestors we are willing to climb
pub const MAX_ANCESTOR_LEVELS: usize = 5;

/// A target holding at least this many links is used directly
const DIRECT_LINK_THRESHOLD: usize = 2;

/// Returns the element whose links best represent "the links near `point`".
///
/// The walk never climbs above `document`'s root element.
pub fn select_container<D: Document>(point: &D::Element, document: D) -> Result<D::Element> {
    let root = document.root()?;

    let direct = count_anchors(point);
    if direct >= DIRECT_LINK_THRESHOLD {
        tracing::debug!("target holds {} links, using it directly", direct);
        return Ok(point.clone());
    }

    let mut best = point.clone();
    let mut max_links = direct;
    let mut current = point.clone();

    for level in 1..=MAX_ANCESTOR_LEVELS {
        if current.same_node(&root) {
            break;
        }
        let Some(parent) = current.parent_element() else {
            break;
        };
        current = parent;

        let link_count = count_anchors(&current);

        // Strictly greater: on a tie the lower ancestor stays
        if link_count > max_links {
            max_links = link_count;
            best = current.clone();
        }

        if link_count > 0 && (is_sectioning(&current) || mentions_link(&current)) {
            tracing::debug!(
                "stopping at <{}> {} level(s) up with {} links",
                current.tag_name(),
                level,
                link_count
            );
            return Ok(current);
        }
    }

    tracing::debug!("best container is <{}> with {} links", best.tag_name(), max_links);
    Ok(best)
}

fn is_sectioning<E: Element>(el: &E) -> bool {
    let tag = el.tag_name();
    tag.eq_ignore_ascii_case("section") || tag.eq_ignore_ascii_case("article")
}

// True when the class list or id contains "link", ignoring case
fn mentions_link<E: Element>(el: &E) -> bool {
    ["class", "id"].iter().any(|name| {
        el.attr(name)
            .map_or(false, |value| value.to_ascii_lowercase().contains("link"))
    })
}
