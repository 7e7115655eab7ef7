// src/extract/mod.rs
// =============================================================================
// This module finds the anchors on a page.
//
// Submodules:
// - collect: enumerates qualifying anchors under an element
// - container: picks the ancestor a scoped scrape should collect from
// =============================================================================

mod collect;
mod container;

pub use collect::{collect_anchors, count_anchors, RawAnchor};
pub use container::{select_container, MAX_ANCESTOR_LEVELS};
