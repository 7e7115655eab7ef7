// src/lib.rs
// =============================================================================
// link-harvest: collect the links on a page and clean them up.
//
// The pipeline, leaf to root:
// - normalize::canonicalize   raw URL -> canonical URL (+ domain, path)
// - extract::collect_anchors  DOM element -> the anchors under it
// - extract::select_container point of interest -> the element to scrape
// - normalize::normalize*     anchors -> link records
// - scrape::run               one of the scrape actions, end to end
//
// The pipeline only sees the `dom` traits. `dom::html` provides them on top
// of the `scraper` HTML parser; `source`, `export`, `config` and `logging`
// are what the command-line front end needs around it.
// =============================================================================

pub mod config;
pub mod dom;
pub mod error;
pub mod export;
pub mod extract;
pub mod logging;
pub mod normalize;
pub mod scrape;
pub mod source;

pub use error::{LinkError, Result};
pub use extract::{collect_anchors, select_container, RawAnchor};
pub use normalize::{
    canonicalize, normalize, normalize_filtered, normalize_unique, CanonicalLink, LinkRecord,
};
