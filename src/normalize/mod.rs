// src/normalize/mod.rs
// =============================================================================
// This module cleans links up.
//
// Submodules:
// - canonical: one raw URL -> canonical URL (+ domain, path)
// - records: a list of anchors -> a list of link records
// =============================================================================

mod canonical;
mod records;

pub use canonical::{canonicalize, is_redirect_wrapper, strip_params, CanonicalLink, TRACKING_PARAMS};
pub use records::{
    normalize, normalize_batch, normalize_filtered, normalize_filtered_batch, normalize_unique,
    normalize_unique_batch, Batch, LinkRecord, NO_TITLE,
};
