// src/normalize/canonical.rs
// =============================================================================
// Turns a raw link into its canonical form.
//
// Steps, in this order:
// 1. Unwrap redirect wrappers ("/redirect?q=<real url>", "redir_token=...")
// 2. Drop tracking parameters (utm_*, fbclid, gclid, ...)
// 3. Lowercase the host and drop one leading "www." (for `domain`)
// 4. Drop one trailing "/" from the path (for `path`)
// 5. Serialize what's left back into `url`
//
// Step 2 runs on the unwrapped URL, so tracking junk carried inside a
// redirect target is stripped too.
// =============================================================================

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{LinkError, Result};

/// Query parameters that only exist to track clicks
pub const TRACKING_PARAMS: &[&str] = &[
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_term",
    "utm_content",
    "fbclid",
    "gclid",
    "ocid",
    "ncid",
    "ref",
    "referrer",
    "source",
];

/// Query parameter a redirect wrapper keeps its real target in
const REDIRECT_TARGET_PARAM: &str = "q";

/// A link after cleanup, plus the pieces exports need
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalLink {
    /// The href exactly as it was found
    pub raw_url: String,
    /// Redirect-unwrapped, tracking-free absolute URL
    pub url: String,
    /// Lowercase host without a leading "www."
    pub domain: String,
    /// Path without its trailing slash ("" for the root)
    pub path: String,
    /// `domain` followed by `path`
    pub domain_path: String,
}

/// Canonicalizes one link.
///
/// Fails with `InvalidUrl` when the link (or the target it redirects to)
/// isn't an absolute URL. Nothing is returned in that case.
///
/// Example:
///   "https://WWW.Example.com/Foo/?utm_source=x"
///   -> url "https://www.example.com/Foo/", domain "example.com", path "/Foo"
pub fn canonicalize(raw_url: &str) -> Result<CanonicalLink> {
    let working = unwrap_redirect(raw_url)?;

    let mut url = Url::parse(&working).map_err(|e| LinkError::invalid_url(raw_url, e))?;
    strip_params(&mut url, TRACKING_PARAMS);

    let domain = normalize_domain(url.host_str().unwrap_or_default());
    let path = normalize_path(url.path());
    let domain_path = format!("{}{}", domain, path);

    Ok(CanonicalLink {
        raw_url: raw_url.to_string(),
        url: url.to_string(),
        domain,
        path,
        domain_path,
    })
}

/// True for the URL shapes video/social sites use to wrap outbound links
pub fn is_redirect_wrapper(url: &str) -> bool {
    url.contains("/redirect?") || url.contains("redir_token=")
}

// Follows `q=` in redirect wrappers, through any number of nested wrappers.
// A wrapper without a usable `q` is returned unchanged: it's still a link,
// just not one we can see through.
//
// Terminates: a decoded `q` is always shorter than the wrapper holding it.
fn unwrap_redirect(raw_url: &str) -> Result<String> {
    let mut working = raw_url.to_string();

    while is_redirect_wrapper(&working) {
        let wrapper = Url::parse(&working).map_err(|e| LinkError::invalid_url(raw_url, e))?;
        let target = wrapper
            .query_pairs()
            .find(|(key, _)| key == REDIRECT_TARGET_PARAM)
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.trim().is_empty());

        match target {
            Some(target) => {
                tracing::trace!("unwrapped redirect {} -> {}", working, target);
                working = target;
            }
            None => break,
        }
    }

    Ok(working)
}

/// Removes every query parameter named in `names`, keeping the order of the
/// rest. The query is only rewritten when something was removed; an empty
/// query (a bare trailing "?") is dropped.
pub fn strip_params(url: &mut Url, names: &[&str]) {
    let Some(query) = url.query() else {
        return;
    };
    if query.is_empty() {
        url.set_query(None);
        return;
    }

    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    let kept: Vec<&(String, String)> = pairs
        .iter()
        .filter(|(key, _)| !names.contains(&key.as_str()))
        .collect();

    if kept.len() == pairs.len() {
        return;
    }

    if kept.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(kept);
    }
}

fn normalize_domain(host: &str) -> String {
    let host = host.to_ascii_lowercase();
    match host.strip_prefix("www.") {
        Some(rest) => rest.to_string(),
        None => host,
    }
}

fn normalize_path(path: &str) -> String {
    path.strip_suffix('/').unwrap_or(path).to_string()
}
