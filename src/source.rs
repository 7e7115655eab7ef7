// src/source.rs
// =============================================================================
// Loads the HTML page we are going to scrape.
//
// The input can be:
// - "-": read the page from stdin (e.g. `curl ... | link-harvest all -`)
// - an http:// or https:// URL: downloaded with reqwest
// - anything else: a path to a saved HTML file
//
// Only the page itself is fetched. The links we find in it are never
// requested.
// =============================================================================

use std::time::Duration;

use reqwest::Client;
use tokio::io::AsyncReadExt;

use crate::error::{LinkError, Result};

/// A loaded page and, when known, the URL it came from
#[derive(Debug, Clone)]
pub struct Page {
    pub html: String,
    pub url: Option<String>,
}

/// Loads a page from stdin, a URL or a file.
///
/// Any failure is `HostUnavailable`: without the page there is nothing to
/// scrape.
pub async fn load(input: &str, timeout: Duration) -> Result<Page> {
    if input == "-" {
        let mut html = String::new();
        tokio::io::stdin()
            .read_to_string(&mut html)
            .await
            .map_err(|e| LinkError::HostUnavailable(format!("stdin: {}", e)))?;
        return Ok(Page { html, url: None });
    }

    if is_web_url(input) {
        return fetch_page(input, timeout).await;
    }

    let html = tokio::fs::read_to_string(input)
        .await
        .map_err(|e| LinkError::HostUnavailable(format!("{}: {}", input, e)))?;
    Ok(Page { html, url: None })
}

fn is_web_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

// Downloads a page. The URL after redirects becomes the page URL, so relative
// links resolve the way they would in the browser.
async fn fetch_page(url: &str, timeout: Duration) -> Result<Page> {
    let unavailable = |e: reqwest::Error| LinkError::HostUnavailable(format!("{}: {}", url, e));

    let client = Client::builder().timeout(timeout).build().map_err(unavailable)?;

    tracing::info!("fetching {}", url);
    let response = client.get(url).send().await.map_err(unavailable)?;

    let status = response.status();
    if !status.is_success() {
        return Err(LinkError::HostUnavailable(format!("{}: HTTP {}", url, status.as_u16())));
    }

    let final_url = response.url().to_string();
    let html = response.text().await.map_err(unavailable)?;

    Ok(Page {
        html,
        url: Some(final_url),
    })
}
