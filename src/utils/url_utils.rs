//! URL helpers for Storybook sites.

use url::Url;

/// Check if a URL is a navigable http(s) URL
#[must_use]
pub fn is_valid_url(url: &str) -> bool {
    if url.is_empty() {
        return false;
    }

    match Url::parse(url) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// Drop a single trailing `/` so paths can be appended with `format!`
#[must_use]
pub fn normalize_base_url(base: &str) -> String {
    let trimmed = base.trim();
    trimmed.strip_suffix('/').unwrap_or(trimmed).to_string()
}

/// URL of a manifest document under the site root
#[must_use]
pub fn manifest_url(base: &str, document: &str) -> String {
    format!("{base}/{document}")
}

/// Manager URL for a combined docs page
#[must_use]
pub fn docs_page_url(base: &str, docs_id: &str) -> String {
    format!("{base}/?path=/docs/{docs_id}")
}

/// Manager URL for a single story canvas
#[must_use]
pub fn story_page_url(base: &str, story_id: &str) -> String {
    format!("{base}/?path=/story/{story_id}")
}
