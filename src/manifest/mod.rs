//! Manifest Reader
//!
//! Fetches the Storybook index (`index.json`, falling back to the legacy
//! `stories.json`) and folds it into a component catalog. No browser is
//! involved.

mod catalog;
mod types;

pub use catalog::{build_catalog, entries_from_document, group_entries};
pub use types::{
    CatalogEntry, ComponentCatalog, ComponentGroup, EntryKind, ManifestEntry, StoryRef,
};

use std::time::Duration;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::{Result, StorybookError};
use crate::utils::{
    CHROME_USER_AGENT, LEGACY_MANIFEST, MANIFEST_REQUEST_TIMEOUT, PRIMARY_MANIFEST, manifest_url,
};

/// HTTP client for manifest documents
#[derive(Debug, Clone)]
pub struct ManifestReader {
    client: reqwest::Client,
}

impl ManifestReader {
    /// Create a reader with the default request timeout
    pub fn new() -> Result<Self> {
        Self::with_timeout(MANIFEST_REQUEST_TIMEOUT)
    }

    /// Create a reader with a custom per-request timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(CHROME_USER_AGENT)
            .build()
            .map_err(|e| StorybookError::Other(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Fetch the manifest entries of a site
    ///
    /// Tries `index.json` first and `stories.json` second. Both failing is an
    /// error; nothing partial is returned.
    pub async fn fetch_entries(&self, base_url: &str) -> Result<Vec<ManifestEntry>> {
        let primary_url = manifest_url(base_url, PRIMARY_MANIFEST);
        let primary = match self.fetch_document(&primary_url).await {
            Ok(entries) => {
                info!("Read {} entries from {}", entries.len(), primary_url);
                return Ok(entries);
            }
            Err(reason) => {
                warn!("Primary manifest unavailable ({}), trying legacy manifest", reason);
                reason
            }
        };

        let legacy_url = manifest_url(base_url, LEGACY_MANIFEST);
        match self.fetch_document(&legacy_url).await {
            Ok(entries) => {
                info!("Read {} entries from {}", entries.len(), legacy_url);
                Ok(entries)
            }
            Err(legacy) => Err(StorybookError::ManifestUnavailable { primary, legacy }),
        }
    }

    /// Fetch and fold the catalog of a site
    pub async fn fetch_catalog(&self, base_url: &str) -> Result<ComponentCatalog> {
        let entries = self.fetch_entries(base_url).await?;
        let catalog = build_catalog(base_url, &entries);
        debug!(
            "Catalog built: {} components from {} entries",
            catalog.components.len(),
            entries.len()
        );
        Ok(catalog)
    }

    /// One fetch attempt; the error is a human-readable reason
    async fn fetch_document(&self, url: &str) -> std::result::Result<Vec<ManifestEntry>, String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| format!("request failed: {e}"))?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("HTTP {status}"));
        }

        let document: Value = response
            .json()
            .await
            .map_err(|e| format!("invalid JSON: {e}"))?;

        entries_from_document(&document)
            .ok_or_else(|| "document has neither 'entries' nor 'stories'".to_string())
    }
}
