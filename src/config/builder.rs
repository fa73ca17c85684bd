//! Type-safe builder for `HarvestConfig` using the typestate pattern.
//!
//! The storage directory and search URL must be set, in that order,
//! before `build()` exists; optional fields keep their defaults unless
//! overridden through the methods in [`super::methods`].

use anyhow::{Result, anyhow};
use std::marker::PhantomData;
use std::path::PathBuf;
use url::Url;

use super::types::HarvestConfig;

// Type states for the builder
pub struct WithStorageDir;
pub struct WithSearchUrl;

pub struct HarvestConfigBuilder<State = ()> {
    pub(crate) config: HarvestConfig,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for HarvestConfigBuilder<()> {
    fn default() -> Self {
        Self {
            config: HarvestConfig::default(),
            _phantom: PhantomData,
        }
    }
}

impl HarvestConfig {
    /// Create a builder with a fluent, compile-time-checked interface.
    #[must_use]
    pub fn builder() -> HarvestConfigBuilder<()> {
        HarvestConfigBuilder::default()
    }
}

impl HarvestConfigBuilder<()> {
    pub fn storage_dir(mut self, dir: impl Into<PathBuf>) -> HarvestConfigBuilder<WithStorageDir> {
        self.config.storage_dir = dir.into();
        HarvestConfigBuilder {
            config: self.config,
            _phantom: PhantomData,
        }
    }
}

impl HarvestConfigBuilder<WithStorageDir> {
    /// Set the search URL template. A missing scheme is normalized to
    /// https, matching how operators tend to paste URLs.
    pub fn search_url(mut self, url: impl Into<String>) -> HarvestConfigBuilder<WithSearchUrl> {
        let url = url.into();
        self.config.search_url = if url.starts_with("http://") || url.starts_with("https://") {
            url
        } else {
            format!("https://{url}")
        };
        HarvestConfigBuilder {
            config: self.config,
            _phantom: PhantomData,
        }
    }
}

// Build is only available once both required fields are set
impl HarvestConfigBuilder<WithSearchUrl> {
    pub fn build(mut self) -> Result<HarvestConfig> {
        if self.config.listings_per_group == 0 {
            return Err(anyhow!("listings_per_group must be at least 1"));
        }
        if self.config.specialties.is_empty() {
            return Err(anyhow!("at least one specialty is required"));
        }
        if self.config.localities.is_empty() {
            return Err(anyhow!("at least one locality is required"));
        }

        // Derive the site root from the search URL unless overridden.
        if self.config.site_root.is_empty() {
            let parsed = Url::parse(&self.config.search_url)
                .map_err(|e| anyhow!("invalid search URL: {e}"))?;
            self.config.site_root = parsed.origin().ascii_serialization();
        }

        Ok(self.config)
    }
}
