//! Getter methods for `HarvestConfig`.

use std::path::Path;

use super::types::HarvestConfig;

impl HarvestConfig {
    #[must_use]
    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }

    #[must_use]
    pub fn search_url(&self) -> &str {
        &self.search_url
    }

    #[must_use]
    pub fn site_root(&self) -> &str {
        &self.site_root
    }

    #[must_use]
    pub fn specialties(&self) -> &[String] {
        &self.specialties
    }

    #[must_use]
    pub fn localities(&self) -> &[String] {
        &self.localities
    }

    #[must_use]
    pub fn listings_per_group(&self) -> usize {
        self.listings_per_group
    }

    #[must_use]
    pub fn card_selector(&self) -> &str {
        &self.card_selector
    }

    #[must_use]
    pub fn listing_delay_secs(&self) -> u64 {
        self.listing_delay_secs
    }

    #[must_use]
    pub fn category_delay_secs(&self) -> u64 {
        self.category_delay_secs
    }

    #[must_use]
    pub fn region_delay_secs(&self) -> u64 {
        self.region_delay_secs
    }

    #[must_use]
    pub fn listing_wait_timeout_secs(&self) -> u64 {
        self.listing_wait_timeout_secs
    }

    #[must_use]
    pub fn reveal_timeout_secs(&self) -> u64 {
        self.reveal_timeout_secs
    }

    #[must_use]
    pub fn detail_wait_timeout_secs(&self) -> u64 {
        self.detail_wait_timeout_secs
    }

    #[must_use]
    pub fn page_open_timeout_secs(&self) -> u64 {
        self.page_open_timeout_secs
    }

    #[must_use]
    pub fn settle_millis(&self) -> u64 {
        self.settle_millis
    }

    #[must_use]
    pub fn headless(&self) -> bool {
        self.headless
    }

    #[must_use]
    pub fn save_snapshots(&self) -> bool {
        self.save_snapshots
    }

    #[must_use]
    pub fn output_filename(&self) -> &str {
        &self.output_filename
    }

    #[must_use]
    pub fn gemini_api_key(&self) -> Option<&str> {
        self.gemini_api_key.as_deref()
    }

    #[must_use]
    pub fn gemini_model(&self) -> &str {
        &self.gemini_model
    }

    #[must_use]
    pub fn email_domain(&self) -> &str {
        &self.email_domain
    }

    #[must_use]
    pub fn placeholder_email(&self) -> &str {
        &self.placeholder_email
    }

    #[must_use]
    pub fn positive_keywords(&self) -> &[String] {
        &self.positive_keywords
    }

    #[must_use]
    pub fn negative_keywords(&self) -> &[String] {
        &self.negative_keywords
    }

    #[must_use]
    pub fn structured_entity_types(&self) -> &[String] {
        &self.structured_entity_types
    }
}
