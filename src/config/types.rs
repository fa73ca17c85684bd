//! Core configuration type for harvest runs.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::utils::constants::{
    DEFAULT_CARD_SELECTOR, DEFAULT_CATEGORY_DELAY_SECS, DEFAULT_DETAIL_WAIT_SECS,
    DEFAULT_EMAIL_DOMAIN, DEFAULT_GEMINI_MODEL, DEFAULT_LISTING_DELAY_SECS,
    DEFAULT_LISTING_WAIT_SECS, DEFAULT_LISTINGS_PER_GROUP, DEFAULT_LOCALITIES,
    DEFAULT_NEGATIVE_KEYWORDS, DEFAULT_OUTPUT_FILENAME, DEFAULT_PAGE_OPEN_TIMEOUT_SECS,
    DEFAULT_PLACEHOLDER_EMAIL, DEFAULT_POSITIVE_KEYWORDS, DEFAULT_REGION_DELAY_SECS,
    DEFAULT_REVEAL_WAIT_SECS, DEFAULT_SEARCH_URL, DEFAULT_SETTLE_MILLIS, DEFAULT_SPECIALTIES,
    DEFAULT_STRUCTURED_ENTITY_TYPES,
};

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

/// Configuration for one harvest run.
///
/// Construct through [`HarvestConfig::builder`]; the typestate builder
/// makes the storage directory and search URL compile-time required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarvestConfig {
    /// Snapshot and dataset directory. Created if missing.
    pub(crate) storage_dir: PathBuf,
    /// Search URL template with `{specialty}`, `{region}` and `{page}`
    /// placeholders.
    pub(crate) search_url: String,
    /// Origin used to absolutize relative detail links; derived from the
    /// search URL unless overridden.
    pub(crate) site_root: String,

    pub(crate) specialties: Vec<String>,
    pub(crate) localities: Vec<String>,
    pub(crate) listings_per_group: usize,
    pub(crate) card_selector: String,

    /// Fixed delays acting as a crude rate limiter.
    pub(crate) listing_delay_secs: u64,
    pub(crate) category_delay_secs: u64,
    pub(crate) region_delay_secs: u64,

    /// Bounded-wait timeouts.
    pub(crate) listing_wait_timeout_secs: u64,
    pub(crate) reveal_timeout_secs: u64,
    pub(crate) detail_wait_timeout_secs: u64,
    pub(crate) page_open_timeout_secs: u64,
    pub(crate) settle_millis: u64,

    pub(crate) headless: bool,
    pub(crate) save_snapshots: bool,
    pub(crate) output_filename: String,

    /// Summarization collaborator. Without a key every call fails over to
    /// the local heuristic.
    pub(crate) gemini_api_key: Option<String>,
    pub(crate) gemini_model: String,

    /// Email derivation.
    pub(crate) email_domain: String,
    pub(crate) placeholder_email: String,

    /// Heuristic-summary keyword lists; configuration, not contract.
    pub(crate) positive_keywords: Vec<String>,
    pub(crate) negative_keywords: Vec<String>,

    /// JSON-LD `@type` values accepted by the structured-metadata
    /// address fallback.
    pub(crate) structured_entity_types: Vec<String>,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from("./harvest"),
            search_url: DEFAULT_SEARCH_URL.to_string(),
            site_root: String::new(),
            specialties: owned(DEFAULT_SPECIALTIES),
            localities: owned(DEFAULT_LOCALITIES),
            listings_per_group: DEFAULT_LISTINGS_PER_GROUP,
            card_selector: DEFAULT_CARD_SELECTOR.to_string(),
            listing_delay_secs: DEFAULT_LISTING_DELAY_SECS,
            category_delay_secs: DEFAULT_CATEGORY_DELAY_SECS,
            region_delay_secs: DEFAULT_REGION_DELAY_SECS,
            listing_wait_timeout_secs: DEFAULT_LISTING_WAIT_SECS,
            reveal_timeout_secs: DEFAULT_REVEAL_WAIT_SECS,
            detail_wait_timeout_secs: DEFAULT_DETAIL_WAIT_SECS,
            page_open_timeout_secs: DEFAULT_PAGE_OPEN_TIMEOUT_SECS,
            settle_millis: DEFAULT_SETTLE_MILLIS,
            headless: true,
            save_snapshots: true,
            output_filename: DEFAULT_OUTPUT_FILENAME.to_string(),
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            email_domain: DEFAULT_EMAIL_DOMAIN.to_string(),
            placeholder_email: DEFAULT_PLACEHOLDER_EMAIL.to_string(),
            positive_keywords: owned(DEFAULT_POSITIVE_KEYWORDS),
            negative_keywords: owned(DEFAULT_NEGATIVE_KEYWORDS),
            structured_entity_types: owned(DEFAULT_STRUCTURED_ENTITY_TYPES),
        }
    }
}
