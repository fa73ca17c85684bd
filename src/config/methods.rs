//! Builder methods available in every typestate.

use super::builder::HarvestConfigBuilder;

impl<State> HarvestConfigBuilder<State> {
    #[must_use]
    pub fn specialties(mut self, specialties: Vec<String>) -> Self {
        self.config.specialties = specialties;
        self
    }

    #[must_use]
    pub fn localities(mut self, localities: Vec<String>) -> Self {
        self.config.localities = localities;
        self
    }

    /// Listings taken per specialty/locality combination.
    #[must_use]
    pub fn listings_per_group(mut self, cap: usize) -> Self {
        self.config.listings_per_group = cap;
        self
    }

    #[must_use]
    pub fn card_selector(mut self, selector: impl Into<String>) -> Self {
        self.config.card_selector = selector.into();
        self
    }

    /// Override the site root used to absolutize relative detail links.
    /// By default it is derived from the search URL at build time.
    #[must_use]
    pub fn site_root(mut self, root: impl Into<String>) -> Self {
        self.config.site_root = root.into();
        self
    }

    #[must_use]
    pub fn listing_delay_secs(mut self, secs: u64) -> Self {
        self.config.listing_delay_secs = secs;
        self
    }

    #[must_use]
    pub fn category_delay_secs(mut self, secs: u64) -> Self {
        self.config.category_delay_secs = secs;
        self
    }

    #[must_use]
    pub fn region_delay_secs(mut self, secs: u64) -> Self {
        self.config.region_delay_secs = secs;
        self
    }

    #[must_use]
    pub fn listing_wait_timeout_secs(mut self, secs: u64) -> Self {
        self.config.listing_wait_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn reveal_timeout_secs(mut self, secs: u64) -> Self {
        self.config.reveal_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn detail_wait_timeout_secs(mut self, secs: u64) -> Self {
        self.config.detail_wait_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn page_open_timeout_secs(mut self, secs: u64) -> Self {
        self.config.page_open_timeout_secs = secs;
        self
    }

    /// Pause after scrolling a reveal control into view.
    #[must_use]
    pub fn settle_millis(mut self, millis: u64) -> Self {
        self.config.settle_millis = millis;
        self
    }

    /// Browser headless mode. Headed runs are useful when debugging the
    /// reveal interaction but need a display server.
    #[must_use]
    pub fn headless(mut self, headless: bool) -> Self {
        self.config.headless = headless;
        self
    }

    #[must_use]
    pub fn save_snapshots(mut self, save: bool) -> Self {
        self.config.save_snapshots = save;
        self
    }

    #[must_use]
    pub fn output_filename(mut self, filename: impl Into<String>) -> Self {
        self.config.output_filename = filename.into();
        self
    }

    /// Summarization-service credential. `None` keeps the collaborator
    /// disabled and every summary comes from the local heuristic.
    #[must_use]
    pub fn gemini_api_key(mut self, key: Option<String>) -> Self {
        self.config.gemini_api_key = key;
        self
    }

    #[must_use]
    pub fn gemini_model(mut self, model: impl Into<String>) -> Self {
        self.config.gemini_model = model.into();
        self
    }

    #[must_use]
    pub fn email_domain(mut self, domain: impl Into<String>) -> Self {
        self.config.email_domain = domain.into();
        self
    }

    #[must_use]
    pub fn placeholder_email(mut self, email: impl Into<String>) -> Self {
        self.config.placeholder_email = email.into();
        self
    }

    #[must_use]
    pub fn positive_keywords(mut self, keywords: Vec<String>) -> Self {
        self.config.positive_keywords = keywords;
        self
    }

    #[must_use]
    pub fn negative_keywords(mut self, keywords: Vec<String>) -> Self {
        self.config.negative_keywords = keywords;
        self
    }

    #[must_use]
    pub fn structured_entity_types(mut self, types: Vec<String>) -> Self {
        self.config.structured_entity_types = types;
        self
    }
}
