//! medscrape — browser-driven harvester for paginated medical-directory
//! listings.
//!
//! The pipeline per listing card: resolve simple fields through ordered
//! fallback strategies over the card's markup, reveal the contact number
//! through an interactive click ladder, visit the detail page in a
//! disposable secondary tab (primary crawl position is never lost),
//! summarize narrative reviews, and finally export only complete records
//! to CSV.

pub mod assemble;
pub mod browser_setup;
pub mod config;
pub mod detail;
pub mod engine;
pub mod export;
pub mod fields;
pub mod listing;
pub mod record;
pub mod reveal;
pub mod session;
pub mod snapshot;
pub mod summarize;
pub mod utils;

pub use config::HarvestConfig;
pub use engine::{HarvestError, HarvestReport, Harvester, StageError};
pub use record::{Record, filter_complete};
pub use session::HarvestSession;
pub use summarize::{GeminiSummarizer, Summarize};

/// Run a full harvest with the production summarization collaborator.
pub async fn harvest(config: HarvestConfig) -> Result<HarvestReport, HarvestError> {
    let summarizer = GeminiSummarizer::new(
        config.gemini_api_key().map(str::to_string),
        config.gemini_model(),
    );
    Harvester::new(config, summarizer).run().await
}
