//! The harvest engine: one sequential worker over every
//! specialty/locality combination.
//!
//! A listing is fully processed — simple fields, contact reveal, detail
//! visit, summary, snapshot — before the next one begins. Stage failures
//! degrade into empty values inside the assembler; a combination whose
//! results page never shows cards is skipped. Only browser launch and
//! primary-page navigation failures abort the run, and the session is
//! shut down before the error surfaces.

pub mod errors;

use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, info, warn};

pub use errors::{HarvestError, StageError};

use crate::assemble;
use crate::config::HarvestConfig;
use crate::export;
use crate::listing;
use crate::session::HarvestSession;
use crate::snapshot;
use crate::summarize::Summarize;

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct HarvestReport {
    /// Listings fully processed into records (before filtering).
    pub listings_processed: usize,
    /// Rows written to the dataset (after the completeness filter).
    pub records_exported: usize,
    pub output_path: PathBuf,
}

/// Drives one harvest run over the configured combinations.
pub struct Harvester<S> {
    config: HarvestConfig,
    summarizer: S,
}

impl<S: Summarize> Harvester<S> {
    #[must_use]
    pub fn new(config: HarvestConfig, summarizer: S) -> Self {
        Self { config, summarizer }
    }

    /// Run the full harvest: launch, iterate, export.
    ///
    /// Partially-built state is discarded when the loop aborts; the
    /// dataset is only written after every combination has been visited.
    pub async fn run(&self) -> Result<HarvestReport, HarvestError> {
        std::fs::create_dir_all(self.config.storage_dir())
            .map_err(|e| HarvestError::Config(format!("cannot create storage dir: {e}")))?;

        let session = HarvestSession::launch(&self.config).await?;

        let collected = self.collect(&session).await;
        // The session always comes down, whether the loop finished or not.
        session.shutdown().await;
        let records = collected?;

        let output_path = self
            .config
            .storage_dir()
            .join(self.config.output_filename());
        let exported = export::write_dataset(&records, &output_path)
            .map_err(|e| HarvestError::Export(format!("{e:#}")))?;

        info!(
            "harvest complete: {} listings processed, {} records exported",
            records.len(),
            exported
        );
        Ok(HarvestReport {
            listings_processed: records.len(),
            records_exported: exported,
            output_path,
        })
    }

    /// Iterate every locality and specialty, accumulating records.
    async fn collect(
        &self,
        session: &HarvestSession,
    ) -> Result<Vec<crate::record::Record>, HarvestError> {
        let config = &self.config;
        let mut records = Vec::new();

        for (region_idx, region) in config.localities().iter().enumerate() {
            for specialty in config.specialties() {
                info!("harvesting {specialty} in {region}");

                listing::load_listing_page(session, config, specialty, region).await?;

                let cards = listing::collect_cards(session, config).await;
                if cards.is_empty() {
                    warn!("no listings for {specialty} in {region}, skipping");
                    continue;
                }

                let take = config.listings_per_group().min(cards.len());
                for card in cards.into_iter().take(take) {
                    debug!("processing listing {} for {specialty}/{region}", card.index);

                    let record = assemble::assemble_record(
                        session,
                        &self.summarizer,
                        &card,
                        region,
                        config,
                    )
                    .await;

                    if config.save_snapshots()
                        && let Err(e) = snapshot::save_card_snapshot(
                            config.storage_dir(),
                            specialty,
                            region,
                            card.index,
                            &card.outer_html,
                        )
                        .await
                    {
                        warn!("snapshot failed for listing {}: {e:#}", card.index);
                    }

                    records.push(record);
                    tokio::time::sleep(Duration::from_secs(config.listing_delay_secs())).await;
                }

                tokio::time::sleep(Duration::from_secs(config.category_delay_secs())).await;
            }

            // No trailing pause after the final region.
            if region_idx + 1 < config.localities().len() {
                tokio::time::sleep(Duration::from_secs(config.region_delay_secs())).await;
            }
        }

        Ok(records)
    }
}
