//! Narrative-review summarization.
//!
//! The production path asks an external text-summarization service for a
//! two-line summary; any failure, timeout or empty response degrades to a
//! local keyword-count heuristic. Errors never propagate past this module.

pub mod gemini;
pub mod heuristic;

use anyhow::Result;
use tracing::warn;

pub use gemini::GeminiSummarizer;
pub use heuristic::keyword_summary;

/// Fixed sentence used when a listing yielded no narrative reviews at all.
pub const NO_STORIES_SUMMARY: &str = "No patient stories available for summary.";

/// At most this many narratives are handed to the collaborator.
pub const MAX_STORIES: usize = 10;

/// Seam for the summarization collaborator, so the engine and tests can
/// swap the external service for a local or failing implementation.
pub trait Summarize {
    fn summarize(
        &self,
        stories: &[String],
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Summarize up to [`MAX_STORIES`] narratives, degrading to the local
/// heuristic on collaborator failure or empty output.
pub async fn summarize_with_fallback<S: Summarize>(
    summarizer: &S,
    stories: &[String],
    positive_keywords: &[String],
    negative_keywords: &[String],
) -> String {
    if stories.is_empty() {
        return NO_STORIES_SUMMARY.to_string();
    }

    let capped = &stories[..stories.len().min(MAX_STORIES)];
    match summarizer.summarize(capped).await {
        Ok(summary) if !summary.trim().is_empty() => summary.trim().to_string(),
        Ok(_) => {
            warn!("summarization service returned an empty summary, using heuristic");
            keyword_summary(stories, positive_keywords, negative_keywords)
        }
        Err(e) => {
            warn!("summarization service failed: {e:#}, using heuristic");
            keyword_summary(stories, positive_keywords, negative_keywords)
        }
    }
}
