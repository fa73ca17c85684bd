//! Error types for the harvest engine.
//!
//! `StageError` carries the per-stage failure taxonomy: every variant is
//! recoverable by design (next strategy, next ladder tier, empty value,
//! forced context restoration, or the heuristic fallback) and the record
//! assembler converts each into the documented degraded value.
//! `HarvestError` is the only error that escapes the engine, and only
//! from the outermost loop.

use thiserror::Error;

/// A recoverable failure inside one extraction stage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StageError {
    /// No extraction strategy matched. Recovered by the next strategy or
    /// the field's named default.
    #[error("no extraction strategy matched")]
    ResolutionMiss,

    /// An interaction attempt failed. Recovered by the next ladder tier;
    /// terminal only after all tiers fail.
    #[error("interaction failed: {0}")]
    Interaction(String),

    /// An expected element never appeared within its bounded wait.
    /// Recovered as an empty value.
    #[error("timed out waiting for {0}")]
    WaitTimeout(String),

    /// Opening or switching a secondary browsing context failed. The
    /// primary context has already been forcibly restored.
    #[error("browsing-context failure: {0}")]
    Context(String),

    /// The external collaborator failed; the local fallback applies.
    #[error("collaborator failure: {0}")]
    Collaborator(String),
}

/// Fatal error terminating the harvest as a whole.
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("browser error: {0}")]
    Browser(String),

    #[error("navigation error: {0}")]
    Navigation(String),

    #[error("export error: {0}")]
    Export(String),

    #[error("harvest error: {0}")]
    Other(String),
}

impl From<anyhow::Error> for HarvestError {
    fn from(err: anyhow::Error) -> Self {
        // {:#} preserves the full context chain
        Self::Other(format!("{err:#}"))
    }
}
