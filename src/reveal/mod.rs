//! The interactive "reveal contact" state machine.
//!
//! One invocation walks `Idle -> Triggered -> {Revealed | Failed}` for a
//! single card and never retries; retrying is the caller's decision per
//! listing. Triggering climbs a ladder of click strategies — direct
//! interaction, scripted `this.click()`, synthetic pointer move-and-click
//! — stopping at the first one that completes without an interaction
//! error. After the trigger, a bounded wait watches for the revealed
//! value element; with several present the most recently appeared one
//! wins. A value shorter than [`MIN_REVEALED_LEN`] fails validation even
//! though an element appeared.

use std::time::{Duration, Instant};

use anyhow::Result;
use chromiumoxide::{Element, Page};
use tracing::{debug, trace};

use crate::config::HarvestConfig;
use crate::engine::StageError;
use crate::listing::ListingCard;
use crate::session::HarvestSession;
use crate::utils::constants::POLL_INTERVAL_MILLIS;

/// The interactive element that must be triggered before the contact
/// value becomes visible.
pub const REVEAL_CONTROL_SELECTOR: &str = r#"[data-qa-id="call_button"]"#;

/// Element carrying the revealed contact value.
pub const REVEALED_VALUE_SELECTOR: &str = r#"[data-qa-id="phone_number"]"#;

/// Minimum length of a plausible revealed contact value.
pub const MIN_REVEALED_LEN: usize = 10;

const SCRIPTED_CLICK_FN: &str = "function() { this.click(); }";

/// States of one reveal invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Idle,
    Triggered,
    Revealed,
    Failed,
}

/// Validate a revealed value: non-empty and at least
/// [`MIN_REVEALED_LEN`] characters after trimming.
#[must_use]
pub fn validate_revealed(text: &str) -> bool {
    let trimmed = text.trim();
    !trimmed.is_empty() && trimmed.len() >= MIN_REVEALED_LEN
}

/// Run the reveal state machine for one card.
///
/// `Ok` carries the validated contact value; every `Err` corresponds to
/// the `Failed` terminal state and the caller records an empty value.
pub async fn reveal_contact(
    session: &HarvestSession,
    card: &ListingCard,
    config: &HarvestConfig,
) -> Result<String, StageError> {
    let mut state = RevealState::Idle;
    trace!(card = card.index, ?state, "reveal starting");

    let Ok(control) = card.element.find_element(REVEAL_CONTROL_SELECTOR).await else {
        debug!(card = card.index, "no reveal control on card");
        return Err(StageError::ResolutionMiss);
    };

    // Let layout settle before interacting; the control may still be
    // animating into position.
    if let Err(e) = control.scroll_into_view().await {
        debug!(card = card.index, "scroll into view failed: {e}");
    }
    tokio::time::sleep(Duration::from_millis(config.settle_millis())).await;

    climb_click_ladder(session.primary(), &control)
        .await
        .map_err(|e| StageError::Interaction(format!("{e:#}")))?;
    state = RevealState::Triggered;
    trace!(card = card.index, ?state, "reveal triggered");

    let wait = Duration::from_secs(config.reveal_timeout_secs());
    let value = match await_revealed_value(session.primary(), wait).await {
        Some(value) => value,
        None => {
            state = RevealState::Failed;
            trace!(card = card.index, ?state, "revealed value never appeared");
            return Err(StageError::WaitTimeout("revealed contact value".into()));
        }
    };

    if validate_revealed(&value) {
        state = RevealState::Revealed;
        trace!(card = card.index, ?state, "reveal complete");
        Ok(value.trim().to_string())
    } else {
        state = RevealState::Failed;
        trace!(card = card.index, ?state, "revealed value rejected");
        Err(StageError::Interaction(format!(
            "revealed value rejected: {} chars",
            value.trim().len()
        )))
    }
}

/// Try each click strategy in order, stopping at the first that completes.
async fn climb_click_ladder(page: &Page, control: &Element) -> Result<()> {
    match control.click().await {
        Ok(_) => return Ok(()),
        Err(e) => debug!("direct click failed: {e}"),
    }

    match control.call_js_fn(SCRIPTED_CLICK_FN, false).await {
        Ok(_) => return Ok(()),
        Err(e) => debug!("scripted click failed: {e}"),
    }

    synthetic_pointer_click(page, control).await
}

/// Last ladder tier: move the pointer to the control's clickable point
/// and click there, bypassing element-level interception.
async fn synthetic_pointer_click(page: &Page, control: &Element) -> Result<()> {
    let point = control.clickable_point().await?;
    page.move_mouse(point).await?;
    page.click(point).await?;
    Ok(())
}

/// Bounded wait for the revealed value. When several value elements
/// exist, the last one in document order is the most recently appended.
async fn await_revealed_value(page: &Page, wait: Duration) -> Option<String> {
    let start = Instant::now();
    let poll = Duration::from_millis(POLL_INTERVAL_MILLIS);
    loop {
        if let Ok(elements) = page.find_elements(REVEALED_VALUE_SELECTOR).await
            && let Some(latest) = elements.last()
            && let Ok(Some(text)) = latest.inner_text().await
            && !text.trim().is_empty()
        {
            return Some(text);
        }
        if start.elapsed() >= wait {
            return None;
        }
        tokio::time::sleep(poll).await;
    }
}

#[cfg(test)]
mod tests {
    use super::validate_revealed;

    #[test]
    fn short_values_are_rejected_even_when_present() {
        assert!(!validate_revealed("123456789"));
        assert!(!validate_revealed("   "));
        assert!(!validate_revealed(""));
    }

    #[test]
    fn plausible_numbers_pass() {
        assert!(validate_revealed("020 4567 8901"));
        assert!(validate_revealed("+91 98765 43210"));
    }
}
