//! Listing navigation and card capture.
//!
//! Builds the search URL for one specialty/locality combination, drives
//! the primary page there and waits (bounded) for listing cards to
//! materialize. Each card is captured as an interaction handle plus a
//! frozen HTML fragment: the element stays usable for the contact reveal,
//! while field resolution and the raw snapshot read the fragment.

use tracing::{debug, warn};

use crate::config::HarvestConfig;
use crate::engine::HarvestError;
use crate::session::{HarvestSession, wait_for_elements};
use chromiumoxide::Element;
use std::time::Duration;

/// Returns the card's own outer HTML.
const OUTER_HTML_FN: &str = "function() { return this.outerHTML; }";

/// Returns the JSON-LD script bodies embedded beside the card; these carry
/// the structured metadata used as an address fallback.
const METADATA_SCRIPTS_FN: &str = r#"function() {
    const parent = this.parentElement;
    if (!parent) { return []; }
    return Array.from(parent.querySelectorAll('script[type="application/ld+json"]'))
        .map((node) => node.innerHTML);
}"#;

/// One directory entry as rendered on a results page. Ephemeral: valid
/// only while the primary page still shows the results it came from.
pub struct ListingCard {
    /// Position of the card on its results page.
    pub index: usize,
    /// Live handle for interactions (contact reveal).
    pub element: Element,
    /// Frozen markup fragment for pure field resolution and snapshots.
    pub outer_html: String,
    /// JSON-LD bodies found beside the card, for the address fallback.
    pub metadata_scripts: Vec<String>,
}

/// Substitute the template placeholders for one search-page request.
///
/// Spaces in the substituted values are percent-encoded; the rest of the
/// template is already encoded upstream.
#[must_use]
pub fn search_url(template: &str, specialty: &str, locality: &str, page: u32) -> String {
    template
        .replace("{specialty}", &specialty.replace(' ', "%20"))
        .replace("{region}", &locality.replace(' ', "%20"))
        .replace("{page}", &page.to_string())
}

/// Navigate the primary page to the results for one combination.
pub async fn load_listing_page(
    session: &HarvestSession,
    config: &HarvestConfig,
    specialty: &str,
    locality: &str,
) -> Result<(), HarvestError> {
    let url = search_url(config.search_url(), specialty, locality, 1);
    debug!("loading listing page: {url}");
    session.navigate_primary(&url).await
}

/// Wait (bounded) for listing cards and capture them.
///
/// An empty vector signals "no listings" — the navigator's timeout case.
/// Per-card capture failures are absorbed: a card whose markup cannot be
/// read is skipped rather than aborting the page.
pub async fn collect_cards(session: &HarvestSession, config: &HarvestConfig) -> Vec<ListingCard> {
    let wait = Duration::from_secs(config.listing_wait_timeout_secs());
    let elements = wait_for_elements(session.primary(), config.card_selector(), wait).await;
    if elements.is_empty() {
        warn!("no listing cards appeared within {}s", wait.as_secs());
        return Vec::new();
    }
    debug!("found {} listing cards", elements.len());

    let mut cards = Vec::with_capacity(elements.len());
    for (index, element) in elements.into_iter().enumerate() {
        let outer_html = match eval_string(&element, OUTER_HTML_FN).await {
            Some(html) if !html.is_empty() => html,
            _ => {
                warn!("skipping card {index}: could not capture its markup");
                continue;
            }
        };
        let metadata_scripts = eval_string_list(&element, METADATA_SCRIPTS_FN)
            .await
            .unwrap_or_default();

        cards.push(ListingCard {
            index,
            element,
            outer_html,
            metadata_scripts,
        });
    }
    cards
}

async fn eval_string(element: &Element, function: &str) -> Option<String> {
    let returned = element.call_js_fn(function, false).await.ok()?;
    returned
        .result
        .value
        .and_then(|value| value.as_str().map(str::to_string))
}

async fn eval_string_list(element: &Element, function: &str) -> Option<Vec<String>> {
    let returned = element.call_js_fn(function, false).await.ok()?;
    let value = returned.result.value?;
    serde_json::from_value(value).ok()
}

#[cfg(test)]
mod tests {
    use super::search_url;

    #[test]
    fn placeholders_are_substituted_and_spaces_encoded() {
        let url = search_url(
            "https://example.com/search?q={specialty}&loc={region}&page={page}",
            "General Surgeon",
            "Baner",
            1,
        );
        assert_eq!(
            url,
            "https://example.com/search?q=General%20Surgeon&loc=Baner&page=1"
        );
    }
}
