//! Detail-page harvesting: profile link resolution, address extraction
//! and narrative-review collection.
//!
//! The profile link is resolved from the captured card fragment with the
//! same ordered-fallback technique as field resolution. Page work happens
//! inside the session's detail-page scope, so the primary context is
//! restored whatever happens here; any failure surfaces as an empty
//! address or an empty narrative set, never as a crawl-stopping error.

use std::time::Duration;

use chromiumoxide::Page;
use scraper::{Html, Selector};
use tracing::debug;
use url::Url;

use crate::config::HarvestConfig;
use crate::engine::StageError;
use crate::session::{HarvestSession, wait_for_element};

/// Address element on a detail page.
pub const ADDRESS_SELECTOR: &str = r#"[data-qa-id="clinic-address"]"#;

/// Narrative tiers, tried in order; a tier runs only when the previous
/// one yielded nothing.
pub const REVIEW_TEXT_SELECTOR: &str = r#"[data-qa-id="review-text"]"#;
pub const FEEDBACK_CONTENT_SELECTOR: &str = ".feedback_content";
pub const GENERIC_TEXT_SELECTOR: &str = "p, div, span";

/// Cap on narratives per detail visit.
pub const MAX_NARRATIVES: usize = 10;

/// Elements inspected by the broad-scan narrative tier.
const BROAD_SCAN_LIMIT: usize = 50;

/// Anchor-matching heuristics for the profile link, most specific first.
/// The final, domain-scoped heuristic is built at runtime from the
/// configured site root.
const PROFILE_LINK_STRATEGIES: &[&str] = &[
    r#"h2[data-qa-id="doctor_name"] a"#,
    r#"a[href*="/doctor/"]"#,
    ".info-section a",
    r#"a[href*="doctor"]"#,
];

/// Resolve the detail-page href from a card fragment.
///
/// Returns the raw href (possibly relative); the session absolutizes it
/// before opening. `None` means no heuristic matched.
#[must_use]
pub fn profile_url(outer_html: &str, site_root: &str) -> Option<String> {
    let fragment = Html::parse_fragment(outer_html);

    let domain_scoped = Url::parse(site_root)
        .ok()
        .and_then(|url| url.host_str().map(|host| host.trim_start_matches("www.").to_string()))
        .map(|domain| format!(r#"a[href*="{domain}"]"#));

    let strategies = PROFILE_LINK_STRATEGIES
        .iter()
        .map(|s| (*s).to_string())
        .chain(domain_scoped);

    for strategy in strategies {
        let Ok(selector) = Selector::parse(&strategy) else {
            continue;
        };
        if let Some(href) = fragment
            .select(&selector)
            .filter_map(|anchor| anchor.value().attr("href"))
            .map(str::trim)
            .find(|href| !href.is_empty())
        {
            return Some(href.to_string());
        }
    }
    None
}

/// Visit the detail page and extract the practitioner's address.
///
/// `Err(WaitTimeout)` means the page loaded but the address element never
/// appeared; `Err(Context)` means the visit itself failed. Either way the
/// caller records an empty address and moves on.
pub async fn harvest_address(
    session: &HarvestSession,
    url: &str,
    config: &HarvestConfig,
) -> Result<String, StageError> {
    let wait = Duration::from_secs(config.detail_wait_timeout_secs());
    let found = session
        .with_detail_page(url, |page| async move {
            match wait_for_element(&page, ADDRESS_SELECTOR, wait).await {
                Some(element) => {
                    let text = element.inner_text().await.ok().flatten().unwrap_or_default();
                    Ok(Some(text.trim().to_string()))
                }
                None => Ok(None),
            }
        })
        .await?;

    match found {
        Some(address) => Ok(address),
        None => Err(StageError::WaitTimeout("detail-page address".into())),
    }
}

/// Visit the detail page and collect up to [`MAX_NARRATIVES`] narrative
/// reviews through the three-tier fallback.
pub async fn harvest_narratives(
    session: &HarvestSession,
    url: &str,
    config: &HarvestConfig,
) -> Result<Vec<String>, StageError> {
    let wait = Duration::from_secs(config.detail_wait_timeout_secs());
    session
        .with_detail_page(url, |page| async move {
            // Give the page a chance to render its first review before the
            // tiers run; a miss here just means tier scans start earlier.
            let _ = wait_for_element(&page, REVIEW_TEXT_SELECTOR, wait / 3).await;

            let mut narratives = collect_tier(&page, REVIEW_TEXT_SELECTOR, 10).await;
            if narratives.is_empty() {
                narratives = collect_tier(&page, FEEDBACK_CONTENT_SELECTOR, 10).await;
            }
            if narratives.is_empty() {
                narratives = broad_scan(&page).await;
            }
            debug!("collected {} narratives", narratives.len());
            Ok(narratives)
        })
        .await
}

/// Collect texts longer than `min_len` from the first matches of
/// `selector`, up to [`MAX_NARRATIVES`].
async fn collect_tier(page: &Page, selector: &str, min_len: usize) -> Vec<String> {
    let mut texts = Vec::new();
    let Ok(elements) = page.find_elements(selector).await else {
        return texts;
    };
    for element in elements.into_iter().take(MAX_NARRATIVES) {
        if let Ok(Some(text)) = element.inner_text().await {
            let trimmed = text.trim();
            if trimmed.len() > min_len {
                texts.push(trimmed.to_string());
            }
        }
    }
    texts
}

/// Last-resort tier: scan the first generic text-bearing elements for
/// review-like prose.
async fn broad_scan(page: &Page) -> Vec<String> {
    let mut texts = Vec::new();
    let Ok(elements) = page.find_elements(GENERIC_TEXT_SELECTOR).await else {
        return texts;
    };
    for element in elements.into_iter().take(BROAD_SCAN_LIMIT) {
        if texts.len() >= MAX_NARRATIVES {
            break;
        }
        if let Ok(Some(text)) = element.inner_text().await {
            let trimmed = text.trim();
            let lowered = trimmed.to_lowercase();
            if trimmed.len() > 20
                && (lowered.contains("patient")
                    || lowered.contains("treatment")
                    || lowered.contains("doctor"))
            {
                texts.push(trimmed.to_string());
            }
        }
    }
    texts
}
