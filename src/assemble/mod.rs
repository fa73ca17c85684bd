//! Per-listing record assembly.
//!
//! Orchestrates field resolution, the contact reveal, detail-page
//! harvesting and summarization for one listing card, mutating a single
//! `Record` stage by stage. Every stage failure degrades to the
//! documented empty value; nothing here aborts the crawl.

use tracing::debug;

use crate::config::HarvestConfig;
use crate::detail;
use crate::fields;
use crate::listing::ListingCard;
use crate::record::Record;
use crate::reveal;
use crate::session::HarvestSession;
use crate::summarize::{self, Summarize};
use crate::utils::is_blank;

/// Derive a deterministic contact email from the practitioner's name.
///
/// Two or more name tokens concatenate first and last with a dot, a
/// single token stands alone; the fixed domain is appended and spaces,
/// hyphens and apostrophes are stripped. An absent or "Unknown" name
/// yields the configured placeholder.
#[must_use]
pub fn derive_email(name: &str, domain: &str, placeholder: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() || trimmed == fields::UNKNOWN {
        return placeholder.to_string();
    }

    let lowered = trimmed.to_lowercase();
    let tokens: Vec<&str> = lowered.split_whitespace().collect();
    let local = match tokens.as_slice() {
        [] => return placeholder.to_string(),
        [single] => (*single).to_string(),
        [first, .., last] => format!("{first}.{last}"),
    };

    format!("{local}@{domain}")
        .replace(' ', "")
        .replace('-', "")
        .replace('\'', "")
}

/// Extract an address from JSON-LD structured metadata embedded beside a
/// listing.
///
/// Only entities whose `@type` is in `entity_types` are considered. The
/// address parts (street, locality, region, postal code) are joined with
/// ", ", skipping empties. Unparseable scripts are skipped silently.
#[must_use]
pub fn address_from_structured_metadata(scripts: &[String], entity_types: &[String]) -> String {
    for script in scripts {
        let Ok(data) = serde_json::from_str::<serde_json::Value>(script) else {
            continue;
        };
        let matches_type = data
            .get("@type")
            .and_then(|t| t.as_str())
            .is_some_and(|t| entity_types.iter().any(|accepted| accepted == t));
        if !matches_type {
            continue;
        }
        let Some(address) = data.get("address").filter(|a| a.is_object()) else {
            continue;
        };

        let part = |key: &str| {
            address
                .get(key)
                .and_then(|v| v.as_str())
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };
        let parts: Vec<String> = [
            part("streetAddress"),
            part("addressLocality"),
            part("addressRegion"),
            part("postalCode"),
        ]
        .into_iter()
        .flatten()
        .collect();

        if !parts.is_empty() {
            return parts.join(", ");
        }
    }
    String::new()
}

/// Build one record from a listing card.
pub async fn assemble_record<S: Summarize>(
    session: &HarvestSession,
    summarizer: &S,
    card: &ListingCard,
    region: &str,
    config: &HarvestConfig,
) -> Record {
    // Simple fields come from the frozen fragment; the parse stays inside
    // this call so no DOM is held across an await.
    let resolved = fields::resolve_all(&card.outer_html);

    let mut record = Record {
        name: resolved.name,
        specialty: resolved.specialty,
        experience: resolved.experience,
        organization: resolved.organization,
        rating: resolved.rating,
        review_count: resolved.review_count,
        region: region.to_string(),
        ..Record::default()
    };

    let profile = detail::profile_url(&card.outer_html, config.site_root())
        .map(|href| session.absolutize(&href));

    // Address: detail page, then structured metadata, then card locality.
    if let Some(url) = profile.as_deref() {
        match detail::harvest_address(session, url, config).await {
            Ok(address) if !is_blank(&address) => record.address = address,
            Ok(_) => {}
            Err(e) => debug!(card = card.index, "detail address unavailable: {e}"),
        }
    }
    if is_blank(&record.address) {
        record.address = address_from_structured_metadata(
            &card.metadata_scripts,
            config.structured_entity_types(),
        );
    }
    if is_blank(&record.address) && !is_blank(&resolved.locality) {
        record.address = resolved.locality;
    }

    // Contact reveal; a failed reveal leaves the phone empty and the
    // completeness filter decides the record's fate later.
    match reveal::reveal_contact(session, card, config).await {
        Ok(phone) => record.phone = phone,
        Err(e) => debug!(card = card.index, "contact reveal failed: {e}"),
    }

    // Narratives and their summary.
    let narratives = match profile.as_deref() {
        Some(url) => match detail::harvest_narratives(session, url, config).await {
            Ok(narratives) => narratives,
            Err(e) => {
                debug!(card = card.index, "narrative harvest failed: {e}");
                Vec::new()
            }
        },
        None => Vec::new(),
    };
    record.narrative_summary = summarize::summarize_with_fallback(
        summarizer,
        &narratives,
        config.positive_keywords(),
        config.negative_keywords(),
    )
    .await;

    record.email = derive_email(
        &record.name,
        config.email_domain(),
        config.placeholder_email(),
    );

    record
}
