//! Layered field resolution over a captured listing-card fragment.
//!
//! Every logical field is resolved by an ordered chain of pure extraction
//! strategies over the card's HTML. The first strategy yielding a
//! non-empty trimmed value wins; there is no merging or scoring across
//! strategies. Strategy failures are silent and simply fall through, so a
//! total miss yields the field's named default ("Unknown" for name and
//! specialty, the empty string otherwise).
//!
//! Resolution is a pure read: the fragment is parsed once and never
//! mutated, which keeps the whole module testable without a browser.

pub mod selectors;
pub mod vocabulary;

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};

use selectors as sel;
use vocabulary::is_specialty;

/// Default value for fields whose miss is user-visible.
pub const UNKNOWN: &str = "Unknown";

static EXPERIENCE_COUNT: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"(\d+)\s*years experience").ok());

/// A parsed listing-card fragment. Owns the DOM for the duration of one
/// resolution pass and is dropped before any await point.
pub struct CardFragment {
    doc: Html,
}

impl CardFragment {
    /// Parse the card's outer HTML into a queryable fragment.
    #[must_use]
    pub fn parse(outer_html: &str) -> Self {
        Self {
            doc: Html::parse_fragment(outer_html),
        }
    }

    /// Trimmed text of the first element matching `selector`, if any.
    fn first_text(&self, selector: &str) -> Option<String> {
        let compiled = Selector::parse(selector).ok()?;
        let element = self.doc.select(&compiled).next()?;
        let text = element.text().collect::<String>();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// Trimmed texts of all elements matching `selector`, skipping blanks.
    fn all_texts(&self, selector: &str) -> Vec<String> {
        let Ok(compiled) = Selector::parse(selector) else {
            return Vec::new();
        };
        self.doc
            .select(&compiled)
            .map(|element| element.text().collect::<String>().trim().to_string())
            .filter(|text| !text.is_empty())
            .collect()
    }
}

/// The logical fields a listing card can yield.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Specialty,
    Experience,
    Organization,
    Rating,
    ReviewCount,
    Locality,
}

type Strategy = fn(&CardFragment) -> Option<String>;

/// Ordered strategy chain for one field. Position is precedence.
fn strategies(field: Field) -> &'static [Strategy] {
    match field {
        Field::Name => &[name_tagged, name_heading],
        Field::Specialty => &[specialty_vocabulary_scan],
        Field::Experience => &[experience_phrase],
        Field::Organization => &[organization_tagged, organization_clickable],
        Field::Rating => &[rating_tagged, rating_success_label],
        Field::ReviewCount => &[review_count_tagged, review_count_underlined],
        Field::Locality => &[locality_tagged],
    }
}

fn default_for(field: Field) -> String {
    match field {
        Field::Name | Field::Specialty => UNKNOWN.to_string(),
        _ => String::new(),
    }
}

/// Resolve one field from the fragment. Empty string (or the field's
/// named default) means every strategy missed.
#[must_use]
pub fn resolve(card: &CardFragment, field: Field) -> String {
    for strategy in strategies(field) {
        if let Some(value) = strategy(card) {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return trimmed.to_string();
            }
        }
    }
    default_for(field)
}

/// Every simple field of one card, resolved in a single pass.
///
/// Exists so callers can parse, resolve and drop the fragment without
/// holding the DOM across an await point.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedFields {
    pub name: String,
    pub specialty: String,
    pub experience: String,
    pub organization: String,
    pub rating: String,
    pub review_count: String,
    pub locality: String,
}

/// Parse `outer_html` and resolve all simple fields at once.
#[must_use]
pub fn resolve_all(outer_html: &str) -> ResolvedFields {
    let card = CardFragment::parse(outer_html);
    ResolvedFields {
        name: resolve(&card, Field::Name),
        specialty: resolve(&card, Field::Specialty),
        experience: resolve(&card, Field::Experience),
        organization: resolve(&card, Field::Organization),
        rating: resolve(&card, Field::Rating),
        review_count: resolve(&card, Field::ReviewCount),
        locality: resolve(&card, Field::Locality),
    }
}

fn name_tagged(card: &CardFragment) -> Option<String> {
    card.first_text(sel::NAME_TAGGED)
}

fn name_heading(card: &CardFragment) -> Option<String> {
    card.first_text(sel::NAME_HEADING)
}

fn specialty_vocabulary_scan(card: &CardFragment) -> Option<String> {
    card.all_texts(sel::SPECIALTY_FRAGMENTS)
        .into_iter()
        .find(|text| is_specialty(text))
}

/// First block mentioning the experience phrase. A leading count is
/// normalized to "`<N>` years"; without one the raw matched text passes
/// through unchanged.
fn experience_phrase(card: &CardFragment) -> Option<String> {
    let block = card
        .all_texts(sel::EXPERIENCE_BLOCKS)
        .into_iter()
        .find(|text| text.to_lowercase().contains("years experience"))?;
    let lowered = block.to_lowercase();
    if let Some(captures) = EXPERIENCE_COUNT.as_ref().and_then(|re| re.captures(&lowered)) {
        Some(format!("{} years", &captures[1]))
    } else {
        Some(block)
    }
}

fn organization_tagged(card: &CardFragment) -> Option<String> {
    card.first_text(sel::ORGANIZATION_TAGGED)
}

/// First short, non-numeric clickable-style fragment longer than 3 chars.
fn organization_clickable(card: &CardFragment) -> Option<String> {
    card.all_texts(sel::ORGANIZATION_CLICKABLE)
        .into_iter()
        .find(|text| !text.chars().all(|c| c.is_ascii_digit()) && text.len() > 3)
}

fn rating_tagged(card: &CardFragment) -> Option<String> {
    card.first_text(sel::RATING_TAGGED)
}

fn rating_success_label(card: &CardFragment) -> Option<String> {
    card.all_texts(sel::RATING_SUCCESS_LABEL)
        .into_iter()
        .find(|text| text.contains('%'))
}

fn review_count_tagged(card: &CardFragment) -> Option<String> {
    card.first_text(sel::REVIEW_COUNT_TAGGED)
}

fn review_count_underlined(card: &CardFragment) -> Option<String> {
    card.all_texts(sel::REVIEW_COUNT_UNDERLINED)
        .into_iter()
        .find(|text| {
            let lowered = text.to_lowercase();
            lowered.contains("patient") || lowered.contains("stories")
        })
}

fn locality_tagged(card: &CardFragment) -> Option<String> {
    card.first_text(sel::LOCALITY_TAGGED)
}
