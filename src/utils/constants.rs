//! Default values and shared constants for the harvester.
//!
//! Everything here is a default: the corresponding `HarvestConfig` fields
//! can override each value at build time.

/// Default search URL template for the directory's doctor search.
///
/// Placeholders `{specialty}`, `{region}` and `{page}` are substituted by
/// the listing navigator. The query string carries the site's own
/// pre-encoded JSON filter payload, so the template is stored verbatim
/// rather than rebuilt from parts.
pub const DEFAULT_SEARCH_URL: &str = "https://www.practo.com/search/doctors?results_type=doctor&q=%5B%7B%22word%22%3A%22{specialty}%22%2C%22autocompleted%22%3Atrue%2C%22category%22%3A%22subspeciality%22%7D%2C%7B%22word%22%3A%22{region}%22%2C%22autocompleted%22%3Atrue%2C%22category%22%3A%22locality%22%7D%5D&city=Pune&page={page}";

/// CSS selector identifying one listing card on a results page.
pub const DEFAULT_CARD_SELECTOR: &str = "div.u-border-general--bottom";

/// Default specialties to iterate when none are configured.
pub const DEFAULT_SPECIALTIES: &[&str] = &[
    "Cardiologist",
    "Dermatologist",
    "Neurologist",
    "Oncologist",
    "General Surgeon",
    "Orthopedic Surgeon",
    "Neurosurgeon",
    "Pediatrician",
    "Gynecologist",
    "Psychiatrist",
];

/// Default localities to iterate when none are configured.
pub const DEFAULT_LOCALITIES: &[&str] = &["Aundh", "Baner", "Wakad"];

/// Listings taken per specialty/locality combination.
pub const DEFAULT_LISTINGS_PER_GROUP: usize = 5;

/// Bounded wait for listing cards to materialize on a results page.
pub const DEFAULT_LISTING_WAIT_SECS: u64 = 20;

/// Bounded wait for a revealed contact value to appear after the click.
pub const DEFAULT_REVEAL_WAIT_SECS: u64 = 10;

/// Bounded wait for the address element on a detail page.
pub const DEFAULT_DETAIL_WAIT_SECS: u64 = 15;

/// Timeout for opening and loading a secondary detail page.
pub const DEFAULT_PAGE_OPEN_TIMEOUT_SECS: u64 = 30;

/// Pause after scrolling a reveal control into view, letting layout settle.
pub const DEFAULT_SETTLE_MILLIS: u64 = 2000;

/// Poll interval shared by all bounded element waits.
pub const POLL_INTERVAL_MILLIS: u64 = 200;

/// Fixed delays between listings, categories and regions.
///
/// These act as a crude rate limiter against the upstream site, not as a
/// correctness mechanism.
pub const DEFAULT_LISTING_DELAY_SECS: u64 = 3;
pub const DEFAULT_CATEGORY_DELAY_SECS: u64 = 3;
pub const DEFAULT_REGION_DELAY_SECS: u64 = 5;

/// Default name of the exported dataset inside the storage directory.
pub const DEFAULT_OUTPUT_FILENAME: &str = "doctors.csv";

/// Summarization model and endpoint.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Domain appended to derived contact emails, and the placeholder used
/// when no usable name was resolved.
pub const DEFAULT_EMAIL_DOMAIN: &str = "gmail.com";
pub const DEFAULT_PLACEHOLDER_EMAIL: &str = "doctor@gmail.com";

/// Keyword lists backing the local heuristic summary. These are a
/// placeholder-quality sentiment gauge and deliberately configurable.
pub const DEFAULT_POSITIVE_KEYWORDS: &[&str] = &[
    "good",
    "excellent",
    "great",
    "amazing",
    "satisfied",
    "recommend",
    "best",
    "professional",
    "caring",
    "gentle",
    "painless",
    "comfortable",
];

pub const DEFAULT_NEGATIVE_KEYWORDS: &[&str] = &[
    "bad",
    "poor",
    "terrible",
    "painful",
    "expensive",
    "rude",
    "unprofessional",
    "disappointed",
    "worst",
    "avoid",
];

/// JSON-LD `@type` values accepted by the structured-metadata address
/// fallback.
pub const DEFAULT_STRUCTURED_ENTITY_TYPES: &[&str] = &["Dentist"];

/// Chrome user agent string for the launched browser.
///
/// Updated: 2025-01-29 to Chrome 132 (current stable).
/// Chrome releases new stable versions ~every 4 weeks; refresh quarterly.
pub const CHROME_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.6834.160 Safari/537.36";
