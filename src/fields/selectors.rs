//! Selector tables for listing-card field resolution.
//!
//! Each field owns an ordered list of lookups, tried first to last; the
//! data lives here so the upstream site's markup can be chased without
//! touching the resolution logic.

/// Tagged practitioner-name node, then the heading-style fallback.
pub const NAME_TAGGED: &str = r#"[data-qa-id="doctor_name"]"#;
pub const NAME_HEADING: &str = "h2.u-jumbo-font";

/// Short text fragments scanned against the specialty vocabulary.
pub const SPECIALTY_FRAGMENTS: &str = "span";

/// Block fragments scanned for the experience phrase.
pub const EXPERIENCE_BLOCKS: &str = "div";

/// Tagged clinic/hospital node, then clickable-style fragments.
pub const ORGANIZATION_TAGGED: &str = r#"[data-qa-id="doctor_clinic_name"]"#;
pub const ORGANIZATION_CLICKABLE: &str = "span.u-c-pointer";

/// Tagged recommendation node, then success-label styled fragments.
pub const RATING_TAGGED: &str = r#"[data-qa-id="doctor_recommendation"]"#;
pub const RATING_SUCCESS_LABEL: &str = "span.o-label--success";

/// Tagged feedback-count node, then underlined-style fragments.
pub const REVIEW_COUNT_TAGGED: &str = r#"[data-qa-id="total_feedback"]"#;
pub const REVIEW_COUNT_UNDERLINED: &str = "span.u-t-underline";

/// Tagged locality node, used only as the address fallback of last resort.
pub const LOCALITY_TAGGED: &str = r#"[data-qa-id="practice_locality"]"#;
