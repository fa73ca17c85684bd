//! Canonical specialty vocabulary.
//!
//! A card fragment's short text is accepted as a specialty when its
//! lowercased form appears here. The table mixes practitioner titles,
//! discipline names and common synonyms because the upstream site is not
//! consistent about which one a card shows.

pub const SPECIALTY_VOCABULARY: &[&str] = &[
    "cardiologist",
    "cardiology",
    "heart",
    "dermatologist",
    "dermatology",
    "skin",
    "neurologist",
    "neurology",
    "brain",
    "oncologist",
    "oncology",
    "cancer",
    "general surgeon",
    "surgery",
    "orthopedic surgeon",
    "orthopedics",
    "orthopaedic",
    "neurosurgeon",
    "neurosurgery",
    "pediatrician",
    "pediatrics",
    "paediatrician",
    "paediatrics",
    "gynecologist",
    "gynecology",
    "gynaecologist",
    "gynaecology",
    "obstetrics",
    "psychiatrist",
    "psychiatry",
    "mental health",
    "dentist",
    "dental",
    "orthodontist",
    "endodontist",
    "periodontist",
];

/// True when the lowercased text is a known specialty.
#[must_use]
pub fn is_specialty(text: &str) -> bool {
    let lowered = text.to_lowercase();
    SPECIALTY_VOCABULARY.contains(&lowered.as_str())
}
