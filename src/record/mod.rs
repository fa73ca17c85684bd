//! The output record schema and the completeness filter.
//!
//! A `Record` is built mutably by the assembler, one per listing, and
//! becomes effectively immutable afterwards. The completeness filter is
//! the only gate between the accumulated record set and the exported
//! dataset: records missing any required field are dropped, everything
//! else passes through in its original order.

use serde::{Deserialize, Serialize};

use crate::utils::is_blank;

/// Fixed column order of the exported dataset. Additional fields captured
/// in `Record::extras` are appended after these, in stable first-seen
/// order across the record set.
pub const COLUMN_ORDER: [&str; 11] = [
    "address",
    "name",
    "specialty",
    "region",
    "organization",
    "experience",
    "phone",
    "email",
    "rating",
    "review_count",
    "narrative_summary",
];

/// One harvested practitioner record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub address: String,
    pub name: String,
    pub specialty: String,
    pub region: String,
    pub organization: String,
    /// Normalized to "`<N>` years" when a leading count was found.
    pub experience: String,
    /// At least 10 characters when present; empty when the reveal failed.
    pub phone: String,
    /// Derived deterministically from the name.
    pub email: String,
    pub rating: String,
    pub review_count: String,
    pub narrative_summary: String,
    /// Fields outside the fixed schema, in first-seen order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extras: Vec<(String, String)>,
}

impl Record {
    /// Whether the record satisfies the completeness invariant:
    /// address, name, specialty and phone all non-blank after trimming.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !is_blank(&self.address)
            && !is_blank(&self.name)
            && !is_blank(&self.specialty)
            && !is_blank(&self.phone)
    }

    /// Value of a fixed column by name, for export.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&str> {
        match name {
            "address" => Some(&self.address),
            "name" => Some(&self.name),
            "specialty" => Some(&self.specialty),
            "region" => Some(&self.region),
            "organization" => Some(&self.organization),
            "experience" => Some(&self.experience),
            "phone" => Some(&self.phone),
            "email" => Some(&self.email),
            "rating" => Some(&self.rating),
            "review_count" => Some(&self.review_count),
            "narrative_summary" => Some(&self.narrative_summary),
            _ => None,
        }
    }

    /// Value of an extra column by key.
    #[must_use]
    pub fn extra(&self, key: &str) -> Option<&str> {
        self.extras
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Keep exactly the complete records, preserving their order.
///
/// Filtering an already-filtered set is a no-op.
#[must_use]
pub fn filter_complete(records: Vec<Record>) -> Vec<Record> {
    records.into_iter().filter(Record::is_complete).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> Record {
        Record {
            address: "12 MG Rd, Pune".into(),
            name: "Asha Singh".into(),
            specialty: "Cardiologist".into(),
            phone: "09876543210".into(),
            ..Record::default()
        }
    }

    #[test]
    fn whitespace_only_required_field_is_incomplete() {
        let mut record = complete();
        record.phone = "   ".into();
        assert!(!record.is_complete());
    }

    #[test]
    fn optional_fields_do_not_gate_completeness() {
        let record = complete();
        assert!(record.rating.is_empty());
        assert!(record.is_complete());
    }
}
