//! Email derivation and the structured-metadata address fallback.

use medscrape::assemble::{address_from_structured_metadata, derive_email};

const DOMAIN: &str = "gmail.com";
const PLACEHOLDER: &str = "doctor@gmail.com";

fn types(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

#[test]
fn email_joins_first_and_last_name_tokens() {
    assert_eq!(
        derive_email("Asha Singh", DOMAIN, PLACEHOLDER),
        "asha.singh@gmail.com"
    );
}

#[test]
fn email_skips_middle_tokens() {
    assert_eq!(
        derive_email("Dr. Asha Kumari Singh", DOMAIN, PLACEHOLDER),
        "dr..singh@gmail.com"
    );
}

#[test]
fn single_token_names_stand_alone() {
    assert_eq!(derive_email("Asha", DOMAIN, PLACEHOLDER), "asha@gmail.com");
}

#[test]
fn hyphens_and_apostrophes_are_stripped() {
    assert_eq!(
        derive_email("Mary O'Brien-Smith", DOMAIN, PLACEHOLDER),
        "mary.obriensmith@gmail.com"
    );
}

#[test]
fn unknown_or_empty_names_use_the_placeholder() {
    assert_eq!(derive_email("Unknown", DOMAIN, PLACEHOLDER), PLACEHOLDER);
    assert_eq!(derive_email("", DOMAIN, PLACEHOLDER), PLACEHOLDER);
    assert_eq!(derive_email("   ", DOMAIN, PLACEHOLDER), PLACEHOLDER);
}

#[test]
fn structured_metadata_joins_address_parts() {
    let scripts = vec![
        r#"{"@type":"Dentist","address":{"streetAddress":"12 MG Rd","addressLocality":"Pune"}}"#
            .to_string(),
    ];
    assert_eq!(
        address_from_structured_metadata(&scripts, &types(&["Dentist"])),
        "12 MG Rd, Pune"
    );
}

#[test]
fn structured_metadata_includes_region_and_postal_code() {
    let scripts = vec![
        r#"{"@type":"Dentist","address":{"streetAddress":"12 MG Rd","addressLocality":"Pune","addressRegion":"MH","postalCode":"411001"}}"#
            .to_string(),
    ];
    assert_eq!(
        address_from_structured_metadata(&scripts, &types(&["Dentist"])),
        "12 MG Rd, Pune, MH, 411001"
    );
}

#[test]
fn entities_of_other_types_are_ignored() {
    let scripts = vec![
        r#"{"@type":"Restaurant","address":{"streetAddress":"1 Food St"}}"#.to_string(),
    ];
    assert_eq!(
        address_from_structured_metadata(&scripts, &types(&["Dentist"])),
        ""
    );
}

#[test]
fn unparseable_scripts_are_skipped_silently() {
    let scripts = vec![
        "not json at all".to_string(),
        r#"{"@type":"Dentist","address":{"streetAddress":"12 MG Rd"}}"#.to_string(),
    ];
    assert_eq!(
        address_from_structured_metadata(&scripts, &types(&["Dentist"])),
        "12 MG Rd"
    );
}

#[test]
fn empty_address_parts_are_dropped_from_the_join() {
    let scripts = vec![
        r#"{"@type":"Dentist","address":{"streetAddress":"","addressLocality":"Pune"}}"#
            .to_string(),
    ];
    assert_eq!(
        address_from_structured_metadata(&scripts, &types(&["Dentist"])),
        "Pune"
    );
}
