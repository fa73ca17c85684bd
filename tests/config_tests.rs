//! Tests for the type-safe configuration builder.

use medscrape::config::HarvestConfig;
use std::path::Path;

#[test]
fn builder_requires_storage_dir_then_search_url() {
    // These must not compile - the typestate gates build():
    // let config = HarvestConfig::builder().build();
    // let config = HarvestConfig::builder().storage_dir("/tmp").build();

    let config = HarvestConfig::builder()
        .storage_dir("/tmp/harvest")
        .search_url("https://example.com/search?q={specialty}&loc={region}&page={page}")
        .build()
        .unwrap();

    assert_eq!(config.storage_dir(), Path::new("/tmp/harvest"));
    assert!(config.search_url().starts_with("https://example.com/search"));
}

#[test]
fn optional_fields_have_defaults() {
    let config = HarvestConfig::builder()
        .storage_dir("/tmp/harvest")
        .search_url("https://example.com/{specialty}/{region}/{page}")
        .build()
        .unwrap();

    assert_eq!(config.listings_per_group(), 5);
    assert_eq!(config.listing_delay_secs(), 3);
    assert_eq!(config.category_delay_secs(), 3);
    assert_eq!(config.region_delay_secs(), 5);
    assert_eq!(config.listing_wait_timeout_secs(), 20);
    assert_eq!(config.reveal_timeout_secs(), 10);
    assert_eq!(config.detail_wait_timeout_secs(), 15);
    assert!(config.headless());
    assert!(config.save_snapshots());
    assert_eq!(config.specialties().len(), 10);
    assert_eq!(config.localities(), ["Aundh", "Baner", "Wakad"]);
    assert_eq!(config.gemini_api_key(), None);
    assert_eq!(config.email_domain(), "gmail.com");
    assert_eq!(config.placeholder_email(), "doctor@gmail.com");
    assert_eq!(config.structured_entity_types(), ["Dentist"]);
}

#[test]
fn scheme_less_search_urls_are_normalized() {
    let config = HarvestConfig::builder()
        .storage_dir("/tmp/harvest")
        .search_url("example.com/search/{specialty}/{region}/{page}")
        .build()
        .unwrap();

    assert!(config.search_url().starts_with("https://example.com/"));
}

#[test]
fn site_root_is_derived_from_the_search_url() {
    let config = HarvestConfig::builder()
        .storage_dir("/tmp/harvest")
        .search_url("https://www.practo.com/search/doctors?q={specialty}&r={region}&page={page}")
        .build()
        .unwrap();

    assert_eq!(config.site_root(), "https://www.practo.com");
}

#[test]
fn explicit_site_root_wins_over_derivation() {
    let config = HarvestConfig::builder()
        .storage_dir("/tmp/harvest")
        .search_url("https://search.example.com/{specialty}/{region}/{page}")
        .site_root("https://profiles.example.com")
        .build()
        .unwrap();

    assert_eq!(config.site_root(), "https://profiles.example.com");
}

#[test]
fn zero_listings_per_group_is_rejected() {
    let result = HarvestConfig::builder()
        .storage_dir("/tmp/harvest")
        .search_url("https://example.com/{specialty}/{region}/{page}")
        .listings_per_group(0)
        .build();

    assert!(result.is_err());
}

#[test]
fn empty_vocabularies_are_rejected() {
    let result = HarvestConfig::builder()
        .storage_dir("/tmp/harvest")
        .search_url("https://example.com/{specialty}/{region}/{page}")
        .specialties(Vec::new())
        .build();
    assert!(result.is_err());

    let result = HarvestConfig::builder()
        .storage_dir("/tmp/harvest")
        .search_url("https://example.com/{specialty}/{region}/{page}")
        .localities(Vec::new())
        .build();
    assert!(result.is_err());
}

#[test]
fn builder_setters_override_defaults() {
    let config = HarvestConfig::builder()
        .storage_dir("/tmp/harvest")
        .search_url("https://example.com/{specialty}/{region}/{page}")
        .listings_per_group(2)
        .reveal_timeout_secs(4)
        .headless(false)
        .specialties(vec!["Dentist".into()])
        .localities(vec!["Kothrud".into()])
        .gemini_api_key(Some("key".into()))
        .build()
        .unwrap();

    assert_eq!(config.listings_per_group(), 2);
    assert_eq!(config.reveal_timeout_secs(), 4);
    assert!(!config.headless());
    assert_eq!(config.specialties(), ["Dentist"]);
    assert_eq!(config.localities(), ["Kothrud"]);
    assert_eq!(config.gemini_api_key(), Some("key"));
}

#[test]
fn config_round_trips_through_serde() {
    let config = HarvestConfig::builder()
        .storage_dir("/tmp/harvest")
        .search_url("https://example.com/{specialty}/{region}/{page}")
        .build()
        .unwrap();

    let json = serde_json::to_string(&config).unwrap();
    let restored: HarvestConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.search_url(), config.search_url());
    assert_eq!(restored.listings_per_group(), config.listings_per_group());
}
