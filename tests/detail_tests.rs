//! Profile-link resolution heuristics over card fragments.

use medscrape::detail::profile_url;

const SITE_ROOT: &str = "https://www.practo.com";

#[test]
fn tagged_name_link_wins_over_generic_anchors() {
    let html = r#"
    <div>
      <a href="/ad/banner">sponsored</a>
      <h2 data-qa-id="doctor_name"><a href="/doctor/asha-singh">Dr. Asha Singh</a></h2>
      <a href="/doctor/other">other</a>
    </div>"#;
    assert_eq!(
        profile_url(html, SITE_ROOT),
        Some("/doctor/asha-singh".to_string())
    );
}

#[test]
fn href_pattern_fallback_applies_without_the_tagged_link() {
    let html = r#"<div><a href="/doctor/rohan-mehta">profile</a></div>"#;
    assert_eq!(
        profile_url(html, SITE_ROOT),
        Some("/doctor/rohan-mehta".to_string())
    );
}

#[test]
fn info_section_fallback_applies_next() {
    let html = r#"<div><div class="info-section"><a href="/profiles/123">view</a></div></div>"#;
    assert_eq!(profile_url(html, SITE_ROOT), Some("/profiles/123".to_string()));
}

#[test]
fn domain_scoped_fallback_is_last() {
    let html = r#"<div><a href="https://www.practo.com/clinics/9">clinic</a></div>"#;
    assert_eq!(
        profile_url(html, SITE_ROOT),
        Some("https://www.practo.com/clinics/9".to_string())
    );
}

#[test]
fn cards_without_usable_anchors_yield_none() {
    let html = r#"<div><a href="">empty</a><span>no links</span></div>"#;
    assert_eq!(profile_url(html, SITE_ROOT), None);
}
