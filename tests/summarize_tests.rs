//! Summarization: heuristic templates, fallback wiring and the Gemini
//! client against a mock server.

use anyhow::{Result, anyhow};
use medscrape::summarize::{
    GeminiSummarizer, MAX_STORIES, NO_STORIES_SUMMARY, Summarize, keyword_summary,
    summarize_with_fallback,
};

fn keywords(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

fn default_positive() -> Vec<String> {
    keywords(&["good", "excellent", "caring"])
}

fn default_negative() -> Vec<String> {
    keywords(&["bad", "rude", "painful"])
}

#[test]
fn favorable_template_when_positive_dominates() {
    let stories = vec![
        "Excellent and caring doctor".to_string(),
        "Good experience overall".to_string(),
    ];
    let summary = keyword_summary(&stories, &default_positive(), &default_negative());
    assert!(summary.starts_with("Positive feedback with 3 positive mentions"));
    assert!(summary.ends_with("based on 2 patient reviews."));
}

#[test]
fn cautionary_template_when_negative_dominates() {
    let stories = vec!["Rude staff and painful procedure".to_string()];
    let summary = keyword_summary(&stories, &default_positive(), &default_negative());
    assert!(summary.starts_with("Mixed feedback with 2 concerns"));
    assert!(summary.contains("Consider with caution based on 1 patient reviews."));
}

#[test]
fn balanced_template_on_equal_counts() {
    let stories = vec!["Good doctor but rude reception".to_string()];
    let summary = keyword_summary(&stories, &default_positive(), &default_negative());
    assert!(summary.starts_with("Balanced feedback with 1 positive and 1 negative mentions."));
    assert!(summary.contains("Mixed recommendations from 1 patient reviews."));
}

#[test]
fn empty_story_set_yields_the_fixed_sentence() {
    let summary = keyword_summary(&[], &default_positive(), &default_negative());
    assert_eq!(summary, NO_STORIES_SUMMARY);
}

struct FailingSummarizer;

impl Summarize for FailingSummarizer {
    async fn summarize(&self, _stories: &[String]) -> Result<String> {
        Err(anyhow!("service unavailable"))
    }
}

struct CountingSummarizer;

impl Summarize for CountingSummarizer {
    async fn summarize(&self, stories: &[String]) -> Result<String> {
        Ok(format!("saw {} stories", stories.len()))
    }
}

#[tokio::test]
async fn collaborator_failure_degrades_to_the_heuristic() {
    let stories = vec!["Excellent doctor".to_string()];
    let summary = summarize_with_fallback(
        &FailingSummarizer,
        &stories,
        &default_positive(),
        &default_negative(),
    )
    .await;
    assert!(summary.starts_with("Positive feedback"));
}

#[tokio::test]
async fn collaborator_input_is_capped_at_ten_stories() {
    let stories: Vec<String> = (0..25).map(|i| format!("story {i}")).collect();
    let summary = summarize_with_fallback(
        &CountingSummarizer,
        &stories,
        &default_positive(),
        &default_negative(),
    )
    .await;
    assert_eq!(summary, format!("saw {MAX_STORIES} stories"));
}

#[tokio::test]
async fn empty_input_never_reaches_the_collaborator() {
    let summary = summarize_with_fallback(
        &FailingSummarizer,
        &[],
        &default_positive(),
        &default_negative(),
    )
    .await;
    assert_eq!(summary, NO_STORIES_SUMMARY);
}

#[tokio::test]
async fn gemini_client_parses_candidate_text() {
    let mut server = mockito::Server::new_async().await;
    let body = serde_json::json!({
        "candidates": [{
            "content": {
                "parts": [{ "text": "  Great doctor overall.\nRecommended.  " }]
            }
        }]
    });
    let mock = server
        .mock(
            "POST",
            "/v1beta/models/gemini-2.5-flash:generateContent?key=test-key",
        )
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await;

    let client = GeminiSummarizer::new(Some("test-key".into()), "gemini-2.5-flash")
        .with_endpoint(server.url());
    let summary = client
        .summarize(&["Nice experience".to_string()])
        .await
        .unwrap();

    assert_eq!(summary, "Great doctor overall.\nRecommended.");
    mock.assert_async().await;
}

#[tokio::test]
async fn gemini_client_surfaces_http_errors() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock(
            "POST",
            "/v1beta/models/gemini-2.5-flash:generateContent?key=test-key",
        )
        .with_status(500)
        .create_async()
        .await;

    let client = GeminiSummarizer::new(Some("test-key".into()), "gemini-2.5-flash")
        .with_endpoint(server.url());
    assert!(client.summarize(&["story".to_string()]).await.is_err());
}

#[tokio::test]
async fn gemini_client_fails_without_a_key() {
    let client = GeminiSummarizer::new(None, "gemini-2.5-flash");
    assert!(client.summarize(&["story".to_string()]).await.is_err());
}
