//! Local fallback summary from keyword counts.
//!
//! Counts how many positive and negative keywords appear across the
//! narratives (one hit per keyword per story) and emits a two-sentence
//! templated summary. Strictly more positive hits picks the favorable
//! template, strictly more negative the cautionary one, a tie the
//! balanced one. The keyword lists are configuration, not contract.

use super::NO_STORIES_SUMMARY;

/// Count keyword presences across all stories. A keyword occurring
/// multiple times within one story still counts once for that story.
fn count_hits(stories: &[String], keywords: &[String]) -> usize {
    let mut hits = 0;
    for story in stories {
        let lowered = story.to_lowercase();
        for keyword in keywords {
            if lowered.contains(keyword.as_str()) {
                hits += 1;
            }
        }
    }
    hits
}

/// Build the two-sentence heuristic summary.
#[must_use]
pub fn keyword_summary(stories: &[String], positive: &[String], negative: &[String]) -> String {
    if stories.is_empty() {
        return NO_STORIES_SUMMARY.to_string();
    }

    let positive_count = count_hits(stories, positive);
    let negative_count = count_hits(stories, negative);
    let total = stories.len();

    let (line1, line2) = if positive_count > negative_count {
        (
            format!(
                "Positive feedback with {positive_count} positive mentions including professional care and patient satisfaction."
            ),
            format!("Overall recommended based on {total} patient reviews."),
        )
    } else if negative_count > positive_count {
        (
            format!("Mixed feedback with {negative_count} concerns mentioned by patients."),
            format!("Consider with caution based on {total} patient reviews."),
        )
    } else {
        (
            format!(
                "Balanced feedback with {positive_count} positive and {negative_count} negative mentions."
            ),
            format!("Mixed recommendations from {total} patient reviews."),
        )
    };

    format!("{line1}\n{line2}")
}
