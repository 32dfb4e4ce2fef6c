//! Keyword-based quality scoring for room recommendations.
//!
//! A recommendation is scored against a task's expected features plus three
//! fixed keyword families (room type, reasoning, budget). All checks are
//! case-insensitive substring tests. The weights and keyword lists are
//! example constants tuned for the demo inventory, not a calibrated metric.

use crate::tasks::RoomTask;

/// Weight of the expected-feature coverage component
const FEATURE_WEIGHT: f64 = 0.4;
/// Weight of each keyword-family component
const KEYWORD_WEIGHT: f64 = 0.2;

/// Words indicating a concrete room selection was made
const ROOM_TYPE_KEYWORDS: &[&str] = &["room", "suite", "deluxe", "standard", "penthouse", "business"];

/// Words indicating the recommendation explains itself
const REASONING_KEYWORDS: &[&str] = &["because", "since", "due to", "reason", "suitable", "ideal"];

/// Words indicating the recommendation addresses cost
const BUDGET_KEYWORDS: &[&str] = &["budget", "cost", "price", "$", "affordable", "expensive"];

/// Score a recommendation for a task, in [0, 1].
///
/// Sum of four independent checks: expected-feature coverage (0.4, ratio
/// capped at 1.0) plus 0.2 each for mentioning a room type, giving a
/// reason, and addressing budget. A task with no expected features scores
/// 0.0 outright.
pub fn evaluate(task: &RoomTask, recommendation: &str) -> f64 {
    if task.expected_features.is_empty() {
        return 0.0;
    }

    let text = recommendation.to_lowercase();
    let mut score = 0.0;

    let matched = task
        .expected_features
        .iter()
        .filter(|feature| text.contains(&feature.to_lowercase()))
        .count();
    let coverage = (matched as f64 / task.expected_features.len() as f64).min(1.0);
    score += coverage * FEATURE_WEIGHT;

    if contains_any(&text, ROOM_TYPE_KEYWORDS) {
        score += KEYWORD_WEIGHT;
    }

    if contains_any(&text, REASONING_KEYWORDS) {
        score += KEYWORD_WEIGHT;
    }

    if contains_any(&text, BUDGET_KEYWORDS) {
        score += KEYWORD_WEIGHT;
    }

    score.min(1.0)
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| text.contains(kw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task_with_features(features: &[&str]) -> RoomTask {
        RoomTask::new("test", "test task", "requirements", features)
    }

    #[test]
    fn test_full_match_scores_one() {
        let task = task_with_features(&["WiFi", "work desk", "quiet"]);
        let text = "The Business Room is ideal because it has WiFi, a work desk, \
                    and is quiet, all within your budget.";
        assert!((evaluate(&task, text) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_match_scores_zero() {
        let task = task_with_features(&["ocean view", "privacy"]);
        assert_eq!(evaluate(&task, "xyzzy"), 0.0);
    }

    #[test]
    fn test_empty_features_scores_zero() {
        let task = task_with_features(&[]);
        let text = "The Business Room is ideal because the budget fits.";
        assert_eq!(evaluate(&task, text), 0.0);
    }

    #[test]
    fn test_monotonic_in_feature_coverage() {
        let task = task_with_features(&["WiFi", "work desk", "quiet", "parking"]);

        let texts = [
            "nothing relevant here",
            "it has WiFi",
            "it has WiFi and a work desk",
            "it has WiFi, a work desk, and is quiet",
            "it has WiFi, a work desk, parking, and is quiet",
        ];

        let scores: Vec<f64> = texts.iter().map(|t| evaluate(&task, t)).collect();
        for pair in scores.windows(2) {
            assert!(
                pair[1] >= pair[0],
                "score decreased from {} to {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_case_insensitive_matching() {
        let task = task_with_features(&["WiFi"]);
        let lower = evaluate(&task, "free wifi in every ROOM");
        let upper = evaluate(&task, "free WIFI in every room");
        assert_eq!(lower, upper);
        assert!(lower > 0.0);
    }

    #[test]
    fn test_keyword_components_are_independent() {
        let task = task_with_features(&["sauna"]);

        // Room-type word only.
        let room_only = evaluate(&task, "take the suite");
        assert_eq!(room_only, 0.2);

        // Room type plus reasoning.
        let with_reason = evaluate(&task, "take the suite because it fits");
        assert_eq!(with_reason, 0.4);

        // All three keyword families, no features matched.
        let all_keywords = evaluate(&task, "take the suite because the price fits");
        assert!((all_keywords - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_spec_business_room_example() {
        let task = task_with_features(&["WiFi", "work desk", "quiet"]);
        let text = "I recommend the Business Room because it has WiFi, a work desk, \
                    and is quiet; budget fits at $200";
        assert!(evaluate(&task, text) >= 0.9);
    }

    #[test]
    fn test_score_never_exceeds_one() {
        let task = task_with_features(&["room", "budget", "because", "suite"]);
        let text = "room budget because suite deluxe penthouse cost price ideal suitable";
        assert!(evaluate(&task, text) <= 1.0);
    }
}
