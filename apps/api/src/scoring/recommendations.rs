use serde::{Deserialize, Serialize};

use crate::scoring::heuristics::{ActionVerbReport, FormattingReport, SectionReport};
use crate::scoring::keywords::ScoreResult;

const KEYWORD_SCORE_THRESHOLD: u32 = 70;
const ACTION_VERB_SCORE_THRESHOLD: f64 = 60.0;
const MAX_SUGGESTED_KEYWORDS: usize = 5;

const ACTION_VERB_GUIDANCE: &str =
    r#"Replace weak phrases with action verbs like "achieved", "managed", "led""#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationType {
    Keywords,
    Formatting,
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationType,
    pub priority: Priority,
    pub title: String,
    pub description: String,
}

/// Turns the sub-assessments into an action list: keywords, then formatting, then verbs.
pub fn build_recommendations(
    basic: &ScoreResult,
    formatting: &FormattingReport,
    action_verbs: &ActionVerbReport,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if basic.score < KEYWORD_SCORE_THRESHOLD {
        let top_missing: Vec<&str> = basic
            .missing_keywords
            .iter()
            .take(MAX_SUGGESTED_KEYWORDS)
            .map(String::as_str)
            .collect();
        recommendations.push(Recommendation {
            kind: RecommendationType::Keywords,
            priority: Priority::High,
            title: "Add Missing Keywords".to_string(),
            description: format!("Include {} in your resume", top_missing.join(", ")),
        });
    }

    if !formatting.issues.is_empty() {
        recommendations.push(Recommendation {
            kind: RecommendationType::Formatting,
            priority: Priority::Medium,
            title: "Fix Formatting Issues".to_string(),
            description: formatting.issues.join("; "),
        });
    }

    if action_verbs.score < ACTION_VERB_SCORE_THRESHOLD {
        recommendations.push(Recommendation {
            kind: RecommendationType::Content,
            priority: Priority::High,
            title: "Use Stronger Action Verbs".to_string(),
            description: ACTION_VERB_GUIDANCE.to_string(),
        });
    }

    recommendations
}

/// Unweighted mean of the four sub-scores, rounded.
pub fn overall_health(
    basic: &ScoreResult,
    formatting: &FormattingReport,
    sections: &SectionReport,
    action_verbs: &ActionVerbReport,
) -> u32 {
    let sum = f64::from(basic.score)
        + f64::from(formatting.score)
        + sections.score
        + action_verbs.score;
    (sum / 4.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basic(score: u32, missing: &[&str]) -> ScoreResult {
        ScoreResult {
            score,
            matched_keywords: vec![],
            missing_keywords: missing.iter().map(|s| s.to_string()).collect(),
            total_job_keywords: missing.len(),
            resume_keywords: 0,
        }
    }

    fn formatting(issues: &[&str]) -> FormattingReport {
        FormattingReport {
            score: 100 - 20 * issues.len() as u32,
            issues: issues.iter().map(|s| s.to_string()).collect(),
            bullet_point_count: 0,
        }
    }

    fn verbs(score: f64) -> ActionVerbReport {
        ActionVerbReport {
            score,
            strong_verbs: 0,
            weak_verbs: 0,
        }
    }

    #[test]
    fn test_all_checks_fire_in_fixed_order() {
        let recs = build_recommendations(
            &basic(40, &["rust", "kafka"]),
            &formatting(&["a", "b"]),
            &verbs(10.0),
        );
        let kinds: Vec<_> = recs.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                RecommendationType::Keywords,
                RecommendationType::Formatting,
                RecommendationType::Content
            ]
        );
        assert_eq!(recs[0].priority, Priority::High);
        assert_eq!(recs[1].priority, Priority::Medium);
        assert_eq!(recs[1].description, "a; b");
    }

    #[test]
    fn test_keyword_recommendation_names_first_five_missing() {
        let recs = build_recommendations(
            &basic(10, &["a1", "b2", "c3", "d4", "e5", "f6"]),
            &formatting(&[]),
            &verbs(100.0),
        );
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].description, "Include a1, b2, c3, d4, e5 in your resume");
    }

    #[test]
    fn test_healthy_resume_gets_no_recommendations() {
        let recs = build_recommendations(&basic(70, &[]), &formatting(&[]), &verbs(60.0));
        assert!(recs.is_empty());
    }

    #[test]
    fn test_recommendation_serializes_type_field() {
        let recs = build_recommendations(&basic(0, &["rust"]), &formatting(&[]), &verbs(100.0));
        let json = serde_json::to_value(&recs[0]).unwrap();
        assert_eq!(json["type"], "keywords");
        assert_eq!(json["priority"], "high");
    }

    #[test]
    fn test_overall_health_is_rounded_mean() {
        let sections = SectionReport {
            score: 200.0 / 3.0,
            found_sections: vec![],
            missing_sections: vec![],
        };
        // (50 + 60 + 66.67 + 0) / 4 = 44.17
        let health = overall_health(
            &basic(50, &[]),
            &formatting(&["a", "b"]),
            &sections,
            &verbs(0.0),
        );
        assert_eq!(health, 44);
    }
}
