//! Resume-only heuristics: formatting, section presence and action verbs.

use serde::{Deserialize, Serialize};

const HEADER_FOOTER_ISSUE: &str = "Remove headers/footers for ATS compatibility";
const BULLET_ISSUE: &str = "Add more bullet points to highlight achievements";

const BULLET_MARKERS: &[char] = &['•', '-'];
const MIN_BULLET_LINES: usize = 3;
const PENALTY_PER_ISSUE: u32 = 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattingReport {
    pub score: u32,
    pub issues: Vec<String>,
    pub bullet_point_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionReport {
    pub score: f64,
    pub found_sections: Vec<String>,
    pub missing_sections: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionVerbReport {
    pub score: f64,
    pub strong_verbs: usize,
    pub weak_verbs: usize,
}

/// Flags page furniture and thin bullet usage. Each issue costs 20 points.
pub fn analyze_formatting(resume_text: &str) -> FormattingReport {
    let mut issues = Vec::new();

    // Case-sensitive on purpose: these are the literal labels word processors export.
    if resume_text.contains("Header") || resume_text.contains("Footer") {
        issues.push(HEADER_FOOTER_ISSUE.to_string());
    }

    let bullet_point_count = resume_text
        .lines()
        .filter(|line| line.trim().starts_with(BULLET_MARKERS))
        .count();
    if bullet_point_count < MIN_BULLET_LINES {
        issues.push(BULLET_ISSUE.to_string());
    }

    let penalty = PENALTY_PER_ISSUE.saturating_mul(issues.len() as u32);
    FormattingReport {
        score: 100u32.saturating_sub(penalty),
        issues,
        bullet_point_count,
    }
}

/// Checks that each required section name appears somewhere in the resume.
pub fn analyze_sections(resume_text: &str, required_sections: &[String]) -> SectionReport {
    let text_lower = resume_text.to_lowercase();
    let (found_sections, missing_sections): (Vec<String>, Vec<String>) = required_sections
        .iter()
        .cloned()
        .partition(|section| text_lower.contains(section.as_str()));

    let score = if required_sections.is_empty() {
        0.0
    } else {
        found_sections.len() as f64 / required_sections.len() as f64 * 100.0
    };

    SectionReport {
        score,
        found_sections,
        missing_sections,
    }
}

/// Rewards strong verbs and penalizes passive phrasing.
///
/// Each vocabulary entry counts once however often it occurs. The `+ 1` in
/// the denominator keeps a resume with neither kind of phrase at 0.
pub fn analyze_action_verbs(
    resume_text: &str,
    strong_verbs: &[String],
    weak_phrases: &[String],
) -> ActionVerbReport {
    let text_lower = resume_text.to_lowercase();
    let count_present = |phrases: &[String]| {
        phrases
            .iter()
            .filter(|p| text_lower.contains(p.as_str()))
            .count()
    };

    let strong = count_present(strong_verbs);
    let weak = count_present(weak_phrases);
    let score = (strong as f64 / (strong + weak + 1) as f64 * 100.0).min(100.0);

    ActionVerbReport {
        score,
        strong_verbs: strong,
        weak_verbs: weak,
    }
}
