//! Keyword overlap between a resume and a job description.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Resumes shorter than this (in characters) are flagged in quick scans.
const MIN_RESUME_CHARS: usize = 500;
/// Fewer matches than this is reported as low keyword coverage.
const GOOD_COVERAGE_MATCHES: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub score: u32, // 0 – 100
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub total_job_keywords: usize,
    pub resume_keywords: usize,
}

impl ScoreResult {
    /// Share of the resume's keywords that the job description asks for, 0 – 100.
    pub fn keyword_density(&self) -> f64 {
        percentage(self.matched_keywords.len(), self.resume_keywords)
    }
}

/// Free-scan summary shown after an upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickScan {
    pub score: u32,
    pub top_issues: Vec<String>,
}

/// Compares two token sets. Matches keep resume order, gaps keep job order.
///
/// A job description without keywords scores 0.
pub fn score_tokens(resume_tokens: &[String], job_tokens: &[String]) -> ScoreResult {
    let job_set: HashSet<&str> = job_tokens.iter().map(String::as_str).collect();
    let resume_set: HashSet<&str> = resume_tokens.iter().map(String::as_str).collect();

    let matched_keywords: Vec<String> = resume_tokens
        .iter()
        .filter(|t| job_set.contains(t.as_str()))
        .cloned()
        .collect();
    let missing_keywords: Vec<String> = job_tokens
        .iter()
        .filter(|t| !resume_set.contains(t.as_str()))
        .cloned()
        .collect();

    let score = (percentage(matched_keywords.len(), job_tokens.len()).round() as u32).min(100);

    ScoreResult {
        score,
        matched_keywords,
        missing_keywords,
        total_job_keywords: job_tokens.len(),
        resume_keywords: resume_tokens.len(),
    }
}

/// Builds the three headline issues for a quick scan.
pub fn quick_scan_issues(result: &ScoreResult, resume_text: &str) -> Vec<String> {
    let matched = result.matched_keywords.len();
    vec![
        format!("Keyword Match: {}/{}", matched, result.total_job_keywords),
        if matched < GOOD_COVERAGE_MATCHES {
            "Low keyword density".to_string()
        } else {
            "Good keyword coverage".to_string()
        },
        if resume_text.chars().count() < MIN_RESUME_CHARS {
            "Resume too short".to_string()
        } else {
            "Adequate length".to_string()
        },
    ]
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}
