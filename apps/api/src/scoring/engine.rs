use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::scoring::heuristics::{
    analyze_action_verbs, analyze_formatting, analyze_sections, ActionVerbReport,
    FormattingReport, SectionReport,
};
use crate::scoring::keywords::{quick_scan_issues, score_tokens, QuickScan, ScoreResult};
use crate::scoring::recommendations::{build_recommendations, overall_health, Recommendation};
use crate::scoring::tokenizer::tokenize;
use crate::scoring::vocabulary::Vocabulary;
use crate::scoring::ScoringError;

/// How much of the engine a request runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisDepth {
    /// Keyword overlap only.
    #[default]
    Basic,
    /// Keyword overlap plus formatting, section and action-verb heuristics.
    Detailed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedAnalysis {
    #[serde(flatten)]
    pub basic: ScoreResult,
    pub keyword_density: f64,
    pub formatting: FormattingReport,
    pub sections: SectionReport,
    pub action_verbs: ActionVerbReport,
    pub recommendations: Vec<Recommendation>,
    pub overall_health: u32,
}

/// Result of [`AtsEngine::analyze`]; serializes as the bare inner report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Analysis {
    Basic(ScoreResult),
    Detailed(Box<DetailedAnalysis>),
}

/// Stateless scorer over an immutable vocabulary. Cheap to share behind an `Arc`.
#[derive(Debug, Clone)]
pub struct AtsEngine {
    vocabulary: Vocabulary,
    stopwords: HashSet<String>,
}

impl Default for AtsEngine {
    fn default() -> Self {
        Self::new(Vocabulary::default())
    }
}

impl AtsEngine {
    pub fn new(vocabulary: Vocabulary) -> Self {
        let vocabulary = vocabulary.normalized();
        let stopwords = vocabulary.stopwords.iter().cloned().collect();
        Self {
            vocabulary,
            stopwords,
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        tokenize(text, &self.stopwords)
    }

    pub fn analyze(
        &self,
        resume_text: &str,
        job_description: &str,
        depth: AnalysisDepth,
    ) -> Result<Analysis, ScoringError> {
        require("resumeText", resume_text)?;
        require("jobDescription", job_description)?;

        let basic = self.keyword_score(resume_text, job_description);
        debug!(
            ?depth,
            score = basic.score,
            job_keywords = basic.total_job_keywords,
            "Keyword score computed"
        );

        Ok(match depth {
            AnalysisDepth::Basic => Analysis::Basic(basic),
            AnalysisDepth::Detailed => {
                Analysis::Detailed(Box::new(self.detail(resume_text, basic)))
            }
        })
    }

    pub fn score_resume_against_job(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<ScoreResult, ScoringError> {
        match self.analyze(resume_text, job_description, AnalysisDepth::Basic)? {
            Analysis::Basic(result) => Ok(result),
            Analysis::Detailed(detailed) => Ok(detailed.basic),
        }
    }

    pub fn detailed_analysis(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<DetailedAnalysis, ScoringError> {
        match self.analyze(resume_text, job_description, AnalysisDepth::Detailed)? {
            Analysis::Detailed(detailed) => Ok(*detailed),
            Analysis::Basic(basic) => Ok(self.detail(resume_text, basic)),
        }
    }

    /// Basic score plus the headline issues shown for an uploaded file.
    pub fn quick_scan(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<QuickScan, ScoringError> {
        let basic = self.score_resume_against_job(resume_text, job_description)?;
        Ok(QuickScan {
            score: basic.score,
            top_issues: quick_scan_issues(&basic, resume_text),
        })
    }

    fn keyword_score(&self, resume_text: &str, job_description: &str) -> ScoreResult {
        let resume_tokens = self.tokenize(resume_text);
        let job_tokens = self.tokenize(job_description);
        score_tokens(&resume_tokens, &job_tokens)
    }

    fn detail(&self, resume_text: &str, basic: ScoreResult) -> DetailedAnalysis {
        let formatting = analyze_formatting(resume_text);
        let sections = analyze_sections(resume_text, &self.vocabulary.required_sections);
        let action_verbs = analyze_action_verbs(
            resume_text,
            &self.vocabulary.strong_verbs,
            &self.vocabulary.weak_phrases,
        );
        let recommendations = build_recommendations(&basic, &formatting, &action_verbs);
        let overall_health = overall_health(&basic, &formatting, &sections, &action_verbs);

        DetailedAnalysis {
            keyword_density: basic.keyword_density(),
            basic,
            formatting,
            sections,
            action_verbs,
            recommendations,
            overall_health,
        }
    }
}

fn require(field: &'static str, value: &str) -> Result<(), ScoringError> {
    if value.trim().is_empty() {
        return Err(ScoringError::MissingInput { field });
    }
    Ok(())
}
