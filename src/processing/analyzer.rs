//! Rule-based analysis engine and the strategy interface it shares with the
//! remote AI analyzer

use crate::processing::job_match::{analyze_job_match, JobMatch, MAX_MISSING_KEYWORDS};
use crate::processing::narrative::{
    generate_recommendations, identify_strengths, identify_weaknesses, score_explanation, MAX_RECOMMENDATIONS,
    MAX_STRENGTHS, MAX_WEAKNESSES,
};
use crate::processing::scoring::{
    calculate_ats_score, calculate_score, determine_experience_level, identify_industry,
};
use crate::processing::signals::ResumeSignals;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Instant;

pub const MAX_SKILLS: usize = 15;

/// Final assessment returned by every strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub score: u8,
    pub score_explanation: String,
    pub skills: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub recommendations: Vec<String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub ats_score: u8,
    pub experience_level: String,
    pub industry_match: String,
}

impl AnalysisResult {
    /// Truncate every list field to its cap.
    pub fn enforce_caps(mut self) -> Self {
        self.skills.truncate(MAX_SKILLS);
        self.missing_keywords.truncate(MAX_MISSING_KEYWORDS);
        self.recommendations.truncate(MAX_RECOMMENDATIONS);
        self.strengths.truncate(MAX_STRENGTHS);
        self.weaknesses.truncate(MAX_WEAKNESSES);
        self
    }
}

/// Everything the rule-based engine derived for one resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub signals: ResumeSignals,
    /// Present only when a non-blank job description was supplied
    pub job_match: Option<JobMatch>,
    pub score: u8,
    pub ats_score: u8,
    pub experience_level: String,
    pub industry_match: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
    pub score_explanation: String,
}

impl Analysis {
    pub fn result(&self) -> AnalysisResult {
        AnalysisResult {
            score: self.score,
            score_explanation: self.score_explanation.clone(),
            skills: self.signals.skills.all(),
            missing_keywords: self
                .job_match
                .as_ref()
                .map(|m| m.missing_keywords.clone())
                .unwrap_or_default(),
            recommendations: self.recommendations.clone(),
            strengths: self.strengths.clone(),
            weaknesses: self.weaknesses.clone(),
            ats_score: self.ats_score,
            experience_level: self.experience_level.clone(),
            industry_match: self.industry_match.clone(),
        }
        .enforce_caps()
    }
}

/// A way of turning resume text (and an optional job description) into an
/// [`AnalysisResult`]. Implementations never fail.
pub trait AnalysisStrategy {
    fn name(&self) -> &'static str;

    fn analyze(&self, resume_text: &str, job_text: &str) -> impl Future<Output = AnalysisResult> + Send;
}

/// Deterministic engine built purely from the lexical extractor, signal
/// analyzers, scoring tables and narrative rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackAnalyzer;

impl FallbackAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, resume_text: &str, job_text: &str) -> AnalysisResult {
        self.analyze_detailed(resume_text, job_text).result()
    }

    pub fn analyze_detailed(&self, resume_text: &str, job_text: &str) -> Analysis {
        let start_time = Instant::now();

        let signals = ResumeSignals::from_text(resume_text);
        let job_match = (!job_text.trim().is_empty())
            .then(|| analyze_job_match(&signals, resume_text, job_text));

        let score = calculate_score(&signals, resume_text);
        let ats_score = calculate_ats_score(&signals);

        let analysis = Analysis {
            job_match: job_match.clone(),
            score,
            ats_score,
            experience_level: determine_experience_level(&signals).to_string(),
            industry_match: identify_industry(&signals).to_string(),
            strengths: identify_strengths(&signals),
            weaknesses: identify_weaknesses(&signals),
            recommendations: generate_recommendations(&signals, job_match.as_ref(), score, ats_score),
            score_explanation: score_explanation(score, &signals),
            signals,
        };

        debug!("Rule-based analysis took {:?}", start_time.elapsed());
        info!(
            "Rule-based analysis complete: score {}, ATS score {}, {} skills",
            analysis.score,
            analysis.ats_score,
            analysis.signals.skills.total()
        );
        analysis
    }
}

impl AnalysisStrategy for FallbackAnalyzer {
    fn name(&self) -> &'static str {
        "rule-based"
    }

    async fn analyze(&self, resume_text: &str, job_text: &str) -> AnalysisResult {
        self.analyze_detailed(resume_text, job_text).result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "Jane Doe\n\
        jane.doe@example.com | (555) 123-4567 | linkedin.com/in/janedoe | github.com/janedoe\n\
        \n\
        Experience\n\
        Senior Software Engineer, Acme Corp (2016 - 2024)\n\
        Developed a React and TypeScript platform used by 2 million users.\n\
        Led team of 6 engineers and improved deployment speed by 40% with Docker and Kubernetes.\n\
        \n\
        Education\n\
        M.S. Computer Science, Stanford University\n\
        \n\
        Skills\n\
        JavaScript, Python, AWS, PostgreSQL, Git, leadership, communication, mentoring\n";

    #[test]
    fn test_full_resume_analysis() {
        let result = FallbackAnalyzer.analyze(RESUME, "");

        assert!(result.skills.contains(&"React".to_string()));
        assert!(result.skills.contains(&"Leadership".to_string()));
        assert!(result.missing_keywords.is_empty());
        assert_eq!(result.industry_match, "Software Development");
        assert_eq!(result.experience_level, "Senior-level");
        assert!(result.score >= 70, "score was {}", result.score);
        assert!(result.ats_score >= 80, "ats score was {}", result.ats_score);
    }

    #[test]
    fn test_empty_resume_is_well_formed() {
        let analysis = FallbackAnalyzer.analyze_detailed("", "");
        let result = analysis.result();

        assert_eq!(result.score, 0);
        assert_eq!(result.ats_score, 40);
        assert!(result.skills.is_empty());
        assert_eq!(result.experience_level, "Entry-level");
        assert_eq!(result.industry_match, "Technology");
        assert_eq!(result.weaknesses.len(), MAX_WEAKNESSES);
        assert!(result.score_explanation.starts_with("Resume needs substantial improvement"));
        assert!(analysis.job_match.is_none());
    }

    #[test]
    fn test_blank_job_description_is_absent() {
        let analysis = FallbackAnalyzer.analyze_detailed(RESUME, "   \n\t ");
        assert!(analysis.job_match.is_none());
        assert!(analysis
            .recommendations
            .iter()
            .all(|r| !r.starts_with("Include these job-relevant keywords")));
    }

    #[test]
    fn test_job_description_drives_missing_keywords() {
        let job = "Must have Golang and Terraform experience. Experience with Kafka streaming";
        let result = FallbackAnalyzer.analyze(RESUME, job);

        assert!(result.missing_keywords.contains(&"Golang".to_string()));
        assert!(result.missing_keywords.contains(&"Terraform".to_string()));
        assert!(result.missing_keywords.contains(&"kafka".to_string()));
        assert!(!result.missing_keywords.contains(&"experience".to_string()));
    }

    #[test]
    fn test_analysis_is_idempotent() {
        let job = "Required: Rust and Go.";
        assert_eq!(FallbackAnalyzer.analyze(RESUME, job), FallbackAnalyzer.analyze(RESUME, job));
    }

    #[test]
    fn test_enforce_caps() {
        let many = |n: usize| (0..n).map(|i| i.to_string()).collect::<Vec<_>>();
        let result = AnalysisResult {
            score: 50,
            score_explanation: String::new(),
            skills: many(30),
            missing_keywords: many(30),
            recommendations: many(30),
            strengths: many(30),
            weaknesses: many(30),
            ats_score: 70,
            experience_level: String::new(),
            industry_match: String::new(),
        }
        .enforce_caps();

        assert_eq!(result.skills.len(), MAX_SKILLS);
        assert_eq!(result.missing_keywords.len(), MAX_MISSING_KEYWORDS);
        assert_eq!(result.recommendations.len(), MAX_RECOMMENDATIONS);
        assert_eq!(result.strengths.len(), MAX_STRENGTHS);
        assert_eq!(result.weaknesses.len(), MAX_WEAKNESSES);
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let json = serde_json::to_value(FallbackAnalyzer.analyze("", "")).unwrap();
        assert!(json.get("scoreExplanation").is_some());
        assert!(json.get("atsScore").is_some());
        assert!(json.get("missingKeywords").is_some());
        assert!(json.get("industryMatch").is_some());
    }

    #[tokio::test]
    async fn test_strategy_interface_matches_direct_call() {
        let via_trait = AnalysisStrategy::analyze(&FallbackAnalyzer, RESUME, "").await;
        assert_eq!(via_trait, FallbackAnalyzer.analyze(RESUME, ""));
        assert_eq!(FallbackAnalyzer.name(), "rule-based");
    }
}
