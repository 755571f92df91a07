//! Report structures wrapping an analysis result for presentation

use crate::processing::analyzer::{Analysis, AnalysisResult, AnalysisStrategy, FallbackAnalyzer};
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub result: AnalysisResult,

    pub metadata: ReportMetadata,

    /// Full rule-based breakdown, present for `--detailed` output
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub details: Option<Analysis>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,

    pub analyzer_version: String,

    /// Strategy that produced the result ("remote-ai" or "rule-based")
    pub strategy: String,

    pub resume_file: String,

    pub job_provided: bool,

    pub processing_time_ms: u64,
}

impl ReportMetadata {
    pub fn new(strategy: &str, resume_file: &str, job_provided: bool, processing_time_ms: u64) -> Self {
        Self {
            generated_at: Utc::now(),
            analyzer_version: env!("CARGO_PKG_VERSION").to_string(),
            strategy: strategy.to_string(),
            resume_file: resume_file.to_string(),
            job_provided,
            processing_time_ms,
        }
    }
}

impl AnalysisReport {
    pub fn new(result: AnalysisResult, metadata: ReportMetadata) -> Self {
        Self {
            result,
            metadata,
            details: None,
        }
    }

    /// Attach the rule-based breakdown. Ignored when the result came from
    /// another strategy, so the breakdown always describes `result`.
    pub fn with_details(mut self, details: Analysis) -> Self {
        if self.is_rule_based() {
            self.details = Some(details);
        } else {
            debug!("Skipping rule-based details for a {} result", self.metadata.strategy);
        }
        self
    }

    pub fn is_rule_based(&self) -> bool {
        self.metadata.strategy == FallbackAnalyzer.name()
    }

    /// One-line verdict for the composite score.
    pub fn verdict(&self) -> &'static str {
        match self.result.score {
            90..=100 => "Excellent resume - ready to send",
            80..=89 => "Very good resume - minor polish could help",
            70..=79 => "Good resume - some targeted improvements recommended",
            60..=69 => "Fair resume - several improvements needed",
            50..=59 => "Below average resume - significant improvements required",
            _ => "Weak resume - major revisions needed",
        }
    }

    /// Match percentage against the job description, when one was analyzed
    /// by the rule-based engine.
    pub fn match_percentage(&self) -> Option<u32> {
        self.details
            .as_ref()
            .and_then(|d| d.job_match.as_ref())
            .map(|m| m.match_percentage)
    }
}

#[cfg(test)]
pub(crate) fn sample_report(with_details: bool) -> AnalysisReport {
    let resume = "Jane Doe\njane@example.com | linkedin.com/in/jane\nExperience\nSenior engineer, 2015 - 2023. \
                  Built Rust and Python services, improved latency by 35%.\nEducation\nBSc, State University\nSkills\nRust, Python, Docker, leadership";
    let job = "Must have Kubernetes and Terraform.";
    let analysis = FallbackAnalyzer.analyze_detailed(resume, job);
    let report = AnalysisReport::new(analysis.result(), ReportMetadata::new("rule-based", "jane_doe.pdf", true, 12));

    if with_details {
        report.with_details(analysis)
    } else {
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_defaults() {
        let metadata = ReportMetadata::new("remote-ai", "cv.docx", false, 250);
        assert_eq!(metadata.strategy, "remote-ai");
        assert_eq!(metadata.analyzer_version, env!("CARGO_PKG_VERSION"));
        assert!(!metadata.job_provided);
    }

    #[test]
    fn test_details_are_optional_in_json() {
        let plain = serde_json::to_value(sample_report(false)).unwrap();
        assert!(plain.get("details").is_none());
        assert!(plain["metadata"].get("generatedAt").is_some());

        let detailed = serde_json::to_value(sample_report(true)).unwrap();
        assert!(detailed["details"]["signals"]["skills"]["technical"].is_array());
    }

    #[test]
    fn test_match_percentage_needs_details() {
        assert!(sample_report(false).match_percentage().is_none());
        assert!(sample_report(true).match_percentage().is_some());
    }

    #[test]
    fn test_details_only_describe_rule_based_results() {
        let analysis = FallbackAnalyzer.analyze_detailed("Rust developer", "Must have Kubernetes.");
        let mut remote = analysis.result();
        remote.score = 91;

        let report = AnalysisReport::new(remote, ReportMetadata::new("remote-ai", "cv.pdf", true, 800))
            .with_details(analysis);
        assert!(!report.is_rule_based());
        assert!(report.details.is_none());
        assert!(report.match_percentage().is_none());
    }

    #[test]
    fn test_verdict_bands() {
        let mut report = sample_report(false);
        report.result.score = 95;
        assert!(report.verdict().starts_with("Excellent"));
        report.result.score = 10;
        assert!(report.verdict().starts_with("Weak"));
    }
}
