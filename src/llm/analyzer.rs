//! Remote AI analysis with transparent fallback to the rule-based engine

use crate::error::{Result, ResumeAnalyzerError};
use crate::llm::client::CompletionClient;
use crate::llm::prompts::{PromptParams, PromptTemplates, SYSTEM_PROMPT};
use crate::processing::analyzer::{AnalysisResult, AnalysisStrategy, FallbackAnalyzer};
use crate::processing::narrative::{truncate_chars, MAX_EXPLANATION_CHARS};
use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use std::time::Duration;

const DEFAULT_SCORE: u8 = 50;
const DEFAULT_ATS_SCORE: u8 = 70;
const DEFAULT_EXPLANATION: &str = "Analysis completed";
const DEFAULT_EXPERIENCE_LEVEL: &str = "Entry-level";
const DEFAULT_INDUSTRY: &str = "General";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Asks a language model for the assessment. Any failure (transport,
/// timeout, unusable reply) is logged and answered by the rule-based engine
/// using the same inputs.
pub struct RemoteAnalyzer<C> {
    client: C,
    templates: PromptTemplates,
    timeout: Duration,
    fallback: FallbackAnalyzer,
}

impl<C: CompletionClient + Sync> RemoteAnalyzer<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            templates: PromptTemplates::default(),
            timeout: DEFAULT_TIMEOUT,
            fallback: FallbackAnalyzer,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_templates(mut self, templates: PromptTemplates) -> Self {
        self.templates = templates;
        self
    }

    /// One remote attempt, no fallback.
    pub async fn try_analyze(&self, resume_text: &str, job_text: &str) -> Result<AnalysisResult> {
        let prompt = self.templates.render_analysis(&PromptParams {
            resume_content: resume_text.to_string(),
            job_content: job_text.to_string(),
        });

        let reply = tokio::time::timeout(self.timeout, self.client.complete(SYSTEM_PROMPT, &prompt))
            .await
            .map_err(|_| ResumeAnalyzerError::Timeout(self.timeout.as_secs()))??;

        parse_reply(&reply)
    }

    /// The assessment plus whether it came from the rule-based fallback.
    pub async fn analyze_or_fallback(&self, resume_text: &str, job_text: &str) -> (AnalysisResult, bool) {
        match self.try_analyze(resume_text, job_text).await {
            Ok(result) => {
                info!("Remote analysis complete: score {}", result.score);
                (result, false)
            }
            Err(e) => {
                warn!("Remote analysis failed, using rule-based engine: {}", e);
                (self.fallback.analyze(resume_text, job_text), true)
            }
        }
    }
}

impl<C: CompletionClient + Sync> AnalysisStrategy for RemoteAnalyzer<C> {
    fn name(&self) -> &'static str {
        "remote-ai"
    }

    async fn analyze(&self, resume_text: &str, job_text: &str) -> AnalysisResult {
        self.analyze_or_fallback(resume_text, job_text).await.0
    }
}

/// Strips ``` fences and returns the outermost `{...}` block.
fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

/// Normalise a model reply into an [`AnalysisResult`], defaulting and
/// clamping each field on its own.
pub fn parse_reply(reply: &str) -> Result<AnalysisResult> {
    let cleaned = reply.replace("```json", "").replace("```", "");
    let json = extract_json_object(cleaned.trim())
        .ok_or_else(|| ResumeAnalyzerError::MalformedReply("no JSON object in reply".to_string()))?;

    let value: Value =
        serde_json::from_str(json).map_err(|e| ResumeAnalyzerError::MalformedReply(e.to_string()))?;
    let fields = value
        .as_object()
        .ok_or_else(|| ResumeAnalyzerError::MalformedReply("reply is not a JSON object".to_string()))?;

    Ok(AnalysisResult {
        score: score_field(fields, "score", DEFAULT_SCORE),
        score_explanation: truncate_chars(
            &text_field(fields, "scoreExplanation", DEFAULT_EXPLANATION),
            MAX_EXPLANATION_CHARS,
        ),
        skills: list_field(fields, "skills"),
        missing_keywords: list_field(fields, "missingKeywords"),
        recommendations: list_field(fields, "recommendations"),
        strengths: list_field(fields, "strengths"),
        weaknesses: list_field(fields, "weaknesses"),
        ats_score: score_field(fields, "atsScore", DEFAULT_ATS_SCORE),
        experience_level: text_field(fields, "experienceLevel", DEFAULT_EXPERIENCE_LEVEL),
        industry_match: text_field(fields, "industryMatch", DEFAULT_INDUSTRY),
    }
    .enforce_caps())
}

static LEADING_INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*[+-]?\d+").expect("valid leading integer regex"));

/// Integer from a number or the leading integer of a string ("85/100" is 85),
/// clamped to 0..=100. Zero and unparseable values take the default.
fn score_field(fields: &Map<String, Value>, key: &str, default: u8) -> u8 {
    let parsed = match fields.get(key) {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Some(Value::String(s)) => LEADING_INTEGER
            .find(s)
            .and_then(|m| m.as_str().trim().parse::<f64>().ok())
            .map(|f| f as i64),
        _ => None,
    };

    match parsed {
        Some(0) | None => default,
        Some(n) => n.clamp(0, 100) as u8,
    }
}

fn text_field(fields: &Map<String, Value>, key: &str, default: &str) -> String {
    fields
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(default)
        .to_string()
}

/// String entries of an array field. Non-string entries are skipped and a
/// non-array value yields an empty list.
fn list_field(fields: &Map<String, Value>, key: &str) -> Vec<String> {
    fields
        .get(key)
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_str).map(str::to_string).collect())
        .unwrap_or_default()
}
