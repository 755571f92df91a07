//! Prompt templates for the remote resume analysis

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

pub const SYSTEM_PROMPT: &str = "You are an expert HR professional and career coach with 15+ years of experience. Analyze resumes comprehensively and provide actionable insights. Respond only with valid JSON.";

pub const DEFAULT_RESUME_CHARS: usize = 3000;
pub const DEFAULT_JOB_CHARS: usize = 1000;

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{(resume|job_block)\}").expect("valid placeholder regex"));

#[derive(Debug, Clone)]
pub struct PromptTemplates {
    pub analysis: String,
    pub resume_chars: usize,
    pub job_chars: usize,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            analysis: ANALYSIS_TEMPLATE.to_string(),
            resume_chars: DEFAULT_RESUME_CHARS,
            job_chars: DEFAULT_JOB_CHARS,
        }
    }
}

/// Parameters for prompt template substitution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptParams {
    pub resume_content: String,
    pub job_content: String,
}

impl PromptTemplates {
    pub fn with_limits(resume_chars: usize, job_chars: usize) -> Self {
        Self {
            resume_chars,
            job_chars,
            ..Self::default()
        }
    }

    /// Fill the analysis template. The job block is omitted entirely when the
    /// job description is blank.
    pub fn render_analysis(&self, params: &PromptParams) -> String {
        let resume: String = params.resume_content.chars().take(self.resume_chars).collect();
        let job_block = if params.job_content.trim().is_empty() {
            String::new()
        } else {
            let job: String = params.job_content.chars().take(self.job_chars).collect();
            format!("JOB DESCRIPTION:\n{}", job)
        };

        // Single pass: placeholder text inside the inputs stays literal
        let prompt = PLACEHOLDER
            .replace_all(&self.analysis, |caps: &Captures| match &caps[1] {
                "resume" => resume.clone(),
                _ => job_block.clone(),
            })
            .into_owned();

        log::debug!(
            "Rendered analysis prompt: {} chars (resume {}, job {})",
            prompt.chars().count(),
            resume.chars().count(),
            job_block.chars().count()
        );
        prompt
    }
}

const ANALYSIS_TEMPLATE: &str = r#"As an expert HR professional, analyze this resume comprehensively and provide detailed insights:

RESUME TEXT:
{resume}

{job_block}

Analyze for:
1. Technical and soft skills (be thorough)
2. Experience level and achievements
3. ATS compatibility and structure
4. Industry-specific keywords
5. Missing elements that could improve the resume

Respond with this exact JSON format:
{
  "score": 75,
  "scoreExplanation": "Detailed explanation of the score with specific strengths and weaknesses",
  "skills": ["skill1", "skill2", "skill3", "skill4", "skill5"],
  "missingKeywords": ["keyword1", "keyword2", "keyword3"],
  "recommendations": ["specific actionable recommendation 1", "specific actionable recommendation 2", "specific actionable recommendation 3"],
  "strengths": ["strength1", "strength2"],
  "weaknesses": ["weakness1", "weakness2"],
  "atsScore": 85,
  "experienceLevel": "Mid-level",
  "industryMatch": "Technology"
}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_rendering() {
        let templates = PromptTemplates::default();
        let params = PromptParams {
            resume_content: "Software Engineer with Python experience at Tech Corp.".to_string(),
            job_content: "Senior Software Engineer role requiring React and Python.".to_string(),
        };

        let prompt = templates.render_analysis(&params);

        assert!(prompt.contains("RESUME TEXT:\nSoftware Engineer with Python experience at Tech Corp."));
        assert!(prompt.contains("JOB DESCRIPTION:\nSenior Software Engineer role requiring React and Python."));
        assert!(prompt.contains("\"atsScore\": 85"));
    }

    #[test]
    fn test_job_block_omitted_when_blank() {
        let templates = PromptTemplates::default();
        let params = PromptParams {
            resume_content: "Resume".to_string(),
            job_content: "  ".to_string(),
        };

        let prompt = templates.render_analysis(&params);
        assert!(!prompt.contains("JOB DESCRIPTION"));
        assert!(!prompt.contains("{job_block}"));
    }

    #[test]
    fn test_placeholders_in_inputs_stay_literal() {
        let prompt = PromptTemplates::default().render_analysis(&PromptParams {
            resume_content: "Skills: {job_block} templating".to_string(),
            job_content: "Must know {resume} syntax".to_string(),
        });

        assert!(prompt.contains("Skills: {job_block} templating"));
        assert!(prompt.contains("Must know {resume} syntax"));
        assert_eq!(prompt.matches("JOB DESCRIPTION:").count(), 1);
    }

    #[test]
    fn test_inputs_truncated_by_characters() {
        let templates = PromptTemplates::with_limits(5, 3);
        let params = PromptParams {
            resume_content: "ééééééééé".to_string(),
            job_content: "abcdef".to_string(),
        };

        let prompt = templates.render_analysis(&params);
        assert!(prompt.contains("RESUME TEXT:\nééééé\n"));
        assert!(prompt.contains("JOB DESCRIPTION:\nabc\n"));
    }
}
