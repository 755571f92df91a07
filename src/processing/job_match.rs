//! Resume versus job description gap analysis

use crate::processing::extractor::extract_skills;
use crate::processing::signals::ResumeSignals;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const MAX_REQUIREMENTS: usize = 15;
pub const MAX_MISSING_KEYWORDS: usize = 10;
const MIN_REQUIREMENT_WORD_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatch {
    pub missing_keywords: Vec<String>,
    /// Coverage ratio as a percentage. Not clamped; can exceed 100.
    pub match_percentage: u32,
}

/// (pattern, capture group holding the requirement span)
static REQUIREMENT_PATTERNS: Lazy<Vec<(Regex, usize)>> = Lazy::new(|| {
    [
        (r"(?is)((?:required|must have|essential).*?)(?:preferred|nice|bonus|\.|\n\n)", 1),
        (r"(?i)(?:experience with|proficiency in|knowledge of)\s+[^.\n]+", 0),
        (r"(?i)\b(?:minimum|at least)\s+\d+\s+years?\s+(?:of\s+)?experience", 0),
    ]
    .into_iter()
    .map(|(pattern, group)| (Regex::new(pattern).expect("requirement pattern is a valid regex"), group))
    .collect()
});
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").expect("valid non-word regex"));

/// Lowercase requirement words pulled from required/must-have clauses,
/// "experience with" phrases and minimum-years phrases.
pub fn extract_job_requirements(job_text: &str) -> Vec<String> {
    let mut seen = HashSet::new();

    REQUIREMENT_PATTERNS
        .iter()
        .flat_map(|(pattern, group)| {
            pattern
                .captures_iter(job_text)
                .filter_map(move |caps| caps.get(*group))
                .map(|m| m.as_str())
        })
        .flat_map(tokenize_requirement)
        .filter(|word| seen.insert(word.clone()))
        .take(MAX_REQUIREMENTS)
        .collect()
}

fn tokenize_requirement(span: &str) -> Vec<String> {
    let lowered = span.to_lowercase();
    NON_WORD
        .replace_all(&lowered, " ")
        .split_whitespace()
        .filter(|word| word.chars().count() > MIN_REQUIREMENT_WORD_LEN)
        .map(str::to_string)
        .collect()
}

/// Diff the resume's detected vocabulary against a job description.
///
/// Missing skills come first, then requirement words absent from the resume
/// text, deduplicated and capped.
pub fn analyze_job_match(resume: &ResumeSignals, resume_text: &str, job_text: &str) -> JobMatch {
    let job_skills = extract_skills(job_text).all();
    let requirements = extract_job_requirements(job_text);
    let resume_lower = resume_text.to_lowercase();

    let missing_skills = job_skills
        .iter()
        .filter(|skill| !resume.skills.contains_ignore_case(skill))
        .cloned();
    let missing_requirements = requirements
        .iter()
        .filter(|word| !resume_lower.contains(word.as_str()))
        .cloned();

    let mut seen = HashSet::new();
    let missing_keywords: Vec<String> = missing_skills
        .chain(missing_requirements)
        .filter(|keyword| seen.insert(keyword.clone()))
        .take(MAX_MISSING_KEYWORDS)
        .collect();

    let covered = resume.skills.total() + resume.keywords.len();
    let wanted = (job_skills.len() + requirements.len()).max(1);
    let match_percentage = (100.0 * covered as f64 / wanted as f64).round() as u32;

    debug!(
        "Job match: {} missing keywords, {}% coverage",
        missing_keywords.len(),
        match_percentage
    );

    JobMatch {
        missing_keywords,
        match_percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_clause_stops_at_sentence_end() {
        let requirements = extract_job_requirements("Required: strong Kubernetes skills. Nice to have: Haskell");
        assert_eq!(requirements, vec!["required", "strong", "kubernetes", "skills"]);
    }

    #[test]
    fn test_required_clause_stops_at_preferred() {
        let requirements = extract_job_requirements("Must have terraform preferred golang");
        assert_eq!(requirements, vec!["must", "have", "terraform"]);
    }

    #[test]
    fn test_experience_with_and_minimum_years() {
        let requirements =
            extract_job_requirements("Experience with distributed systems\nMinimum 5 years of experience");
        assert_eq!(
            requirements,
            vec!["experience", "with", "distributed", "systems", "minimum", "years"]
        );
    }

    #[test]
    fn test_requirements_capped() {
        let job = "Experience with alpha bravo charlie delta echo foxtrot golf hotel india juliet kilo lima mike november oscar papa";
        assert_eq!(extract_job_requirements(job).len(), MAX_REQUIREMENTS);
    }

    #[test]
    fn test_no_requirements_in_plain_text() {
        assert!(extract_job_requirements("We are a friendly team").is_empty());
    }

    #[test]
    fn test_all_job_skills_missing_from_empty_resume() {
        let resume = ResumeSignals::from_text("");
        let job = "We use Python, Docker, Kubernetes, Terraform and Jenkins daily";
        let result = analyze_job_match(&resume, "", job);

        assert_eq!(
            result.missing_keywords,
            vec!["Python", "Docker", "Kubernetes", "Jenkins", "Terraform"]
        );
        // (0 resume skills + 0 keywords) / (5 job skills + 0 requirements)
        assert_eq!(result.match_percentage, 0);
    }

    #[test]
    fn test_present_skills_not_missing() {
        let resume_text = "Python developer with Docker experience on every project";
        let resume = ResumeSignals::from_text(resume_text);
        let result = analyze_job_match(&resume, resume_text, "Python and Docker required.");

        assert!(!result.missing_keywords.contains(&"Python".to_string()));
        assert!(!result.missing_keywords.contains(&"Docker".to_string()));
        // "required" is a requirement word missing from the resume text
        assert_eq!(result.missing_keywords, vec!["required"]);
    }

    #[test]
    fn test_match_percentage_can_exceed_100() {
        let resume_text = "Python Rust Docker Git teamwork on a platform team";
        let resume = ResumeSignals::from_text(resume_text);
        let result = analyze_job_match(&resume, resume_text, "Rust");

        assert!(result.match_percentage > 100);
    }

    #[test]
    fn test_missing_keywords_capped() {
        let resume = ResumeSignals::from_text("");
        let job = "react angular vue javascript typescript html css sass scss bootstrap tailwind webpack";
        let result = analyze_job_match(&resume, "", job);
        assert_eq!(result.missing_keywords.len(), MAX_MISSING_KEYWORDS);
    }
}
