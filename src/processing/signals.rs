//! Independent structural analyzers
//!
//! Each function derives one immutable signal from raw resume text. None of
//! them fail: empty or garbage input yields zeroed signals.

use crate::processing::extractor::{
    extract_achievements, extract_keywords, extract_skills, KeywordCounts, SkillSet,
};
use crate::processing::vocabulary::{
    ADVANCED_DEGREE_KEYWORDS, DEGREE_KEYWORDS, INSTITUTION_KEYWORDS, JUNIOR_KEYWORDS, MID_KEYWORDS,
    MIN_SECTION_MATCHES, SECTION_NAMES, SENIOR_KEYWORDS,
};
use aho_corasick::AhoCorasick;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeniorityLevel {
    Senior,
    Mid,
    Junior,
    Entry,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceSignal {
    pub years: u32,
    pub level: SeniorityLevel,
    pub has_quantifiable_achievements: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationSignal {
    pub has_advanced_degree: bool,
    pub has_education_section: bool,
    pub has_certifications: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSignal {
    pub has_email: bool,
    pub has_phone: bool,
    #[serde(rename = "hasLinkedIn")]
    pub has_linkedin: bool,
    #[serde(rename = "hasGitHub")]
    pub has_github: bool,
    pub has_portfolio: bool,
    /// Number of email, phone and LinkedIn present (0..=3)
    pub completeness: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureSignal {
    pub total_length: usize,
    pub line_count: usize,
    pub has_contact_info: bool,
    pub has_sections: bool,
    pub has_metrics: bool,
    pub has_action_verbs: bool,
    pub avg_line_length: f64,
}

/// Every signal derived from one resume text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeSignals {
    pub skills: SkillSet,
    pub keywords: KeywordCounts,
    pub achievements: Vec<String>,
    pub experience: ExperienceSignal,
    pub education: EducationSignal,
    pub contact: ContactSignal,
    pub structure: StructureSignal,
}

impl ResumeSignals {
    /// Run every extractor and analyzer over `text`. The analyzers are
    /// independent of each other, so evaluation order does not matter.
    pub fn from_text(text: &str) -> Self {
        Self {
            skills: extract_skills(text),
            keywords: extract_keywords(text),
            achievements: extract_achievements(text),
            experience: analyze_experience(text),
            education: analyze_education(text),
            contact: analyze_contact_info(text),
            structure: analyze_structure(text),
        }
    }
}

fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("signal pattern is a valid regex")
}

fn matcher(patterns: &[&str]) -> AhoCorasick {
    AhoCorasick::new(patterns).expect("vocabulary builds a valid automaton")
}

static YEAR_COUNT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        regex(r"(?i)[0-9]+\+?\s*(?:years?|yrs?)\s*(?:of\s*)?(?:experience|exp)"),
        regex(r"(?i)experience.*?[0-9]+\s*(?:years?|yrs?)"),
        regex(r"(?i)[0-9]+\s*(?:years?|yrs?).*?(?:experience|working|developing)"),
    ]
});
static DIGITS: Lazy<Regex> = Lazy::new(|| regex(r"[0-9]+"));
static CALENDAR_YEAR: Lazy<Regex> = Lazy::new(|| regex(r"(?:20[0-9]{2}|19[0-9]{2})"));
static QUANTIFIABLE: Lazy<Regex> =
    Lazy::new(|| regex(r"(?i)\d+%|\$[\d,]+|\d+\s*(?:million|thousand|users|customers|projects|clients)"));

static SENIORITY_MATCHERS: Lazy<Vec<(SeniorityLevel, AhoCorasick)>> = Lazy::new(|| {
    vec![
        (SeniorityLevel::Senior, matcher(SENIOR_KEYWORDS)),
        (SeniorityLevel::Mid, matcher(MID_KEYWORDS)),
        (SeniorityLevel::Junior, matcher(JUNIOR_KEYWORDS)),
    ]
});

static ADVANCED_DEGREES: Lazy<AhoCorasick> = Lazy::new(|| matcher(ADVANCED_DEGREE_KEYWORDS));
static EDUCATION_TERMS: Lazy<AhoCorasick> = Lazy::new(|| {
    let terms: Vec<&str> = INSTITUTION_KEYWORDS.iter().chain(DEGREE_KEYWORDS).copied().collect();
    matcher(&terms)
});
static CERTIFICATION: Lazy<Regex> =
    Lazy::new(|| regex(r"(?i)certified|certification|license|credential|coursera|udemy|pluralsight"));

static EMAIL: Lazy<Regex> = Lazy::new(|| regex(r"@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}"));
static PHONE: Lazy<Regex> =
    Lazy::new(|| regex(r"(?:\+?1[-.\s]?)?\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}"));
static LINKEDIN: Lazy<Regex> = Lazy::new(|| regex(r"linkedin\.com/in/"));
static GITHUB: Lazy<Regex> = Lazy::new(|| regex(r"github\.com/"));
static PORTFOLIO: Lazy<Regex> = Lazy::new(|| regex(r"(?:portfolio|website|blog).*?(?:https?://|www\.)"));

static SECTIONS: Lazy<AhoCorasick> = Lazy::new(|| matcher(SECTION_NAMES));
static CONTACT_MENTION: Lazy<Regex> = Lazy::new(|| regex(r"(?i)email|phone|linkedin|github"));
static METRICS: Lazy<Regex> = Lazy::new(|| regex(r"(?i)\d+%|\$\d+|\d+\s*(?:million|thousand|users)"));
static ACTION_VERB: Lazy<Regex> = Lazy::new(|| {
    regex(
        r"(?i)\b(?:developed|implemented|managed|led|created|designed|optimized|improved|increased|reduced|achieved|delivered|built)\b",
    )
});

/// Years of experience, seniority and whether any quantified result appears.
pub fn analyze_experience(text: &str) -> ExperienceSignal {
    let mut candidates: Vec<u32> = YEAR_COUNT_PATTERNS
        .iter()
        .flat_map(|pattern| pattern.find_iter(text))
        .filter_map(|m| DIGITS.find(m.as_str()))
        .filter_map(|digits| digits.as_str().parse::<u32>().ok())
        .collect();

    let calendar_years: Vec<u32> = CALENDAR_YEAR
        .find_iter(text)
        .filter_map(|m| m.as_str().parse::<u32>().ok())
        .collect();
    if calendar_years.len() >= 2 {
        let earliest = calendar_years.iter().min().copied().unwrap_or_default();
        let latest = calendar_years.iter().max().copied().unwrap_or_default();
        if latest > earliest {
            candidates.push(latest - earliest);
        }
    }

    let years = candidates.into_iter().max().unwrap_or(0);

    let lowered = text.to_lowercase();
    let level = SENIORITY_MATCHERS
        .iter()
        .find(|(_, keywords)| keywords.is_match(&lowered))
        .map(|(level, _)| *level)
        .unwrap_or(SeniorityLevel::Entry);

    let signal = ExperienceSignal {
        years,
        level,
        has_quantifiable_achievements: QUANTIFIABLE.is_match(text),
    };
    debug!("Experience signal: {:?}", signal);
    signal
}

pub fn analyze_education(text: &str) -> EducationSignal {
    let lowered = text.to_lowercase();

    let signal = EducationSignal {
        has_advanced_degree: ADVANCED_DEGREES.is_match(&lowered),
        has_education_section: EDUCATION_TERMS.is_match(&lowered),
        has_certifications: CERTIFICATION.is_match(text),
    };
    debug!("Education signal: {:?}", signal);
    signal
}

pub fn analyze_contact_info(text: &str) -> ContactSignal {
    let has_email = EMAIL.is_match(text);
    let has_phone = PHONE.is_match(text);
    let has_linkedin = LINKEDIN.is_match(text);

    let signal = ContactSignal {
        has_email,
        has_phone,
        has_linkedin,
        has_github: GITHUB.is_match(text),
        has_portfolio: PORTFOLIO.is_match(text),
        completeness: [has_email, has_phone, has_linkedin].iter().filter(|present| **present).count() as u8,
    };
    debug!("Contact signal: {:?}", signal);
    signal
}

pub fn analyze_structure(text: &str) -> StructureSignal {
    let lines: Vec<&str> = text.split('\n').filter(|line| !line.trim().is_empty()).collect();

    let avg_line_length = if lines.is_empty() {
        0.0
    } else {
        let total: usize = lines.iter().map(|line| line.chars().count()).sum();
        total as f64 / lines.len() as f64
    };

    let signal = StructureSignal {
        total_length: text.chars().count(),
        line_count: lines.len(),
        has_contact_info: CONTACT_MENTION.is_match(text),
        has_sections: count_sections(text) >= MIN_SECTION_MATCHES,
        has_metrics: METRICS.is_match(text),
        has_action_verbs: ACTION_VERB.is_match(text),
        avg_line_length,
    };
    debug!("Structure signal: {:?}", signal);
    signal
}

/// Number of distinct section names appearing anywhere in the text.
fn count_sections(text: &str) -> usize {
    let lowered = text.to_lowercase();
    SECTIONS
        .find_overlapping_iter(&lowered)
        .map(|m| m.pattern())
        .collect::<HashSet<_>>()
        .len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_years_without_seniority_keyword() {
        let signal = analyze_experience("I bring 5 years of experience shipping software.");
        assert_eq!(signal.years, 5);
        assert_eq!(signal.level, SeniorityLevel::Entry);
        assert!(!signal.has_quantifiable_achievements);
    }

    #[test]
    fn test_calendar_span_is_a_candidate() {
        let signal = analyze_experience("Acme Corp 2012 - 2020\nWidgets Inc 2020 - 2021");
        assert_eq!(signal.years, 9);
    }

    #[test]
    fn test_single_calendar_year_ignored() {
        assert_eq!(analyze_experience("Graduated 2019").years, 0);
    }

    #[test]
    fn test_largest_candidate_wins() {
        let signal = analyze_experience("3 years of experience in Go. 2015 to 2024 overall.");
        assert_eq!(signal.years, 9);
    }

    #[test]
    fn test_seniority_priority_order() {
        // "senior" outranks "engineer"
        assert_eq!(analyze_experience("Senior Software Engineer").level, SeniorityLevel::Senior);
        assert_eq!(analyze_experience("Software Engineer").level, SeniorityLevel::Mid);
        assert_eq!(analyze_experience("Marketing intern").level, SeniorityLevel::Junior);
        assert_eq!(analyze_experience("Barista").level, SeniorityLevel::Entry);
    }

    #[test]
    fn test_quantifiable_achievements() {
        assert!(analyze_experience("Grew revenue 40%").has_quantifiable_achievements);
        assert!(analyze_experience("Served 200 customers daily").has_quantifiable_achievements);
        assert!(analyze_experience("Budget of $12,000").has_quantifiable_achievements);
    }

    #[test]
    fn test_education_signal() {
        let signal = analyze_education("M.Sc. from Stanford. MBA 2018. AWS Certified.");
        assert!(signal.has_advanced_degree);
        assert!(signal.has_education_section);
        assert!(signal.has_certifications);

        let empty = analyze_education("");
        assert!(!empty.has_advanced_degree);
        assert!(!empty.has_education_section);
        assert!(!empty.has_certifications);
    }

    #[test]
    fn test_contact_signal_complete() {
        let text = "jane@example.com | (555) 123-4567 | linkedin.com/in/jane | github.com/jane\nportfolio: https://jane.dev";
        let signal = analyze_contact_info(text);
        assert!(signal.has_email);
        assert!(signal.has_phone);
        assert!(signal.has_linkedin);
        assert!(signal.has_github);
        assert!(signal.has_portfolio);
        assert_eq!(signal.completeness, 3);
    }

    #[test]
    fn test_contact_signal_absent() {
        let signal = analyze_contact_info("Jane Doe, software person");
        assert!(!signal.has_email);
        assert!(!signal.has_phone);
        assert!(!signal.has_linkedin);
        assert!(!signal.has_github);
        assert_eq!(signal.completeness, 0);
    }

    #[test]
    fn test_structure_signal() {
        let text = "Experience\n\nEducation\n   \nSkills: developed things, 10% faster\nemail: a@b.co";
        let signal = analyze_structure(text);
        assert_eq!(signal.line_count, 4);
        assert_eq!(signal.total_length, text.chars().count());
        assert!(signal.has_sections);
        assert!(signal.has_metrics);
        assert!(signal.has_action_verbs);
        assert!(signal.has_contact_info);
    }

    #[test]
    fn test_structure_of_empty_text() {
        let signal = analyze_structure("");
        assert_eq!(signal.line_count, 0);
        assert_eq!(signal.avg_line_length, 0.0);
        assert!(!signal.has_sections);
    }

    #[test]
    fn test_average_line_length() {
        let signal = analyze_structure("abcd\n\nab");
        assert_eq!(signal.avg_line_length, 3.0);
    }

    #[test]
    fn test_signals_from_empty_text() {
        let signals = ResumeSignals::from_text("");
        assert_eq!(signals.skills.total(), 0);
        assert!(signals.keywords.is_empty());
        assert!(signals.achievements.is_empty());
        assert_eq!(signals.experience.years, 0);
        assert_eq!(signals.contact.completeness, 0);
    }

    #[test]
    fn test_section_names_counted_once() {
        assert_eq!(count_sections("skills skills skills"), 1);
        // "work experience" also contains "experience"
        assert_eq!(count_sections("Work Experience"), 2);
    }
}
