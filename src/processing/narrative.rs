//! Strengths, weaknesses, recommendations and score explanation
//!
//! Each list is an ordered table of independent conditions. The first N
//! triggered entries win, so table order is part of the output contract.

use crate::processing::job_match::JobMatch;
use crate::processing::signals::ResumeSignals;

pub const MAX_STRENGTHS: usize = 4;
pub const MAX_WEAKNESSES: usize = 3;
pub const MAX_RECOMMENDATIONS: usize = 6;
pub const MAX_EXPLANATION_CHARS: usize = 300;
const JOB_KEYWORDS_IN_RECOMMENDATION: usize = 4;

type Rule = (fn(&ResumeSignals) -> bool, &'static str);

const STRENGTH_RULES: &[Rule] = &[
    (|s| s.skills.technical.len() >= 8, "Strong technical skill set with diverse expertise"),
    (|s| s.experience.has_quantifiable_achievements, "Includes quantifiable achievements and metrics"),
    (|s| s.contact.completeness >= 3, "Complete professional contact information"),
    (|s| s.skills.soft.len() >= 5, "Well-rounded soft skills profile"),
    (|s| s.education.has_advanced_degree, "Advanced educational background"),
    (|s| s.structure.has_sections, "Well-organized resume structure"),
];

const WEAKNESS_RULES: &[Rule] = &[
    (|s| s.skills.technical.len() < 5, "Limited technical skills mentioned"),
    (|s| !s.experience.has_quantifiable_achievements, "Lacks quantifiable achievements and metrics"),
    (|s| s.skills.soft.len() < 3, "Few soft skills highlighted"),
    (|s| !s.structure.has_contact_info, "Missing or incomplete contact information"),
    (|s| s.experience.years == 0, "No clear experience timeline mentioned"),
    (|s| !s.education.has_education_section, "Education section could be more detailed"),
];

fn apply_rules(rules: &[Rule], signals: &ResumeSignals, cap: usize) -> Vec<String> {
    rules
        .iter()
        .filter(|(applies, _)| applies(signals))
        .map(|(_, text)| text.to_string())
        .take(cap)
        .collect()
}

pub fn identify_strengths(signals: &ResumeSignals) -> Vec<String> {
    apply_rules(STRENGTH_RULES, signals, MAX_STRENGTHS)
}

pub fn identify_weaknesses(signals: &ResumeSignals) -> Vec<String> {
    apply_rules(WEAKNESS_RULES, signals, MAX_WEAKNESSES)
}

/// Actionable advice ordered by impact. `job_match` is `None` when no job
/// description was supplied.
pub fn generate_recommendations(
    signals: &ResumeSignals,
    job_match: Option<&JobMatch>,
    score: u8,
    ats_score: u8,
) -> Vec<String> {
    let technical = signals.skills.technical.len();
    let job_keywords = job_match
        .filter(|m| !m.missing_keywords.is_empty())
        .map(|m| {
            let shown: Vec<&str> = m
                .missing_keywords
                .iter()
                .take(JOB_KEYWORDS_IN_RECOMMENDATION)
                .map(String::as_str)
                .collect();
            format!("Include these job-relevant keywords: {}", shown.join(", "))
        });

    let candidates: Vec<(bool, String)> = vec![
        (technical < 6, "Expand technical skills section - aim for 8-12 relevant technologies".into()),
        (
            !signals.experience.has_quantifiable_achievements,
            "Add quantifiable achievements (e.g., 'Improved load times by 40%', 'Managed team of 5 developers')".into(),
        ),
        (
            signals.skills.soft.len() < 4,
            "Include more soft skills like leadership, communication, problem-solving, and teamwork".into(),
        ),
        (job_keywords.is_some(), job_keywords.unwrap_or_default()),
        (
            !signals.contact.has_linkedin && !signals.contact.has_github,
            "Add LinkedIn profile and/or GitHub portfolio links".into(),
        ),
        (
            signals.structure.avg_line_length > 120.0,
            "Use shorter, more concise bullet points for better readability".into(),
        ),
        (
            signals.experience.years == 0,
            "Highlight internships, projects, volunteer work, or freelance experience".into(),
        ),
        (score < 60, "Reorganize content to highlight most impressive achievements first".into()),
        (
            score < 60,
            "Consider using action verbs like 'developed', 'implemented', 'optimized', 'led'".into(),
        ),
        (
            !signals.education.has_certifications && technical > 5,
            "Consider adding industry certifications to validate your technical skills".into(),
        ),
        (
            ats_score < 80,
            "Optimize for ATS by using standard section headers and avoiding complex formatting".into(),
        ),
    ];

    candidates
        .into_iter()
        .filter(|(applies, _)| *applies)
        .map(|(_, text)| text)
        .take(MAX_RECOMMENDATIONS)
        .collect()
}

/// One of five score-band summaries, truncated to 300 characters.
pub fn score_explanation(score: u8, signals: &ResumeSignals) -> String {
    let skill_count = signals.skills.total();
    let strengths = identify_strengths(signals);
    let weaknesses = identify_weaknesses(signals);
    let first_strength = strengths.first().map(String::as_str);
    let first_weakness = weaknesses.first().map(String::as_str);

    let explanation = match score {
        85.. => format!(
            "Outstanding resume with {} skills detected. {} with excellent structure and content quality.",
            skill_count,
            first_strength.unwrap_or("Strong professional profile")
        ),
        70..=84 => format!(
            "Strong resume with {} skills identified. {} but {}.",
            skill_count,
            first_strength.unwrap_or("Good foundation"),
            first_weakness
                .map(str::to_lowercase)
                .unwrap_or_else(|| "some improvements possible".to_string())
        ),
        55..=69 => format!(
            "Good resume foundation with {} skills found. {} - focus on the recommendations below.",
            skill_count,
            first_weakness.unwrap_or("Several areas for improvement identified")
        ),
        40..=54 => format!(
            "Resume shows potential with {} skills detected. {} to compete effectively in the job market.",
            skill_count,
            first_weakness.unwrap_or("Significant improvements needed")
        ),
        _ => format!(
            "Resume needs substantial improvement. Only {} skills identified. Focus on adding technical skills, quantifiable achievements, and better structure.",
            skill_count
        ),
    };

    truncate_chars(&explanation, MAX_EXPLANATION_CHARS)
}

pub(crate) fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
