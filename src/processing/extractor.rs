//! Lexical skill, keyword and achievement extraction
//!
//! Every vocabulary entry is tested on its own with a case-insensitive,
//! word-bounded pattern. Overlapping entries are not resolved against each
//! other, so "react" and "react native" can both match the same span.

use crate::processing::vocabulary::{
    technical_skills, IMPORTANT_KEYWORDS, MAX_SOFT_SKILLS, MAX_TECHNICAL_SKILLS, SOFT_SKILLS,
};
use log::debug;
use once_cell::sync::Lazy;
use regex::{Regex, RegexSet};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Keyword → occurrence count. Keywords that never occur are absent.
pub type KeywordCounts = BTreeMap<String, usize>;

pub const MAX_ACHIEVEMENTS: usize = 5;
const ACHIEVEMENTS_PER_PATTERN: usize = 3;

/// Skills detected in a piece of text, Title Cased and deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSet {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
}

impl SkillSet {
    pub fn total(&self) -> usize {
        self.technical.len() + self.soft.len()
    }

    /// Technical skills followed by soft skills.
    pub fn all(&self) -> Vec<String> {
        self.technical.iter().chain(self.soft.iter()).cloned().collect()
    }

    pub fn contains_ignore_case(&self, skill: &str) -> bool {
        let skill = skill.to_lowercase();
        self.technical
            .iter()
            .chain(self.soft.iter())
            .any(|s| s.to_lowercase() == skill)
    }
}

struct Vocabulary {
    phrases: Vec<&'static str>,
    matcher: RegexSet,
}

impl Vocabulary {
    fn new(phrases: Vec<&'static str>) -> Self {
        let patterns: Vec<String> = phrases.iter().map(|p| word_pattern(p)).collect();
        let matcher = RegexSet::new(&patterns).expect("vocabulary patterns are valid regexes");
        Self { phrases, matcher }
    }

    /// Matching phrases, Title Cased, deduplicated, in vocabulary order.
    fn extract(&self, text: &str, cap: usize) -> Vec<String> {
        let matches = self.matcher.matches(text);
        let mut seen = HashSet::new();

        matches
            .iter()
            .map(|idx| title_case(self.phrases[idx]))
            .filter(|skill| seen.insert(skill.clone()))
            .take(cap)
            .collect()
    }
}

static TECHNICAL_VOCABULARY: Lazy<Vocabulary> = Lazy::new(|| Vocabulary::new(technical_skills().collect()));
static SOFT_VOCABULARY: Lazy<Vocabulary> = Lazy::new(|| Vocabulary::new(SOFT_SKILLS.to_vec()));

static KEYWORD_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    IMPORTANT_KEYWORDS
        .iter()
        .map(|k| (*k, Regex::new(&word_pattern(k)).expect("keyword pattern is a valid regex")))
        .collect()
});

static ACHIEVEMENT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)(?:increased|improved|reduced|achieved|delivered|managed|led|built|developed|created|designed|implemented)\s+[^.!?]*?(?:\d+%|\$[\d,]+|\d+\s*(?:million|thousand|users|customers|projects|teams))",
        r"(?i)\d+%\s*(?:increase|improvement|reduction|growth)",
        r"(?i)\$[\d,]+(?:\s*(?:million|thousand|k|m))?",
        r"(?i)(?:managed|led)\s+(?:team of\s+)?\d+",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("achievement pattern is a valid regex"))
    .collect()
});

/// Case-insensitive whole-word pattern for a literal phrase.
fn word_pattern(phrase: &str) -> String {
    format!(r"(?i)\b{}\b", regex::escape(phrase))
}

/// Uppercase the first character of each space-separated word.
///
/// The rest of each word is left as written, so `"react native"` becomes
/// `"React Native"` and `"ci/cd"` becomes `"Ci/cd"`.
pub fn title_case(phrase: &str) -> String {
    phrase
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

pub fn extract_skills(text: &str) -> SkillSet {
    let skills = SkillSet {
        technical: TECHNICAL_VOCABULARY.extract(text, MAX_TECHNICAL_SKILLS),
        soft: SOFT_VOCABULARY.extract(text, MAX_SOFT_SKILLS),
    };
    debug!(
        "Extracted {} technical and {} soft skills",
        skills.technical.len(),
        skills.soft.len()
    );
    skills
}

pub fn extract_keywords(text: &str) -> KeywordCounts {
    let lowered = text.to_lowercase();

    KEYWORD_PATTERNS
        .iter()
        .filter_map(|(keyword, pattern)| {
            let count = pattern.find_iter(&lowered).count();
            (count > 0).then(|| (keyword.to_string(), count))
        })
        .collect()
}

/// Quantified accomplishment phrases, at most three per pattern family and
/// five overall.
pub fn extract_achievements(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();

    ACHIEVEMENT_PATTERNS
        .iter()
        .flat_map(|pattern| {
            pattern
                .find_iter(text)
                .take(ACHIEVEMENTS_PER_PATTERN)
                .map(|m| m.as_str().to_string())
        })
        .filter(|achievement| seen.insert(achievement.clone()))
        .take(MAX_ACHIEVEMENTS)
        .collect()
}
