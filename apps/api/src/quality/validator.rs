//! Quality Validator: additive, deterministic scoring of parsed report sections.
//!
//! Checks (evaluated in this order, remark appended on failure):
//! 1. Completeness, once per section: ≥ 40 words → +25
//! 2. Keyword relevance: ≥ 3 of `KEYWORDS` in the combined text → +15
//! 3. Readability: > 5 sentence terminators AND > 150 words → +10
//!
//! The score is NOT capped here (max 125). Status is derived from the uncapped
//! score; capping to 100 happens in the caller via `cap_quality_score`.

use serde::{Deserialize, Serialize};

use crate::quality::sections::{Section, SectionMap};

pub const KEYWORDS: [&str; 5] = ["system", "implementation", "analysis", "design", "solution"];

pub const REQUIRED_SECTIONS: [Section; 4] = Section::ALL;

const MIN_SECTION_WORDS: usize = 40;
const SECTION_POINTS: u32 = 25;

const MIN_KEYWORD_HITS: usize = 3;
const KEYWORD_POINTS: u32 = 15;

const MIN_SENTENCES_EXCLUSIVE: usize = 5;
const MIN_WORDS_EXCLUSIVE: usize = 150;
const READABILITY_POINTS: u32 = 10;

const PASSED_THRESHOLD: u32 = 70;
const REVIEW_THRESHOLD: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ValidationStatus {
    Passed,
    Review,
    Failed,
}

impl ValidationStatus {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= PASSED_THRESHOLD => ValidationStatus::Passed,
            s if s >= REVIEW_THRESHOLD => ValidationStatus::Review,
            _ => ValidationStatus::Failed,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ValidationStatus::Passed => "PASSED",
            ValidationStatus::Review => "REVIEW",
            ValidationStatus::Failed => "FAILED",
        }
    }
}

impl std::fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Uncapped additive score, 0 – 125.
    pub score: u32,
    pub status: ValidationStatus,
    pub remarks: Vec<String>,
}

pub fn validate_sections(sections: &SectionMap) -> ValidationResult {
    let mut score = 0;
    let mut remarks = Vec::new();

    for section in REQUIRED_SECTIONS {
        if word_count(sections.get(section).trim()) >= MIN_SECTION_WORDS {
            score += SECTION_POINTS;
        } else {
            remarks.push(format!("{} too short", section.key()));
        }
    }

    let combined = sections.combined().to_lowercase();

    if keyword_hits(&combined) >= MIN_KEYWORD_HITS {
        score += KEYWORD_POINTS;
    } else {
        remarks.push("Low keyword relevance".to_string());
    }

    if sentence_terminators(&combined) > MIN_SENTENCES_EXCLUSIVE
        && word_count(&combined) > MIN_WORDS_EXCLUSIVE
    {
        score += READABILITY_POINTS;
    } else {
        remarks.push("Poor readability".to_string());
    }

    ValidationResult {
        score,
        status: ValidationStatus::from_score(score),
        remarks,
    }
}

fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Number of distinct `KEYWORDS` occurring as substrings.
fn keyword_hits(combined_lower: &str) -> usize {
    KEYWORDS
        .iter()
        .filter(|k| combined_lower.contains(**k))
        .count()
}

fn sentence_terminators(text: &str) -> usize {
    text.chars().filter(|c| matches!(c, '.' | '!' | '?')).count()
}
