//! Static vocabularies and tuning constants for compatibility scoring.

use once_cell::sync::Lazy;
use std::collections::HashSet;

// Sub-score weights (sum to 1.0)
pub const SPORTS_WEIGHT: f64 = 0.55;
pub const AVAILABILITY_WEIGHT: f64 = 0.20;
pub const COLLEGE_YEAR_WEIGHT: f64 = 0.10;
pub const MAJOR_BIO_WEIGHT: f64 = 0.15;

// Sports sub-score
pub const COVERAGE_WEIGHT: f64 = 0.7;
pub const SKILL_ALIGNMENT_WEIGHT: f64 = 0.3;
pub const SKILL_GAP_PENALTY: f64 = 0.25;

// College year sub-score
pub const YEAR_GAP_PENALTY: f64 = 0.35;
pub const SIMILAR_YEAR_THRESHOLD: f64 = 0.65;

// Major/bio sub-score
pub const MAJOR_MATCH_WEIGHT: f64 = 0.6;
pub const TEXT_SIMILARITY_WEIGHT: f64 = 0.4;

/// Longest list of sports or tokens quoted in a reason
pub const MAX_LISTED: usize = 3;
pub const MAX_REASONS: usize = 3;

/// Value substituted for any sub-score or score the AI ranker leaves out
pub const NEUTRAL_AI_SCORE: f64 = 50.0;

pub const REASON_SHARED_SPORTS: &str = "Shared sports";
pub const REASON_AVAILABILITY: &str = "Overlapping availability windows";
pub const REASON_COLLEGE_YEAR: &str = "Similar college year";
pub const REASON_SAME_MAJOR: &str = "Same major";
pub const REASON_COMMON_INTERESTS: &str = "Common interests";
pub const REASON_OVERALL: &str = "Recommended from overall profile compatibility";
pub const REASON_AI_DEFAULT: &str = "AI-recommended match";

/// Self-reported playing level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    /// Parse a level case-insensitively; unknown levels count as intermediate
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_lowercase()).as_deref() {
            Some("beginner") => SkillLevel::Beginner,
            Some("advanced") => SkillLevel::Advanced,
            _ => SkillLevel::Intermediate,
        }
    }

    pub fn tier(self) -> u8 {
        match self {
            SkillLevel::Beginner => 1,
            SkillLevel::Intermediate => 2,
            SkillLevel::Advanced => 3,
        }
    }
}

pub const COLLEGE_YEAR_ORDER: [&str; 5] = ["freshman", "sophomore", "junior", "senior", "graduate"];

/// Position of a college year in [`COLLEGE_YEAR_ORDER`], if recognized
pub fn college_year_index(raw: Option<&str>) -> Option<usize> {
    let year = raw?.trim().to_lowercase();
    COLLEGE_YEAR_ORDER.iter().position(|y| *y == year)
}

pub static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "an", "and", "are", "as", "at", "be", "for", "from", "i", "in", "is", "it", "my",
        "of", "on", "or", "our", "that", "the", "their", "to", "we", "with", "you", "your",
    ]
    .into_iter()
    .collect()
});

/// Hours covered by each named availability shortcut
pub const SHORTCUT_HOURS: [(&str, std::ops::RangeInclusive<u8>); 3] = [
    ("morning", 6..=11),
    ("afternoon", 12..=16),
    ("evening", 17..=21),
];
