use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};

use crate::core::tables::{self, SkillLevel};
use crate::models::{Breakdown, Profile, ScoreBreakdown, ScoringWeights};

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z0-9']+").expect("token regex"));

/// Normalized (0-1) sub-scores of one viewer/candidate pair, plus the overlaps
/// that produced them
#[derive(Debug, Clone, PartialEq)]
pub struct PairSignals {
    pub sports: f64,
    pub availability: f64,
    pub college_year: f64,
    pub major_bio: f64,
    pub shared_sports: Vec<String>,
    pub shared_slots: Vec<String>,
    pub shared_tokens: Vec<String>,
    pub same_major: bool,
}

/// Score a candidate (0-100) against a viewer.
///
/// Scoring formula:
/// score = (
///     sports_score * 0.55 +        # Shared sports at similar levels
///     availability_score * 0.20 +  # Jaccard of day:slot tokens
///     college_year_score * 0.10 +  # Closer years = higher
///     major_bio_score * 0.15       # Same major, overlapping bio words
/// ) * 100
///
/// Pure and total: identical inputs always give identical output.
pub fn score_pair(viewer: &Profile, candidate: &Profile, weights: &ScoringWeights) -> ScoreBreakdown {
    let signals = analyze_pair(viewer, candidate);

    let total = signals.sports * weights.sports
        + signals.availability * weights.availability
        + signals.college_year * weights.college_year
        + signals.major_bio * weights.major_bio;

    // Configured weights need not sum to 1
    let total = total.min(1.0).max(0.0);

    ScoreBreakdown {
        score: to_percent(total),
        reasons: build_reasons(&signals),
        breakdown: Breakdown {
            sports: to_percent(signals.sports),
            availability: to_percent(signals.availability),
            college_year: to_percent(signals.college_year),
            major_bio: to_percent(signals.major_bio),
        },
    }
}

/// Compute the four sub-scores without weighting them
pub fn analyze_pair(viewer: &Profile, candidate: &Profile) -> PairSignals {
    let (sports, shared_sports) = sports_score(viewer, candidate);

    let viewer_slots = availability_slots(viewer);
    let candidate_slots = availability_slots(candidate);
    let availability = jaccard_similarity(&viewer_slots, &candidate_slots);
    let shared_slots = viewer_slots.intersection(&candidate_slots).cloned().collect();

    let college_year = college_year_score(viewer, candidate);

    let (major_bio, same_major, shared_tokens) = major_bio_score(viewer, candidate);

    PairSignals {
        sports,
        availability,
        college_year,
        major_bio,
        shared_sports,
        shared_slots,
        shared_tokens,
        same_major,
    }
}

/// Lower-cased sport name -> skill tier. A later entry for the same sport wins.
fn sport_map(profile: &Profile) -> BTreeMap<String, u8> {
    profile
        .sports
        .iter()
        .filter_map(|entry| {
            let name = normalized(Some(&entry.sport));
            if name.is_empty() {
                return None;
            }
            Some((name, SkillLevel::parse(entry.skill_level.as_deref()).tier()))
        })
        .collect()
}

/// Sports sub-score (0-1) and the sorted shared sport names
fn sports_score(viewer: &Profile, candidate: &Profile) -> (f64, Vec<String>) {
    let viewer_sports = sport_map(viewer);
    let candidate_sports = sport_map(candidate);

    let shared: Vec<String> = viewer_sports
        .keys()
        .filter(|name| candidate_sports.contains_key(*name))
        .cloned()
        .collect();

    if shared.is_empty() {
        return (0.0, shared);
    }

    let coverage = shared.len() as f64 / viewer_sports.len().max(candidate_sports.len()) as f64;

    let skill_alignment = shared
        .iter()
        .map(|name| {
            let gap = (viewer_sports[name] as f64 - candidate_sports[name] as f64).abs();
            (1.0 - tables::SKILL_GAP_PENALTY * gap).max(0.0)
        })
        .sum::<f64>()
        / shared.len() as f64;

    let score = (tables::COVERAGE_WEIGHT * coverage + tables::SKILL_ALIGNMENT_WEIGHT * skill_alignment).min(1.0);

    (score, shared)
}

/// Expand availability into literal `day:slot` tokens.
///
/// Shortcut tokens such as "Morning" stay opaque here; they are not expanded
/// to hours, so "Morning" never overlaps "9:00".
fn availability_slots(profile: &Profile) -> BTreeSet<String> {
    let mut slots = BTreeSet::new();
    for (day, day_slots) in &profile.availability {
        let day_key = normalized(Some(day));
        if day_key.is_empty() {
            continue;
        }
        for slot in day_slots {
            let slot_key = normalized(Some(slot));
            if !slot_key.is_empty() {
                slots.insert(format!("{day_key}:{slot_key}"));
            }
        }
    }
    slots
}

#[inline]
fn college_year_score(viewer: &Profile, candidate: &Profile) -> f64 {
    match (
        tables::college_year_index(viewer.college_year.as_deref()),
        tables::college_year_index(candidate.college_year.as_deref()),
    ) {
        (Some(a), Some(b)) => {
            let gap = a.abs_diff(b) as f64;
            (1.0 - tables::YEAR_GAP_PENALTY * gap).max(0.0)
        }
        _ => 0.0,
    }
}

/// Major/bio sub-score (0-1), whether majors match, and up to three shared tokens
fn major_bio_score(viewer: &Profile, candidate: &Profile) -> (f64, bool, Vec<String>) {
    let viewer_major = normalized(viewer.major.as_deref());
    let candidate_major = normalized(candidate.major.as_deref());
    let same_major = !viewer_major.is_empty() && viewer_major == candidate_major;
    let major_match = if same_major { 1.0 } else { 0.0 };

    let viewer_tokens = profile_tokens(viewer);
    let candidate_tokens = profile_tokens(candidate);
    let text_similarity = jaccard_similarity(&viewer_tokens, &candidate_tokens);

    let shared_tokens = viewer_tokens
        .intersection(&candidate_tokens)
        .take(tables::MAX_LISTED)
        .cloned()
        .collect();

    let score = (tables::MAJOR_MATCH_WEIGHT * major_match + tables::TEXT_SIMILARITY_WEIGHT * text_similarity).min(1.0);

    (score, same_major, shared_tokens)
}

fn profile_tokens(profile: &Profile) -> BTreeSet<String> {
    let text = format!(
        "{} {}",
        profile.major.as_deref().unwrap_or(""),
        profile.bio.as_deref().unwrap_or("")
    );
    tokenize(&text)
}

/// Lower-case, split into alphanumeric/apostrophe runs, and drop one-letter
/// words and stopwords
pub fn tokenize(text: &str) -> BTreeSet<String> {
    let lowered = text.to_lowercase();
    TOKEN_RE
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|token| token.chars().count() > 1 && !tables::STOPWORDS.contains(*token))
        .map(str::to_string)
        .collect()
}

/// |A ∩ B| / |A ∪ B|, or 0 when either side is empty
pub fn jaccard_similarity(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    let union = a.union(b).count();
    intersection as f64 / union as f64
}

fn build_reasons(signals: &PairSignals) -> Vec<String> {
    let mut reasons = Vec::new();

    if !signals.shared_sports.is_empty() {
        let listed: Vec<&str> = signals
            .shared_sports
            .iter()
            .take(tables::MAX_LISTED)
            .map(String::as_str)
            .collect();
        reasons.push(format!("{}: {}", tables::REASON_SHARED_SPORTS, listed.join(", ")));
    }
    if !signals.shared_slots.is_empty() {
        reasons.push(tables::REASON_AVAILABILITY.to_string());
    }
    if signals.college_year >= tables::SIMILAR_YEAR_THRESHOLD {
        reasons.push(tables::REASON_COLLEGE_YEAR.to_string());
    }
    if signals.same_major {
        reasons.push(tables::REASON_SAME_MAJOR.to_string());
    } else if !signals.shared_tokens.is_empty() {
        reasons.push(format!(
            "{}: {}",
            tables::REASON_COMMON_INTERESTS,
            signals.shared_tokens.join(", ")
        ));
    }

    if reasons.is_empty() {
        reasons.push(tables::REASON_OVERALL.to_string());
    }
    reasons.truncate(tables::MAX_REASONS);
    reasons
}

#[inline]
fn normalized(value: Option<&str>) -> String {
    value.map(|v| v.trim().to_lowercase()).unwrap_or_default()
}

/// Scale a 0-1 value to 0-100 with two decimals
#[inline]
fn to_percent(value: f64) -> f64 {
    round_hundredths(value * 100.0)
}

/// Round to two decimals
#[inline]
pub(crate) fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
