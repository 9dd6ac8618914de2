//! Prompt construction and response cleanup for the AI ranker.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::models::Profile;
use crate::services::ranking::RankingServiceError;

static OPENING_FENCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^```\w*\n?").expect("opening fence regex"));
static CLOSING_FENCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n?```$").expect("closing fence regex"));

/// The parts of a profile shown to the model. Pictures and contact details
/// never leave the service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileSummary {
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(rename = "collegeYear")]
    pub college_year: String,
    pub major: String,
    pub bio: String,
    pub sports: String,
    pub availability: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}

/// Summarize a profile for the prompt
pub fn summarize(profile: &Profile) -> ProfileSummary {
    let sports = profile
        .sports
        .iter()
        .map(|s| {
            let sport = if s.sport.is_empty() { "?" } else { s.sport.as_str() };
            format!("{} ({})", sport, s.skill_level.as_deref().unwrap_or("?"))
        })
        .collect::<Vec<_>>()
        .join(", ");

    let availability = profile
        .availability
        .iter()
        .filter(|(_, slots)| !slots.is_empty())
        .map(|(day, slots)| format!("{}: {}", day, slots.join(", ")))
        .collect::<Vec<_>>()
        .join("; ");

    ProfileSummary {
        display_name: profile.display_name.clone().unwrap_or_else(|| "Unknown".to_string()),
        college_year: non_empty_or(profile.college_year.as_deref(), "Not set"),
        major: non_empty_or(profile.major.as_deref(), "Not set"),
        bio: profile.bio.clone().unwrap_or_default(),
        sports: if sports.is_empty() { "None".to_string() } else { sports },
        availability: if availability.is_empty() { "Not set".to_string() } else { availability },
        index: None,
    }
}

fn non_empty_or(value: Option<&str>, fallback: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => fallback.to_string(),
    }
}

/// Build the ranking prompt for a viewer and an indexed candidate batch
pub fn build_prompt(viewer: &Profile, candidates: &[Profile]) -> Result<String, RankingServiceError> {
    let viewer_json = serde_json::to_string_pretty(&summarize(viewer))?;

    let summaries: Vec<ProfileSummary> = candidates
        .iter()
        .enumerate()
        .map(|(i, c)| ProfileSummary {
            index: Some(i),
            ..summarize(c)
        })
        .collect();
    let candidates_json = serde_json::to_string_pretty(&summaries)?;

    Ok(format!(
        r#"You are a matchmaking AI for a college sports app called PokeMe. Your job is to score how compatible each candidate is with the viewer for playing sports together.

VIEWER PROFILE:
{viewer_json}

CANDIDATE PROFILES:
{candidates_json}

For each candidate, evaluate compatibility based on:
- Sports overlap and skill level alignment (most important ~55%)
- Availability overlap - can they actually meet up? (~20%)
- College year proximity (~10%)
- Shared interests from major/bio (~15%)

Return a JSON array (no markdown, no explanation) where each element has:
- "id": the candidate's index (0-based)
- "score": integer 0-100 (overall compatibility)
- "reasons": array of 1-3 short human-readable reasons (e.g. "Both play volleyball at similar levels", "Free on Saturday afternoons")
- "breakdown": object with "sports", "availability", "collegeYear", "majorBio" each 0-100

Example response format:
[{{"id": 0, "score": 82, "reasons": ["Both play tennis at intermediate level", "Overlapping Saturday availability"], "breakdown": {{"sports": 90, "availability": 75, "collegeYear": 80, "majorBio": 60}}}}]

Return ONLY the JSON array, nothing else."#
    ))
}

/// Strip an optional markdown code fence and parse the model output as a JSON array
pub fn parse_ranking_text(text: &str) -> Result<Vec<Value>, RankingServiceError> {
    let mut cleaned = text.trim().to_string();
    if cleaned.starts_with("```") {
        cleaned = OPENING_FENCE_RE.replace(&cleaned, "").into_owned();
        cleaned = CLOSING_FENCE_RE.replace(&cleaned, "").trim().to_string();
    }

    match serde_json::from_str::<Value>(&cleaned)? {
        Value::Array(entries) => Ok(entries),
        Value::Object(_) => Err(RankingServiceError::NotAList("object")),
        Value::String(_) => Err(RankingServiceError::NotAList("string")),
        Value::Number(_) => Err(RankingServiceError::NotAList("number")),
        Value::Bool(_) => Err(RankingServiceError::NotAList("bool")),
        Value::Null => Err(RankingServiceError::NotAList("null")),
    }
}
