use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use validator::Validate;

use crate::core::tables;
use crate::models::lenient;

/// Matchable attributes of a user, as handed over by the profile store
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct Profile {
    #[validate(length(min = 1))]
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: String,
    #[serde(rename = "displayName", default, deserialize_with = "lenient::opt_string")]
    pub display_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub major: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub bio: Option<String>,
    #[serde(rename = "collegeYear", default, deserialize_with = "lenient::opt_string")]
    pub college_year: Option<String>,
    #[serde(default, deserialize_with = "lenient::sports")]
    pub sports: Vec<SportEntry>,
    #[serde(default, deserialize_with = "lenient::availability")]
    pub availability: BTreeMap<String, Vec<String>>,
    /// Fields the ranking engine does not read, carried back to the caller untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Profile {
    /// Display name normalized for ordering ties
    pub fn sort_name(&self) -> String {
        self.display_name
            .as_deref()
            .unwrap_or("")
            .trim()
            .to_lowercase()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SportEntry {
    pub sport: String,
    #[serde(rename = "skillLevel", default, skip_serializing_if = "Option::is_none")]
    pub skill_level: Option<String>,
}

/// The four named sub-scores, each in [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    pub sports: f64,
    pub availability: f64,
    #[serde(rename = "collegeYear")]
    pub college_year: f64,
    #[serde(rename = "majorBio")]
    pub major_bio: f64,
}

impl Breakdown {
    /// Neutral breakdown used when the AI ranker omits one
    pub fn neutral() -> Self {
        Self {
            sports: tables::NEUTRAL_AI_SCORE,
            availability: tables::NEUTRAL_AI_SCORE,
            college_year: tables::NEUTRAL_AI_SCORE,
            major_bio: tables::NEUTRAL_AI_SCORE,
        }
    }
}

/// Compatibility of one candidate for one viewer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub score: f64,
    pub reasons: Vec<String>,
    pub breakdown: Breakdown,
}

/// A candidate placed in the ranked discovery feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedCandidate {
    #[serde(rename = "candidateId")]
    pub candidate_id: String,
    pub candidate: Profile,
    pub recommendation: ScoreBreakdown,
}

/// Where the scores of a ranked batch came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankingSource {
    /// The external ranker answered; omitted candidates were scored heuristically
    Ai,
    Heuristic,
}

/// Weights applied to the normalized sub-scores
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub sports: f64,
    pub availability: f64,
    pub college_year: f64,
    pub major_bio: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            sports: tables::SPORTS_WEIGHT,
            availability: tables::AVAILABILITY_WEIGHT,
            college_year: tables::COLLEGE_YEAR_WEIGHT,
            major_bio: tables::MAJOR_BIO_WEIGHT,
        }
    }
}

/// A sport both users play, with each side's level as entered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedSport {
    pub sport: String,
    #[serde(rename = "userLevel")]
    pub user_level: Option<String>,
    #[serde(rename = "partnerLevel")]
    pub partner_level: Option<String>,
}
