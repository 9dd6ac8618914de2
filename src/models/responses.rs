use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::domain::{Breakdown, Profile, SharedSport};

/// A discovery profile annotated with its recommendation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoverProfile {
    #[serde(flatten)]
    pub profile: Profile,
    #[serde(rename = "recommendationScore")]
    pub recommendation_score: f64,
    #[serde(rename = "recommendationReasons")]
    pub recommendation_reasons: Vec<String>,
    #[serde(rename = "recommendationBreakdown")]
    pub recommendation_breakdown: Breakdown,
}

/// Response for the discover endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoverResponse {
    pub profiles: Vec<DiscoverProfile>,
    #[serde(rename = "rankingModel")]
    pub ranking_model: String,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Response for the compatible-times endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibleTimesResponse {
    #[serde(rename = "compatibleTimes")]
    pub compatible_times: BTreeMap<String, Vec<String>>,
    #[serde(rename = "sharedSports")]
    pub shared_sports: Vec<SharedSport>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "rankingModel")]
    pub ranking_model: String,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
