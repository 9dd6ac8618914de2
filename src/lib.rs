//! PokeMe Match - discovery ranking for the PokeMe college sports app
//!
//! This library scores how well two students would fit as sports partners and
//! ranks a discovery feed, asking an external AI ranker first and falling back
//! to a deterministic heuristic whenever that answer is unusable.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{rank_heuristic, score_pair, Ranker, Ranking};
pub use models::{Profile, RankedCandidate, RankingSource, ScoreBreakdown, ScoringWeights};
pub use services::{AnthropicRanker, RankingService, RankingServiceError};
