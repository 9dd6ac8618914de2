// Model exports
pub mod domain;
pub mod lenient;
pub mod requests;
pub mod responses;

pub use domain::{Breakdown, Profile, RankedCandidate, RankingSource, ScoreBreakdown, ScoringWeights, SharedSport, SportEntry};
pub use requests::{CompatibleTimesRequest, DiscoverRequest, ScoreRequest};
pub use responses::{CompatibleTimesResponse, DiscoverProfile, DiscoverResponse, ErrorResponse, HealthResponse};
