use serde_json::Value;
use std::future::Future;
use thiserror::Error;

use crate::models::Profile;

/// Errors that can occur when asking the external service to rank a batch
#[derive(Debug, Error)]
pub enum RankingServiceError {
    #[error("no API credential configured")]
    MissingCredential,

    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("response contained no text content")]
    EmptyResponse,

    #[error("response is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("expected a JSON array, got {0}")]
    NotAList(&'static str),
}

/// An external, unreliable ranker for a whole candidate batch.
///
/// Implementations return the raw entries the service produced; callers own
/// every check on their shape and count. Any error means "no AI result".
pub trait RankingService: Send + Sync {
    /// Rank `candidates` for `viewer` in one request.
    fn rank_batch(
        &self,
        viewer: &Profile,
        candidates: &[Profile],
    ) -> impl Future<Output = Result<Vec<Value>, RankingServiceError>> + Send;

    /// Identifier reported to clients as the ranking model
    fn model_name(&self) -> &str;
}
