use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::{compatible_times, filter_candidates, score_pair, shared_sports, DiscoveryFilter, Ranker};
use crate::models::{
    CompatibleTimesRequest, CompatibleTimesResponse, DiscoverProfile, DiscoverRequest, DiscoverResponse,
    ErrorResponse, HealthResponse, RankingSource, ScoreRequest,
};
use crate::services::RankingService;

/// Ranking model reported when every score came from the heuristic scorer
pub const HEURISTIC_MODEL: &str = "heuristic-v1";

/// Application state shared across all handlers
pub struct AppState<S> {
    pub ranker: Arc<Ranker<S>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            ranker: Arc::clone(&self.ranker),
        }
    }
}

/// Configure all discovery-related routes
pub fn configure<S: RankingService + 'static>(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check::<S>))
        .route("/discover", web::post().to(discover::<S>))
        .route("/score", web::post().to(score::<S>))
        .route("/compatible-times", web::post().to(get_compatible_times));
}

/// Health check endpoint
async fn health_check<S: RankingService + 'static>(state: web::Data<AppState<S>>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        ranking_model: state.ranker.service().model_name().to_string(),
    })
}

/// Discovery feed endpoint
///
/// POST /api/v1/discover
///
/// Request body:
/// ```json
/// {
///   "viewer": { "id": "string", ... },
///   "candidates": [{ "id": "string", ... }],
///   "excludeUserIds": ["string"],
///   "sport": "string"
/// }
/// ```
async fn discover<S: RankingService + 'static>(
    state: web::Data<AppState<S>>,
    req: web::Json<DiscoverRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for discover request: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let DiscoverRequest {
        viewer,
        candidates,
        exclude_user_ids,
        sport,
    } = req.into_inner();

    let filter = DiscoveryFilter::new(viewer.id.clone(), exclude_user_ids, sport);
    let candidates = filter_candidates(candidates, &filter);
    let total_candidates = candidates.len();

    tracing::info!("Ranking discovery feed for user: {}, candidates: {}", viewer.id, total_candidates);

    let ranking = state.ranker.rank_with_source(&viewer, candidates).await;

    let ranking_model = match ranking.source {
        RankingSource::Ai => state.ranker.service().model_name().to_string(),
        RankingSource::Heuristic => HEURISTIC_MODEL.to_string(),
    };

    let profiles = ranking
        .candidates
        .into_iter()
        .map(|ranked| DiscoverProfile {
            profile: ranked.candidate,
            recommendation_score: ranked.recommendation.score,
            recommendation_reasons: ranked.recommendation.reasons,
            recommendation_breakdown: ranked.recommendation.breakdown,
        })
        .collect::<Vec<_>>();

    tracing::info!(
        "Returning {} profiles for user {} (model: {})",
        profiles.len(),
        viewer.id,
        ranking_model
    );

    HttpResponse::Ok().json(DiscoverResponse {
        profiles,
        ranking_model,
        total_candidates,
    })
}

/// Heuristic score for one pair
///
/// POST /api/v1/score
async fn score<S: RankingService + 'static>(
    state: web::Data<AppState<S>>,
    req: web::Json<ScoreRequest>,
) -> impl Responder {
    let result = score_pair(&req.viewer, &req.candidate, state.ranker.weights());
    HttpResponse::Ok().json(result)
}

/// Overlapping hours and shared sports of two users
///
/// POST /api/v1/compatible-times
async fn get_compatible_times(req: web::Json<CompatibleTimesRequest>) -> impl Responder {
    HttpResponse::Ok().json(CompatibleTimesResponse {
        compatible_times: compatible_times(&req.user, &req.partner),
        shared_sports: shared_sports(&req.user, &req.partner),
    })
}
