use serde_json::Value;
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::core::scoring::{round_hundredths, score_pair};
use crate::core::tables;
use crate::models::{Breakdown, Profile, RankedCandidate, RankingSource, ScoreBreakdown, ScoringWeights};
use crate::services::RankingService;

/// Result of ranking one discovery batch
#[derive(Debug)]
pub struct Ranking {
    pub candidates: Vec<RankedCandidate>,
    pub source: RankingSource,
}

/// Ranking orchestrator - merges the external AI ranking with heuristic fallback
///
/// # Pipeline
/// 1. One batch request to the AI ranker
/// 2. Validation of the answer at a single boundary
/// 3. Heuristic scoring for anything the AI did not cover
/// 4. Deterministic ordering
///
/// Never fails: every external problem degrades to heuristic scores, and the
/// output always has one entry per input candidate.
#[derive(Debug, Clone)]
pub struct Ranker<S> {
    service: S,
    weights: ScoringWeights,
}

impl<S: RankingService> Ranker<S> {
    pub fn new(service: S, weights: ScoringWeights) -> Self {
        Self { service, weights }
    }

    pub fn with_default_weights(service: S) -> Self {
        Self::new(service, ScoringWeights::default())
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Rank candidates for a viewer, best first
    pub async fn rank(&self, viewer: &Profile, candidates: Vec<Profile>) -> Vec<RankedCandidate> {
        self.rank_with_source(viewer, candidates).await.candidates
    }

    /// Rank candidates and report whether the AI ranker contributed
    pub async fn rank_with_source(&self, viewer: &Profile, candidates: Vec<Profile>) -> Ranking {
        if candidates.is_empty() {
            return Ranking {
                candidates: Vec::new(),
                source: RankingSource::Heuristic,
            };
        }

        tracing::debug!("Ranking {} candidates for viewer {}", candidates.len(), viewer.id);

        let ai_scores = match self.service.rank_batch(viewer, &candidates).await {
            Ok(entries) => accept_ai_entries(entries, candidates.len()),
            Err(e) => {
                tracing::warn!("AI ranking failed: {}, falling back to heuristic", e);
                None
            }
        };

        match ai_scores {
            Some(mut by_index) => {
                let mut ranked: Vec<RankedCandidate> = candidates
                    .into_iter()
                    .enumerate()
                    .map(|(i, candidate)| {
                        let recommendation = match by_index.remove(&i) {
                            Some(ai) => ai,
                            None => {
                                tracing::debug!("AI ranking omitted candidate {}, scoring heuristically", i);
                                score_pair(viewer, &candidate, &self.weights)
                            }
                        };
                        RankedCandidate {
                            candidate_id: candidate.id.clone(),
                            candidate,
                            recommendation,
                        }
                    })
                    .collect();
                sort_ranked(&mut ranked);

                Ranking {
                    candidates: ranked,
                    source: RankingSource::Ai,
                }
            }
            None => {
                tracing::info!("Using heuristic fallback for recommendations");
                Ranking {
                    candidates: rank_heuristic(viewer, candidates, &self.weights),
                    source: RankingSource::Heuristic,
                }
            }
        }
    }
}

/// Score and order every candidate with the heuristic scorer alone
pub fn rank_heuristic(viewer: &Profile, candidates: Vec<Profile>, weights: &ScoringWeights) -> Vec<RankedCandidate> {
    let mut ranked: Vec<RankedCandidate> = candidates
        .into_iter()
        .map(|candidate| RankedCandidate {
            candidate_id: candidate.id.clone(),
            recommendation: score_pair(viewer, &candidate, weights),
            candidate,
        })
        .collect();

    sort_ranked(&mut ranked);
    ranked
}

/// Sort by score (descending), then display name, then id
pub fn sort_ranked(ranked: &mut [RankedCandidate]) {
    ranked.sort_by_cached_key(|r| (OrderedScore(r.recommendation.score), r.candidate.sort_name(), r.candidate_id.clone()));
}

/// Descending total order over scores
#[derive(Debug, Clone, Copy)]
struct OrderedScore(f64);

impl PartialEq for OrderedScore {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OrderedScore {}

impl PartialOrd for OrderedScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrderedScore {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.total_cmp(&self.0)
    }
}

/// Validate the AI answer for a batch of `expected` candidates.
///
/// The whole answer is rejected when its length differs from the batch.
/// Otherwise entries are keyed by their `id` (0-based index into the batch);
/// entries with a missing or out-of-range id are ignored.
pub fn accept_ai_entries(entries: Vec<Value>, expected: usize) -> Option<HashMap<usize, ScoreBreakdown>> {
    if entries.len() != expected {
        tracing::warn!(
            "AI ranking returned {} entries for {} candidates, discarding",
            entries.len(),
            expected
        );
        return None;
    }

    let by_index = entries
        .iter()
        .filter_map(|entry| {
            let index = entry.get("id").and_then(Value::as_u64)? as usize;
            (index < expected).then(|| (index, recommendation_from_entry(entry)))
        })
        .collect();

    Some(by_index)
}

/// Turn one AI entry into a score breakdown, clamping and defaulting fields
pub fn recommendation_from_entry(entry: &Value) -> ScoreBreakdown {
    let score = clamp_score(entry.get("score"));

    let reasons: Vec<String> = entry
        .get("reasons")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .take(tables::MAX_REASONS)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();
    let reasons = if reasons.is_empty() {
        vec![tables::REASON_AI_DEFAULT.to_string()]
    } else {
        reasons
    };

    let breakdown = match entry.get("breakdown") {
        Some(Value::Object(fields)) => Breakdown {
            sports: clamp_score(fields.get("sports")),
            availability: clamp_score(fields.get("availability")),
            college_year: clamp_score(fields.get("collegeYear")),
            major_bio: clamp_score(fields.get("majorBio")),
        },
        _ => Breakdown::neutral(),
    };

    ScoreBreakdown {
        score,
        reasons,
        breakdown,
    }
}

/// Clamp to 0-100 with two decimals. `-0.0` becomes `0.0` so it ties with zero.
#[inline]
fn clamp_score(value: Option<&Value>) -> f64 {
    let score = value.and_then(Value::as_f64).unwrap_or(tables::NEUTRAL_AI_SCORE);
    round_hundredths(score).clamp(0.0, 100.0) + 0.0
}
