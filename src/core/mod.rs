// Core algorithm exports
pub mod availability;
pub mod filters;
pub mod ranker;
pub mod scoring;
pub mod tables;

pub use availability::{compatible_times, expand_availability, expand_slots, shared_sports};
pub use filters::{filter_candidates, is_discoverable, DiscoveryFilter};
pub use ranker::{accept_ai_entries, rank_heuristic, recommendation_from_entry, sort_ranked, Ranker, Ranking};
pub use scoring::{analyze_pair, score_pair, PairSignals};
