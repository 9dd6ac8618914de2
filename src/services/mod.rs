// Service exports
pub mod anthropic;
pub mod prompt;
pub mod ranking;

pub use anthropic::AnthropicRanker;
pub use prompt::{build_prompt, parse_ranking_text, summarize, ProfileSummary};
pub use ranking::{RankingService, RankingServiceError};
