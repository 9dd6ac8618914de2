use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::Profile;

/// Request to rank a discovery feed
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DiscoverRequest {
    #[validate(nested)]
    pub viewer: Profile,
    #[validate(length(max = 500))]
    #[serde(default)]
    pub candidates: Vec<Profile>,
    /// Ids the viewer already poked or matched with
    #[serde(default, alias = "exclude_user_ids", rename = "excludeUserIds")]
    pub exclude_user_ids: Vec<String>,
    #[serde(default)]
    pub sport: Option<String>,
}

/// Request to score a single viewer/candidate pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub viewer: Profile,
    pub candidate: Profile,
}

/// Request for the hours two matched users can both play
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibleTimesRequest {
    pub user: Profile,
    pub partner: Profile,
}
