use std::collections::HashSet;

use crate::models::Profile;

/// Exclusions applied to the discovery feed before ranking
#[derive(Debug, Clone, Default)]
pub struct DiscoveryFilter {
    pub viewer_id: String,
    /// Users already poked or matched with
    pub exclude_ids: HashSet<String>,
    /// Only keep candidates who play this sport (case-insensitive)
    pub sport: Option<String>,
}

impl DiscoveryFilter {
    pub fn new(viewer_id: impl Into<String>, exclude_ids: impl IntoIterator<Item = String>, sport: Option<String>) -> Self {
        Self {
            viewer_id: viewer_id.into(),
            exclude_ids: exclude_ids.into_iter().collect(),
            sport: sport
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty()),
        }
    }
}

/// Check if a candidate may appear in the viewer's discovery feed
#[inline]
pub fn is_discoverable(candidate: &Profile, filter: &DiscoveryFilter) -> bool {
    // Never show the viewer to themselves
    if candidate.id == filter.viewer_id {
        return false;
    }

    if filter.exclude_ids.contains(&candidate.id) {
        return false;
    }

    match &filter.sport {
        Some(sport) => plays_sport(candidate, sport),
        None => true,
    }
}

/// Whether the profile lists `sport` (compared case-insensitively)
#[inline]
pub fn plays_sport(profile: &Profile, sport: &str) -> bool {
    let wanted = sport.trim().to_lowercase();
    profile
        .sports
        .iter()
        .any(|entry| entry.sport.trim().to_lowercase() == wanted)
}

/// Drop every candidate the filter excludes, preserving input order
pub fn filter_candidates(candidates: Vec<Profile>, filter: &DiscoveryFilter) -> Vec<Profile> {
    candidates
        .into_iter()
        .filter(|candidate| is_discoverable(candidate, filter))
        .collect()
}
