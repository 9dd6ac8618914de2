//! Hour-level availability overlap for scheduling play sessions.
//!
//! Unlike the availability sub-score in [`crate::core::scoring`], shortcut
//! tokens are expanded here: "Morning" covers 6:00 through 11:00.

use std::collections::{BTreeMap, BTreeSet};

use crate::core::tables::SHORTCUT_HOURS;
use crate::models::{Profile, SharedSport};

/// Parse an "HH:00"-style token (or a bare hour) into 0-23
pub fn parse_hour(token: &str) -> Option<u8> {
    let hour: u8 = token.trim().split(':').next()?.trim().parse().ok()?;
    (hour <= 23).then_some(hour)
}

/// Expand a day's slot tokens to the set of hours they cover.
///
/// Unrecognized tokens are ignored.
pub fn expand_slots(slots: &[String]) -> BTreeSet<u8> {
    let mut hours = BTreeSet::new();
    for slot in slots {
        let key = slot.trim().to_lowercase();
        if let Some((_, range)) = SHORTCUT_HOURS.iter().find(|(name, _)| *name == key) {
            hours.extend(range.clone());
        } else if let Some(hour) = parse_hour(slot) {
            hours.insert(hour);
        }
    }
    hours
}

/// Expand every day of a profile's availability to hours
pub fn expand_availability(availability: &BTreeMap<String, Vec<String>>) -> BTreeMap<String, BTreeSet<u8>> {
    availability
        .iter()
        .map(|(day, slots)| (day.clone(), expand_slots(slots)))
        .collect()
}

/// Hours both users are free, per day, formatted "H:00". Days without any
/// overlap are omitted.
pub fn compatible_times(user: &Profile, partner: &Profile) -> BTreeMap<String, Vec<String>> {
    let user_hours = expand_availability(&user.availability);
    let partner_hours = expand_availability(&partner.availability);

    user_hours
        .iter()
        .filter_map(|(day, hours)| {
            let overlap: Vec<String> = hours
                .intersection(partner_hours.get(day)?)
                .map(|h| format!("{h}:00"))
                .collect();
            (!overlap.is_empty()).then(|| (day.clone(), overlap))
        })
        .collect()
}

/// Sports both users play (case-insensitive), ordered by sport name
pub fn shared_sports(user: &Profile, partner: &Profile) -> Vec<SharedSport> {
    let index = |profile: &Profile| -> BTreeMap<String, (String, Option<String>)> {
        profile
            .sports
            .iter()
            .map(|s| (s.sport.trim().to_lowercase(), (s.sport.clone(), s.skill_level.clone())))
            .collect()
    };

    let user_sports = index(user);
    let partner_sports = index(partner);

    user_sports
        .into_iter()
        .filter_map(|(key, (sport, user_level))| {
            let (_, partner_level) = partner_sports.get(&key)?;
            Some(SharedSport {
                sport,
                user_level,
                partner_level: partner_level.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SportEntry;

    fn slots(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    fn profile_with(availability: &[(&str, &[&str])], sports: &[(&str, &str)]) -> Profile {
        Profile {
            id: "u".to_string(),
            availability: availability
                .iter()
                .map(|(day, tokens)| (day.to_string(), slots(tokens)))
                .collect(),
            sports: sports
                .iter()
                .map(|(sport, level)| SportEntry {
                    sport: sport.to_string(),
                    skill_level: Some(level.to_string()),
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_hour() {
        assert_eq!(parse_hour("14:00"), Some(14));
        assert_eq!(parse_hour("09:00"), Some(9));
        assert_eq!(parse_hour("7"), Some(7));
        assert_eq!(parse_hour("24:00"), None);
        assert_eq!(parse_hour("noon"), None);
    }

    #[test]
    fn test_expand_shortcuts_and_hours() {
        let hours = expand_slots(&slots(&["Morning", "14:00", "bogus"]));

        assert_eq!(hours.len(), 7);
        assert!(hours.contains(&6));
        assert!(hours.contains(&11));
        assert!(hours.contains(&14));
        assert!(!hours.contains(&12));
    }

    #[test]
    fn test_compatible_times_expands_shortcuts() {
        let user = profile_with(&[("Monday", &["Morning"]), ("Friday", &["Evening"])], &[]);
        let partner = profile_with(&[("Monday", &["9:00", "13:00"]), ("Friday", &["8:00"])], &[]);

        let times = compatible_times(&user, &partner);

        assert_eq!(times.len(), 1);
        assert_eq!(times["Monday"], vec!["9:00"]);
    }

    #[test]
    fn test_shared_sports_keeps_both_levels() {
        let user = profile_with(&[], &[("Tennis", "Beginner"), ("Golf", "Advanced")]);
        let partner = profile_with(&[], &[("tennis", "Advanced")]);

        let shared = shared_sports(&user, &partner);

        assert_eq!(shared.len(), 1);
        assert_eq!(shared[0].sport, "Tennis");
        assert_eq!(shared[0].user_level.as_deref(), Some("Beginner"));
        assert_eq!(shared[0].partner_level.as_deref(), Some("Advanced"));
    }
}
