// Unit tests for PokeMe Match heuristic scoring

use pokeme_match::core::{analyze_pair, rank_heuristic, score_pair};
use pokeme_match::models::{Profile, ScoringWeights, SportEntry};
use serde_json::json;

fn profile(value: serde_json::Value) -> Profile {
    serde_json::from_value(value).expect("valid profile json")
}

fn scenario_a_viewer() -> Profile {
    profile(json!({
        "id": "viewer",
        "displayName": "Viewer",
        "major": "Computer Science",
        "bio": "I like pickup basketball and evening runs",
        "sports": [
            {"sport": "Basketball", "skillLevel": "Intermediate"},
            {"sport": "Running", "skillLevel": "Beginner"},
        ],
        "collegeYear": "Junior",
        "availability": {"Monday": ["Evening"], "Wednesday": ["Evening"]},
    }))
}

#[test]
fn test_shared_profile_signals_rank_higher() {
    let viewer = scenario_a_viewer();
    let strong = profile(json!({
        "id": "x",
        "major": "Computer Science",
        "bio": "Basketball and running are my favorites too",
        "sports": [
            {"sport": "Basketball", "skillLevel": "Advanced"},
            {"sport": "Running", "skillLevel": "Intermediate"},
        ],
        "collegeYear": "Senior",
        "availability": {"Monday": ["Evening"], "Friday": ["Morning"]},
    }));
    let weak = profile(json!({
        "id": "y",
        "major": "Design",
        "bio": "Mostly swimming and yoga",
        "sports": [{"sport": "Swimming", "skillLevel": "Advanced"}],
        "collegeYear": "Freshman",
        "availability": {"Tuesday": ["Morning"]},
    }));

    let weights = ScoringWeights::default();
    let strong_score = score_pair(&viewer, &strong, &weights);
    let weak_score = score_pair(&viewer, &weak, &weights);

    assert!(strong_score.score > weak_score.score);
    assert!(strong_score.reasons.iter().any(|r| r.starts_with("Shared sports")));
    assert_eq!(strong_score.reasons[0], "Shared sports: basketball, running");
}

#[test]
fn test_scoring_is_deterministic() {
    let viewer = scenario_a_viewer();
    let candidate = profile(json!({
        "id": "c",
        "sports": [{"sport": "basketball"}],
        "availability": {"monday": ["evening"]},
    }));
    let weights = ScoringWeights::default();

    let first = score_pair(&viewer, &candidate, &weights);
    let second = score_pair(&viewer, &candidate, &weights);

    assert_eq!(first, second);
    assert_eq!(first.score.to_bits(), second.score.to_bits());
}

#[test]
fn test_scores_stay_in_bounds() {
    let viewer = scenario_a_viewer();
    let candidates = vec![
        profile(json!({"id": "empty"})),
        profile(json!({"id": "nulls", "major": null, "bio": null, "sports": null, "availability": null})),
        profile(json!({"id": "junk", "major": 1, "sports": [1, "two"], "availability": {"Monday": "all"}})),
        scenario_a_viewer(),
    ];

    for candidate in &candidates {
        let result = score_pair(&viewer, candidate, &ScoringWeights::default());
        for value in [
            result.score,
            result.breakdown.sports,
            result.breakdown.availability,
            result.breakdown.college_year,
            result.breakdown.major_bio,
        ] {
            assert!((0.0..=100.0).contains(&value), "{} out of bounds for {}", value, candidate.id);
        }
        assert!(!result.reasons.is_empty());
        assert!(result.reasons.len() <= 3);
    }
}

#[test]
fn test_duplicate_sport_entries_use_last_level() {
    let mut viewer = Profile::default();
    viewer.sports = vec![SportEntry {
        sport: "Tennis".to_string(),
        skill_level: Some("Advanced".to_string()),
    }];
    let mut candidate = Profile::default();
    candidate.sports = vec![
        SportEntry { sport: "tennis".to_string(), skill_level: Some("Beginner".to_string()) },
        SportEntry { sport: "TENNIS".to_string(), skill_level: Some("Advanced".to_string()) },
    ];

    let signals = analyze_pair(&viewer, &candidate);

    assert!((signals.sports - 1.0).abs() < 1e-9);
    assert_eq!(signals.shared_sports, vec!["tennis"]);
}

#[test]
fn test_heuristic_ranking_orders_highest_first() {
    let viewer = profile(json!({
        "id": "viewer",
        "major": "Economics",
        "bio": "Soccer and weekend games",
        "sports": [{"sport": "Soccer", "skillLevel": "Intermediate"}],
        "collegeYear": "Sophomore",
        "availability": {"Saturday": ["Morning"]},
    }));
    let low = profile(json!({
        "id": "u-low",
        "displayName": "Low Match",
        "major": "Biology",
        "bio": "Swimming only",
        "sports": [{"sport": "Swimming", "skillLevel": "Beginner"}],
        "collegeYear": "Graduate",
        "availability": {"Tuesday": ["Evening"]},
    }));
    let high = profile(json!({
        "id": "u-high",
        "displayName": "High Match",
        "major": "Economics",
        "bio": "Soccer on weekends",
        "sports": [{"sport": "Soccer", "skillLevel": "Advanced"}],
        "collegeYear": "Junior",
        "availability": {"Saturday": ["Morning"]},
    }));

    let ranked = rank_heuristic(&viewer, vec![low, high], &ScoringWeights::default());

    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].candidate_id, "u-high");
    assert!(ranked[0].recommendation.score >= ranked[1].recommendation.score);
}

#[test]
fn test_custom_weights_change_emphasis() {
    let viewer = scenario_a_viewer();
    let candidate = profile(json!({
        "id": "c",
        "collegeYear": "Junior",
    }));
    let year_only = ScoringWeights {
        sports: 0.0,
        availability: 0.0,
        college_year: 1.0,
        major_bio: 0.0,
    };

    let result = score_pair(&viewer, &candidate, &year_only);

    assert_eq!(result.score, 100.0);
    assert_eq!(result.reasons, vec!["Similar college year"]);
}

#[test]
fn test_scores_stay_in_bounds_with_unbalanced_weights() {
    let viewer = scenario_a_viewer();
    let candidates = vec![
        viewer.clone(),
        profile(json!({"id": "empty"})),
        profile(json!({
            "id": "partial",
            "sports": [{"sport": "Basketball", "skillLevel": "Advanced"}],
            "collegeYear": "Senior",
        })),
    ];
    let weight_sets = [
        ScoringWeights { sports: 0.7, ..ScoringWeights::default() },
        ScoringWeights { sports: 1.0, availability: 1.0, college_year: 1.0, major_bio: 1.0 },
        ScoringWeights { sports: -1.0, availability: 0.5, college_year: 0.5, major_bio: 0.5 },
    ];

    for weights in &weight_sets {
        for candidate in &candidates {
            let score = score_pair(&viewer, candidate, weights).score;
            assert!((0.0..=100.0).contains(&score), "score {score} out of range for {weights:?}");
        }
    }
    assert_eq!(score_pair(&viewer, &viewer, &weight_sets[0]).score, 100.0);
}
