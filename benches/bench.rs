// Criterion benchmarks for PokeMe Match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pokeme_match::core::{rank_heuristic, score_pair};
use pokeme_match::models::{Profile, ScoringWeights, SportEntry};

const SPORTS: &[&str] = &["Basketball", "Soccer", "Tennis", "Running", "Swimming", "Volleyball"];
const LEVELS: &[&str] = &["Beginner", "Intermediate", "Advanced"];
const YEARS: &[&str] = &["Freshman", "Sophomore", "Junior", "Senior", "Graduate"];
const DAYS: &[&str] = &["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"];
const SLOTS: &[&str] = &["Morning", "Afternoon", "Evening", "9:00", "18:00"];

fn create_candidate(id: usize) -> Profile {
    Profile {
        id: id.to_string(),
        display_name: Some(format!("User {}", id)),
        major: Some(if id % 2 == 0 { "Economics" } else { "Computer Science" }.to_string()),
        bio: Some("pickup games on weekends and evening runs around campus".to_string()),
        college_year: Some(YEARS[id % YEARS.len()].to_string()),
        sports: (0..1 + id % 3)
            .map(|k| SportEntry {
                sport: SPORTS[(id + k) % SPORTS.len()].to_string(),
                skill_level: Some(LEVELS[(id + k) % LEVELS.len()].to_string()),
            })
            .collect(),
        availability: (0..2)
            .map(|k| {
                (
                    DAYS[(id + k) % DAYS.len()].to_string(),
                    vec![SLOTS[(id + k) % SLOTS.len()].to_string()],
                )
            })
            .collect(),
        ..Default::default()
    }
}

fn bench_score_pair(c: &mut Criterion) {
    let viewer = create_candidate(0);
    let candidate = create_candidate(7);
    let weights = ScoringWeights::default();

    c.bench_function("score_pair", |b| {
        b.iter(|| score_pair(black_box(&viewer), black_box(&candidate), black_box(&weights)));
    });
}

fn bench_ranking(c: &mut Criterion) {
    let viewer = create_candidate(0);
    let weights = ScoringWeights::default();

    let mut group = c.benchmark_group("ranking");

    for candidate_count in [10, 50, 100, 500, 1000].iter() {
        let candidates: Vec<Profile> = (1..=*candidate_count).map(create_candidate).collect();

        group.bench_with_input(
            BenchmarkId::new("rank_heuristic", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| rank_heuristic(black_box(&viewer), black_box(candidates.clone()), black_box(&weights)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_score_pair, bench_ranking);

criterion_main!(benches);
