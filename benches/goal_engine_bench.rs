// ABOUTME: Criterion benchmarks for the nutrition goal engine
// ABOUTME: Measures single-profile and batch goal calculation throughput
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the nutrition goal engine.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nutrifit_server::intelligence::{
    calculate_bmr, calculate_nutrition_goals, GoalDirection, ProfileSnapshot, Sex,
};

const ACTIVITY_LABELS: [&str; 5] = ["sedentary", "light", "moderate", "active", "very_active"];

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn generate_profiles(count: usize) -> Vec<ProfileSnapshot> {
    (0..count)
        .map(|index| {
            let direction = match index % 3 {
                0 => GoalDirection::Lose,
                1 => GoalDirection::Maintain,
                _ => GoalDirection::Gain,
            };
            ProfileSnapshot {
                weight_kg: Some((index % 80) as f64 + 45.0),
                height_cm: Some((index % 50) as f64 + 150.0),
                age_years: Some((index % 60) as u32 + 18),
                sex: Some(if index % 2 == 0 { "male" } else { "female" }.to_owned()),
                activity_level: Some(ACTIVITY_LABELS[index % ACTIVITY_LABELS.len()].to_owned()),
                goal_direction: direction,
            }
        })
        .collect()
}

fn bench_single_profile(c: &mut Criterion) {
    let mut group = c.benchmark_group("goal_engine_single");

    group.bench_function("bmr", |b| {
        b.iter(|| calculate_bmr(black_box(80.0), black_box(180.0), black_box(25), Sex::Male));
    });

    let profile = generate_profiles(1).remove(0);
    group.bench_function("full_goal_set", |b| {
        b.iter(|| calculate_nutrition_goals(black_box(&profile)));
    });

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("goal_engine_batch");

    for count in [100_usize, 1_000, 10_000] {
        let profiles = generate_profiles(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &profiles, |b, profiles| {
            b.iter(|| {
                profiles
                    .iter()
                    .filter_map(calculate_nutrition_goals)
                    .map(|goals| goals.daily_calorie_goal)
                    .sum::<i64>()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_profile, bench_batch);
criterion_main!(benches);
