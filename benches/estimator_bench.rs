// ABOUTME: Criterion benchmarks for profile validation and calorie/macro estimation
// ABOUTME: Measures the pure estimator, validate-then-estimate and full tool dispatch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the nutrition core.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nutri_advisor::config::NutritionConfig;
use nutri_advisor::intelligence::{estimate_macros_with_config, validate_profile};
use nutri_advisor::tools::{ToolExecutionContext, ToolRegistry, ToolResources};
use nutri_core::models::{ActivityLevel, Gender, Goal, ProfileInput};
use serde_json::json;
use tokio::runtime::Runtime;

fn profile(goal: Goal) -> ProfileInput {
    ProfileInput {
        weight_kg: 70.0,
        height_cm: 175.0,
        age: 30,
        gender: Gender::Male,
        activity_level: ActivityLevel::ModeratelyActive,
        goals: vec![goal],
    }
}

fn bench_estimate(c: &mut Criterion) {
    let config = NutritionConfig::default();
    let mut group = c.benchmark_group("estimate_macros");

    for goal in [Goal::FatLoss, Goal::MuscleGain, Goal::Maintain] {
        let input = profile(goal);
        group.bench_with_input(BenchmarkId::from_parameter(goal), &input, |b, input| {
            b.iter(|| estimate_macros_with_config(black_box(input), &config));
        });
    }
    group.finish();
}

fn bench_validate_and_estimate(c: &mut Criterion) {
    let config = NutritionConfig::default();
    let raw = json!({
        "weight": "70", "height": "175", "age": "30",
        "gender": "male", "activity_level": "moderately_active", "goals": ["Fat Loss"]
    })
    .as_object()
    .cloned()
    .unwrap();

    c.bench_function("validate_then_estimate", |b| {
        b.iter(|| {
            let input = validate_profile(black_box(&raw)).unwrap();
            estimate_macros_with_config(&input, &config)
        });
    });
}

fn bench_tool_dispatch(c: &mut Criterion) {
    let runtime = Runtime::new().unwrap();
    let registry = ToolRegistry::with_builtin_tools();
    let context = ToolExecutionContext::new(Arc::new(ToolResources::default()));
    let args = json!({
        "weight_kg": 70, "height_cm": 175, "age": 30,
        "gender": "Male", "activity_level": "Sedentary", "goals": ["Muscle Gain"]
    });

    c.bench_function("dispatch_calculate_calories_and_macros", |b| {
        b.iter(|| {
            runtime.block_on(registry.dispatch(
                "calculate_calories_and_macros",
                black_box(args.clone()),
                &context,
            ))
        });
    });
}

criterion_group!(
    benches,
    bench_estimate,
    bench_validate_and_estimate,
    bench_tool_dispatch
);
criterion_main!(benches);
