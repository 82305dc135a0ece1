// ABOUTME: Tests for nutrient aggregation and macro percentage breakdown
// ABOUTME: Day totals, empty-day exclusion from averages, idempotence, percentage fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutriplan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{day, legacy_item, meal, plan};
use nutriplan_engine::aggregate::{
    day_total, macro_percentages, meal_total, plan_actual_macros, AggregatedMacros,
};
use nutriplan_engine::models::InMemoryCatalog;
use nutriplan_engine::normalize::PlanNormalizer;

fn normalize(stored: &nutriplan_engine::models::NutritionPlan) -> nutriplan_engine::NormalizedPlan {
    let catalog = InMemoryCatalog::new();
    PlanNormalizer::new(&catalog).normalize_plan(stored)
}

// === Totals ===

#[test]
fn day_total_sums_all_meals_and_lines() {
    let stored = plan(vec![day(
        0,
        "Monday",
        vec![
            meal(
                "Breakfast",
                vec![
                    legacy_item("Oatmeal", 389.0, 16.9, 66.3, 6.9, &[]),
                    legacy_item("Milk", 64.0, 3.4, 4.8, 3.6, &[]),
                ],
            ),
            meal("Lunch", vec![legacy_item("Chicken", 248.0, 46.5, 0.0, 5.4, &[])]),
        ],
    )]);
    let normalized = normalize(&stored);

    let breakfast = meal_total(&normalized.days[0].meals[0]);
    assert!((breakfast.calories - 453.0).abs() < 1e-9);

    let total = day_total(&normalized.days[0]);
    assert!((total.calories - 701.0).abs() < 1e-9);
    assert!((total.protein_g - 66.8).abs() < 1e-9);
    assert!((total.carbs_g - 71.1).abs() < 1e-9);
    assert!((total.fat_g - 15.9).abs() < 1e-9);
}

#[test]
fn plan_average_excludes_empty_days() {
    let stored = plan(vec![
        day(
            0,
            "Monday",
            vec![meal("Lunch", vec![legacy_item("A", 2000.0, 100.0, 200.0, 60.0, &[])])],
        ),
        day(1, "Tuesday", vec![]),
        day(
            2,
            "Wednesday",
            vec![meal("Lunch", vec![legacy_item("B", 1000.0, 50.0, 100.0, 30.0, &[])])],
        ),
    ]);
    let actual = plan_actual_macros(&normalize(&stored));

    // Two loaded days average; the empty day is not a zero sample.
    assert!((actual.calories - 1500.0).abs() < 1e-9);
    assert!((actual.protein_g - 75.0).abs() < 1e-9);
    assert!((actual.carbs_g - 150.0).abs() < 1e-9);
    assert!((actual.fat_g - 45.0).abs() < 1e-9);
}

#[test]
fn plan_with_no_qualifying_days_is_all_zero() {
    let empty = plan(vec![]);
    assert_eq!(plan_actual_macros(&normalize(&empty)), AggregatedMacros::default());

    let zero_days = plan(vec![
        day(0, "Monday", vec![]),
        day(1, "Tuesday", vec![meal("Lunch", vec![])]),
        day(
            2,
            "Wednesday",
            vec![meal("Snack", vec![legacy_item("Water", 0.0, 0.0, 0.0, 0.0, &[])])],
        ),
    ]);
    assert_eq!(plan_actual_macros(&normalize(&zero_days)), AggregatedMacros::default());
}

#[test]
fn aggregation_is_idempotent_and_read_only() {
    let stored = plan(vec![day(
        0,
        "Monday",
        vec![meal("Lunch", vec![legacy_item("A", 523.0, 31.7, 44.4, 22.1, &[])])],
    )]);
    let snapshot = serde_json::to_value(&stored).unwrap();
    let normalized = normalize(&stored);

    let first = plan_actual_macros(&normalized);
    let second = plan_actual_macros(&normalized);
    assert_eq!(first, second, "bit-identical across calls");
    assert_eq!(serde_json::to_value(&stored).unwrap(), snapshot, "plan unchanged");
}

// === Percentages ===

#[test]
fn percentages_from_reference_macros() {
    let actual = AggregatedMacros {
        calories: 2030.0,
        protein_g: 150.0,
        carbs_g: 200.0,
        fat_g: 70.0,
    };
    let pct = macro_percentages(&actual);

    // 600 / 800 / 630 kcal over 2030 total
    assert_eq!(pct.protein, 30);
    assert_eq!(pct.carbs, 39);
    assert_eq!(pct.fat, 31);
}

#[test]
fn zero_macros_return_fixed_fallback() {
    let pct = macro_percentages(&AggregatedMacros::default());
    assert_eq!(pct.protein, 33);
    assert_eq!(pct.carbs, 34);
    assert_eq!(pct.fat, 33);
}

#[test]
fn kcal_from_macros_uses_4_4_9() {
    let actual = AggregatedMacros {
        calories: 0.0,
        protein_g: 10.0,
        carbs_g: 20.0,
        fat_g: 5.0,
    };
    assert!((actual.kcal_from_macros() - 165.0).abs() < 1e-9);
}
