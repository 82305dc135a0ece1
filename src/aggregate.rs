// ABOUTME: Nutrient totals across meals and days plus macro percentage breakdown
// ABOUTME: Day totals, non-empty-day plan averages, and guarded percentage math
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutriplan Contributors

use crate::constants::{fallback_percentages, kcal_per_gram};
use crate::normalize::{CanonicalFoodLine, NormalizedDay, NormalizedMeal, NormalizedPlan};
use serde::{Deserialize, Serialize};

/// Summed or averaged nutrient quantities
///
/// Represents a meal subtotal, a day total, or the plan-level average.
/// Values are non-negative by construction: canonical lines only carry
/// non-negative nutrients and averaging preserves sign.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct AggregatedMacros {
    /// Calories (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein_g: f64,
    /// Carbohydrates (g)
    pub carbs_g: f64,
    /// Fat (g)
    pub fat_g: f64,
}

impl AggregatedMacros {
    /// Add one canonical line into the running total
    fn accumulate(&mut self, line: &CanonicalFoodLine) {
        self.calories += line.calories;
        self.protein_g += line.protein_g;
        self.carbs_g += line.carbs_g;
        self.fat_g += line.fat_g;
    }

    /// Calories implied by the macro grams alone (4/4/9 kcal per gram)
    ///
    /// Useful as a consistency check against the summed calorie field,
    /// which comes from the source records rather than from the macros.
    #[must_use]
    pub fn kcal_from_macros(&self) -> f64 {
        self.protein_g.mul_add(
            kcal_per_gram::PROTEIN,
            self.carbs_g
                .mul_add(kcal_per_gram::CARBS, self.fat_g * kcal_per_gram::FAT),
        )
    }
}

/// Nutrient subtotal for one meal
#[must_use]
pub fn meal_total(meal: &NormalizedMeal) -> AggregatedMacros {
    let mut total = AggregatedMacros::default();
    for line in &meal.lines {
        total.accumulate(line);
    }
    total
}

/// Nutrient total for one day, the sum of its meal subtotals
#[must_use]
pub fn day_total(day: &NormalizedDay) -> AggregatedMacros {
    let mut total = AggregatedMacros::default();
    for meal in &day.meals {
        for line in &meal.lines {
            total.accumulate(line);
        }
    }
    total
}

/// Plan-level average of the day totals
///
/// Only days whose calorie total is positive participate: empty days
/// are excluded from both the sum and the count rather than counted as
/// zero-valued samples. (Replicated deliberately for parity with the
/// plan records coaches already have, even though it biases the
/// average when a plan mixes loaded and empty days.) A plan with no
/// qualifying day yields all-zero macros; no division happens in that
/// case.
///
/// Idempotent and side-effect-free: the plan is read-only and repeated
/// calls return identical results.
#[must_use]
pub fn plan_actual_macros(plan: &NormalizedPlan) -> AggregatedMacros {
    let mut sum = AggregatedMacros::default();
    let mut counted_days = 0_u32;

    for day in &plan.days {
        let total = day_total(day);
        if total.calories > 0.0 {
            sum.calories += total.calories;
            sum.protein_g += total.protein_g;
            sum.carbs_g += total.carbs_g;
            sum.fat_g += total.fat_g;
            counted_days += 1;
        }
    }

    if counted_days == 0 {
        return AggregatedMacros::default();
    }

    let divisor = f64::from(counted_days);
    AggregatedMacros {
        calories: sum.calories / divisor,
        protein_g: sum.protein_g / divisor,
        carbs_g: sum.carbs_g / divisor,
        fat_g: sum.fat_g / divisor,
    }
}

/// Share of calories contributed by each macro, in whole percent
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroPercentages {
    /// Protein share (%)
    pub protein: u32,
    /// Carbohydrate share (%)
    pub carbs: u32,
    /// Fat share (%)
    pub fat: u32,
}

impl MacroPercentages {
    /// Fixed split reported when the macros carry no energy at all
    #[must_use]
    pub const fn fallback() -> Self {
        Self {
            protein: fallback_percentages::PROTEIN,
            carbs: fallback_percentages::CARBS,
            fat: fallback_percentages::FAT,
        }
    }
}

/// Percentage breakdown of calories by macro
///
/// Converts grams to kilocalories (4/4/9), then divides each component
/// by the total. The zero-energy case returns the fixed 33/34/33
/// fallback before any division, so the result is never non-finite.
#[must_use]
pub fn macro_percentages(actual: &AggregatedMacros) -> MacroPercentages {
    let protein_kcal = actual.protein_g * kcal_per_gram::PROTEIN;
    let carbs_kcal = actual.carbs_g * kcal_per_gram::CARBS;
    let fat_kcal = actual.fat_g * kcal_per_gram::FAT;
    let total_kcal = protein_kcal + carbs_kcal + fat_kcal;

    if total_kcal <= 0.0 {
        return MacroPercentages::fallback();
    }

    MacroPercentages {
        protein: (protein_kcal / total_kcal * 100.0).round() as u32,
        carbs: (carbs_kcal / total_kcal * 100.0).round() as u32,
        fat: (fat_kcal / total_kcal * 100.0).round() as u32,
    }
}
