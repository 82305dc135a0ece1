// ABOUTME: Gram targets for protein, carbohydrate, and fat from goal and bodyweight
// ABOUTME: TargetSource sum type dispatching client-derived targets vs plan-declared fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutriplan Contributors

use crate::algorithms::tdee;
use crate::config::{EngineConfig, MacroSplitConfig};
use crate::constants::kcal_per_gram;
use crate::energy::EnergyTargets;
use crate::models::{ClientProfile, GoalType, NutritionPlan};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Daily gram targets plus the calorie target they were split from
///
/// Gram fields are signed: with a very low calorie target and a high
/// bodyweight, protein calories can exceed the calorie target and the
/// fat/carb targets go negative. The engine preserves that raw
/// arithmetic instead of clamping so downstream surfaces see exactly
/// what the formula produced.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroTargets {
    /// Daily calorie target the split is based on (kcal)
    pub calories: i32,
    /// Daily protein target (g)
    pub protein_g: i32,
    /// Daily carbohydrate target (g)
    pub carbs_g: i32,
    /// Daily fat target (g)
    pub fat_g: i32,
}

impl MacroTargets {
    /// Derive gram targets from bodyweight, goal, and a calorie target
    ///
    /// Protein is set per kg bodyweight (the recomp multiplier for
    /// muscle gain and fat loss, the base multiplier otherwise); the
    /// calories left after protein split 35/65 between fat and carbs
    /// at 9 and 4 kcal/g.
    #[must_use]
    pub fn derive(profile: &ClientProfile, target_calories: i32, split: &MacroSplitConfig) -> Self {
        let multiplier = match profile.goal_type {
            GoalType::MuscleGain | GoalType::FatLoss => split.protein_per_kg_recomp,
            GoalType::Maintenance => split.protein_per_kg_base,
        };

        let protein_g = (profile.weight_kg * multiplier).round() as i32;
        let protein_kcal = f64::from(protein_g) * kcal_per_gram::PROTEIN;
        let remaining = f64::from(target_calories) - protein_kcal;

        if remaining < 0.0 {
            warn!(
                target_calories,
                protein_g, "protein calories exceed the calorie target; fat/carb targets go negative"
            );
        }

        let fat_g = (remaining * split.fat_share / kcal_per_gram::FAT).round() as i32;
        let carbs_g = (remaining * split.carb_share / kcal_per_gram::CARBS).round() as i32;

        Self {
            calories: target_calories,
            protein_g,
            carbs_g,
            fat_g,
        }
    }
}

/// Where daily targets come from
///
/// Dispatched exactly once by [`resolve_targets`]; downstream code
/// works from the resolved [`MacroTargets`] and never re-checks
/// whether a profile was present.
#[derive(Debug, Clone, Copy)]
pub enum TargetSource<'a> {
    /// Derive targets from the client's body metrics and goal
    FromClient(&'a ClientProfile),
    /// Use the targets declared on the plan record
    FromPlanDefaults(&'a NutritionPlan),
}

/// Resolve daily macro targets from the available source
///
/// With a client profile: BMR (configured formula) -> TDEE (activity
/// multiplier) -> recommended energy tier -> macro split. Without one:
/// the plan's declared targets, with engine fallbacks for anything the
/// plan omits.
#[must_use]
pub fn resolve_targets(source: TargetSource<'_>, config: &EngineConfig) -> MacroTargets {
    match source {
        TargetSource::FromClient(profile) => {
            let bmr = config.bmr_formula.estimate(profile);
            let expenditure = tdee(bmr, profile.activity_level, &config.activity);
            let energy =
                EnergyTargets::from_tdee(expenditure, profile.goal_type, &config.energy_tiers);
            MacroTargets::derive(profile, energy.recommended, &config.macro_split)
        }
        TargetSource::FromPlanDefaults(plan) => MacroTargets {
            calories: plan
                .targets
                .calories
                .map_or(config.fallback.calories, |v| v.round() as i32),
            protein_g: plan
                .targets
                .protein_g
                .map_or(config.fallback.protein_g, |v| v.round() as i32),
            carbs_g: plan
                .targets
                .carbs_g
                .map_or(config.fallback.carbs_g, |v| v.round() as i32),
            fat_g: plan
                .targets
                .fat_g
                .map_or(config.fallback.fat_g, |v| v.round() as i32),
        },
    }
}
