// ABOUTME: Engine configuration structs with defaults from named constants
// ABOUTME: Activity multipliers, energy tiers, macro split, timeline rates, fallback targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutriplan Contributors

//! Engine configuration
//!
//! Each lookup table the formulas depend on is an explicit, immutable
//! struct with a `Default` backed by [`crate::constants`], so tables
//! can be unit-tested and swapped by embedding callers instead of
//! living as scattered literals.

use crate::algorithms::BmrFormula;
use crate::constants::{
    activity_multipliers, energy_tiers, fallback_targets, macro_split, timeline_rates,
};
use crate::models::ActivityLevel;
use serde::{Deserialize, Serialize};

/// BMR-to-TDEE activity multipliers, one per tier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityMultipliers {
    /// Sedentary tier multiplier
    pub sedentary: f64,
    /// Light tier multiplier
    pub light: f64,
    /// Moderate tier multiplier (also the missing-tier default)
    pub moderate: f64,
    /// Active tier multiplier
    pub active: f64,
    /// Very active tier multiplier
    pub very_active: f64,
}

impl Default for ActivityMultipliers {
    fn default() -> Self {
        Self {
            sedentary: activity_multipliers::SEDENTARY,
            light: activity_multipliers::LIGHT,
            moderate: activity_multipliers::MODERATE,
            active: activity_multipliers::ACTIVE,
            very_active: activity_multipliers::VERY_ACTIVE,
        }
    }
}

impl ActivityMultipliers {
    /// Multiplier for a tier; a missing tier defaults to moderate
    #[must_use]
    pub const fn for_level(&self, level: Option<ActivityLevel>) -> f64 {
        match level {
            Some(ActivityLevel::Sedentary) => self.sedentary,
            Some(ActivityLevel::Light) => self.light,
            Some(ActivityLevel::Active) => self.active,
            Some(ActivityLevel::VeryActive) => self.very_active,
            Some(ActivityLevel::Moderate) | None => self.moderate,
        }
    }
}

/// TDEE factors for the calorie target tiers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyTierConfig {
    /// Surplus factor for the hypertrophy tier
    pub hypertrophy_factor: f64,
    /// Deficit factor for the definition tier
    pub definition_factor: f64,
}

impl Default for EnergyTierConfig {
    fn default() -> Self {
        Self {
            hypertrophy_factor: energy_tiers::HYPERTROPHY_FACTOR,
            definition_factor: energy_tiers::DEFINITION_FACTOR,
        }
    }
}

/// Macro target derivation parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroSplitConfig {
    /// Protein g/kg for muscle gain and fat loss goals
    pub protein_per_kg_recomp: f64,
    /// Protein g/kg for maintenance
    pub protein_per_kg_base: f64,
    /// Share of post-protein calories allocated to fat
    pub fat_share: f64,
    /// Share of post-protein calories allocated to carbohydrate
    pub carb_share: f64,
}

impl Default for MacroSplitConfig {
    fn default() -> Self {
        Self {
            protein_per_kg_recomp: macro_split::PROTEIN_PER_KG_RECOMP,
            protein_per_kg_base: macro_split::PROTEIN_PER_KG_BASE,
            fat_share: macro_split::FAT_SHARE,
            carb_share: macro_split::CARB_SHARE,
        }
    }
}

/// Weekly rate assumptions for goal timeline projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineRateConfig {
    /// Fat loss rate in kg/week (gender-invariant)
    pub fat_loss_kg_per_week: f64,
    /// Muscle gain rate for males in kg/week
    pub gain_kg_per_week_male: f64,
    /// Muscle gain rate for females in kg/week
    pub gain_kg_per_week_female: f64,
    /// Weeks per month for the month conversion
    pub weeks_per_month: u32,
}

impl Default for TimelineRateConfig {
    fn default() -> Self {
        Self {
            fat_loss_kg_per_week: timeline_rates::FAT_LOSS_KG_PER_WEEK,
            gain_kg_per_week_male: timeline_rates::GAIN_KG_PER_WEEK_MALE,
            gain_kg_per_week_female: timeline_rates::GAIN_KG_PER_WEEK_FEMALE,
            weeks_per_month: timeline_rates::WEEKS_PER_MONTH,
        }
    }
}

/// Last-resort daily targets when neither a client profile nor
/// declared plan targets exist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackTargets {
    /// Daily calories (kcal)
    pub calories: i32,
    /// Daily protein (g)
    pub protein_g: i32,
    /// Daily carbohydrates (g)
    pub carbs_g: i32,
    /// Daily fat (g)
    pub fat_g: i32,
}

impl Default for FallbackTargets {
    fn default() -> Self {
        Self {
            calories: fallback_targets::CALORIES,
            protein_g: fallback_targets::PROTEIN_G,
            carbs_g: fallback_targets::CARBS_G,
            fat_g: fallback_targets::FAT_G,
        }
    }
}

/// Top-level engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// BMR formula used when deriving targets from a profile
    pub bmr_formula: BmrFormula,
    /// Activity multiplier table
    pub activity: ActivityMultipliers,
    /// Energy tier factors
    pub energy_tiers: EnergyTierConfig,
    /// Macro split parameters
    pub macro_split: MacroSplitConfig,
    /// Timeline weekly rates
    pub timeline: TimelineRateConfig,
    /// Fallback daily targets
    pub fallback: FallbackTargets,
}
