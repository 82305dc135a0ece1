// ABOUTME: Named physiological and engine constants grouped by domain
// ABOUTME: Activity multipliers, energy tiers, macro splits, timeline rates, serving defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutriplan Contributors

//! Engine constants
//!
//! Every formula threshold the engine uses lives here as a named
//! constant so it can be unit-tested and referenced from configuration
//! defaults instead of being scattered as inline literals.

/// Activity-level multipliers applied to BMR to obtain TDEE
pub mod activity_multipliers {
    /// Desk job, little or no exercise
    pub const SEDENTARY: f64 = 1.2;
    /// Light exercise 1-3 days/week
    pub const LIGHT: f64 = 1.375;
    /// Moderate exercise 3-5 days/week
    pub const MODERATE: f64 = 1.55;
    /// Hard exercise 6-7 days/week
    pub const ACTIVE: f64 = 1.725;
    /// Very hard exercise and a physical job
    pub const VERY_ACTIVE: f64 = 1.9;
}

/// Energy target tier factors applied to TDEE
pub mod energy_tiers {
    /// Caloric surplus factor for the hypertrophy tier
    pub const HYPERTROPHY_FACTOR: f64 = 1.25;
    /// Caloric deficit factor for the definition tier
    pub const DEFINITION_FACTOR: f64 = 0.75;
}

/// Macro target derivation constants
pub mod macro_split {
    /// Protein grams per kg bodyweight for muscle gain and fat loss goals
    pub const PROTEIN_PER_KG_RECOMP: f64 = 2.2;
    /// Protein grams per kg bodyweight for maintenance
    pub const PROTEIN_PER_KG_BASE: f64 = 2.0;
    /// Share of post-protein calories allocated to fat
    pub const FAT_SHARE: f64 = 0.35;
    /// Share of post-protein calories allocated to carbohydrate
    pub const CARB_SHARE: f64 = 0.65;
}

/// Kilocalories per gram of each macronutrient
pub mod kcal_per_gram {
    /// Protein energy density
    pub const PROTEIN: f64 = 4.0;
    /// Carbohydrate energy density
    pub const CARBS: f64 = 4.0;
    /// Fat energy density
    pub const FAT: f64 = 9.0;
}

/// Goal timeline weekly rate assumptions
pub mod timeline_rates {
    /// Assumed sustainable fat loss rate (kg/week, both genders)
    pub const FAT_LOSS_KG_PER_WEEK: f64 = 0.5;
    /// Assumed lean mass gain rate for males (kg/week)
    pub const GAIN_KG_PER_WEEK_MALE: f64 = 0.25;
    /// Assumed lean mass gain rate for females (kg/week)
    pub const GAIN_KG_PER_WEEK_FEMALE: f64 = 0.125;
    /// Weeks per month used when converting projections
    pub const WEEKS_PER_MONTH: u32 = 4;
}

/// Serving-size handling for catalog entries
pub mod serving {
    /// Reference serving size (grams) used when a catalog entry's
    /// serving size is absent, zero, or unparsable
    pub const DEFAULT_SERVING_SIZE_G: f64 = 100.0;
}

/// Fallback targets used when neither a client profile nor declared
/// plan targets are available
pub mod fallback_targets {
    /// Default daily calorie target (kcal)
    pub const CALORIES: i32 = 2000;
    /// Default daily protein target (g)
    pub const PROTEIN_G: i32 = 150;
    /// Default daily carbohydrate target (g)
    pub const CARBS_G: i32 = 200;
    /// Default daily fat target (g)
    pub const FAT_G: i32 = 70;
}

/// Fixed macro percentage split reported when a plan has no energy content
pub mod fallback_percentages {
    /// Protein share of calories (%)
    pub const PROTEIN: u32 = 33;
    /// Carbohydrate share of calories (%)
    pub const CARBS: u32 = 34;
    /// Fat share of calories (%)
    pub const FAT: u32 = 33;
}
