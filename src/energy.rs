// ABOUTME: Calorie target tiers derived from TDEE and the client's goal
// ABOUTME: Maintenance, hypertrophy, definition, and the recommended pick
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutriplan Contributors

use crate::config::EnergyTierConfig;
use crate::models::GoalType;
use serde::{Deserialize, Serialize};

/// Daily calorie targets for the three coaching tiers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnergyTargets {
    /// TDEE rounded to whole kcal
    pub maintenance: i32,
    /// Surplus tier for muscle gain (kcal)
    pub hypertrophy: i32,
    /// Deficit tier for fat loss (kcal)
    pub definition: i32,
    /// The tier matching the client's goal (kcal)
    pub recommended: i32,
}

impl EnergyTargets {
    /// Derive the calorie tiers from TDEE and the client's goal
    ///
    /// Pure function of `(tdee, goal)`: each tier is the rounded
    /// product of TDEE and its factor, and `recommended` selects the
    /// tier the goal calls for (definition for fat loss, hypertrophy
    /// for muscle gain, maintenance otherwise).
    #[must_use]
    pub fn from_tdee(tdee: f64, goal: GoalType, tiers: &EnergyTierConfig) -> Self {
        let maintenance = tdee.round() as i32;
        let hypertrophy = (tdee * tiers.hypertrophy_factor).round() as i32;
        let definition = (tdee * tiers.definition_factor).round() as i32;

        let recommended = match goal {
            GoalType::FatLoss => definition,
            GoalType::MuscleGain => hypertrophy,
            GoalType::Maintenance => maintenance,
        };

        Self {
            maintenance,
            hypertrophy,
            definition,
            recommended,
        }
    }
}
