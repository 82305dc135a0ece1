// ABOUTME: Client profile models consumed by the planning engine
// ABOUTME: Gender, ActivityLevel, BodyTendency, GoalType, and ClientProfile definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutriplan Contributors

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Client gender as used by the BMR formulas
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male formula coefficients apply
    Male,
    /// Female formula coefficients apply
    Female,
}

/// Self-reported weekly activity tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Desk job, little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise and a physical job
    VeryActive,
}

impl ActivityLevel {
    /// Parse an activity level from free text, defaulting unknown
    /// values to [`ActivityLevel::Moderate`]
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "sedentary" => Self::Sedentary,
            "light" => Self::Light,
            "active" => Self::Active,
            "very_active" | "very active" => Self::VeryActive,
            _ => Self::Moderate,
        }
    }
}

/// Somatic tendency recorded during intake
///
/// Informational only: no formula in the engine reads it, but profile
/// records carry it and exporters render it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BodyTendency {
    /// Gains weight slowly
    Ectomorph,
    /// Gains muscle readily
    Mesomorph,
    /// Gains weight readily
    Endomorph,
}

/// The client's current fitness goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    /// Reduce body fat
    FatLoss,
    /// Hold current weight
    Maintenance,
    /// Build muscle mass
    MuscleGain,
}

/// Client profile owned by the client-management subsystem
///
/// The engine only reads this record; it is never mutated here.
/// Validating formula inputs (non-positive weight/height/age) is the
/// caller's responsibility at the input boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientProfile {
    /// Gender for formula selection
    pub gender: Gender,
    /// Age in years
    pub age: u8,
    /// Current bodyweight in kg
    pub weight_kg: f64,
    /// Height in cm
    pub height_cm: f64,
    /// Activity tier; absent defaults to moderate at TDEE time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<ActivityLevel>,
    /// Somatic tendency (informational only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_tendency: Option<BodyTendency>,
    /// Current goal driving target derivation
    pub goal_type: GoalType,
    /// Target bodyweight in kg; absent defaults to current weight
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_weight_kg: Option<f64>,
    /// Declared allergies
    #[serde(default)]
    pub allergies: BTreeSet<String>,
    /// Declared intolerances
    #[serde(default)]
    pub intolerances: BTreeSet<String>,
}

impl ClientProfile {
    /// Lower-cased union of allergies and intolerances
    ///
    /// This is the restriction set the allergen scanner matches
    /// against; duplicates between the two source sets collapse.
    #[must_use]
    pub fn restrictions(&self) -> BTreeSet<String> {
        self.allergies
            .iter()
            .chain(self.intolerances.iter())
            .map(|s| s.to_lowercase())
            .collect()
    }
}
