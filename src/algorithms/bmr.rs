// ABOUTME: Basal metabolic rate formulas and TDEE derivation
// ABOUTME: Implements Mifflin-St Jeor and revised Harris-Benedict estimation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutriplan Contributors

use crate::config::ActivityMultipliers;
use crate::errors::AppError;
use crate::models::{ActivityLevel, ClientProfile, Gender};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// BMR estimation formula selection
///
/// Two estimators for basal metabolic rate from body metrics:
///
/// - `MifflinStJeor`: the modern default, generally closest for the
///   coaching population
/// - `HarrisBenedict`: the revised (Roza & Shizgal) coefficients
///
/// # Scientific References
///
/// - Mifflin, M.D., et al. (1990). "A new predictive equation for resting
///   energy expenditure in healthy individuals." *The American Journal of
///   Clinical Nutrition*, 51(2), 241-247.
/// - Roza, A.M., & Shizgal, H.M. (1984). "The Harris Benedict equation
///   reevaluated." *The American Journal of Clinical Nutrition*, 40(1),
///   168-182.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BmrFormula {
    /// Mifflin-St Jeor
    ///
    /// Formula: male `10·w + 6.25·h − 5·a + 5`;
    /// female `10·w + 6.25·h − 5·a − 161`
    #[default]
    MifflinStJeor,

    /// Harris-Benedict (revised)
    ///
    /// Formula: male `66.5 + 13.75·w + 5.003·h − 6.75·a`;
    /// female `655.1 + 9.563·w + 1.850·h − 4.676·a`
    HarrisBenedict,
}

impl BmrFormula {
    /// Estimate basal metabolic rate in kcal/day
    ///
    /// Inputs are assumed numeric and plausible; rejecting non-positive
    /// weight, height, or age is the caller's responsibility at the
    /// input boundary.
    #[must_use]
    pub fn estimate(self, profile: &ClientProfile) -> f64 {
        let w = profile.weight_kg;
        let h = profile.height_cm;
        let a = f64::from(profile.age);

        match (self, profile.gender) {
            (Self::MifflinStJeor, Gender::Male) => {
                10.0_f64.mul_add(w, 6.25_f64.mul_add(h, (-5.0_f64).mul_add(a, 5.0)))
            }
            (Self::MifflinStJeor, Gender::Female) => {
                10.0_f64.mul_add(w, 6.25_f64.mul_add(h, (-5.0_f64).mul_add(a, -161.0)))
            }
            (Self::HarrisBenedict, Gender::Male) => {
                13.75_f64.mul_add(w, 5.003_f64.mul_add(h, (-6.75_f64).mul_add(a, 66.5)))
            }
            (Self::HarrisBenedict, Gender::Female) => {
                9.563_f64.mul_add(w, 1.850_f64.mul_add(h, (-4.676_f64).mul_add(a, 655.1)))
            }
        }
    }

    /// Get formula name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MifflinStJeor => "mifflin",
            Self::HarrisBenedict => "harris",
        }
    }

    /// Get formula description
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::MifflinStJeor => "Mifflin-St Jeor (1990), the modern default estimator",
            Self::HarrisBenedict => "Harris-Benedict with the revised Roza & Shizgal coefficients",
        }
    }

    /// Get the formula as a string
    #[must_use]
    pub const fn formula(self) -> &'static str {
        match self {
            Self::MifflinStJeor => "BMR = 10xweight + 6.25xheight - 5xage + s (s: +5 male, -161 female)",
            Self::HarrisBenedict => {
                "BMR = 66.5 + 13.75xweight + 5.003xheight - 6.75xage (male); 655.1 + 9.563xweight + 1.850xheight - 4.676xage (female)"
            }
        }
    }
}

impl FromStr for BmrFormula {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mifflin" | "mifflin_st_jeor" => Ok(Self::MifflinStJeor),
            "harris" | "harris_benedict" => Ok(Self::HarrisBenedict),
            other => Err(AppError::invalid_input(format!(
                "Unknown BMR formula: '{other}'. Valid options: mifflin, harris"
            ))),
        }
    }
}

/// Total daily energy expenditure from BMR and activity tier
///
/// Multiplies BMR by the tier's multiplier; a missing tier uses the
/// moderate multiplier. No rounding happens at this stage so tier
/// derivation downstream works from the full-precision value.
#[must_use]
pub fn tdee(bmr: f64, level: Option<ActivityLevel>, multipliers: &ActivityMultipliers) -> f64 {
    bmr * multipliers.for_level(level)
}
