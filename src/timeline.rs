// ABOUTME: Goal timeline projection from current weight to target weight
// ABOUTME: Weeks/months estimates at fixed weekly rates plus an advisory note
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutriplan Contributors

use crate::config::TimelineRateConfig;
use crate::models::{ClientProfile, Gender, GoalType};
use serde::{Deserialize, Serialize};

/// Projected time to reach the target weight
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GoalTimeline {
    /// Whole weeks needed at the assumed rate
    pub weeks: u32,
    /// Whole months needed (weeks divided by the configured
    /// weeks-per-month, rounded up)
    pub months: u32,
    /// Advisory text for the coach; content depends on the goal
    pub note: String,
}

impl GoalTimeline {
    /// Project the timeline for a client's goal
    ///
    /// Fat loss assumes a gender-invariant weekly rate; muscle gain
    /// uses the gender-specific rate. Maintenance projects zero weeks,
    /// and a missing target weight defaults to the current weight, so
    /// a zero weight gap always yields zero weeks.
    #[must_use]
    pub fn project(profile: &ClientProfile, rates: &TimelineRateConfig) -> Self {
        let goal_weight = profile.goal_weight_kg.unwrap_or(profile.weight_kg);
        let weight_diff = (profile.weight_kg - goal_weight).abs();

        let weekly_rate = match profile.goal_type {
            GoalType::Maintenance => {
                return Self {
                    weeks: 0,
                    months: 0,
                    note: timeline_note(profile.goal_type, rates, profile.gender),
                };
            }
            GoalType::FatLoss => rates.fat_loss_kg_per_week,
            GoalType::MuscleGain => match profile.gender {
                Gender::Male => rates.gain_kg_per_week_male,
                Gender::Female => rates.gain_kg_per_week_female,
            },
        };

        let weeks = (weight_diff / weekly_rate).ceil() as u32;
        let months = weeks.div_ceil(rates.weeks_per_month.max(1));

        Self {
            weeks,
            months,
            note: timeline_note(profile.goal_type, rates, profile.gender),
        }
    }
}

/// Advisory note attached to a projection
///
/// The fat-loss message is deliberately gender-invariant: the assumed
/// rate is the same for both genders, so one consistent message is
/// produced instead of two near-duplicates.
fn timeline_note(goal: GoalType, rates: &TimelineRateConfig, gender: Gender) -> String {
    match goal {
        GoalType::FatLoss => format!(
            "Projection assumes a sustainable fat loss rate of about {:.1} kg per week.",
            rates.fat_loss_kg_per_week
        ),
        GoalType::MuscleGain => {
            let rate = match gender {
                Gender::Male => rates.gain_kg_per_week_male,
                Gender::Female => rates.gain_kg_per_week_female,
            };
            format!("Projection assumes a lean gain rate of about {rate:.3} kg per week.")
        }
        GoalType::Maintenance => {
            "Maintenance goal: target weight equals current weight, no timeline applies.".to_owned()
        }
    }
}
