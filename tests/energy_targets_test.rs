// ABOUTME: Tests for calorie target tier derivation from TDEE
// ABOUTME: Maintenance, hypertrophy, definition values and the recommended pick per goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutriplan Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutriplan_engine::config::EnergyTierConfig;
use nutriplan_engine::energy::EnergyTargets;
use nutriplan_engine::models::GoalType;

#[test]
fn tiers_from_reference_tdee() {
    let tiers = EnergyTierConfig::default();
    let targets = EnergyTargets::from_tdee(2556.0, GoalType::Maintenance, &tiers);

    assert_eq!(targets.maintenance, 2556);
    assert_eq!(targets.hypertrophy, 3195);
    assert_eq!(targets.definition, 1917);
    assert_eq!(targets.recommended, 2556);
}

#[test]
fn recommended_follows_goal() {
    let tiers = EnergyTierConfig::default();

    let fat_loss = EnergyTargets::from_tdee(2556.0, GoalType::FatLoss, &tiers);
    assert_eq!(fat_loss.recommended, fat_loss.definition);

    let gain = EnergyTargets::from_tdee(2556.0, GoalType::MuscleGain, &tiers);
    assert_eq!(gain.recommended, gain.hypertrophy);

    let hold = EnergyTargets::from_tdee(2556.0, GoalType::Maintenance, &tiers);
    assert_eq!(hold.recommended, hold.maintenance);
}

#[test]
fn tiers_round_from_unrounded_tdee() {
    let tiers = EnergyTierConfig::default();
    // The full-precision TDEE for the reference profile: each tier is
    // rounded from the raw product, not from rounded maintenance.
    let targets = EnergyTargets::from_tdee(2555.5625, GoalType::Maintenance, &tiers);

    assert_eq!(targets.maintenance, 2556);
    assert_eq!(targets.hypertrophy, 3194); // round(3194.453125)
    assert_eq!(targets.definition, 1917); // round(1916.671875)
}

#[test]
fn pure_over_identical_inputs() {
    let tiers = EnergyTierConfig::default();
    let a = EnergyTargets::from_tdee(2555.5625, GoalType::FatLoss, &tiers);
    let b = EnergyTargets::from_tdee(2555.5625, GoalType::FatLoss, &tiers);
    assert_eq!(a, b);
}
