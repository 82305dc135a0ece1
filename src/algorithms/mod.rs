// ABOUTME: Formula library for the planning engine
// ABOUTME: BMR estimation formulas and TDEE derivation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutriplan Contributors

/// BMR formulas and TDEE derivation
pub mod bmr;

pub use bmr::{tdee, BmrFormula};
