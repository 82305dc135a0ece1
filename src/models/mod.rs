// ABOUTME: Data models consumed and produced by the planning engine
// ABOUTME: Client profiles, catalog entries, and nested plan records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutriplan Contributors

/// Food and supplement catalog models plus the lookup seam
pub mod catalog;

/// Meal plan records with the two historical item shapes
pub mod plan;

/// Client profile models
pub mod profile;

pub use catalog::{CatalogEntry, CatalogKind, CatalogLookup, InMemoryCatalog};
pub use plan::{DayPlan, Meal, MealItem, NutritionPlan, PlanTargets};
pub use profile::{ActivityLevel, BodyTendency, ClientProfile, Gender, GoalType};
