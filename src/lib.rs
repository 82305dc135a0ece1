// ABOUTME: Nutrition and energy planning engine for fitness coaching platforms
// ABOUTME: BMR/TDEE formulas, calorie and macro targets, plan normalization, aggregation, allergen scanning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutriplan Contributors

#![deny(unsafe_code)]

//! # Nutriplan Engine
//!
//! In-process computation library behind the nutrition side of a
//! coaching dashboard. Given a client profile and/or a stored meal
//! plan, it derives energy needs and calorie/macro targets, projects a
//! time-to-goal, reconciles two generations of meal-item records into
//! one canonical nutrient model, aggregates actual totals across a
//! plan, and cross-checks foods against the client's restrictions.
//!
//! Every component is synchronous, deterministic, and side-effect-free
//! over read-only value objects, so callers may recompute on every
//! keystroke and memoize freely. The engine owns no persistence, no
//! catalog search, and no rendering; those are external collaborators.
//!
//! ## Modules
//!
//! - **algorithms**: BMR formulas (Mifflin-St Jeor, Harris-Benedict) and TDEE
//! - **energy**: maintenance/hypertrophy/definition calorie tiers
//! - **macros**: protein/carb/fat gram targets and the target-source dispatch
//! - **timeline**: weeks/months projection to the goal weight
//! - **normalize**: canonical food lines from heterogeneous meal items
//! - **aggregate**: day totals, plan averages, macro percentages
//! - **allergens**: advisory restriction scanning
//!
//! ## Example
//!
//! ```rust
//! use nutriplan_engine::config::EngineConfig;
//! use nutriplan_engine::macros::{resolve_targets, TargetSource};
//! use nutriplan_engine::models::{ClientProfile, Gender, GoalType};
//!
//! let profile = ClientProfile {
//!     gender: Gender::Male,
//!     age: 30,
//!     weight_kg: 70.0,
//!     height_cm: 175.0,
//!     activity_level: None,
//!     body_tendency: None,
//!     goal_type: GoalType::MuscleGain,
//!     goal_weight_kg: Some(75.0),
//!     allergies: Default::default(),
//!     intolerances: Default::default(),
//! };
//!
//! let config = EngineConfig::default();
//! let targets = resolve_targets(TargetSource::FromClient(&profile), &config);
//! assert_eq!(targets.protein_g, 154);
//! ```

/// Unified error handling for the parsing boundary
pub mod errors;

/// Named physiological and engine constants
pub mod constants;

/// Configuration tables with defaults from named constants
pub mod config;

/// Data models consumed and produced by the engine
pub mod models;

/// BMR formulas and TDEE derivation
pub mod algorithms;

/// Calorie target tiers from TDEE and goal
pub mod energy;

/// Macro gram targets and target-source resolution
pub mod macros;

/// Goal timeline projection
pub mod timeline;

/// Normalization of meal items into canonical food lines
pub mod normalize;

/// Nutrient aggregation and percentage breakdown
pub mod aggregate;

/// Advisory allergen scanning
pub mod allergens;

pub use aggregate::{
    day_total, macro_percentages, meal_total, plan_actual_macros, AggregatedMacros,
    MacroPercentages,
};
pub use algorithms::{tdee, BmrFormula};
pub use allergens::{AllergenScanner, AllergenWarning};
pub use config::EngineConfig;
pub use energy::EnergyTargets;
pub use errors::{AppError, AppResult};
pub use macros::{resolve_targets, MacroTargets, TargetSource};
pub use models::{
    ActivityLevel, BodyTendency, CatalogEntry, CatalogKind, CatalogLookup, ClientProfile, DayPlan,
    Gender, GoalType, InMemoryCatalog, Meal, MealItem, NutritionPlan, PlanTargets,
};
pub use normalize::{
    effective_serving_size, CanonicalFoodLine, NormalizedDay, NormalizedMeal, NormalizedPlan,
    PlanNormalizer,
};
pub use timeline::GoalTimeline;
