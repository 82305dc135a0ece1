// ABOUTME: Meal plan models with the two historical item shapes
// ABOUTME: NutritionPlan, DayPlan, Meal, MealItem tagged union, and declared PlanTargets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutriplan Contributors

use crate::errors::AppResult;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// A single meal item in one of the two record shapes
///
/// Plan storage holds two generations of item records. Legacy items
/// carry nutrient values already scaled to the quantity consumed and
/// are immutable once stored. Referenced items point into the catalog
/// and must be scaled by the engine at normalization time. Downstream
/// code never branches on this distinction again: the normalizer is
/// the single adapter producing [`crate::normalize::CanonicalFoodLine`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MealItem {
    /// Pre-scaled item with inline nutrient values
    Legacy {
        /// Display name
        name: String,
        /// Quantity consumed, in `unit`
        #[serde(skip_serializing_if = "Option::is_none")]
        quantity: Option<f64>,
        /// Unit label for `quantity` (display only)
        #[serde(skip_serializing_if = "Option::is_none")]
        unit: Option<String>,
        /// Calories for the consumed quantity (kcal)
        #[serde(skip_serializing_if = "Option::is_none")]
        calories: Option<f64>,
        /// Protein for the consumed quantity (g)
        #[serde(skip_serializing_if = "Option::is_none")]
        protein_g: Option<f64>,
        /// Carbohydrates for the consumed quantity (g)
        #[serde(skip_serializing_if = "Option::is_none")]
        carbs_g: Option<f64>,
        /// Fat for the consumed quantity (g)
        #[serde(skip_serializing_if = "Option::is_none")]
        fat_g: Option<f64>,
        /// Allergen tags carried on the stored item
        #[serde(default)]
        allergens: BTreeSet<String>,
    },
    /// Catalog-referenced item scaled by the engine
    Referenced {
        /// Catalog entry id (food or supplement)
        entry_id: Uuid,
        /// Quantity consumed in grams
        quantity_g: f64,
    },
}

/// A named meal within a day plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meal {
    /// Meal name (e.g. "Breakfast")
    pub name: String,
    /// Scheduled time of day, when the coach set one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveTime>,
    /// Ordered items; a meal uses one shape consistently in practice,
    /// but the engine does not assume it
    #[serde(default)]
    pub items: Vec<MealItem>,
}

/// One day of a nutrition plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayPlan {
    /// Zero-based day index within the plan
    pub index: u32,
    /// Day label (e.g. "Monday" or "Day 1")
    pub name: String,
    /// Ordered meals for the day
    #[serde(default)]
    pub meals: Vec<Meal>,
    /// Free-form coach notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Targets declared on the plan record itself
///
/// Used only as a fallback when no client profile is supplied to
/// target resolution.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanTargets {
    /// Declared daily calorie target (kcal)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    /// Declared daily protein target (g)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein_g: Option<f64>,
    /// Declared daily carbohydrate target (g)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbs_g: Option<f64>,
    /// Declared daily fat target (g)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat_g: Option<f64>,
}

/// A multi-day meal plan from plan storage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionPlan {
    /// Ordered day plans
    #[serde(default)]
    pub days: Vec<DayPlan>,
    /// Declared plan-level targets
    #[serde(default)]
    pub targets: PlanTargets,
}

impl NutritionPlan {
    /// Deserialize a plan record from the storage collaborator's JSON
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::AppError::InvalidPayload`] when the
    /// payload does not match the plan schema.
    pub fn from_json(payload: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(payload)?)
    }
}
