// ABOUTME: Normalization of heterogeneous meal items into canonical food lines
// ABOUTME: Legacy pass-through, catalog-referenced scaling, and placeholder degradation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutriplan Contributors

use crate::constants::serving::DEFAULT_SERVING_SIZE_G;
use crate::models::{CatalogLookup, DayPlan, Meal, MealItem, NutritionPlan};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, warn};
use uuid::Uuid;

/// Placeholder name for lines whose catalog reference did not resolve
const UNRESOLVED_LINE_NAME: &str = "unnamed";

/// The engine's unified representation of one consumed food quantity
///
/// Produced fresh on every normalization call; never persisted and
/// never mutated after creation. Aggregation, percentage, and allergen
/// logic all work from this type and never see the original item
/// shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CanonicalFoodLine {
    /// Display name
    pub name: String,
    /// Calories for the consumed quantity (kcal)
    pub calories: f64,
    /// Protein for the consumed quantity (g)
    pub protein_g: f64,
    /// Carbohydrates for the consumed quantity (g)
    pub carbs_g: f64,
    /// Fat for the consumed quantity (g)
    pub fat_g: f64,
    /// Allergen tags carried over from the source record
    pub allergens: BTreeSet<String>,
}

impl CanonicalFoodLine {
    /// A zero-nutrient line standing in for an unresolved reference
    fn placeholder() -> Self {
        Self {
            name: UNRESOLVED_LINE_NAME.to_owned(),
            calories: 0.0,
            protein_g: 0.0,
            carbs_g: 0.0,
            fat_g: 0.0,
            allergens: BTreeSet::new(),
        }
    }
}

/// A meal after normalization, with its lines in original item order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NormalizedMeal {
    /// Meal name carried from the plan record
    pub name: String,
    /// Canonical lines in original item order
    pub lines: Vec<CanonicalFoodLine>,
}

/// A day after normalization
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NormalizedDay {
    /// Day index carried from the plan record
    pub index: u32,
    /// Day label carried from the plan record
    pub name: String,
    /// Normalized meals in original order
    pub meals: Vec<NormalizedMeal>,
}

/// A whole plan after normalization
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NormalizedPlan {
    /// Normalized days in original order
    pub days: Vec<NormalizedDay>,
}

/// Effective serving size in grams for a catalog entry
///
/// Parses the catalog's numeric-string serving size; absent, zero,
/// negative, or unparsable values fall back to the 100 g reference
/// default, which also guards the scaling division against zero.
#[must_use]
pub fn effective_serving_size(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v > 0.0)
        .unwrap_or(DEFAULT_SERVING_SIZE_G)
}

/// Round to one decimal place (gram precision used for scaled macros)
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// The single adapter reconciling both meal-item shapes
///
/// Normalization is total: missing nutrient fields read as zero,
/// invalid serving sizes use the reference default, and unresolved
/// catalog references degrade to a placeholder line rather than
/// failing the rest of the plan.
#[derive(Debug)]
pub struct PlanNormalizer<'a, C: CatalogLookup + ?Sized> {
    catalog: &'a C,
}

impl<'a, C: CatalogLookup + ?Sized> PlanNormalizer<'a, C> {
    /// Create a normalizer over a catalog lookup collaborator
    #[must_use]
    pub const fn new(catalog: &'a C) -> Self {
        Self { catalog }
    }

    /// Normalize a whole plan, preserving day, meal, and item order
    #[must_use]
    pub fn normalize_plan(&self, plan: &NutritionPlan) -> NormalizedPlan {
        debug!(days = plan.days.len(), "normalizing nutrition plan");
        NormalizedPlan {
            days: plan.days.iter().map(|day| self.normalize_day(day)).collect(),
        }
    }

    /// Normalize one day
    #[must_use]
    pub fn normalize_day(&self, day: &DayPlan) -> NormalizedDay {
        NormalizedDay {
            index: day.index,
            name: day.name.clone(),
            meals: day
                .meals
                .iter()
                .map(|meal| self.normalize_meal(meal))
                .collect(),
        }
    }

    /// Normalize one meal
    ///
    /// If the meal carries any legacy-shaped items their pre-scaled
    /// values are used as-is and referenced items are ignored; only a
    /// meal without legacy items resolves references through the
    /// catalog.
    #[must_use]
    pub fn normalize_meal(&self, meal: &Meal) -> NormalizedMeal {
        let legacy_lines: Vec<CanonicalFoodLine> = meal
            .items
            .iter()
            .filter_map(|item| match item {
                MealItem::Legacy {
                    name,
                    calories,
                    protein_g,
                    carbs_g,
                    fat_g,
                    allergens,
                    ..
                } => Some(CanonicalFoodLine {
                    name: name.clone(),
                    calories: calories.unwrap_or(0.0),
                    protein_g: protein_g.unwrap_or(0.0),
                    carbs_g: carbs_g.unwrap_or(0.0),
                    fat_g: fat_g.unwrap_or(0.0),
                    allergens: allergens.clone(),
                }),
                MealItem::Referenced { .. } => None,
            })
            .collect();

        let lines = if legacy_lines.is_empty() {
            meal.items
                .iter()
                .filter_map(|item| match item {
                    MealItem::Referenced {
                        entry_id,
                        quantity_g,
                    } => Some(self.referenced_line(*entry_id, *quantity_g)),
                    MealItem::Legacy { .. } => None,
                })
                .collect()
        } else {
            legacy_lines
        };

        NormalizedMeal {
            name: meal.name.clone(),
            lines,
        }
    }

    /// Resolve and scale one catalog-referenced item
    fn referenced_line(&self, entry_id: Uuid, quantity_g: f64) -> CanonicalFoodLine {
        let Some(entry) = self.catalog.resolve(entry_id) else {
            warn!(%entry_id, "catalog reference did not resolve; emitting placeholder line");
            return CanonicalFoodLine::placeholder();
        };

        let serving = effective_serving_size(entry.serving_size.as_deref());
        let factor = quantity_g / serving;

        CanonicalFoodLine {
            name: entry.name,
            calories: (entry.calories.unwrap_or(0.0) * factor).round(),
            protein_g: round1(entry.protein_g.unwrap_or(0.0) * factor),
            carbs_g: round1(entry.carbs_g.unwrap_or(0.0) * factor),
            fat_g: round1(entry.fat_g.unwrap_or(0.0) * factor),
            allergens: entry.allergens,
        }
    }
}
