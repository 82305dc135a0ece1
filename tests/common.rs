// ABOUTME: Shared fixtures for the engine integration tests
// ABOUTME: Profile, plan, meal, and catalog builders used across test files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutriplan Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]

//! Shared test fixtures for `nutriplan_engine`
//!
//! Builders for the profile, plan, and catalog records the engine
//! consumes, to keep the per-component test files focused on behavior.

use nutriplan_engine::models::{
    CatalogEntry, CatalogKind, ClientProfile, DayPlan, Gender, GoalType, InMemoryCatalog, Meal,
    MealItem, NutritionPlan, PlanTargets,
};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Reference profile used by most target tests: 70 kg, 175 cm, 30 y
pub fn reference_profile(gender: Gender, goal: GoalType) -> ClientProfile {
    ClientProfile {
        gender,
        age: 30,
        weight_kg: 70.0,
        height_cm: 175.0,
        activity_level: None,
        body_tendency: None,
        goal_type: goal,
        goal_weight_kg: None,
        allergies: BTreeSet::new(),
        intolerances: BTreeSet::new(),
    }
}

/// String slice list into the set type the models use
pub fn tag_set(tags: &[&str]) -> BTreeSet<String> {
    tags.iter().map(|t| (*t).to_owned()).collect()
}

/// A legacy-shaped item with pre-scaled nutrient values
pub fn legacy_item(
    name: &str,
    calories: f64,
    protein_g: f64,
    carbs_g: f64,
    fat_g: f64,
    allergens: &[&str],
) -> MealItem {
    MealItem::Legacy {
        name: name.to_owned(),
        quantity: Some(1.0),
        unit: Some("portion".to_owned()),
        calories: Some(calories),
        protein_g: Some(protein_g),
        carbs_g: Some(carbs_g),
        fat_g: Some(fat_g),
        allergens: tag_set(allergens),
    }
}

/// A catalog-referenced item
pub fn referenced_item(entry_id: Uuid, quantity_g: f64) -> MealItem {
    MealItem::Referenced {
        entry_id,
        quantity_g,
    }
}

/// A meal without a scheduled time
pub fn meal(name: &str, items: Vec<MealItem>) -> Meal {
    Meal {
        name: name.to_owned(),
        time: None,
        items,
    }
}

/// A day plan without notes
pub fn day(index: u32, name: &str, meals: Vec<Meal>) -> DayPlan {
    DayPlan {
        index,
        name: name.to_owned(),
        meals,
        notes: None,
    }
}

/// A plan without declared targets
pub fn plan(days: Vec<DayPlan>) -> NutritionPlan {
    NutritionPlan {
        days,
        targets: PlanTargets::default(),
    }
}

/// A catalog food entry with nutrients per reference serving
pub fn catalog_food(
    id: Uuid,
    name: &str,
    calories: f64,
    protein_g: f64,
    carbs_g: f64,
    fat_g: f64,
    serving_size: Option<&str>,
    allergens: &[&str],
) -> CatalogEntry {
    CatalogEntry {
        id,
        name: name.to_owned(),
        kind: CatalogKind::Food,
        calories: Some(calories),
        protein_g: Some(protein_g),
        carbs_g: Some(carbs_g),
        fat_g: Some(fat_g),
        serving_size: serving_size.map(ToOwned::to_owned),
        allergens: tag_set(allergens),
    }
}

/// An in-memory catalog seeded with the given entries
pub fn catalog_with(entries: Vec<CatalogEntry>) -> InMemoryCatalog {
    let mut catalog = InMemoryCatalog::new();
    for entry in entries {
        catalog.insert(entry);
    }
    catalog
}
