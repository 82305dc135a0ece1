// ABOUTME: Food and supplement catalog models plus the lookup seam
// ABOUTME: CatalogEntry, CatalogKind, CatalogLookup trait, and an in-memory implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutriplan Contributors

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use uuid::Uuid;

/// Catalog entry category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CatalogKind {
    /// Whole food entry
    Food,
    /// Supplement entry
    Supplement,
}

/// A food or supplement record from the catalog collaborator
///
/// Nutrient values are defined per reference serving. Any missing
/// nutrient defaults to zero during normalization; a missing, zero, or
/// unparsable serving size falls back to the 100 g reference default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Catalog identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Food or supplement
    pub kind: CatalogKind,
    /// Calories per reference serving (kcal)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    /// Protein per reference serving (g)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein_g: Option<f64>,
    /// Carbohydrates per reference serving (g)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbs_g: Option<f64>,
    /// Fat per reference serving (g)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat_g: Option<f64>,
    /// Reference serving size in grams, stored as a numeric string by
    /// the catalog; may be absent or malformed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serving_size: Option<String>,
    /// Allergen tags attached to the entry
    #[serde(default)]
    pub allergens: BTreeSet<String>,
}

/// Catalog resolution seam
///
/// The engine queries foods and supplements through this trait; the
/// catalog itself (search, ranking, persistence) belongs to an
/// external collaborator. Resolution is synchronous because the engine
/// performs no I/O; async backends snapshot their data behind an
/// in-process implementation.
///
/// A `None` result is not an error: normalization degrades unresolved
/// references to a zero-nutrient placeholder line.
pub trait CatalogLookup {
    /// Resolve a catalog entry by id, or `None` when unknown
    fn resolve(&self, id: Uuid) -> Option<CatalogEntry>;
}

/// `HashMap`-backed catalog for tests, benches, and embedding callers
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    entries: HashMap<Uuid, CatalogEntry>,
}

impl InMemoryCatalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, replacing any previous entry with the same id
    pub fn insert(&mut self, entry: CatalogEntry) {
        self.entries.insert(entry.id, entry);
    }

    /// Number of entries in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CatalogLookup for InMemoryCatalog {
    fn resolve(&self, id: Uuid) -> Option<CatalogEntry> {
        self.entries.get(&id).cloned()
    }
}
