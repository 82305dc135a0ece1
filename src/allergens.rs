// ABOUTME: Advisory allergen scanning of normalized plans against client restrictions
// ABOUTME: Tag equality and name-substring matching, ordered and never deduplicated
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Nutriplan Contributors

use crate::models::ClientProfile;
use crate::normalize::{CanonicalFoodLine, NormalizedPlan};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Advisory record flagging a potential restriction match
///
/// Never blocking: plan creation, saving, and export proceed
/// regardless; callers are responsible for surfacing warnings
/// prominently.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AllergenWarning {
    /// Name of the flagged food line
    pub food: String,
    /// The client restriction that matched (lower-cased)
    pub allergen: String,
    /// Meal the line belongs to
    pub meal: String,
    /// Day the meal belongs to
    pub day: String,
}

/// Cross-checks normalized food lines against a client's restrictions
#[derive(Debug, Clone, Copy, Default)]
pub struct AllergenScanner;

impl AllergenScanner {
    /// Scan a normalized plan against the profile's restriction list
    ///
    /// The restriction set is the lower-cased union of allergies and
    /// intolerances. A line matches a restriction when any of its
    /// allergen tags equals the restriction case-insensitively, or
    /// when the restriction appears as a case-insensitive substring of
    /// the line's name.
    ///
    /// Matching is literal, with two documented consequences: a food
    /// whose tags and name both lack the restriction string is never
    /// flagged however it was manufactured, and a name like
    /// "Gluten-Free Bread" is flagged for a "gluten" restriction even
    /// though it advertises the absence of the allergen. Coaches see
    /// an advisory list, so the false positive is accepted over the
    /// silent miss.
    ///
    /// Output is complete and ordered (day-major, meal-minor, item
    /// order), one warning per matching restriction, never truncated
    /// or deduplicated.
    #[must_use]
    pub fn scan(plan: &NormalizedPlan, profile: &ClientProfile) -> Vec<AllergenWarning> {
        let restrictions = profile.restrictions();
        if restrictions.is_empty() {
            return Vec::new();
        }

        let mut warnings = Vec::new();
        for day in &plan.days {
            for meal in &day.meals {
                for line in &meal.lines {
                    for restriction in &restrictions {
                        if line_matches(line, restriction) {
                            warnings.push(AllergenWarning {
                                food: line.name.clone(),
                                allergen: restriction.clone(),
                                meal: meal.name.clone(),
                                day: day.name.clone(),
                            });
                        }
                    }
                }
            }
        }

        debug!(
            warnings = warnings.len(),
            restrictions = restrictions.len(),
            "allergen scan complete"
        );
        warnings
    }
}

/// Whether one line trips one lower-cased restriction
fn line_matches(line: &CanonicalFoodLine, restriction: &str) -> bool {
    line.allergens
        .iter()
        .any(|tag| tag.to_lowercase() == restriction)
        || line.name.to_lowercase().contains(restriction)
}
