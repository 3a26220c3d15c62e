//! Nutrition record model
//!
//! One row of the reference dish table.

use serde::{Deserialize, Serialize};

use super::{MatchResult, Nutrition};

/// A dish row as loaded from the nutrition CSV
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionRecord {
    /// Display name exactly as written in the table (not normalized)
    pub dish_name: String,
    pub nutrition: Nutrition,
}

/// Lower-case each char on its own.
///
/// `str::to_lowercase` maps a word-final 'Σ' to 'ς' but a lone 'Σ' to 'σ',
/// which would make matching depend on where the letter sits.
pub fn fold_case(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

impl NutritionRecord {
    pub fn new(dish_name: impl Into<String>, calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            dish_name: dish_name.into(),
            nutrition: Nutrition { calories, protein, carbs, fat },
        }
    }

    /// Case-insensitive substring test against the dish name.
    ///
    /// `needle_folded` must already be passed through [`fold_case`]. Records
    /// with an empty dish name never match.
    pub fn name_contains_folded(&self, needle_folded: &str) -> bool {
        if self.dish_name.is_empty() || needle_folded.is_empty() {
            return false;
        }
        fold_case(&self.dish_name).contains(needle_folded)
    }

    pub fn to_match(&self) -> MatchResult {
        MatchResult {
            matched_name: self.dish_name.clone(),
            nutrition: self.nutrition,
        }
    }
}
