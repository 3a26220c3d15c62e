//! Lookup result model

use serde::{Deserialize, Serialize};

use super::Nutrition;

/// Nutrition facts for the table row a label resolved to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Dish name as stored in the table
    pub matched_name: String,
    #[serde(flatten)]
    pub nutrition: Nutrition,
}
