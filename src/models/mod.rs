//! Data models
//!
//! Plain structs shared by the nutrition core and the tools.

mod detection;
mod match_result;
mod nutrition;
mod record;

pub use detection::{BoundingBox, Detection};
pub use match_result::MatchResult;
pub use nutrition::Nutrition;
pub use record::{fold_case, NutritionRecord};
