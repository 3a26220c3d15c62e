//! Nutrition lookup core
//!
//! Table loading, label-to-dish matching, and the casing fallback on top.

pub mod matcher;
pub mod reconciler;
pub mod table;

pub use matcher::{find, DishLookup};
pub use reconciler::{reconcile, title_case, LabelVariant, Reconciled};
pub use table::{
    parse_number, NutritionTable, SharedTable, TableError, TableResult, TableSchema, TableState,
};
