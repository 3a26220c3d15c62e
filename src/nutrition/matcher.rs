//! Dish matcher
//!
//! Maps a detector label to the first table row whose dish name contains the
//! label, ignoring case. No scoring: the earliest row wins, so reordering the
//! table changes which dish a broad label like "rice" resolves to.

use crate::models::{fold_case, MatchResult};

use super::table::{NutritionTable, TableState};

/// Anything a label can be looked up in
pub trait DishLookup {
    fn find(&self, query: &str) -> Option<MatchResult>;
}

/// First record (in table order) whose dish name contains `query`
/// case-insensitively. The query is matched literally, whitespace included;
/// only the empty query never matches.
pub fn find(table: &NutritionTable, query: &str) -> Option<MatchResult> {
    if query.is_empty() {
        return None;
    }

    let needle = fold_case(query);
    table
        .records()
        .iter()
        .find(|record| record.name_contains_folded(&needle))
        .map(|record| record.to_match())
}

impl DishLookup for NutritionTable {
    fn find(&self, query: &str) -> Option<MatchResult> {
        find(self, query)
    }
}

impl DishLookup for TableState {
    fn find(&self, query: &str) -> Option<MatchResult> {
        match self {
            TableState::Available(table) => find(table, query),
            TableState::Unavailable { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NutritionRecord;

    fn table(names: &[&str]) -> NutritionTable {
        NutritionTable::new(
            names
                .iter()
                .enumerate()
                .map(|(i, name)| NutritionRecord::new(*name, (i + 1) as f64 * 100.0, 1.0, 1.0, 1.0))
                .collect(),
        )
    }

    #[test]
    fn test_substring_any_case() {
        let t = table(&["Cheese Pizza"]);
        assert_eq!(find(&t, "pizza").unwrap().matched_name, "Cheese Pizza");
        assert_eq!(find(&t, "PIZZA").unwrap().matched_name, "Cheese Pizza");
        assert_eq!(find(&t, "eSe pI").unwrap().matched_name, "Cheese Pizza");
    }

    #[test]
    fn test_first_match_in_table_order() {
        let t = table(&["Lemon rice", "Curd rice", "Jeera rice"]);
        let m = find(&t, "rice").unwrap();
        assert_eq!(m.matched_name, "Lemon rice");
        assert_eq!(m.nutrition.calories, 100.0);
    }

    #[test]
    fn test_reordering_changes_winner() {
        let t = table(&["Curd rice", "Lemon rice"]);
        assert_eq!(find(&t, "rice").unwrap().matched_name, "Curd rice");
    }

    #[test]
    fn test_never_returns_later_match() {
        let names = ["Masala Dosa", "Plain Dosa", "Idli", "Rava Idli", "Dosa"];
        let t = table(&names);
        for (i, name) in names.iter().enumerate() {
            let hit = find(&t, name).unwrap();
            let hit_index = names.iter().position(|n| *n == hit.matched_name).unwrap();
            assert!(hit_index <= i, "{} resolved to later row {}", name, hit.matched_name);
        }
    }

    #[test]
    fn test_no_match() {
        let t = table(&["Idli", "Cheese Pizza"]);
        assert!(find(&t, "xyz123").is_none());
        assert!(find(&t, "unknown_object").is_none());
    }

    #[test]
    fn test_no_stemming_or_plural_folding() {
        let t = table(&["Idli"]);
        assert!(find(&t, "idlis").is_none());
        assert!(find(&t, "idli.").is_none());
    }

    #[test]
    fn test_query_is_literal_not_pattern() {
        let t = table(&["Aloo Paratha"]);
        assert!(find(&t, "alo.").is_none());
        assert!(find(&t, "a.*").is_none());
    }

    #[test]
    fn test_empty_names_and_queries_never_match() {
        let t = table(&["", "Idli"]);
        assert!(find(&t, "").is_none());
        assert_eq!(find(&t, "i").unwrap().matched_name, "Idli");
    }

    #[test]
    fn test_whitespace_query_is_a_substring_like_any_other() {
        let t = table(&["Idli", "Cheese Pizza"]);
        assert_eq!(find(&t, " ").unwrap().matched_name, "Cheese Pizza");
        assert_eq!(find(&t, "e P").unwrap().matched_name, "Cheese Pizza");
        assert!(find(&t, "   ").is_none());
    }

    #[test]
    fn test_final_sigma_folds_like_any_sigma() {
        let t = table(&["ΟΔΟΣ"]);
        assert_eq!(find(&t, "Σ").unwrap().matched_name, "ΟΔΟΣ");
        assert_eq!(find(&t, "σ").unwrap().matched_name, "ΟΔΟΣ");
    }

    #[test]
    fn test_unavailable_state_never_matches() {
        let state = TableState::Unavailable { reason: "missing".into() };
        assert!(DishLookup::find(&state, "idli").is_none());

        let state = TableState::Available(table(&["Idli"]));
        assert!(DishLookup::find(&state, "idli").is_some());
    }
}
