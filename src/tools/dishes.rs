//! Dish lookup tool
//!
//! Resolves a single label without building a full meal analysis.

use serde::Serialize;

use crate::models::MatchResult;
use crate::nutrition::{reconcile, LabelVariant, TableState};

/// Response for lookup_dish
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DishLookupResponse {
    pub label: String,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_via: Option<LabelVariant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<MatchResult>,
    pub message: String,
}

/// Look up one detector label in the dish table.
///
/// The label is used exactly as given; surrounding whitespace is part of it.
pub fn lookup_dish(table: &TableState, label: &str) -> Result<DishLookupResponse, String> {
    if label.is_empty() {
        return Err("label cannot be empty".to_string());
    }

    if let TableState::Unavailable { reason } = table {
        return Ok(DishLookupResponse {
            label: label.to_string(),
            found: false,
            matched_via: None,
            result: None,
            message: format!("Nutrition data is unavailable: {}", reason),
        });
    }

    let response = match reconcile(table, label) {
        Some(hit) => DishLookupResponse {
            label: label.to_string(),
            found: true,
            message: format!("'{}' matched '{}'", label, hit.result.matched_name),
            matched_via: Some(hit.matched_via),
            result: Some(hit.result),
        },
        None => DishLookupResponse {
            label: label.to_string(),
            found: false,
            matched_via: None,
            result: None,
            message: format!("No dish in the nutrition table matches '{}'", label),
        },
    };

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NutritionRecord;
    use crate::nutrition::NutritionTable;

    fn table() -> TableState {
        TableState::Available(NutritionTable::new(vec![
            NutritionRecord::new("Idli", 39.0, 2.0, 8.0, 0.1),
            NutritionRecord::new("Cheese Pizza", 266.0, 11.0, 33.0, 10.0),
        ]))
    }

    #[test]
    fn test_lookup_found() {
        let resp = lookup_dish(&table(), "pizza").unwrap();
        assert!(resp.found);
        assert_eq!(resp.matched_via, Some(LabelVariant::AsReceived));
        let result = resp.result.unwrap();
        assert_eq!(result.matched_name, "Cheese Pizza");
        assert_eq!(result.nutrition.calories, 266.0);
    }

    #[test]
    fn test_lookup_not_found_is_ok() {
        let resp = lookup_dish(&table(), "xyz123").unwrap();
        assert!(!resp.found);
        assert!(resp.result.is_none());
        assert!(resp.message.contains("xyz123"));
    }

    #[test]
    fn test_lookup_empty_label_rejected() {
        assert!(lookup_dish(&table(), "").is_err());
    }

    #[test]
    fn test_lookup_keeps_label_untouched() {
        let resp = lookup_dish(&table(), " ").unwrap();
        assert!(resp.found);
        assert_eq!(resp.label, " ");
        assert_eq!(resp.result.unwrap().matched_name, "Cheese Pizza");

        let resp = lookup_dish(&table(), " idli ").unwrap();
        assert!(!resp.found);
        assert_eq!(resp.label, " idli ");
    }

    #[test]
    fn test_lookup_unavailable_table() {
        let state = TableState::Unavailable { reason: "missing".into() };
        let resp = lookup_dish(&state, "idli").unwrap();
        assert!(!resp.found);
        assert!(resp.message.contains("unavailable"));
    }

    #[test]
    fn test_result_fields_flattened() {
        let resp = lookup_dish(&table(), "idli").unwrap();
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["result"]["matched_name"], "Idli");
        assert_eq!(json["result"]["calories"], 39.0);
        assert_eq!(json["matched_via"], "as_received");
    }
}
