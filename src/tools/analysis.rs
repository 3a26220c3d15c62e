//! Meal analysis tool
//!
//! Turns one image's detections into the nutrition breakdown shown to the user.

use serde::Serialize;

use crate::models::{Detection, Nutrition};
use crate::nutrition::{reconcile, title_case, LabelVariant, TableState};

/// Overall outcome, so callers can tell "found nothing" from "could not run"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStatus {
    Matched,
    NoMatch,
    NoDetections,
    TableUnavailable,
}

/// One detection that resolved to a dish
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzedItem {
    /// Detector label, title-cased for display
    pub detected_object: String,
    /// Dish name from the table
    pub matched_dish: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub confidence: f32,
    pub matched_via: LabelVariant,
}

/// Response for analyze_detections
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealAnalysis {
    pub status: AnalysisStatus,
    pub message: String,
    pub items: Vec<AnalyzedItem>,
    /// Raw labels with no dish in the table
    pub unmatched: Vec<String>,
    pub items_identified: usize,
    pub total_calories: f64,
    pub total_nutrition: Nutrition,
}

/// Reconcile every detection against the table and aggregate the hits.
///
/// Detections are processed in order and never merged or filtered by
/// confidence; two "idli" detections count twice.
pub fn analyze_detections(table: &TableState, detections: &[Detection]) -> MealAnalysis {
    if let TableState::Unavailable { reason } = table {
        tracing::warn!(detections = detections.len(), "skipping analysis, nutrition data unavailable");
        return MealAnalysis {
            status: AnalysisStatus::TableUnavailable,
            message: format!("Nutrition data is unavailable: {}", reason),
            items: Vec::new(),
            unmatched: detections.iter().map(|d| d.label.clone()).collect(),
            items_identified: 0,
            total_calories: 0.0,
            total_nutrition: Nutrition::zero(),
        };
    }

    let mut items = Vec::new();
    let mut unmatched = Vec::new();

    for detection in detections {
        tracing::debug!(label = %detection.label, confidence = detection.confidence, class_id = ?detection.class_id, "model detected");

        match reconcile(table, &detection.label) {
            Some(hit) => items.push(AnalyzedItem {
                detected_object: title_case(&detection.label),
                matched_dish: hit.result.matched_name,
                calories: hit.result.nutrition.calories,
                protein: hit.result.nutrition.protein,
                carbs: hit.result.nutrition.carbs,
                fat: hit.result.nutrition.fat,
                confidence: detection.confidence,
                matched_via: hit.matched_via,
            }),
            None => unmatched.push(detection.label.clone()),
        }
    }

    let total_nutrition: Nutrition = items
        .iter()
        .map(|i| Nutrition { calories: i.calories, protein: i.protein, carbs: i.carbs, fat: i.fat })
        .sum();

    let (status, message) = if detections.is_empty() {
        (AnalysisStatus::NoDetections, "No objects were detected in the image.".to_string())
    } else if items.is_empty() {
        (
            AnalysisStatus::NoMatch,
            "Objects detected, but no matching Indian dish found in the nutrition table.".to_string(),
        )
    } else {
        (
            AnalysisStatus::Matched,
            format!("Found {} items with nutritional data!", items.len()),
        )
    };

    tracing::info!(
        detections = detections.len(),
        matched = items.len(),
        unmatched = unmatched.len(),
        total_calories = total_nutrition.calories,
        "meal analyzed"
    );

    MealAnalysis {
        status,
        message,
        items_identified: items.len(),
        total_calories: total_nutrition.calories,
        total_nutrition,
        items,
        unmatched,
    }
}
