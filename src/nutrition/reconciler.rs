//! Detection-to-nutrition reconciler
//!
//! Detector labels and dish names don't share a casing convention, so a label
//! is tried in three fixed forms and the first hit is taken.

use serde::Serialize;

use crate::models::MatchResult;

use super::matcher::DishLookup;

/// Casing variant applied to a label before lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelVariant {
    AsReceived,
    TitleCase,
    LowerCase,
}

impl LabelVariant {
    /// Fallback order
    pub const ORDER: [LabelVariant; 3] = [
        LabelVariant::AsReceived,
        LabelVariant::TitleCase,
        LabelVariant::LowerCase,
    ];

    pub fn apply(&self, label: &str) -> String {
        match self {
            LabelVariant::AsReceived => label.to_string(),
            LabelVariant::TitleCase => title_case(label),
            LabelVariant::LowerCase => label.to_lowercase(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LabelVariant::AsReceived => "as_received",
            LabelVariant::TitleCase => "title_case",
            LabelVariant::LowerCase => "lower_case",
        }
    }
}

/// Upper-case the first letter of each run of letters, lower-case the rest.
///
/// Any non-alphabetic character ends a word: "dal_makhani" -> "Dal_Makhani".
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// A successful reconciliation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reconciled {
    pub matched_via: LabelVariant,
    pub result: MatchResult,
}

/// Look up `label` in the order as-received, title case, lower case.
///
/// All three forms are tried even when they render identically. `None` means
/// the dish is not in the table, not that anything failed.
pub fn reconcile<L: DishLookup + ?Sized>(lookup: &L, label: &str) -> Option<Reconciled> {
    for variant in LabelVariant::ORDER {
        let query = variant.apply(label);
        match lookup.find(&query) {
            Some(result) => {
                tracing::debug!(
                    label,
                    variant = variant.as_str(),
                    query = %query,
                    matched = %result.matched_name,
                    "label matched"
                );
                return Some(Reconciled { matched_via: variant, result });
            }
            None => {
                tracing::debug!(label, variant = variant.as_str(), query = %query, "label not found");
            }
        }
    }

    tracing::debug!(label, "no match after all attempts");
    None
}
