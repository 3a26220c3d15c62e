//! SmartPlate Status Tool
//!
//! Runtime status of the service and usage instructions for assistants.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::nutrition::{SharedTable, TableState};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const BUILD_TIMESTAMP: &str = match option_env!("SMARTPLATE_BUILD_TIMESTAMP") {
    Some(s) => s,
    None => "unknown",
};
pub const BUILD_PROFILE: &str = match option_env!("SMARTPLATE_BUILD_PROFILE") {
    Some(s) => s,
    None => "unknown",
};

/// CI run number baked in at build time; local builds report none
pub fn build_number() -> Option<u64> {
    parse_build_number(option_env!("SMARTPLATE_BUILD_NUMBER"))
}

fn parse_build_number(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|s| s.trim().parse().ok())
}

/// Startup banner for stderr, including where the dish table is read from
pub fn startup_banner(table_path: &Path) -> String {
    let build = match build_number() {
        Some(n) => format!("#{} ({})", n, BUILD_PROFILE),
        None => BUILD_PROFILE.to_string(),
    };
    format!(
        "SmartPlate v{} | build {} | compiled {}\nNutrition table: {}",
        VERSION,
        build,
        BUILD_TIMESTAMP,
        table_path.display()
    )
}

/// Usage guide returned by analysis_instructions
pub const ANALYSIS_INSTRUCTIONS: &str = r#"
# SmartPlate Analysis Instructions

SmartPlate looks up approximate nutrition facts for food detected in a photo,
using a reference table of Indian dishes.

## Workflow

1. Run the food detector on the image. Each detected object gives a class
   label (e.g. `idli`, `pizza`), a confidence, and optionally a bounding box.
2. Call `analyze_detections` with every detection from the image:

```json
{
  "detections": [
    {"label": "idli", "confidence": 0.91},
    {"label": "pizza", "confidence": 0.55, "class_id": 53,
     "bounding_box": {"x1": 12, "y1": 40, "x2": 300, "y2": 260}}
  ]
}
```

3. Show the user the `message`, the `items` table, and `total_calories`.

## How labels are matched

- A label matches a dish when it appears anywhere in the dish name, ignoring
  case: `rice` matches `Lemon rice`.
- When several dishes contain the label, the first one in the table is used.
- The label is tried as received, then Title Cased, then lower-cased.
- Matching is literal. Plurals are not folded: `idlis` does NOT match `Idli`.
- Confidence is never used to drop detections.

## Reading the status field

| status | meaning |
|--------|---------|
| `matched` | at least one detection has nutrition data |
| `no_match` | objects detected, none are dishes in the table |
| `no_detections` | the detector found nothing |
| `table_unavailable` | the nutrition table failed to load; check `smartplate_status` |

`no_match` is a normal outcome, not an error. Most general object labels
(`fork`, `cup`) are not Indian dishes.

## Single lookups

Use `lookup_dish` with one `label` to check what a label resolves to and which
casing variant (`as_received`, `title_case`, `lower_case`) matched.
"#;

/// Status information
#[derive(Debug, Serialize)]
pub struct SmartPlateStatus {
    pub version: &'static str,
    pub build_number: Option<u64>,
    pub build_profile: &'static str,
    pub build_timestamp: &'static str,

    /// Nutrition table information
    pub table_path: String,
    pub table_available: bool,
    pub table_records: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_error: Option<String>,
    pub table_loaded_at: Option<DateTime<Utc>>,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    table: Arc<SharedTable>,
}

impl StatusTracker {
    pub fn new(table: Arc<SharedTable>) -> Self {
        Self {
            start_time: Instant::now(),
            table,
        }
    }

    pub fn get_status(&self) -> SmartPlateStatus {
        let state = self.table.get();
        let table_error = match state {
            TableState::Unavailable { reason } => Some(reason.clone()),
            TableState::Available(_) => None,
        };

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        SmartPlateStatus {
            version: VERSION,
            build_number: build_number(),
            build_profile: BUILD_PROFILE,
            build_timestamp: BUILD_TIMESTAMP,
            table_path: self.table.path().display().to_string(),
            table_available: state.is_available(),
            table_records: state.record_count(),
            table_error,
            table_loaded_at: self.table.loaded_at(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NutritionRecord;
    use crate::nutrition::NutritionTable;
    use std::path::PathBuf;

    #[test]
    fn test_parse_build_number() {
        assert_eq!(parse_build_number(Some("417")), Some(417));
        assert_eq!(parse_build_number(Some(" 12\n")), Some(12));
        assert_eq!(parse_build_number(Some("local")), None);
        assert_eq!(parse_build_number(None), None);
    }

    #[test]
    fn test_startup_banner_names_table() {
        let banner = startup_banner(Path::new("data/dishes.csv"));
        assert!(banner.starts_with(&format!("SmartPlate v{}", VERSION)));
        assert!(banner.contains("Nutrition table: data/dishes.csv"));
    }

    #[test]
    fn test_status_reports_available_table() {
        let table = NutritionTable::new(vec![NutritionRecord::new("Idli", 39.0, 2.0, 8.0, 0.1)]);
        let shared = Arc::new(SharedTable::preloaded(
            PathBuf::from("data/test.csv"),
            TableState::Available(table),
        ));
        let status = StatusTracker::new(shared).get_status();

        assert!(status.table_available);
        assert_eq!(status.table_records, 1);
        assert!(status.table_error.is_none());
        assert!(status.table_loaded_at.is_some());
        assert_eq!(status.process_id, std::process::id());
    }

    #[test]
    fn test_status_reports_degraded_mode() {
        let shared = Arc::new(SharedTable::new(PathBuf::from("/nonexistent/path/12345.csv")));
        let status = StatusTracker::new(shared).get_status();

        assert!(!status.table_available);
        assert_eq!(status.table_records, 0);
        assert!(status.table_error.unwrap().contains("not found"));
    }
}
