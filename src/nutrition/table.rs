//! Nutrition table loader
//!
//! Reads the Indian dish nutrition CSV into memory once per process. Loading is
//! lossy but total: malformed numeric cells become zero, and a missing or
//! unreadable file puts the table into a degraded "unavailable" state instead of
//! failing the process.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::models::NutritionRecord;

pub const DISH_NAME_COLUMN: &str = "Dish Name";
pub const CALORIES_COLUMN: &str = "Calories (kcal)";
pub const PROTEIN_COLUMN: &str = "Protein (g)";
pub const CARBS_COLUMN: &str = "Carbohydrates (g)";
pub const FAT_COLUMN: &str = "Fats (g)";

/// Nutrition table error types
#[derive(Debug, Error)]
pub enum TableError {
    #[error("Nutrition table not found at {0}")]
    NotFound(String),

    #[error("Failed to read nutrition table: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse nutrition table: {0}")]
    Csv(#[from] csv::Error),

    #[error("Nutrition table is missing required column '{0}'")]
    MissingColumn(String),
}

/// Result type for table loading
pub type TableResult<T> = Result<T, TableError>;

/// Header names of the columns the loader reads. Headers must match exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    pub dish_name: String,
    pub calories: String,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
}

impl Default for TableSchema {
    fn default() -> Self {
        Self {
            dish_name: DISH_NAME_COLUMN.to_string(),
            calories: CALORIES_COLUMN.to_string(),
            protein: PROTEIN_COLUMN.to_string(),
            carbs: CARBS_COLUMN.to_string(),
            fat: FAT_COLUMN.to_string(),
        }
    }
}

/// Positions of the schema columns within a header row
#[derive(Debug, Clone, Copy)]
struct ColumnIndices {
    dish_name: usize,
    calories: usize,
    protein: usize,
    carbs: usize,
    fat: usize,
}

impl TableSchema {
    fn resolve(&self, headers: &csv::StringRecord) -> TableResult<ColumnIndices> {
        let position = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| TableError::MissingColumn(name.to_string()))
        };

        Ok(ColumnIndices {
            dish_name: position(&self.dish_name)?,
            calories: position(&self.calories)?,
            protein: position(&self.protein)?,
            carbs: position(&self.carbs)?,
            fat: position(&self.fat)?,
        })
    }
}

/// Parse a numeric cell, coercing anything unusable to zero.
///
/// Empty, textual and non-finite values (`NaN`, `inf`) all become `0.0`.
pub fn parse_number(cell: Option<&str>) -> f64 {
    cell.map(str::trim)
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Ordered, read-only dish table. Index order is source row order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NutritionTable {
    records: Vec<NutritionRecord>,
}

impl NutritionTable {
    pub fn new(records: Vec<NutritionRecord>) -> Self {
        Self { records }
    }

    /// Load a table from a CSV file using the default headers
    pub fn from_path<P: AsRef<Path>>(path: P) -> TableResult<Self> {
        Self::from_path_with_schema(path, &TableSchema::default())
    }

    pub fn from_path_with_schema<P: AsRef<Path>>(path: P, schema: &TableSchema) -> TableResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(TableError::NotFound(path.display().to_string()));
        }

        let file = File::open(path)?;
        Self::from_reader(file, schema)
    }

    /// Parse CSV data from any reader.
    ///
    /// Rows shorter than the header are accepted; their missing cells read as
    /// empty. Blank lines are skipped.
    pub fn from_reader<R: Read>(reader: R, schema: &TableSchema) -> TableResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(reader);

        let columns = schema.resolve(rdr.headers()?)?;

        let mut records = Vec::new();
        for row in rdr.records() {
            let row = row?;
            records.push(NutritionRecord::new(
                row.get(columns.dish_name).unwrap_or(""),
                parse_number(row.get(columns.calories)),
                parse_number(row.get(columns.protein)),
                parse_number(row.get(columns.carbs)),
                parse_number(row.get(columns.fat)),
            ));
        }

        Ok(Self { records })
    }

    pub fn records(&self) -> &[NutritionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Outcome of loading the table: either usable data or degraded mode
#[derive(Debug, Clone, PartialEq)]
pub enum TableState {
    Available(NutritionTable),
    Unavailable { reason: String },
}

impl TableState {
    /// Load the table, absorbing every failure into `Unavailable`.
    ///
    /// Emits one diagnostic describing the outcome.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        Self::load_with_schema(path, &TableSchema::default())
    }

    pub fn load_with_schema<P: AsRef<Path>>(path: P, schema: &TableSchema) -> Self {
        let path = path.as_ref();
        match NutritionTable::from_path_with_schema(path, schema) {
            Ok(table) => {
                tracing::info!(
                    path = %path.display(),
                    records = table.len(),
                    "Nutrition database loaded"
                );
                TableState::Available(table)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Nutrition database unavailable");
                TableState::Unavailable { reason: e.to_string() }
            }
        }
    }

    pub fn table(&self) -> Option<&NutritionTable> {
        match self {
            TableState::Available(table) => Some(table),
            TableState::Unavailable { .. } => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, TableState::Available(_))
    }

    pub fn record_count(&self) -> usize {
        self.table().map(NutritionTable::len).unwrap_or(0)
    }
}

/// Process-scoped, load-once handle to the nutrition table.
///
/// Construct once at startup and share by `Arc`. The first `get` reads the
/// file; every later call returns the same state without touching storage.
#[derive(Debug)]
pub struct SharedTable {
    path: PathBuf,
    schema: TableSchema,
    state: OnceLock<TableState>,
    loaded_at: OnceLock<DateTime<Utc>>,
}

impl SharedTable {
    pub fn new(path: PathBuf) -> Self {
        Self::with_schema(path, TableSchema::default())
    }

    pub fn with_schema(path: PathBuf, schema: TableSchema) -> Self {
        Self {
            path,
            schema,
            state: OnceLock::new(),
            loaded_at: OnceLock::new(),
        }
    }

    /// Wrap an already-built state; `get` never reads `path`.
    pub fn preloaded(path: PathBuf, state: TableState) -> Self {
        let shared = Self::new(path);
        let _ = shared.state.set(state);
        let _ = shared.loaded_at.set(Utc::now());
        shared
    }

    pub fn get(&self) -> &TableState {
        self.state.get_or_init(|| {
            let state = TableState::load_with_schema(&self.path, &self.schema);
            let _ = self.loaded_at.set(Utc::now());
            state
        })
    }

    pub fn is_loaded(&self) -> bool {
        self.state.get().is_some()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at.get().copied()
    }
}
