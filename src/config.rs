//! Runtime configuration
//!
//! Everything is read from the environment; there is no config file.

use std::path::PathBuf;

/// Overrides the nutrition CSV location
pub const NUTRITION_CSV_ENV: &str = "SMARTPLATE_NUTRITION_CSV";

/// File name of the bundled dish table under `data/`
pub const DEFAULT_TABLE_FILE: &str = "Indian_Food_Nutrition_Processed.csv";

/// Default log directive when `RUST_LOG` is not set
pub const DEFAULT_LOG_DIRECTIVE: &str = "smartplate=info";

/// Project root derived from the executable location.
///
/// Binaries live in `target/debug` or `target/release`; step out of those so
/// `data/` resolves next to `Cargo.toml`.
pub fn project_root() -> PathBuf {
    let mut path = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."));

    if path.ends_with("release") || path.ends_with("debug") {
        if let Some(grandparent) = path.parent().and_then(|p| p.parent()) {
            path = grandparent.to_path_buf();
        }
    }

    path
}

/// Nutrition table path from the environment or the bundled default
pub fn nutrition_table_path() -> PathBuf {
    std::env::var(NUTRITION_CSV_ENV)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| default_table_path(project_root()))
}

pub fn default_table_path(root: PathBuf) -> PathBuf {
    root.join("data").join(DEFAULT_TABLE_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_path() {
        let path = default_table_path(PathBuf::from("/srv/smartplate"));
        assert_eq!(
            path,
            PathBuf::from("/srv/smartplate/data/Indian_Food_Nutrition_Processed.csv")
        );
    }
}
