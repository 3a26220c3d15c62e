//! Utility to analyze detector labels from the command line
//!
//! Usage: lookup_dish [--csv PATH] LABEL...

use std::path::PathBuf;

use smartplate::config;
use smartplate::models::Detection;
use smartplate::nutrition::TableState;
use smartplate::tools::analysis::analyze_detections;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: lookup_dish [--csv PATH] LABEL...";

#[derive(Debug, PartialEq)]
enum Command {
    Help,
    Analyze { csv_path: Option<PathBuf>, labels: Vec<String> },
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Command, String> {
    let mut csv_path = None;
    let mut labels = Vec::new();

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--csv" => {
                let path = args.next().ok_or_else(|| format!("--csv requires a path\n{}", USAGE))?;
                csv_path = Some(PathBuf::from(path));
            }
            "-h" | "--help" => return Ok(Command::Help),
            _ => labels.push(arg),
        }
    }

    if labels.is_empty() {
        return Err(format!("at least one label is required\n{}", USAGE));
    }

    Ok(Command::Analyze { csv_path, labels })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(config::DEFAULT_LOG_DIRECTIVE.parse()?))
        .with_writer(std::io::stderr)
        .init();

    let (csv_path, labels) = match parse_args(std::env::args().skip(1))? {
        Command::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
        Command::Analyze { csv_path, labels } => (csv_path, labels),
    };

    let path = csv_path.unwrap_or_else(config::nutrition_table_path);
    eprintln!("Nutrition table: {}", path.display());

    let table = TableState::load(&path);
    let detections: Vec<Detection> = labels.into_iter().map(Detection::from_label).collect();
    let analysis = analyze_detections(&table, &detections);

    println!("{}", serde_json::to_string_pretty(&analysis)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_labels_only() {
        let cmd = parse_args(args(&["idli", "unknown_object"])).unwrap();
        assert_eq!(
            cmd,
            Command::Analyze { csv_path: None, labels: args(&["idli", "unknown_object"]) }
        );
    }

    #[test]
    fn test_csv_path_anywhere() {
        let cmd = parse_args(args(&["idli", "--csv", "data/dishes.csv", "pizza"])).unwrap();
        assert_eq!(
            cmd,
            Command::Analyze {
                csv_path: Some(PathBuf::from("data/dishes.csv")),
                labels: args(&["idli", "pizza"]),
            }
        );
    }

    #[test]
    fn test_csv_without_path_is_error() {
        let err = parse_args(args(&["idli", "--csv"])).unwrap_err();
        assert!(err.contains("--csv requires a path"));
    }

    #[test]
    fn test_no_labels_is_error() {
        assert!(parse_args(args(&[])).is_err());
        assert!(parse_args(args(&["--csv", "x.csv"])).is_err());
    }

    #[test]
    fn test_help() {
        assert_eq!(parse_args(args(&["pizza", "--help"])).unwrap(), Command::Help);
    }
}
