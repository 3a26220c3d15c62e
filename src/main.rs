//! SmartPlate
//!
//! An MCP server that turns food detections into nutrition facts.

use std::sync::Arc;

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use smartplate::config;
use smartplate::mcp::SmartPlateService;
use smartplate::nutrition::SharedTable;
use smartplate::tools::status;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout stays clean for MCP stdio
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(config::DEFAULT_LOG_DIRECTIVE.parse()?))
        .with_writer(std::io::stderr)
        .init();

    let table_path = config::nutrition_table_path();
    eprintln!("{}", status::startup_banner(&table_path));

    // Load up front so the load diagnostic lands in the startup log.
    // A missing table is not fatal; lookups report no data instead.
    let table = Arc::new(SharedTable::new(table_path));
    let state = table.get();
    if state.is_available() {
        eprintln!("Loaded {} dishes", state.record_count());
    } else {
        eprintln!("Running without nutrition data");
    }

    eprintln!("Starting MCP server on stdio...");
    let service = SmartPlateService::new(table);

    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
