//! SmartPlate tools module
//!
//! Operations exposed to the presentation layer (MCP server and CLI).

pub mod analysis;
pub mod dishes;
pub mod status;
