//! SmartPlate Library
//!
//! Matches food detector labels against an Indian dish nutrition table.

pub mod config;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod tools;
