//! Macrocheck Tools module
//!
//! MCP tool implementations.

pub mod evaluate;
pub mod status;
