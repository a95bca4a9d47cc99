//! Macrocheck Library
//!
//! Food label evaluation: per-gram metrics, quality ratios and a verdict.

pub mod build_info;
pub mod config;
pub mod mcp;
pub mod nutrition;
pub mod tools;
