//! Utility modules for common functionality
//!
//! - `logging`: tracing subscriber setup for both run modes

pub mod logging;
