//! Core functionality modules
//!
//! - `models`: records read from the music library
//! - `aggregate`: merging of multi-query result sets
//! - `data`: read-only SQLite access to the library file

pub mod aggregate;
pub mod data;
pub mod models;
