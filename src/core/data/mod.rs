//! Data layer modules
//!
//! The music library is an externally maintained SQLite file; nothing here
//! writes to it.

pub mod library;

#[cfg(test)]
pub mod fixtures;

pub use library::Library;
