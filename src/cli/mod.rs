//! Command Line Interface module
//!
//! - `browse`: the interactive terminal browser (default command)
//! - `search`, `lookup`, `duplicates`: one-shot queries printed as a table or JSON
//! - `config`: inspect or write the configuration file

pub mod browse;
pub mod config;
pub mod duplicates;
pub mod lookup;
pub mod output;
pub mod search;
