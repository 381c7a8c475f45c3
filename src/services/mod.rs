//! Service layer
//!
//! - `LibraryService`: the queries the browser and the commands need
//! - `SimpleServices`: configuration plus construction of the library

pub mod library;
pub mod simple_container;

pub use library::LibraryService;
pub use simple_container::SimpleServices;
