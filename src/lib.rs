//! Expense record service library
//!
//! HTTP CRUD API over a persistent collection of expense records.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::expenses;
pub use modules::health;
