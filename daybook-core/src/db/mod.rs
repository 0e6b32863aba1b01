//! Database layer for daybook
//!
//! This module provides the storage gateway over SQLite:
//! - Schema creation for the `diary` and `savings` tables
//! - Parameterized statements with per-statement connections
//! - Read helpers for the diary listing and savings total

pub mod repo;
pub mod schema;

pub use repo::Database;
