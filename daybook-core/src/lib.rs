//! # daybook-core
//!
//! Core library for daybook - a diary and savings journal.
//!
//! This library provides:
//! - Record types for diary entries and savings amounts
//! - Storage gateway over a local SQLite file
//! - Console formatting helpers
//! - Configuration management
//! - Logging infrastructure
//!
//! ## Example
//!
//! ```rust,no_run
//! use daybook_core::{Config, Database, Record};
//!
//! let config = Config::load().expect("failed to load config");
//!
//! let db = Database::open(config.database_path());
//! db.initialize().expect("failed to create tables");
//!
//! Record::diary("Went hiking").save(&db).expect("failed to save entry");
//! ```

// Re-export commonly used items at the crate root
pub use config::Config;
pub use db::Database;
pub use error::{Error, Result};
pub use types::*;

// Public modules
pub mod config;
pub mod db;
pub mod error;
pub mod format;
pub mod logging;
pub mod types;
