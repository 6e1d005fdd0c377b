//! SQLite storage backend for UKSI species search
//!
//! This crate provides SQLite implementations of the uksi-core storage
//! traits over the two databases a recording application keeps on disk:
//! the UKSI reference extract and the user's observations.
//!
//! # Features
//!
//! - `SqliteNameIndex` implements `NameIndex` over `uksi.db`
//! - `SqliteHistory` implements `HistoryProvider` over the observations `records` table
//! - Existing databases are opened read-only; missing ones fail fast
//! - In-memory databases with the embedded schema for testing
//!
//! # Example
//!
//! ```rust,no_run
//! use uksi_sqlite::{CatalogConfig, LocalCatalog};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! uksi_sqlite::logging::init();
//!
//! let config = CatalogConfig::new("data/uksi.db").with_observations("data/observations.db");
//! let catalog = LocalCatalog::open(&config)?;
//!
//! for species in catalog.search("black bird", 10)? {
//!     println!("{}", species.display_label(true));
//! }
//! println!("{}", catalog.format_taxonomy_path("NHMSYS0000530420")?);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod history;
pub mod index;
pub mod logging;
pub mod migrate;

// Re-export main types
pub use catalog::LocalCatalog;
pub use config::CatalogConfig;
pub use error::{Result, SqliteError};
pub use history::SqliteHistory;
pub use index::SqliteNameIndex;
