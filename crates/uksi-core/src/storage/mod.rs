//! Storage abstraction for the reference dataset and the observation history
//!
//! This module defines the [`NameIndex`] and [`HistoryProvider`] traits that
//! abstract over different storage backends. Implementations exist for:
//!
//! - **Memory**: In-memory storage for testing (`MemoryIndex`, `MemoryHistory`)
//! - **SQLite**: Native SQLite via rusqlite (separate crate, `uksi-sqlite`)
//!
//! Both traits are read-only: nothing in this crate writes to either store.
//!
//! # Example
//!
//! ```rust
//! use uksi_core::storage::{MemoryIndex, NameIndex, NameQuery};
//!
//! let index = MemoryIndex::new()
//!     .with_taxon("T1", "Turdus merula", "Species")
//!     .with_common_name("Blackbird", "T1");
//!
//! let found = index.find_taxa_matching(&NameQuery::parse("black bird")).unwrap();
//! assert_eq!(found[0].scientific_name, "Turdus merula");
//! ```

mod error;
mod memory;
mod query;
mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::{MemoryHistory, MemoryIndex};
pub use query::NameQuery;
pub use traits::{CommonNameMap, HistoryProvider, NameIndex, TaxonKeySet};
