//! UKSI Core Engine
//!
//! Species name search and taxonomy resolution over the UK Species Inventory,
//! independent of where the inventory is stored.
//!
//! # Components
//!
//! - [`storage`] - `NameIndex` / `HistoryProvider` traits and in-memory backends
//! - [`search`] - multi-word matching, deduplication by scientific name, ordering
//! - [`rank`] - three-tier reordering from the user's observation history
//! - [`hierarchy`] - cycle-safe parent walk producing kingdom..genus
//! - [`coordinator`] - oversampled search followed by ranking
//! - [`catalog`] - the facade the application talks to
//!
//! # Example
//!
//! ```rust
//! use uksi_core::{MemoryHistory, MemoryIndex, SpeciesCatalog};
//!
//! let index = MemoryIndex::new()
//!     .with_taxon("G1", "Turdus", "Genus")
//!     .with_taxon("T1", "Turdus merula", "Species")
//!     .with_common_name("Blackbird", "T1")
//!     .with_parent("T1", "G1");
//! let catalog = SpeciesCatalog::new(index);
//!
//! let history = MemoryHistory::new().record_days_ago("T1", 3);
//! let results = catalog.search("black bird", 5, Some(&history)).unwrap();
//! assert_eq!(results[0].scientific_name, "Turdus merula");
//!
//! assert_eq!(catalog.format_taxonomy_path("T1").unwrap(), "Turdus");
//! ```

pub mod catalog;
pub mod config;
pub mod coordinator;
pub mod hierarchy;
pub mod rank;
pub mod search;
pub mod storage;
pub mod taxon;

// Re-export main types at crate root
pub use catalog::SpeciesCatalog;
pub use config::SearchConfig;
pub use coordinator::SearchCoordinator;
pub use hierarchy::HierarchyResolver;
pub use rank::{Priority, Ranker};
pub use search::Searcher;
pub use storage::{
    HistoryProvider, MemoryHistory, MemoryIndex, NameIndex, NameQuery, StoreError, StoreResult,
    TaxonKeySet,
};
pub use taxon::{ObservationEvent, SpeciesSummary, Taxon, TaxonDetail, TaxonomicLevel, Taxonomy};
