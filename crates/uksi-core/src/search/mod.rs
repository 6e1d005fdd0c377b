//! Species name search
//!
//! Multi-word substring matching over scientific and common names:
//!
//! 1. Every word must appear in the scientific name or a common name
//! 2. One representative per scientific name (species > infraspecific > hybrid)
//! 3. Names starting with the term first, then shorter names, then lexical
//! 4. Common names attached in one bulk lookup
//!
//! There is no edit-distance matching: "Turdis" does not find "Turdus".
//!
//! # Example
//!
//! ```rust
//! use uksi_core::search::Searcher;
//! use uksi_core::storage::MemoryIndex;
//!
//! let index = MemoryIndex::new()
//!     .with_taxon("T1", "Platydema violaceum", "Species");
//!
//! let results = Searcher::new(&index).search("Platy viola", 10).unwrap();
//! assert_eq!(results[0].taxon_key, "T1");
//! ```

mod order;
mod searcher;

pub use order::{dedup_by_scientific_name, relevance_order, representative_order, NameTier};
pub use searcher::Searcher;
