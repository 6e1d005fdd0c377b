//! Taxon types - the data model of the species index
//!
//! A [`Taxon`] is one row of the reference dataset. Search returns
//! [`SpeciesSummary`] values; hierarchy resolution returns [`TaxonDetail`].
//!
//! # Example
//!
//! ```rust
//! use uksi_core::taxon::{SpeciesSummary, Taxon, TaxonomicLevel};
//!
//! let taxon = Taxon::new("NBNSYS0000000001", "Turdus", "Genus");
//! assert_eq!(taxon.level(), Some(TaxonomicLevel::Genus));
//!
//! let species = SpeciesSummary::from_taxon(Taxon::new("T1", "Turdus merula", "Species"));
//! assert_eq!(species.display_label(true), "Turdus merula");
//! ```

mod types;

pub use types::{ObservationEvent, SpeciesSummary, Taxon, TaxonDetail, TaxonomicLevel, Taxonomy};
