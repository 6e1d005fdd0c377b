//! Taxonomy resolution by walking hierarchy edges upward
//!
//! The reference dataset does not guarantee a clean forest: parent links may
//! loop back on themselves or point at keys that have no taxon row. The walk
//! stops at the first such defect and returns what it collected so far.

use ahash::AHashSet;
use tracing::{debug, warn};

use crate::config::SearchConfig;
use crate::storage::{NameIndex, StoreError, StoreResult};
use crate::taxon::{SpeciesSummary, Taxon, TaxonDetail, Taxonomy};

/// Builds [`TaxonDetail`] values from a borrowed index.
pub struct HierarchyResolver<'a, I: NameIndex + ?Sized> {
    index: &'a I,
    max_depth: usize,
}

impl<'a, I: NameIndex + ?Sized> HierarchyResolver<'a, I> {
    pub fn new(index: &'a I) -> Self {
        Self::with_config(index, &SearchConfig::default())
    }

    pub fn with_config(index: &'a I, config: &SearchConfig) -> Self {
        Self {
            index,
            max_depth: config.max_hierarchy_depth.max(1),
        }
    }

    /// Full detail for `taxon_key`.
    ///
    /// Returns `StoreError::NotFound` only when `taxon_key` itself is unknown;
    /// a broken ancestor chain just leaves levels empty.
    pub fn resolve(&self, taxon_key: &str) -> StoreResult<TaxonDetail> {
        let taxon = self
            .index
            .get_taxon(taxon_key)?
            .ok_or_else(|| StoreError::NotFound(taxon_key.to_string()))?;

        let (parent_taxon_key, taxonomy) = self.walk(&taxon)?;

        let common_names = self
            .index
            .bulk_common_names(std::slice::from_ref(&taxon.taxon_key))?
            .remove(&taxon.taxon_key);

        let mut species = SpeciesSummary::from_taxon(taxon);
        species.common_names = common_names;

        Ok(TaxonDetail {
            species,
            parent_taxon_key,
            taxonomy,
        })
    }

    /// `"Animalia > Chordata > Aves > Passeriformes > Turdidae > Turdus"`.
    ///
    /// Unpopulated levels are skipped; an unknown key gives an empty string.
    pub fn format_path(&self, taxon_key: &str) -> StoreResult<String> {
        match self.resolve(taxon_key) {
            Ok(detail) => Ok(detail.path()),
            Err(StoreError::NotFound(_)) => Ok(String::new()),
            Err(e) => Err(e),
        }
    }

    /// Walk from `start` towards the root, filling each level from the nearest
    /// taxon holding it. Returns the start's parent key and the taxonomy.
    fn walk(&self, start: &Taxon) -> StoreResult<(Option<String>, Taxonomy)> {
        let mut taxonomy = Taxonomy::default();
        let mut parent_taxon_key = None;
        let mut visited: AHashSet<String> = AHashSet::new();
        let mut current = start.clone();
        let mut depth = 0usize;

        loop {
            visited.insert(current.taxon_key.clone());
            if let Some(level) = current.level() {
                taxonomy.fill(level, &current.scientific_name);
            }

            let parent = self.index.get_parent(&current.taxon_key)?;
            if depth == 0 {
                parent_taxon_key = parent.clone();
            }

            let Some(parent_key) = parent else {
                if depth == 0 {
                    warn!("Taxon {} has no parent in hierarchy", start.taxon_key);
                }
                break;
            };

            depth += 1;
            if depth >= self.max_depth {
                warn!(
                    "Hierarchy walk for {} stopped at depth {} (limit reached)",
                    start.taxon_key, depth
                );
                break;
            }
            if visited.contains(&parent_key) {
                warn!(
                    "Circular hierarchy for {} at depth {}: {} already visited",
                    start.taxon_key, depth, parent_key
                );
                break;
            }

            match self.index.get_taxon(&parent_key)? {
                Some(parent) => current = parent,
                None => {
                    warn!(
                        "Dangling parent {} for {} at depth {}",
                        parent_key, current.taxon_key, depth
                    );
                    break;
                }
            }
        }

        debug!(
            "Taxonomy for {} built with {} levels after {} hops",
            start.taxon_key,
            taxonomy.depth(),
            depth
        );
        Ok((parent_taxon_key, taxonomy))
    }
}
