//! SpeciesCatalog - the entry point for the surrounding application

use crate::config::SearchConfig;
use crate::coordinator::SearchCoordinator;
use crate::hierarchy::HierarchyResolver;
use crate::storage::{HistoryProvider, NameIndex, StoreResult};
use crate::taxon::{SpeciesSummary, TaxonDetail};

/// Owns a [`NameIndex`] handle and exposes search and taxonomy lookups.
///
/// The handle is injected by the caller, which also owns its lifecycle.
/// Each call builds its components afresh; nothing is cached between calls.
pub struct SpeciesCatalog<I: NameIndex> {
    index: I,
    config: SearchConfig,
}

impl<I: NameIndex> SpeciesCatalog<I> {
    pub fn new(index: I) -> Self {
        Self::with_config(index, SearchConfig::default())
    }

    pub fn with_config(index: I, config: SearchConfig) -> Self {
        Self { index, config }
    }

    pub fn index(&self) -> &I {
        &self.index
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Ranked species search. See [`SearchCoordinator::find`].
    pub fn search(
        &self,
        term: &str,
        limit: usize,
        history: Option<&dyn HistoryProvider>,
    ) -> StoreResult<Vec<SpeciesSummary>> {
        SearchCoordinator::with_config(&self.index, &self.config).find(term, limit, history)
    }

    /// Search with the configured default limit.
    pub fn search_default(
        &self,
        term: &str,
        history: Option<&dyn HistoryProvider>,
    ) -> StoreResult<Vec<SpeciesSummary>> {
        self.search(term, self.config.default_limit, history)
    }

    /// Species detail with kingdom..genus. `StoreError::NotFound` for unknown keys.
    pub fn resolve_hierarchy(&self, taxon_key: &str) -> StoreResult<TaxonDetail> {
        HierarchyResolver::with_config(&self.index, &self.config).resolve(taxon_key)
    }

    /// Kingdom..genus joined by `" > "`, empty for unknown keys.
    pub fn format_taxonomy_path(&self, taxon_key: &str) -> StoreResult<String> {
        HierarchyResolver::with_config(&self.index, &self.config).format_path(taxon_key)
    }

    pub fn common_names(&self, taxon_key: &str) -> StoreResult<Vec<String>> {
        self.index.common_names(taxon_key)
    }

    pub fn synonyms(&self, taxon_key: &str) -> StoreResult<Vec<String>> {
        self.index.synonyms(taxon_key)
    }
}
