//! LocalCatalog - databases opened from configuration

use tracing::{info, warn};
use uksi_core::{
    storage::{HistoryProvider, StoreResult},
    SpeciesCatalog, SpeciesSummary, TaxonDetail,
};

use crate::config::CatalogConfig;
use crate::error::Result;
use crate::history::SqliteHistory;
use crate::index::SqliteNameIndex;

/// A species catalog over a UKSI extract, with the user's observation
/// history attached when one is configured.
pub struct LocalCatalog {
    catalog: SpeciesCatalog<SqliteNameIndex>,
    history: Option<SqliteHistory>,
}

impl LocalCatalog {
    /// Open the databases named in `config`.
    ///
    /// A missing or malformed UKSI database is fatal. A missing observations
    /// database only disables ranking.
    pub fn open(config: &CatalogConfig) -> Result<Self> {
        config.validate()?;
        let index = SqliteNameIndex::open(&config.uksi_path)?;

        let history = match &config.observations_path {
            Some(path) => match SqliteHistory::open(path) {
                Ok(history) => Some(history),
                Err(e) => {
                    warn!("Observation history unavailable, ranking disabled: {}", e);
                    None
                }
            },
            None => None,
        };

        info!(
            "Species catalog ready (ranking {})",
            if history.is_some() { "on" } else { "off" }
        );
        Ok(Self::from_parts(
            SpeciesCatalog::with_config(index, config.search.clone()),
            history,
        ))
    }

    pub fn from_parts(
        catalog: SpeciesCatalog<SqliteNameIndex>,
        history: Option<SqliteHistory>,
    ) -> Self {
        Self { catalog, history }
    }

    pub fn catalog(&self) -> &SpeciesCatalog<SqliteNameIndex> {
        &self.catalog
    }

    pub fn history(&self) -> Option<&SqliteHistory> {
        self.history.as_ref()
    }

    /// Search, ranked by the attached history if there is one.
    pub fn search(&self, term: &str, limit: usize) -> StoreResult<Vec<SpeciesSummary>> {
        let history = self.history.as_ref().map(|h| h as &dyn HistoryProvider);
        self.catalog.search(term, limit, history)
    }

    pub fn search_default(&self, term: &str) -> StoreResult<Vec<SpeciesSummary>> {
        self.search(term, self.catalog.config().default_limit)
    }

    pub fn resolve_hierarchy(&self, taxon_key: &str) -> StoreResult<TaxonDetail> {
        self.catalog.resolve_hierarchy(taxon_key)
    }

    pub fn format_taxonomy_path(&self, taxon_key: &str) -> StoreResult<String> {
        self.catalog.format_taxonomy_path(taxon_key)
    }

    pub fn common_names(&self, taxon_key: &str) -> StoreResult<Vec<String>> {
        self.catalog.common_names(taxon_key)
    }

    pub fn synonyms(&self, taxon_key: &str) -> StoreResult<Vec<String>> {
        self.catalog.synonyms(taxon_key)
    }
}
