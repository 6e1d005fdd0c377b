//! SearchCoordinator - search, then rank, then cut to size

use tracing::debug;

use crate::config::SearchConfig;
use crate::rank::Ranker;
use crate::search::Searcher;
use crate::storage::{HistoryProvider, NameIndex, StoreResult};
use crate::taxon::SpeciesSummary;

/// Orchestrates [`Searcher`] and [`Ranker`].
///
/// The searcher is asked for `limit * oversample_factor` candidates so that
/// species the user records often can be pulled up from beyond the first
/// `limit` before truncation.
pub struct SearchCoordinator<'a, I: NameIndex + ?Sized> {
    searcher: Searcher<'a, I>,
    ranker: Ranker,
    oversample_factor: usize,
}

impl<'a, I: NameIndex + ?Sized> SearchCoordinator<'a, I> {
    pub fn new(index: &'a I) -> Self {
        Self::with_config(index, &SearchConfig::default())
    }

    pub fn with_config(index: &'a I, config: &SearchConfig) -> Self {
        Self {
            searcher: Searcher::with_config(index, config),
            ranker: Ranker::with_config(config),
            oversample_factor: config.oversample_factor.max(1),
        }
    }

    /// Search, rank by `history` when given, truncate to `limit`.
    pub fn find(
        &self,
        term: &str,
        limit: usize,
        history: Option<&dyn HistoryProvider>,
    ) -> StoreResult<Vec<SpeciesSummary>> {
        let fetch = limit.saturating_mul(self.oversample_factor);
        let mut results = self.searcher.search(term, fetch)?;

        if let Some(history) = history {
            results = self.ranker.rank(results, history);
        }

        results.truncate(limit);
        debug!("Smart search '{}' returned {} species", term, results.len());
        Ok(results)
    }
}
