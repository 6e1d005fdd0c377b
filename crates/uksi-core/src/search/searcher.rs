//! Searcher - multi-word name search over a [`NameIndex`]

use tracing::debug;

use super::order::{dedup_by_scientific_name, relevance_order};
use crate::config::SearchConfig;
use crate::storage::{NameIndex, NameQuery, StoreResult};
use crate::taxon::SpeciesSummary;

/// Executes name searches against a borrowed index.
///
/// Pure read: every call goes back to the index, nothing is cached.
pub struct Searcher<'a, I: NameIndex + ?Sized> {
    index: &'a I,
    min_query_chars: usize,
}

impl<'a, I: NameIndex + ?Sized> Searcher<'a, I> {
    /// Create a searcher with default configuration
    pub fn new(index: &'a I) -> Self {
        Self::with_config(index, &SearchConfig::default())
    }

    pub fn with_config(index: &'a I, config: &SearchConfig) -> Self {
        Self {
            index,
            min_query_chars: config.min_query_chars,
        }
    }

    /// Search scientific and common names.
    ///
    /// Returns at most `limit` species, one per scientific name, names
    /// starting with `term` first. A term shorter than the configured minimum
    /// yields an empty result, not an error.
    pub fn search(&self, term: &str, limit: usize) -> StoreResult<Vec<SpeciesSummary>> {
        let term = term.trim();
        if term.chars().count() < self.min_query_chars {
            debug!("Search term '{}' too short, skipping", term);
            return Ok(Vec::new());
        }

        let query = NameQuery::parse(term);
        if query.is_empty() || limit == 0 {
            return Ok(Vec::new());
        }

        let candidates = self.index.find_taxa_matching(&query)?;
        let candidate_count = candidates.len();

        let mut taxa = dedup_by_scientific_name(candidates);
        let term_lower = term.to_lowercase();
        taxa.sort_by(|a, b| relevance_order(&term_lower, a, b));
        taxa.truncate(limit);

        // One lookup for every surviving key
        let keys: Vec<String> = taxa.iter().map(|t| t.taxon_key.clone()).collect();
        let mut common_names = if keys.is_empty() {
            Default::default()
        } else {
            self.index.bulk_common_names(&keys)?
        };

        let results: Vec<SpeciesSummary> = taxa
            .into_iter()
            .map(|taxon| {
                let names = common_names.remove(&taxon.taxon_key);
                let mut species = SpeciesSummary::from_taxon(taxon);
                species.common_names = names;
                species
            })
            .collect();

        debug!(
            "Search '{}' matched {} taxa, returned {} species",
            term,
            candidate_count,
            results.len()
        );
        Ok(results)
    }
}
