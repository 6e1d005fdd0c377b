//! History-based ranking of search results
//!
//! Species the user recorded lately come first, then species recorded at some
//! point, then everything else. The history store is read twice per call and
//! never written.

use std::fmt;

use tracing::{debug, warn};

use crate::config::SearchConfig;
use crate::storage::{HistoryProvider, StoreResult, TaxonKeySet};
use crate::taxon::SpeciesSummary;

/// Ranking tier of a result. Lower sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Priority {
    /// Recorded within the recency window
    Recent = 1,
    /// Recorded at some point, but not lately
    Recorded = 2,
    /// Never recorded
    Unrecorded = 3,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Recent => write!(f, "recent"),
            Self::Recorded => write!(f, "recorded"),
            Self::Unrecorded => write!(f, "unrecorded"),
        }
    }
}

/// Reorders search results using the user's observation history.
#[derive(Debug, Clone)]
pub struct Ranker {
    recent_window_days: u32,
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new()
    }
}

impl Ranker {
    pub fn new() -> Self {
        Self::with_config(&SearchConfig::default())
    }

    pub fn with_config(config: &SearchConfig) -> Self {
        Self {
            recent_window_days: config.recent_window_days,
        }
    }

    /// Tier of a single taxon given the two history sets.
    pub fn priority(taxon_key: &str, recent: &TaxonKeySet, recorded: &TaxonKeySet) -> Priority {
        if recent.contains(taxon_key) {
            Priority::Recent
        } else if recorded.contains(taxon_key) {
            Priority::Recorded
        } else {
            Priority::Unrecorded
        }
    }

    /// Sort by tier, then case-sensitive scientific name.
    ///
    /// The output is a permutation of the input. A failing history lookup is
    /// logged and treated as an empty set, so this never fails.
    pub fn rank(
        &self,
        results: Vec<SpeciesSummary>,
        history: &dyn HistoryProvider,
    ) -> Vec<SpeciesSummary> {
        let recent = load_or_empty("recent", history.recent_taxa(self.recent_window_days));
        let recorded = load_or_empty("recorded", history.all_recorded_taxa());

        debug!(
            "Ranking {} results: {} recent species, {} recorded",
            results.len(),
            recent.len(),
            recorded.len()
        );

        let mut prioritized: Vec<(Priority, SpeciesSummary)> = results
            .into_iter()
            .map(|species| {
                (
                    Self::priority(&species.taxon_key, &recent, &recorded),
                    species,
                )
            })
            .collect();

        prioritized.sort_by(|(pa, a), (pb, b)| {
            pa.cmp(pb)
                .then_with(|| a.scientific_name.cmp(&b.scientific_name))
        });

        prioritized.into_iter().map(|(_, species)| species).collect()
    }
}

fn load_or_empty(label: &str, loaded: StoreResult<TaxonKeySet>) -> TaxonKeySet {
    loaded.unwrap_or_else(|e| {
        warn!("Could not load {} species, ranking without them: {}", label, e);
        TaxonKeySet::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryHistory, StoreError};
    use crate::taxon::Taxon;
    use pretty_assertions::assert_eq;

    struct UnavailableHistory;

    impl HistoryProvider for UnavailableHistory {
        fn recent_taxa(&self, _window_days: u32) -> StoreResult<TaxonKeySet> {
            Err(StoreError::Backend("observations database is locked".into()))
        }

        fn all_recorded_taxa(&self) -> StoreResult<TaxonKeySet> {
            Err(StoreError::Backend("observations database is locked".into()))
        }
    }

    fn species(key: &str, name: &str) -> SpeciesSummary {
        SpeciesSummary::from_taxon(Taxon::new(key, name, "Species"))
    }

    fn keys(results: &[SpeciesSummary]) -> Vec<&str> {
        results.iter().map(|r| r.taxon_key.as_str()).collect()
    }

    #[test]
    fn test_recent_then_recorded_then_never() {
        let history = MemoryHistory::new()
            .record_days_ago("T1", 10)
            .record_days_ago("T2", 400);

        let ranked = Ranker::new().rank(
            vec![
                species("T3", "Anas platyrhynchos"),
                species("T2", "Branta canadensis"),
                species("T1", "Cygnus olor"),
            ],
            &history,
        );
        assert_eq!(keys(&ranked), vec!["T1", "T2", "T3"]);
    }

    #[test]
    fn test_name_order_within_tier() {
        let history = MemoryHistory::new();
        let ranked = Ranker::new().rank(
            vec![
                species("K1", "Quercus robur"),
                species("K2", "Quercus"),
                species("K3", "Abies alba"),
            ],
            &history,
        );
        // Tier order replaces the searcher's length order
        assert_eq!(keys(&ranked), vec!["K3", "K2", "K1"]);
    }

    #[test]
    fn test_name_order_is_case_sensitive() {
        let ranked = Ranker::new().rank(
            vec![species("K1", "abies"), species("K2", "Zostera")],
            &MemoryHistory::new(),
        );
        assert_eq!(keys(&ranked), vec!["K2", "K1"]);
    }

    #[test]
    fn test_recent_window_is_configurable() {
        let history = MemoryHistory::new()
            .record_days_ago("T1", 45)
            .record_days_ago("T2", 5);
        let config = SearchConfig {
            recent_window_days: 60,
            ..Default::default()
        };

        let results = vec![species("T2", "Bellis perennis"), species("T1", "Achillea millefolium")];
        let ranked = Ranker::with_config(&config).rank(results.clone(), &history);
        assert_eq!(keys(&ranked), vec!["T1", "T2"]);

        // With the default 30 days T1 drops to the recorded tier
        let ranked = Ranker::new().rank(results, &history);
        assert_eq!(keys(&ranked), vec!["T2", "T1"]);
    }

    #[test]
    fn test_unavailable_history_degrades_to_name_order() {
        let ranked = Ranker::new().rank(
            vec![species("T2", "Sorbus aucuparia"), species("T1", "Betula pendula")],
            &UnavailableHistory,
        );
        assert_eq!(keys(&ranked), vec!["T1", "T2"]);
    }

    #[test]
    fn test_ranking_is_a_permutation() {
        let history = MemoryHistory::new()
            .record_days_ago("K4", 1)
            .record_days_ago("K7", 100)
            .record_days_ago("unrelated", 2);
        let input: Vec<SpeciesSummary> = (0..10)
            .map(|i| species(&format!("K{}", i), &format!("Name {}", 9 - i)))
            .collect();

        let ranked = Ranker::new().rank(input.clone(), &history);

        let mut before: Vec<&str> = keys(&input);
        let mut after: Vec<&str> = keys(&ranked);
        before.sort();
        after.sort();
        assert_eq!(before, after);

        let tiers: Vec<Priority> = {
            let recent = history.recent_taxa(30).unwrap();
            let recorded = history.all_recorded_taxa().unwrap();
            ranked
                .iter()
                .map(|s| Ranker::priority(&s.taxon_key, &recent, &recorded))
                .collect()
        };
        assert!(tiers.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(tiers[0], Priority::Recent);
        assert_eq!(tiers[1], Priority::Recorded);
    }
}
