//! In-memory storage backends
//!
//! Vec/HashMap-based implementations of [`NameIndex`] and [`HistoryProvider`]
//! for testing and for embedding small curated datasets.
//! Not suitable for the full UKSI.

use ahash::AHashMap;
use chrono::{Duration, NaiveDate, Utc};

use crate::storage::error::StoreResult;
use crate::storage::query::NameQuery;
use crate::storage::traits::{CommonNameMap, HistoryProvider, NameIndex, TaxonKeySet};
use crate::taxon::{ObservationEvent, Taxon};

/// In-memory reference dataset.
///
/// Keeps insertion order for taxa and names, matching what a database
/// returns for rows inserted in that order. Duplicate keys and duplicate
/// `(name, taxon_key)` pairs are ignored, like `INSERT OR IGNORE`.
#[derive(Debug, Default)]
pub struct MemoryIndex {
    taxa: Vec<Taxon>,
    positions: AHashMap<String, usize>,
    common_names: Vec<(String, String)>,
    synonyms: Vec<(String, String)>,
    parents: AHashMap<String, String>,
}

impl MemoryIndex {
    /// Create a new empty index.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_taxon(
        mut self,
        taxon_key: impl Into<String>,
        scientific_name: impl Into<String>,
        rank: impl Into<String>,
    ) -> Self {
        self.insert_taxon(Taxon::new(taxon_key, scientific_name, rank));
        self
    }

    pub fn with_common_name(mut self, name: impl Into<String>, taxon_key: impl Into<String>) -> Self {
        push_unique(&mut self.common_names, name.into(), taxon_key.into());
        self
    }

    pub fn with_synonym(mut self, synonym: impl Into<String>, taxon_key: impl Into<String>) -> Self {
        push_unique(&mut self.synonyms, synonym.into(), taxon_key.into());
        self
    }

    /// Add a hierarchy edge. Neither key has to exist as a taxon.
    pub fn with_parent(mut self, taxon_key: impl Into<String>, parent_key: impl Into<String>) -> Self {
        self.parents
            .entry(taxon_key.into())
            .or_insert_with(|| parent_key.into());
        self
    }

    fn insert_taxon(&mut self, taxon: Taxon) {
        if self.positions.contains_key(&taxon.taxon_key) {
            return;
        }
        self.positions.insert(taxon.taxon_key.clone(), self.taxa.len());
        self.taxa.push(taxon);
    }

    fn names_for<'a>(names: &'a [(String, String)], taxon_key: &str) -> impl Iterator<Item = &'a str> {
        let taxon_key = taxon_key.to_string();
        names
            .iter()
            .filter(move |(_, key)| *key == taxon_key)
            .map(|(name, _)| name.as_str())
    }

    /// Number of taxa.
    pub fn len(&self) -> usize {
        self.taxa.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taxa.is_empty()
    }
}

fn push_unique(names: &mut Vec<(String, String)>, name: String, taxon_key: String) {
    if !names.iter().any(|(n, k)| *n == name && *k == taxon_key) {
        names.push((name, taxon_key));
    }
}

impl NameIndex for MemoryIndex {
    fn find_taxa_matching(&self, query: &NameQuery) -> StoreResult<Vec<Taxon>> {
        let mut by_taxon: AHashMap<&str, Vec<&str>> = AHashMap::new();
        for (name, key) in &self.common_names {
            by_taxon.entry(key.as_str()).or_default().push(name.as_str());
        }

        Ok(self
            .taxa
            .iter()
            .filter(|taxon| {
                let common = by_taxon
                    .get(taxon.taxon_key.as_str())
                    .map(Vec::as_slice)
                    .unwrap_or_default();
                query.matches(&taxon.scientific_name, common.iter().copied())
            })
            .cloned()
            .collect())
    }

    fn bulk_common_names(&self, taxon_keys: &[String]) -> StoreResult<CommonNameMap> {
        let mut grouped: AHashMap<String, Vec<&str>> = AHashMap::new();
        for (name, key) in &self.common_names {
            if taxon_keys.contains(key) {
                grouped.entry(key.clone()).or_default().push(name.as_str());
            }
        }

        Ok(grouped
            .into_iter()
            .map(|(key, names)| (key, names.join(", ")))
            .collect())
    }

    fn get_taxon(&self, taxon_key: &str) -> StoreResult<Option<Taxon>> {
        Ok(self
            .positions
            .get(taxon_key)
            .map(|&pos| self.taxa[pos].clone()))
    }

    fn get_parent(&self, taxon_key: &str) -> StoreResult<Option<String>> {
        Ok(self.parents.get(taxon_key).cloned())
    }

    fn common_names(&self, taxon_key: &str) -> StoreResult<Vec<String>> {
        Ok(Self::names_for(&self.common_names, taxon_key)
            .map(str::to_string)
            .collect())
    }

    fn synonyms(&self, taxon_key: &str) -> StoreResult<Vec<String>> {
        Ok(Self::names_for(&self.synonyms, taxon_key)
            .map(str::to_string)
            .collect())
    }
}

/// In-memory observation history.
///
/// "Recent" is measured against a fixed reference day, today (UTC) unless
/// set with [`MemoryHistory::with_today`].
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    events: Vec<ObservationEvent>,
    today: NaiveDate,
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            today: Utc::now().date_naive(),
        }
    }

    /// Pin the reference day used for the recency window.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn record(mut self, taxon_key: impl Into<String>, date: NaiveDate) -> Self {
        self.events.push(ObservationEvent::new(taxon_key, date));
        self
    }

    /// Record an observation `days` days before the reference day.
    pub fn record_days_ago(self, taxon_key: impl Into<String>, days: i64) -> Self {
        let date = self.today - Duration::days(days);
        self.record(taxon_key, date)
    }

    pub fn events(&self) -> &[ObservationEvent] {
        &self.events
    }
}

impl HistoryProvider for MemoryHistory {
    fn recent_taxa(&self, window_days: u32) -> StoreResult<TaxonKeySet> {
        let cutoff = self.today - Duration::days(i64::from(window_days));
        Ok(self
            .events
            .iter()
            .filter(|event| event.date >= cutoff)
            .map(|event| event.taxon_key.clone())
            .collect())
    }

    fn all_recorded_taxa(&self) -> StoreResult<TaxonKeySet> {
        Ok(self
            .events
            .iter()
            .map(|event| event.taxon_key.clone())
            .collect())
    }
}
