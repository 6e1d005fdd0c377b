//! Storage trait definitions

use ahash::{AHashMap, AHashSet};

use crate::storage::error::StoreResult;
use crate::storage::query::NameQuery;
use crate::taxon::Taxon;

/// Set of taxon keys returned by history queries.
pub type TaxonKeySet = AHashSet<String>;

/// Taxon key -> comma-joined common names.
pub type CommonNameMap = AHashMap<String, String>;

/// Read-only access to the reference dataset.
///
/// Implementations hold no search logic: the searcher, ranker and hierarchy
/// resolver are written against this trait only.
/// - Native: SQLite (separate crate)
/// - Testing: In-memory
pub trait NameIndex {
    /// All taxa satisfying the word predicate, in no particular order.
    ///
    /// May return several taxa sharing one scientific name.
    fn find_taxa_matching(&self, query: &NameQuery) -> StoreResult<Vec<Taxon>>;

    /// Common names for many taxa in one lookup.
    ///
    /// Names are joined with `", "` in store order. Taxa without common names
    /// are absent from the map.
    fn bulk_common_names(&self, taxon_keys: &[String]) -> StoreResult<CommonNameMap>;

    /// Retrieve a taxon by key.
    ///
    /// Returns `None` if not found.
    fn get_taxon(&self, taxon_key: &str) -> StoreResult<Option<Taxon>>;

    /// Parent key from the hierarchy edges, `None` when the taxon has no edge.
    ///
    /// The returned key is not guaranteed to exist as a taxon.
    fn get_parent(&self, taxon_key: &str) -> StoreResult<Option<String>>;

    /// Every common name of one taxon.
    fn common_names(&self, taxon_key: &str) -> StoreResult<Vec<String>>;

    /// Every synonym of one taxon.
    fn synonyms(&self, taxon_key: &str) -> StoreResult<Vec<String>>;

    /// Check if a taxon exists.
    fn exists(&self, taxon_key: &str) -> StoreResult<bool> {
        Ok(self.get_taxon(taxon_key)?.is_some())
    }
}

/// Read-only view of the user's observation history, used for ranking.
pub trait HistoryProvider {
    /// Taxa observed within the last `window_days` days.
    fn recent_taxa(&self, window_days: u32) -> StoreResult<TaxonKeySet>;

    /// Taxa observed at least once, ever.
    fn all_recorded_taxa(&self) -> StoreResult<TaxonKeySet>;
}
