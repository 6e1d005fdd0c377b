//! Taxon type definitions

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A row of the reference dataset: one Taxon Version Key with its name and rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxon {
    /// Taxon Version Key (e.g., "NHMSYS0000530420")
    pub taxon_key: String,

    /// Scientific name, never empty
    pub scientific_name: String,

    /// Rank as recorded by the dataset ("Species", "Subspecies", "Genus", ...)
    pub rank: String,
}

impl Taxon {
    pub fn new(
        taxon_key: impl Into<String>,
        scientific_name: impl Into<String>,
        rank: impl Into<String>,
    ) -> Self {
        Self {
            taxon_key: taxon_key.into(),
            scientific_name: scientific_name.into(),
            rank: rank.into(),
        }
    }

    /// The taxonomy level this taxon occupies, if it is one that gets recorded.
    pub fn level(&self) -> Option<TaxonomicLevel> {
        TaxonomicLevel::from_rank(&self.rank)
    }
}

/// The unit returned by search and ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesSummary {
    pub taxon_key: String,
    pub scientific_name: String,

    /// Comma-joined common names in store order, `None` when the taxon has none
    #[serde(default)]
    pub common_names: Option<String>,

    pub rank: String,
}

impl SpeciesSummary {
    /// Summary without common names; the searcher fills them in bulk.
    pub fn from_taxon(taxon: Taxon) -> Self {
        Self {
            taxon_key: taxon.taxon_key,
            scientific_name: taxon.scientific_name,
            common_names: None,
            rank: taxon.rank,
        }
    }

    /// Display label for pick lists: `"Turdus merula (Blackbird)"`.
    ///
    /// Falls back to the bare scientific name when common names are not
    /// requested or the taxon has none.
    pub fn display_label(&self, include_common: bool) -> String {
        match self.common_names.as_deref() {
            Some(common) if include_common && !common.is_empty() => {
                format!("{} ({})", self.scientific_name, common)
            }
            _ => self.scientific_name.clone(),
        }
    }
}

/// The six taxonomy levels recorded while walking up the hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxonomicLevel {
    Kingdom,
    Phylum,
    Class,
    Order,
    Family,
    Genus,
}

impl TaxonomicLevel {
    /// All levels, outermost first.
    pub const ALL: [TaxonomicLevel; 6] = [
        Self::Kingdom,
        Self::Phylum,
        Self::Class,
        Self::Order,
        Self::Family,
        Self::Genus,
    ];

    /// Map a dataset rank string to a level. Case-insensitive, exact match only:
    /// "Subgenus" or "Superfamily" are not levels.
    pub fn from_rank(rank: &str) -> Option<Self> {
        let rank = rank.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(rank))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kingdom => "kingdom",
            Self::Phylum => "phylum",
            Self::Class => "class",
            Self::Order => "order",
            Self::Family => "family",
            Self::Genus => "genus",
        }
    }
}

impl fmt::Display for TaxonomicLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kingdom..genus names collected for one taxon. Empty slots stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
    pub kingdom: Option<String>,
    pub phylum: Option<String>,
    pub class: Option<String>,
    pub order: Option<String>,
    pub family: Option<String>,
    pub genus: Option<String>,
}

impl Taxonomy {
    pub fn get(&self, level: TaxonomicLevel) -> Option<&str> {
        self.slot(level).as_deref()
    }

    /// Record `name` at `level` unless the slot is already filled.
    ///
    /// Returns `true` if the value was recorded.
    pub fn fill(&mut self, level: TaxonomicLevel, name: &str) -> bool {
        let slot = self.slot_mut(level);
        if slot.is_some() {
            return false;
        }
        *slot = Some(name.to_string());
        true
    }

    /// Number of populated levels.
    pub fn depth(&self) -> usize {
        TaxonomicLevel::ALL
            .into_iter()
            .filter(|level| self.get(*level).is_some())
            .count()
    }

    /// Populated levels joined outermost first: `"Animalia > Chordata > Aves"`.
    /// Blank values are skipped, no placeholders.
    pub fn path(&self) -> String {
        TaxonomicLevel::ALL
            .into_iter()
            .filter_map(|level| self.get(level))
            .filter(|name| !name.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" > ")
    }

    fn slot(&self, level: TaxonomicLevel) -> &Option<String> {
        match level {
            TaxonomicLevel::Kingdom => &self.kingdom,
            TaxonomicLevel::Phylum => &self.phylum,
            TaxonomicLevel::Class => &self.class,
            TaxonomicLevel::Order => &self.order,
            TaxonomicLevel::Family => &self.family,
            TaxonomicLevel::Genus => &self.genus,
        }
    }

    fn slot_mut(&mut self, level: TaxonomicLevel) -> &mut Option<String> {
        match level {
            TaxonomicLevel::Kingdom => &mut self.kingdom,
            TaxonomicLevel::Phylum => &mut self.phylum,
            TaxonomicLevel::Class => &mut self.class,
            TaxonomicLevel::Order => &mut self.order,
            TaxonomicLevel::Family => &mut self.family,
            TaxonomicLevel::Genus => &mut self.genus,
        }
    }
}

/// Full detail for one taxon: its summary, its direct parent and its taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonDetail {
    #[serde(flatten)]
    pub species: SpeciesSummary,

    /// Parent key of the starting taxon, whatever the parent's rank
    pub parent_taxon_key: Option<String>,

    #[serde(flatten)]
    pub taxonomy: Taxonomy,
}

impl TaxonDetail {
    pub fn path(&self) -> String {
        self.taxonomy.path()
    }
}

/// One user observation as seen by ranking: which taxon, on which day.
///
/// Owned by the observation store; the core only reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservationEvent {
    pub taxon_key: String,
    pub date: NaiveDate,
}

impl ObservationEvent {
    pub fn new(taxon_key: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            taxon_key: taxon_key.into(),
            date,
        }
    }
}
