//! Deduplication tie-break and result ordering
//!
//! Several taxon version keys often share one scientific name. Exactly one
//! representative survives per name, picked by [`representative_order`];
//! survivors are then sorted by [`relevance_order`].

use std::cmp::Ordering;

use ahash::AHashMap;

use crate::taxon::Taxon;

/// Preference tier of a candidate when collapsing duplicate names.
/// Lower wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NameTier {
    /// Plain species (or any rank not listed below)
    Preferred = 1,
    /// Subspecies, varieties and forms
    Infraspecific = 2,
    /// Scientific names carrying the " x " hybrid marker
    Hybrid = 3,
}

impl NameTier {
    pub fn of(taxon: &Taxon) -> Self {
        let rank = taxon.rank.to_lowercase();
        if taxon.scientific_name.to_lowercase().contains(" x ") {
            Self::Hybrid
        } else if ["subspecies", "variety", "form"]
            .iter()
            .any(|marker| rank.contains(marker))
        {
            Self::Infraspecific
        } else {
            Self::Preferred
        }
    }
}

fn name_len(name: &str) -> usize {
    name.chars().count()
}

/// Order among taxa sharing a scientific name: tier, then shorter name,
/// then smallest key.
pub fn representative_order(a: &Taxon, b: &Taxon) -> Ordering {
    NameTier::of(a)
        .cmp(&NameTier::of(b))
        .then_with(|| name_len(&a.scientific_name).cmp(&name_len(&b.scientific_name)))
        .then_with(|| a.taxon_key.cmp(&b.taxon_key))
}

/// Order of deduplicated results: names starting with the term first, then
/// shorter names, then lexical.
///
/// `term_lower` must already be lowercased.
pub fn relevance_order(term_lower: &str, a: &Taxon, b: &Taxon) -> Ordering {
    let prefix_rank =
        |taxon: &Taxon| !taxon.scientific_name.to_lowercase().starts_with(term_lower);

    prefix_rank(a)
        .cmp(&prefix_rank(b))
        .then_with(|| name_len(&a.scientific_name).cmp(&name_len(&b.scientific_name)))
        .then_with(|| a.scientific_name.cmp(&b.scientific_name))
}

/// Keep one taxon per scientific name.
///
/// Output order follows the first appearance of each name in the input.
pub fn dedup_by_scientific_name(taxa: Vec<Taxon>) -> Vec<Taxon> {
    let mut slots: AHashMap<String, usize> = AHashMap::new();
    let mut kept: Vec<Taxon> = Vec::new();

    for taxon in taxa {
        match slots.get(&taxon.scientific_name) {
            Some(&slot) => {
                if representative_order(&taxon, &kept[slot]) == Ordering::Less {
                    kept[slot] = taxon;
                }
            }
            None => {
                slots.insert(taxon.scientific_name.clone(), kept.len());
                kept.push(taxon);
            }
        }
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn taxon(key: &str, name: &str, rank: &str) -> Taxon {
        Taxon::new(key, name, rank)
    }

    #[test]
    fn test_tiers() {
        assert_eq!(NameTier::of(&taxon("A", "Rosa canina", "Species")), NameTier::Preferred);
        assert_eq!(
            NameTier::of(&taxon("A", "Rosa canina", "Subspecies")),
            NameTier::Infraspecific
        );
        assert_eq!(
            NameTier::of(&taxon("A", "Viola riviniana", "Variety")),
            NameTier::Infraspecific
        );
        assert_eq!(NameTier::of(&taxon("A", "Quercus robur", "form")), NameTier::Infraspecific);
        assert_eq!(
            NameTier::of(&taxon("A", "Quercus robur x petraea", "Species")),
            NameTier::Hybrid
        );
        // Hybrid marker outranks an infraspecific rank
        assert_eq!(
            NameTier::of(&taxon("A", "Salix alba x fragilis", "Subspecies")),
            NameTier::Hybrid
        );
    }

    #[test]
    fn test_species_beats_subspecies() {
        let species = taxon("B", "Rosa canina", "Species");
        let subspecies = taxon("A", "Rosa canina", "Subspecies");
        assert_eq!(representative_order(&species, &subspecies), Ordering::Less);
    }

    #[test]
    fn test_same_tier_falls_back_to_smallest_key() {
        let a = taxon("NHMSYS001", "Rosa canina", "Species");
        let b = taxon("NBNSYS002", "Rosa canina", "Species");
        assert_eq!(representative_order(&a, &b), Ordering::Greater);
    }

    #[test]
    fn test_dedup_keeps_one_per_name() {
        let kept = dedup_by_scientific_name(vec![
            taxon("K2", "Rosa canina", "Subspecies"),
            taxon("K9", "Rosa arvensis", "Species"),
            taxon("K5", "Rosa canina", "Species"),
            taxon("K1", "Rosa canina", "Species"),
        ]);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].taxon_key, "K1");
        assert_eq!(kept[1].taxon_key, "K9");
    }

    #[test]
    fn test_relevance_prefix_then_length_then_name() {
        let mut taxa = vec![
            taxon("1", "Quercus petraea", "Species"),
            taxon("2", "Abies quercifolia", "Species"),
            taxon("3", "Quercus robur", "Species"),
            taxon("4", "Quercus", "Genus"),
            taxon("5", "Quercus cerris", "Species"),
        ];
        taxa.sort_by(|a, b| relevance_order("quercus", a, b));
        let names: Vec<&str> = taxa.iter().map(|t| t.scientific_name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Quercus",
                "Quercus robur",
                "Quercus cerris",
                "Quercus petraea",
                "Abies quercifolia",
            ]
        );
    }
}
