//! Word predicates for name matching

/// A multi-word name query.
///
/// Every word must appear, case-insensitively, in the scientific name or in
/// at least one common name of a taxon (AND across words, OR across the two
/// name spaces for each word).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameQuery {
    words: Vec<String>,
}

impl NameQuery {
    /// Split a search term on whitespace.
    pub fn parse(term: &str) -> Self {
        Self {
            words: term.split_whitespace().map(str::to_string).collect(),
        }
    }

    /// Words as typed by the user, original case preserved.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Evaluate the predicate against one taxon's names.
    ///
    /// An empty query matches nothing.
    pub fn matches<'a, I>(&self, scientific_name: &str, common_names: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        if self.words.is_empty() {
            return false;
        }

        let scientific_lower = scientific_name.to_lowercase();
        let common_lower: Vec<String> = common_names.into_iter().map(str::to_lowercase).collect();

        self.words.iter().all(|word| {
            let word = word.to_lowercase();
            scientific_lower.contains(&word) || common_lower.iter().any(|c| c.contains(&word))
        })
    }
}
