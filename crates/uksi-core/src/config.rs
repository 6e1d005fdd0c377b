//! Search tuning knobs

use serde::{Deserialize, Serialize};

/// Configuration shared by the searcher, ranker and hierarchy resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Terms shorter than this (in characters, after trimming) return nothing (default: 2)
    pub min_query_chars: usize,
    /// Candidates fetched per requested result before ranking (default: 3)
    pub oversample_factor: usize,
    /// Observations this many days old or newer count as recent (default: 30)
    pub recent_window_days: u32,
    /// Taxa examined per hierarchy walk, the starting taxon included (default: 20)
    pub max_hierarchy_depth: usize,
    /// Limit used when the caller does not pass one (default: 20)
    pub default_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_chars: 2,
            oversample_factor: 3,
            recent_window_days: 30,
            max_hierarchy_depth: 20,
            default_limit: 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: SearchConfig =
            serde_json::from_str(r#"{"oversample_factor": 5}"#).unwrap();
        assert_eq!(config.oversample_factor, 5);
        assert_eq!(config.min_query_chars, 2);
        assert_eq!(config.recent_window_days, 30);
        assert_eq!(config.max_hierarchy_depth, 20);
    }
}
