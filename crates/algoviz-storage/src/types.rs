//! Storage-layer record types.

use serde::{Deserialize, Serialize};

/// Descriptive record for one algorithm, keyed by a URL-friendly slug
/// (e.g. `"bubble-sort"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmMetadata {
    pub key: String,
    /// Display name.
    pub name: String,
    pub short_description: String,
    pub time_complexity: String,
    pub best_case: String,
    pub average_case: String,
    pub worst_case: String,
    pub space_complexity: String,
    /// Audience level, e.g. "Beginner".
    pub difficulty: String,
    /// Algorithm family, e.g. "Sorting".
    pub category: String,
    /// Inactive records are hidden from lookups and listings.
    pub is_active: bool,
}
