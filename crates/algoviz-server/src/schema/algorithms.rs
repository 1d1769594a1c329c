//! Algorithm metadata response types.

use algoviz_storage::AlgorithmMetadata;
use serde::Serialize;

/// Public view of an algorithm record.
///
/// Field names match the stored columns; the activity flag is internal and
/// omitted.
#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmView {
    pub key: String,
    pub name: String,
    pub short_description: String,
    pub time_complexity: String,
    pub best_case: String,
    pub average_case: String,
    pub worst_case: String,
    pub space_complexity: String,
    pub difficulty: String,
    pub category: String,
}

impl From<AlgorithmMetadata> for AlgorithmView {
    fn from(record: AlgorithmMetadata) -> Self {
        AlgorithmView {
            key: record.key,
            name: record.name,
            short_description: record.short_description,
            time_complexity: record.time_complexity,
            best_case: record.best_case,
            average_case: record.average_case,
            worst_case: record.worst_case,
            space_complexity: record.space_complexity,
            difficulty: record.difficulty,
            category: record.category,
        }
    }
}

/// Response for listing all active algorithms.
#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmListResponse {
    pub algorithms: Vec<AlgorithmView>,
}
