//! Built-in algorithm records and the startup seeding routine.

use crate::error::StorageError;
use crate::traits::MetadataStore;
use crate::types::AlgorithmMetadata;

#[allow(clippy::too_many_arguments)]
fn record(
    key: &str,
    name: &str,
    short_description: &str,
    time_complexity: &str,
    best_case: &str,
    average_case: &str,
    worst_case: &str,
    space_complexity: &str,
    difficulty: &str,
    category: &str,
) -> AlgorithmMetadata {
    AlgorithmMetadata {
        key: key.to_string(),
        name: name.to_string(),
        short_description: short_description.to_string(),
        time_complexity: time_complexity.to_string(),
        best_case: best_case.to_string(),
        average_case: average_case.to_string(),
        worst_case: worst_case.to_string(),
        space_complexity: space_complexity.to_string(),
        difficulty: difficulty.to_string(),
        category: category.to_string(),
        is_active: true,
    }
}

/// The algorithms the executors implement, one record each.
pub fn builtin_algorithms() -> Vec<AlgorithmMetadata> {
    vec![
        record(
            "linear-search",
            "Linear Search",
            "Linear Search checks each element in a list, one by one, from start to finish. \
             It's like reading a book page by page until you find the word you're looking for.",
            "O(n)",
            "O(1)",
            "O(n)",
            "O(n)",
            "O(1)",
            "Beginner",
            "Searching",
        ),
        record(
            "bubble-sort",
            "Bubble Sort",
            "Bubble Sort works by repeatedly stepping through the list, comparing adjacent \
             elements and swapping them if they are in the wrong order. Larger elements slowly \
             move to the end of the list.",
            "O(n²)",
            "O(n)",
            "O(n²)",
            "O(n²)",
            "O(1)",
            "Beginner",
            "Sorting",
        ),
        record(
            "n-queens",
            "N Queens",
            "The N Queens problem involves placing N queens on an N x N chessboard such that \
             no two queens attack each other.",
            "O(n!)",
            "O(n)",
            "O(n!)",
            "O(n!)",
            "O(n)",
            "Intermediate",
            "Backtracking",
        ),
    ]
}

/// Inserts every built-in record that is not already stored.
///
/// Returns how many rows were written; a second call returns 0.
pub fn seed_builtin<S: MetadataStore>(store: &mut S) -> Result<usize, StorageError> {
    let mut written = 0;
    for record in builtin_algorithms() {
        if store.insert_algorithm(&record)? {
            written += 1;
        }
    }
    Ok(written)
}
