//! Per-algorithm action taxonomies.
//!
//! Each algorithm has a closed set of actions. An action fixes the pseudocode
//! line the client highlights and the template of the step message, so the
//! recorder can derive both without help from the executor.
//!
//! | algorithm     | actions (line)                                                    |
//! |---------------|-------------------------------------------------------------------|
//! | linear search | start (1), compare (3), found (4), not_found (5)                  |
//! | bubble sort   | start (1), compare (5), swap (6), sorted (7)                      |
//! | n-queens      | start (1), try (2), check (4), place (5), remove (6), success (1) |

use serde::Serialize;

use crate::step::Variables;

/// An event kind an executor can record.
pub trait Action: Copy + Serialize {
    /// Pseudocode line tag for this action.
    fn line(self) -> u32;

    /// Renders the step message from the step's variables.
    fn describe(self, variables: &Variables) -> String;
}

fn var(variables: &Variables, name: &str) -> i64 {
    variables.get(name).copied().unwrap_or_default()
}

/// Linear search events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchAction {
    Start,
    Compare,
    Found,
    NotFound,
}

impl Action for SearchAction {
    fn line(self) -> u32 {
        match self {
            SearchAction::Start => 1,
            SearchAction::Compare => 3,
            SearchAction::Found => 4,
            SearchAction::NotFound => 5,
        }
    }

    fn describe(self, variables: &Variables) -> String {
        match self {
            SearchAction::Start => "Starting Linear Search".to_string(),
            SearchAction::Compare => format!(
                "Comparing element at index {} with target",
                var(variables, "i")
            ),
            SearchAction::Found => format!("Target found at index {}", var(variables, "i")),
            SearchAction::NotFound => "Target not found in the array".to_string(),
        }
    }
}

/// Bubble sort events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortAction {
    Start,
    Compare,
    Swap,
    Sorted,
}

impl Action for SortAction {
    fn line(self) -> u32 {
        match self {
            SortAction::Start => 1,
            SortAction::Compare => 5,
            SortAction::Swap => 6,
            SortAction::Sorted => 7,
        }
    }

    fn describe(self, variables: &Variables) -> String {
        let j = var(variables, "j");
        match self {
            SortAction::Start => {
                format!("Starting Bubble Sort on {} elements", var(variables, "n"))
            }
            SortAction::Compare => {
                format!("Comparing elements at index {} and {}", j, j + 1)
            }
            SortAction::Swap => format!("Swapped elements at index {} and {}", j, j + 1),
            SortAction::Sorted => "Array is sorted".to_string(),
        }
    }
}

/// N-Queens backtracking events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueensAction {
    Start,
    Try,
    Check,
    Place,
    Remove,
    Success,
}

impl Action for QueensAction {
    fn line(self) -> u32 {
        match self {
            QueensAction::Start | QueensAction::Success => 1,
            QueensAction::Try => 2,
            QueensAction::Check => 4,
            QueensAction::Place => 5,
            QueensAction::Remove => 6,
        }
    }

    fn describe(self, variables: &Variables) -> String {
        let row = var(variables, "row");
        let col = var(variables, "col");
        match self {
            QueensAction::Start => {
                let n = var(variables, "n");
                format!("Starting N-Queens on a {}x{} board", n, n)
            }
            QueensAction::Try => {
                format!("Trying to place queen at row {}, column {}", row, col)
            }
            QueensAction::Check => format!(
                "Checking conflict with queen in row {}",
                var(variables, "check_row")
            ),
            QueensAction::Place => format!("Placed queen at row {}, column {}", row, col),
            QueensAction::Remove => format!(
                "Backtracking: removed queen from row {}, column {}",
                row, col
            ),
            QueensAction::Success => "All queens placed successfully".to_string(),
        }
    }
}
