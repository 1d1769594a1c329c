//! N-Queens by recursive backtracking, first solution only.
//!
//! Queens are placed one per row. For each row the columns are tried in
//! ascending order; a candidate is checked against every earlier row and
//! rejected at the first conflict. There is no explicit "unsafe" step: a `try`
//! followed by `check`s and no `place` means the column was rejected.
//!
//! The board and the recorder are threaded through the recursion as `&mut`
//! parameters. Per row the states are
//! `Unplaced -> Trying(col) -> Placed -> (Success | Removed -> Unplaced)`,
//! with an unsafe column moving straight on to `Trying(col + 1)`.

use algoviz_core::{QueensAction, Trace, TraceBudget, TraceError, TraceRecorder, Variables};
use serde::Serialize;

use crate::error::ExecError;

/// Column value of a row with no queen.
pub const UNPLACED: i64 = -1;

/// Column assignment per row. Serializes as `{"board": [..]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    pub board: Vec<i64>,
}

impl Board {
    /// An `n`-row board with every row unplaced.
    pub fn empty(n: usize) -> Self {
        Board {
            board: vec![UNPLACED; n],
        }
    }

    pub fn size(&self) -> usize {
        self.board.len()
    }

    /// True when every row holds a queen and no two queens attack each other.
    pub fn is_solution(&self) -> bool {
        let rows = &self.board;
        if rows.iter().any(|&c| c < 0 || c as usize >= rows.len()) {
            return false;
        }
        for a in 0..rows.len() {
            for b in a + 1..rows.len() {
                if attacks(a, rows[a], b, rows[b]) {
                    return false;
                }
            }
        }
        true
    }
}

/// Trace of an N-Queens run; every snapshot is the board.
pub type QueensTrace = Trace<QueensAction, Board>;

/// Result of [`n_queens`].
#[derive(Debug, Clone, PartialEq)]
pub struct QueensOutcome {
    pub trace: QueensTrace,
    pub solution_found: bool,
}

/// Searches for the first placement of `n` non-attacking queens.
///
/// `n == 0` is rejected. The trace grows exponentially with `n`; callers
/// bound it with `budget`.
pub fn n_queens(n: usize, budget: TraceBudget) -> Result<QueensOutcome, ExecError> {
    if n == 0 {
        return Err(ExecError::InvalidInput(
            "board size must be a positive integer".to_string(),
        ));
    }

    let mut board = Board::empty(n);
    let mut rec = TraceRecorder::with_budget(budget);

    rec.record(QueensAction::Start, Variables::from([("n", n as i64)]), &board)?;
    let solution_found = place(0, &mut board, &mut rec)?;

    Ok(QueensOutcome {
        trace: rec.finish(),
        solution_found,
    })
}

fn place(
    row: usize,
    board: &mut Board,
    rec: &mut TraceRecorder<QueensAction, Board>,
) -> Result<bool, TraceError> {
    let n = board.size();
    if row == n {
        rec.record(QueensAction::Success, Variables::new(), board)?;
        return Ok(true);
    }

    for col in 0..n {
        let vars = Variables::from([("row", row as i64), ("col", col as i64)]);
        rec.record(QueensAction::Try, vars.clone(), board)?;

        if !is_safe(row, col, board, rec)? {
            continue;
        }

        board.board[row] = col as i64;
        rec.record(QueensAction::Place, vars.clone(), board)?;

        if place(row + 1, board, rec)? {
            return Ok(true);
        }

        board.board[row] = UNPLACED;
        rec.record(QueensAction::Remove, vars, board)?;
    }

    Ok(false)
}

/// Checks `(row, col)` against each earlier row, recording a `check` step
/// before each comparison.
fn is_safe(
    row: usize,
    col: usize,
    board: &Board,
    rec: &mut TraceRecorder<QueensAction, Board>,
) -> Result<bool, TraceError> {
    for check_row in 0..row {
        let vars = Variables::from([
            ("row", row as i64),
            ("col", col as i64),
            ("check_row", check_row as i64),
        ]);
        rec.record(QueensAction::Check, vars, board)?;

        if attacks(check_row, board.board[check_row], row, col as i64) {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Same column or same diagonal.
fn attacks(row_a: usize, col_a: i64, row_b: usize, col_b: i64) -> bool {
    col_a == col_b || (col_a - col_b).abs() == (row_a as i64 - row_b as i64).abs()
}
