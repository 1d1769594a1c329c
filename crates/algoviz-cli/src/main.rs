//! algoviz command-line tools.
//!
//! Runs the instrumented executors offline and prints their traces as JSON,
//! in the same shape the HTTP server returns. The `catalog` subcommand seeds
//! a metadata database and prints its records.

use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;

use algoviz_core::{Scalar, TraceBudget};
use algoviz_exec::ExecError;
use algoviz_storage::{seed_builtin, MetadataStore, SqliteStore};

/// Default step ceiling, matching the server's `ALGOVIZ_MAX_TRACE_STEPS`.
const DEFAULT_MAX_STEPS: usize = 200_000;

/// Default board-size ceiling, matching the server's `ALGOVIZ_MAX_QUEENS`.
const DEFAULT_MAX_QUEENS: usize = 10;

/// Algorithm visualization trace tools.
#[derive(Parser)]
#[command(name = "algoviz", about = "Algorithm visualization trace tools")]
struct Cli {
    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pretty: bool,

    /// Abort any trace longer than this many steps (0 disables the limit).
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_STEPS)]
    max_steps: usize,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Trace a linear search.
    LinearSearch {
        /// Comma-separated numbers to search.
        #[arg(
            short,
            long,
            value_delimiter = ',',
            value_parser = parse_scalar,
            allow_hyphen_values = true
        )]
        array: Vec<Scalar>,

        /// Value to look for.
        #[arg(short, long, value_parser = parse_scalar, allow_hyphen_values = true)]
        target: Scalar,
    },

    /// Trace a bubble sort.
    BubbleSort {
        /// Comma-separated numbers to sort.
        #[arg(
            short,
            long,
            value_delimiter = ',',
            value_parser = parse_scalar,
            allow_hyphen_values = true
        )]
        array: Vec<Scalar>,
    },

    /// Trace the N-Queens backtracking search.
    NQueens {
        /// Board size.
        #[arg(short, long)]
        n: usize,

        /// Largest board size accepted.
        #[arg(long, default_value_t = DEFAULT_MAX_QUEENS)]
        max_n: usize,
    },

    /// Seed a metadata database and print its algorithm records.
    Catalog {
        /// Path to the metadata database file.
        #[arg(short, long, default_value = "algoviz.db")]
        db: String,

        /// Print only the record with this key.
        #[arg(short, long)]
        key: Option<String>,
    },
}

/// Wire shape shared with the HTTP responses.
#[derive(Serialize)]
struct TraceOutput<'a, T: Serialize> {
    steps: &'a T,
    #[serde(rename = "solutionFound", skip_serializing_if = "Option::is_none")]
    solution_found: Option<bool>,
}

fn main() {
    let cli = Cli::parse();
    let budget = step_budget(cli.max_steps);

    let exit_code = match cli.command {
        Commands::LinearSearch { array, target } => run_trace(
            algoviz_exec::linear_search(&array, &target, budget).map(|t| (t, None)),
            cli.pretty,
        ),
        Commands::BubbleSort { array } => run_trace(
            algoviz_exec::bubble_sort(&array, budget).map(|t| (t, None)),
            cli.pretty,
        ),
        Commands::NQueens { n, max_n } => {
            if n > max_n {
                eprintln!("Error: board size {} exceeds the maximum of {}", n, max_n);
                process::exit(1);
            }
            run_trace(
                algoviz_exec::n_queens(n, budget).map(|o| (o.trace, Some(o.solution_found))),
                cli.pretty,
            )
        }
        Commands::Catalog { db, key } => run_catalog(&db, key.as_deref(), cli.pretty),
    };
    process::exit(exit_code);
}

fn step_budget(max_steps: usize) -> TraceBudget {
    TraceBudget {
        max_steps: (max_steps > 0).then_some(max_steps),
        deadline: None,
    }
}

/// Prints a finished trace, or reports the executor error.
///
/// Returns exit code: 0 = success, 1 = invalid input or trace limit.
fn run_trace<T: Serialize>(result: Result<(T, Option<bool>), ExecError>, pretty: bool) -> i32 {
    match result {
        Ok((trace, solution_found)) => print_json(
            &TraceOutput {
                steps: &trace,
                solution_found,
            },
            pretty,
        ),
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

/// Execute the catalog subcommand.
///
/// Returns exit code: 0 = success, 1 = unknown key, 3 = storage error.
fn run_catalog(db_path: &str, key: Option<&str>, pretty: bool) -> i32 {
    let mut store = match SqliteStore::new(db_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: failed to open database '{}': {}", db_path, e);
            return 3;
        }
    };
    if let Err(e) = seed_builtin(&mut store) {
        eprintln!("Error: failed to seed database '{}': {}", db_path, e);
        return 3;
    }

    match key {
        Some(key) => match store.get_algorithm(key) {
            Ok(record) => print_json(&record, pretty),
            Err(algoviz_storage::StorageError::AlgorithmNotFound(_)) => {
                eprintln!("Error: no algorithm with key '{}'", key);
                1
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                3
            }
        },
        None => match store.list_algorithms() {
            Ok(records) => print_json(&records, pretty),
            Err(e) => {
                eprintln!("Error: {}", e);
                3
            }
        },
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> i32 {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    match rendered {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            eprintln!("Error: failed to serialize output: {}", e);
            1
        }
    }
}

/// Parses one number in JSON form, keeping integers and floats distinct.
fn parse_scalar(s: &str) -> Result<Scalar, String> {
    serde_json::from_str(s.trim()).map_err(|_| format!("'{}' is not a number", s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_comma_separated_arrays() {
        let cli = Cli::try_parse_from(["algoviz", "bubble-sort", "--array", "3,1.5,-2"]).unwrap();
        match cli.command {
            Commands::BubbleSort { array } => {
                assert_eq!(array, vec![Scalar::Int(3), Scalar::Float(1.5), Scalar::Int(-2)]);
            }
            _ => panic!("expected bubble-sort"),
        }
    }

    #[test]
    fn rejects_non_numeric_elements() {
        assert!(Cli::try_parse_from(["algoviz", "bubble-sort", "--array", "3,x"]).is_err());
    }

    #[test]
    fn traces_are_bounded_by_default() {
        let cli = Cli::try_parse_from(["algoviz", "n-queens", "--n", "4"]).unwrap();
        assert_eq!(step_budget(cli.max_steps).max_steps, Some(DEFAULT_MAX_STEPS));
        match cli.command {
            Commands::NQueens { n, max_n } => {
                assert_eq!(n, 4);
                assert_eq!(max_n, DEFAULT_MAX_QUEENS);
            }
            _ => panic!("expected n-queens"),
        }
    }

    #[test]
    fn limits_can_be_overridden() {
        let cli = Cli::try_parse_from([
            "algoviz",
            "--max-steps",
            "0",
            "n-queens",
            "--n",
            "12",
            "--max-n",
            "12",
        ])
        .unwrap();
        assert_eq!(step_budget(cli.max_steps).max_steps, None);
        assert!(matches!(cli.command, Commands::NQueens { n: 12, max_n: 12 }));
    }

    #[test]
    fn queens_output_includes_solution_flag() {
        let outcome = algoviz_exec::n_queens(4, TraceBudget::unlimited()).unwrap();
        let json = serde_json::to_value(TraceOutput {
            steps: &outcome.trace,
            solution_found: Some(outcome.solution_found),
        })
        .unwrap();
        assert_eq!(json["solutionFound"], serde_json::json!(true));

        let trace = algoviz_exec::bubble_sort(&[2, 1], TraceBudget::unlimited()).unwrap();
        let json = serde_json::to_value(TraceOutput {
            steps: &trace,
            solution_found: None,
        })
        .unwrap();
        assert!(json.get("solutionFound").is_none());
    }
}
