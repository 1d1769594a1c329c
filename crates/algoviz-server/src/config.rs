//! Server configuration read from environment variables.
//!
//! | variable                    | default      |
//! |-----------------------------|--------------|
//! | `ALGOVIZ_DB_PATH`           | `algoviz.db` |
//! | `ALGOVIZ_PORT`              | `5000`       |
//! | `ALGOVIZ_MAX_QUEENS`        | `10`         |
//! | `ALGOVIZ_MAX_ARRAY_LEN`     | `64`         |
//! | `ALGOVIZ_MAX_TRACE_STEPS`   | `200000`     |
//! | `ALGOVIZ_TRACE_DEADLINE_MS` | `2000`       |
//!
//! A variable that is set but does not parse is a startup error.

use std::str::FromStr;
use std::time::Duration;

use algoviz_core::TraceBudget;

/// Configuration errors raised at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {var}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Resource ceilings applied to every trace request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceLimits {
    /// Largest accepted N-Queens board size.
    pub max_queens: usize,
    /// Longest accepted search/sort input.
    pub max_array_len: usize,
    /// Step and deadline budget for each executor run.
    pub budget: TraceBudget,
}

impl Default for TraceLimits {
    fn default() -> Self {
        TraceLimits {
            max_queens: 10,
            max_array_len: 64,
            budget: TraceBudget {
                max_steps: Some(200_000),
                deadline: Some(Duration::from_millis(2_000)),
            },
        }
    }
}

/// Top-level server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// SQLite database file holding algorithm metadata.
    pub db_path: String,
    pub port: u16,
    pub limits: TraceLimits,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            db_path: "algoviz.db".to_string(),
            port: 5000,
            limits: TraceLimits::default(),
        }
    }
}

impl ServerConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads the configuration through `lookup`, falling back to defaults for
    /// unset variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ServerConfig::default();
        let budget = defaults.limits.budget;

        let max_steps = parse_or(&lookup, "ALGOVIZ_MAX_TRACE_STEPS", budget.max_steps.unwrap_or(0))?;
        let deadline_ms = parse_or(
            &lookup,
            "ALGOVIZ_TRACE_DEADLINE_MS",
            budget.deadline.map(|d| d.as_millis() as u64).unwrap_or(0),
        )?;

        Ok(ServerConfig {
            db_path: lookup("ALGOVIZ_DB_PATH").unwrap_or(defaults.db_path),
            port: parse_or(&lookup, "ALGOVIZ_PORT", defaults.port)?,
            limits: TraceLimits {
                max_queens: parse_or(&lookup, "ALGOVIZ_MAX_QUEENS", defaults.limits.max_queens)?,
                max_array_len: parse_or(
                    &lookup,
                    "ALGOVIZ_MAX_ARRAY_LEN",
                    defaults.limits.max_array_len,
                )?,
                // 0 disables the corresponding limit.
                budget: TraceBudget {
                    max_steps: (max_steps > 0).then_some(max_steps),
                    deadline: (deadline_ms > 0).then(|| Duration::from_millis(deadline_ms)),
                },
            },
        })
    }

    /// Socket address the server binds to.
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn parse_or<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            value: raw.clone(),
            reason: e.to_string(),
        }),
    }
}
