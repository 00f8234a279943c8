//! Ledger configuration: status output switch and log file path.
//! Loaded from the environment variables LEDGER_STATUS_OUTPUT and LOG_FILE.

use std::env;

use crate::error::{LedgerError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    /// When false the store is built with a silent observer.
    pub status_output: bool,
    pub log_file: Option<String>,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            status_output: true,
            log_file: None,
        }
    }
}

impl LedgerConfig {
    /// Loads from the environment: LEDGER_STATUS_OUTPUT (default true) and LOG_FILE, both optional.
    pub fn from_env() -> Result<Self> {
        let status_output = env::var("LEDGER_STATUS_OUTPUT").ok();
        let log_file = env::var("LOG_FILE").ok();
        Self::from_values(status_output.as_deref(), log_file)
    }

    pub fn from_values(status_output: Option<&str>, log_file: Option<String>) -> Result<Self> {
        let status_output = match status_output {
            Some(raw) => parse_flag(raw)?,
            None => true,
        };
        Ok(Self {
            status_output,
            log_file: log_file.filter(|path| !path.trim().is_empty()),
        })
    }
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        other => Err(LedgerError::Config(format!(
            "LEDGER_STATUS_OUTPUT must be a boolean, got '{other}'"
        ))),
    }
}
