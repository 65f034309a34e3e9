//! Unified application error type.
//! Ledger, core, config and cli all return AppError so the top-level
//! handler in main.rs is the only place that decides messages and exit codes.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Storage
    // ---------------------------
    #[error("Storage error: {0}")]
    Storage(#[from] io::Error),

    #[error("Corrupted log at line {line}: cannot parse '{value}'")]
    Corruption { line: u64, value: String },

    // ---------------------------
    // Resume outcomes
    // ---------------------------
    #[error("No entry saved for now. Run:\n$ mate start \"Ticket title\"")]
    NoHistory,

    #[error("Can not find a previous ticket to restart. Run:\n$ mate start \"Ticket title\"")]
    NoPreviousTicket,

    #[error("You are currently working on: {0}")]
    AlreadyWorking(String),

    // ---------------------------
    // Config
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),
}

impl AppError {
    /// True for the expected outcomes of a resume request. These are shown
    /// to the user as plain messages rather than reported as failures.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            AppError::NoHistory | AppError::NoPreviousTicket | AppError::AlreadyWorking(_)
        )
    }
}

/// I/O failures from the csv layer are storage errors; anything else
/// (bad UTF-8, unbalanced quotes) means the file itself is malformed.
impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        let value = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(e) => AppError::Storage(e),
            _ => AppError::Corruption { line, value },
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
