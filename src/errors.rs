//! Unified application error type.
//! All modules (loader, session, config, cli) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Data access
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Data file not found: {}", .0.display())]
    DataFileNotFound(PathBuf),

    #[error("Missing column '{column}' in {}", .file.display())]
    MissingColumn { file: PathBuf, column: String },

    #[error("Invalid timestamp '{value}' at line {line}")]
    InvalidTimestamp { line: u64, value: String },

    #[error("Invalid value '{value}' for column '{column}' at line {line}")]
    InvalidNumber {
        line: u64,
        column: String,
        value: String,
    },

    // ---------------------------
    // Selection values
    // ---------------------------
    #[error("Invalid city: {0}")]
    InvalidCity(String),

    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    #[error("Invalid day: {0}")]
    InvalidDay(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
