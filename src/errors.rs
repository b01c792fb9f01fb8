//! Unified application error type.
//! All modules (store, server, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Entry not found")]
    NotFound,

    #[error("An open entry already exists")]
    OpenEntry,

    // ---------------------------
    // Parsing
    // ---------------------------
    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    // ---------------------------
    // Remote server
    // ---------------------------
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server returned {status}: {message}")]
    Server { status: u16, message: String },

    // ---------------------------
    // Configuration
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Interactive prompts
    // ---------------------------
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type AppResult<T> = Result<T, AppError>;
