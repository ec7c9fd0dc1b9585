// src/utils/error.rs
use chrono::NaiveDate;
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error), // Automatically convert reqwest errors

    #[error("HTTP error: {0}")]
    Http(reqwest::StatusCode), // e.g., 403 Forbidden, 500 Internal Server Error

    #[error("Archive not found at {0}")]
    ArchiveNotFound(String), // 404 on the archive URL
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("no draw published on {0}")]
    DrawNotFound(NaiveDate), // a window boundary that matches no record

    #[error("archive contains no parseable draws")]
    EmptyArchive,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Archive fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Statistics failed: {0}")]
    Stats(#[from] StatsError),
}
