// src/domain/error.rs
use thiserror::Error;

use crate::constants::TIMESTAMP_HINT;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid note type '{0}'. Use 'text' or 'reminder'.")]
    InvalidKind(String),
    #[error("Invalid reminder time '{input}', expected {hint}", hint = TIMESTAMP_HINT)]
    ParseError {
        input: String,
        #[source]
        source: Option<chrono::ParseError>,
    },
    #[error("Note with ID {0} not found.")]
    NotFound(u64),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
