//! Error types shared between the engine and its callers.
//!
//! `RentalError` covers malformed input and environment failures only. A driver
//! who is not allowed to rent is a normal outcome and never surfaces here.
use std::io;

use thiserror::Error;

/// Unified error type shared by the engine and the client.
#[derive(Error, Debug)]
pub enum RentalError {
    /// I/O error while reading request or configuration files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// A date field could not be parsed as `YYYY-MM-DD` or RFC 3339.
    #[error("Invalid date in `{field}`: {value:?}")]
    InvalidDate {
        /// Form field name.
        field: &'static str,
        /// Raw submitted value.
        value: String,
    },

    /// The driver age is not a non-negative whole number.
    #[error("Invalid age: {0:?}")]
    InvalidAge(String),

    /// A required form field was absent or blank.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// The pricing rule table is inconsistent.
    #[error("Invalid pricing configuration: {0}")]
    Config(String),
}
