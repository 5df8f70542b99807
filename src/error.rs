/*!
# Unified Error Type

This module provides the error enum used throughout the crate, in the same
shape used across the rest of this codebase's error handling: a flat enum of
named variants, each carrying a `String` message, with `Display` and
`std::error::Error` implementations plus small `pub fn` constructors.
*/

use std::error::Error;
use std::fmt;

/// Unified error type for all `daytour` operations.
#[derive(Debug)]
pub enum TourError {
    /// A line of the instance could not be parsed (wrong field count, bad
    /// integer, price out of range).
    Parse(String),

    /// The greedy constructor exhausted its search stack without reaching
    /// day D. Not a crash: callers are expected to report this and move on.
    Infeasible(String),

    /// An I/O error occurred while reading the instance or writing the tour.
    Io(String),
}

impl TourError {
    /// Creates a parse error with the given message.
    pub fn parse(message: impl Into<String>) -> Self {
        TourError::Parse(message.into())
    }

    /// Creates an infeasible-instance error with the given message.
    pub fn infeasible(message: impl Into<String>) -> Self {
        TourError::Infeasible(message.into())
    }
}

impl fmt::Display for TourError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TourError::Parse(msg) => write!(f, "parse error: {}", msg),
            TourError::Infeasible(msg) => write!(f, "infeasible instance: {}", msg),
            TourError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl Error for TourError {}

impl From<std::io::Error> for TourError {
    fn from(e: std::io::Error) -> Self {
        TourError::Io(e.to_string())
    }
}

/// Convenience alias matching the rest of the crate's `Result` usage.
pub type Result<T> = std::result::Result<T, TourError>;
