//! Validation error taxonomy for raw grid input
//!
//! All failures are local, deterministic, and non-retryable: the caller gets
//! the error verbatim and decides how to present it. The scanner itself never
//! fails; every error path in the crate lives here.

use thiserror::Error;

/// Why a raw grid was rejected before scanning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Zero rows supplied; nothing to analyze.
    #[error("DNA sequence cannot be empty")]
    EmptyInput,

    /// Some row's length differs from the row count.
    #[error("DNA matrix must be square (NxN): row {row} has length {actual}, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// One or more cells hold a symbol outside the configured alphabet.
    /// The offending symbols are enumerated, sorted and deduplicated.
    #[error("DNA sequence contains invalid characters: {}", format_symbols(.symbols))]
    InvalidAlphabet { symbols: Vec<char> },
}

fn format_symbols(symbols: &[char]) -> String {
    symbols
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
