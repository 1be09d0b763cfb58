//! Error types for medir operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in medir operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Lane count mismatch between operand and output vectors.
    #[error("Lane count mismatch: a has {a_len} lanes, b has {b_len} lanes, out has {out_len} lanes")]
    LaneCountMismatch {
        /// Length of the first operand.
        a_len: usize,
        /// Length of the second operand.
        b_len: usize,
        /// Length of the output buffer.
        out_len: usize,
    },

    /// Empty vectors provided where non-empty is required.
    #[error("Empty vector provided")]
    EmptyVector,

    /// Benchmark requested with zero timed iterations.
    #[error("Benchmark requires at least one iteration")]
    ZeroIterations,

    /// Sweep range where the start exceeds the end.
    #[error("Invalid sweep range: start {start} exceeds end {end}")]
    InvalidSweepRange {
        /// First vector size in the sweep.
        start: usize,
        /// Last vector size in the sweep.
        end: usize,
    },

    /// Configuration file not found.
    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    /// Configuration parse error with line number.
    #[error("Config parse error at line {line}: {message}")]
    ConfigParse {
        /// Line number in the YAML source.
        line: usize,
        /// Parser message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::LaneCountMismatch {
            a_len: 8,
            b_len: 8,
            out_len: 4,
        };
        assert!(err.to_string().contains("Lane count mismatch"));
        assert!(err.to_string().contains('4'));
    }

    #[test]
    fn test_empty_vector_display() {
        let err = Error::EmptyVector;
        assert!(err.to_string().contains("Empty vector"));
    }

    #[test]
    fn test_sweep_range_display() {
        let err = Error::InvalidSweepRange {
            start: 4096,
            end: 8,
        };
        assert!(err.to_string().contains("4096"));
        assert!(err.to_string().contains('8'));
    }

    #[test]
    fn test_config_parse_display() {
        let err = Error::ConfigParse {
            line: 4,
            message: "invalid type".to_string(),
        };
        assert!(err.to_string().contains("line 4"));
    }
}
