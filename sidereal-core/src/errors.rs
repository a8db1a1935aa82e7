//! Error types for the precession-nutation core.
//!
//! [`AstroError`] covers every failure the core can report. The numerical
//! pipeline is total over finite epochs, so in practice errors come from
//! missing or malformed coefficient data and from non-finite intermediates.
//!
//! # Error Categories
//!
//! | Variant | Use Case | Recoverable? |
//! |---------|----------|--------------|
//! | [`MissingCoefficientTable`](AstroError::MissingCoefficientTable) | Empty or absent series table | No |
//! | [`DataError`](AstroError::DataError) | Table file I/O and parsing | Yes |
//! | [`MathError`](AstroError::MathError) | Non-finite input, out-of-range intermediate | No |
//!
//! # Usage
//!
//! ```
//! use sidereal_core::{AstroError, MathErrorKind};
//!
//! fn centuries(t: f64) -> Result<f64, AstroError> {
//!     if !t.is_finite() {
//!         return Err(AstroError::math_error(
//!             "centuries",
//!             MathErrorKind::NotFinite,
//!             "time argument is not finite",
//!         ));
//!     }
//!     Ok(t)
//! }
//! ```

use thiserror::Error;

/// Classification of mathematical errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MathErrorKind {
    /// Input or result is NaN or infinity.
    NotFinite,
    /// Value outside its physically meaningful range.
    OutOfRange,
}

/// Unified error type for the precession-nutation core.
#[derive(Error, Debug)]
pub enum AstroError {
    /// A required coefficient series has no rows.
    ///
    /// This is a startup precondition: the pipeline cannot produce any angle
    /// without its tables.
    #[error("Missing coefficient table: {table}")]
    MissingCoefficientTable { table: String },

    /// Data access failure (file I/O, parsing).
    ///
    /// This is the only recoverable error variant: a corrected file or another
    /// location may succeed.
    #[error("Data error ({file_type} - {operation}): {message}")]
    DataError {
        file_type: String,
        operation: String,
        message: String,
    },

    /// Numerical computation failure.
    #[error("Math error in {operation} ({kind:?}): {message}")]
    MathError {
        operation: String,
        kind: MathErrorKind,
        message: String,
    },
}

/// Convenience alias for `Result<T, AstroError>`.
pub type AstroResult<T> = Result<T, AstroError>;

impl AstroError {
    /// Creates a [`MissingCoefficientTable`](Self::MissingCoefficientTable) error.
    pub fn missing_table(table: &str) -> Self {
        Self::MissingCoefficientTable {
            table: table.to_string(),
        }
    }

    /// Creates a [`DataError`](Self::DataError) (the only recoverable variant).
    pub fn data_error(file_type: &str, operation: &str, reason: &str) -> Self {
        Self::DataError {
            file_type: file_type.to_string(),
            operation: operation.to_string(),
            message: reason.to_string(),
        }
    }

    /// Creates a [`MathError`](Self::MathError) with the given kind.
    pub fn math_error(operation: &str, kind: MathErrorKind, reason: &str) -> Self {
        Self::MathError {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }

    /// Returns `true` if retrying with other data might succeed.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::DataError { .. })
    }
}
