//! Errors reported by [`solve`](crate::solve).
//!
//! Every variant has a short code for documentation lookup:
//!
//! - E001: [`Error::InvalidMatrixShape`]
//! - E002: [`Error::InvalidOptions`]
//!
//! The search itself cannot fail; all of these are raised while the input is
//! validated, before a single link of the toroidal structure is built.

/// The ways in which a matrix can fail to be rectangular.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum ShapeError {
    /// The matrix is an empty sequence of rows.
    #[error("the matrix has no rows")]
    NoRows,

    /// Some row does not have as many entries as the first row.
    #[error("row {row} has {found} entries, but the first row has {expected}")]
    RaggedRow {
        /// The position of the first offending row.
        row: usize,
        /// The number of entries in the first row.
        expected: usize,
        /// The number of entries in the offending row.
        found: usize,
    },
}

/// Error type for [`solve`](crate::solve).
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// The matrix is empty or ragged (E001).
    #[error("invalid matrix shape: {0}")]
    InvalidMatrixShape(#[from] ShapeError),

    /// A solution cap is negative (E002).
    #[error("invalid options: the maximum number of solutions must be nonnegative, got {max_solutions}")]
    InvalidOptions {
        /// The rejected cap.
        max_solutions: i64,
    },
}

impl Error {
    /// Returns the error code for this error variant.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidMatrixShape(_) => "E001",
            Error::InvalidOptions { .. } => "E002",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_distinct() {
        let shape = Error::from(ShapeError::NoRows);
        let options = Error::InvalidOptions { max_solutions: -1 };
        assert_eq!(shape.code(), "E001");
        assert_eq!(options.code(), "E002");
    }

    #[test]
    fn messages_name_the_offending_row() {
        let err = Error::from(ShapeError::RaggedRow {
            row: 2,
            expected: 7,
            found: 6,
        });
        assert_eq!(
            err.to_string(),
            "invalid matrix shape: row 2 has 6 entries, but the first row has 7"
        );
    }

    #[test]
    fn options_message_names_the_cap() {
        let err = Error::InvalidOptions { max_solutions: -4 };
        assert_eq!(
            err.to_string(),
            "invalid options: the maximum number of solutions must be nonnegative, got -4"
        );
    }

    #[test]
    fn shape_error_is_the_source() {
        use std::error::Error as _;
        let err = Error::from(ShapeError::NoRows);
        let source = err.source().expect("shape errors should be chained");
        assert_eq!(source.to_string(), "the matrix has no rows");
    }
}
