//! Error types for table construction.
//!
//! The only fallible operation in this crate is [`Table::add_row`]: every
//! other malformed input (an unknown column name, for instance) is defined
//! as a silent no-op, and rendering itself cannot fail.
//!
//! [`Table::add_row`]: crate::Table::add_row

use std::fmt;

/// Error type for table operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A row was supplied with a cell count different from the table's
    /// column count. The row is rejected and the table is left unchanged.
    ShapeMismatch {
        /// The table's column count.
        expected: usize,
        /// The number of cells actually supplied.
        actual: usize,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::ShapeMismatch { expected, actual } => write!(
                f,
                "row length ({}) does not match table columns ({})",
                actual, expected
            ),
        }
    }
}

impl std::error::Error for TableError {}
