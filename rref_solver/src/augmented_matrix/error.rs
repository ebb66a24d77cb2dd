use thiserror::Error;

/// Shape and value violations rejected when an augmented matrix is built.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatrixError {
    #[error("augmented matrix must have at least one row")]
    Empty,

    #[error("augmented matrix needs at least one coefficient column plus the constant column, got {columns} column(s)")]
    NoCoefficients { columns: usize },

    #[error("row {row} has {got} entries, expected {expected}")]
    RaggedRow {
        row: usize,
        got: usize,
        expected: usize,
    },

    #[error("entry ({row}, {column}) is not a finite number: {value}")]
    NonFiniteEntry { row: usize, column: usize, value: f64 },
}
