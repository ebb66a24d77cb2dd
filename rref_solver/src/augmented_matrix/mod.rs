pub mod consistency;
pub mod error;
pub mod gauss_jordan;
pub mod matrix;

pub use consistency::{classify_consistency, classify_consistency_with, ConsistencyCheck};
pub use error::MatrixError;
pub use gauss_jordan::{reduce, reduce_with, GaussJordan};
pub use matrix::AugmentedMatrix;
