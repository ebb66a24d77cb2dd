use crate::{augmented_matrix::AugmentedMatrix, solution_kind::SolutionKind};

/// Everything a caller needs to present a finished solve. `kind` is never
/// `SolutionKind::Undetermined`.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveReport {
    pub initial: AugmentedMatrix,
    pub reduced: AugmentedMatrix,
    pub kind: SolutionKind,
}

impl SolveReport {
    /// Value of each unknown, in order, when the solution is unique.
    pub fn unique_values(&self) -> Option<Vec<f64>> {
        match self.kind {
            SolutionKind::Unique => Some(self.reduced.augmentation_column()),
            _ => None,
        }
    }
}
