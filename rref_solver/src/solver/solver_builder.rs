use anyhow::{ensure, Result};

use super::{solve_report::SolveReport, solver_params::SolverParams};
use crate::{
    augmented_matrix::{classify_consistency_with, reduce_with, AugmentedMatrix, ConsistencyCheck},
    solution_kind::SolutionKind,
    zero_test::ZeroTest,
};

pub struct SolverBuilder {
    tolerance: Option<f64>,
    strict_consistency: bool,
}

impl SolverBuilder {
    pub fn new() -> Self {
        Self {
            tolerance: None,
            strict_consistency: false,
        }
    }

    pub fn tolerance(mut self, tolerance: Option<f64>) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn strict_consistency(mut self, strict: bool) -> Self {
        self.strict_consistency = strict;
        self
    }

    pub fn build(self) -> Result<Solver> {
        let zero_test = match self.tolerance {
            Some(eps) => {
                ensure!(
                    eps.is_finite() && eps >= 0.0,
                    "tolerance must be a finite, non-negative number, got {eps}"
                );
                ZeroTest::Tolerance(eps)
            }
            None => ZeroTest::Exact,
        };
        let consistency_check = if self.strict_consistency {
            ConsistencyCheck::EveryCoefficient
        } else {
            ConsistencyCheck::CoefficientSum
        };
        Ok(Solver {
            params: SolverParams::new(zero_test, consistency_check),
        })
    }
}

impl Default for SolverBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs elimination and, if that cannot pivot fully, the consistency check.
pub struct Solver {
    params: SolverParams,
}

impl Solver {
    pub fn params(&self) -> SolverParams {
        self.params
    }

    pub fn solve(&self, matrix: AugmentedMatrix) -> SolveReport {
        let initial = matrix.clone();
        let mut reduced = matrix;
        let mut kind = reduce_with(&mut reduced, self.params.zero_test);
        if kind == SolutionKind::Undetermined {
            log::info!("checking consistency");
            kind = classify_consistency_with(
                &reduced,
                self.params.consistency_check,
                self.params.zero_test,
            );
        }
        debug_assert!(kind.is_resolved());
        log::info!("classified system as {kind}");
        SolveReport {
            initial,
            reduced,
            kind,
        }
    }
}
