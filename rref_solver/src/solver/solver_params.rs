use crate::{augmented_matrix::ConsistencyCheck, zero_test::ZeroTest};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SolverParams {
    pub zero_test: ZeroTest,
    pub consistency_check: ConsistencyCheck,
}

impl SolverParams {
    pub fn new(zero_test: ZeroTest, consistency_check: ConsistencyCheck) -> Self {
        Self {
            zero_test,
            consistency_check,
        }
    }
}
