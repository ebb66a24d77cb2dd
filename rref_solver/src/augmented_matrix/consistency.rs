use super::matrix::AugmentedMatrix;
use crate::{solution_kind::SolutionKind, zero_test::ZeroTest};

/// How a row is recognised as asserting `0 = b` with `b != 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsistencyCheck {
    /// The coefficients of the row sum to zero. Coefficients that cancel each
    /// other out (`x - y = 3`) are taken for an all-zero row, so this can
    /// report `None` for a consistent system.
    #[default]
    CoefficientSum,
    /// Every coefficient of the row is zero.
    EveryCoefficient,
}

impl ConsistencyCheck {
    fn coefficients_vanish(&self, coefficients: &[f64], zero_test: ZeroTest) -> bool {
        match self {
            Self::CoefficientSum => zero_test.is_zero(coefficients.iter().sum()),
            Self::EveryCoefficient => coefficients.iter().all(|c| zero_test.is_zero(*c)),
        }
    }
}

/// Resolves an undetermined reduction with the coefficient-sum check and
/// exact zero tests.
pub fn classify_consistency(matrix: &AugmentedMatrix) -> SolutionKind {
    classify_consistency_with(matrix, ConsistencyCheck::CoefficientSum, ZeroTest::Exact)
}

pub fn classify_consistency_with(
    matrix: &AugmentedMatrix,
    check: ConsistencyCheck,
    zero_test: ZeroTest,
) -> SolutionKind {
    for row in 0..matrix.number_of_rows() {
        if check.coefficients_vanish(matrix.coefficients(row), zero_test)
            && zero_test.is_nonzero(matrix.augmentation(row))
        {
            log::debug!("row {row} reads 0 = {}", matrix.augmentation(row));
            return SolutionKind::None;
        }
    }
    SolutionKind::Infinite
}
