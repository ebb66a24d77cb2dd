use std::cmp;

use super::matrix::AugmentedMatrix;
use crate::{solution_kind::SolutionKind, zero_test::ZeroTest};

/// Drives an augmented matrix to reduced row-echelon form in place.
///
/// Pivots sit on the diagonal. When a diagonal entry is zero, the first row
/// below it with a nonzero entry in that column is swapped in; when there is
/// none, reduction stops right there and the partially reduced matrix is left
/// for the consistency check.
pub struct GaussJordan<'a> {
    matrix: &'a mut AugmentedMatrix,
    zero_test: ZeroTest,
    active_column: usize,
}

impl<'a> GaussJordan<'a> {
    pub fn new(matrix: &'a mut AugmentedMatrix, zero_test: ZeroTest) -> Self {
        Self {
            matrix,
            zero_test,
            active_column: 0,
        }
    }

    pub fn go_to_reduced_echelon_form(&mut self) -> SolutionKind {
        while self.is_not_fully_pivoted() {
            if !self.swap_in_pivot_for_active_column() {
                log::debug!(
                    "no pivot for column {}, stopping reduction",
                    self.active_column
                );
                return SolutionKind::Undetermined;
            }
            self.eliminate_active_column();
            self.go_to_next_column();
        }
        self.normalize_pivot_rows();
        if self.matrix.is_square_system() {
            SolutionKind::Unique
        } else {
            log::debug!(
                "{} equation(s) for {} unknown(s), solution is not unique",
                self.matrix.number_of_rows(),
                self.matrix.number_of_unknowns()
            );
            SolutionKind::Undetermined
        }
    }

    // with more equations than unknowns the diagonal runs out before the rows
    // do; stopping there keeps the active column inside the coefficient block.
    fn number_of_pivots(&self) -> usize {
        cmp::min(self.matrix.number_of_rows(), self.matrix.number_of_unknowns())
    }

    fn is_not_fully_pivoted(&self) -> bool {
        self.active_column < self.number_of_pivots()
    }

    fn swap_in_pivot_for_active_column(&mut self) -> bool {
        let pivot = self.active_column;
        if self.zero_test.is_nonzero(self.matrix.get(pivot, pivot)) {
            return true;
        }
        let swap_with = (pivot + 1..self.matrix.number_of_rows())
            .find(|&row| self.zero_test.is_nonzero(self.matrix.get(row, pivot)));
        match swap_with {
            Some(row) => {
                log::debug!("swapping rows {pivot} and {row} for a nonzero pivot");
                self.matrix.swap_rows(pivot, row);
                true
            }
            None => false,
        }
    }

    fn eliminate_active_column(&mut self) {
        let pivot = self.active_column;
        let pivot_value = self.matrix.get(pivot, pivot);
        for row in 0..self.matrix.number_of_rows() {
            if row == pivot {
                continue;
            }
            let multiplier = -self.matrix.get(row, pivot) / pivot_value;
            log::trace!("R{row} += {multiplier} * R{pivot}");
            self.matrix.add_multiple_of_row(row, pivot, multiplier);
        }
    }

    fn normalize_pivot_rows(&mut self) {
        for row in 0..self.number_of_pivots() {
            let pivot_value = self.matrix.get(row, row);
            debug_assert!(pivot_value != 0.0, "zero pivot at row {row} after elimination");
            log::trace!("R{row} *= 1 / {pivot_value}");
            self.matrix.scale_row(row, 1.0 / pivot_value);
        }
    }

    fn go_to_next_column(&mut self) {
        self.active_column += 1;
    }
}

/// Reduces `matrix` with exact zero tests.
pub fn reduce(matrix: &mut AugmentedMatrix) -> SolutionKind {
    reduce_with(matrix, ZeroTest::Exact)
}

pub fn reduce_with(matrix: &mut AugmentedMatrix, zero_test: ZeroTest) -> SolutionKind {
    GaussJordan::new(matrix, zero_test).go_to_reduced_echelon_form()
}
