use super::error::MatrixError;

/// Row-major augmented matrix `[A | b]`. The last column holds the constants.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedMatrix {
    number_of_columns: usize,
    rows: Vec<Vec<f64>>,
}

impl AugmentedMatrix {
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let number_of_columns = rows.first().map(Vec::len).ok_or(MatrixError::Empty)?;
        if number_of_columns < 2 {
            return Err(MatrixError::NoCoefficients {
                columns: number_of_columns,
            });
        }
        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != number_of_columns {
                return Err(MatrixError::RaggedRow {
                    row: row_idx,
                    got: row.len(),
                    expected: number_of_columns,
                });
            }
            if let Some((col_idx, value)) = row.iter().enumerate().find(|(_, v)| !v.is_finite()) {
                return Err(MatrixError::NonFiniteEntry {
                    row: row_idx,
                    column: col_idx,
                    value: *value,
                });
            }
        }
        Ok(Self {
            number_of_columns,
            rows,
        })
    }

    pub fn number_of_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn number_of_columns(&self) -> usize {
        self.number_of_columns
    }

    pub fn number_of_unknowns(&self) -> usize {
        self.number_of_columns - 1
    }

    pub fn augmentation_index(&self) -> usize {
        self.number_of_columns - 1
    }

    /// One equation per unknown.
    pub fn is_square_system(&self) -> bool {
        self.number_of_rows() == self.number_of_unknowns()
    }

    pub fn get(&self, r: usize, c: usize) -> f64 {
        self.rows[r][c]
    }

    pub fn row(&self, r: usize) -> &[f64] {
        &self.rows[r]
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn coefficients(&self, r: usize) -> &[f64] {
        &self.rows[r][..self.augmentation_index()]
    }

    pub fn augmentation(&self, r: usize) -> f64 {
        self.rows[r][self.augmentation_index()]
    }

    pub fn augmentation_column(&self) -> Vec<f64> {
        (0..self.number_of_rows()).map(|r| self.augmentation(r)).collect()
    }

    pub fn swap_rows(&mut self, row_a: usize, row_b: usize) {
        self.rows.swap(row_a, row_b);
    }

    pub fn scale_row(&mut self, target_row: usize, multiplier: f64) {
        for entry in self.rows[target_row].iter_mut() {
            *entry *= multiplier;
        }
    }

    /// `target += multiplier * addend`, entry by entry.
    pub fn add_multiple_of_row(&mut self, target_row: usize, addend_row: usize, multiplier: f64) {
        debug_assert_ne!(target_row, addend_row);
        let (target, addend) = if target_row < addend_row {
            let (head, tail) = self.rows.split_at_mut(addend_row);
            (&mut head[target_row], &tail[0])
        } else {
            let (head, tail) = self.rows.split_at_mut(target_row);
            (&mut tail[0], &head[addend_row])
        };
        for (t, a) in target.iter_mut().zip(addend.iter()) {
            *t += multiplier * a;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn two_by_three() -> AugmentedMatrix {
        AugmentedMatrix::from_rows(vec![vec![2.0, 1.0, 5.0], vec![1.0, -1.0, 1.0]]).unwrap()
    }

    #[test]
    fn reports_its_shape() {
        let m = two_by_three();
        assert_eq!(m.number_of_rows(), 2);
        assert_eq!(m.number_of_columns(), 3);
        assert_eq!(m.number_of_unknowns(), 2);
        assert_eq!(m.augmentation_index(), 2);
        assert!(m.is_square_system());
        assert_eq!(m.coefficients(1), &[1.0, -1.0]);
        assert_eq!(m.augmentation_column(), vec![5.0, 1.0]);
    }

    #[test]
    fn rejects_bad_shapes() {
        assert_eq!(AugmentedMatrix::from_rows(vec![]), Err(MatrixError::Empty));
        assert_eq!(
            AugmentedMatrix::from_rows(vec![vec![1.0]]),
            Err(MatrixError::NoCoefficients { columns: 1 })
        );
        assert_eq!(
            AugmentedMatrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![1.0, 2.0]]),
            Err(MatrixError::RaggedRow {
                row: 1,
                got: 2,
                expected: 3
            })
        );
        assert!(matches!(
            AugmentedMatrix::from_rows(vec![vec![1.0, f64::NAN]]),
            Err(MatrixError::NonFiniteEntry { row: 0, column: 1, .. })
        ));
    }

    #[test]
    fn row_operations_touch_only_their_target() {
        let mut m = two_by_three();
        m.swap_rows(0, 1);
        assert_eq!(m.row(0), &[1.0, -1.0, 1.0]);
        assert_eq!(m.row(1), &[2.0, 1.0, 5.0]);

        m.scale_row(0, 3.0);
        assert_eq!(m.row(0), &[3.0, -3.0, 3.0]);
        assert_eq!(m.row(1), &[2.0, 1.0, 5.0]);

        m.add_multiple_of_row(1, 0, -2.0);
        assert_eq!(m.row(1), &[-4.0, 7.0, -1.0]);
        m.add_multiple_of_row(0, 1, 1.0);
        assert_eq!(m.row(0), &[-1.0, 4.0, 2.0]);
    }
}
