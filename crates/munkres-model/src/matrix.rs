//! Square integer cost matrix.

use serde::{Deserialize, Serialize};

use crate::error::{MatrixError, Result};

/// Cost of assigning one row to one column.
pub type Cost = i64;

/// Validated n×n matrix of non-negative costs, stored row-major.
///
/// Construction checks every precondition the solver relies on, so a
/// `CostMatrix` can always be handed to the solver as-is. The mutating
/// accessors do not re-validate; they exist for the solver's in-place
/// reduction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Cost>>", into = "Vec<Vec<Cost>>")]
pub struct CostMatrix {
    data: Vec<Cost>,
    size: usize,
}

impl CostMatrix {
    /// Builds a matrix from rows, checking squareness and cost range.
    pub fn from_rows(rows: Vec<Vec<Cost>>) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(MatrixError::Empty);
        }
        let mut data = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(MatrixError::NotSquare {
                    row,
                    expected: size,
                    actual: values.len(),
                });
            }
            data.extend(values);
        }
        Self::validated(data, size)
    }

    /// Builds a matrix from row-major data of length `size * size`.
    pub fn from_vec(data: Vec<Cost>, size: usize) -> Result<Self> {
        if size == 0 {
            return Err(MatrixError::Empty);
        }
        if data.len() != size * size {
            return Err(MatrixError::DataLength {
                expected: size * size,
                actual: data.len(),
            });
        }
        Self::validated(data, size)
    }

    /// Creates a matrix with every entry set to `value`.
    pub fn filled(size: usize, value: Cost) -> Result<Self> {
        Self::from_vec(vec![value; size * size], size)
    }

    fn validated(data: Vec<Cost>, size: usize) -> Result<Self> {
        let mut max = 0;
        for (index, &value) in data.iter().enumerate() {
            if value < 0 {
                return Err(MatrixError::NegativeCost {
                    row: index / size,
                    col: index % size,
                    value,
                });
            }
            max = max.max(value);
        }
        // Reduced entries never exceed max * (n + 1) while the solver runs.
        let headroom = Cost::try_from(size + 1)
            .ok()
            .and_then(|factor| max.checked_mul(factor));
        if headroom.is_none() {
            return Err(MatrixError::CostOverflow { max, size });
        }
        Ok(Self { data, size })
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cost at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not below [`size`](Self::size).
    pub fn get(&self, row: usize, col: usize) -> Cost {
        self.data[self.index(row, col)]
    }

    /// Cost at (row, col), or `None` outside the matrix.
    pub fn try_get(&self, row: usize, col: usize) -> Option<Cost> {
        (row < self.size && col < self.size).then(|| self.data[row * self.size + col])
    }

    /// Mutable cost at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not below [`size`](Self::size).
    pub fn get_mut(&mut self, row: usize, col: usize) -> &mut Cost {
        let index = self.index(row, col);
        &mut self.data[index]
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.size && col < self.size,
            "cell ({row}, {col}) is outside the {n}x{n} cost matrix",
            n = self.size
        );
        row * self.size + col
    }

    /// One row of costs.
    pub fn row(&self, row: usize) -> &[Cost] {
        let start = row * self.size;
        &self.data[start..start + self.size]
    }

    /// One row of costs, mutably.
    pub fn row_mut(&mut self, row: usize) -> &mut [Cost] {
        let start = row * self.size;
        &mut self.data[start..start + self.size]
    }

    /// Iterates over rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[Cost]> + '_ {
        self.data.chunks(self.size)
    }

    /// Row-major backing data.
    pub fn as_slice(&self) -> &[Cost] {
        &self.data
    }

    /// Smallest entry of a column.
    pub fn column_min(&self, col: usize) -> Cost {
        self.rows().map(|row| row[col]).min().unwrap_or_default()
    }

    /// Sum of the entries at the given (row, col) pairs.
    ///
    /// Call this on the original costs: the solver's working copy is
    /// reduced in place and no longer prices an assignment correctly.
    pub fn total_cost(&self, pairs: &[(usize, usize)]) -> Cost {
        pairs.iter().map(|&(row, col)| self.get(row, col)).sum()
    }

    /// Copies the matrix back out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<Cost>> {
        self.rows().map(<[Cost]>::to_vec).collect()
    }
}

impl TryFrom<Vec<Vec<Cost>>> for CostMatrix {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<Cost>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<CostMatrix> for Vec<Vec<Cost>> {
    fn from(matrix: CostMatrix) -> Self {
        matrix.to_rows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_rejects_ragged_input() {
        let err = CostMatrix::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert_eq!(
            err,
            MatrixError::NotSquare {
                row: 1,
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn from_rows_rejects_wide_input() {
        let err = CostMatrix::from_rows(vec![vec![1, 2, 3]]).unwrap_err();
        assert!(matches!(err, MatrixError::NotSquare { row: 0, .. }));
    }

    #[test]
    fn empty_is_rejected() {
        assert_eq!(CostMatrix::from_rows(vec![]), Err(MatrixError::Empty));
        assert_eq!(CostMatrix::from_vec(vec![], 0), Err(MatrixError::Empty));
    }

    #[test]
    fn negative_cost_reports_position() {
        let err = CostMatrix::from_rows(vec![vec![0, 1], vec![-2, 3]]).unwrap_err();
        assert_eq!(
            err,
            MatrixError::NegativeCost {
                row: 1,
                col: 0,
                value: -2
            }
        );
    }

    #[test]
    fn huge_costs_are_rejected() {
        let err = CostMatrix::from_rows(vec![vec![i64::MAX / 2, 0], vec![0, 0]]).unwrap_err();
        assert!(matches!(err, MatrixError::CostOverflow { size: 2, .. }));
    }

    #[test]
    fn accessors_are_row_major() {
        let matrix = CostMatrix::from_vec(vec![1, 2, 3, 4], 2).unwrap();
        assert_eq!(matrix.size(), 2);
        assert_eq!(matrix.get(0, 1), 2);
        assert_eq!(matrix.get(1, 0), 3);
        assert_eq!(matrix.row(1), &[3, 4]);
        assert_eq!(matrix.column_min(1), 2);
        assert_eq!(matrix.to_rows(), vec![vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn try_get_is_checked_per_axis() {
        let matrix = CostMatrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(matrix.try_get(1, 1), Some(4));
        assert_eq!(matrix.try_get(0, 2), None);
        assert_eq!(matrix.try_get(2, 0), None);
    }

    #[test]
    #[should_panic(expected = "cell (0, 2) is outside the 2x2 cost matrix")]
    fn get_rejects_column_past_the_edge() {
        let matrix = CostMatrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        matrix.get(0, 2);
    }

    #[test]
    #[should_panic(expected = "outside the 2x2 cost matrix")]
    fn total_cost_rejects_pairs_outside_the_matrix() {
        let matrix = CostMatrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        matrix.total_cost(&[(0, 2)]);
    }

    #[test]
    fn total_cost_sums_pairs() {
        let matrix = CostMatrix::from_rows(vec![vec![4, 2], vec![3, 9]]).unwrap();
        assert_eq!(matrix.total_cost(&[(0, 1), (1, 0)]), 5);
        assert_eq!(matrix.total_cost(&[]), 0);
    }
}
