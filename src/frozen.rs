//! Immutable vectors and matrices used as machine tables.
//!
//! A frozen table copies its source once, at construction, and exposes only read
//! accessors afterwards. Cloning a frozen table shares the same storage, so one table
//! can back any number of definitions.

use std::sync::Arc;

use crate::types::{ConstructionError, MachineError};

/// A read-only, shareable one-dimensional table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrozenVector<T> {
    data: Arc<[T]>,
}

impl<T: Copy> FrozenVector<T> {
    /// Copies `source` into a new frozen vector.
    pub fn new(source: &[T]) -> Self {
        Self {
            data: Arc::from(source),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the element at `index`, or `MachineError::OutOfRange`.
    pub fn get(&self, index: usize) -> Result<T, MachineError> {
        self.data
            .get(index)
            .copied()
            .ok_or(MachineError::OutOfRange {
                index,
                len: self.data.len(),
            })
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.data.iter().copied()
    }

    /// Unchecked-by-contract access for indices the owning definition already validated.
    pub(crate) fn at(&self, index: usize) -> T {
        self.data[index]
    }
}

impl<T: Copy> From<&[T]> for FrozenVector<T> {
    fn from(source: &[T]) -> Self {
        Self::new(source)
    }
}

impl<T: Copy> From<Vec<T>> for FrozenVector<T> {
    fn from(source: Vec<T>) -> Self {
        Self {
            data: Arc::from(source),
        }
    }
}

impl<T: Copy, const N: usize> From<[T; N]> for FrozenVector<T> {
    fn from(source: [T; N]) -> Self {
        Self::new(&source)
    }
}

/// A read-only, shareable two-dimensional table stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrozenMatrix<T> {
    rows: usize,
    cols: usize,
    data: Arc<[T]>,
}

impl<T: Copy> FrozenMatrix<T> {
    /// Copies a slice of rows into a new frozen matrix.
    ///
    /// All rows must have the same length. An empty slice yields a `0x0` matrix.
    pub fn from_rows<R: AsRef<[T]>>(source: &[R]) -> Result<Self, ConstructionError> {
        let cols = source.first().map_or(0, |row| row.as_ref().len());
        let mut data = Vec::with_capacity(source.len() * cols);

        for (row, values) in source.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != cols {
                return Err(ConstructionError::RaggedMatrix {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            data.extend_from_slice(values);
        }

        Ok(Self {
            rows: source.len(),
            cols,
            data: Arc::from(data),
        })
    }

    /// Builds a matrix from row-major data.
    pub fn from_flat(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, ConstructionError> {
        if data.len() != rows * cols {
            return Err(ConstructionError::TableShape {
                expected_rows: rows,
                expected_cols: cols,
                found_rows: if cols == 0 { 0 } else { data.len() / cols },
                found_cols: cols,
            });
        }

        Ok(Self {
            rows,
            cols,
            data: Arc::from(data),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the element at (`row`, `col`), or `MachineError::OutOfRange` naming the
    /// first index that exceeds its dimension.
    pub fn get(&self, row: usize, col: usize) -> Result<T, MachineError> {
        if row >= self.rows {
            return Err(MachineError::OutOfRange {
                index: row,
                len: self.rows,
            });
        }
        if col >= self.cols {
            return Err(MachineError::OutOfRange {
                index: col,
                len: self.cols,
            });
        }
        Ok(self.at(row, col))
    }

    /// Returns one row, or `None` past the last row.
    pub fn row(&self, row: usize) -> Option<&[T]> {
        (row < self.rows).then(|| &self.data[row * self.cols..(row + 1) * self.cols])
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub(crate) fn at(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }
}

impl<T: Copy, const R: usize, const C: usize> From<[[T; C]; R]> for FrozenMatrix<T> {
    fn from(source: [[T; C]; R]) -> Self {
        let data: Vec<T> = source.iter().flatten().copied().collect();
        Self {
            rows: R,
            cols: C,
            data: Arc::from(data),
        }
    }
}

impl<T: Copy> TryFrom<Vec<Vec<T>>> for FrozenMatrix<T> {
    type Error = ConstructionError;

    fn try_from(source: Vec<Vec<T>>) -> Result<Self, Self::Error> {
        Self::from_rows(&source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_is_copied_at_construction() {
        let mut source = vec![true, false];
        let frozen = FrozenVector::new(&source);
        source[0] = false;

        assert_eq!(frozen.get(0), Ok(true));
        assert_eq!(frozen.len(), 2);
    }

    #[test]
    fn test_vector_out_of_range() {
        let frozen = FrozenVector::from([1, 2, 3]);
        assert_eq!(
            frozen.get(3),
            Err(MachineError::OutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_clone_shares_storage() {
        let frozen = FrozenVector::from(vec![1u8; 16]);
        let shared = frozen.clone();
        assert!(Arc::ptr_eq(&frozen.data, &shared.data));
    }

    #[test]
    fn test_matrix_from_rows() {
        let mut rows = vec![vec![0usize, 1], vec![1, 0], vec![2, 2]];
        let matrix = FrozenMatrix::from_rows(&rows).unwrap();
        rows[2][1] = 7;

        assert_eq!(matrix.rows(), 3);
        assert_eq!(matrix.cols(), 2);
        assert_eq!(matrix.get(2, 1), Ok(2));
        assert_eq!(matrix.row(1), Some(&[1usize, 0][..]));
        assert_eq!(matrix.row(3), None);
    }

    #[test]
    fn test_matrix_rejects_ragged_rows() {
        let rows = vec![vec![0, 1], vec![1]];
        assert_eq!(
            FrozenMatrix::try_from(rows),
            Err(ConstructionError::RaggedMatrix {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_matrix_out_of_range() {
        let matrix = FrozenMatrix::from([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(matrix.get(1, 2), Ok(6));
        assert_eq!(
            matrix.get(2, 0),
            Err(MachineError::OutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            matrix.get(0, 3),
            Err(MachineError::OutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_matrix_with_empty_rows() {
        let matrix: FrozenMatrix<usize> = FrozenMatrix::from([[]]);
        assert_eq!(matrix.rows(), 1);
        assert_eq!(matrix.cols(), 0);

        let empty: FrozenMatrix<usize> = FrozenMatrix::from_rows::<Vec<usize>>(&[]).unwrap();
        assert_eq!(empty.rows(), 0);
    }

    #[test]
    fn test_matrix_from_flat() {
        let matrix = FrozenMatrix::from_flat(2, 3, vec![0, 1, 2, 3, 4, 5]).unwrap();
        assert_eq!(matrix.get(1, 0), Ok(3));
        assert!(FrozenMatrix::from_flat(2, 3, vec![0, 1]).is_err());
    }
}
