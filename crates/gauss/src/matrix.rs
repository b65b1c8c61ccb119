use nalgebra::{DMatrix, DMatrixView, DVectorView, Scalar};

use crate::Error;

/// An n×(n+1) system: n×n coefficients followed by the right-hand side column.
///
/// The shape is checked on construction, so every solver operation may assume `ncols == nrows + 1`.
#[derive(Clone, Debug, PartialEq)]
pub struct AugmentedMatrix<T: Scalar>(DMatrix<T>);

impl<T: Scalar> AugmentedMatrix<T> {
    pub fn new(matrix: DMatrix<T>) -> Result<Self, Error> {
        let (rows, cols) = matrix.shape();
        if rows == 0 {
            return Err(Error::Empty);
        }
        if cols != rows + 1 {
            return Err(Error::NotAugmented { rows, cols });
        }
        Ok(Self(matrix))
    }

    /// Builds the matrix from row-major data, rejecting ragged rows before checking the shape.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, Error> {
        let first = rows.first().ok_or(Error::Empty)?.as_ref().len();
        for (row, values) in rows.iter().enumerate() {
            let found = values.as_ref().len();
            if found != first {
                return Err(Error::RaggedRow {
                    row,
                    expected: first,
                    found,
                });
            }
        }

        let matrix = DMatrix::from_fn(rows.len(), first, |i, j| rows[i].as_ref()[j].clone());
        Self::new(matrix)
    }

    /// Number of unknowns.
    pub fn size(&self) -> usize {
        self.0.nrows()
    }

    pub fn coefficients(&self) -> DMatrixView<'_, T> {
        self.0.columns(0, self.size())
    }

    pub fn rhs(&self) -> DVectorView<'_, T> {
        self.0.column(self.size())
    }

    pub fn as_matrix(&self) -> &DMatrix<T> {
        &self.0
    }

    pub fn into_inner(self) -> DMatrix<T> {
        self.0
    }
}

impl<T: Scalar> TryFrom<DMatrix<T>> for AugmentedMatrix<T> {
    type Error = Error;

    fn try_from(matrix: DMatrix<T>) -> Result<Self, Self::Error> {
        Self::new(matrix)
    }
}

impl<T: Scalar> From<AugmentedMatrix<T>> for DMatrix<T> {
    fn from(matrix: AugmentedMatrix<T>) -> Self {
        matrix.0
    }
}

impl<T: Scalar> AsRef<DMatrix<T>> for AugmentedMatrix<T> {
    fn as_ref(&self) -> &DMatrix<T> {
        &self.0
    }
}
