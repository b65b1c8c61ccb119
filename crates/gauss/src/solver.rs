//! Gaussian elimination with partial (row) pivoting on an augmented matrix.
//!
//! The pipeline is split over two types: a [`Solver`] holds a freshly assigned system and is
//! consumed by [`Solver::eliminate`], producing an [`Eliminated`] system from which the
//! determinant, the solution and the residual are read.
use log::{debug, trace, warn};
use nalgebra::{DMatrix, DVector, RealField};

use crate::{AugmentedMatrix, Error};

/// A system that has been assigned but not yet eliminated.
#[derive(Clone, Debug)]
pub struct Solver<T: RealField + Copy> {
    /// Working copy, reduced in place.
    working: DMatrix<T>,
    /// Snapshot of the system as assigned, only used for the residual.
    original: AugmentedMatrix<T>,
}

impl<T> Solver<T>
where
    T: RealField + Copy,
{
    pub fn new(matrix: AugmentedMatrix<T>) -> Self {
        Solver {
            working: matrix.as_matrix().clone(),
            original: matrix,
        }
    }

    /// Number of unknowns.
    pub fn size(&self) -> usize {
        self.original.size()
    }

    pub fn matrix(&self) -> &DMatrix<T> {
        &self.working
    }

    pub fn original(&self) -> &AugmentedMatrix<T> {
        &self.original
    }

    /// Reduces the coefficients to upper triangular form.
    ///
    /// For each elimination step `k = 0, ..., n-2`:
    ///
    /// 1. The row holding the largest magnitude in column `k` among rows `k..n` is swapped into
    ///     row `k`. Ties keep the earliest row.
    ///
    /// 2. Every row `i > k` has `a(i,k)/a(k,k)` times the pivot row subtracted from it, across
    ///     all `n+1` columns including the right-hand side.
    ///
    /// If no non-zero pivot exists for column `k`, the column is left as is. The resulting zero
    /// on the diagonal is reported later by [`Eliminated::back_substitute`].
    pub fn eliminate(mut self) -> Eliminated<T> {
        let n = self.size();
        let mut pivots = Vec::with_capacity(n - 1);
        let mut swaps = 0;

        // k-th elimination step number
        for k in 0..(n - 1) {
            let l = find_pivot(&self.working, k);
            pivots.push(l);
            trace!("eliminate: step {}, pivot row {}", k, l);

            if l != k {
                debug!("eliminate: swapping rows {} and {}", k, l);
                self.working.swap_rows(k, l);
                swaps += 1;
            }

            if !reduce_below(&mut self.working, k) {
                warn!("eliminate: column {} has no non-zero pivot, skipping", k);
            }
        }

        Eliminated {
            working: self.working,
            original: self.original,
            pivots,
            swaps,
        }
    }
}

/// Returns the row in `k..n` with the largest `|a(i,k)|`.
///
/// The running maximum starts at zero and only a strictly larger candidate replaces it, so an
/// all-zero column yields `k`.
fn find_pivot<T: RealField + Copy>(mat_a: &DMatrix<T>, k: usize) -> usize {
    let mut pivot = T::zero();
    let mut l = k;
    for i in k..mat_a.nrows() {
        let candidate = mat_a[(i, k)].abs();
        if candidate > pivot {
            pivot = candidate;
            l = i;
        }
    }
    l
}

/// row_i = row_i - [a(i,k)/a(k,k)] row_k, i=k+1, ..., n-1
///
/// Returns `false` without touching the matrix when the pivot `a(k,k)` is exactly zero.
fn reduce_below<T: RealField + Copy>(mat_a: &mut DMatrix<T>, k: usize) -> bool {
    let pivot = mat_a[(k, k)];
    if pivot == T::zero() {
        return false;
    }

    for i in (k + 1)..mat_a.nrows() {
        let mult = mat_a[(i, k)] / pivot;
        if mult != T::zero() {
            for j in 0..mat_a.ncols() {
                let a_kj = mat_a[(k, j)];
                mat_a[(i, j)] -= a_kj * mult;
            }
        }
    }
    true
}

/// Result of a successful back-substitution.
///
/// Only [`Eliminated::back_substitute`] creates one, so holding a `Solution` means the system had
/// a non-zero diagonal.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution<T: RealField + Copy> {
    values: DVector<T>,
}

impl<T: RealField + Copy> Solution<T> {
    pub fn as_vector(&self) -> &DVector<T> {
        &self.values
    }

    pub fn into_vector(self) -> DVector<T> {
        self.values
    }
}

impl<T: RealField + Copy> std::ops::Index<usize> for Solution<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.values[index]
    }
}

/// A system in row-echelon form, together with the untouched input.
#[derive(Clone, Debug)]
pub struct Eliminated<T: RealField + Copy> {
    working: DMatrix<T>,
    original: AugmentedMatrix<T>,
    /// `pivots[k]` is the row swapped into row `k` at step `k`.
    pivots: Vec<usize>,
    swaps: usize,
}

impl<T> Eliminated<T>
where
    T: RealField + Copy,
{
    pub fn size(&self) -> usize {
        self.original.size()
    }

    /// The eliminated augmented matrix.
    pub fn matrix(&self) -> &DMatrix<T> {
        &self.working
    }

    pub fn original(&self) -> &AugmentedMatrix<T> {
        &self.original
    }

    pub fn pivots(&self) -> &[usize] {
        &self.pivots
    }

    /// Number of row swaps performed during elimination.
    pub fn swaps(&self) -> usize {
        self.swaps
    }

    pub fn into_matrix(self) -> DMatrix<T> {
        self.working
    }

    /// Product of the diagonal of the eliminated matrix, exactly zero when any diagonal entry is.
    ///
    /// Row swaps are not accounted for, see [`Eliminated::signed_determinant`].
    pub fn determinant(&self) -> T {
        let n = self.size();
        if (0..n).any(|i| self.working[(i, i)] == T::zero()) {
            return T::zero();
        }
        (0..n).fold(T::one(), |acc, i| acc * self.working[(i, i)])
    }

    /// Determinant of the original coefficients, i.e. [`Eliminated::determinant`] negated once
    /// per row swap.
    pub fn signed_determinant(&self) -> T {
        let det = self.determinant();
        if self.swaps % 2 == 1 {
            -det
        } else {
            det
        }
    }

    /// Solves the triangular system from the last row upward.
    ///
    /// Fails with [`Error::Singular`] on the first (bottom-most) diagonal entry that is exactly
    /// zero; no partial solution is returned.
    pub fn back_substitute(&self) -> Result<Solution<T>, Error> {
        let n = self.size();
        let mut x = DVector::zeros(n);

        for row in (0..n).rev() {
            let diag = self.working[(row, row)];
            if diag == T::zero() {
                debug!("back_substitute: zero diagonal at row {}", row);
                return Err(Error::Singular { row });
            }

            let mut acc = self.working[(row, n)];
            for col in ((row + 1)..n).rev() {
                acc -= self.working[(row, col)] * x[col];
            }
            x[row] = acc / diag;
            trace!("back_substitute: x[{}] = {}", row, x[row]);
        }

        Ok(Solution { values: x })
    }

    /// `b - A x` using the system as it was assigned, before any elimination.
    pub fn residual(&self, solution: &Solution<T>) -> DVector<T> {
        let n = self.size();
        let orig = self.original.as_matrix();
        let x = solution.as_vector();

        DVector::from_fn(n, |row, _| {
            let approx = (0..n).fold(T::zero(), |acc, col| acc + orig[(row, col)] * x[col]);
            orig[(row, n)] - approx
        })
    }
}
