//! Gaussian elimination with partial pivoting for small dense systems `Ax = b`.
//!
//! The system is supplied as an n×(n+1) [`AugmentedMatrix`], the right-hand side occupying the
//! last column. A [`Solver`] is consumed by elimination, after which the determinant, the
//! solution and the residual against the untouched input can be read back. [`solve()`] runs the
//! whole pipeline at once.
//!
//! ```
//! use gauss::{AugmentedMatrix, Outcome};
//!
//! let system = AugmentedMatrix::from_rows(&[vec![4.0, 8.0]]).unwrap();
//! let report = gauss::solve(system);
//! assert_eq!(report.determinant, 4.0);
//! match report.outcome {
//!     Outcome::Unique { solution, .. } => assert_eq!(solution[0], 2.0),
//!     Outcome::Singular { .. } => unreachable!(),
//! }
//! ```

mod matrix;
pub mod parse;
mod solve;
mod solver;

pub use matrix::AugmentedMatrix;
pub use solve::{solve, Outcome, Report};
pub use solver::{Eliminated, Solution, Solver};

use std::{num::ParseFloatError, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A diagonal entry of the eliminated matrix is exactly zero.
    #[error("A zero pivot was encountered during back-substitution (row {row}), there is no unique solution")]
    Singular { row: usize },

    #[error("The matrix has no rows")]
    Empty,

    #[error("Row {row} has {found} values, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The coefficient part is not square.
    #[error("Expected an augmented matrix with {} columns for {rows} rows, found {cols}", .rows + 1)]
    NotAugmented { rows: usize, cols: usize },

    #[error("Invalid number '{token}' at row {row}, column {col}")]
    InvalidNumber {
        row: usize,
        col: usize,
        token: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("Value at row {row}, column {col} is not finite")]
    NonFinite { row: usize, col: usize },

    #[error("Unable to read matrix from '{}'", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
