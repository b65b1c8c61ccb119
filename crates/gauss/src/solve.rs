use log::debug;
use nalgebra::{DMatrix, DVector, RealField};

use crate::{AugmentedMatrix, Error, Solver};

#[derive(Clone, Debug, PartialEq)]
pub enum Outcome<T: RealField + Copy> {
    Unique {
        solution: DVector<T>,
        /// `b - A x` against the system as given.
        residual: DVector<T>,
    },
    /// A zero was found on the diagonal of the eliminated matrix at `row`.
    Singular { row: usize },
}

/// Everything a single solve produces.
#[derive(Clone, Debug, PartialEq)]
pub struct Report<T: RealField + Copy> {
    /// The augmented matrix after elimination.
    pub eliminated: DMatrix<T>,
    /// Product of the diagonal of `eliminated`.
    pub determinant: T,
    /// Number of row swaps performed while pivoting.
    pub swaps: usize,
    pub outcome: Outcome<T>,
}

impl<T: RealField + Copy> Report<T> {
    pub fn is_singular(&self) -> bool {
        matches!(self.outcome, Outcome::Singular { .. })
    }

    pub fn solution(&self) -> Option<&DVector<T>> {
        match &self.outcome {
            Outcome::Unique { solution, .. } => Some(solution),
            Outcome::Singular { .. } => None,
        }
    }

    pub fn residual(&self) -> Option<&DVector<T>> {
        match &self.outcome {
            Outcome::Unique { residual, .. } => Some(residual),
            Outcome::Singular { .. } => None,
        }
    }
}

/// Runs elimination, determinant, back-substitution and residual on a fresh [`Solver`].
///
/// A singular system is reported through [`Outcome::Singular`] rather than as an error.
pub fn solve<T: RealField + Copy>(matrix: AugmentedMatrix<T>) -> Report<T> {
    let eliminated = Solver::new(matrix).eliminate();
    let determinant = eliminated.determinant();
    let swaps = eliminated.swaps();

    let outcome = match eliminated.back_substitute() {
        Ok(solution) => {
            let residual = eliminated.residual(&solution);
            Outcome::Unique {
                solution: solution.into_vector(),
                residual,
            }
        }
        Err(Error::Singular { row }) => Outcome::Singular { row },
        Err(e) => unreachable!("back-substitution only fails on a zero pivot: {}", e),
    };
    debug!(
        "solve: n={}, det={}, singular={}",
        eliminated.size(),
        determinant,
        matches!(outcome, Outcome::Singular { .. })
    );

    Report {
        eliminated: eliminated.into_matrix(),
        determinant,
        swaps,
        outcome,
    }
}
