//! Properties of the elimination pipeline on random well-conditioned systems.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use gauss::{AugmentedMatrix, Outcome, Solver};
use nalgebra::{DMatrix, DVector};
use rand::{distributions::Uniform, rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

/// Random system with a strictly dominant diagonal (hence nonsingular) and a known solution.
fn random_system(rng: &mut StdRng, n: usize) -> (DMatrix<f64>, DVector<f64>) {
    let dist = Uniform::new(-1.0, 1.0);
    let mut mat_a = DMatrix::from_fn(n, n, |_, _| rng.sample(dist));
    for i in 0..n {
        mat_a[(i, i)] += n as f64 + 1.0;
    }
    let x = DVector::from_fn(n, |_, _| rng.sample(dist) * 10.0);
    (mat_a, x)
}

fn augment(mat_a: &DMatrix<f64>, b: &DVector<f64>) -> AugmentedMatrix<f64> {
    let n = mat_a.nrows();
    let mut mat = mat_a.clone().insert_column(n, 0.0);
    mat.set_column(n, b);
    AugmentedMatrix::new(mat).unwrap()
}

#[test]
fn residual_vanishes_for_nonsingular_systems() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for n in 1..=20 {
        let (mat_a, x) = random_system(&mut rng, n);
        let b = &mat_a * &x;

        let report = gauss::solve(augment(&mat_a, &b));
        match report.outcome {
            Outcome::Unique { solution, residual } => {
                assert_relative_eq!(solution, x, epsilon = 1e-9, max_relative = 1e-9);
                assert!(residual.amax() < 1e-9, "n={} residual={}", n, residual);
            }
            Outcome::Singular { row } => panic!("n={} reported singular at row {}", n, row),
        }
    }
}

#[test]
fn row_permutation_preserves_solution() {
    let mut rng = StdRng::seed_from_u64(42);
    for n in 2..=8 {
        let (mat_a, x) = random_system(&mut rng, n);
        let b = &mat_a * &x;
        let system = augment(&mat_a, &b);

        let mut order: Vec<usize> = (0..n).collect();
        order.shuffle(&mut rng);
        let permuted = AugmentedMatrix::new(system.as_matrix().select_rows(order.iter())).unwrap();

        let a = gauss::solve(system);
        let p = gauss::solve(permuted);
        assert_relative_eq!(
            a.solution().unwrap(),
            p.solution().unwrap(),
            epsilon = 1e-9,
            max_relative = 1e-9
        );
    }
}

#[test]
fn elimination_leaves_original_untouched() {
    let mut rng = StdRng::seed_from_u64(7);
    let (mat_a, x) = random_system(&mut rng, 6);
    let system = augment(&mat_a, &(&mat_a * &x));
    let before = system.as_matrix().clone();

    let eliminated = Solver::new(system).eliminate();
    assert_eq!(eliminated.original().as_matrix(), &before);

    // coefficients below the diagonal are eliminated
    for j in 0..6 {
        for i in (j + 1)..6 {
            assert_abs_diff_eq!(eliminated.matrix()[(i, j)], 0.0, epsilon = 1e-12);
        }
    }
}

#[test]
fn pivoting_avoids_zero_pivots() {
    // every leading entry but the last is zero, a naive elimination would divide by zero
    let mut mat_a = DMatrix::<f64>::zeros(4, 4);
    for i in 0..4 {
        mat_a[(i, 3 - i)] = (i + 1) as f64;
    }
    let x = DVector::from_vec(vec![1.0, -2.0, 3.0, -4.0]);
    let eliminated = Solver::new(augment(&mat_a, &(&mat_a * &x))).eliminate();

    for k in 0..4 {
        assert_ne!(eliminated.matrix()[(k, k)], 0.0);
    }
    // anti-diagonal permutation of size 4 is even
    assert_relative_eq!(eliminated.signed_determinant(), mat_a.determinant());

    let solution = eliminated.back_substitute().unwrap();
    assert_relative_eq!(solution.as_vector(), &x);
}

#[test]
fn signed_determinant_matches_nalgebra() {
    let mut rng = StdRng::seed_from_u64(1234);
    for n in 1..=10 {
        let (mat_a, x) = random_system(&mut rng, n);
        let eliminated = Solver::new(augment(&mat_a, &x)).eliminate();
        assert_relative_eq!(
            eliminated.signed_determinant(),
            mat_a.determinant(),
            max_relative = 1e-9
        );
        assert_relative_eq!(
            eliminated.determinant().abs(),
            mat_a.determinant().abs(),
            max_relative = 1e-9
        );
    }
}

#[test]
fn dependent_rows_are_singular() {
    let dist = Uniform::new(0, 10);
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..50 {
        // second row is the first scaled by 2, which elimination cancels exactly
        let first: Vec<f64> = (0..3).map(|_| rng.sample(dist) as f64).collect();
        let second: Vec<f64> = first.iter().map(|v| v * 2.0).collect();

        let report = gauss::solve(AugmentedMatrix::from_rows(&[first, second]).unwrap());
        assert!(report.is_singular());
        assert_eq!(report.determinant, 0.0);
    }
}
