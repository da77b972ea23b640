//! Cross-module algebraic property tests: factor reconstruction, inverse
//! identities, solve residuals, and the documented failure modes.

use densemat::{MatError, Matrix};

const TOL: f64 = 1e-9;

fn assert_mat_near(a: &Matrix<f64>, b: &Matrix<f64>, msg: &str) {
    assert_eq!((a.nrows(), a.ncols()), (b.nrows(), b.ncols()), "{}: shape", msg);
    for i in 0..a.nrows() {
        for j in 0..a.ncols() {
            assert!(
                (a[(i, j)] - b[(i, j)]).abs() < TOL,
                "{}: ({},{}) {} vs {}",
                msg,
                i,
                j,
                a[(i, j)],
                b[(i, j)]
            );
        }
    }
}

fn rows_match(a: &Matrix<f64>, row: usize, b: &Matrix<f64>, other: usize) -> bool {
    (0..a.ncols()).all(|j| (a[(row, j)] - b[(other, j)]).abs() < TOL)
}

/// A few well-conditioned square matrices of assorted sizes.
fn square_cases() -> Vec<Matrix<f64>> {
    vec![
        Matrix::from_rows(2, 2, &[4.0, 3.0, 6.0, 3.0]),
        Matrix::from_rows(3, 3, &[2.0, 1.0, -1.0, -3.0, -1.0, 2.0, -2.0, 1.0, 2.0]),
        Matrix::from_rows(
            4,
            4,
            &[
                1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 2.0, 6.0, 4.0, 1.0, 3.0, 1.0, 9.0, 2.0,
            ],
        ),
        // Diagonally dominant 5x5
        Matrix::from_fn(5, 5, |i, j| {
            if i == j {
                10.0 + i as f64
            } else {
                1.0 / (1.0 + (i + j) as f64)
            }
        }),
    ]
}

#[test]
fn lu_reconstructs_row_permutation_of_input() {
    for a in square_cases() {
        let lu = a.lu().unwrap();
        let prod = lu.l().matmul(&lu.u()).unwrap();

        // L*U is the input with its rows in pivot order: every row of the
        // product must match exactly one distinct row of A.
        let n = a.nrows();
        let mut used = vec![false; n];
        for i in 0..n {
            let found = (0..n)
                .find(|&k| !used[k] && rows_match(&prod, i, &a, k))
                .unwrap_or_else(|| panic!("row {} of L*U matches no row of A", i));
            used[found] = true;
        }
    }
}

#[test]
fn lu_factors_are_triangular() {
    for a in square_cases() {
        let lu = a.lu().unwrap();
        let l = lu.l();
        let u = lu.u();
        let n = a.nrows();
        for i in 0..n {
            assert!((l[(i, i)] - 1.0).abs() < TOL, "L unit diagonal");
            for j in (i + 1)..n {
                assert_eq!(l[(i, j)], 0.0, "L above diagonal");
            }
            for j in 0..i {
                assert_eq!(u[(i, j)], 0.0, "U below diagonal");
            }
        }
    }
}

#[test]
fn qr_reconstructs_input() {
    let cases = vec![
        Matrix::from_rows(3, 3, &[12.0, -51.0, 4.0, 6.0, 167.0, -68.0, -4.0, 24.0, -41.0]),
        Matrix::from_rows(4, 2, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 9.0]),
        Matrix::from_fn(6, 4, |i, j| ((i + 1) * (j + 2)) as f64 + if i == j { 5.0 } else { 0.0 }),
    ];
    for a in cases {
        let qr = a.qr().unwrap();
        let q = qr.q();
        let r = qr.r();

        assert_mat_near(&q.matmul(&r).unwrap(), &a, "Q*R = A");

        let qtq = q.transpose().matmul(&q).unwrap();
        assert_mat_near(&qtq, &Matrix::eye(a.ncols()), "Q^T*Q = I");
    }
}

#[test]
fn inverse_identities() {
    for a in square_cases() {
        let inv = a.inverse().unwrap();
        let n = a.nrows();
        assert_mat_near(&a.matmul(&inv).unwrap(), &Matrix::eye(n), "A * A^-1");
        assert_mat_near(&inv.matmul(&a).unwrap(), &Matrix::eye(n), "A^-1 * A");
    }
}

#[test]
fn solve_residuals() {
    for a in square_cases() {
        let n = a.nrows();
        let b = Matrix::from_fn(n, 2, |i, j| (i + j + 1) as f64);
        let x = a.solve(&b).unwrap();
        assert_mat_near(&a.matmul(&x).unwrap(), &b, "A * x = b");
    }
}

#[test]
fn transpose_involution() {
    let a = Matrix::from_fn(3, 5, |i, j| (i * 5 + j) as f64);
    assert_eq!(a.transpose().transpose(), a);
}

#[test]
fn det_zero_row_and_zero_column() {
    let mut zero_row = Matrix::<f64>::ones(3, 3);
    zero_row.set_row(1, &Matrix::zeros(1, 3)).unwrap();
    assert_eq!(zero_row.det().unwrap(), 0.0);

    let mut zero_col = Matrix::from_fn(3, 3, |i, j| (i * 3 + j + 1) as f64);
    zero_col.set_col(2, &Matrix::zeros(3, 1)).unwrap();
    assert_eq!(zero_col.det().unwrap(), 0.0);
}

#[test]
fn singular_matrix_behavior() {
    // det signals singularity with 0.0; solve and inverse report it.
    let a = Matrix::from_rows(2, 2, &[1.0, 2.0, 2.0, 4.0]);
    assert_eq!(a.det().unwrap(), 0.0);
    assert_eq!(a.inverse().unwrap_err(), MatError::Singular);
    let b = Matrix::from_rows(2, 1, &[1.0, 1.0]);
    assert_eq!(a.solve(&b).unwrap_err(), MatError::Singular);
}

#[test]
fn dimension_mismatch_reported() {
    let a = Matrix::<f64>::zeros(2, 3);
    let b = Matrix::<f64>::zeros(3, 2);
    assert!(matches!(a.add(&b), Err(MatError::DimensionMismatch { .. })));

    let m = Matrix::<f64>::zeros(3, 3);
    assert!(matches!(
        m.submatrix(2, 0, 2, 2),
        Err(MatError::RangeOutOfBounds { .. })
    ));
}

#[test]
fn pivoting_scenario_2x2() {
    // A = [[4,3],[6,3]]: partial pivoting brings the 6 up front.
    let a = Matrix::from_rows(2, 2, &[4.0, 3.0, 6.0, 3.0]);
    let lu = a.lu().unwrap();
    let l = lu.l();
    let u = lu.u();

    let expected_l = Matrix::from_rows(2, 2, &[1.0, 0.0, 2.0 / 3.0, 1.0]);
    let expected_u = Matrix::from_rows(2, 2, &[6.0, 3.0, 0.0, 1.0]);
    assert_mat_near(&l, &expected_l, "L");
    assert_mat_near(&u, &expected_u, "U");

    assert!((a.det().unwrap() - (-6.0)).abs() < TOL);

    let b = Matrix::from_rows(2, 1, &[1.0, 1.0]);
    let x = a.solve(&b).unwrap();
    assert!((x[(0, 0)]).abs() < TOL);
    assert!((x[(1, 0)] - 1.0 / 3.0).abs() < TOL);
}

#[test]
fn solve_does_not_mutate_operands() {
    let a = Matrix::from_rows(2, 2, &[4.0, 3.0, 6.0, 3.0]);
    let b = Matrix::from_rows(2, 1, &[1.0, 1.0]);
    let a_before = a.clone();
    let b_before = b.clone();
    let _ = a.solve(&b).unwrap();
    assert_eq!(a, a_before);
    assert_eq!(b, b_before);
}

#[test]
fn triangular_extraction_feeds_substitution() {
    // Splitting a matrix into L+U parts and re-adding the strict pieces
    // reproduces it.
    let a = Matrix::from_fn(4, 4, |i, j| ((i + 2) * (j + 1)) as f64);
    let l = a.lower_triangular();
    let u = a.upper_triangular();
    let diag = Matrix::from_fn(4, 4, |i, j| if i == j { a[(i, i)] } else { 0.0 });

    let sum = l.add(&u).unwrap().sub(&diag).unwrap();
    assert_mat_near(&sum, &a, "L + U - diag = A");
}
