//! Polynomial regression by linear least squares.
//!
//! Fitting `y ~ c0 + c1 x + ... + cd x^d` is a linear least squares problem in
//! the coefficients over the Vandermonde design matrix `A[i][j] = x_i^j`.  The
//! solve itself sits behind `LeastSquaresSolver` so the fitting code never
//! touches a matrix decomposition directly.

use crate::regression::RegressionError;
use nalgebra::{DMatrix, DVector};

/// Diagonal entries of `R` this far below the largest one count as zero.
const RANK_TOLERANCE: f64 = 1e-10;

/// Solves `min |A c - y|` for `c`.
pub trait LeastSquaresSolver {
    /// Returns the least squares solution of length `design.ncols()`, or
    /// `RankDeficient` when the columns of `design` are linearly dependent.
    fn solve(
        &self,
        design: &DMatrix<f64>,
        target: &DVector<f64>,
    ) -> Result<DVector<f64>, RegressionError>;
}

/// Least squares through a thin QR factorization, `R c = Q^T y`.
#[derive(Clone, Copy, Debug, Default)]
pub struct QrSolver;

impl LeastSquaresSolver for QrSolver {
    fn solve(
        &self,
        design: &DMatrix<f64>,
        target: &DVector<f64>,
    ) -> Result<DVector<f64>, RegressionError> {
        let (rows, cols) = design.shape();
        if rows != target.len() {
            return Err(RegressionError::InvalidInput(format!(
                "design matrix has {} rows but target has {} entries",
                rows,
                target.len()
            )));
        }
        if cols == 0 || rows < cols {
            return Err(RegressionError::InvalidInput(format!(
                "cannot solve for {} unknowns from {} equations",
                cols, rows
            )));
        }

        let qr = design.clone().qr();
        let q = qr.q();
        let r = qr.r();

        // A vanishing diagonal in R means a dependent column.
        let diag = r.diagonal();
        let tol = RANK_TOLERANCE * diag.amax();
        if diag.iter().any(|d| d.abs() <= tol) {
            debug!("QR diagonal {:?} below tolerance {}", diag.as_slice(), tol);
            return Err(RegressionError::RankDeficient);
        }

        let qty = q.transpose() * target;
        r.solve_upper_triangular(&qty)
            .ok_or(RegressionError::RankDeficient)
    }
}

/// Fits a polynomial of the given `degree` to the samples `(x, y)`.
///
/// Returns the coefficients lowest order first, `degree + 1` of them.  Uses
/// `QrSolver`; see `polyfit_with` to supply another solver.
///
/// # Arguments
///
/// * `x` - Sample points of the independent variable.
/// * `y` - Sample values, `y[i]` belongs to `x[i]`.
/// * `degree` - Degree of the fitted polynomial.
///
/// # Examples
///
/// ```
/// use dsp_rs::regression::poly::{polyfit, polyval};
/// use assert_approx_eq::assert_approx_eq;
///
/// let x = [0.0, 1.0, 2.0, 3.0];
/// let y = [1.0, 2.0, 5.0, 10.0];
///
/// let coeffs = polyfit(&x, &y, 2).unwrap();
/// assert_approx_eq!(coeffs[0], 1.0);
/// assert_approx_eq!(coeffs[1], 0.0);
/// assert_approx_eq!(coeffs[2], 1.0);
/// assert_approx_eq!(polyval(&coeffs, 4.0), 17.0);
/// ```
pub fn polyfit(x: &[f64], y: &[f64], degree: usize) -> Result<Vec<f64>, RegressionError> {
    polyfit_with(&QrSolver, x, y, degree)
}

/// Fits a polynomial of the given `degree` to `(x, y)` with `solver`.
pub fn polyfit_with<S>(
    solver: &S,
    x: &[f64],
    y: &[f64],
    degree: usize,
) -> Result<Vec<f64>, RegressionError>
where
    S: LeastSquaresSolver + ?Sized,
{
    if x.len() != y.len() {
        return Err(RegressionError::InvalidInput(format!(
            "sample points and values must have equal length: {} vs. {}",
            x.len(),
            y.len()
        )));
    }
    if x.is_empty() {
        return Err(RegressionError::InvalidInput(
            "cannot fit a polynomial to zero points".to_string(),
        ));
    }

    let design = DMatrix::from_fn(x.len(), degree + 1, |i, j| x[i].powi(j as i32));
    let target = DVector::from_column_slice(y);
    let coeffs = solver.solve(&design, &target)?;
    Ok(coeffs.iter().cloned().collect())
}

/// Evaluates the polynomial with coefficients `coeffs` (lowest order first)
/// at `x` using Horner's rule.
pub fn polyval(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, c| acc * x + c)
}

#[cfg(test)]
mod test {
    use crate::regression::poly::*;
    use assert_approx_eq::assert_approx_eq;
    use rand::prelude::*;
    use rand::rngs::SmallRng;

    #[test]
    fn test_polyfit_exact_cubic() {
        let truth = [0.5, -1.0, 0.25, 2.0];
        let x: Vec<f64> = (0..12).map(|i| i as f64 * 0.3 - 1.5).collect();
        let y: Vec<f64> = x.iter().map(|x| polyval(&truth, *x)).collect();

        let coeffs = polyfit(&x, &y, 3).unwrap();
        assert_eq!(coeffs.len(), 4);
        for (c, t) in coeffs.iter().zip(truth.iter()) {
            assert_approx_eq!(*c, *t, 1e-9);
        }
    }

    #[test]
    fn test_polyfit_degree_one_matches_line() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [6.0, 5.0, 7.0, 10.0];
        let coeffs = polyfit(&x, &y, 1).unwrap();
        assert_approx_eq!(coeffs[0], 3.5, 1e-12);
        assert_approx_eq!(coeffs[1], 1.4, 1e-12);
    }

    #[test]
    fn test_polyfit_noisy_quadratic() {
        let mut rng = SmallRng::seed_from_u64(7);
        let x: Vec<f64> = (0..200).map(|i| i as f64 / 100.0).collect();
        let y: Vec<f64> = x
            .iter()
            .map(|x| 3.0 - 2.0 * x + 0.5 * x * x + rng.gen_range(-0.01_f64..0.01))
            .collect();

        let coeffs = polyfit(&x, &y, 2).unwrap();
        assert_approx_eq!(coeffs[0], 3.0, 1e-2);
        assert_approx_eq!(coeffs[1], -2.0, 1e-2);
        assert_approx_eq!(coeffs[2], 0.5, 1e-2);
    }

    #[test]
    fn test_polyfit_invalid_input() {
        assert!(matches!(
            polyfit(&[1.0, 2.0], &[1.0], 1),
            Err(RegressionError::InvalidInput(_))
        ));
        assert!(matches!(
            polyfit(&[], &[], 1),
            Err(RegressionError::InvalidInput(_))
        ));
        // Three unknowns cannot be pinned down by two samples.
        assert!(matches!(
            polyfit(&[1.0, 2.0], &[1.0, 2.0], 2),
            Err(RegressionError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_polyfit_rank_deficient() {
        // Every sample at the same x leaves only the constant term defined.
        assert_eq!(
            polyfit(&[2.0, 2.0, 2.0, 2.0], &[1.0, 2.0, 3.0, 4.0], 1),
            Err(RegressionError::RankDeficient)
        );
    }

    #[test]
    fn test_custom_solver() {
        struct Zeros;
        impl LeastSquaresSolver for Zeros {
            fn solve(
                &self,
                design: &DMatrix<f64>,
                _target: &DVector<f64>,
            ) -> Result<DVector<f64>, RegressionError> {
                Ok(DVector::zeros(design.ncols()))
            }
        }

        let coeffs = polyfit_with(&Zeros, &[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0], 2)
            .unwrap();
        assert_eq!(coeffs, vec![0.0; 3]);
    }

    #[test]
    fn test_polyval() {
        assert_eq!(polyval(&[], 3.0), 0.0);
        assert_eq!(polyval(&[2.0], 3.0), 2.0);
        assert_eq!(polyval(&[1.0, 2.0, 3.0], 2.0), 17.0);
    }
}
