//! Curve fitting over discrete samples.
//!
//! `linear` fits a straight line with the closed form least squares formula.
//! `poly` fits polynomials of any degree by handing the least squares problem
//! to a `LeastSquaresSolver`; the default solver is a QR factorization from
//! nalgebra.  Neither is used by the filters or interpolators.

pub mod linear;
pub mod poly;

use thiserror::Error;

#[derive(Error, Clone, Debug, PartialEq)]
pub enum RegressionError {
    #[error("Invalid regression input: {0}")]
    InvalidInput(String),

    #[error("Least squares system is rank deficient")]
    RankDeficient,
}

/// A sample used for regression.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }
}
