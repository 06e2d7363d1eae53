//! Tolerance policy shared by every approximate predicate.
//!
//! A negative tolerance is always rejected. A zero tolerance degrades to
//! exact comparison. Otherwise a predicate holds when a single scalar
//! discrepancy (a Euclidean distance, a cross product or a dot product) lies
//! within the tolerance; components are never compared one by one.

use super::TOLERANCE;
use crate::error::{Result, VectorError};

/// Rejects negative tolerances.
///
/// # Errors
///
/// Returns [`VectorError::NegativeTolerance`] if `tolerance < 0`.
pub fn check_tolerance(tolerance: f64) -> Result<()> {
    if tolerance < 0.0 {
        tracing::debug!(tolerance, "rejected negative tolerance");
        return Err(VectorError::NegativeTolerance(tolerance).into());
    }
    Ok(())
}

/// Returns whether `|discrepancy| <= tolerance`.
///
/// # Errors
///
/// Returns [`VectorError::NegativeTolerance`] if `tolerance < 0`.
pub fn within_tolerance(discrepancy: f64, tolerance: f64) -> Result<bool> {
    check_tolerance(tolerance)?;
    Ok(discrepancy.abs() <= tolerance)
}

/// Approximate equality for planar values measured by Euclidean distance.
pub trait NearlyEqual: PartialEq + Sized {
    /// The value [`NearlyEqual::is_nearly_zero`] compares against.
    const ORIGIN: Self;

    /// Squared Euclidean distance between `self` and `other`.
    fn distance_squared_between(&self, other: &Self) -> f64;

    /// Returns whether `other` lies within `tolerance` of `self`.
    ///
    /// A tolerance of exactly zero falls back to exact equality.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::NegativeTolerance`] if `tolerance < 0`.
    #[allow(clippy::float_cmp)]
    fn is_nearly_equal(&self, other: &Self, tolerance: f64) -> Result<bool> {
        if tolerance == 0.0 {
            return Ok(self == other);
        }
        check_tolerance(tolerance)?;
        Ok(self.distance_squared_between(other) <= tolerance * tolerance)
    }

    /// Returns whether `self` lies within `tolerance` of [`NearlyEqual::ORIGIN`].
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::NegativeTolerance`] if `tolerance < 0`.
    fn is_nearly_zero(&self, tolerance: f64) -> Result<bool> {
        self.is_nearly_equal(&Self::ORIGIN, tolerance)
    }

    /// [`NearlyEqual::is_nearly_equal`] at the default [`TOLERANCE`].
    fn approx_eq(&self, other: &Self) -> bool {
        self.distance_squared_between(other) <= TOLERANCE * TOLERANCE
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PlanarError;
    use crate::init_test_tracing;

    #[derive(Debug, PartialEq)]
    struct Scalar(f64);

    impl NearlyEqual for Scalar {
        const ORIGIN: Self = Scalar(0.0);

        fn distance_squared_between(&self, other: &Self) -> f64 {
            (self.0 - other.0).powi(2)
        }
    }

    #[test]
    fn negative_tolerance_is_rejected() {
        init_test_tracing();
        let err = check_tolerance(-1e-3).unwrap_err();
        assert_eq!(err, PlanarError::Vector(VectorError::NegativeTolerance(-1e-3)));
        assert!(Scalar(1.0).is_nearly_equal(&Scalar(1.0), -1.0).is_err());
        assert!(Scalar(1.0).is_nearly_zero(-1.0).is_err());
        assert!(within_tolerance(0.0, -0.5).is_err());
    }

    #[test]
    fn zero_tolerance_is_exact() {
        assert!(Scalar(1.0).is_nearly_equal(&Scalar(1.0), 0.0).unwrap());
        assert!(!Scalar(1.0).is_nearly_equal(&Scalar(1.0 + 1e-15), 0.0).unwrap());
    }

    #[test]
    fn boundary_is_inclusive() {
        assert!(Scalar(0.0).is_nearly_equal(&Scalar(0.5), 0.5).unwrap());
        assert!(!Scalar(0.0).is_nearly_equal(&Scalar(0.5), 0.49).unwrap());
        assert!(within_tolerance(-0.25, 0.25).unwrap());
        assert!(!within_tolerance(0.26, 0.25).unwrap());
    }

    #[test]
    fn approx_eq_uses_default_tolerance() {
        assert!(Scalar(2.0).approx_eq(&Scalar(2.0 + TOLERANCE * 0.5)));
        assert!(!Scalar(2.0).approx_eq(&Scalar(2.0 + TOLERANCE * 2.0)));
        assert!(Scalar(TOLERANCE * 0.1).is_nearly_zero(TOLERANCE).unwrap());
    }
}
