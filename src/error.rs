use thiserror::Error;

/// Top-level error type for the planar geometry library.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanarError {
    #[error(transparent)]
    Vector(#[from] VectorError),

    #[error(transparent)]
    Gradient(#[from] GradientError),
}

/// Errors raised by point and vector operations.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum VectorError {
    #[error("tolerance {0} must not be negative")]
    NegativeTolerance(f64),

    #[error("magnitude {0} must not be negative")]
    NegativeMagnitude(f64),

    #[error("zero vector cannot be normalized")]
    NotNormalizable,

    #[error("vector divided by zero")]
    DivisionByZero,
}

/// Errors raised while assembling a gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GradientError {
    #[error("a gradient needs at least two color/location pairs, got {0}")]
    InvalidNumberOfColorLocationPairs(usize),

    #[error("{colors} colors do not match {locations} locations")]
    MismatchedColorAndLocationArraySizes { colors: usize, locations: usize },

    #[error("color locations span a zero-width range")]
    InvalidColorLocations,
}

/// Convenience type alias for results using [`PlanarError`].
pub type Result<T> = std::result::Result<T, PlanarError>;
