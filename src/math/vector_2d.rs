use std::f64::consts::{PI, TAU};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use rand::Rng;

use super::sampling::uniform_between;
use super::tolerance::{within_tolerance, NearlyEqual};
use super::{Point2D, Vector2};
use crate::error::{Result, VectorError};

/// A displacement in the plane.
///
/// The zero vector is a valid value; it is the only vector that cannot be
/// normalized, and it is treated as parallel and perpendicular to every other
/// vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2D {
    pub dx: f64,
    pub dy: f64,
}

impl Vector2D {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Unit vector along +X.
    pub const UNIT_X: Self = Self::new(1.0, 0.0);

    /// Unit vector along +Y.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0);

    /// Creates a vector from its components.
    #[must_use]
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Creates a vector from components of any width losslessly convertible to `f64`.
    #[must_use]
    pub fn from_components(dx: impl Into<f64>, dy: impl Into<f64>) -> Self {
        Self::new(dx.into(), dy.into())
    }

    /// Creates the vector of length `magnitude` at `angle` radians from +X.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::NegativeMagnitude`] if `magnitude < 0`.
    pub fn from_magnitude_and_angle(magnitude: f64, angle: f64) -> Result<Self> {
        let (sin, cos) = angle.sin_cos();
        Self::from_magnitude_sin_cos(magnitude, sin, cos)
    }

    /// Creates the vector of length `magnitude` whose direction has the given
    /// sine and cosine.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::NegativeMagnitude`] if `magnitude < 0`.
    pub fn from_magnitude_sin_cos(magnitude: f64, sin: f64, cos: f64) -> Result<Self> {
        check_magnitude(magnitude)?;
        Ok(Self::new(magnitude * cos, magnitude * sin))
    }

    /// The vector pointing from `from` to `to`.
    #[must_use]
    pub fn between(from: Point2D, to: Point2D) -> Self {
        to - from
    }

    /// Draws each component uniformly from `[min(a, b), max(a, b)]`.
    #[must_use]
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R, a: f64, b: f64) -> Self {
        Self::new(uniform_between(rng, a, b), uniform_between(rng, a, b))
    }

    /// [`Vector2D::random_with`] using the thread-local generator.
    #[must_use]
    pub fn random(a: f64, b: f64) -> Self {
        Self::random_with(&mut rand::rng(), a, b)
    }

    // ── Magnitude ──

    /// Euclidean length, free of intermediate overflow and underflow.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.dx.hypot(self.dy)
    }

    /// `dx² + dy²`, for comparisons that can skip the square root.
    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.dx * self.dx + self.dy * self.dy
    }

    /// L1 norm: `|dx| + |dy|`.
    #[must_use]
    pub fn manhattan_magnitude(&self) -> f64 {
        self.dx.abs() + self.dy.abs()
    }

    /// Returns whether the vector is exactly non-zero.
    #[must_use]
    pub fn is_normalizable(&self) -> bool {
        *self != Self::ZERO
    }

    /// Rescales to unit magnitude in place.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::NotNormalizable`] on the zero vector.
    pub fn normalize(&mut self) -> Result<()> {
        if !self.is_normalizable() {
            tracing::debug!("rejected normalization of the zero vector");
            return Err(VectorError::NotNormalizable.into());
        }
        // Dividing by the larger component first keeps the length finite
        // even when `hypot` of the raw components would overflow.
        let largest = self.dx.abs().max(self.dy.abs());
        let (dx, dy) = (self.dx / largest, self.dy / largest);
        let len = dx.hypot(dy);
        self.dx = dx / len;
        self.dy = dy / len;
        Ok(())
    }

    /// Unit vector in the same direction, or `None` for the zero vector.
    #[must_use]
    pub fn normalized(&self) -> Option<Self> {
        let mut v = *self;
        v.normalize().ok().map(|()| v)
    }

    /// Rescales in place to magnitude `|value|`, reversing direction when
    /// `value < 0`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::NotNormalizable`] on the zero vector.
    pub fn scale_magnitude(&mut self, value: f64) -> Result<()> {
        self.normalize()?;
        *self *= value;
        Ok(())
    }

    /// Pure form of [`Vector2D::scale_magnitude`]; `None` for the zero vector.
    #[must_use]
    pub fn magnitude_scaled(&self, value: f64) -> Option<Self> {
        self.normalized().map(|unit| unit * value)
    }

    /// Shrinks the vector to magnitude `max` if it is longer.
    ///
    /// A bound of zero collapses the vector to zero.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::NegativeMagnitude`] if `max < 0`.
    #[allow(clippy::float_cmp)]
    pub fn scale_magnitude_down_to_if_larger(&mut self, max: f64) -> Result<()> {
        check_magnitude(max)?;
        if max == 0.0 {
            *self = Self::ZERO;
        } else if self.magnitude() > max {
            self.scale_magnitude(max)?;
        }
        Ok(())
    }

    /// Pure form of [`Vector2D::scale_magnitude_down_to_if_larger`].
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::NegativeMagnitude`] if `max < 0`.
    pub fn magnitude_scaled_down_to_if_larger(&self, max: f64) -> Result<Self> {
        let mut v = *self;
        v.scale_magnitude_down_to_if_larger(max)?;
        Ok(v)
    }

    /// Stretches the vector to magnitude `min` if it is shorter.
    ///
    /// A bound of zero enforces no minimum and leaves the vector unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::NegativeMagnitude`] if `min < 0`, or
    /// [`VectorError::NotNormalizable`] if `min > 0` and the vector is zero.
    #[allow(clippy::float_cmp)]
    pub fn scale_magnitude_up_to_if_smaller(&mut self, min: f64) -> Result<()> {
        check_magnitude(min)?;
        if min == 0.0 {
            return Ok(());
        }
        if !self.is_normalizable() {
            tracing::debug!(min, "rejected scaling the zero vector up");
            return Err(VectorError::NotNormalizable.into());
        }
        if self.magnitude() < min {
            self.scale_magnitude(min)?;
        }
        Ok(())
    }

    /// Pure form of [`Vector2D::scale_magnitude_up_to_if_smaller`].
    ///
    /// # Errors
    ///
    /// Same conditions as [`Vector2D::scale_magnitude_up_to_if_smaller`].
    pub fn magnitude_scaled_up_to_if_smaller(&self, min: f64) -> Result<Self> {
        let mut v = *self;
        v.scale_magnitude_up_to_if_smaller(min)?;
        Ok(v)
    }

    // ── Products and angles ──

    /// Dot product.
    #[must_use]
    pub fn dot(&self, other: &Self) -> f64 {
        self.dx * other.dx + self.dy * other.dy
    }

    /// Scalar 2D cross product, the signed area of the parallelogram spanned
    /// by `self` and `other`.
    #[must_use]
    pub fn cross(&self, other: &Self) -> f64 {
        self.dx * other.dy - self.dy * other.dx
    }

    /// Counter-clockwise angle from +X in `[0, 2π)`. Zero for the zero vector.
    #[must_use]
    pub fn angle_from_x_axis(&self) -> f64 {
        if !self.is_normalizable() {
            return 0.0;
        }
        let mut angle = self.dy.atan2(self.dx);
        if angle < 0.0 {
            angle += TAU;
        }
        // A tiny negative angle can round up to exactly 2π.
        if angle >= TAU {
            0.0
        } else {
            angle
        }
    }

    /// `dy / |v|`, or `0` for the zero vector.
    #[must_use]
    pub fn sin_angle_from_x_axis(&self) -> f64 {
        self.normalized().map_or(0.0, |unit| unit.dy)
    }

    /// `dx / |v|`, or `1` for the zero vector so that `(cos, sin)` matches
    /// angle zero.
    #[must_use]
    pub fn cos_angle_from_x_axis(&self) -> f64 {
        self.normalized().map_or(1.0, |unit| unit.dx)
    }

    /// `dy / dx`; infinite with the sign of `dy` on the Y axis, and `0` for
    /// the zero vector.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn tan_angle_from_x_axis(&self) -> f64 {
        if !self.is_normalizable() {
            0.0
        } else if self.dx == 0.0 {
            f64::INFINITY.copysign(self.dy)
        } else {
            self.dy / self.dx
        }
    }

    /// Unsigned angle between the two directions, in `[0, π]`.
    #[must_use]
    pub fn smallest_angle(&self, other: &Self) -> f64 {
        let diff = (self.angle_from_x_axis() - other.angle_from_x_axis()).abs();
        if diff > PI {
            TAU - diff
        } else {
            diff
        }
    }

    // ── Projections ──

    /// Component of `self` along `other`. Returns `self` if either is zero.
    #[must_use]
    pub fn projection_parallel(&self, other: &Self) -> Self {
        match other.normalized() {
            Some(unit) if self.is_normalizable() => unit * self.dot(&unit),
            _ => *self,
        }
    }

    /// Component of `self` orthogonal to `other`. Returns `self` if either is zero.
    #[must_use]
    pub fn projection_perpendicular(&self, other: &Self) -> Self {
        if !self.is_normalizable() || !other.is_normalizable() {
            return *self;
        }
        *self - self.projection_parallel(other)
    }

    /// Returns whether `|self × other| <= tolerance`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::NegativeTolerance`] if `tolerance < 0`.
    pub fn is_nearly_parallel(&self, other: &Self, tolerance: f64) -> Result<bool> {
        within_tolerance(self.cross(other), tolerance)
    }

    /// Returns whether `|self · other| <= tolerance`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::NegativeTolerance`] if `tolerance < 0`.
    pub fn is_nearly_perpendicular(&self, other: &Self, tolerance: f64) -> Result<bool> {
        within_tolerance(self.dot(other), tolerance)
    }

    // ── Rotation ──

    /// Rotates counter-clockwise by the angle whose sine and cosine are given.
    pub fn rotate_counter_clockwise_sin_cos(&mut self, sin: f64, cos: f64) {
        let (dx, dy) = (self.dx, self.dy);
        self.dx = dx * cos - dy * sin;
        self.dy = dy * cos + dx * sin;
    }

    /// Rotates clockwise by the angle whose sine and cosine are given.
    pub fn rotate_clockwise_sin_cos(&mut self, sin: f64, cos: f64) {
        self.rotate_counter_clockwise_sin_cos(-sin, cos);
    }

    /// Rotates in place counter-clockwise by `angle` radians.
    pub fn rotate_counter_clockwise(&mut self, angle: f64) {
        let (sin, cos) = angle.sin_cos();
        self.rotate_counter_clockwise_sin_cos(sin, cos);
    }

    /// Rotates in place clockwise by `angle` radians.
    pub fn rotate_clockwise(&mut self, angle: f64) {
        let (sin, cos) = angle.sin_cos();
        self.rotate_clockwise_sin_cos(sin, cos);
    }

    /// Counter-clockwise rotation by the angle with the given sine and cosine.
    #[must_use]
    pub fn rotated_counter_clockwise_sin_cos(&self, sin: f64, cos: f64) -> Self {
        let mut v = *self;
        v.rotate_counter_clockwise_sin_cos(sin, cos);
        v
    }

    /// Clockwise rotation by the angle with the given sine and cosine.
    #[must_use]
    pub fn rotated_clockwise_sin_cos(&self, sin: f64, cos: f64) -> Self {
        let mut v = *self;
        v.rotate_clockwise_sin_cos(sin, cos);
        v
    }

    /// Copy rotated counter-clockwise by `angle` radians.
    #[must_use]
    pub fn rotated_counter_clockwise(&self, angle: f64) -> Self {
        let mut v = *self;
        v.rotate_counter_clockwise(angle);
        v
    }

    /// Copy rotated clockwise by `angle` radians.
    #[must_use]
    pub fn rotated_clockwise(&self, angle: f64) -> Self {
        let mut v = *self;
        v.rotate_clockwise(angle);
        v
    }

    // ── Division ──

    /// Divides both components by `divisor`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DivisionByZero`] if `divisor` is exactly zero.
    pub fn checked_div(self, divisor: f64) -> Result<Self> {
        let mut v = self;
        v.try_div_assign(divisor)?;
        Ok(v)
    }

    /// In-place form of [`Vector2D::checked_div`].
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::DivisionByZero`] if `divisor` is exactly zero.
    #[allow(clippy::float_cmp)]
    pub fn try_div_assign(&mut self, divisor: f64) -> Result<()> {
        if divisor == 0.0 {
            tracing::debug!(dx = self.dx, dy = self.dy, "rejected division by zero");
            return Err(VectorError::DivisionByZero.into());
        }
        self.dx /= divisor;
        self.dy /= divisor;
        Ok(())
    }
}

/// Rejects negative magnitudes and magnitude bounds.
fn check_magnitude(magnitude: f64) -> Result<()> {
    if magnitude < 0.0 {
        tracing::debug!(magnitude, "rejected negative magnitude");
        return Err(VectorError::NegativeMagnitude(magnitude).into());
    }
    Ok(())
}

impl NearlyEqual for Vector2D {
    const ORIGIN: Self = Self::ZERO;

    fn distance_squared_between(&self, other: &Self) -> f64 {
        (*self - *other).magnitude_squared()
    }
}

impl Hash for Vector2D {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Adding +0.0 folds -0.0 into +0.0 so equal vectors hash equally.
        (self.dx + 0.0).to_bits().hash(state);
        (self.dy + 0.0).to_bits().hash(state);
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.dx, self.dy)
    }
}

impl Add for Vector2D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.dx + rhs.dx, self.dy + rhs.dy)
    }
}

impl Sub for Vector2D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.dx - rhs.dx, self.dy - rhs.dy)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.dx * rhs, self.dy * rhs)
    }
}

impl Mul<Vector2D> for f64 {
    type Output = Vector2D;

    fn mul(self, rhs: Vector2D) -> Vector2D {
        rhs * self
    }
}

/// Division is fallible; `(v / s)?` propagates [`VectorError::DivisionByZero`].
impl Div<f64> for Vector2D {
    type Output = Result<Self>;

    fn div(self, rhs: f64) -> Result<Self> {
        self.checked_div(rhs)
    }
}

impl Neg for Vector2D {
    type Output = Self;

    fn neg(self) -> Self {
        self * -1.0
    }
}

impl AddAssign for Vector2D {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vector2D {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f64> for Vector2D {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl Sum for Vector2D {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl From<Vector2> for Vector2D {
    fn from(v: Vector2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2D> for Vector2 {
    fn from(v: Vector2D) -> Self {
        Vector2::new(v.dx, v.dy)
    }
}

impl From<[f64; 2]> for Vector2D {
    fn from([dx, dy]: [f64; 2]) -> Self {
        Self::new(dx, dy)
    }
}

impl From<(f64, f64)> for Vector2D {
    fn from((dx, dy): (f64, f64)) -> Self {
        Self::new(dx, dy)
    }
}

impl From<(f32, f32)> for Vector2D {
    fn from((dx, dy): (f32, f32)) -> Self {
        Self::from_components(dx, dy)
    }
}

impl From<(i32, i32)> for Vector2D {
    fn from((dx, dy): (i32, i32)) -> Self {
        Self::from_components(dx, dy)
    }
}
