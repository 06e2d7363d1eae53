use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Sub, SubAssign};

use rand::Rng;

use super::sampling::uniform_between;
use super::tolerance::NearlyEqual;
use super::{Point2, Vector2D};

/// A location in the plane.
///
/// All point arithmetic goes through [`Vector2D`]: translating a point adds a
/// vector to its coordinates, and the difference of two points is a vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    /// The origin.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a point from coordinates of any width losslessly convertible to `f64`.
    #[must_use]
    pub fn from_components(x: impl Into<f64>, y: impl Into<f64>) -> Self {
        Self::new(x.into(), y.into())
    }

    /// Draws each coordinate uniformly from `[min(a, b), max(a, b)]`.
    #[must_use]
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R, a: f64, b: f64) -> Self {
        Self::new(uniform_between(rng, a, b), uniform_between(rng, a, b))
    }

    /// [`Point2D::random_with`] using the thread-local generator.
    #[must_use]
    pub fn random(a: f64, b: f64) -> Self {
        Self::random_with(&mut rand::rng(), a, b)
    }

    /// The vector pointing from `self` to `other`.
    #[must_use]
    pub fn vector_to(&self, other: &Self) -> Vector2D {
        Vector2D::new(other.x - self.x, other.y - self.y)
    }

    /// The vector pointing from `other` to `self`.
    #[must_use]
    pub fn vector_from(&self, other: &Self) -> Vector2D {
        other.vector_to(self)
    }

    /// The vector pointing from `from` to `to`.
    #[must_use]
    pub fn vector_between(from: &Self, to: &Self) -> Vector2D {
        from.vector_to(to)
    }

    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        self.vector_to(other).magnitude()
    }

    #[must_use]
    pub fn distance_squared(&self, other: &Self) -> f64 {
        self.vector_to(other).magnitude_squared()
    }

    #[must_use]
    pub fn manhattan_distance(&self, other: &Self) -> f64 {
        self.vector_to(other).manhattan_magnitude()
    }
}

impl NearlyEqual for Point2D {
    const ORIGIN: Self = Self::ZERO;

    fn distance_squared_between(&self, other: &Self) -> f64 {
        self.distance_squared(other)
    }
}

impl Hash for Point2D {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.x + 0.0).to_bits().hash(state);
        (self.y + 0.0).to_bits().hash(state);
    }
}

impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add<Vector2D> for Point2D {
    type Output = Self;

    fn add(self, rhs: Vector2D) -> Self {
        Self::new(self.x + rhs.dx, self.y + rhs.dy)
    }
}

impl Sub<Vector2D> for Point2D {
    type Output = Self;

    fn sub(self, rhs: Vector2D) -> Self {
        self + -rhs
    }
}

/// `p1 - p2` points from `p2` to `p1`.
impl Sub for Point2D {
    type Output = Vector2D;

    fn sub(self, rhs: Self) -> Vector2D {
        rhs.vector_to(&self)
    }
}

impl AddAssign<Vector2D> for Point2D {
    fn add_assign(&mut self, rhs: Vector2D) {
        *self = *self + rhs;
    }
}

impl SubAssign<Vector2D> for Point2D {
    fn sub_assign(&mut self, rhs: Vector2D) {
        *self = *self - rhs;
    }
}

impl From<Point2> for Point2D {
    fn from(p: Point2) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Point2D> for Point2 {
    fn from(p: Point2D) -> Self {
        Point2::new(p.x, p.y)
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<(f32, f32)> for Point2D {
    fn from((x, y): (f32, f32)) -> Self {
        Self::from_components(x, y)
    }
}

impl From<(i32, i32)> for Point2D {
    fn from((x, y): (i32, i32)) -> Self {
        Self::from_components(x, y)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::hash_map::DefaultHasher;

    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::error::{PlanarError, VectorError};

    fn p(x: f64, y: f64) -> Point2D {
        Point2D::new(x, y)
    }

    #[test]
    fn vector_to_and_distance() {
        let o = Point2D::ZERO;
        let q = p(3.0, 4.0);
        assert_eq!(o.vector_to(&q), Vector2D::new(3.0, 4.0));
        assert_eq!(o.vector_from(&q), Vector2D::new(-3.0, -4.0));
        assert_eq!(Point2D::vector_between(&o, &q), Vector2D::new(3.0, 4.0));
        assert_relative_eq!(o.distance(&q), 5.0);
        assert_relative_eq!(o.distance_squared(&q), 25.0);
        assert_relative_eq!(q.manhattan_distance(&o), 7.0);
    }

    #[test]
    fn point_minus_point_points_from_rhs() {
        let a = p(5.0, 1.0);
        let b = p(2.0, -1.0);
        assert_eq!(a - b, Vector2D::new(3.0, 2.0));
        assert_eq!(b + (a - b), a);
    }

    #[test]
    fn translate_by_vector() {
        let mut a = p(1.0, 1.0);
        let d = Vector2D::new(2.0, -3.0);
        assert_eq!(a + d, p(3.0, -2.0));
        assert_eq!(a - d, p(-1.0, 4.0));
        a += d;
        assert_eq!(a, p(3.0, -2.0));
        a -= d;
        assert_eq!(a, p(1.0, 1.0));
    }

    #[test]
    fn nearly_equal_follows_tolerance_policy() {
        let a = p(1.0, 1.0);
        assert!(a.is_nearly_equal(&a, 0.0).unwrap());
        assert!(a.is_nearly_equal(&p(1.3, 1.3), 0.5).unwrap());
        assert!(!a.is_nearly_equal(&p(1.4, 1.4), 0.5).unwrap());
        assert!(p(1e-12, 0.0).is_nearly_zero(1e-10).unwrap());
        assert_eq!(
            a.is_nearly_equal(&a, -0.1).unwrap_err(),
            PlanarError::Vector(VectorError::NegativeTolerance(-0.1))
        );
        assert!(a.is_nearly_zero(-1.0).is_err());
        assert!(a.approx_eq(&p(1.0, 1.0 + 1e-12)));
    }

    #[test]
    fn random_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..100 {
            let q = Point2D::random_with(&mut rng, 10.0, 2.0);
            assert!((2.0..=10.0).contains(&q.x), "x={}", q.x);
            assert!((2.0..=10.0).contains(&q.y), "y={}", q.y);
        }
        let wide = Point2D::random_with(&mut rng, -f64::MAX, f64::MAX);
        assert!(wide.x.is_finite() && wide.y.is_finite(), "{wide}");
        let q = Point2D::random(-1.0, 1.0);
        assert!(q.x.abs() <= 1.0 && q.y.abs() <= 1.0);
    }

    #[test]
    fn conversions() {
        assert_eq!(Point2D::from((2_i32, 3_i32)), p(2.0, 3.0));
        assert_eq!(Point2D::from((0.25_f32, 0.5_f32)), p(0.25, 0.5));
        assert_eq!(Point2D::from_components(1_u16, -2_i8), p(1.0, -2.0));
        let n: Point2 = p(1.0, 2.0).into();
        assert_eq!(Point2D::from(n), p(1.0, 2.0));
        assert_eq!(p(0.5, -3.0).to_string(), "(0.5, -3)");
    }

    fn hash_of(q: Point2D) -> u64 {
        let mut h = DefaultHasher::new();
        q.hash(&mut h);
        h.finish()
    }

    #[test]
    fn equal_points_hash_equally() {
        assert_eq!(hash_of(p(1.0, 2.0)), hash_of(p(1.0, 2.0)));
        assert_eq!(hash_of(p(0.0, -0.0)), hash_of(p(-0.0, 0.0)));
        assert_ne!(hash_of(p(1.0, 2.0)), hash_of(p(2.0, 1.0)));
    }
}
