pub mod point_2d;
pub mod sampling;
pub mod tolerance;
pub mod vector_2d;

pub use point_2d::Point2D;
pub use tolerance::NearlyEqual;
pub use vector_2d::Vector2D;

/// nalgebra 2D point type, used for interop with host geometry code.
pub type Point2 = nalgebra::Point2<f64>;

/// nalgebra 2D vector type, used for interop with host geometry code.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
