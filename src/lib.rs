pub mod error;
pub mod gradient;
pub mod math;

pub use error::{GradientError, PlanarError, Result, VectorError};
pub use gradient::{Gradient, GradientBackend, GradientStop};
pub use math::{NearlyEqual, Point2D, Vector2D, TOLERANCE};

/// Routes `tracing` output to the test harness; `RUST_LOG` selects the level.
#[cfg(test)]
pub(crate) fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
