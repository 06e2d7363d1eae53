//! Gradient assembly from parallel color and location lists.
//!
//! Locations are rescaled so the smallest maps to `0` and the largest to `1`,
//! then the (color, location) pairs are sorted by location and handed to a
//! [`GradientBackend`] that produces the renderer's own gradient object.

use crate::error::{GradientError, Result};

/// A color pinned to a normalized position in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop<C> {
    pub color: C,
    pub location: f64,
}

/// Renderer-side gradient constructor.
pub trait GradientBackend<C> {
    type Output;

    /// Builds a gradient from stops sorted by ascending location.
    fn build(&mut self, stops: &[GradientStop<C>]) -> Self::Output;
}

/// A validated, normalized and sorted list of gradient stops.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient<C> {
    stops: Vec<GradientStop<C>>,
}

impl<C> Gradient<C> {
    /// Pairs `colors[i]` with `locations[i]`, normalizes the locations into
    /// `[0, 1]` and sorts the pairs by location. Ties keep their input order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - fewer than two locations are given,
    /// - the number of colors differs from the number of locations,
    /// - all locations are equal.
    pub fn new(colors: Vec<C>, locations: &[f64]) -> Result<Self> {
        if locations.len() < 2 {
            tracing::debug!(count = locations.len(), "rejected gradient with too few stops");
            return Err(GradientError::InvalidNumberOfColorLocationPairs(locations.len()).into());
        }
        if colors.len() != locations.len() {
            tracing::debug!(
                colors = colors.len(),
                locations = locations.len(),
                "rejected gradient with mismatched sizes"
            );
            return Err(GradientError::MismatchedColorAndLocationArraySizes {
                colors: colors.len(),
                locations: locations.len(),
            }
            .into());
        }

        let (min, max) = locations
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &l| {
                (lo.min(l), hi.max(l))
            });
        let range = max - min;
        if range <= 0.0 {
            tracing::debug!(location = min, "rejected gradient with zero-width locations");
            return Err(GradientError::InvalidColorLocations.into());
        }
        tracing::trace!(stops = locations.len(), min, max, "normalizing gradient locations");

        let mut stops: Vec<_> = colors
            .into_iter()
            .zip(locations)
            .map(|(color, &l)| GradientStop {
                color,
                location: (l - min) / range,
            })
            .collect();
        stops.sort_by(|a, b| a.location.total_cmp(&b.location));

        Ok(Self { stops })
    }

    /// Stops sorted by ascending location.
    #[must_use]
    pub fn stops(&self) -> &[GradientStop<C>] {
        &self.stops
    }

    #[must_use]
    pub fn into_stops(self) -> Vec<GradientStop<C>> {
        self.stops
    }

    /// Hands the sorted stops to `backend`.
    pub fn build<B: GradientBackend<C>>(&self, backend: &mut B) -> B::Output {
        backend.build(&self.stops)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::PlanarError;
    use crate::init_test_tracing;

    /// Records the stops it was asked to build from.
    #[derive(Default)]
    struct Recorder {
        calls: usize,
    }

    impl GradientBackend<&'static str> for Recorder {
        type Output = Vec<(&'static str, f64)>;

        fn build(&mut self, stops: &[GradientStop<&'static str>]) -> Self::Output {
            self.calls += 1;
            stops.iter().map(|s| (s.color, s.location)).collect()
        }
    }

    #[test]
    fn too_few_pairs() {
        init_test_tracing();
        assert_eq!(
            Gradient::new(vec!["red"], &[0.5]).unwrap_err(),
            PlanarError::Gradient(GradientError::InvalidNumberOfColorLocationPairs(1))
        );
        assert!(Gradient::<&str>::new(vec![], &[]).is_err());
    }

    #[test]
    fn mismatched_sizes() {
        assert_eq!(
            Gradient::new(vec!["red", "green", "blue"], &[0.0, 1.0]).unwrap_err(),
            PlanarError::Gradient(GradientError::MismatchedColorAndLocationArraySizes {
                colors: 3,
                locations: 2,
            })
        );
    }

    #[test]
    fn equal_locations_rejected() {
        assert_eq!(
            Gradient::new(vec!["red", "blue"], &[0.3, 0.3]).unwrap_err(),
            PlanarError::Gradient(GradientError::InvalidColorLocations)
        );
    }

    #[test]
    fn locations_normalized_and_sorted() {
        let g = Gradient::new(vec!["blue", "red", "green"], &[30.0, 10.0, 20.0]).unwrap();
        let stops = g.stops();
        assert_eq!(stops[0].color, "red");
        assert_eq!(stops[1].color, "green");
        assert_eq!(stops[2].color, "blue");
        assert_relative_eq!(stops[0].location, 0.0);
        assert_relative_eq!(stops[1].location, 0.5);
        assert_relative_eq!(stops[2].location, 1.0);
    }

    #[test]
    fn ties_keep_input_order() {
        let g = Gradient::new(vec!["a", "b", "c"], &[1.0, -1.0, 1.0]).unwrap();
        let colors: Vec<_> = g.into_stops().into_iter().map(|s| s.color).collect();
        assert_eq!(colors, ["b", "a", "c"]);
    }

    #[test]
    fn backend_receives_sorted_stops() {
        let g = Gradient::new(vec!["end", "start"], &[5.0, -5.0]).unwrap();
        let mut backend = Recorder::default();
        let built = g.build(&mut backend);
        assert_eq!(backend.calls, 1);
        assert_eq!(built, vec![("start", 0.0), ("end", 1.0)]);
    }
}
