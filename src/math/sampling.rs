use rand::distr::{Distribution, StandardUniform, Uniform};
use rand::Rng;

/// Draws a value uniformly from the closed interval spanned by `a` and `b`.
///
/// The bounds may be given in either order; the effective interval is
/// `[min(a, b), max(a, b)]`.
#[must_use]
pub fn uniform_between<R: Rng + ?Sized>(rng: &mut R, a: f64, b: f64) -> f64 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    match Uniform::new_inclusive(lo, hi) {
        Ok(dist) => dist.sample(rng),
        // `hi - lo` overflows; interpolate without forming the width.
        Err(_) => {
            let t: f64 = StandardUniform.sample(rng);
            (lo * (1.0 - t) + hi * t).clamp(lo, hi)
        }
    }
}
