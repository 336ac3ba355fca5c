use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;

/// Maps a single plane coordinate to its display colour.
///
/// Implementations are shared read-only across worker threads and called
/// once per pixel per stage, so they must be cheap and side-effect free.
pub trait PointEvaluator: Send + Sync {
    fn evaluate(&self, c: Complex) -> Colour;
}
