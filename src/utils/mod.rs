/*!
# Utilities

Shared helpers that are not tied to one algorithm:
- [`Probability`]: validity checks for probability parameters,
- [`GeometricJumper`](geometric::GeometricJumper): skip-sampling over index
  ranges, the workhorse of the planted generator,
- [`Partition`](partition::Partition): disjoint node classes, used for the
  planted independent sets.
*/

pub mod geometric;
pub mod partition;

pub use geometric::GeometricJumper;
pub use partition::{IntoPartition, Partition};

/// Helper trait for probabilities
pub trait Probability {
    /// Returns *true* if the probability is valid (ie. between `0` and `1`)
    fn is_valid_probability(&self) -> bool;
}

impl Probability for f64 {
    fn is_valid_probability(&self) -> bool {
        (0.0..=1.0).contains(self)
    }
}
