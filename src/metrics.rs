/*!
# Metrics

Evaluation helpers for finished runs. None of this feeds back into the
coloring itself: a run only exposes its final color count, and the planted
class count serves as the chromatic-number reference.
*/

use crate::coloring::NumColors;

/// Ratio of colors used by an online run to the chromatic number of the
/// instance.
/// ** Panics if `chromatic_number` is zero **
pub fn competitive_ratio(colors_used: NumColors, chromatic_number: NumColors) -> f64 {
    assert!(chromatic_number > 0);
    colors_used as f64 / chromatic_number as f64
}

/// Aggregates competitive ratios over a batch of independent runs
#[derive(Debug, Clone, Default)]
pub struct RatioStats {
    ratios: Vec<f64>,
}

impl RatioStats {
    /// Creates an empty aggregate
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the ratio of one finished run
    pub fn push(&mut self, ratio: f64) {
        self.ratios.push(ratio);
    }

    /// Number of recorded runs
    pub fn len(&self) -> usize {
        self.ratios.len()
    }

    /// Returns *true* if no run was recorded yet
    pub fn is_empty(&self) -> bool {
        self.ratios.is_empty()
    }

    /// Mean ratio over all recorded runs, `0.0` if empty
    pub fn mean(&self) -> f64 {
        if self.ratios.is_empty() {
            return 0.0;
        }
        self.ratios.iter().sum::<f64>() / self.ratios.len() as f64
    }

    /// Sample standard deviation, `0.0` below two recorded runs
    pub fn std_dev(&self) -> f64 {
        if self.ratios.len() < 2 {
            return 0.0;
        }

        let mean = self.mean();
        let var = self
            .ratios
            .iter()
            .map(|r| (r - mean) * (r - mean))
            .sum::<f64>()
            / (self.ratios.len() - 1) as f64;
        var.sqrt()
    }
}
