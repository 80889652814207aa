use serde::{Deserialize, Serialize};

/// Numerical resolution of the length, nearest-point and bounds queries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingParams {
    /// Chord samples per segment in the arc-length table.
    pub arc_samples_per_segment: usize,
    /// Samples per segment in the coarse nearest-point pass.
    pub nearest_coarse_samples: usize,
    /// Golden-section iteration cap for nearest-point refinement.
    pub nearest_max_iterations: usize,
    /// Refinement stops once the bracket is narrower than this fraction of one segment.
    pub nearest_tolerance: f32,
    /// Curve samples used to bound strategies that can overshoot their control points.
    pub bounds_samples: usize,
}

impl SamplingParams {
    pub fn new(
        arc_samples_per_segment: usize,
        nearest_coarse_samples: usize,
        nearest_max_iterations: usize,
        nearest_tolerance: f32,
        bounds_samples: usize,
    ) -> Self {
        Self {
            arc_samples_per_segment,
            nearest_coarse_samples,
            nearest_max_iterations,
            nearest_tolerance,
            bounds_samples,
        }
    }
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            arc_samples_per_segment: 20,
            nearest_coarse_samples: 10,
            nearest_max_iterations: 32,
            nearest_tolerance: 1e-4,
            bounds_samples: 100,
        }
    }
}
