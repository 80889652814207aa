use serde::{Deserialize, Serialize};

/// Interpolation scheme selected by [`create_spline`](crate::create_spline).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SplineMode {
    Linear,
    Bezier,
    #[default]
    CatmullRom,
    BSpline,
}

/// How a global parameter outside `[0, 1]` maps back onto the curve.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EndMode {
    #[default]
    Clamp,
    /// Closed curve: the last point connects back to the first.
    Loop,
    /// Parameter runs forward then backward: `t` in `[1, 2]` mirrors onto `[1, 0]`.
    PingPong,
}

impl EndMode {
    /// Maps any `t` into the canonical domain.
    ///
    /// Clamp and PingPong land in `[0, 1]`, Loop lands in `[0, 1)`.
    /// NaN maps to 0. Infinities clamp to the nearest end under Clamp and map
    /// to 0 under the periodic modes, which have no defined phase there.
    pub fn normalize(self, t: f32) -> f32 {
        if t.is_nan() {
            return 0.0;
        }
        if !t.is_finite() && self != EndMode::Clamp {
            return 0.0;
        }
        match self {
            EndMode::Clamp => t.clamp(0.0, 1.0),
            EndMode::Loop => {
                let wrapped = t.rem_euclid(1.0);
                // rem_euclid rounds tiny negatives up to exactly 1.0
                if wrapped >= 1.0 {
                    0.0
                } else {
                    wrapped
                }
            }
            EndMode::PingPong => {
                let folded = t.abs() % 2.0;
                if folded > 1.0 {
                    2.0 - folded
                } else {
                    folded
                }
            }
        }
    }

    /// Number of curve segments spanned by `point_count` control points.
    pub fn segment_count(self, point_count: usize) -> usize {
        match (self, point_count) {
            (_, 0 | 1) => 0,
            (EndMode::Loop, n) => n,
            (_, n) => n - 1,
        }
    }
}
