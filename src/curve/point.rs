use crate::math::Float3;
use serde::{Deserialize, Serialize};

/// A control point owned by a [`Spline`](super::Spline).
///
/// Tangent handles are offsets from `position`. Bezier segments use them as
/// authored control handles; the interpolating strategies ignore them.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplinePoint {
    pub position: Float3,
    pub tangent_in: Float3,
    pub tangent_out: Float3,
    /// Twist around the tangent, in radians.
    pub roll: f32,
    /// Free per-point channel, interpolated like roll.
    pub custom_data: f32,
}

impl SplinePoint {
    pub const fn new(position: Float3) -> Self {
        Self::with_tangents(position, Float3::ZERO, Float3::ZERO)
    }

    pub const fn with_tangents(position: Float3, tangent_in: Float3, tangent_out: Float3) -> Self {
        Self {
            position,
            tangent_in,
            tangent_out,
            roll: 0.0,
            custom_data: 0.0,
        }
    }

    pub const fn with_roll(mut self, roll: f32) -> Self {
        self.roll = roll;
        self
    }

    pub const fn with_custom_data(mut self, custom_data: f32) -> Self {
        self.custom_data = custom_data;
        self
    }

    pub const DEFAULT: Self = Self::new(Float3::ZERO);
}

impl Default for SplinePoint {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<Float3> for SplinePoint {
    fn from(position: Float3) -> Self {
        Self::new(position)
    }
}
