use super::point::SplinePoint;
use crate::math::{Float3, Frame};

/// Position and moving frame at one parameter value.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SplineEvalResult {
    pub position: Float3,
    /// Unit direction of travel.
    pub tangent: Float3,
    pub normal: Float3,
    pub binormal: Float3,
    pub roll: f32,
    pub custom_data: f32,
}

impl SplineEvalResult {
    pub fn new(position: Float3, frame: Frame, roll: f32, custom_data: f32) -> Self {
        Self {
            position,
            tangent: frame.tangent,
            normal: frame.normal,
            binormal: frame.binormal,
            roll,
            custom_data,
        }
    }

    /// Degenerate result for a single-point spline.
    pub fn at_point(point: &SplinePoint) -> Self {
        Self::new(
            point.position,
            Frame::DEFAULT.with_roll(point.roll),
            point.roll,
            point.custom_data,
        )
    }

    pub fn frame(&self) -> Frame {
        Frame::new(self.tangent, self.normal, self.binormal)
    }
}

impl Default for SplineEvalResult {
    fn default() -> Self {
        Self::new(Float3::ZERO, Frame::DEFAULT, 0.0, 0.0)
    }
}

/// Closest point on a spline to a query position.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct SplineNearestResult {
    /// Global parameter in `[0, 1]`.
    pub t: f32,
    pub position: Float3,
    pub distance: f32,
    /// Segment containing `t`.
    pub segment_index: usize,
}
