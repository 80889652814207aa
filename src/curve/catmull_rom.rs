use super::constants::{DEFAULT_ALPHA, EPSILON};
use super::kernels;
use super::mode::EndMode;
use super::spline::Spline;
use crate::math::Float3;

/// Generalized Catmull-Rom parameterization.
///
/// `alpha` sets the knot spacing: 0 is uniform, 0.5 centripetal, 1 chordal.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CatmullRom {
    pub alpha: f32,
}

impl CatmullRom {
    pub const UNIFORM: Self = Self::new(0.0);
    pub const CENTRIPETAL: Self = Self::new(DEFAULT_ALPHA);
    pub const CHORDAL: Self = Self::new(1.0);

    pub const fn new(alpha: f32) -> Self {
        Self { alpha }
    }

    /// Point on the segment from `p[1]` to `p[2]`.
    pub fn position(&self, p: &[Float3; 4], t: f32) -> Float3 {
        if self.alpha.abs() < EPSILON {
            return kernels::catmull_rom_uniform(p, t);
        }
        let Some(k) = self.knots(p) else {
            return p[1].lerp(p[2], t);
        };
        let tt = kernels::lerp(k[1], k[2], t);

        let a1 = (p[0] * (k[1] - tt) + p[1] * (tt - k[0])) / (k[1] - k[0]);
        let a2 = (p[1] * (k[2] - tt) + p[2] * (tt - k[1])) / (k[2] - k[1]);
        let a3 = (p[2] * (k[3] - tt) + p[3] * (tt - k[2])) / (k[3] - k[2]);

        let b1 = (a1 * (k[2] - tt) + a2 * (tt - k[0])) / (k[2] - k[0]);
        let b2 = (a2 * (k[3] - tt) + a3 * (tt - k[1])) / (k[3] - k[1]);

        (b1 * (k[2] - tt) + b2 * (tt - k[1])) / (k[2] - k[1])
    }

    /// Analytic derivative of [`position`](Self::position) with respect to `t`.
    pub fn derivative(&self, p: &[Float3; 4], t: f32) -> Float3 {
        if self.alpha.abs() < EPSILON {
            return kernels::catmull_rom_uniform_derivative(p, t);
        }
        let Some(k) = self.knots(p) else {
            return p[2] - p[1];
        };
        let tt = kernels::lerp(k[1], k[2], t);

        let a1 = (p[0] * (k[1] - tt) + p[1] * (tt - k[0])) / (k[1] - k[0]);
        let a2 = (p[1] * (k[2] - tt) + p[2] * (tt - k[1])) / (k[2] - k[1]);
        let a3 = (p[2] * (k[3] - tt) + p[3] * (tt - k[2])) / (k[3] - k[2]);
        let da1 = (p[1] - p[0]) / (k[1] - k[0]);
        let da2 = (p[2] - p[1]) / (k[2] - k[1]);
        let da3 = (p[3] - p[2]) / (k[3] - k[2]);

        let b1 = (a1 * (k[2] - tt) + a2 * (tt - k[0])) / (k[2] - k[0]);
        let b2 = (a2 * (k[3] - tt) + a3 * (tt - k[1])) / (k[3] - k[1]);
        let db1 = (a2 - a1 + da1 * (k[2] - tt) + da2 * (tt - k[0])) / (k[2] - k[0]);
        let db2 = (a3 - a2 + da2 * (k[3] - tt) + da3 * (tt - k[1])) / (k[3] - k[1]);

        let dc = (b2 - b1 + db1 * (k[2] - tt) + db2 * (tt - k[1])) / (k[2] - k[1]);
        // d/dt = d/dtt * dtt/dt
        dc * (k[2] - k[1])
    }

    /// Knot sequence for the four-point stencil, or `None` when any interval vanishes.
    fn knots(&self, p: &[Float3; 4]) -> Option<[f32; 4]> {
        let interval = |a: Float3, b: Float3| a.distance(b).powf(self.alpha);
        let d01 = interval(p[0], p[1]);
        let d12 = interval(p[1], p[2]);
        let d23 = interval(p[2], p[3]);
        if d01 < EPSILON || d12 < EPSILON || d23 < EPSILON {
            return None;
        }
        Some([0.0, d01, d01 + d12, d01 + d12 + d23])
    }
}

impl Default for CatmullRom {
    fn default() -> Self {
        Self::CENTRIPETAL
    }
}

impl Spline {
    /// Four-point stencil around `segment`.
    ///
    /// Open ends get a phantom point mirrored through the end point
    /// (`p[-1] = 2 * p[0] - p[1]`), loops wrap around.
    pub(crate) fn stencil(&self, segment: usize) -> [Float3; 4] {
        let points = self.points();
        let n = points.len();
        let (i1, i2) = self.segment_indices(segment);
        let p1 = points[i1].position;
        let p2 = points[i2].position;

        if self.end_mode == EndMode::Loop {
            let p0 = points[(i1 + n - 1) % n].position;
            let p3 = points[(i2 + 1) % n].position;
            return [p0, p1, p2, p3];
        }

        let p0 = if i1 > 0 {
            points[i1 - 1].position
        } else {
            p1 * 2.0 - p2
        };
        let p3 = if i2 + 1 < n {
            points[i2 + 1].position
        } else {
            p2 * 2.0 - p1
        };
        [p0, p1, p2, p3]
    }

    /// Unit tangent of the curve at control point `index`.
    ///
    /// Evaluated analytically at the knot: the start of the segment leaving the
    /// point, or the end of the last segment for the final point of an open
    /// spline. Indices past the end are clamped.
    pub fn get_tangent_at_point(&self, index: usize) -> Float3 {
        let n = self.point_count();
        if n < 2 {
            return Float3::FORWARD;
        }
        let index = index.min(n - 1);
        let segments = self.segment_count();
        if index >= segments {
            self.segment_tangent(segments - 1, 1.0)
        } else {
            self.segment_tangent(index, 0.0)
        }
    }
}
