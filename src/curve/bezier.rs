use log::warn;

use super::constants::EPSILON;
use super::kernels;
use super::mode::EndMode;
use super::point::SplinePoint;
use super::spline::Spline;
use super::strategy::Curve;
use super::tangents::compute_smooth_tangents;
use crate::error::SplineError;
use crate::math::Float3;

impl Spline {
    /// Cubic control polygon of `segment`: both end points plus their facing handles.
    pub(crate) fn bezier_controls(&self, segment: usize) -> [Float3; 4] {
        let (a, b) = self.segment_indices(segment);
        let (pa, pb) = (&self.points()[a], &self.points()[b]);
        [
            pa.position,
            pa.position + pa.tangent_out,
            pb.position + pb.tangent_in,
            pb.position,
        ]
    }

    /// Inserts a control point at `t` and returns its index.
    ///
    /// Bezier curves are split with de Casteljau, so the shape is unchanged:
    /// the neighbours' facing handles shrink and the new point gets the split
    /// handles. Other curves insert the evaluated point as is. Returns `None`
    /// when there is no segment or `t` falls on an existing point.
    pub fn split_at(&mut self, t: f32) -> Option<usize> {
        if self.point_count() < 2 {
            return None;
        }
        let (segment, local_t) = self.get_segment(t);
        if local_t <= EPSILON || local_t >= 1.0 - EPSILON {
            return None;
        }
        let (a, b) = self.segment_indices(segment);
        let (pa, pb) = (self.points()[a], self.points()[b]);
        let roll = kernels::lerp(pa.roll, pb.roll, local_t);
        let custom_data = kernels::lerp(pa.custom_data, pb.custom_data, local_t);

        let inserted = match self.curve {
            Curve::Bezier => {
                let [p0, p1, p2, p3] = self.bezier_controls(segment);
                let q0 = p0.lerp(p1, local_t);
                let q1 = p1.lerp(p2, local_t);
                let q2 = p2.lerp(p3, local_t);
                let r0 = q0.lerp(q1, local_t);
                let r1 = q1.lerp(q2, local_t);
                let split = r0.lerp(r1, local_t);

                let points = self.points_mut();
                points[a].tangent_out = q0 - p0;
                points[b].tangent_in = q2 - p3;
                SplinePoint::with_tangents(split, r0 - split, r1 - split)
            }
            Curve::Linear | Curve::CatmullRom(_) | Curve::BSpline => {
                SplinePoint::new(self.segment_position(segment, local_t))
            }
        }
        .with_roll(roll)
        .with_custom_data(custom_data);

        let index = a + 1;
        self.points_mut().insert(index, inserted);
        self.invalidate_cache();
        Some(index)
    }

    /// Makes the handles at `index` collinear along their averaged direction,
    /// keeping each handle's length.
    pub fn make_smooth(&mut self, index: usize) -> Result<(), SplineError> {
        self.edit_handles("make_smooth", index, |point| {
            let Some(dir) = (point.tangent_out - point.tangent_in).try_normalize(EPSILON) else {
                return;
            };
            point.tangent_out = dir * point.tangent_out.magnitude();
            point.tangent_in = -dir * point.tangent_in.magnitude();
        })
    }

    /// Points `tangent_in` opposite `tangent_out`, keeping its length.
    pub fn make_aligned(&mut self, index: usize) -> Result<(), SplineError> {
        self.edit_handles("make_aligned", index, |point| {
            let Some(dir) = point.tangent_out.try_normalize(EPSILON) else {
                return;
            };
            point.tangent_in = -dir * point.tangent_in.magnitude();
        })
    }

    /// Copies one handle onto the other, negated.
    pub fn mirror_tangent(&mut self, index: usize, out_to_in: bool) -> Result<(), SplineError> {
        self.edit_handles("mirror_tangent", index, |point| {
            if out_to_in {
                point.tangent_in = -point.tangent_out;
            } else {
                point.tangent_out = -point.tangent_in;
            }
        })
    }

    /// Regenerates every handle from neighbouring positions using `tension`
    /// and the current `end_mode`. Call after switching to or from Loop.
    pub fn auto_generate_tangents(&mut self) {
        let tension = self.tension;
        let looping = self.end_mode == EndMode::Loop;
        compute_smooth_tangents(self.points_mut(), tension, looping);
        self.invalidate_cache();
    }

    fn edit_handles(
        &mut self,
        op: &str,
        index: usize,
        edit: impl FnOnce(&mut SplinePoint),
    ) -> Result<(), SplineError> {
        let len = self.point_count();
        let Some(point) = self.points_mut().get_mut(index) else {
            warn!("{op}: index {index} out of range ({len} points)");
            return Err(SplineError::IndexOutOfRange { index, len });
        };
        edit(point);
        self.invalidate_cache();
        Ok(())
    }
}
