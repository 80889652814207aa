use std::cell::RefCell;

use log::warn;

use super::arc_length::ArcLengthTable;
use super::constants::{DEFAULT_TENSION, EPSILON};
use super::kernels;
use super::mode::{EndMode, SplineMode};
use super::point::SplinePoint;
use super::result::SplineEvalResult;
use super::sampling_params::SamplingParams;
use super::strategy::Curve;
use super::tangents::compute_smooth_tangents;
use crate::error::SplineError;
use crate::math::{Aabb, Float3, Frame};

/// A curve through an ordered list of control points.
///
/// The spline owns its points and a lazily built arc-length table. Every
/// point edit drops the table; the next length query rebuilds it. The table
/// sits in a `RefCell`, so a `Spline` can be queried through `&self` but is
/// not `Sync`: concurrent readers need their own instance or external locking.
#[derive(Debug, Clone)]
pub struct Spline {
    points: Vec<SplinePoint>,
    pub curve: Curve,
    pub end_mode: EndMode,
    /// Bezier only: regenerate handles with [`compute_smooth_tangents`] after structural edits.
    ///
    /// Handles are built for the `end_mode` current at the edit. Changing
    /// `end_mode` later leaves them as they are; call
    /// [`auto_generate_tangents`](Self::auto_generate_tangents) to rebuild them.
    pub auto_tangents: bool,
    pub tension: f32,
    pub sampling: SamplingParams,
    pub(super) cache: RefCell<ArcLengthTable>,
}

impl Spline {
    pub fn new(curve: Curve) -> Self {
        Self {
            points: Vec::new(),
            curve,
            end_mode: EndMode::Clamp,
            auto_tangents: false,
            tension: DEFAULT_TENSION,
            sampling: SamplingParams::default(),
            cache: RefCell::new(ArcLengthTable::default()),
        }
    }

    pub fn from_points(curve: Curve, points: Vec<SplinePoint>) -> Self {
        let mut spline = Self::new(curve);
        spline.set_points(points);
        spline
    }

    pub fn mode(&self) -> SplineMode {
        self.curve.mode()
    }

    // ---------------------------------------------------------------------
    // Point list
    // ---------------------------------------------------------------------

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn points(&self) -> &[SplinePoint] {
        &self.points
    }

    pub fn get_point(&self, index: usize) -> Option<&SplinePoint> {
        self.points.get(index)
    }

    pub fn set_point(&mut self, index: usize, point: SplinePoint) -> Result<(), SplineError> {
        let len = self.points.len();
        let Some(slot) = self.points.get_mut(index) else {
            warn!("set_point: index {index} out of range ({len} points)");
            return Err(SplineError::IndexOutOfRange { index, len });
        };
        *slot = point;
        self.invalidate_cache();
        Ok(())
    }

    pub fn set_points(&mut self, points: Vec<SplinePoint>) {
        self.points = points;
        self.structure_changed();
    }

    pub fn add_point(&mut self, point: SplinePoint) {
        self.points.push(point);
        self.structure_changed();
    }

    /// Inserts before `index`; indices past the end append.
    pub fn insert_point(&mut self, index: usize, point: SplinePoint) {
        let index = index.min(self.points.len());
        self.points.insert(index, point);
        self.structure_changed();
    }

    pub fn remove_point(&mut self, index: usize) -> Result<SplinePoint, SplineError> {
        let len = self.points.len();
        if index >= len {
            warn!("remove_point: index {index} out of range ({len} points)");
            return Err(SplineError::IndexOutOfRange { index, len });
        }
        let removed = self.points.remove(index);
        self.structure_changed();
        Ok(removed)
    }

    pub fn clear_points(&mut self) {
        self.points.clear();
        self.invalidate_cache();
    }

    /// Mutable access for the editing operations; callers must invalidate.
    pub(super) fn points_mut(&mut self) -> &mut Vec<SplinePoint> {
        &mut self.points
    }

    pub(super) fn invalidate_cache(&mut self) {
        self.cache.get_mut().invalidate();
    }

    fn structure_changed(&mut self) {
        if self.auto_tangents && self.curve == Curve::Bezier {
            compute_smooth_tangents(&mut self.points, self.tension, self.end_mode == EndMode::Loop);
        }
        self.invalidate_cache();
    }

    // ---------------------------------------------------------------------
    // Segment mapping
    // ---------------------------------------------------------------------

    pub fn segment_count(&self) -> usize {
        self.end_mode.segment_count(self.points.len())
    }

    pub fn normalize_t(&self, t: f32) -> f32 {
        self.end_mode.normalize(t)
    }

    /// Maps a global parameter to `(segment_index, local_t)`.
    ///
    /// `local_t` is in `[0, 1]`; `t = 1` on an open spline lands at the end of
    /// the last segment. Returns `(0, 0.0)` when there are no segments.
    pub fn get_segment(&self, t: f32) -> (usize, f32) {
        let segments = self.segment_count();
        if segments == 0 {
            return (0, 0.0);
        }
        let scaled = self.normalize_t(t) * segments as f32;
        let segment = (scaled.floor() as usize).min(segments - 1);
        let local_t = (scaled - segment as f32).clamp(0.0, 1.0);
        (segment, local_t)
    }

    /// Indices of the two control points bounding `segment`.
    pub(crate) fn segment_indices(&self, segment: usize) -> (usize, usize) {
        let n = self.points.len();
        let next = if self.end_mode == EndMode::Loop {
            (segment + 1) % n
        } else {
            (segment + 1).min(n - 1)
        };
        (segment, next)
    }

    pub(crate) fn segment_position(&self, segment: usize, local_t: f32) -> Float3 {
        match self.curve {
            Curve::Linear => {
                let (a, b) = self.segment_indices(segment);
                self.points[a].position.lerp(self.points[b].position, local_t)
            }
            Curve::Bezier => kernels::cubic_bezier(&self.bezier_controls(segment), local_t),
            Curve::CatmullRom(cr) => cr.position(&self.stencil(segment), local_t),
            Curve::BSpline => kernels::bspline_uniform(&self.stencil(segment), local_t),
        }
    }

    pub(crate) fn segment_derivative(&self, segment: usize, local_t: f32) -> Float3 {
        match self.curve {
            Curve::Linear => {
                let (a, b) = self.segment_indices(segment);
                self.points[b].position - self.points[a].position
            }
            Curve::Bezier => {
                kernels::cubic_bezier_derivative(&self.bezier_controls(segment), local_t)
            }
            Curve::CatmullRom(cr) => cr.derivative(&self.stencil(segment), local_t),
            Curve::BSpline => kernels::bspline_uniform_derivative(&self.stencil(segment), local_t),
        }
    }

    /// Unit tangent, falling back to the chord and then to +Z on degenerate geometry.
    pub(crate) fn segment_tangent(&self, segment: usize, local_t: f32) -> Float3 {
        self.segment_derivative(segment, local_t)
            .try_normalize(EPSILON)
            .or_else(|| {
                let (a, b) = self.segment_indices(segment);
                (self.points[b].position - self.points[a].position).try_normalize(EPSILON)
            })
            .unwrap_or(Float3::FORWARD)
    }

    // ---------------------------------------------------------------------
    // Evaluation
    // ---------------------------------------------------------------------

    pub fn evaluate(&self, t: f32) -> SplineEvalResult {
        match self.points.as_slice() {
            [] => return SplineEvalResult::default(),
            [only] => return SplineEvalResult::at_point(only),
            _ => {}
        }

        let (segment, local_t) = self.get_segment(t);
        let (a, b) = self.segment_indices(segment);
        let (pa, pb) = (&self.points[a], &self.points[b]);

        let position = self.segment_position(segment, local_t);
        let roll = kernels::lerp(pa.roll, pb.roll, local_t);
        let custom_data = kernels::lerp(pa.custom_data, pb.custom_data, local_t);
        let frame = Frame::from_tangent(self.segment_tangent(segment, local_t)).with_roll(roll);

        SplineEvalResult::new(position, frame, roll, custom_data)
    }

    pub fn evaluate_position(&self, t: f32) -> Float3 {
        match self.points.as_slice() {
            [] => Float3::ZERO,
            [only] => only.position,
            _ => {
                let (segment, local_t) = self.get_segment(t);
                self.segment_position(segment, local_t)
            }
        }
    }

    pub fn evaluate_tangent(&self, t: f32) -> Float3 {
        if self.points.len() < 2 {
            return Float3::FORWARD;
        }
        let (segment, local_t) = self.get_segment(t);
        self.segment_tangent(segment, local_t)
    }

    // ---------------------------------------------------------------------
    // Geometry
    // ---------------------------------------------------------------------

    /// Box containing the whole curve.
    ///
    /// Bezier curves are bounded by their control hull; Catmull-Rom and
    /// B-spline curves are sampled since they can leave the hull of their points.
    pub fn get_bounds(&self) -> Aabb {
        let Some(first) = self.points.first() else {
            return Aabb::default();
        };
        let mut bounds = Aabb::from_point(first.position);
        for point in &self.points {
            bounds.expand(point.position);
        }
        if self.points.len() < 2 {
            return bounds;
        }

        match self.curve {
            Curve::Linear => {}
            Curve::Bezier => {
                for point in &self.points {
                    bounds.expand(point.position + point.tangent_in);
                    bounds.expand(point.position + point.tangent_out);
                }
            }
            Curve::CatmullRom(_) | Curve::BSpline => {
                let samples = self.sampling.bounds_samples.max(1);
                for i in 0..=samples {
                    bounds.expand(self.evaluate_position(i as f32 / samples as f32));
                }
            }
        }
        bounds
    }

    /// Polyline approximation with `subdivisions_per_segment` samples per segment.
    ///
    /// Each segment contributes its start but not its end, and the curve's
    /// final position closes the list, so the result holds
    /// `segment_count * subdivisions + 1` points without duplicates.
    pub fn tessellate(&self, subdivisions_per_segment: usize) -> Vec<Float3> {
        match self.points.as_slice() {
            [] => return Vec::new(),
            [only] => return vec![only.position],
            _ => {}
        }

        let subdivisions = subdivisions_per_segment.max(1);
        let segments = self.segment_count();
        let mut result = Vec::with_capacity(segments * subdivisions + 1);

        for segment in 0..segments {
            for i in 0..subdivisions {
                result.push(self.segment_position(segment, i as f32 / subdivisions as f32));
            }
        }
        result.push(self.segment_position(segments - 1, 1.0));

        result
    }
}

impl Default for Spline {
    fn default() -> Self {
        Self::new(Curve::default())
    }
}
