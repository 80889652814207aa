use log::trace;

use super::mode::EndMode;
use super::result::SplineNearestResult;
use super::spline::Spline;
use crate::math::Float3;

/// 1 / golden ratio
const INV_PHI: f32 = 0.618_034;

impl Spline {
    /// Closest point on the curve to `query`.
    ///
    /// A coarse pass samples every segment, then a golden-section search
    /// refines the best sample within one coarse step on either side.
    /// `segment_index` is the segment holding the returned `t`.
    ///
    /// A non-finite query has no nearest point: the result sits at the start
    /// of the curve (`t = 0`) with an infinite distance.
    pub fn find_nearest_point(&self, query: Float3) -> SplineNearestResult {
        if !query.is_finite() {
            return SplineNearestResult {
                t: 0.0,
                position: self.evaluate_position(0.0),
                distance: f32::INFINITY,
                segment_index: 0,
            };
        }
        match self.points() {
            [] => {
                return SplineNearestResult {
                    distance: query.magnitude(),
                    ..Default::default()
                }
            }
            [only] => {
                return SplineNearestResult {
                    t: 0.0,
                    position: only.position,
                    distance: query.distance(only.position),
                    segment_index: 0,
                }
            }
            _ => {}
        }

        let segments = self.segment_count();
        let coarse = self.sampling.nearest_coarse_samples.max(1);

        let mut best_d2 = f32::MAX;
        let mut best_t = 0.0;
        for segment in 0..segments {
            for i in 0..=coarse {
                let local_t = i as f32 / coarse as f32;
                let d2 = self.segment_position(segment, local_t).distance_squared(query);
                if d2 < best_d2 {
                    best_d2 = d2;
                    best_t = (segment as f32 + local_t) / segments as f32;
                }
            }
        }

        let step = 1.0 / (segments * coarse) as f32;
        let (mut lo, mut hi) = (best_t - step, best_t + step);
        if self.end_mode != EndMode::Loop {
            lo = lo.max(0.0);
            hi = hi.min(1.0);
        }
        let tolerance = self.sampling.nearest_tolerance / segments as f32;
        let refined = golden_section(
            lo,
            hi,
            tolerance,
            self.sampling.nearest_max_iterations,
            |t| self.evaluate_position(t).distance_squared(query),
        );
        let refined_d2 = self.evaluate_position(refined).distance_squared(query);
        if refined_d2 < best_d2 {
            best_d2 = refined_d2;
            best_t = refined;
        }

        let t = self.normalize_t(best_t);
        let (segment_index, _) = self.get_segment(t);
        trace!("nearest point: segment {segment_index}, t {t:.5}, distance {:.5}", best_d2.sqrt());

        SplineNearestResult {
            t,
            position: self.evaluate_position(t),
            distance: best_d2.sqrt(),
            segment_index,
        }
    }

    pub fn find_nearest_t(&self, query: Float3) -> f32 {
        self.find_nearest_point(query).t
    }
}

/// Minimizes a unimodal `f` on `[lo, hi]`.
fn golden_section(
    mut lo: f32,
    mut hi: f32,
    tolerance: f32,
    max_iterations: usize,
    f: impl Fn(f32) -> f32,
) -> f32 {
    let mut c = hi - INV_PHI * (hi - lo);
    let mut d = lo + INV_PHI * (hi - lo);
    let mut fc = f(c);
    let mut fd = f(d);

    for _ in 0..max_iterations {
        if hi - lo < tolerance {
            break;
        }
        if fc < fd {
            hi = d;
            d = c;
            fd = fc;
            c = hi - INV_PHI * (hi - lo);
            fc = f(c);
        } else {
            lo = c;
            c = d;
            fc = fd;
            d = lo + INV_PHI * (hi - lo);
            fd = f(d);
        }
    }
    (lo + hi) * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::{Curve, SplinePoint};
    use approx::assert_relative_eq;

    fn p(x: f32, y: f32, z: f32) -> SplinePoint {
        SplinePoint::new(Float3::new(x, y, z))
    }

    fn straight() -> Spline {
        Spline::from_points(
            Curve::default(),
            vec![p(0.0, 0.0, 0.0), p(5.0, 0.0, 0.0), p(10.0, 0.0, 0.0), p(15.0, 0.0, 0.0)],
        )
    }

    #[test]
    fn golden_section_finds_parabola_minimum() {
        let t = golden_section(0.0, 1.0, 1e-6, 64, |t| (t - 0.3) * (t - 0.3));
        assert_relative_eq!(t, 0.3, epsilon = 1e-4);
    }

    #[test]
    fn golden_section_respects_iteration_cap() {
        let t = golden_section(0.0, 1.0, 0.0, 0, |t| (t - 0.9) * (t - 0.9));
        assert_relative_eq!(t, 0.5);
    }

    #[test_log::test]
    fn perpendicular_offset_from_midpoint() {
        let spline = straight();
        let result = spline.find_nearest_point(Float3::new(7.5, 3.0, 0.0));
        assert_relative_eq!(result.t, 0.5, epsilon = 1e-3);
        assert_relative_eq!(result.distance, 3.0, epsilon = 1e-3);
        assert_relative_eq!(result.position.x, 7.5, epsilon = 1e-2);
        assert_eq!(result.segment_index, 1);
        assert_relative_eq!(spline.find_nearest_t(Float3::new(7.5, 3.0, 0.0)), result.t);
    }

    #[test]
    fn refinement_beats_coarse_grid() {
        let spline = straight();
        // between coarse samples 0.5 apart in x
        let result = spline.find_nearest_point(Float3::new(6.23, -2.0, 0.0));
        assert_relative_eq!(result.position.x, 6.23, epsilon = 1e-2);
        assert_relative_eq!(result.distance, 2.0, epsilon = 1e-3);
    }

    #[test]
    fn query_past_open_end_clamps() {
        let spline = straight();
        let before = spline.find_nearest_point(Float3::new(-4.0, 0.0, 0.0));
        assert_eq!(before.t, 0.0);
        assert_relative_eq!(before.distance, 4.0, epsilon = 1e-4);

        let after = spline.find_nearest_point(Float3::new(20.0, 1.0, 0.0));
        assert_relative_eq!(after.t, 1.0, epsilon = 1e-5);
        assert_eq!(after.segment_index, 2);
    }

    #[test]
    fn loop_result_stays_in_unit_range() {
        let mut spline = Spline::from_points(
            Curve::Linear,
            vec![p(0.0, 0.0, 0.0), p(10.0, 0.0, 0.0), p(10.0, 0.0, 10.0), p(0.0, 0.0, 10.0)],
        );
        spline.end_mode = EndMode::Loop;
        // just before the first point along the closing edge
        let result = spline.find_nearest_point(Float3::new(-1.0, 0.0, 0.01));
        assert!((0.0..1.0).contains(&result.t));
        assert!(result.t > 0.99);
        // refinement crossed the seam, so the index follows the final t
        assert_eq!(result.segment_index, 3);
        assert_relative_eq!(result.position.x, 0.0, epsilon = 1e-3);
        assert_relative_eq!(result.distance, 1.0, epsilon = 1e-3);

        let closing = spline.find_nearest_point(Float3::new(-1.0, 0.0, 5.0));
        assert_eq!(closing.segment_index, 3);
        assert_relative_eq!(closing.t, 0.875, epsilon = 1e-3);
    }

    #[test]
    fn segment_index_matches_returned_t() {
        let spline = straight();
        for x in [0.3, 4.97, 5.02, 9.99, 10.04, 14.8] {
            let result = spline.find_nearest_point(Float3::new(x, 1.0, 0.0));
            assert_eq!(result.segment_index, spline.get_segment(result.t).0);
        }
    }

    #[test]
    fn non_finite_query_reports_infinite_distance() {
        let spline = straight();
        for query in [
            Float3::new(f32::NAN, 0.0, 0.0),
            Float3::new(0.0, f32::INFINITY, 0.0),
        ] {
            let result = spline.find_nearest_point(query);
            assert_eq!(result.t, 0.0);
            assert_eq!(result.segment_index, 0);
            assert_eq!(result.position, Float3::ZERO);
            assert_eq!(result.distance, f32::INFINITY);
        }
        let empty = Spline::default().find_nearest_point(Float3::new(f32::NAN, 0.0, 0.0));
        assert_eq!(empty.distance, f32::INFINITY);
    }

    #[test]
    fn degenerate_splines() {
        let query = Float3::new(3.0, 4.0, 0.0);
        let empty = Spline::default().find_nearest_point(query);
        assert_eq!(empty.t, 0.0);
        assert_relative_eq!(empty.distance, 5.0);

        let single = Spline::from_points(Curve::default(), vec![p(3.0, 0.0, 0.0)]);
        let result = single.find_nearest_point(query);
        assert_eq!(result.t, 0.0);
        assert_eq!(result.position, Float3::new(3.0, 0.0, 0.0));
        assert_relative_eq!(result.distance, 4.0);
    }
}
