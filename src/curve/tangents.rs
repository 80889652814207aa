use super::point::SplinePoint;
use crate::math::Float3;

/// Rewrites every point's Bezier handles from its neighbours.
///
/// Interior points get the cardinal tangent `m = (1 - tension) * (next - prev) / 2`;
/// open ends use the one-sided difference. Handles are stored as thirds of the
/// tangent (`tangent_out = m / 3`, `tangent_in = -m / 3`), which makes the
/// Bezier segments match a cardinal spline. Tension 0 gives Catmull-Rom
/// handles, tension 1 gives zero-length handles.
pub fn compute_smooth_tangents(points: &mut [SplinePoint], tension: f32, looping: bool) {
    let n = points.len();
    if n < 2 {
        for point in points.iter_mut() {
            point.tangent_in = Float3::ZERO;
            point.tangent_out = Float3::ZERO;
        }
        return;
    }

    let scale = 1.0 - tension;
    let positions: Vec<Float3> = points.iter().map(|p| p.position).collect();

    for (i, point) in points.iter_mut().enumerate() {
        let m = if looping {
            let prev = positions[(i + n - 1) % n];
            let next = positions[(i + 1) % n];
            (next - prev) * (scale * 0.5)
        } else if i == 0 {
            (positions[1] - positions[0]) * scale
        } else if i == n - 1 {
            (positions[n - 1] - positions[n - 2]) * scale
        } else {
            (positions[i + 1] - positions[i - 1]) * (scale * 0.5)
        };
        point.tangent_out = m / 3.0;
        point.tangent_in = -m / 3.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TOLERANCE: f32 = 1e-5;

    fn line(count: usize) -> Vec<SplinePoint> {
        (0..count)
            .map(|i| SplinePoint::new(Float3::new(i as f32 * 3.0, 0.0, 0.0)))
            .collect()
    }

    #[test]
    fn evenly_spaced_line_gets_uniform_handles() {
        let mut points = line(4);
        compute_smooth_tangents(&mut points, 0.0, false);
        for point in &points {
            assert_relative_eq!(point.tangent_out.x, 1.0, epsilon = TOLERANCE);
            assert_relative_eq!(point.tangent_in.x, -1.0, epsilon = TOLERANCE);
        }
    }

    #[test]
    fn tension_scales_handles() {
        let mut points = line(3);
        compute_smooth_tangents(&mut points, 0.5, false);
        assert_relative_eq!(points[1].tangent_out.x, 0.5, epsilon = TOLERANCE);

        compute_smooth_tangents(&mut points, 1.0, false);
        assert!(points.iter().all(|p| p.tangent_out == Float3::ZERO));
    }

    #[test]
    fn looping_wraps_neighbours() {
        let mut points = vec![
            SplinePoint::new(Float3::new(0.0, 0.0, 0.0)),
            SplinePoint::new(Float3::new(6.0, 0.0, 0.0)),
            SplinePoint::new(Float3::new(6.0, 0.0, 6.0)),
        ];
        compute_smooth_tangents(&mut points, 0.0, true);
        // first point: (next - last) / 2 = ((6,0,0) - (6,0,6)) / 2 = (0,0,-3)
        assert_relative_eq!(points[0].tangent_out.z, -1.0, epsilon = TOLERANCE);
        assert_relative_eq!(points[0].tangent_out.x, 0.0, epsilon = TOLERANCE);
    }

    #[test]
    fn handles_are_opposed() {
        let mut points = vec![
            SplinePoint::new(Float3::new(0.0, 0.0, 0.0)),
            SplinePoint::new(Float3::new(2.0, 5.0, 1.0)),
            SplinePoint::new(Float3::new(7.0, -1.0, 3.0)),
        ];
        compute_smooth_tangents(&mut points, 0.3, false);
        for point in &points {
            assert_eq!(point.tangent_in, -point.tangent_out);
        }
    }

    #[test]
    fn single_point_gets_zero_handles() {
        let mut points = vec![SplinePoint::with_tangents(
            Float3::ZERO,
            Float3::splat(1.0),
            Float3::splat(1.0),
        )];
        compute_smooth_tangents(&mut points, 0.5, false);
        assert_eq!(points[0].tangent_in, Float3::ZERO);
        assert_eq!(points[0].tangent_out, Float3::ZERO);
    }
}
