//! Stateless per-segment basis functions.
//!
//! Every kernel takes the four control values of one segment and a local
//! parameter in `[0, 1]`. Derivatives are with respect to that local parameter.

use crate::math::Float3;

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

pub fn cubic_bezier(p: &[Float3; 4], t: f32) -> Float3 {
    let u = 1.0 - t;
    let t2 = t * t;
    let u2 = u * u;

    p[0] * (u2 * u) + p[1] * (3.0 * u2 * t) + p[2] * (3.0 * u * t2) + p[3] * (t2 * t)
}

/// Three times the quadratic Bezier of the control-point differences.
pub fn cubic_bezier_derivative(p: &[Float3; 4], t: f32) -> Float3 {
    let u = 1.0 - t;

    (p[1] - p[0]) * (3.0 * u * u) + (p[2] - p[1]) * (6.0 * u * t) + (p[3] - p[2]) * (3.0 * t * t)
}

/// Uniform Catmull-Rom through `p[1]` (t = 0) and `p[2]` (t = 1).
pub fn catmull_rom_uniform(p: &[Float3; 4], t: f32) -> Float3 {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * ((2.0 * p[1])
        + (-p[0] + p[2]) * t
        + (2.0 * p[0] - 5.0 * p[1] + 4.0 * p[2] - p[3]) * t2
        + (-p[0] + 3.0 * p[1] - 3.0 * p[2] + p[3]) * t3)
}

pub fn catmull_rom_uniform_derivative(p: &[Float3; 4], t: f32) -> Float3 {
    0.5 * ((-p[0] + p[2])
        + (2.0 * p[0] - 5.0 * p[1] + 4.0 * p[2] - p[3]) * (2.0 * t)
        + (-p[0] + 3.0 * p[1] - 3.0 * p[2] + p[3]) * (3.0 * t * t))
}

/// Uniform cubic B-spline. Approximates `p[1]`..`p[2]` without passing through them.
pub fn bspline_uniform(p: &[Float3; 4], t: f32) -> Float3 {
    let u = 1.0 - t;
    let t2 = t * t;
    let t3 = t2 * t;

    (p[0] * (u * u * u)
        + p[1] * (3.0 * t3 - 6.0 * t2 + 4.0)
        + p[2] * (-3.0 * t3 + 3.0 * t2 + 3.0 * t + 1.0)
        + p[3] * t3)
        * (1.0 / 6.0)
}

pub fn bspline_uniform_derivative(p: &[Float3; 4], t: f32) -> Float3 {
    let u = 1.0 - t;
    let t2 = t * t;

    (p[0] * (-3.0 * u * u)
        + p[1] * (9.0 * t2 - 12.0 * t)
        + p[2] * (-9.0 * t2 + 6.0 * t + 3.0)
        + p[3] * (3.0 * t2))
        * (1.0 / 6.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TOLERANCE: f32 = 1e-5;

    fn curved() -> [Float3; 4] {
        [
            Float3::new(0.0, 0.0, 0.0),
            Float3::new(1.0, 2.0, 0.0),
            Float3::new(3.0, 2.0, 1.0),
            Float3::new(4.0, 0.0, 0.0),
        ]
    }

    /// Central difference of `f` at `t`.
    fn numeric_derivative(f: fn(&[Float3; 4], f32) -> Float3, p: &[Float3; 4], t: f32) -> Float3 {
        let h = 1e-3;
        (f(p, t + h) - f(p, t - h)) * (0.5 / h)
    }

    fn assert_close(a: Float3, b: Float3, epsilon: f32) {
        assert_relative_eq!(a.x, b.x, epsilon = epsilon);
        assert_relative_eq!(a.y, b.y, epsilon = epsilon);
        assert_relative_eq!(a.z, b.z, epsilon = epsilon);
    }

    #[test]
    fn lerp_endpoints() {
        assert_relative_eq!(lerp(2.0, 4.0, 0.0), 2.0, epsilon = TOLERANCE);
        assert_relative_eq!(lerp(2.0, 4.0, 0.5), 3.0, epsilon = TOLERANCE);
        assert_relative_eq!(lerp(2.0, 4.0, 1.0), 4.0, epsilon = TOLERANCE);
    }

    #[test]
    fn bezier_hits_endpoints() {
        let p = curved();
        assert_close(cubic_bezier(&p, 0.0), p[0], TOLERANCE);
        assert_close(cubic_bezier(&p, 1.0), p[3], TOLERANCE);
    }

    #[test]
    fn bezier_derivative_matches_numeric() {
        let p = curved();
        for t in [0.2, 0.5, 0.8] {
            assert_close(
                cubic_bezier_derivative(&p, t),
                numeric_derivative(cubic_bezier, &p, t),
                1e-2,
            );
        }
    }

    #[test]
    fn catmull_rom_passes_through_inner_points() {
        let p = curved();
        assert_close(catmull_rom_uniform(&p, 0.0), p[1], TOLERANCE);
        assert_close(catmull_rom_uniform(&p, 1.0), p[2], TOLERANCE);
    }

    #[test]
    fn catmull_rom_derivative_matches_numeric() {
        let p = curved();
        for t in [0.2, 0.5, 0.8] {
            assert_close(
                catmull_rom_uniform_derivative(&p, t),
                numeric_derivative(catmull_rom_uniform, &p, t),
                1e-2,
            );
        }
    }

    #[test]
    fn bspline_starts_at_weighted_average() {
        let p = curved();
        let expected = (p[0] + p[1] * 4.0 + p[2]) * (1.0 / 6.0);
        assert_close(bspline_uniform(&p, 0.0), expected, TOLERANCE);
    }

    #[test]
    fn bspline_derivative_matches_numeric() {
        let p = curved();
        for t in [0.2, 0.5, 0.8] {
            assert_close(
                bspline_uniform_derivative(&p, t),
                numeric_derivative(bspline_uniform, &p, t),
                1e-2,
            );
        }
    }

    #[test]
    fn bspline_weights_sum_to_one() {
        let p = [Float3::splat(1.0); 4];
        for t in [0.0, 0.3, 0.7, 1.0] {
            assert_close(bspline_uniform(&p, t), Float3::splat(1.0), TOLERANCE);
        }
    }
}
