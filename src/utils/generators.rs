use std::f32::consts::{FRAC_PI_2, TAU};

use crate::curve::{
    CatmullRom, Curve, EndMode, Spline, SplinePoint, BEZIER_CIRCLE_KAPPA, EPSILON,
};
use crate::math::{Float3, Quaternion};

/// Rotation taking the XZ plane onto the plane with the given normal.
fn plane_rotation(normal: Float3) -> Quaternion {
    match normal.try_normalize(EPSILON) {
        Some(n) => Quaternion::from_rotation_arc(Float3::UP, n),
        None => Quaternion::IDENTITY,
    }
}

/// `segments` points evenly spaced on a horizontal circle, first point on +X.
///
/// The first point is not repeated; use [`EndMode::Loop`] to close it.
pub fn make_circle(center: Float3, radius: f32, segments: usize) -> Vec<SplinePoint> {
    (0..segments)
        .map(|i| {
            let angle = TAU * i as f32 / segments as f32;
            SplinePoint::new(center + Float3::new(angle.cos(), 0.0, angle.sin()) * radius)
        })
        .collect()
}

/// Helix rising along +Y, `turns * points_per_turn + 1` points from `center`
/// to `center + height`.
pub fn make_helix(
    center: Float3,
    radius: f32,
    height: f32,
    turns: f32,
    points_per_turn: usize,
) -> Vec<SplinePoint> {
    let total = (turns.max(0.0) * points_per_turn as f32).round() as usize;
    if total == 0 {
        return vec![SplinePoint::new(center + Float3::RIGHT * radius)];
    }
    (0..=total)
        .map(|i| {
            let s = i as f32 / total as f32;
            let angle = TAU * turns * s;
            let offset = Float3::new(angle.cos() * radius, height * s, angle.sin() * radius);
            SplinePoint::new(center + offset)
        })
        .collect()
}

/// Horizontal figure-eight (lemniscate of Gerono) crossing itself at `center`.
///
/// Spans `size` on either side along X and `size / 2` along Z. Not closed;
/// use [`EndMode::Loop`].
pub fn make_figure8(center: Float3, size: f32, segments: usize) -> Vec<SplinePoint> {
    (0..segments)
        .map(|i| {
            let angle = TAU * i as f32 / segments as f32;
            let offset = Float3::new(angle.sin(), 0.0, angle.sin() * angle.cos()) * size;
            SplinePoint::new(center + offset)
        })
        .collect()
}

/// Centripetal Catmull-Rom spline through `points`.
pub fn create_smooth_path(points: &[Float3], looping: bool) -> Spline {
    let mut spline = Spline::new(Curve::CatmullRom(CatmullRom::default()));
    spline.end_mode = if looping { EndMode::Loop } else { EndMode::Clamp };
    spline.set_points(points.iter().copied().map(SplinePoint::from).collect());
    spline
}

/// Catmull-Rom path with per-point roll. Points without a roll entry get 0.
pub fn create_camera_path(positions: &[Float3], rolls: &[f32]) -> Spline {
    let points = positions
        .iter()
        .enumerate()
        .map(|(i, &position)| {
            SplinePoint::new(position).with_roll(rolls.get(i).copied().unwrap_or(0.0))
        })
        .collect();
    Spline::from_points(Curve::CatmullRom(CatmullRom::default()), points)
}

/// Bezier spline through `points` with generated handles.
///
/// `smoothness` 1 gives full Catmull-Rom-length handles, 0 gives straight segments.
pub fn create_bezier_from_path(points: &[Float3], smoothness: f32) -> Spline {
    let mut spline = Spline::from_points(
        Curve::Bezier,
        points.iter().copied().map(SplinePoint::from).collect(),
    );
    spline.tension = 1.0 - smoothness;
    spline.auto_generate_tangents();
    spline
}

/// Closed four-point Bezier circle in the plane perpendicular to `normal`.
pub fn create_bezier_circle(center: Float3, radius: f32, normal: Float3) -> Spline {
    let rotation = plane_rotation(normal);
    let handle = BEZIER_CIRCLE_KAPPA * radius;

    let points = (0..4)
        .map(|i| {
            let angle = i as f32 * FRAC_PI_2;
            let (sin, cos) = angle.sin_cos();
            let position = center + rotation.mul_vec(Float3::new(cos, 0.0, sin) * radius);
            let tangent = rotation.mul_vec(Float3::new(-sin, 0.0, cos) * handle);
            SplinePoint::with_tangents(position, -tangent, tangent)
        })
        .collect();

    let mut spline = Spline::new(Curve::Bezier);
    spline.end_mode = EndMode::Loop;
    spline.set_points(points);
    spline
}

/// Open Bezier arc from `start_angle` to `end_angle` (radians), one segment
/// per quarter turn or less.
pub fn create_bezier_arc(
    center: Float3,
    radius: f32,
    start_angle: f32,
    end_angle: f32,
    normal: Float3,
) -> Spline {
    let rotation = plane_rotation(normal);
    let sweep = end_angle - start_angle;
    let segments = ((sweep.abs() / FRAC_PI_2).ceil() as usize).max(1);
    let step = sweep / segments as f32;
    // signed, so handles follow the sweep direction
    let handle = radius * 4.0 / 3.0 * (step / 4.0).tan();

    let points = (0..=segments)
        .map(|i| {
            let angle = start_angle + step * i as f32;
            let (sin, cos) = angle.sin_cos();
            let position = center + rotation.mul_vec(Float3::new(cos, 0.0, sin) * radius);
            let tangent = rotation.mul_vec(Float3::new(-sin, 0.0, cos) * handle);
            SplinePoint::with_tangents(position, -tangent, tangent)
        })
        .collect();

    Spline::from_points(Curve::Bezier, points)
}
