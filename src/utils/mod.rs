//! Point generators, preset spline builders and sampling diagnostics.

mod generators;
mod sampling;

pub use crate::curve::compute_smooth_tangents;
pub use generators::{
    create_bezier_arc, create_bezier_circle, create_bezier_from_path, create_camera_path,
    create_smooth_path, make_circle, make_figure8, make_helix,
};
pub use sampling::{calculate_total_twist, sample_uniform};
