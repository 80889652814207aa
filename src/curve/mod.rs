//! Spline evaluation over an owned list of control points.
//!
//! A [`Spline`] picks its per-segment evaluator from the closed [`Curve`]
//! enum and maps a global parameter `t` onto segments through its
//! [`EndMode`]. Arc length is integrated lazily into a cached table that any
//! point or settings edit invalidates.

mod arc_length;
mod bezier;
mod catmull_rom;
mod mode;
mod nearest;
mod point;
mod result;
mod sampling_params;
mod spline;
mod strategy;
mod tangents;

pub mod constants;
pub mod kernels;

pub use catmull_rom::CatmullRom;
pub use constants::{BEZIER_CIRCLE_KAPPA, DEFAULT_ALPHA, DEFAULT_TENSION, EPSILON};
pub use mode::{EndMode, SplineMode};
pub use point::SplinePoint;
pub use result::{SplineEvalResult, SplineNearestResult};
pub use sampling_params::SamplingParams;
pub use spline::Spline;
pub use strategy::Curve;
pub use tangents::compute_smooth_tangents;
