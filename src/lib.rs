//! KexSpline - spline evaluation for camera paths, rails and nav-paths.
//!
//! # Architecture
//!
//! Layered modules with strict inward-only dependencies:
//!
//! - **math**: Vector primitives (Float3, Quaternion, Frame, Aabb)
//! - **curve**: Control points, evaluators, the `Spline` owner, arc length, nearest point
//! - **utils**: Point generators, preset builders, uniform sampling
//! - **descriptor**: Owned, serializable settings and the `create_spline` factory
//!
//! # Usage
//!
//! ```
//! use kexspline::{create_spline, Float3, SplineMode, SplinePoint};
//!
//! let mut spline = create_spline(SplineMode::CatmullRom);
//! for x in [0.0, 5.0, 10.0, 15.0] {
//!     spline.add_point(SplinePoint::new(Float3::new(x, 0.0, 0.0)));
//! }
//! let halfway = spline.evaluate_at_distance(spline.get_length() / 2.0);
//! assert!((halfway.position.x - 7.5).abs() < 1e-3);
//! ```
//!
//! A `Spline` caches arc length behind a `RefCell`: query it from one thread.

pub mod curve;
pub mod descriptor;
pub mod error;
pub mod math;
pub mod utils;

// Re-export commonly used types at crate root
pub use curve::{
    CatmullRom, Curve, EndMode, SamplingParams, Spline, SplineEvalResult, SplineMode,
    SplineNearestResult, SplinePoint,
};
pub use descriptor::{create_spline, SplineDescriptor};
pub use error::SplineError;
pub use math::{Aabb, Float3, Frame, Quaternion};
