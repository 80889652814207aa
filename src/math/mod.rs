//! Vector, frame and bounds primitives shared by every curve strategy.

mod bounds;
mod frame;
mod vector;

pub use bounds::Aabb;
pub use frame::Frame;
pub use vector::{Float3, Quaternion};
