use super::vector::{Float3, Quaternion};

/// Orthonormal moving frame along a curve.
///
/// Right-handed basis with three orthogonal unit vectors:
/// - `tangent`: direction of travel
/// - `normal`: "up" relative to the curve
/// - `binormal`: `tangent x up`, pointing to the side
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frame {
    pub tangent: Float3,
    pub normal: Float3,
    pub binormal: Float3,
}

impl Frame {
    pub const fn new(tangent: Float3, normal: Float3, binormal: Float3) -> Self {
        Self {
            tangent,
            normal,
            binormal,
        }
    }

    /// Builds a frame around `tangent` using world up as the reference.
    ///
    /// Falls back to world right as the reference when the tangent is nearly vertical,
    /// so the cross product never collapses.
    pub fn from_tangent(tangent: Float3) -> Self {
        let tangent = tangent.try_normalize(f32::EPSILON).unwrap_or(Float3::FORWARD);
        let up = if tangent.dot(Float3::UP).abs() > 0.99 {
            Float3::RIGHT
        } else {
            Float3::UP
        };
        let binormal = tangent.cross(up).normalize();
        let normal = binormal.cross(tangent);
        Self::new(tangent, normal, binormal)
    }

    /// Twists normal and binormal around the tangent by `roll` radians.
    pub fn with_roll(self, roll: f32) -> Self {
        if roll.abs() < 1e-4 {
            return self;
        }
        let q = Quaternion::from_axis_angle(self.tangent, roll);
        Self::new(
            self.tangent,
            q.mul_vec(self.normal).normalize(),
            q.mul_vec(self.binormal).normalize(),
        )
    }

    pub const DEFAULT: Self = Self::new(Float3::FORWARD, Float3::UP, Float3::new(-1.0, 0.0, 0.0));
}

impl Default for Frame {
    fn default() -> Self {
        Self::DEFAULT
    }
}
