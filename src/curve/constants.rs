/// Lengths, knot intervals and derivatives below this are treated as zero.
pub const EPSILON: f32 = 1e-4;

/// Centripetal Catmull-Rom.
pub const DEFAULT_ALPHA: f32 = 0.5;

pub const DEFAULT_TENSION: f32 = 0.5;

/// Handle length (as a fraction of the radius) for a quarter-circle cubic Bezier.
pub const BEZIER_CIRCLE_KAPPA: f32 = 0.552_284_8;
