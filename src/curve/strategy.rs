use super::catmull_rom::CatmullRom;
use super::mode::SplineMode;

/// Closed set of per-segment evaluation strategies.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Curve {
    /// Straight segments between control points (C0).
    Linear,
    /// Cubic Bezier using each point's authored `tangent_out`/`tangent_in` handles.
    Bezier,
    /// Interpolating Catmull-Rom with automatic tangents.
    CatmullRom(CatmullRom),
    /// Approximating uniform cubic B-spline.
    BSpline,
}

impl Curve {
    pub fn from_mode(mode: SplineMode) -> Self {
        match mode {
            SplineMode::Linear => Curve::Linear,
            SplineMode::Bezier => Curve::Bezier,
            SplineMode::CatmullRom => Curve::CatmullRom(CatmullRom::default()),
            SplineMode::BSpline => Curve::BSpline,
        }
    }

    pub fn mode(&self) -> SplineMode {
        match self {
            Curve::Linear => SplineMode::Linear,
            Curve::Bezier => SplineMode::Bezier,
            Curve::CatmullRom(_) => SplineMode::CatmullRom,
            Curve::BSpline => SplineMode::BSpline,
        }
    }

    /// Catmull-Rom alpha, if this is a Catmull-Rom curve.
    pub fn alpha(&self) -> Option<f32> {
        match self {
            Curve::CatmullRom(cr) => Some(cr.alpha),
            _ => None,
        }
    }
}

impl Default for Curve {
    fn default() -> Self {
        Curve::from_mode(SplineMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_round_trips_through_curve() {
        for mode in [
            SplineMode::Linear,
            SplineMode::Bezier,
            SplineMode::CatmullRom,
            SplineMode::BSpline,
        ] {
            assert_eq!(Curve::from_mode(mode).mode(), mode);
        }
    }

    #[test]
    fn default_is_centripetal_catmull_rom() {
        assert_eq!(Curve::default().alpha(), Some(0.5));
        assert_eq!(Curve::Bezier.alpha(), None);
    }
}
