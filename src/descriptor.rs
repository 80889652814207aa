//! Owned spline settings for serialization and construction.

use serde::{Deserialize, Serialize};

use crate::curve::{
    CatmullRom, Curve, EndMode, SamplingParams, Spline, SplineMode, SplinePoint, DEFAULT_ALPHA,
    DEFAULT_TENSION,
};

/// Everything needed to rebuild a [`Spline`]. Unlike `Spline`, this holds no cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplineDescriptor {
    pub mode: SplineMode,
    pub end_mode: EndMode,
    /// Catmull-Rom only.
    pub alpha: f32,
    pub auto_tangents: bool,
    pub tension: f32,
    pub sampling: SamplingParams,
    pub points: Vec<SplinePoint>,
}

impl SplineDescriptor {
    pub fn new(mode: SplineMode) -> Self {
        Self {
            mode,
            end_mode: EndMode::default(),
            alpha: DEFAULT_ALPHA,
            auto_tangents: false,
            tension: DEFAULT_TENSION,
            sampling: SamplingParams::default(),
            points: Vec::new(),
        }
    }

    pub fn curve(&self) -> Curve {
        match self.mode {
            SplineMode::CatmullRom => Curve::CatmullRom(CatmullRom::new(self.alpha)),
            mode => Curve::from_mode(mode),
        }
    }

    /// Builds the spline with the stored handles as authored.
    ///
    /// `auto_tangents` is switched on only after the points are loaded, so
    /// it affects later edits and never rewrites the saved handles.
    pub fn build(&self) -> Spline {
        let mut spline = Spline::new(self.curve());
        spline.end_mode = self.end_mode;
        spline.tension = self.tension;
        spline.sampling = self.sampling;
        spline.set_points(self.points.clone());
        spline.auto_tangents = self.auto_tangents;
        spline
    }

    pub fn from_spline(spline: &Spline) -> Self {
        Self {
            mode: spline.mode(),
            end_mode: spline.end_mode,
            alpha: spline.curve.alpha().unwrap_or(DEFAULT_ALPHA),
            auto_tangents: spline.auto_tangents,
            tension: spline.tension,
            sampling: spline.sampling,
            points: spline.points().to_vec(),
        }
    }
}

impl Default for SplineDescriptor {
    fn default() -> Self {
        Self::new(SplineMode::default())
    }
}

/// Empty spline using the evaluator for `mode`, with default settings.
pub fn create_spline(mode: SplineMode) -> Spline {
    Spline::new(Curve::from_mode(mode))
}
