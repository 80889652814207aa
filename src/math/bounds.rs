use super::vector::Float3;

/// Axis-aligned bounding box.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Aabb {
    pub min: Float3,
    pub max: Float3,
}

impl Aabb {
    pub const fn new(min: Float3, max: Float3) -> Self {
        Self { min, max }
    }

    pub const fn from_point(point: Float3) -> Self {
        Self::new(point, point)
    }

    pub fn expand(&mut self, point: Float3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    pub fn contains(&self, point: Float3) -> bool {
        point.x >= self.min.x
            && point.y >= self.min.y
            && point.z >= self.min.z
            && point.x <= self.max.x
            && point.y <= self.max.y
            && point.z <= self.max.z
    }

    pub fn center(&self) -> Float3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Float3 {
        self.max - self.min
    }
}
