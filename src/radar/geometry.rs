use super::PI2;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Fixed layout of the radar face, derived once from size and inset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarGeometry {
    pub size: f64,
    pub middle: f64,
    pub radius: f64,
}

impl RadarGeometry {
    pub fn new(size: f64, inset: f64) -> Self {
        let middle = size / 2.0;
        Self {
            size,
            middle,
            radius: middle - inset,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.middle, self.middle)
    }

    /// Point on the face circle at `angle` radians (y grows downwards).
    pub fn point_at(&self, angle: f64) -> Point {
        Point::new(
            self.middle + self.radius * angle.cos(),
            self.middle + self.radius * angle.sin(),
        )
    }
}

/// Angle swept since the previous step, capped below one full turn.
pub fn rotation_delta(speed: f64, elapsed_ms: f64) -> f64 {
    (speed * elapsed_ms.max(0.0)).min(PI2 - speed)
}

pub fn advance_rotation(rotation: f64, rdelta: f64) -> f64 {
    (rotation + rdelta).rem_euclid(PI2)
}
