/// Pinhole projection from model space to window pixels
use nalgebra::{Point2, Point3};

use crate::geometry::Cube;

/// Smallest magnitude allowed for the projection denominator
pub const MIN_DEPTH: f64 = 1e-6;

/// Pinhole camera looking down the Z axis at the centre of a square viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub focal_length: f64,
    pub viewport_width: u32,
}

impl Camera {
    pub fn new(focal_length: f64, viewport_width: u32) -> Self {
        Self {
            focal_length,
            viewport_width,
        }
    }

    /// Screen coordinate of the viewport centre, shared by both axes
    pub fn half_width(&self) -> f64 {
        f64::from(self.viewport_width) / 2.0
    }

    /// Project a 3D point to 2D screen space
    ///
    /// `screen = f * p / (f + z) + width / 2` on both axes. A point sitting on
    /// the camera plane would divide by zero, so the denominator is clamped to
    /// [`MIN_DEPTH`], keeping its sign.
    pub fn project(&self, point: &Point3<f64>) -> Point2<f64> {
        let mut depth = self.focal_length + point.z;
        if depth.abs() < MIN_DEPTH {
            depth = MIN_DEPTH.copysign(depth);
        }

        let scale = self.focal_length / depth;
        let center = self.half_width();
        Point2::new(point.x * scale + center, point.y * scale + center)
    }

    /// Refresh the projected coordinate of every vertex from its current position
    pub fn project_cube(&self, cube: &mut Cube) {
        for vertex in cube.vertices_mut().iter_mut() {
            vertex.projected = self.project(&vertex.real);
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(775.0, 800)
    }
}
