/// Incremental rotation of the cube's vertex table
use nalgebra::{Matrix3, Point3, RowVector3};

use crate::geometry::{Cube, Vertex};

/// Axis of a single rotation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// One rotation pass: every vertex turned about `axis` by `angle` radians
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationStep {
    pub axis: Axis,
    pub angle: f64,
}

impl RotationStep {
    pub const fn new(axis: Axis, angle: f64) -> Self {
        Self { axis, angle }
    }
}

/// Ordered rotation passes applied once per frame
///
/// Passes compound: each frame's rotation is applied to the already rotated
/// coordinates, and the order matters because rotations do not commute.
#[derive(Debug, Clone, PartialEq)]
pub struct RotationSchedule {
    steps: Vec<RotationStep>,
}

impl RotationSchedule {
    pub fn new(steps: Vec<RotationStep>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[RotationStep] {
        &self.steps
    }

    /// Run every pass over the whole vertex table, in schedule order
    pub fn apply(&self, cube: &mut Cube) {
        for step in &self.steps {
            for vertex in cube.vertices_mut().iter_mut() {
                Transform::rotate_vertex(vertex, step.axis, step.angle);
            }
        }
    }
}

impl Default for RotationSchedule {
    /// Yaw, then roll, then pitch, each by a small fixed angle
    fn default() -> Self {
        Self::new(vec![
            RotationStep::new(Axis::Y, 0.001),
            RotationStep::new(Axis::Z, 0.0005),
            RotationStep::new(Axis::X, 0.00075),
        ])
    }
}

/// Rotation matrix builder
pub struct Transform;

impl Transform {
    /// Right-handed rotation about `axis`, laid out for row-vector multiplication
    #[rustfmt::skip]
    pub fn rotation_matrix(axis: Axis, angle: f64) -> Matrix3<f64> {
        let (sin, cos) = angle.sin_cos();
        match axis {
            Axis::X => Matrix3::new(
                1.0, 0.0,  0.0,
                0.0, cos, -sin,
                0.0, sin,  cos,
            ),
            Axis::Y => Matrix3::new(
                 cos, 0.0, sin,
                 0.0, 1.0, 0.0,
                -sin, 0.0, cos,
            ),
            Axis::Z => Matrix3::new(
                cos, -sin, 0.0,
                sin,  cos, 0.0,
                0.0,  0.0, 1.0,
            ),
        }
    }

    /// Rotate a point as `[x y z] * R`
    pub fn rotate_point(point: &Point3<f64>, axis: Axis, angle: f64) -> Point3<f64> {
        let row = RowVector3::new(point.x, point.y, point.z);
        let rotated = row * Self::rotation_matrix(axis, angle);
        Point3::new(rotated[0], rotated[1], rotated[2])
    }

    /// Replace a vertex's model-space position with its rotated position
    pub fn rotate_vertex(vertex: &mut Vertex, axis: Axis, angle: f64) {
        vertex.real = Self::rotate_point(&vertex.real, axis, angle);
    }
}
