/// Wirecube Core Library - Shared geometry, transform and render loop logic
///
/// This library owns everything about the spinning wireframe cube that does
/// not depend on a window system: the vertex and edge tables, the per-axis
/// rotation passes, the pinhole projection, and the frame loop that drives a
/// [`Platform`] shell.

pub mod canvas;
pub mod config;
pub mod geometry;
pub mod projection;
pub mod scene;
pub mod transform;

// Re-export commonly used types
pub use canvas::{Canvas, Platform, Rgba};
pub use config::SceneConfig;
pub use geometry::{Cube, Edge, TopologyError, Vertex};
pub use projection::Camera;
pub use scene::{LoopState, Scene};
pub use transform::{Axis, RotationSchedule, RotationStep, Transform};
