/// Compiled-in scene constants
use std::time::Duration;

use crate::canvas::Rgba;
use crate::projection::Camera;
use crate::transform::RotationSchedule;

/// Everything the render loop needs to know up front
///
/// The program takes no arguments, so this only ever comes from
/// [`SceneConfig::default`]; shells read the window size from it.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    /// Width and height of the square window in pixels
    pub window_size: u32,
    pub focal_length: f64,
    /// Distance from the cube's centre to each face
    pub half_extent: f64,
    pub rotation: RotationSchedule,
    /// Pause between frames
    pub frame_delay: Duration,
    pub line_color: Rgba,
    pub clear_color: Rgba,
}

impl SceneConfig {
    pub fn camera(&self) -> Camera {
        Camera::new(self.focal_length, self.window_size)
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            window_size: 800,
            focal_length: 775.0,
            half_extent: 100.0,
            rotation: RotationSchedule::default(),
            frame_delay: Duration::from_millis(1),
            line_color: Rgba::WHITE,
            clear_color: Rgba::TRANSPARENT,
        }
    }
}
