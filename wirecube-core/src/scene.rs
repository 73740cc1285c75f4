/// Per-frame orchestration: project, draw, present, rotate, pace, poll
use std::thread;

use log::{debug, info, trace};

use crate::canvas::{Canvas, Platform, Rgba};
use crate::config::SceneConfig;
use crate::geometry::{Cube, TopologyError};
use crate::projection::Camera;

/// Render loop state; `Terminated` is only reached through a quit request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

/// The spinning cube together with everything needed to draw it
pub struct Scene {
    cube: Cube,
    camera: Camera,
    config: SceneConfig,
    state: LoopState,
}

impl Scene {
    /// Build the cube described by `config` and check its topology once
    pub fn new(config: SceneConfig) -> Result<Self, TopologyError> {
        let cube = Cube::new(config.half_extent);
        cube.validate()?;
        debug!(
            "Scene ready: half extent {}, focal length {}, {} rotation passes per frame",
            config.half_extent,
            config.focal_length,
            config.rotation.steps().len()
        );

        Ok(Self {
            cube,
            camera: config.camera(),
            config,
            state: LoopState::Running,
        })
    }

    pub fn cube(&self) -> &Cube {
        &self.cube
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Blank the canvas once before the first frame
    pub fn prime<C: Canvas>(&self, canvas: &mut C) -> Result<(), C::Error> {
        canvas.set_draw_color(Rgba::BLACK);
        canvas.clear()?;
        canvas.present()
    }

    /// Draw the current pose, then advance the rotation by one frame
    pub fn render_frame<C: Canvas>(&mut self, canvas: &mut C) -> Result<(), C::Error> {
        self.camera.project_cube(&mut self.cube);

        canvas.set_draw_color(self.config.line_color);
        for (from, to) in self.cube.segments() {
            canvas.draw_line(from, to)?;
        }
        canvas.present()?;
        canvas.set_draw_color(self.config.clear_color);
        canvas.clear()?;

        self.config.rotation.apply(&mut self.cube);
        Ok(())
    }

    /// Run frames until the platform reports a quit request
    ///
    /// Returns the number of frames drawn. A terminated scene stays
    /// terminated and draws nothing.
    pub fn run<P: Platform>(&mut self, platform: &mut P) -> Result<u64, P::Error> {
        if self.state == LoopState::Terminated {
            debug!("Render loop already terminated");
            return Ok(0);
        }

        self.prime(platform)?;
        info!("Render loop started");

        let mut frames = 0u64;
        while self.state == LoopState::Running {
            self.render_frame(platform)?;
            frames += 1;
            trace!("Frame {} drawn", frames);

            if !self.config.frame_delay.is_zero() {
                thread::sleep(self.config.frame_delay);
            }

            if platform.poll_quit()? {
                self.state = LoopState::Terminated;
            }
        }

        info!("Render loop terminated after {} frames", frames);
        Ok(frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::RotationSchedule;
    use approx::assert_relative_eq;
    use nalgebra::Point2;
    use std::time::Duration;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Color(Rgba),
        Clear,
        Line(Point2<f64>, Point2<f64>),
        Present,
        Poll,
    }

    /// Records every call and asks to quit on the `quit_on`-th poll
    struct RecordingPlatform {
        calls: Vec<Call>,
        polls: usize,
        quit_on: usize,
    }

    impl RecordingPlatform {
        fn new(quit_on: usize) -> Self {
            Self {
                calls: Vec::new(),
                polls: 0,
                quit_on,
            }
        }

        fn lines(&self) -> Vec<(Point2<f64>, Point2<f64>)> {
            self.calls
                .iter()
                .filter_map(|call| match call {
                    Call::Line(from, to) => Some((*from, *to)),
                    _ => None,
                })
                .collect()
        }
    }

    impl Canvas for RecordingPlatform {
        type Error = String;

        fn set_draw_color(&mut self, color: Rgba) {
            self.calls.push(Call::Color(color));
        }

        fn clear(&mut self) -> Result<(), String> {
            self.calls.push(Call::Clear);
            Ok(())
        }

        fn draw_line(&mut self, from: Point2<f64>, to: Point2<f64>) -> Result<(), String> {
            self.calls.push(Call::Line(from, to));
            Ok(())
        }

        fn present(&mut self) -> Result<(), String> {
            self.calls.push(Call::Present);
            Ok(())
        }
    }

    impl Platform for RecordingPlatform {
        fn poll_quit(&mut self) -> Result<bool, String> {
            self.calls.push(Call::Poll);
            self.polls += 1;
            Ok(self.polls >= self.quit_on)
        }
    }

    struct FailingCanvas;

    impl Canvas for FailingCanvas {
        type Error = &'static str;

        fn set_draw_color(&mut self, _color: Rgba) {}

        fn clear(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }

        fn draw_line(&mut self, _from: Point2<f64>, _to: Point2<f64>) -> Result<(), Self::Error> {
            Err("device lost")
        }

        fn present(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    fn quick_config() -> SceneConfig {
        SceneConfig {
            frame_delay: Duration::ZERO,
            ..SceneConfig::default()
        }
    }

    #[test]
    fn test_first_frame_draws_projected_initial_cube() {
        let mut scene = Scene::new(quick_config()).unwrap();
        let mut platform = RecordingPlatform::new(1);
        scene.render_frame(&mut platform).unwrap();

        let expected = |x: f64, y: f64, z: f64| {
            Point2::new(775.0 * x / (775.0 + z) + 400.0, 775.0 * y / (775.0 + z) + 400.0)
        };
        let corners = [
            expected(-100.0, 100.0, 100.0),
            expected(100.0, 100.0, 100.0),
            expected(100.0, -100.0, 100.0),
            expected(-100.0, -100.0, 100.0),
            expected(-100.0, 100.0, -100.0),
            expected(100.0, 100.0, -100.0),
            expected(100.0, -100.0, -100.0),
            expected(-100.0, -100.0, -100.0),
        ];
        let pairs = [
            (0, 1), (1, 2), (2, 3), (3, 0),
            (4, 5), (5, 6), (6, 7), (7, 4),
            (0, 4), (1, 5), (2, 6), (3, 7),
        ];

        let lines = platform.lines();
        assert_eq!(lines.len(), 12);
        for ((from, to), (a, b)) in lines.iter().zip(pairs) {
            assert_relative_eq!(from.x, corners[a].x, epsilon = 1e-9);
            assert_relative_eq!(from.y, corners[a].y, epsilon = 1e-9);
            assert_relative_eq!(to.x, corners[b].x, epsilon = 1e-9);
            assert_relative_eq!(to.y, corners[b].y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_frame_call_order() {
        let mut scene = Scene::new(quick_config()).unwrap();
        let mut platform = RecordingPlatform::new(1);
        scene.render_frame(&mut platform).unwrap();

        let calls = &platform.calls;
        assert_eq!(calls.len(), 1 + 12 + 3);
        assert_eq!(calls[0], Call::Color(Rgba::WHITE));
        assert!(calls[1..13].iter().all(|c| matches!(c, Call::Line(..))));
        assert_eq!(calls[13], Call::Present);
        assert_eq!(calls[14], Call::Color(Rgba::TRANSPARENT));
        assert_eq!(calls[15], Call::Clear);
    }

    #[test]
    fn test_rotation_happens_after_drawing() {
        let mut scene = Scene::new(quick_config()).unwrap();
        let initial = scene.cube().clone();
        let mut platform = RecordingPlatform::new(1);
        scene.render_frame(&mut platform).unwrap();

        let mut expected = initial;
        RotationSchedule::default().apply(&mut expected);
        for (got, want) in scene.cube().vertices().iter().zip(expected.vertices()) {
            assert_eq!(got.real, want.real);
        }
    }

    #[test]
    fn test_run_stops_on_quit_request() {
        let mut scene = Scene::new(quick_config()).unwrap();
        let mut platform = RecordingPlatform::new(3);

        let frames = scene.run(&mut platform).unwrap();
        assert_eq!(frames, 3);
        assert_eq!(scene.state(), LoopState::Terminated);
        assert_eq!(platform.lines().len(), 36);

        // Priming blank frame, then every frame ends with a poll
        assert_eq!(
            &platform.calls[..3],
            &[Call::Color(Rgba::BLACK), Call::Clear, Call::Present]
        );
        assert_eq!(platform.calls.last(), Some(&Call::Poll));
        let polls = platform.calls.iter().filter(|c| **c == Call::Poll).count();
        assert_eq!(polls, 3);
    }

    #[test]
    fn test_run_compounds_rotation_per_frame() {
        let mut scene = Scene::new(quick_config()).unwrap();
        let mut platform = RecordingPlatform::new(5);
        scene.run(&mut platform).unwrap();

        let mut expected = Cube::new(100.0);
        for _ in 0..5 {
            RotationSchedule::default().apply(&mut expected);
        }
        for (got, want) in scene.cube().vertices().iter().zip(expected.vertices()) {
            assert_eq!(got.real, want.real);
        }
    }

    #[test]
    fn test_terminated_scene_does_not_restart() {
        let mut scene = Scene::new(quick_config()).unwrap();
        let mut platform = RecordingPlatform::new(1);
        assert_eq!(scene.run(&mut platform).unwrap(), 1);
        assert_eq!(scene.state(), LoopState::Terminated);
        let calls_after_first = platform.calls.len();

        assert_eq!(scene.run(&mut platform).unwrap(), 0);
        assert_eq!(scene.state(), LoopState::Terminated);
        assert_eq!(platform.calls.len(), calls_after_first);
        assert_eq!(platform.lines().len(), 12);
    }

    #[test]
    fn test_canvas_errors_propagate() {
        let mut scene = Scene::new(quick_config()).unwrap();
        assert_eq!(scene.render_frame(&mut FailingCanvas), Err("device lost"));
    }

    #[test]
    fn test_custom_line_color() {
        let config = SceneConfig {
            line_color: Rgba::new(0, 255, 0, 255),
            ..quick_config()
        };
        let mut scene = Scene::new(config).unwrap();
        let mut platform = RecordingPlatform::new(1);
        scene.render_frame(&mut platform).unwrap();
        assert_eq!(platform.calls[0], Call::Color(Rgba::new(0, 255, 0, 255)));
    }
}
