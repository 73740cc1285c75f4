/// Wirecube Terminal - Rotating wireframe cube as ASCII art
///
/// Controls:
///   - ESC / Ctrl-C: Quit
use log::{error, info};
use std::process::ExitCode;
use wirecube_core::{Scene, SceneConfig};
use wirecube_terminal::TerminalApp;

fn main() -> ExitCode {
    env_logger::init();

    let config = SceneConfig::default();
    let canvas_size = config.window_size;

    let mut scene = match Scene::new(config) {
        Ok(scene) => scene,
        Err(e) => {
            error!("Invalid cube geometry: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut app = match TerminalApp::new(canvas_size) {
        Ok(app) => app,
        Err(e) => {
            error!("Failed to initialize terminal: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match app.run(&mut scene) {
        Ok(frames) => {
            info!("Exited cleanly after {} frames", frames);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Terminal renderer stopped: {}", e);
            ExitCode::FAILURE
        }
    }
}
