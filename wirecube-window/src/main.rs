/// Wirecube - Rotating wireframe cube in an 800x800 window
///
/// Controls:
///   - ESC: Quit
use log::{error, info};
use std::process::ExitCode;
use wirecube_core::{Scene, SceneConfig};
use wirecube_window::{WindowApp, WindowError};

fn run() -> Result<u64, WindowError> {
    let config = SceneConfig::default();
    let window_size = config.window_size;

    let mut scene = Scene::new(config)?;
    let mut app = WindowApp::new(window_size)?;

    scene.run(&mut app)
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(frames) => {
            info!("Window closed after {} frames", frames);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
