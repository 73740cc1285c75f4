/// Terminal platform shell: draws the wireframe cube as ASCII line art
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};
use log::{debug, info};
use nalgebra::Point2;
use std::io::{self, stdout, Stdout, Write};
use std::time::Duration;
use thiserror::Error;
use wirecube_core::{Canvas, Platform, Rgba, Scene};

pub mod renderer;

pub use renderer::AsciiRenderer;

const TITLE: &str = "Wirecube Terminal | Esc=Quit";

#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Main application struct for terminal rendering
pub struct TerminalApp {
    renderer: AsciiRenderer,
    out: Stdout,
}

impl TerminalApp {
    /// Size the character grid to the current terminal
    pub fn new(canvas_size: u32) -> Result<Self, TerminalError> {
        let (width, height) = terminal::size()?;
        info!("Terminal is {}x{} cells", width, height);

        Ok(Self {
            renderer: AsciiRenderer::new(width as usize, height as usize, canvas_size),
            out: stdout(),
        })
    }

    /// Take over the terminal, run the scene until quit, then restore it
    pub fn run(&mut self, scene: &mut Scene) -> Result<u64, TerminalError> {
        terminal::enable_raw_mode()?;
        execute!(self.out, terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = scene.run(self);

        // Cleanup runs in full even if the loop or one step failed
        let raw_mode = terminal::disable_raw_mode();
        let screen = execute!(self.out, terminal::LeaveAlternateScreen, cursor::Show);

        finish(result, raw_mode, screen)
    }

    /// Apply one input event; `true` when it asks to quit
    fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(key) => is_quit_key(&key),
            Event::Resize(width, height) => {
                debug!("Terminal resized to {}x{} cells", width, height);
                self.renderer.resize(width as usize, height as usize);
                false
            }
            _ => false,
        }
    }
}

/// Loop error first, then the first failed restore step
fn finish<T>(
    result: Result<T, TerminalError>,
    raw_mode: io::Result<()>,
    screen: io::Result<()>,
) -> Result<T, TerminalError> {
    let value = result?;
    raw_mode?;
    screen?;
    Ok(value)
}

impl Canvas for TerminalApp {
    type Error = TerminalError;

    fn set_draw_color(&mut self, color: Rgba) {
        self.renderer.set_draw_color(color);
    }

    fn clear(&mut self) -> Result<(), TerminalError> {
        self.renderer.clear();
        Ok(())
    }

    fn draw_line(&mut self, from: Point2<f64>, to: Point2<f64>) -> Result<(), TerminalError> {
        self.renderer.draw_line(from, to);
        Ok(())
    }

    fn present(&mut self) -> Result<(), TerminalError> {
        self.renderer.draw(&mut self.out)?;

        // Draw UI overlay
        queue!(
            self.out,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(TITLE),
            ResetColor
        )?;

        self.out.flush()?;
        Ok(())
    }
}

impl Platform for TerminalApp {
    fn poll_quit(&mut self) -> Result<bool, TerminalError> {
        let mut quit = false;
        while event::poll(Duration::ZERO)? {
            let event = event::read()?;
            quit |= self.handle_event(event);
        }
        Ok(quit)
    }
}

/// Esc, or Ctrl-C since raw mode swallows the interrupt signal
fn is_quit_key(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
