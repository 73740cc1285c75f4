/// ASCII line rasterizer for terminal rendering
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use nalgebra::Point2;
use std::io::Write;
use wirecube_core::Rgba;

/// Terminal cells are roughly twice as tall as they are wide
const CELL_ASPECT: f64 = 2.0;

/// Character cell grid standing in for a square pixel canvas
///
/// Pixel coordinates of the virtual canvas are scaled onto the largest
/// centred region of the grid that keeps the canvas square on screen.
pub struct AsciiRenderer {
    canvas_size: u32,
    width: usize,
    height: usize,
    scale_x: f64,
    scale_y: f64,
    offset_x: f64,
    offset_y: f64,
    draw_color: Rgba,
    char_buffer: Vec<char>,
    color_buffer: Vec<Rgba>,
}

impl AsciiRenderer {
    pub fn new(width: usize, height: usize, canvas_size: u32) -> Self {
        let size = width * height;
        let canvas = f64::from(canvas_size.max(1));
        let rows = (height as f64).min(width as f64 / CELL_ASPECT);
        let cols = rows * CELL_ASPECT;

        Self {
            canvas_size,
            width,
            height,
            scale_x: cols / canvas,
            scale_y: rows / canvas,
            offset_x: (width as f64 - cols) / 2.0,
            offset_y: (height as f64 - rows) / 2.0,
            draw_color: Rgba::WHITE,
            char_buffer: vec![' '; size],
            color_buffer: vec![Rgba::TRANSPARENT; size],
        }
    }

    /// Refit the canvas to a new cell grid; the buffer starts blank
    pub fn resize(&mut self, width: usize, height: usize) {
        let draw_color = self.draw_color;
        *self = Self::new(width, height, self.canvas_size);
        self.draw_color = draw_color;
    }

    pub fn set_draw_color(&mut self, color: Rgba) {
        self.draw_color = color;
    }

    /// Character at a cell, `None` outside the grid
    pub fn cell(&self, x: usize, y: usize) -> Option<char> {
        (x < self.width && y < self.height).then(|| self.char_buffer[y * self.width + x])
    }

    pub fn clear(&mut self) {
        for i in 0..self.char_buffer.len() {
            self.char_buffer[i] = ' ';
            self.color_buffer[i] = self.draw_color;
        }
    }

    /// Map a canvas pixel to fractional cell coordinates
    pub fn to_cell(&self, point: Point2<f64>) -> (f64, f64) {
        (
            point.x * self.scale_x + self.offset_x,
            point.y * self.scale_y + self.offset_y,
        )
    }

    /// Rasterize a canvas-space segment with the current draw colour
    pub fn draw_line(&mut self, from: Point2<f64>, to: Point2<f64>) {
        let start = self.to_cell(from);
        let end = self.to_cell(to);
        let character = stroke_char(end.0 - start.0, end.1 - start.1);

        let bounds = (self.width as f64 - 0.5, self.height as f64 - 0.5);
        let Some((start, end)) = clip_segment(start, end, bounds) else {
            return;
        };

        for (x, y) in bresenham(
            (start.0.round() as i64, start.1.round() as i64),
            (end.0.round() as i64, end.1.round() as i64),
        ) {
            if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
                continue;
            }
            let idx = y as usize * self.width + x as usize;
            self.char_buffer[idx] = character;
            self.color_buffer[idx] = self.draw_color;
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let mut current = None;
        for y in 0..self.height {
            writer.queue(cursor::MoveTo(0, y as u16))?;
            for x in 0..self.width {
                let idx = y * self.width + x;
                let c = self.char_buffer[idx];

                if c != ' ' && current != Some(self.color_buffer[idx]) {
                    let Rgba { r, g, b, .. } = self.color_buffer[idx];
                    writer.queue(SetForegroundColor(Color::Rgb { r, g, b }))?;
                    current = Some(self.color_buffer[idx]);
                }
                writer.queue(Print(c))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

/// Pick a character whose shape follows the segment direction
fn stroke_char(dx: f64, dy: f64) -> char {
    let (adx, ady) = (dx.abs(), dy.abs());
    if ady * 2.0 < adx {
        '-'
    } else if adx * 2.0 < ady {
        '|'
    } else if (dx > 0.0) == (dy > 0.0) {
        '\\'
    } else {
        '/'
    }
}

/// Liang-Barsky clip of a segment to `[-0.5, max]` on both axes
fn clip_segment(
    start: (f64, f64),
    end: (f64, f64),
    max: (f64, f64),
) -> Option<((f64, f64), (f64, f64))> {
    let (dx, dy) = (end.0 - start.0, end.1 - start.1);
    let mut t0 = 0.0f64;
    let mut t1 = 1.0f64;

    for (p, q) in [
        (-dx, start.0 + 0.5),
        (dx, max.0 - start.0),
        (-dy, start.1 + 0.5),
        (dy, max.1 - start.1),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let t = q / p;
        if p < 0.0 {
            t0 = t0.max(t);
        } else {
            t1 = t1.min(t);
        }
        if t0 > t1 {
            return None;
        }
    }

    Some((
        (start.0 + t0 * dx, start.1 + t0 * dy),
        (start.0 + t1 * dx, start.1 + t1 * dy),
    ))
}

/// Cells visited by Bresenham's algorithm from `start` to `end`, inclusive
fn bresenham(start: (i64, i64), end: (i64, i64)) -> Vec<(i64, i64)> {
    let dx = (end.0 - start.0).abs();
    let dy = -(end.1 - start.1).abs();
    let step_x = if start.0 < end.0 { 1 } else { -1 };
    let step_y = if start.1 < end.1 { 1 } else { -1 };

    let mut cells = Vec::with_capacity((dx.max(-dy) + 1) as usize);
    let (mut x, mut y) = start;
    let mut err = dx + dy;

    loop {
        cells.push((x, y));
        if x == end.0 && y == end.1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += step_x;
        }
        if e2 <= dx {
            err += dx;
            y += step_y;
        }
    }

    cells
}
