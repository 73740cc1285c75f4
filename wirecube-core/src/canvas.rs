/// Drawing and input seam between the render loop and a platform shell
use nalgebra::Point2;

/// 8-bit RGBA colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Channels scaled to `0.0..=1.0`
    pub fn to_unit(self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a].map(|c| f64::from(c) / 255.0)
    }
}

/// A frame buffer the render loop draws into, in window pixel coordinates
pub trait Canvas {
    type Error;

    /// Colour used by subsequent `clear` and `draw_line` calls
    fn set_draw_color(&mut self, color: Rgba);

    /// Fill the whole buffer with the current draw colour
    fn clear(&mut self) -> Result<(), Self::Error>;

    fn draw_line(&mut self, from: Point2<f64>, to: Point2<f64>) -> Result<(), Self::Error>;

    /// Show everything drawn since the last clear
    fn present(&mut self) -> Result<(), Self::Error>;
}

/// A canvas attached to an input source
pub trait Platform: Canvas {
    /// Drain pending input; `true` once the user has asked to quit
    fn poll_quit(&mut self) -> Result<bool, Self::Error>;
}
