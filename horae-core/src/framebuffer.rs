//! Monochrome framebuffer
//!
//! A pixel-addressable buffer matching the display panel's logical
//! geometry. All coordinate checks live here: writes outside the panel
//! are silently dropped, so drawing code can position content partially
//! or entirely off-screen without bounds checks of its own.

/// Panel width in pixels
pub const DISPLAY_WIDTH: usize = 128;

/// Panel height in pixels
pub const DISPLAY_HEIGHT: usize = 32;

/// State of a single pixel on a monochrome panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    /// Pixel dark
    #[default]
    Off,
    /// Pixel lit
    On,
}

/// Full-frame pixel buffer
///
/// Stored row-major, one cell per pixel. Rendering reuses a single
/// long-lived buffer; `Clone` exists so tests can snapshot a frame and
/// compare it after an operation.
#[derive(Clone, PartialEq, Eq)]
pub struct Framebuffer {
    pixels: [Color; DISPLAY_WIDTH * DISPLAY_HEIGHT],
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Framebuffer {
    /// Create a new all-dark framebuffer
    pub fn new() -> Self {
        Self {
            pixels: [Color::Off; DISPLAY_WIDTH * DISPLAY_HEIGHT],
        }
    }

    /// Set every pixel to `color`
    pub fn fill(&mut self, color: Color) {
        for pixel in &mut self.pixels {
            *pixel = color;
        }
    }

    /// Set the pixel at (`x`, `y`)
    ///
    /// Coordinates outside the panel are silently ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= DISPLAY_WIDTH as i32 || y >= DISPLAY_HEIGHT as i32 {
            return;
        }
        self.pixels[y as usize * DISPLAY_WIDTH + x as usize] = color;
    }

    /// Get the pixel at (`x`, `y`), or `None` outside the panel
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 || x >= DISPLAY_WIDTH as i32 || y >= DISPLAY_HEIGHT as i32 {
            return None;
        }
        Some(self.pixels[y as usize * DISPLAY_WIDTH + x as usize])
    }

    /// Number of lit pixels
    ///
    /// Useful for tests and diagnostics.
    pub fn lit_count(&self) -> usize {
        self.pixels.iter().filter(|&&p| p == Color::On).count()
    }

    /// Width of the panel in pixels
    pub const fn width(&self) -> usize {
        DISPLAY_WIDTH
    }

    /// Height of the panel in pixels
    pub const fn height(&self) -> usize {
        DISPLAY_HEIGHT
    }
}
