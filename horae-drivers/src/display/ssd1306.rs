//! SSD1306 OLED display driver
//!
//! Driver for 128x32 SSD1306-based OLED panels via I2C. Panel memory is
//! organized in pages of 8 vertically stacked pixels; the driver keeps a
//! page-packed shadow buffer and rewrites the whole panel on flush.
//!
//! Unlike the SH1106 the SSD1306 RAM starts at column 0, so no column
//! offset is applied when flushing.

use embedded_hal::i2c::I2c;
use horae_core::framebuffer::{Color, Framebuffer, DISPLAY_HEIGHT, DISPLAY_WIDTH};
use horae_core::traits::{DisplayError, DisplaySink};

/// SSD1306 I2C address (typically 0x3C, some modules use 0x3D)
const SSD1306_ADDR: u8 = 0x3C;

/// Display dimensions
const WIDTH: usize = DISPLAY_WIDTH;
const HEIGHT: usize = DISPLAY_HEIGHT;
const PAGES: usize = HEIGHT / 8;

/// SSD1306 commands
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_INVERSE: u8 = 0xA7;
    pub const ALL_ON_RESUME: u8 = 0xA4;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_MEMORY_MODE: u8 = 0x20;
    pub const SET_LOW_COLUMN: u8 = 0x00;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    pub const SET_PAGE_ADDR: u8 = 0xB0;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
}

/// SSD1306 OLED driver
pub struct Ssd1306<I2C> {
    i2c: I2C,
    /// Shadow buffer (1 bit per pixel, organized as pages)
    buffer: [[u8; WIDTH]; PAGES],
}

impl<I2C> Ssd1306<I2C>
where
    I2C: I2c,
{
    /// Create a new SSD1306 driver
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            buffer: [[0; WIDTH]; PAGES],
        }
    }

    /// Initialize the panel
    ///
    /// Sequence for a 128x32 module running off the internal charge
    /// pump.
    pub fn init(&mut self) -> Result<(), I2C::Error> {
        let init_cmds: &[u8] = &[
            cmd::DISPLAY_OFF,
            cmd::SET_CLOCK_DIV,
            0x80, // Default clock
            cmd::SET_MUX_RATIO,
            0x1F, // 32 lines
            cmd::SET_DISPLAY_OFFSET,
            0x00,
            cmd::SET_START_LINE | 0x00,
            cmd::SET_CHARGE_PUMP,
            0x14, // Enable charge pump
            cmd::SET_MEMORY_MODE,
            0x02, // Page addressing
            cmd::SET_SEG_REMAP,    // Flip horizontally
            cmd::SET_COM_SCAN_DEC, // Flip vertically
            cmd::SET_COM_PINS,
            0x02, // Sequential COM config for 32-row panels
            cmd::SET_CONTRAST,
            0x8F,
            cmd::SET_PRECHARGE,
            0xF1,
            cmd::SET_VCOM_DETECT,
            0x40,
            cmd::ALL_ON_RESUME,
            cmd::SET_NORMAL,
            cmd::DISPLAY_ON,
        ];

        for &c in init_cmds {
            self.command(c)?;
        }

        Ok(())
    }

    /// Send a command to the panel
    fn command(&mut self, cmd: u8) -> Result<(), I2C::Error> {
        self.i2c.write(SSD1306_ADDR, &[0x00, cmd])
    }

    /// Zero the shadow buffer without touching the panel
    pub fn clear_buffer(&mut self) {
        for page in self.buffer.iter_mut() {
            page.fill(0);
        }
    }

    /// Pack a framebuffer into the page layout
    pub fn load_frame(&mut self, frame: &Framebuffer) {
        for (page_idx, page) in self.buffer.iter_mut().enumerate() {
            for (x, byte) in page.iter_mut().enumerate() {
                let mut packed = 0u8;
                for bit in 0..8 {
                    let y = (page_idx * 8 + bit) as i32;
                    if frame.pixel(x as i32, y) == Some(Color::On) {
                        packed |= 1 << bit;
                    }
                }
                *byte = packed;
            }
        }
    }

    /// Flush the shadow buffer to the panel
    pub fn flush(&mut self) -> Result<(), I2C::Error> {
        for page in 0..PAGES {
            // Set page, then column 0
            self.command(cmd::SET_PAGE_ADDR | page as u8)?;
            self.command(cmd::SET_LOW_COLUMN | 0)?;
            self.command(cmd::SET_HIGH_COLUMN | 0)?;

            // Send page data
            let mut data = [0u8; WIDTH + 1];
            data[0] = 0x40; // Data mode
            data[1..].copy_from_slice(&self.buffer[page]);
            self.i2c.write(SSD1306_ADDR, &data)?;
        }

        Ok(())
    }

    /// Set display contrast (0-255)
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), I2C::Error> {
        self.command(cmd::SET_CONTRAST)?;
        self.command(contrast)
    }

    /// Turn the panel on/off
    pub fn set_display_on(&mut self, on: bool) -> Result<(), I2C::Error> {
        if on {
            self.command(cmd::DISPLAY_ON)
        } else {
            self.command(cmd::DISPLAY_OFF)
        }
    }

    /// Invert panel colors
    pub fn set_inverted(&mut self, inverted: bool) -> Result<(), I2C::Error> {
        if inverted {
            self.command(cmd::SET_INVERSE)
        } else {
            self.command(cmd::SET_NORMAL)
        }
    }
}

impl<I2C> DisplaySink for Ssd1306<I2C>
where
    I2C: I2c,
{
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.clear_buffer();
        self.flush().map_err(|_| DisplayError::Communication)
    }

    fn present(&mut self, frame: &Framebuffer) -> Result<(), DisplayError> {
        self.load_frame(frame);
        self.flush().map_err(|_| DisplayError::Communication)
    }

    fn shutdown(&mut self) -> Result<(), DisplayError> {
        self.clear_buffer();
        self.flush().map_err(|_| DisplayError::Communication)?;
        self.set_display_on(false)
            .map_err(|_| DisplayError::Communication)
    }
}
