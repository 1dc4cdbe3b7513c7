//! DS3231 real-time clock driver
//!
//! The DS3231 is a battery-backed I2C RTC with an integrated
//! temperature-compensated oscillator. Timekeeping registers are BCD
//! encoded; the hours register selects 12- or 24-hour mode with bit 6.
//! The driver reads either mode but always writes 24-hour mode.

use core::fmt::Write;

use embedded_hal::i2c::I2c;
use horae_core::traits::{TimeError, TimeSource, TimeString};

/// DS3231 I2C address (fixed by the device)
const DS3231_ADDR: u8 = 0x68;

/// Oscillator stop flag in the status register
const OSF_BIT: u8 = 0x80;

/// DS3231 register addresses
pub mod reg {
    /// Seconds (BCD)
    pub const SECONDS: u8 = 0x00;
    /// Minutes (BCD)
    pub const MINUTES: u8 = 0x01;
    /// Hours (BCD, bit 6 selects 12-hour mode)
    pub const HOURS: u8 = 0x02;
    /// Control
    pub const CONTROL: u8 = 0x0E;
    /// Status (oscillator stop flag in bit 7)
    pub const STATUS: u8 = 0x0F;
}

/// DS3231 RTC driver
pub struct Ds3231<I2C> {
    i2c: I2C,
}

impl<I2C> Ds3231<I2C>
where
    I2C: I2c,
{
    /// Create a new DS3231 driver
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Read the current hour and minute
    ///
    /// Decodes both 12- and 24-hour register modes. Readings that do
    /// not decode to a valid time of day are rejected rather than
    /// rendered.
    pub fn read_time(&mut self) -> Result<(u8, u8), TimeError> {
        let mut regs = [0u8; 3];
        self.i2c
            .write_read(DS3231_ADDR, &[reg::SECONDS], &mut regs)
            .map_err(|_| TimeError::Bus)?;

        let minute = bcd_to_bin(regs[1] & 0x7F);
        let hour = decode_hours(regs[2]);
        if hour >= 24 || minute >= 60 {
            return Err(TimeError::InvalidTime);
        }
        Ok((hour, minute))
    }

    /// Set the clock to `hour:minute:00` in 24-hour mode
    ///
    /// Also clears the oscillator stop flag, so the device reports
    /// trustworthy time again after a battery swap.
    pub fn set_time(&mut self, hour: u8, minute: u8) -> Result<(), TimeError> {
        if hour >= 24 || minute >= 60 {
            return Err(TimeError::InvalidTime);
        }
        self.i2c
            .write(
                DS3231_ADDR,
                &[reg::SECONDS, 0x00, bin_to_bcd(minute), bin_to_bcd(hour)],
            )
            .map_err(|_| TimeError::Bus)?;
        self.clear_oscillator_stop().map_err(|_| TimeError::Bus)
    }

    /// Whether the oscillator stopped since the flag was last cleared
    ///
    /// A set flag means the time cannot be trusted, typically after the
    /// backup battery ran out.
    pub fn lost_power(&mut self) -> Result<bool, TimeError> {
        let mut status = [0u8; 1];
        self.i2c
            .write_read(DS3231_ADDR, &[reg::STATUS], &mut status)
            .map_err(|_| TimeError::Bus)?;
        Ok(status[0] & OSF_BIT != 0)
    }

    /// Clear the oscillator stop flag, preserving the other status bits
    fn clear_oscillator_stop(&mut self) -> Result<(), I2C::Error> {
        let mut status = [0u8; 1];
        self.i2c
            .write_read(DS3231_ADDR, &[reg::STATUS], &mut status)?;
        self.i2c
            .write(DS3231_ADDR, &[reg::STATUS, status[0] & !OSF_BIT])
    }
}

impl<I2C> TimeSource for Ds3231<I2C>
where
    I2C: I2c,
{
    fn now(&mut self) -> Result<TimeString, TimeError> {
        let (hour, minute) = self.read_time()?;
        // Always 5 bytes for a valid reading, cannot overflow.
        let mut out = TimeString::new();
        let _ = write!(out, "{:02}:{:02}", hour, minute);
        Ok(out)
    }
}

/// Decode the hours register in either clock mode
fn decode_hours(raw: u8) -> u8 {
    if raw & 0x40 != 0 {
        // 12-hour mode: bit 5 is the PM flag, 12 wraps to 0
        let hour = bcd_to_bin(raw & 0x1F);
        let pm = raw & 0x20 != 0;
        match (hour, pm) {
            (12, false) => 0,
            (12, true) => 12,
            (h, false) => h,
            (h, true) => h + 12,
        }
    } else {
        bcd_to_bin(raw & 0x3F)
    }
}

fn bcd_to_bin(bcd: u8) -> u8 {
    (bcd >> 4) * 10 + (bcd & 0x0F)
}

fn bin_to_bcd(bin: u8) -> u8 {
    ((bin / 10) << 4) | (bin % 10)
}
