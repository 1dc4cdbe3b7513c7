//! Wall-clock time source trait

use heapless::String;

/// Length of a `HH:MM` reading in bytes
pub const TIME_STR_LEN: usize = 5;

/// A formatted `HH:MM` wall-clock reading
pub type TimeString = String<TIME_STR_LEN>;

/// Errors from reading the wall clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeError {
    /// Bus transfer to the clock device failed
    Bus,
    /// The device returned a value outside `00:00`..`23:59`
    InvalidTime,
}

/// Trait for reading the current wall-clock time
pub trait TimeSource {
    /// Read the current time as a zero-padded 24-hour `HH:MM` string
    fn now(&mut self) -> Result<TimeString, TimeError>;
}
