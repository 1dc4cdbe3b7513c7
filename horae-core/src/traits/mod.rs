//! Hardware abstraction traits
//!
//! These traits define the interface between the clock logic and
//! hardware-specific implementations.

pub mod display;
pub mod time;

pub use display::{DisplayError, DisplaySink};
pub use time::{TimeError, TimeSource, TimeString, TIME_STR_LEN};
