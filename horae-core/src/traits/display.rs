//! Display sink trait for monochrome panels

use crate::framebuffer::Framebuffer;

/// Errors that can occur with display communication
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus transfer to the panel failed
    Communication,
}

/// Trait for pushing finished frames to a physical display
///
/// Implementations own the wire format of their panel. The clock logic
/// hands over a complete framebuffer and never talks to the bus itself.
pub trait DisplaySink {
    /// Blank the panel immediately
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Transfer a full frame to the panel
    fn present(&mut self, frame: &Framebuffer) -> Result<(), DisplayError>;

    /// Blank the panel and put it to sleep
    ///
    /// Called when the clock shuts down so the panel is not left showing
    /// a frozen reading.
    fn shutdown(&mut self) -> Result<(), DisplayError>;
}
