//! Board-agnostic clock face logic
//!
//! This crate contains everything about the clock that does not depend
//! on specific hardware:
//!
//! - Fixed 24x32 glyph catalog for the digits and `:`
//! - Clipping monochrome framebuffer
//! - Fixed-pitch centered text rendering
//! - Change-driven refresh logic
//! - Hardware abstraction traits (time source, display sink)

#![no_std]
#![deny(unsafe_code)]

pub mod face;
pub mod font;
pub mod framebuffer;
pub mod render;
pub mod traits;
