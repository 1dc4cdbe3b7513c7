//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in horae-core for the clock's peripherals:
//!
//! - Display: SSD1306 OLED panel over I2C
//! - Time source: DS3231 real-time clock over I2C
//!
//! All drivers are generic over a blocking `embedded_hal::i2c::I2c`
//! bus, so they run against real hardware and against mock buses in
//! host tests alike.

#![no_std]
#![deny(unsafe_code)]

pub mod display;
pub mod rtc;
