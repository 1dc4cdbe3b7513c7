//! Horae - OLED Clock Firmware
//!
//! Main firmware binary for RP2040-based boards driving a 128x32
//! SSD1306 clock face from a DS3231 real-time clock.
//!
//! Named after the Horae (Ὧραι), the Greek goddesses of the hours,
//! who kept the orderly passage of time.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::i2c::{self, Blocking, I2c};
use embassy_rp::peripherals::{I2C0, I2C1};
use embassy_time::{Duration, Ticker};
use {defmt_rtt as _, panic_probe as _};

use horae_core::face::{ClockFace, TickOutcome, TICK_INTERVAL_MS};
use horae_core::traits::DisplaySink;
use horae_drivers::display::Ssd1306;
use horae_drivers::rtc::Ds3231;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Horae clock firmware starting...");

    let p = embassy_rp::init(Default::default());

    // OLED on I2C0 (GPIO4=SDA, GPIO5=SCL)
    let oled_bus = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, i2c::Config::default());
    let mut display = Ssd1306::new(oled_bus);
    if let Err(e) = display.init() {
        error!("Failed to initialize display: {:?}", e);
    } else {
        info!("OLED initialized");
        // Blank the panel until the first reading lands
        display.clear().ok();
    }

    // RTC on I2C1 (GPIO2=SDA, GPIO3=SCL)
    let rtc_bus = I2c::new_blocking(p.I2C1, p.PIN_3, p.PIN_2, i2c::Config::default());
    let mut rtc = Ds3231::new(rtc_bus);
    match rtc.lost_power() {
        Ok(true) => warn!("RTC lost power, time must be set before readings are valid"),
        Ok(false) => info!("RTC timekeeping is valid"),
        Err(e) => error!("Failed to query RTC status: {:?}", e),
    }

    spawner.spawn(clock_task(rtc, display)).unwrap();
    info!("Clock task spawned");
}

/// Clock refresh task
///
/// Polls the RTC every ten seconds and pushes a frame to the panel
/// only when the displayed minute changes.
#[embassy_executor::task]
async fn clock_task(
    mut rtc: Ds3231<I2c<'static, I2C1, Blocking>>,
    mut display: Ssd1306<I2c<'static, I2C0, Blocking>>,
) {
    info!("Clock task started");

    let mut face = ClockFace::new();
    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS));

    loop {
        match face.tick(&mut rtc, &mut display) {
            TickOutcome::Presented => {
                info!("Showing {}", face.last_shown().unwrap_or("?"));
            }
            TickOutcome::Unchanged => {
                trace!("Reading unchanged");
            }
            TickOutcome::TimeFailed(e) => {
                warn!("Time read failed: {:?}", e);
            }
            TickOutcome::PresentFailed(e) => {
                warn!("Panel transfer failed: {:?}", e);
            }
        }

        ticker.next().await;
    }
}
