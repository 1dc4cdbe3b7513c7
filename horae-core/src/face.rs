//! Change-driven clock face refresh
//!
//! The face owns one framebuffer and the last reading pushed to the
//! panel. Each tick polls the time source and redraws only when the
//! `HH:MM` value actually changed, so the panel sees at most one
//! transfer per minute even though the source is polled more often.

use crate::framebuffer::{Color, Framebuffer};
use crate::render;
use crate::traits::{DisplayError, DisplaySink, TimeError, TimeSource, TimeString};

/// Milliseconds between refresh polls
///
/// Well under a minute, so a minute rollover is never missed by more
/// than one poll interval.
pub const TICK_INTERVAL_MS: u64 = 10_000;

/// Outcome of a single refresh tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    /// Reading matched what the panel already shows
    Unchanged,
    /// A new reading was rendered and pushed to the panel
    Presented,
    /// The time source failed; face state and panel left as they were
    TimeFailed(TimeError),
    /// The reading was rendered but the panel transfer failed
    PresentFailed(DisplayError),
}

/// The clock face: one framebuffer and the last reading shown on it
pub struct ClockFace {
    frame: Framebuffer,
    last_shown: Option<TimeString>,
}

impl Default for ClockFace {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockFace {
    /// Create a face that has not shown anything yet
    ///
    /// The first successful tick always presents.
    pub fn new() -> Self {
        Self {
            frame: Framebuffer::new(),
            last_shown: None,
        }
    }

    /// Poll the time source once and refresh the panel if the reading
    /// changed
    ///
    /// An unchanged reading leaves both the framebuffer and the panel
    /// untouched. The reading is recorded before the panel transfer, so
    /// a failed transfer is not retried until the clock next changes.
    pub fn tick(
        &mut self,
        time: &mut impl TimeSource,
        sink: &mut impl DisplaySink,
    ) -> TickOutcome {
        let reading = match time.now() {
            Ok(reading) => reading,
            Err(err) => return TickOutcome::TimeFailed(err),
        };

        if self.last_shown.as_ref() == Some(&reading) {
            return TickOutcome::Unchanged;
        }
        self.last_shown = Some(reading.clone());

        self.frame.fill(Color::Off);
        render::draw_text(&mut self.frame, &reading, Color::On);

        match sink.present(&self.frame) {
            Ok(()) => TickOutcome::Presented,
            Err(err) => TickOutcome::PresentFailed(err),
        }
    }

    /// The frame as last rendered
    pub fn frame(&self) -> &Framebuffer {
        &self.frame
    }

    /// The reading most recently pushed to the panel, if any
    pub fn last_shown(&self) -> Option<&str> {
        self.last_shown.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(s: &str) -> TimeString {
        let mut out = TimeString::new();
        out.push_str(s).unwrap();
        out
    }

    struct MockClock {
        readings: heapless::Vec<Result<TimeString, TimeError>, 8>,
        cursor: usize,
    }

    impl MockClock {
        /// Serves `seq` in order, repeating the last entry forever.
        fn new(seq: &[Result<&str, TimeError>]) -> Self {
            let mut readings = heapless::Vec::new();
            for entry in seq {
                readings.push(entry.map(time)).unwrap();
            }
            Self {
                readings,
                cursor: 0,
            }
        }
    }

    impl TimeSource for MockClock {
        fn now(&mut self) -> Result<TimeString, TimeError> {
            let reading = self.readings[self.cursor].clone();
            if self.cursor + 1 < self.readings.len() {
                self.cursor += 1;
            }
            reading
        }
    }

    struct MockSink {
        presented: usize,
        fail_next_present: bool,
        last_frame: Option<Framebuffer>,
    }

    impl MockSink {
        fn new() -> Self {
            Self {
                presented: 0,
                fail_next_present: false,
                last_frame: None,
            }
        }
    }

    impl DisplaySink for MockSink {
        fn clear(&mut self) -> Result<(), DisplayError> {
            Ok(())
        }

        fn present(&mut self, frame: &Framebuffer) -> Result<(), DisplayError> {
            if self.fail_next_present {
                self.fail_next_present = false;
                return Err(DisplayError::Communication);
            }
            self.presented += 1;
            self.last_frame = Some(frame.clone());
            Ok(())
        }

        fn shutdown(&mut self) -> Result<(), DisplayError> {
            Ok(())
        }
    }

    #[test]
    fn test_first_tick_presents() {
        let mut clock = MockClock::new(&[Ok("09:05")]);
        let mut sink = MockSink::new();
        let mut face = ClockFace::new();

        assert_eq!(face.tick(&mut clock, &mut sink), TickOutcome::Presented);
        assert_eq!(sink.presented, 1);
        assert_eq!(face.last_shown(), Some("09:05"));

        let mut expected = Framebuffer::new();
        render::draw_text(&mut expected, "09:05", Color::On);
        assert!(*face.frame() == expected);
    }

    #[test]
    fn test_unchanged_reading_skips_present() {
        let mut clock = MockClock::new(&[Ok("09:05"), Ok("09:05"), Ok("09:06")]);
        let mut sink = MockSink::new();
        let mut face = ClockFace::new();

        assert_eq!(face.tick(&mut clock, &mut sink), TickOutcome::Presented);
        let snapshot = face.frame().clone();

        // Same minute again: nothing redrawn, nothing transferred.
        assert_eq!(face.tick(&mut clock, &mut sink), TickOutcome::Unchanged);
        assert_eq!(sink.presented, 1);
        assert!(*face.frame() == snapshot);

        // Minute rolled over.
        assert_eq!(face.tick(&mut clock, &mut sink), TickOutcome::Presented);
        assert_eq!(sink.presented, 2);
        assert_eq!(face.last_shown(), Some("09:06"));
    }

    #[test]
    fn test_changed_reading_replaces_the_frame() {
        let mut clock = MockClock::new(&[Ok("19:59"), Ok("20:00")]);
        let mut sink = MockSink::new();
        let mut face = ClockFace::new();

        face.tick(&mut clock, &mut sink);
        face.tick(&mut clock, &mut sink);

        // The old digits are gone, not merged into the new frame.
        let mut expected = Framebuffer::new();
        render::draw_text(&mut expected, "20:00", Color::On);
        assert!(*face.frame() == expected);
        assert!(sink.last_frame.as_ref() == Some(&expected));
    }

    #[test]
    fn test_time_failure_leaves_face_alone() {
        let mut clock = MockClock::new(&[
            Ok("09:05"),
            Err(TimeError::Bus),
            Ok("09:05"),
            Ok("09:06"),
        ]);
        let mut sink = MockSink::new();
        let mut face = ClockFace::new();

        assert_eq!(face.tick(&mut clock, &mut sink), TickOutcome::Presented);
        assert_eq!(
            face.tick(&mut clock, &mut sink),
            TickOutcome::TimeFailed(TimeError::Bus)
        );
        assert_eq!(face.last_shown(), Some("09:05"));

        // Recovered read of the same minute is still a no-op.
        assert_eq!(face.tick(&mut clock, &mut sink), TickOutcome::Unchanged);
        assert_eq!(sink.presented, 1);

        assert_eq!(face.tick(&mut clock, &mut sink), TickOutcome::Presented);
        assert_eq!(sink.presented, 2);
    }

    #[test]
    fn test_present_failure_waits_for_next_change() {
        let mut clock = MockClock::new(&[Ok("09:05"), Ok("09:05"), Ok("09:06")]);
        let mut sink = MockSink::new();
        sink.fail_next_present = true;
        let mut face = ClockFace::new();

        // The reading is recorded even though the transfer failed.
        assert_eq!(
            face.tick(&mut clock, &mut sink),
            TickOutcome::PresentFailed(DisplayError::Communication)
        );
        assert_eq!(face.last_shown(), Some("09:05"));
        assert_eq!(sink.presented, 0);

        // Same minute: no retry, the panel stays stale until a change.
        assert_eq!(face.tick(&mut clock, &mut sink), TickOutcome::Unchanged);
        assert_eq!(sink.presented, 0);

        assert_eq!(face.tick(&mut clock, &mut sink), TickOutcome::Presented);
        assert_eq!(sink.presented, 1);
        assert_eq!(face.last_shown(), Some("09:06"));
    }

    #[test]
    fn test_long_run_of_identical_readings_presents_once() {
        let mut clock = MockClock::new(&[Ok("12:00")]);
        let mut sink = MockSink::new();
        let mut face = ClockFace::new();

        for _ in 0..6 {
            face.tick(&mut clock, &mut sink);
        }
        assert_eq!(sink.presented, 1);
    }
}
