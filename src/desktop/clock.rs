//! Wall clock contract and the taskbar's "HH:MM" text.

use core::fmt::Write;
use heapless::String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WallTime {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

/// Source of the current time of day.
pub trait Clock {
    fn read_time(&mut self) -> WallTime;
}

/// The taskbar clock: formatted text plus the time it was last read.
#[derive(Debug, Clone)]
pub struct ClockDisplay {
    text: String<5>,
    last_read_ms: u64,
    refresh_ms: u64,
}

impl ClockDisplay {
    /// Reads `clock` once to fill the text.
    pub fn new<C: Clock + ?Sized>(clock: &mut C, now_ms: u64, refresh_ms: u64) -> Self {
        let mut display = Self {
            text: String::new(),
            last_read_ms: now_ms,
            refresh_ms,
        };
        display.set(clock.read_time());
        display
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Re-read `clock` if `refresh_ms` has passed since the last read.
    /// Returns whether a read happened.
    pub fn refresh<C: Clock + ?Sized>(&mut self, clock: &mut C, now_ms: u64) -> bool {
        if now_ms.saturating_sub(self.last_read_ms) < self.refresh_ms {
            return false;
        }
        self.last_read_ms = now_ms;
        self.set(clock.read_time());
        true
    }

    fn set(&mut self, time: WallTime) {
        self.text.clear();
        // Always exactly five characters
        let _ = write!(self.text, "{:02}:{:02}", time.hours % 24, time.minutes % 60);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ticking {
        reads: u32,
    }

    impl Clock for Ticking {
        fn read_time(&mut self) -> WallTime {
            self.reads += 1;
            WallTime {
                hours: 9,
                minutes: self.reads as u8,
                seconds: 0,
            }
        }
    }

    #[test]
    fn formats_with_leading_zeros() {
        let mut c = Ticking { reads: 0 };
        let d = ClockDisplay::new(&mut c, 0, 1000);
        assert_eq!(d.text(), "09:01");
    }

    #[test]
    fn refreshes_once_per_period() {
        let mut c = Ticking { reads: 0 };
        let mut d = ClockDisplay::new(&mut c, 0, 1000);
        assert!(!d.refresh(&mut c, 999));
        assert_eq!(d.text(), "09:01");
        assert!(d.refresh(&mut c, 1000));
        assert_eq!(d.text(), "09:02");
        assert!(!d.refresh(&mut c, 1500));
        assert!(d.refresh(&mut c, 2100));
        assert_eq!(c.reads, 3);
    }
}
