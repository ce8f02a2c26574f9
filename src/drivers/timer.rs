use core::sync::atomic::{AtomicU64, Ordering};
use deskshell::app::FrameTimer;

/// IRQ0 rate programmed into the PIT.
pub const TICK_HZ: u32 = 100;
const MS_PER_TICK: u64 = 1000 / TICK_HZ as u64;

static TIMER_TICKS: AtomicU64 = AtomicU64::new(0);

/// Timer interrupt hook.
pub fn tick() {
    TIMER_TICKS.fetch_add(1, Ordering::Relaxed);
}

pub fn ticks() -> u64 {
    TIMER_TICKS.load(Ordering::Relaxed)
}

/// Frame pacing on top of the PIT tick count.
pub struct PitTimer {
    _private: (),
}

impl PitTimer {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl FrameTimer for PitTimer {
    fn now_ms(&self) -> u64 {
        ticks() * MS_PER_TICK
    }

    /// Sleeps with `hlt`; the next timer interrupt wakes the CPU.
    fn wait_until(&mut self, deadline_ms: u64) {
        while self.now_ms() < deadline_ms {
            x86_64::instructions::hlt();
        }
    }
}
