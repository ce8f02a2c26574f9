//! CMOS real-time clock, read for the taskbar time and the boot seed.

use deskshell::desktop::{Clock, WallTime};
use x86_64::instructions::port::Port;

const CMOS_ADDRESS: u16 = 0x70;
const CMOS_DATA: u16 = 0x71;

const RTC_SECONDS: u8 = 0x00;
const RTC_MINUTES: u8 = 0x02;
const RTC_HOURS: u8 = 0x04;
const RTC_STATUS_A: u8 = 0x0A;
const RTC_STATUS_B: u8 = 0x0B;

/// Status B: values are binary rather than BCD.
const STATUS_B_BINARY: u8 = 0x04;
/// Status B: hours run 0-23 rather than 1-12 with a PM bit.
const STATUS_B_24H: u8 = 0x02;
const HOUR_PM: u8 = 0x80;

const UPDATE_SPIN_LIMIT: u32 = 1_000_000;

pub struct CmosClock {
    address: Port<u8>,
    data: Port<u8>,
    last: WallTime,
}

impl CmosClock {
    pub fn new() -> Self {
        Self {
            address: Port::new(CMOS_ADDRESS),
            data: Port::new(CMOS_DATA),
            last: WallTime::default(),
        }
    }

    fn read(&mut self, reg: u8) -> u8 {
        unsafe {
            // Keep NMIs disabled while a register is selected
            self.address.write(0x80 | reg);
            self.data.read()
        }
    }

    fn update_in_progress(&mut self) -> bool {
        self.read(RTC_STATUS_A) & 0x80 != 0
    }

    fn try_read(&mut self) -> Option<WallTime> {
        let mut spins = 0;
        while self.update_in_progress() {
            core::hint::spin_loop();
            spins += 1;
            if spins >= UPDATE_SPIN_LIMIT {
                return None;
            }
        }

        let mut seconds = self.read(RTC_SECONDS);
        let mut minutes = self.read(RTC_MINUTES);
        let mut hours = self.read(RTC_HOURS);
        let status_b = self.read(RTC_STATUS_B);

        if status_b & STATUS_B_BINARY == 0 {
            seconds = bcd_to_binary(seconds);
            minutes = bcd_to_binary(minutes);
            hours = bcd_to_binary(hours & !HOUR_PM) | (hours & HOUR_PM);
        }
        if status_b & STATUS_B_24H == 0 {
            let pm = hours & HOUR_PM != 0;
            hours = (hours & !HOUR_PM) % 12 + if pm { 12 } else { 0 };
        }

        Some(WallTime { hours, minutes, seconds })
    }
}

impl Clock for CmosClock {
    /// Falls back to the previous reading if the chip stays busy.
    fn read_time(&mut self) -> WallTime {
        match self.try_read() {
            Some(time) => self.last = time,
            None => log::warn!("rtc: update in progress for too long, reusing last time"),
        }
        self.last
    }
}

fn bcd_to_binary(bcd: u8) -> u8 {
    (bcd >> 4) * 10 + (bcd & 0x0F)
}
