//! 8253/8254 PIT channel 0 as a periodic IRQ0 source.
use x86_64::instructions::port::Port;

const PIT_COMMAND: u16 = 0x43;
const PIT_CHANNEL_0: u16 = 0x40;
const PIT_INPUT_HZ: u32 = 1_193_182;
const PIT_MODE_RATE_GENERATOR: u8 = 0x36; // channel 0, low/high byte, mode 2, binary

/// Program channel 0 for `hz` interrupts per second; returns the divisor.
pub fn init(hz: u32) -> u16 {
    let requested_hz = if hz == 0 { 1 } else { hz };
    let divisor = (PIT_INPUT_HZ / requested_hz).clamp(1, u16::MAX as u32) as u16;

    let mut command = Port::<u8>::new(PIT_COMMAND);
    let mut data = Port::<u8>::new(PIT_CHANNEL_0);
    unsafe {
        command.write(PIT_MODE_RATE_GENERATOR);
        data.write((divisor & 0xFF) as u8);
        data.write((divisor >> 8) as u8);
    }
    divisor
}
