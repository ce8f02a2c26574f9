/// Kernel initialization, serial output and logging
pub mod init;
pub mod logger;

pub use init::init_kernel;

use spin::Mutex;
use uart_16550::SerialPort;

pub static SERIAL: Mutex<SerialPort> = Mutex::new(unsafe { SerialPort::new(0x3F8) });

#[macro_export]
macro_rules! println {
    ($($arg:tt)*) => {{
        use core::fmt::Write;
        let mut serial = $crate::SERIAL.lock();
        let _ = writeln!(serial, $($arg)*);
    }};
}

/// Park the CPU for good, waking only to service interrupts.
pub fn halt_loop() -> ! {
    loop {
        x86_64::instructions::hlt();
    }
}
