//! Hardware behind the shell's platform traits.
//!
//! | Driver         | Trait            | Hardware              |
//! |----------------|------------------|-----------------------|
//! | `ps2_keyboard` | `ScancodeSource` | i8042, IRQ1           |
//! | `rtc`          | `Clock`          | CMOS RTC, ports 70/71 |
//! | `timer`        | `FrameTimer`     | PIT channel 0, IRQ0   |

pub mod ps2_keyboard;
pub mod rtc;
pub mod timer;
