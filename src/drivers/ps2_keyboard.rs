//! PS/2 keyboard: IRQ1 pushes raw scancodes into a ring, the shell
//! drains it through [`Ps2Keyboard`].
use core::sync::atomic::{AtomicUsize, Ordering};
use deskshell::devices::input::ScancodeSource;

const BUFFER_SIZE: usize = 256;

static mut RING_BUF: [u8; BUFFER_SIZE] = [0; BUFFER_SIZE];
static HEAD: AtomicUsize = AtomicUsize::new(0);
static TAIL: AtomicUsize = AtomicUsize::new(0);

/// Called from the keyboard interrupt only. A full ring drops the byte.
pub fn enqueue_scancode(scancode: u8) {
    let head = HEAD.load(Ordering::Relaxed);
    let next = (head + 1) % BUFFER_SIZE;
    let tail = TAIL.load(Ordering::Acquire);
    if next != tail {
        unsafe {
            RING_BUF[head] = scancode;
        }
        HEAD.store(next, Ordering::Release);
    }
}

pub fn dequeue_scancode() -> Option<u8> {
    let tail = TAIL.load(Ordering::Relaxed);
    let head = HEAD.load(Ordering::Acquire);
    if tail == head {
        return None;
    }
    let sc = unsafe { RING_BUF[tail] };
    TAIL.store((tail + 1) % BUFFER_SIZE, Ordering::Release);
    Some(sc)
}

/// The single consumer of the scancode ring.
pub struct Ps2Keyboard {
    _private: (),
}

impl Ps2Keyboard {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl ScancodeSource for Ps2Keyboard {
    fn poll_scancode(&mut self) -> Option<u8> {
        dequeue_scancode()
    }
}
