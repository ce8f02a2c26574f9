use crate::interrupts::{interrupts::init_idt, pic::PICS};

pub mod gdt;
pub mod interrupts;
pub mod pic;
pub mod pit;

/// GDT, IDT, then the PICs with only the timer and keyboard lines open.
pub fn init() {
    gdt::init();
    init_idt();
    unsafe {
        let mut pics = PICS.lock();
        pics.initialize();
        pics.write_masks(pic::PIC_1_MASK, pic::PIC_2_MASK);
    }
}
