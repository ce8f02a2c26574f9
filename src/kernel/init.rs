/// Kernel initialization phases
use crate::drivers::timer::TICK_HZ;
use crate::interrupts::pit;
use crate::println;
use log::LevelFilter;

/// Initialize the kernel in order, stopping at the first failing phase.
pub fn init_kernel() -> Result<(), &'static str> {
    println!("╔════════════════════════════════════════╗");
    println!("║        deskshell kernel startup        ║");
    println!("╚════════════════════════════════════════╝\n");

    init_phase(1, "Logging", init_logging)?;
    init_phase(2, "Interrupt System", init_interrupts)?;
    init_phase(3, "Timer", init_timer)?;

    log::info!("kernel initialization complete");
    Ok(())
}

const PHASES: usize = 3;

fn init_phase(n: usize, name: &'static str, init_fn: fn() -> Result<(), &'static str>) -> Result<(), &'static str> {
    println!("[{}/{}] Initializing {}...", n, PHASES, name);

    match init_fn() {
        Ok(()) => {
            println!("    ✓ {} initialized successfully\n", name);
            Ok(())
        }
        Err(e) => {
            println!("    ✗ {} failed: {}\n", name, e);
            Err(e)
        }
    }
}

fn init_logging() -> Result<(), &'static str> {
    crate::SERIAL.lock().init();
    super::logger::init(LevelFilter::Info).map_err(|_| "logger already set")
}

fn init_interrupts() -> Result<(), &'static str> {
    crate::interrupts::init();
    Ok(())
}

fn init_timer() -> Result<(), &'static str> {
    let divisor = pit::init(TICK_HZ);
    log::info!("pit: {} Hz, divisor {}", TICK_HZ, divisor);
    x86_64::instructions::interrupts::enable();
    Ok(())
}
