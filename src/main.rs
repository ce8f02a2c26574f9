#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]
#![cfg_attr(target_os = "none", feature(abi_x86_interrupt))]

#[cfg(target_os = "none")]
extern crate rlibc;

#[cfg(target_os = "none")]
mod drivers;
#[cfg(target_os = "none")]
mod interrupts;
#[cfg(target_os = "none")]
mod kernel;

#[cfg(target_os = "none")]
pub use kernel::SERIAL;

#[cfg(target_os = "none")]
mod boot {
    use bootloader_api::info::{FrameBufferInfo, PixelFormat as BootPixelFormat};
    use bootloader_api::{entry_point, BootInfo};
    use core::panic::PanicInfo;
    use deskshell::app::FrameTimer;
    use deskshell::desktop::Clock;
    use deskshell::devices::framebuffer::{Color, PixelFormat, Surface, SurfaceInfo};
    use deskshell::{run, Shell, ShellConfig};

    use crate::drivers::ps2_keyboard::Ps2Keyboard;
    use crate::drivers::rtc::CmosClock;
    use crate::drivers::timer::PitTimer;
    use crate::kernel::{halt_loop, init_kernel};
    use crate::println;

    entry_point!(kernel_main);

    fn surface_info(info: FrameBufferInfo) -> Option<SurfaceInfo> {
        let format = match info.pixel_format {
            BootPixelFormat::Rgb => PixelFormat::Rgb,
            BootPixelFormat::Bgr => PixelFormat::Bgr,
            other => {
                log::error!("boot: unsupported pixel format {:?}", other);
                return None;
            }
        };
        Some(SurfaceInfo {
            width: info.width,
            height: info.height,
            pitch_bytes: info.stride * info.bytes_per_pixel,
            bytes_per_pixel: info.bytes_per_pixel,
            format,
        })
    }

    fn kernel_main(boot_info: &'static mut BootInfo) -> ! {
        if let Err(e) = init_kernel() {
            println!("Kernel initialization failed: {}", e);
            halt_loop();
        }

        let Some(framebuffer) = boot_info.framebuffer.as_mut() else {
            log::error!("boot: no framebuffer from the bootloader");
            halt_loop();
        };
        let Some(info) = surface_info(framebuffer.info()) else {
            halt_loop();
        };
        let mut surface = match Surface::new(framebuffer.buffer_mut(), info) {
            Ok(surface) => surface,
            Err(e) => {
                log::error!("boot: {}", e);
                halt_loop();
            }
        };
        log::info!(
            "boot: framebuffer {}x{}, {} bytes per pixel, {:?}",
            info.width,
            info.height,
            info.bytes_per_pixel,
            info.format
        );

        let mut clock = CmosClock::new();
        let mut timer = PitTimer::new();
        let mut keyboard = Ps2Keyboard::new();

        let now = clock.read_time();
        let config = ShellConfig {
            rng_seed: (now.hours as u32) << 16 | (now.minutes as u32) << 8 | now.seconds as u32 | 1,
            ..ShellConfig::dark()
        };

        let mut shell = match Shell::new(config, info.width as u32, info.height as u32, &mut clock, timer.now_ms()) {
            Ok(shell) => shell,
            Err(e) => {
                log::error!("boot: {}", e);
                halt_loop();
            }
        };

        run(&mut shell, &mut surface, &mut keyboard, &mut clock, &mut timer);

        surface.clear(Color::BLACK);
        log::info!("shell exited, halting");
        halt_loop();
    }

    #[panic_handler]
    fn panic(info: &PanicInfo) -> ! {
        println!("PANIC : {} | {:?}", info.message(), info.location());
        halt_loop()
    }
}

#[cfg(not(target_os = "none"))]
fn main() {
    eprintln!("kernel: build for a bare-metal target, e.g. `--target x86_64-unknown-none`, and boot the image");
}
