#![cfg_attr(
    any(feature = "host", not(target_os = "none")),
    allow(unreachable_code, clippy::unused_self)
)]

use super::Platform;
#[cfg(any(
    target_arch = "arm",
    target_arch = "aarch64",
    target_arch = "riscv32",
    target_arch = "riscv64",
    target_arch = "x86_64",
))]
use core::arch::asm;
#[cfg(not(any(
    target_arch = "avr",
    target_arch = "arm",
    target_arch = "aarch64",
    target_arch = "riscv32",
    target_arch = "riscv64",
    target_arch = "x86_64",
)))]
use core::hint::black_box;
#[allow(unused_imports)]
use core::ptr;

// Symbols emitted by the linker script and the allocator runtime. The names
// follow the avr-libc conventions.
#[cfg(all(target_os = "none", not(feature = "host")))]
extern "C" {
    static __data_start: u8;
    static __data_end: u8;
    static __bss_start: u8;
    static __bss_end: u8;
    static __heap_start: u8;
    static __brkval: *mut u8;
}

/// Platform facts of the running firmware.
///
/// Section boundaries and the heap start are the addresses of the
/// `__data_start`, `__data_end`, `__bss_start`, `__bss_end` and
/// `__heap_start` linker symbols. The heap break is the value of the
/// allocator's `__brkval` pointer. RAM bounds are not known to the linker
/// symbols and should be passed to [`Target::new`], usually with
/// [`ram_bounds!`](crate::ram_bounds).
///
/// # Panics
///
/// On host builds, where the linker symbols don't exist, every method except
/// [`Platform::stack_pointer`] and [`Platform::ram_bounds`] panics.
#[derive(Clone, Copy, Debug)]
pub struct Target {
    ram: (usize, usize),
}

impl Target {
    /// Creates the platform adapter for the inclusive RAM range `ram`.
    #[must_use]
    pub const fn new(ram: (usize, usize)) -> Self {
        Self { ram }
    }
}

impl Platform for Target {
    #[inline]
    fn ram_bounds(&self) -> (usize, usize) {
        self.ram
    }

    #[inline]
    fn data_section_bounds(&self) -> (usize, usize) {
        #[cfg(any(feature = "host", not(target_os = "none")))]
        return unimplemented!();
        #[cfg(all(target_os = "none", not(feature = "host")))]
        unsafe {
            (ptr::addr_of!(__data_start) as usize, ptr::addr_of!(__data_end) as usize)
        }
    }

    #[inline]
    fn bss_section_bounds(&self) -> (usize, usize) {
        #[cfg(any(feature = "host", not(target_os = "none")))]
        return unimplemented!();
        #[cfg(all(target_os = "none", not(feature = "host")))]
        unsafe {
            (ptr::addr_of!(__bss_start) as usize, ptr::addr_of!(__bss_end) as usize)
        }
    }

    #[inline(always)]
    fn stack_pointer(&self) -> usize {
        stack_pointer()
    }

    #[inline]
    fn heap_start(&self) -> usize {
        #[cfg(any(feature = "host", not(target_os = "none")))]
        return unimplemented!();
        #[cfg(all(target_os = "none", not(feature = "host")))]
        unsafe {
            ptr::addr_of!(__heap_start) as usize
        }
    }

    #[inline]
    fn heap_break(&self) -> Option<usize> {
        #[cfg(any(feature = "host", not(target_os = "none")))]
        return unimplemented!();
        #[cfg(all(target_os = "none", not(feature = "host")))]
        {
            let brk = unsafe { ptr::read_volatile(ptr::addr_of!(__brkval)) };
            (!brk.is_null()).then_some(brk as usize)
        }
    }
}

/// Reads the stack pointer register of the current CPU.
#[cfg(target_arch = "avr")]
#[inline(always)]
#[must_use]
pub fn stack_pointer() -> usize {
    // SPL and SPH mapped into the data address space.
    let low = unsafe { ptr::read_volatile(0x5D as *const u8) };
    let high = unsafe { ptr::read_volatile(0x5E as *const u8) };
    usize::from(u16::from_le_bytes([low, high]))
}

/// Reads the stack pointer register of the current CPU.
#[cfg(any(target_arch = "arm", target_arch = "aarch64"))]
#[inline(always)]
#[must_use]
pub fn stack_pointer() -> usize {
    let sp: usize;
    unsafe { asm!("mov {}, sp", out(reg) sp, options(nomem, nostack, preserves_flags)) };
    sp
}

/// Reads the stack pointer register of the current CPU.
#[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
#[inline(always)]
#[must_use]
pub fn stack_pointer() -> usize {
    let sp: usize;
    unsafe { asm!("mv {}, sp", out(reg) sp, options(nomem, nostack, preserves_flags)) };
    sp
}

/// Reads the stack pointer register of the current CPU.
#[cfg(target_arch = "x86_64")]
#[inline(always)]
#[must_use]
pub fn stack_pointer() -> usize {
    let sp: usize;
    unsafe { asm!("mov {}, rsp", out(reg) sp, options(nomem, nostack, preserves_flags)) };
    sp
}

/// Approximates the stack pointer with the address of a local variable.
#[cfg(not(any(
    target_arch = "avr",
    target_arch = "arm",
    target_arch = "aarch64",
    target_arch = "riscv32",
    target_arch = "riscv64",
    target_arch = "x86_64",
)))]
#[inline(always)]
#[must_use]
pub fn stack_pointer() -> usize {
    let marker = 0_u8;
    ptr::addr_of!(*black_box(&marker)) as usize
}
