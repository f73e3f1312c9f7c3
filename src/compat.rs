//! Historical names of the memory usage queries.
//!
//! Firmware ported from the Arduino `MemoryUsage` libraries can keep its call
//! sites. Each function forwards to its counterpart in [`usage`] or
//! [`report`].
//!
//! ```
//! use drone_memusage::{compat::*, Facts};
//!
//! let facts = Facts::new((0, 2047)).with_heap(0x300, None);
//! assert_eq!(get_ram_size(&facts), 2048);
//! assert_eq!(get_heap_size(&facts), 0);
//! ```

use crate::{platform::Platform, report, usage};
use core::fmt;

/// See [`usage::ram_size`].
#[inline]
pub fn get_ram_size<P: Platform + ?Sized>(platform: &P) -> usize {
    usage::ram_size(platform)
}

/// See [`usage::data_section_size`].
#[inline]
pub fn get_data_section_size<P: Platform + ?Sized>(platform: &P) -> usize {
    usage::data_section_size(platform)
}

/// See [`usage::bss_section_size`].
#[inline]
pub fn get_bss_section_size<P: Platform + ?Sized>(platform: &P) -> usize {
    usage::bss_section_size(platform)
}

/// See [`usage::stack_size`].
#[inline]
pub fn get_stack_size<P: Platform + ?Sized>(platform: &P) -> usize {
    usage::stack_size(platform)
}

/// See [`usage::heap_size`].
#[inline]
pub fn get_heap_size<P: Platform + ?Sized>(platform: &P) -> usize {
    usage::heap_size(platform)
}

/// See [`usage::free_mem_size`].
#[inline]
pub fn get_free_mem_size<P: Platform + ?Sized>(platform: &P) -> usize {
    usage::free_mem_size(platform)
}

/// See [`report::print`].
///
/// # Errors
///
/// Propagates errors of the underlying writer.
#[inline]
pub fn print_memory_usage<W, P>(w: &mut W, platform: &P) -> fmt::Result
where
    W: fmt::Write + ?Sized,
    P: Platform + ?Sized,
{
    report::print(w, platform)
}
