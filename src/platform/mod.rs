//! Platform facts.
//!
//! The memory accounting needs six facts about the running program: the RAM
//! extent, the boundaries of the `.data` and `.bss` sections, the current
//! stack pointer, the heap start address and the current heap break. The
//! [`Platform`] trait is the seam between the portable arithmetic in
//! [`usage`](crate::usage) and the code that gathers the facts.

mod facts;
mod target;

pub use self::{
    facts::Facts,
    target::{stack_pointer, Target},
};

/// Source of the platform facts.
///
/// Every method is a plain read of the machine state at the moment of the
/// call. Reads are not synchronized with each other.
pub trait Platform {
    /// Returns inclusive `(first, last)` RAM addresses.
    fn ram_bounds(&self) -> (usize, usize);

    /// Returns `(start, end)` addresses of the `.data` section, `end` is
    /// exclusive.
    fn data_section_bounds(&self) -> (usize, usize);

    /// Returns `(start, end)` addresses of the `.bss` section, `end` is
    /// exclusive.
    fn bss_section_bounds(&self) -> (usize, usize);

    /// Returns the current value of the stack pointer.
    fn stack_pointer(&self) -> usize;

    /// Returns the address the heap grows from.
    fn heap_start(&self) -> usize;

    /// Returns the current heap break, or `None` if the allocator has never
    /// allocated.
    fn heap_break(&self) -> Option<usize>;
}

impl<P: Platform + ?Sized> Platform for &P {
    #[inline]
    fn ram_bounds(&self) -> (usize, usize) {
        (**self).ram_bounds()
    }

    #[inline]
    fn data_section_bounds(&self) -> (usize, usize) {
        (**self).data_section_bounds()
    }

    #[inline]
    fn bss_section_bounds(&self) -> (usize, usize) {
        (**self).bss_section_bounds()
    }

    #[inline]
    fn stack_pointer(&self) -> usize {
        (**self).stack_pointer()
    }

    #[inline]
    fn heap_start(&self) -> usize {
        (**self).heap_start()
    }

    #[inline]
    fn heap_break(&self) -> Option<usize> {
        (**self).heap_break()
    }
}
