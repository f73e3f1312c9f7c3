//! Memory accounting.
//!
//! Every function here is a stateless query over the current [`Platform`]
//! facts. Subtractions wrap: a stack colliding with the heap makes
//! [`free_mem_size`] wrap around to a value close to `usize::MAX`, which is
//! reported as is.

use crate::platform::Platform;

/// Returns the RAM size in bytes.
#[inline]
pub fn ram_size<P: Platform + ?Sized>(platform: &P) -> usize {
    let (first, last) = platform.ram_bounds();
    last.wrapping_sub(first).wrapping_add(1)
}

/// Returns the `.data` section size in bytes.
#[inline]
pub fn data_section_size<P: Platform + ?Sized>(platform: &P) -> usize {
    let (start, end) = platform.data_section_bounds();
    end.wrapping_sub(start)
}

/// Returns the `.bss` section size in bytes.
#[inline]
pub fn bss_section_size<P: Platform + ?Sized>(platform: &P) -> usize {
    let (start, end) = platform.bss_section_bounds();
    end.wrapping_sub(start)
}

/// Returns the number of bytes between the end of RAM and the current stack
/// pointer.
///
/// This is the stack usage at the moment of the call, not a high-water mark.
#[inline]
pub fn stack_size<P: Platform + ?Sized>(platform: &P) -> usize {
    let (_, last) = platform.ram_bounds();
    last.wrapping_sub(platform.stack_pointer())
}

/// Returns the number of bytes between the heap start and the current heap
/// break, or `0` if the heap has never been used.
#[inline]
pub fn heap_size<P: Platform + ?Sized>(platform: &P) -> usize {
    match platform.heap_break() {
        Some(brk) => brk.wrapping_sub(platform.heap_start()),
        None => 0,
    }
}

/// Returns the number of bytes left between the heap and the stack.
///
/// Each term is read separately, so an interrupt pushing to the stack in
/// between can make the result inconsistent with the other queries. Use
/// [`Usage::sample`] for a consistent set.
#[inline]
pub fn free_mem_size<P: Platform + ?Sized>(platform: &P) -> usize {
    ram_size(platform)
        .wrapping_sub(stack_size(platform))
        .wrapping_sub(heap_size(platform))
        .wrapping_sub(bss_section_size(platform))
        .wrapping_sub(data_section_size(platform))
}

/// One of the quantities of a memory usage report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quantity {
    /// Total RAM size.
    Ram,
    /// `.data` section size.
    Data,
    /// `.bss` section size.
    Bss,
    /// Current stack usage.
    Stack,
    /// Current heap usage.
    Heap,
    /// Memory left between the heap and the stack.
    Free,
}

impl Quantity {
    /// All quantities in the report order.
    pub const ALL: [Self; 6] =
        [Self::Ram, Self::Data, Self::Bss, Self::Stack, Self::Heap, Self::Free];
}

/// Memory usage sampled at once.
///
/// The free memory is derived from the same samples as the other fields, so
/// `ram == data + bss + stack + heap + free` holds exactly in wrapping
/// arithmetic.
///
/// # Examples
///
/// ```
/// use drone_memusage::{Facts, Usage};
///
/// let facts = Facts::new((0, 2047))
///     .with_data(0x100, 0x140)
///     .with_bss(0x140, 0x160)
///     .with_stack_pointer(2047 - 100)
///     .with_heap(0x300, Some(0x350));
/// let usage = Usage::sample(&facts);
/// assert_eq!(usage.free, 1772);
/// assert!(!usage.is_overrun());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Usage {
    /// Total RAM size.
    pub ram: usize,
    /// `.data` section size.
    pub data: usize,
    /// `.bss` section size.
    pub bss: usize,
    /// Current stack usage.
    pub stack: usize,
    /// Current heap usage.
    pub heap: usize,
    /// Memory left between the heap and the stack.
    pub free: usize,
}

impl Usage {
    /// Samples every platform fact once and computes the usage.
    ///
    /// The stack pointer is read first, before the rest of the facts, so the
    /// sampling itself doesn't show up in the stack usage.
    pub fn sample<P: Platform + ?Sized>(platform: &P) -> Self {
        let stack = stack_size(platform);
        Self::from_parts(
            ram_size(platform),
            data_section_size(platform),
            bss_section_size(platform),
            stack,
            heap_size(platform),
        )
    }

    /// Assembles the usage from the four used regions and the RAM size,
    /// deriving the free memory.
    #[must_use]
    pub const fn from_parts(
        ram: usize,
        data: usize,
        bss: usize,
        stack: usize,
        heap: usize,
    ) -> Self {
        let free =
            ram.wrapping_sub(stack).wrapping_sub(heap).wrapping_sub(bss).wrapping_sub(data);
        Self { ram, data, bss, stack, heap, free }
    }

    /// Returns the value of `quantity`.
    #[must_use]
    pub const fn get(&self, quantity: Quantity) -> usize {
        match quantity {
            Quantity::Ram => self.ram,
            Quantity::Data => self.data,
            Quantity::Bss => self.bss,
            Quantity::Stack => self.stack,
            Quantity::Heap => self.heap,
            Quantity::Free => self.free,
        }
    }

    /// Returns the total of the used regions.
    #[must_use]
    pub const fn used(&self) -> usize {
        self.data.wrapping_add(self.bss).wrapping_add(self.stack).wrapping_add(self.heap)
    }

    /// Returns `true` if the used regions don't fit into RAM, which means the
    /// stack and the heap have collided. [`Usage::free`] is a wrapped value in
    /// this case.
    #[must_use]
    pub const fn is_overrun(&self) -> bool {
        match self.data.checked_add(self.bss) {
            Some(sum) => match sum.checked_add(self.stack) {
                Some(sum) => match sum.checked_add(self.heap) {
                    Some(sum) => sum > self.ram,
                    None => true,
                },
                None => true,
            },
            None => true,
        }
    }
}
