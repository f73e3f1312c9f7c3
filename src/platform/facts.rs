use super::Platform;

/// Platform facts held as plain values.
///
/// Useful for running the accounting on a host, for example over values read
/// out of a target by a debug probe.
///
/// # Examples
///
/// ```
/// use drone_memusage::{usage, Facts};
///
/// let facts = Facts::new((0x100, 0x8FF))
///     .with_stack_pointer(0x8FF - 100)
///     .with_heap(0x300, Some(0x350));
/// assert_eq!(usage::stack_size(&facts), 100);
/// assert_eq!(usage::heap_size(&facts), 80);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Facts {
    ram: (usize, usize),
    data: (usize, usize),
    bss: (usize, usize),
    stack_pointer: usize,
    heap_start: usize,
    heap_break: Option<usize>,
}

impl Facts {
    /// Creates facts for the inclusive RAM range `ram`.
    ///
    /// Sections and the heap start empty at the beginning of RAM, the stack
    /// pointer is at the last RAM address and the heap break is unset.
    #[must_use]
    pub const fn new(ram: (usize, usize)) -> Self {
        let (first, last) = ram;
        Self {
            ram,
            data: (first, first),
            bss: (first, first),
            stack_pointer: last,
            heap_start: first,
            heap_break: None,
        }
    }

    /// Sets the `.data` section boundaries.
    #[must_use]
    pub const fn with_data(mut self, start: usize, end: usize) -> Self {
        self.data = (start, end);
        self
    }

    /// Sets the `.bss` section boundaries.
    #[must_use]
    pub const fn with_bss(mut self, start: usize, end: usize) -> Self {
        self.bss = (start, end);
        self
    }

    /// Sets the stack pointer.
    #[must_use]
    pub const fn with_stack_pointer(mut self, address: usize) -> Self {
        self.stack_pointer = address;
        self
    }

    /// Sets the heap start address and the heap break.
    #[must_use]
    pub const fn with_heap(mut self, start: usize, brk: Option<usize>) -> Self {
        self.heap_start = start;
        self.heap_break = brk;
        self
    }

    /// Captures the facts of `platform` at once.
    pub fn capture<P: Platform + ?Sized>(platform: &P) -> Self {
        Self {
            ram: platform.ram_bounds(),
            data: platform.data_section_bounds(),
            bss: platform.bss_section_bounds(),
            stack_pointer: platform.stack_pointer(),
            heap_start: platform.heap_start(),
            heap_break: platform.heap_break(),
        }
    }
}

impl Platform for Facts {
    fn ram_bounds(&self) -> (usize, usize) {
        self.ram
    }

    fn data_section_bounds(&self) -> (usize, usize) {
        self.data
    }

    fn bss_section_bounds(&self) -> (usize, usize) {
        self.bss
    }

    fn stack_pointer(&self) -> usize {
        self.stack_pointer
    }

    fn heap_start(&self) -> usize {
        self.heap_start
    }

    fn heap_break(&self) -> Option<usize> {
        self.heap_break
    }
}
