use drone_memusage::{usage, Facts, Quantity, Usage};

const RAM: (usize, usize) = (0, 2047);

fn layout() -> Facts {
    Facts::new(RAM)
        .with_data(0x100, 0x140)
        .with_bss(0x140, 0x160)
        .with_stack_pointer(2047 - 100)
        .with_heap(0x300, Some(0x350))
}

#[test]
fn ram_size() {
    assert_eq!(usage::ram_size(&Facts::new(RAM)), 2048);
    assert_eq!(usage::ram_size(&Facts::new((0x100, 0x8FF))), 2048);
    assert_eq!(usage::ram_size(&Facts::new((0x100, 0x100))), 1);
}

#[test]
fn section_sizes() {
    let facts = layout();
    assert_eq!(usage::data_section_size(&facts), 64);
    assert_eq!(usage::bss_section_size(&facts), 32);
}

#[test]
fn sections_depend_only_on_own_bounds() {
    let facts = layout();
    let moved = facts.with_stack_pointer(0x400).with_heap(0x200, Some(0x7FF)).with_bss(0, 0x10);
    assert_eq!(usage::data_section_size(&moved), usage::data_section_size(&facts));
    let moved = facts.with_data(0x10, 0x20).with_stack_pointer(0x400);
    assert_eq!(usage::bss_section_size(&moved), usage::bss_section_size(&facts));
}

#[test]
fn unused_heap() {
    for start in [0, 0x300, 0x7FF, usize::MAX] {
        assert_eq!(usage::heap_size(&layout().with_heap(start, None)), 0);
    }
}

#[test]
fn used_heap() {
    assert_eq!(usage::heap_size(&layout()), 80);
    assert_eq!(usage::heap_size(&layout().with_heap(0x300, Some(0x300))), 0);
}

#[test]
fn stack_grows_down() {
    let facts = layout();
    assert_eq!(usage::stack_size(&facts), 100);
    let mut previous = usage::stack_size(&facts.with_stack_pointer(2047));
    assert_eq!(previous, 0);
    for sp in (0x700..2047).rev() {
        let size = usage::stack_size(&facts.with_stack_pointer(sp));
        assert!(size > previous);
        previous = size;
    }
}

#[test]
fn free_memory() {
    assert_eq!(usage::free_mem_size(&layout()), 2048 - 64 - 32 - 100 - 80);
    assert_eq!(usage::free_mem_size(&layout()), 1772);
}

#[test]
fn untouched_ram_is_free() {
    assert_eq!(usage::free_mem_size(&Facts::new(RAM)), 2048);
}

#[test]
fn regions_add_up_to_ram() {
    let facts = [
        layout(),
        Facts::new((0x100, 0x8FF)),
        layout().with_heap(0x160, Some(0x600)).with_stack_pointer(0x650),
        layout().with_heap(0x160, None).with_stack_pointer(0x161),
    ];
    for facts in facts {
        let total = usage::data_section_size(&facts)
            + usage::bss_section_size(&facts)
            + usage::stack_size(&facts)
            + usage::heap_size(&facts)
            + usage::free_mem_size(&facts);
        assert_eq!(total, usage::ram_size(&facts));
    }
}

#[test]
fn stack_heap_collision_wraps() {
    let facts = layout().with_heap(0x160, Some(0x700)).with_stack_pointer(0x500);
    let free = usage::free_mem_size(&facts);
    assert_eq!(free, 2048_usize.wrapping_sub(64 + 32 + 1440 + 767));
    assert!(free > usage::ram_size(&facts));
    let usage = Usage::sample(&facts);
    assert_eq!(usage.free, free);
    assert!(usage.is_overrun());
    assert_eq!(usage.used().wrapping_add(usage.free), usage.ram);
}

#[test]
fn inverted_section_bounds_wrap() {
    let facts = layout().with_data(0x140, 0x100);
    assert_eq!(usage::data_section_size(&facts), 0_usize.wrapping_sub(64));
}

#[test]
fn sample() {
    let usage = Usage::sample(&layout());
    assert_eq!(usage, Usage { ram: 2048, data: 64, bss: 32, stack: 100, heap: 80, free: 1772 });
    assert_eq!(usage.used(), 276);
    assert!(!usage.is_overrun());
    assert_eq!(usage, Usage::from_parts(2048, 64, 32, 100, 80));
}

#[test]
fn quantities() {
    let usage = Usage::from_parts(2048, 64, 32, 100, 80);
    let values = Quantity::ALL.map(|quantity| usage.get(quantity));
    assert_eq!(values, [2048, 64, 32, 100, 80, 1772]);
}

#[test]
fn capture() {
    let facts = layout();
    assert_eq!(Facts::capture(&facts), facts);
    assert_eq!(Facts::capture(&&facts), facts);
}
