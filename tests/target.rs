use core::hint::black_box;
use drone_memusage::{compat, platform, usage, Facts, Platform, Target};

#[inline(never)]
fn stack_pointer_at_depth(depth: u32) -> usize {
    let frame = black_box([0_u8; 64]);
    let sp = if depth == 0 { platform::stack_pointer() } else { stack_pointer_at_depth(depth - 1) };
    black_box(&frame);
    sp
}

#[test]
fn stack_pointer_follows_call_depth() {
    let shallow = stack_pointer_at_depth(0);
    let deep = stack_pointer_at_depth(16);
    assert!(deep < shallow);
}

#[test]
fn live_stack_size() {
    let target = Target::new((0, usize::MAX));
    let outer = usage::stack_size(&target);
    let inner = {
        #[inline(never)]
        fn nested(target: &Target) -> usize {
            let frame = black_box([0_u8; 256]);
            let size = usage::stack_size(target);
            black_box(&frame);
            size
        }
        nested(&target)
    };
    assert!(inner > outer);
}

#[test]
fn ram_bounds_passed_through() {
    let target = Target::new((0x100, 0x8FF));
    assert_eq!(target.ram_bounds(), (0x100, 0x8FF));
    assert_eq!(usage::ram_size(&target), 2048);
    assert_eq!(compat::get_ram_size(&target), 2048);
}

#[test]
#[should_panic]
fn linker_symbols_unavailable_on_host() {
    let _ = usage::data_section_size(&Target::new((0, 2047)));
}

#[test]
fn historical_names() {
    let facts = Facts::new((0, 2047))
        .with_data(0x100, 0x140)
        .with_bss(0x140, 0x160)
        .with_stack_pointer(2047 - 100)
        .with_heap(0x300, Some(0x350));
    assert_eq!(compat::get_ram_size(&facts), 2048);
    assert_eq!(compat::get_data_section_size(&facts), 64);
    assert_eq!(compat::get_bss_section_size(&facts), 32);
    assert_eq!(compat::get_stack_size(&facts), 100);
    assert_eq!(compat::get_heap_size(&facts), 80);
    assert_eq!(compat::get_free_mem_size(&facts), 1772);
}
