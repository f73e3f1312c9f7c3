use drone_memusage::{usage, Target};

drone_memusage::config_override! { "
[memory]
flash = { size = \"32K\", origin = 0x0 }
ram = { size = \"2K\", origin = 0x100 }
" }

#[test]
fn ram_bounds_from_config() {
    assert_eq!(drone_memusage::ram_bounds!(), (0x100, 0x8FF));
}

#[test]
fn target_from_config() {
    let target = Target::new(drone_memusage::ram_bounds!());
    assert_eq!(usage::ram_size(&target), 2048);
}
