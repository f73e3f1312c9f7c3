#![cfg(feature = "log")]

use drone_memusage::{log, report, Facts};

#[test]
fn report_without_probe() {
    assert!(!log::stdout().is_enabled());
    report::log(&Facts::new((0, 2047)));
    log::write_str(log::STDERR_PORT, "Free mem:   2048 Bytes\n");
    log::flush();
}

#[test]
fn port_numbers() {
    assert_eq!(log::stdout().number(), log::STDOUT_PORT);
    assert_eq!(log::stderr().number(), log::STDERR_PORT);
    assert_eq!(log::Port::new(log::PORTS_COUNT - 1).number(), 31);
}

#[test]
#[should_panic]
fn port_out_of_range() {
    let _ = log::Port::new(log::PORTS_COUNT);
}
