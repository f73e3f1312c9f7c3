//! Debug probe log ports.
//!
//! Available with the `log` feature. The report is written to one of the
//! numbered log ports, which the debug probe forwards to the host. The
//! transport itself is provided by the Drone runtime through the `drone_log_*`
//! symbols, so firmware without the Drone runtime (e.g. AVR) should disable
//! the feature and print the report to its own [`core::fmt::Write`] sink.

#![cfg_attr(
    any(feature = "host", not(target_os = "none")),
    allow(unreachable_code, unused_variables)
)]

mod port;

pub use self::port::Port;

use core::fmt::Write;

#[cfg(all(target_os = "none", not(feature = "host")))]
extern "C" {
    fn drone_log_is_enabled(port: u8) -> bool;
    fn drone_log_write_bytes(port: u8, exclusive: bool, buffer: *const u8, count: usize);
    fn drone_log_flush();
}

/// Number of available log ports.
pub const PORTS_COUNT: u8 = 32;

/// Port number of the standard output stream.
pub const STDOUT_PORT: u8 = 0;

/// Port number of the standard error stream.
pub const STDERR_PORT: u8 = 1;

/// Returns port for standard output.
#[inline]
#[must_use]
pub fn stdout() -> Port {
    Port::new(STDOUT_PORT)
}

/// Returns port for standard error.
#[inline]
#[must_use]
pub fn stderr() -> Port {
    Port::new(STDERR_PORT)
}

/// Writes `string` to the log port number `port`.
///
/// The presence of the debug probe is not checked, so it is recommended to use
/// this function together with [`Port::is_enabled`].
///
/// # Examples
///
/// ```
/// use drone_memusage::{log, usage, Facts};
///
/// let facts = Facts::new((0x100, 0x8FF));
/// if log::stderr().is_enabled() {
///     let line = format!("Free mem:   {} Bytes\n", usage::free_mem_size(&facts));
///     log::write_str(log::STDERR_PORT, &line);
/// }
/// ```
#[inline(never)]
pub fn write_str(port: u8, string: &str) {
    Port::new(port).write_str(string).unwrap_or(());
}

/// Blocks until all pending bytes are transmitted.
///
/// This function is a no-op if no debug probe is connected and listening.
#[inline]
pub fn flush() {
    #[cfg(any(feature = "host", not(target_os = "none")))]
    return;
    #[cfg(all(target_os = "none", not(feature = "host")))]
    unsafe {
        drone_log_flush();
    }
}
