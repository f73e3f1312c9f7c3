//! Human-readable memory usage report.
//!
//! The default layout is kept stable for log scrapers:
//!
//! ```text
//! SRAM size:  2048 Bytes
//! .data size: 64 Bytes
//! .bss size:  32 Bytes
//! Stack size: 100 Bytes
//! Heap size:  80 Bytes
//! Free mem:   1772 Bytes
//!
//! ```

#[cfg(feature = "log")]
use crate::log;
use crate::{
    platform::Platform,
    usage::{Quantity, Usage},
};
use core::fmt::{self, Write};

/// Report layout.
///
/// # Examples
///
/// ```
/// use drone_memusage::{report, report::Template, Quantity, Usage};
///
/// let usage = Usage::from_parts(2048, 64, 32, 100, 80);
/// let template = Template {
///     rows: &[(Quantity::Free, "free="), (Quantity::Stack, "stack=")],
///     unit: "",
///     line_ending: " ",
/// };
/// let mut line = String::new();
/// report::write(&mut line, &usage, &template).unwrap();
/// assert_eq!(line, "free=1772 stack=100  ");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Template<'a> {
    /// Quantities to print in order, each with a label printed in front of the
    /// value.
    pub rows: &'a [(Quantity, &'a str)],
    /// Text printed after each value.
    pub unit: &'a str,
    /// Line terminator. An empty line follows the last row.
    pub line_ending: &'a str,
}

const DEFAULT_ROWS: [(Quantity, &str); 6] = [
    (Quantity::Ram, "SRAM size:  "),
    (Quantity::Data, ".data size: "),
    (Quantity::Bss, ".bss size:  "),
    (Quantity::Stack, "Stack size: "),
    (Quantity::Heap, "Heap size:  "),
    (Quantity::Free, "Free mem:   "),
];

impl Template<'static> {
    /// The standard report with `\n` line endings.
    pub const DEFAULT: Self = Self { rows: &DEFAULT_ROWS, unit: " Bytes", line_ending: "\n" };

    /// The standard report with `\r\n` line endings, as a serial console
    /// prints it.
    pub const SERIAL: Self = Self { line_ending: "\r\n", ..Self::DEFAULT };
}

impl Default for Template<'static> {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Writes `usage` to `w` laid out with `template`.
///
/// # Errors
///
/// Propagates errors of the underlying writer.
pub fn write<W: Write + ?Sized>(w: &mut W, usage: &Usage, template: &Template<'_>) -> fmt::Result {
    for &(quantity, label) in template.rows {
        write!(w, "{label}{}{}{}", usage.get(quantity), template.unit, template.line_ending)?;
    }
    w.write_str(template.line_ending)
}

/// Samples `platform` and prints the default report to `w`, for example a
/// serial port.
///
/// # Errors
///
/// Propagates errors of the underlying writer.
pub fn print<W, P>(w: &mut W, platform: &P) -> fmt::Result
where
    W: Write + ?Sized,
    P: Platform + ?Sized,
{
    write(w, &Usage::sample(platform), &Template::DEFAULT)
}

/// Samples `platform` and prints the default report to the standard output log
/// port.
///
/// Does nothing when no debug probe listens to the port.
#[cfg(feature = "log")]
pub fn log<P: Platform + ?Sized>(platform: &P) {
    let mut port = log::stdout();
    if port.is_enabled() {
        print(&mut port, platform).unwrap_or(());
    }
}

impl fmt::Display for Usage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write(f, self, &Template::DEFAULT)
    }
}
