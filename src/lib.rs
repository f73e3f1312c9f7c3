//! Run-time RAM usage report for bare-metal firmware.
//!
//! The crate answers a simple question: where did the RAM go? It splits the
//! single contiguous RAM region of a microcontroller into the `.data` and
//! `.bss` sections, the heap growing up from the end of `.bss`, the stack
//! growing down from the end of RAM, and whatever remains between the heap and
//! the stack.
//!
//! ```text
//! ram_start                                                        ram_end
//! | .data | .bss | heap -->          free           <-- stack |
//!                ^heap_start  ^heap_break   stack_pointer^
//! ```
//!
//! The arithmetic in [`usage`] is portable and works over any [`Platform`]
//! implementation. [`Target`] gathers the facts from linker symbols and the
//! stack pointer register of the running firmware.
//!
//! # Usage
//!
//! Add the memory layout to the `Drone.toml`:
//!
//! ```toml
//! [memory]
//! ram = { size = "2K", origin = 0x100 }
//! ```
//!
//! Then in the application code:
//!
//! ```no_run
//! # drone_memusage::config_override! { "
//! # [memory]
//! # ram = { size = \"2K\", origin = 0x100 }
//! # " }
//! # struct Usart;
//! # impl core::fmt::Write for Usart {
//! #     fn write_str(&mut self, _: &str) -> core::fmt::Result { Ok(()) }
//! # }
//! # let mut serial = Usart;
//! use drone_memusage::{report, Target};
//!
//! // `serial` is any `core::fmt::Write` sink, e.g. the USART of an AVR board.
//! let target = Target::new(drone_memusage::ram_bounds!());
//! report::print(&mut serial, &target)?;
//! # Ok::<(), core::fmt::Error>(())
//! ```
//!
//! which prints:
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
//!
//! # Exhaustion
//!
//! All sizes are computed with wrapping unsigned arithmetic. When the stack
//! and the heap collide, the free memory wraps around to a huge value instead
//! of going negative. Such a value is a diagnostic in its own right and is
//! never clamped.
//!
//! # Features
//!
//! * `log` (default): [`log`] ports of the Drone debug probe runtime and
//!   [`report::log`]. Disable it on firmware without the Drone runtime.
//! * `host`: stub out linker symbols and runtime calls.

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(not(test), no_std)]

pub mod compat;
#[cfg(feature = "log")]
pub mod log;
pub mod platform;
pub mod report;
pub mod usage;

pub use self::{
    platform::{Facts, Platform, Target},
    usage::{Quantity, Usage},
};

/// Returns inclusive `(first, last)` RAM addresses defined in `Drone.toml`.
///
/// # Examples
///
/// ```
/// # drone_memusage::config_override! { "
/// # [memory]
/// # ram = { size = \"2K\", origin = 0x100 }
/// # " }
/// assert_eq!(drone_memusage::ram_bounds!(), (0x100, 0x8FF));
/// ```
#[doc(inline)]
pub use drone_memusage_macros::ram_bounds;

/// Overrides `Drone.toml` contents for the subsequent macro invocations of
/// the current crate. Intended for tests and doc examples.
#[doc(inline)]
pub use drone_memusage_macros::config_override;
