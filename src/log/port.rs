#[cfg(all(target_os = "none", not(feature = "host")))]
use super::{drone_log_is_enabled, drone_log_write_bytes};
use super::PORTS_COUNT;
use core::fmt::{self, Write};

/// Log port handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Port(u8);

impl Port {
    /// Creates a new port handle.
    ///
    /// # Panics
    ///
    /// If `port` is more than or equal to [`PORTS_COUNT`].
    #[inline]
    #[must_use]
    pub fn new(port: u8) -> Self {
        assert!(port < PORTS_COUNT);
        Self(port)
    }

    /// Returns the port number.
    #[inline]
    #[must_use]
    pub fn number(self) -> u8 {
        self.0
    }

    /// Returns `true` if the debug probe is connected and listening to the
    /// port.
    #[inline]
    #[must_use]
    pub fn is_enabled(self) -> bool {
        #[cfg(any(feature = "host", not(target_os = "none")))]
        return false;
        #[cfg(all(target_os = "none", not(feature = "host")))]
        unsafe {
            drone_log_is_enabled(self.0)
        }
    }

    /// Writes a sequence of bytes to the port.
    ///
    /// The byte sequence may be interleaved with concurrent writes to the same
    /// port, the write is not exclusive.
    #[inline]
    #[allow(clippy::return_self_not_must_use)]
    pub fn write_bytes(self, bytes: &[u8]) -> Self {
        #[cfg(any(feature = "host", not(target_os = "none")))]
        return self;
        #[cfg(all(target_os = "none", not(feature = "host")))]
        unsafe {
            drone_log_write_bytes(self.0, false, bytes.as_ptr(), bytes.len());
        }
        self
    }
}

impl Write for Port {
    #[inline]
    fn write_str(&mut self, string: &str) -> fmt::Result {
        self.write_bytes(string.as_bytes());
        Ok(())
    }
}
