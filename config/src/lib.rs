//! `Drone.toml` memory layout for drone-memusage.
//!
//! The configuration is read at compile time by the procedural macros. Only
//! the `[memory]` section is consulted, every other section of the file is
//! ignored, so the same `Drone.toml` can be shared with the rest of the Drone
//! tooling.
//!
//! ```toml
//! [memory]
//! ram = { size = "2K", origin = 0x100 }
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]

mod size;

pub use self::size::parse_size;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::{env, fs, path::Path};

/// The name of the configuration file.
pub const CONFIG_NAME: &str = "Drone.toml";

/// Environment variable which, when set, holds configuration contents taking
/// precedence over [`CONFIG_NAME`].
pub const OVERRIDE_VAR: &str = "CARGO_MANIFEST_DIR_OVERRIDE";

/// The top-level configuration object.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Memory layout.
    pub memory: Memory,
}

/// Memory layout of the target device.
#[derive(Debug, Deserialize)]
pub struct Memory {
    /// The RAM region.
    pub ram: Region,
}

/// A contiguous memory region.
#[derive(Debug, Deserialize)]
pub struct Region {
    /// Region size in bytes.
    #[serde(deserialize_with = "size::deserialize")]
    pub size: u32,
    /// Address of the first byte of the region.
    pub origin: u32,
}

impl Config {
    /// Reads the configuration for the crate being compiled.
    ///
    /// The contents of [`OVERRIDE_VAR`] are used if the variable is set,
    /// otherwise [`CONFIG_NAME`] is read from `CARGO_MANIFEST_DIR`.
    pub fn read_from_cargo_manifest_dir() -> Result<Self> {
        if let Ok(contents) = env::var(OVERRIDE_VAR) {
            return Self::parse(&contents);
        }
        let crate_root = env::var("CARGO_MANIFEST_DIR")
            .context("`CARGO_MANIFEST_DIR` is not set, not running under cargo")?;
        Self::read_from_path(Path::new(&crate_root).join(CONFIG_NAME))
    }

    /// Validates `contents` and makes them the result of the subsequent
    /// [`Config::read_from_cargo_manifest_dir`] calls in this process.
    ///
    /// # Errors
    ///
    /// If `contents` is not a valid configuration, in which case the previous
    /// override, if any, stays in effect.
    pub fn set_override(contents: &str) -> Result<Self> {
        let config = Self::parse(contents)?;
        env::set_var(OVERRIDE_VAR, contents);
        Ok(config)
    }

    /// Reads the configuration from the file at `path`.
    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("couldn't read `{}`", path.display()))?;
        Self::parse(&contents)
    }

    /// Parses and validates configuration `contents`.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.memory.ram.bounds().context("invalid `memory.ram`")?;
        Ok(config)
    }
}

impl Region {
    /// Returns inclusive `(first, last)` addresses of the region.
    ///
    /// # Errors
    ///
    /// If the region is empty or extends past the end of the address space.
    pub fn bounds(&self) -> Result<(u32, u32)> {
        let Self { size, origin } = *self;
        if size == 0 {
            bail!("`size` must be non-zero");
        }
        match origin.checked_add(size - 1) {
            Some(last) => Ok((origin, last)),
            None => bail!("region {origin:#X}+{size} overflows the address space"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn avr_layout() {
        let config = Config::parse(
            r#"
            [memory]
            ram = { size = "2K", origin = 0x100 }
            "#,
        )
        .unwrap();
        assert_eq!(config.memory.ram.size, 2048);
        assert_eq!(config.memory.ram.bounds().unwrap(), (0x100, 0x8FF));
    }

    #[test]
    fn foreign_sections_ignored() {
        let config = Config::parse(
            r#"
            [memory]
            flash = { size = "128K", origin = 0x08000000 }
            ram = { size = "20K", origin = 0x20000000 }
            [heap]
            size = "10K"
            pools = []
            [probe]
            gdb-client-command = "gdb-multiarch"
            "#,
        )
        .unwrap();
        assert_eq!(config.memory.ram.bounds().unwrap(), (0x2000_0000, 0x2000_4FFF));
    }

    #[test]
    fn numeric_size() {
        let config = Config::parse("[memory]\nram = { size = 512, origin = 0 }\n").unwrap();
        assert_eq!(config.memory.ram.bounds().unwrap(), (0, 511));
    }

    #[test]
    fn empty_ram() {
        let err = Config::parse("[memory]\nram = { size = \"0\", origin = 0x100 }\n").unwrap_err();
        assert!(format!("{err:#}").contains("non-zero"));
    }

    #[test]
    fn ram_past_address_space() {
        let err = Config::parse("[memory]\nram = { size = \"1M\", origin = 0xFFFFFF00 }\n")
            .unwrap_err();
        assert!(format!("{err:#}").contains("overflows"));
    }

    #[test]
    fn override_takes_precedence() {
        let invalid = "[memory]\nram = { size = \"0\", origin = 0 }\n";
        assert!(Config::set_override(invalid).is_err());
        let valid = "[memory]\nram = { size = \"4K\", origin = 0x200 }\n";
        let config = Config::set_override(valid).unwrap();
        assert_eq!(config.memory.ram.bounds().unwrap(), (0x200, 0x11FF));
        assert!(Config::set_override(invalid).is_err());
        let config = Config::read_from_cargo_manifest_dir().unwrap();
        assert_eq!(config.memory.ram.bounds().unwrap(), (0x200, 0x11FF));
    }

    #[test]
    fn missing_memory() {
        assert!(Config::parse("[heap]\nsize = \"0\"\n").is_err());
    }
}
