//! Run configuration for srcjar generation.
//!
//! This module defines the [`SlotCount`] parsed from the first positional
//! argument and the [`Config`] that bundles it with the output path. A run is
//! fully described by these two values; there is no configuration file.
//!
//! # Examples
//!
//! ```
//! use childgen_core::config::{Config, SlotCount};
//!
//! let count: SlotCount = "3".parse().unwrap();
//! let config = Config::new(count, "out/child_service.srcjar");
//! assert_eq!(config.count.get(), 3);
//! assert_eq!(config.count.indices().collect::<Vec<_>>(), vec![0, 1, 2]);
//! ```

// Internal imports (std, crate)
use std::fmt;
use std::ops::Range;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::Error;

/// Number of service variants to generate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotCount(u32);

impl SlotCount {
    /// Wraps a raw count
    pub const fn new(count: u32) -> Self {
        Self(count)
    }

    /// Returns the raw count
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Indices of the variants to generate, ascending from zero
    pub fn indices(self) -> Range<u32> {
        0..self.0
    }
}

impl From<u32> for SlotCount {
    fn from(count: u32) -> Self {
        Self(count)
    }
}

impl fmt::Display for SlotCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SlotCount {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.starts_with('-') && trimmed.len() > 1 {
            return Err(Error::invalid_argument(format!(
                "number must not be negative, got '{s}'"
            )));
        }
        trimmed.parse::<u32>().map(Self).map_err(|e| {
            Error::invalid_argument(format!(
                "number must be a non-negative integer, got '{s}': {e}"
            ))
        })
    }
}

/// Resolved invocation for a single generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// How many service variants to generate
    pub count: SlotCount,

    /// Path of the archive to produce
    pub output: PathBuf,
}

impl Config {
    /// Create a new Config
    pub fn new(count: impl Into<SlotCount>, output: impl Into<PathBuf>) -> Self {
        Self {
            count: count.into(),
            output: output.into(),
        }
    }
}
