//! Hermetic, uncompressed ZIP assembly.
//!
//! Every entry is stored verbatim with a fixed timestamp and fixed
//! permissions, so identical entries always serialize to identical bytes.

// Internal imports (std, crate)
use std::collections::HashSet;
use std::io::{Cursor, Write};

// External imports (alphabetized)
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use crate::error::{Error, Result};

/// Unix mode recorded for every entry
const HERMETIC_PERMISSIONS: u32 = 0o644;

/// Accumulates named entries into an in-memory srcjar.
///
/// [`ArchiveBuilder::finish`] consumes the builder, so an archive can only be
/// finalized once and nothing can be added afterwards.
pub struct ArchiveBuilder {
    writer: ZipWriter<Cursor<Vec<u8>>>,
    names: HashSet<String>,
}

impl ArchiveBuilder {
    /// Creates an empty archive
    pub fn new() -> Self {
        Self {
            writer: ZipWriter::new(Cursor::new(Vec::new())),
            names: HashSet::new(),
        }
    }

    /// Appends a stored entry named `name` holding `content`.
    ///
    /// Fails with [`Error::DuplicateEntry`] if `name` was already added.
    pub fn add_entry(&mut self, name: &str, content: &[u8]) -> Result<()> {
        if !self.names.insert(name.to_string()) {
            return Err(Error::DuplicateEntry(name.to_string()));
        }
        log::debug!("Adding archive entry: {} ({} bytes)", name, content.len());
        self.writer.start_file(name, hermetic_options())?;
        self.writer.write_all(content)?;
        Ok(())
    }

    /// Number of entries added so far
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no entries have been added
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Writes the central directory and returns the archive bytes
    pub fn finish(self) -> Result<Vec<u8>> {
        let cursor = self.writer.finish()?;
        Ok(cursor.into_inner())
    }
}

impl Default for ArchiveBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn hermetic_options() -> SimpleFileOptions {
    SimpleFileOptions::default()
        .compression_method(CompressionMethod::Stored)
        .last_modified_time(DateTime::default())
        .unix_permissions(HERMETIC_PERMISSIONS)
}
