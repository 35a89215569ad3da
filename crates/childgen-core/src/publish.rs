//! Atomic publication of generated output.
//!
//! Generation code never touches the destination directly: it hands a
//! writer closure to a [`Publisher`], which decides how the collected bytes
//! reach the filesystem. [`AtomicFilePublisher`] writes into a temporary file
//! beside the destination and renames it into place only after the closure
//! succeeds, so a failed run never leaves a partial file at the output path.

// Internal imports (std, crate)
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

// External imports (alphabetized)
use tempfile::NamedTempFile;

use crate::error::{Error, Result};

/// What a successful publish did to the destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishOutcome {
    /// The destination was created or replaced
    Written,
    /// The destination already held identical bytes and was left alone
    Unchanged,
}

/// Capability to publish bytes to a path all at once
pub trait Publisher {
    /// Runs `write` against a sink and, only if it succeeds, replaces `path`
    /// with everything written. On error `path` is left untouched.
    fn publish<F>(&self, path: &Path, write: F) -> Result<PublishOutcome>
    where
        F: FnOnce(&mut dyn Write) -> Result<()>;
}

/// Temp-file-then-rename publisher for real output paths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtomicFilePublisher {
    only_if_changed: bool,
}

impl AtomicFilePublisher {
    /// Publisher that keeps an existing destination whose bytes already match
    pub const fn new() -> Self {
        Self {
            only_if_changed: true,
        }
    }

    /// Publisher that replaces the destination on every run
    pub const fn always_replace() -> Self {
        Self {
            only_if_changed: false,
        }
    }
}

impl Default for AtomicFilePublisher {
    fn default() -> Self {
        Self::new()
    }
}

impl Publisher for AtomicFilePublisher {
    fn publish<F>(&self, path: &Path, write: F) -> Result<PublishOutcome>
    where
        F: FnOnce(&mut dyn Write) -> Result<()>,
    {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        if !dir.exists() {
            log::debug!("Creating output directory: {}", dir.display());
            fs::create_dir_all(dir).map_err(|e| Error::publish(path, e))?;
        }

        // Same directory as the destination so the final rename stays on one filesystem.
        let mut staged = NamedTempFile::new_in(dir).map_err(|e| Error::publish(path, e))?;
        log::debug!("Staging output in: {}", staged.path().display());
        {
            let mut sink = BufWriter::new(staged.as_file_mut());
            write(&mut sink)?;
            sink.flush().map_err(|e| Error::publish(path, e))?;
        }

        if self.only_if_changed
            && same_contents(staged.path(), path).map_err(|e| Error::publish(path, e))?
        {
            log::info!("Output unchanged, keeping: {}", path.display());
            return Ok(PublishOutcome::Unchanged);
        }

        staged
            .as_file()
            .sync_all()
            .map_err(|e| Error::publish(path, e))?;
        staged
            .persist(path)
            .map_err(|e| Error::publish(path, e.error))?;
        log::info!("Wrote: {}", path.display());
        Ok(PublishOutcome::Written)
    }
}

fn same_contents(staged: &Path, existing: &Path) -> io::Result<bool> {
    let old = match fs::metadata(existing) {
        Ok(meta) if meta.is_file() => meta,
        Ok(_) => return Ok(false),
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };
    if fs::metadata(staged)?.len() != old.len() {
        return Ok(false);
    }
    Ok(fs::read(staged)? == fs::read(existing)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_publish_writes_new_file() -> Result<()> {
        let dir = tempdir()?;
        let target = dir.path().join("out.srcjar");

        let outcome = AtomicFilePublisher::new().publish(&target, |sink| {
            sink.write_all(b"payload")?;
            Ok(())
        })?;

        assert_eq!(outcome, PublishOutcome::Written);
        assert_eq!(fs::read(&target)?, b"payload");
        Ok(())
    }

    #[test]
    fn test_publish_creates_missing_parent_dirs() -> Result<()> {
        let dir = tempdir()?;
        let target = dir.path().join("gen").join("nested").join("out.srcjar");

        AtomicFilePublisher::new().publish(&target, |sink| {
            sink.write_all(b"x")?;
            Ok(())
        })?;

        assert_eq!(fs::read(&target)?, b"x");
        Ok(())
    }

    #[test]
    fn test_failed_writer_leaves_destination_untouched() -> Result<()> {
        let dir = tempdir()?;
        let target = dir.path().join("out.srcjar");
        fs::write(&target, b"previous")?;

        let result = AtomicFilePublisher::new().publish(&target, |sink| {
            sink.write_all(b"partial")?;
            Err(Error::invalid_argument("boom"))
        });

        assert!(result.is_err());
        assert_eq!(fs::read(&target)?, b"previous");
        // the staged temp file is cleaned up
        assert_eq!(fs::read_dir(dir.path())?.count(), 1);
        Ok(())
    }

    #[test]
    fn test_failed_writer_does_not_create_destination() -> Result<()> {
        let dir = tempdir()?;
        let target = dir.path().join("out.srcjar");

        let result =
            AtomicFilePublisher::new().publish(&target, |_| Err(Error::invalid_argument("boom")));

        assert!(result.is_err());
        assert!(!target.exists());
        Ok(())
    }

    #[test]
    fn test_identical_output_is_left_in_place() -> Result<()> {
        let dir = tempdir()?;
        let target = dir.path().join("out.srcjar");
        fs::write(&target, b"same")?;

        let outcome = AtomicFilePublisher::new().publish(&target, |sink| {
            sink.write_all(b"same")?;
            Ok(())
        })?;
        assert_eq!(outcome, PublishOutcome::Unchanged);
        assert_eq!(fs::read_dir(dir.path())?.count(), 1);

        let outcome = AtomicFilePublisher::always_replace().publish(&target, |sink| {
            sink.write_all(b"same")?;
            Ok(())
        })?;
        assert_eq!(outcome, PublishOutcome::Written);
        Ok(())
    }

    #[test]
    fn test_changed_output_replaces_destination() -> Result<()> {
        let dir = tempdir()?;
        let target = dir.path().join("out.srcjar");
        fs::write(&target, b"old")?;

        let outcome = AtomicFilePublisher::new().publish(&target, |sink| {
            sink.write_all(b"new")?;
            Ok(())
        })?;

        assert_eq!(outcome, PublishOutcome::Written);
        assert_eq!(fs::read(&target)?, b"new");
        Ok(())
    }

    #[test]
    fn test_unwritable_directory_is_a_publish_error() -> Result<()> {
        let dir = tempdir()?;
        let not_a_dir = dir.path().join("plain-file");
        fs::write(&not_a_dir, b"")?;
        let target = not_a_dir.join("out.srcjar");

        let result = AtomicFilePublisher::new().publish(&target, |_| Ok(()));

        assert!(matches!(result, Err(Error::Publish { ref path, .. }) if path == &target));
        Ok(())
    }
}
