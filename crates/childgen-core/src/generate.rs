//! Srcjar generation: render every slot, assemble the archive, publish it.

// Internal imports (std, crate)
use std::io::Write;

use crate::{
    archive::ArchiveBuilder,
    config::{Config, SlotCount},
    error::Result,
    publish::{PublishOutcome, Publisher},
    template::RenderedUnit,
};

/// What a generation run produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateSummary {
    /// Number of entries in the archive
    pub entries: usize,
    /// Size of the archive in bytes
    pub bytes: usize,
    /// Whether the output file was written or already up to date
    pub outcome: PublishOutcome,
}

/// Renders slots `0..count` in ascending order and returns the finished srcjar bytes
pub fn build_archive(count: SlotCount) -> Result<Vec<u8>> {
    let mut archive = ArchiveBuilder::new();
    for index in count.indices() {
        let unit = RenderedUnit::for_index(index);
        archive.add_entry(&unit.name, unit.content.as_bytes())?;
    }
    log::debug!("Rendered {} service classes", archive.len());
    archive.finish()
}

/// Main entry point for srcjar generation
pub fn generate<P: Publisher>(config: &Config, publisher: &P) -> Result<GenerateSummary> {
    log::info!(
        "Generating {} sandboxed services into {}",
        config.count,
        config.output.display()
    );

    // 1. Render everything up front so nothing is published on a render failure
    let bytes = build_archive(config.count)?;

    // 2. Hand the finished archive to the publisher
    let outcome = publisher.publish(&config.output, |sink| {
        sink.write_all(&bytes)?;
        Ok(())
    })?;

    Ok(GenerateSummary {
        entries: config.count.get() as usize,
        bytes: bytes.len(),
        outcome,
    })
}
