//! Core library for generating numbered sandboxed process service classes.
//!
//! Android needs one distinctly named service class per sandboxed process
//! slot. This crate renders those classes from a fixed Java template and
//! packs them into a hermetic, uncompressed srcjar that is published
//! atomically to the requested output path.
//!
//! ```no_run
//! use childgen_core::{AtomicFilePublisher, Config, generate};
//!
//! let config = Config::new(3, "gen/sandboxed_services.srcjar");
//! let summary = generate(&config, &AtomicFilePublisher::new()).unwrap();
//! assert_eq!(summary.entries, 3);
//! ```

pub mod archive;
pub mod config;
pub mod error;
pub mod generate;
pub mod publish;
pub mod template;

pub use crate::{
    archive::ArchiveBuilder,
    config::{Config, SlotCount},
    error::{Error, Result},
    generate::{build_archive, generate, GenerateSummary},
    publish::{AtomicFilePublisher, PublishOutcome, Publisher},
    template::{entry_name, render_service, RenderedUnit},
};
