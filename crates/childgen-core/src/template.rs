//! Java source template for the numbered sandboxed process services.
//!
//! Android requires one manifest-registered service class per sandboxed
//! process slot, so each slot gets its own trivial subclass. The functions
//! here are pure: the same index always renders the same bytes.
//!
//! # Examples
//!
//! ```
//! use childgen_core::template::{entry_name, render_service};
//!
//! assert_eq!(
//!     entry_name(1),
//!     "org/chromium/content/app/SandboxedProcessService1.java"
//! );
//! assert!(render_service(1)
//!     .contains("public class SandboxedProcessService1 extends SandboxedProcessService {"));
//! ```

/// Package directory of the generated classes inside the srcjar
pub const PACKAGE_PATH: &str = "org/chromium/content/app";

/// Name of the base class; also the prefix of every generated class
pub const CLASS_PREFIX: &str = "SandboxedProcessService";

/// File extension of the generated sources
pub const SOURCE_EXTENSION: &str = "java";

/// Renders the Java source for the service in slot `index`.
///
/// Only the declared class name carries the index; the superclass stays the
/// unnumbered base service.
pub fn render_service(index: u32) -> String {
    format!(
        r"// THIS FILE IS GENERATED BY generate_child_service.py

package org.chromium.content.app;

/**
 * This is needed to register multiple SandboxedProcess services so that we
 * can have more than one sandboxed process.
 */
public class {CLASS_PREFIX}{index} extends {CLASS_PREFIX} {{
}}"
    )
}

/// Archive entry path of the service in slot `index`
pub fn entry_name(index: u32) -> String {
    format!("{PACKAGE_PATH}/{CLASS_PREFIX}{index}.{SOURCE_EXTENSION}")
}

/// One generated source file: its archive path and contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedUnit {
    /// Archive entry path
    pub name: String,
    /// Java source text
    pub content: String,
}

impl RenderedUnit {
    /// Renders the unit for slot `index`
    pub fn for_index(index: u32) -> Self {
        Self {
            name: entry_name(index),
            content: render_service(index),
        }
    }
}
