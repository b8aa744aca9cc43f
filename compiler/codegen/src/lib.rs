#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Code generation for element bindings.
//!
//! This crate turns catalog descriptors into ready-to-compile Rust source
//! files. It covers the whole per-entry path: deriving identifier spellings
//! from a descriptor, rendering the two fixed templates against them,
//! validating and normalizing the rendered text, and persisting the result.
//!
//! Catalog loading and batch orchestration live in companion crates.

use std::fmt;

use thiserror::Error;

pub mod derive;
pub mod format;
pub mod generators;
pub mod utils;
pub mod write;

pub use derive::{derive_names, DerivedNames, ResolvedAttribute};
pub use format::format_source;
pub use generators::{ElementGenerator, TestGenerator};
pub use write::{artifact_file_name, write_artifact};

/// Error type for code generation operations in this crate.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// A template placeholder survived substitution.
    #[error("template placeholder `{0}` was not substituted")]
    UnrenderedPlaceholder(String),
    /// Rendered text is not well-formed Rust source.
    #[error("generated source failed to parse: {0}")]
    Parse(#[from] syn::Error),
    /// Underlying I/O error while writing generated files.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenient result type for codegen functions in this crate.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// The two artifact kinds generated for every catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// The element binding source file.
    Element,
    /// The companion test file.
    Test,
}

impl ArtifactKind {
    /// File-name suffix appended to the entry key.
    pub fn suffix(self) -> &'static str {
        match self {
            ArtifactKind::Element => "_elem.rs",
            ArtifactKind::Test => "_elem_test.rs",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactKind::Element => write!(f, "element"),
            ArtifactKind::Test => write!(f, "test"),
        }
    }
}

/// Defines the core interface for producing one generated source file from a
/// derived-name record. Implementors render a fixed template by placeholder
/// substitution; they perform no further name derivation and hold no state
/// across calls.
pub trait ArtifactGenerator {
    /// Which artifact this generator produces.
    fn kind(&self) -> ArtifactKind;

    /// Render the template against one derived-name record.
    fn render(&self, names: &DerivedNames) -> Result<String>;
}
