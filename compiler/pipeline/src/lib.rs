#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Batch driver that generates element bindings across a whole catalog.
//!
//! The pipeline validates the catalog up front, then runs the per-entry
//! derive → render → format → write sequence for both artifact kinds, in
//! catalog key order, aborting the run on the first failure. Entries share
//! nothing, so a failed entry never corrupts an earlier one — but files
//! written before the aborting entry are not rolled back.

use catalog::CatalogError;
use codegen::{ArtifactKind, CodegenError};
use thiserror::Error;

/// Convenient result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors that can occur while running the generation pipeline.
///
/// Every variant is fatal for the whole run; there is no per-entry recovery.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The catalog failed validation before generation started.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// Template rendering failed for one entry and artifact kind.
    #[error("rendering the {kind} artifact for entry `{entry}` failed: {source}")]
    Render {
        /// Key of the offending entry.
        entry: String,
        /// Which artifact was being rendered.
        kind: ArtifactKind,
        /// The underlying render error.
        source: CodegenError,
    },
    /// The formatter rejected rendered output for one entry and artifact kind.
    #[error("formatting the {kind} artifact for entry `{entry}` failed: {source}")]
    Format {
        /// Key of the offending entry.
        entry: String,
        /// Which artifact was being formatted.
        kind: ArtifactKind,
        /// The underlying format error.
        source: CodegenError,
    },
    /// Writing one artifact to disk failed.
    #[error("writing the {kind} artifact for entry `{entry}` failed: {source}")]
    Write {
        /// Key of the offending entry.
        entry: String,
        /// Which artifact was being written.
        kind: ArtifactKind,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

pub mod orchestration;

pub use orchestration::{generate, validate_catalog, GenerationSummary};
