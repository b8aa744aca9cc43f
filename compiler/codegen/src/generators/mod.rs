//! The two fixed artifact generators.
//!
//! One generator per artifact kind, both driven by the same derived-name
//! record. Rendering is plain placeholder substitution over templates
//! embedded at compile time; anything conditional (the attribute block, the
//! field list) is already encoded in the derived names.

pub mod element;
pub use element::ElementGenerator;

pub mod test_file;
pub use test_file::TestGenerator;

use crate::utils::find_unrendered_placeholder;
use crate::{CodegenError, Result};

/// Reject rendered output that still contains a `{{...}}` placeholder.
fn ensure_fully_rendered(source: String) -> Result<String> {
    match find_unrendered_placeholder(&source) {
        Some(placeholder) => Err(CodegenError::UnrenderedPlaceholder(placeholder.to_string())),
        None => Ok(source),
    }
}
