//! Formatting and validation of rendered source.
//!
//! Rendered template output goes through [`format_source`] before it is
//! written: the text must parse as a Rust file, and the parsed file is
//! pretty-printed so output bytes depend only on the rendered items, not on
//! template whitespace. Parsing doubles as the validation step — text that
//! does not parse never reaches disk.

use crate::Result;

/// Parse, pretty-print, and normalize one rendered source file.
///
/// Fails with [`crate::CodegenError::Parse`] when the rendered text is not
/// well-formed Rust; the caller treats that as fatal for the run.
pub fn format_source(source: &str) -> Result<String> {
    let file = syn::parse_file(source)?;
    Ok(clean_generated_source(&prettyplease::unparse(&file)))
}

/// Trim trailing whitespace from each line and drop trailing blank lines.
/// Always ensures the returned string ends with a single newline when not empty.
fn clean_generated_source(src: &str) -> String {
    let mut lines: Vec<String> = src.lines().map(|l| l.trim_end().to_string()).collect();

    while matches!(lines.last(), Some(line) if line.is_empty()) {
        lines.pop();
    }

    if lines.is_empty() {
        String::new()
    } else {
        format!("{}\n", lines.join("\n"))
    }
}
