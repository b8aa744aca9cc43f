//! Pipeline orchestration for the main entry points.
//!
//! [`generate`] is the whole-catalog entry point; [`validate_catalog`] is the
//! pre-pass it runs before any artifact is rendered.

use std::path::Path;

use catalog::{Catalog, CatalogError};
use codegen::{
    artifact_file_name, derive_names, format_source, write_artifact, ArtifactGenerator,
    DerivedNames, ElementGenerator, TestGenerator,
};

use crate::{PipelineError, Result};

/// Totals reported after a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Number of catalog entries processed.
    pub entries: usize,
    /// Number of artifact files written.
    pub artifacts: usize,
}

/// Generate both artifacts for every catalog entry into `out_dir`.
///
/// Entries are processed in catalog key order; the element artifact of an
/// entry is written before its test artifact. The first failure aborts the
/// whole run and names the offending entry and artifact kind. Re-running
/// over an unchanged catalog produces byte-identical output.
pub fn generate(catalog: &Catalog, out_dir: &Path) -> Result<GenerationSummary> {
    validate_catalog(catalog)?;

    let generators: [&dyn ArtifactGenerator; 2] = [&ElementGenerator, &TestGenerator];
    let mut summary = GenerationSummary { entries: 0, artifacts: 0 };

    for (key, descriptor) in catalog.iter() {
        let names = derive_names(key, descriptor);
        for generator in generators {
            generate_one(&names, generator, key, out_dir)?;
            summary.artifacts += 1;
        }
        logging::trace(
            "pipeline",
            &format!("generated <{}> ({} attributes)", key, names.attributes.len()),
        );
        summary.entries += 1;
    }

    Ok(summary)
}

/// Validate the catalog before anything is rendered.
///
/// Runs the catalog's structural checks, then derives names for every entry
/// and rejects resolved field-name collisions — two attributes of one entry
/// mapping to the same field identifier would generate an invalid props
/// struct, and no entry silently wins.
pub fn validate_catalog(catalog: &Catalog) -> Result<()> {
    catalog.validate()?;

    for (key, descriptor) in catalog.iter() {
        let names = derive_names(key, descriptor);
        if let Some(field) = names.duplicate_field() {
            return Err(PipelineError::Catalog(CatalogError::DuplicateField {
                entry: key.clone(),
                field: field.to_string(),
            }));
        }
    }

    Ok(())
}

/// Render, format, and write one artifact. Each stage failure carries the
/// entry key and artifact kind so the run's single error pinpoints it.
fn generate_one(
    names: &DerivedNames,
    generator: &dyn ArtifactGenerator,
    entry: &str,
    out_dir: &Path,
) -> Result<()> {
    let kind = generator.kind();

    let rendered = generator
        .render(names)
        .map_err(|source| PipelineError::Render { entry: entry.to_string(), kind, source })?;

    let formatted = format_source(&rendered)
        .map_err(|source| PipelineError::Format { entry: entry.to_string(), kind, source })?;

    write_artifact(out_dir, &artifact_file_name(entry, kind), &formatted)
        .map_err(|source| PipelineError::Write { entry: entry.to_string(), kind, source })
}
