//! Persisting generated artifacts.

use std::fs;
use std::path::Path;

use crate::ArtifactKind;

/// Output file name for one entry and artifact kind: the entry key plus the
/// kind's fixed suffix (e.g. `blockquote_elem.rs`, `blockquote_elem_test.rs`).
pub fn artifact_file_name(key: &str, kind: ArtifactKind) -> String {
    format!("{key}{}", kind.suffix())
}

/// Write one formatted artifact under `out_dir`, creating the directory as
/// needed. Each output file is written exactly once per run; paths are
/// disjoint because catalog keys are unique.
pub fn write_artifact<P: AsRef<Path>>(
    out_dir: P,
    file_name: &str,
    source: &str,
) -> std::io::Result<()> {
    fs::create_dir_all(&out_dir)?;
    fs::write(out_dir.as_ref().join(file_name), source.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_file_name() {
        assert_eq!(artifact_file_name("blockquote", ArtifactKind::Element), "blockquote_elem.rs");
        assert_eq!(artifact_file_name("blockquote", ArtifactKind::Test), "blockquote_elem_test.rs");
    }

    #[test]
    fn test_write_artifact_creates_directories() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temporary directory");
        let out_dir = temp_dir.path().join("generated").join("elements");

        write_artifact(&out_dir, "audio_elem.rs", "pub struct AudioElem;\n")
            .expect("Failed to write artifact");

        let written = std::fs::read_to_string(out_dir.join("audio_elem.rs"))
            .expect("Failed to read written artifact");
        assert_eq!(written, "pub struct AudioElem;\n");
    }

    #[test]
    fn test_write_artifact_propagates_io_errors() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temporary directory");
        // Using an existing *file* as the output directory must fail.
        let blocker = temp_dir.path().join("occupied");
        std::fs::write(&blocker, "not a directory").expect("Failed to write blocker file");

        let result = write_artifact(&blocker, "audio_elem.rs", "pub struct AudioElem;\n");
        assert!(result.is_err());
    }
}
