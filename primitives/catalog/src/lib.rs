// SPDX-License-Identifier: CC0-1.0

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Element catalog data model.
//!
//! This crate defines the descriptor structures the generator consumes:
//! a [`Catalog`] maps lowercase tag names to [`Descriptor`]s, each of which
//! carries an optional identifier override and an ordered list of
//! [`AttributeSpec`]s. Catalogs are loaded from TOML — either an external
//! file or the element table embedded in this repository — and are read-only
//! for the duration of a generation run.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading or validating a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Failed to read the catalog file from disk.
    #[error("Failed to read catalog file: {0}")]
    FileRead(#[from] std::io::Error),
    /// Failed to parse the TOML catalog.
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),
    /// A catalog entry has an empty key.
    #[error("Catalog contains an entry with an empty key")]
    EmptyKey,
    /// An attribute of `entry` has an empty name.
    #[error("Entry `{entry}` has an attribute with an empty name")]
    EmptyAttributeName {
        /// Key of the offending entry.
        entry: String,
    },
    /// Two attributes of `entry` resolve to the same field identifier.
    #[error("Entry `{entry}` resolves two attributes to the same field name `{field}`")]
    DuplicateField {
        /// Key of the offending entry.
        entry: String,
        /// The colliding resolved field identifier.
        field: String,
    },
}

/// Convenient result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// One attribute definition within an element descriptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeSpec {
    /// Attribute name as it appears on the element (e.g. `bgcolor`).
    ///
    /// This is the wire name: generated code always tags the attribute with
    /// this value regardless of any identifier override.
    pub name: String,
    /// Field identifier override. When present, used verbatim instead of the
    /// auto-capitalized form of `name`.
    #[serde(default, rename = "override", skip_serializing_if = "Option::is_none")]
    pub name_override: Option<String>,
    /// Rust type of the generated field (e.g. `bool`, `u32`).
    /// Defaults to `String` when absent.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub attr_type: Option<String>,
}

impl AttributeSpec {
    /// An attribute with no override and no explicit type.
    pub fn new(name: impl Into<String>) -> Self {
        AttributeSpec { name: name.into(), name_override: None, attr_type: None }
    }
}

/// One catalog entry describing a generatable element.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Descriptor {
    /// Canonical identifier override. When present, used verbatim instead of
    /// the auto-capitalized form of the entry key (e.g. `BlockQuote` for the
    /// `blockquote` entry).
    #[serde(default, rename = "override", skip_serializing_if = "Option::is_none")]
    pub name_override: Option<String>,
    /// Attribute definitions, in generated-field order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<AttributeSpec>,
}

/// The full element catalog: tag name → descriptor.
///
/// Backed by a `BTreeMap` so iteration order — and therefore generated
/// output — is deterministic across runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: BTreeMap<String, Descriptor>,
}

/// The element table shipped with this repository.
const BUILTIN_ELEMENTS_TOML: &str = include_str!("../../../resources/elements.toml");

impl Catalog {
    /// Build a catalog from an already-materialized entry map.
    pub fn new(entries: BTreeMap<String, Descriptor>) -> Self { Catalog { entries } }

    /// Parse a catalog from a TOML string.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let catalog = toml::from_str(contents)?;
        Ok(catalog)
    }

    /// Load a catalog from a TOML file at `path`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    /// The element catalog embedded in this repository
    /// (`resources/elements.toml`).
    pub fn builtin() -> Self {
        Self::from_toml_str(BUILTIN_ELEMENTS_TOML)
            .expect("embedded element catalog must be valid TOML")
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Descriptor)> { self.entries.iter() }

    /// Look up one descriptor by tag name.
    pub fn get(&self, key: &str) -> Option<&Descriptor> { self.entries.get(key) }

    /// Number of entries.
    pub fn len(&self) -> usize { self.entries.len() }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Check the structural invariants every entry must satisfy before
    /// generation: non-empty keys and non-empty attribute names.
    ///
    /// Resolved field-name collisions are checked by the pipeline after name
    /// derivation, since resolution is a codegen concern.
    pub fn validate(&self) -> Result<()> {
        for (key, descriptor) in &self.entries {
            if key.is_empty() {
                return Err(CatalogError::EmptyKey);
            }
            for attribute in &descriptor.attributes {
                if attribute.name.is_empty() {
                    return Err(CatalogError::EmptyAttributeName { entry: key.clone() });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_from_toml_str() {
        let catalog = Catalog::from_toml_str(
            r#"
            [blockquote]
            override = "BlockQuote"
            attributes = [{ name = "cite" }]

            [details]
            attributes = [{ name = "open", type = "bool" }]

            [br]
            "#,
        )
        .expect("Failed to parse catalog");

        assert_eq!(catalog.len(), 3);

        let blockquote = catalog.get("blockquote").expect("blockquote entry must exist");
        assert_eq!(blockquote.name_override.as_deref(), Some("BlockQuote"));
        assert_eq!(blockquote.attributes.len(), 1);
        assert_eq!(blockquote.attributes[0].name, "cite");
        assert_eq!(blockquote.attributes[0].attr_type, None);

        let details = catalog.get("details").expect("details entry must exist");
        assert_eq!(details.name_override, None);
        assert_eq!(details.attributes[0].attr_type.as_deref(), Some("bool"));

        let br = catalog.get("br").expect("br entry must exist");
        assert!(br.attributes.is_empty());
    }

    #[test]
    fn test_from_toml_str_rejects_invalid_toml() {
        let result = Catalog::from_toml_str("not a catalog at all [");
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_from_file() {
        let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
        fs::write(
            &temp_file,
            r#"
            [col]
            attributes = [{ name = "bgcolor", override = "BGColor" }]
            "#,
        )
        .expect("Failed to write catalog to temporary file");

        let catalog = Catalog::from_file(&temp_file).expect("Failed to load catalog from file");
        let col = catalog.get("col").expect("col entry must exist");
        assert_eq!(col.attributes[0].name_override.as_deref(), Some("BGColor"));

        let result = Catalog::from_file("nonexistent_catalog.toml");
        assert!(matches!(result, Err(CatalogError::FileRead(_))));
    }

    #[test]
    fn test_iteration_is_key_ordered() {
        let catalog = Catalog::from_toml_str(
            r#"
            [video]
            [audio]
            [details]
            "#,
        )
        .expect("Failed to parse catalog");

        let keys: Vec<&str> = catalog.iter().map(|(key, _)| key.as_str()).collect();
        assert_eq!(keys, ["audio", "details", "video"]);
    }

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin();
        assert!(!catalog.is_empty());
        catalog.validate().expect("embedded catalog must pass validation");

        // Spot-check the entries the naming rules hinge on.
        let blockquote = catalog.get("blockquote").expect("blockquote entry must exist");
        assert_eq!(blockquote.name_override.as_deref(), Some("BlockQuote"));
        let details = catalog.get("details").expect("details entry must exist");
        assert_eq!(details.attributes[0].attr_type.as_deref(), Some("bool"));
    }

    #[test]
    fn test_validate_rejects_empty_key() {
        let catalog = Catalog::from_toml_str(
            r#"
            [""]
            attributes = [{ name = "src" }]
            "#,
        )
        .expect("Failed to parse catalog");

        assert!(matches!(catalog.validate(), Err(CatalogError::EmptyKey)));
    }

    #[test]
    fn test_validate_rejects_empty_attribute_name() {
        let catalog = Catalog::from_toml_str(
            r#"
            [img]
            attributes = [{ name = "" }]
            "#,
        )
        .expect("Failed to parse catalog");

        match catalog.validate() {
            Err(CatalogError::EmptyAttributeName { entry }) => assert_eq!(entry, "img"),
            other => panic!("Expected EmptyAttributeName error, got {:?}", other),
        }
    }
}
