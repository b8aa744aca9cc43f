//! Name derivation: descriptor in, identifier spellings out.
//!
//! This is the pure heart of the generator. [`derive_names`] maps one
//! `(key, Descriptor)` pair to the full set of spellings the templates need,
//! applying the override/defaulting precedence rules. It has no side effects
//! and no error path: every structurally valid descriptor derives.

use catalog::Descriptor;

use crate::utils::capitalize;

/// Suffix appended to the canonical identifier for the element type.
const ELEM_SUFFIX: &str = "Elem";
/// Suffix appended to the canonical identifier for the properties type.
const PROPS_SUFFIX: &str = "Props";

/// Rust type used for attributes that declare no explicit type.
pub const DEFAULT_ATTRIBUTE_TYPE: &str = "String";

/// One attribute after name/type resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAttribute {
    /// Field identifier in the generated props struct: the attribute's
    /// override verbatim when set, otherwise its name with only the first
    /// character uppercased.
    pub field_name: String,
    /// The attribute name as written on the element, always verbatim.
    /// Overrides never affect this.
    pub external_name: String,
    /// Rust type of the generated field; the declared type verbatim, or
    /// [`DEFAULT_ATTRIBUTE_TYPE`].
    pub field_type: String,
}

/// The computed set of identifier spellings for one catalog entry.
///
/// Built per entry per run, consumed by the renderers, then discarded. Never
/// persisted, never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedNames {
    /// The entry key, i.e. the lowercase tag name.
    pub tag: String,
    /// Canonical capitalized identifier from which the type names are built.
    pub canonical: String,
    /// Element type name: canonical identifier + `Elem`.
    pub elem_type: String,
    /// Properties type name: canonical identifier + `Props`.
    pub props_type: String,
    /// Resolved attributes, in catalog order.
    pub attributes: Vec<ResolvedAttribute>,
}

impl DerivedNames {
    /// First field identifier shared by two attributes, if any.
    ///
    /// A collision would make the generated props struct invalid, so the
    /// pipeline rejects the catalog before rendering anything.
    pub fn duplicate_field(&self) -> Option<&str> {
        for (index, attribute) in self.attributes.iter().enumerate() {
            if self.attributes[..index].iter().any(|a| a.field_name == attribute.field_name) {
                return Some(&attribute.field_name);
            }
        }
        None
    }
}

/// Derive the identifier spellings for one catalog entry.
///
/// Precedence rules:
/// 1. canonical identifier: the descriptor override verbatim when non-empty,
///    otherwise `key` with only its first character uppercased (the tail is
///    left untouched — keys arrive lowercase from the catalog).
/// 2. type names: canonical identifier + fixed suffix per artifact kind.
/// 3. per attribute: field name from its override or capitalized name, type
///    from its declaration or the `String` default, external name always the
///    attribute name verbatim.
///
/// Element-name rules and attribute-name rules never interact. Deterministic:
/// equal input derives equal output.
pub fn derive_names(key: &str, descriptor: &Descriptor) -> DerivedNames {
    let canonical = match &descriptor.name_override {
        Some(name) if !name.is_empty() => name.clone(),
        _ => capitalize(key),
    };

    let attributes = descriptor
        .attributes
        .iter()
        .map(|attribute| {
            let field_name = match &attribute.name_override {
                Some(name) if !name.is_empty() => name.clone(),
                _ => capitalize(&attribute.name),
            };
            let field_type = match &attribute.attr_type {
                Some(ty) if !ty.is_empty() => ty.clone(),
                _ => DEFAULT_ATTRIBUTE_TYPE.to_string(),
            };
            ResolvedAttribute {
                field_name,
                external_name: attribute.name.clone(),
                field_type,
            }
        })
        .collect();

    DerivedNames {
        tag: key.to_string(),
        elem_type: format!("{canonical}{ELEM_SUFFIX}"),
        props_type: format!("{canonical}{PROPS_SUFFIX}"),
        canonical,
        attributes,
    }
}
