// codegen/src/generators/element.rs

use crate::{ArtifactGenerator, ArtifactKind, DerivedNames, Result};

use super::ensure_fully_rendered;

const ELEMENT_TEMPLATE: &str = include_str!("../../templates/element.rs");

/// Generator for the element binding artifact: the element struct, its props
/// struct with one optional field per attribute, and the constructor
/// function.
pub struct ElementGenerator;

impl ArtifactGenerator for ElementGenerator {
    fn kind(&self) -> ArtifactKind { ArtifactKind::Element }

    fn render(&self, names: &DerivedNames) -> Result<String> {
        let mut out = ELEMENT_TEMPLATE.to_owned();
        out = out.replace("{{TAG}}", &names.tag);
        out = out.replace("{{ELEM_TYPE}}", &names.elem_type);
        out = out.replace("{{PROPS_TYPE}}", &names.props_type);
        out = out.replace("{{CANONICAL}}", &names.canonical);
        out = out.replace("{{PROP_FIELDS}}", &render_prop_fields(names));
        out = out.replace("{{ATTR_PUSHES}}", &render_attr_pushes(names));
        ensure_fully_rendered(out)
    }
}

/// One `pub {Field}: Option<{Type}>` declaration per attribute, in catalog
/// order. An element with no attributes renders an empty block.
fn render_prop_fields(names: &DerivedNames) -> String {
    names
        .attributes
        .iter()
        .map(|attribute| {
            format!(
                "/// `{external}` attribute.\n    pub {field}: Option<{ty}>,",
                external = attribute.external_name,
                field = attribute.field_name,
                ty = attribute.field_type,
            )
        })
        .collect::<Vec<_>>()
        .join("\n    ")
}

/// One push of `({external}, value)` per attribute. The external name is the
/// raw attribute name regardless of the field identifier.
fn render_attr_pushes(names: &DerivedNames) -> String {
    names
        .attributes
        .iter()
        .map(|attribute| {
            format!(
                "if let Some(value) = &self.{field} {{\n            out.push((\"{external}\", value.to_string()));\n        }}",
                field = attribute.field_name,
                external = attribute.external_name,
            )
        })
        .collect::<Vec<_>>()
        .join("\n        ")
}

#[cfg(test)]
mod tests {
    use catalog::{AttributeSpec, Descriptor};

    use crate::derive_names;
    use crate::format::format_source;

    use super::*;

    fn blockquote_names() -> DerivedNames {
        derive_names(
            "blockquote",
            &Descriptor {
                name_override: Some("BlockQuote".into()),
                attributes: vec![AttributeSpec::new("cite")],
            },
        )
    }

    #[test]
    fn test_render_element() {
        let rendered =
            ElementGenerator.render(&blockquote_names()).expect("rendering must succeed");

        assert!(rendered.contains("pub struct BlockQuoteElem"));
        assert!(rendered.contains("pub struct BlockQuoteProps"));
        assert!(rendered.contains("pub Cite: Option<String>,"));
        assert!(rendered.contains("out.push((\"cite\", value.to_string()));"));
        assert!(rendered
            .contains("pub fn BlockQuote(props: BlockQuoteProps, children: Vec<Node>)"));
        assert!(rendered.contains("ElementCore::new(\"blockquote\""));
        assert!(!rendered.contains("{{"));
    }

    #[test]
    fn test_rendered_element_is_well_formed() {
        let rendered =
            ElementGenerator.render(&blockquote_names()).expect("rendering must succeed");
        format_source(&rendered).expect("rendered element must be well-formed Rust");
    }

    #[test]
    fn test_render_element_without_attributes() {
        let names = derive_names("br", &Descriptor::default());
        let rendered = ElementGenerator.render(&names).expect("rendering must succeed");

        // The attribute block is present but empty, not omitted.
        assert!(rendered.contains("pub fn attributes(&self)"));
        assert!(!rendered.contains("out.push"));
        format_source(&rendered).expect("attribute-free element must be well-formed Rust");
    }

    #[test]
    fn test_render_element_with_typed_attributes() {
        let names = derive_names(
            "details",
            &Descriptor {
                name_override: None,
                attributes: vec![AttributeSpec {
                    name: "open".into(),
                    name_override: None,
                    attr_type: Some("bool".into()),
                }],
            },
        );
        let rendered = ElementGenerator.render(&names).expect("rendering must succeed");
        assert!(rendered.contains("pub Open: Option<bool>,"));
        assert!(rendered.contains("out.push((\"open\", value.to_string()));"));
    }
}
