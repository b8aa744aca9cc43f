// codegen/src/generators/test_file.rs

use crate::{ArtifactGenerator, ArtifactKind, DerivedNames, Result};

use super::ensure_fully_rendered;

const TEST_TEMPLATE: &str = include_str!("../../templates/element_test.rs");

/// Generator for the companion test artifact: constructs the element with
/// default props and asserts on its tag.
pub struct TestGenerator;

impl ArtifactGenerator for TestGenerator {
    fn kind(&self) -> ArtifactKind { ArtifactKind::Test }

    fn render(&self, names: &DerivedNames) -> Result<String> {
        let mut out = TEST_TEMPLATE.to_owned();
        out = out.replace("{{TAG}}", &names.tag);
        out = out.replace("{{PROPS_TYPE}}", &names.props_type);
        out = out.replace("{{CANONICAL}}", &names.canonical);
        ensure_fully_rendered(out)
    }
}
