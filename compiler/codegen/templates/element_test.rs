//! Generated tests for the `<{{TAG}}>` element binding.
//!
//! This file is produced by elemgen; do not edit it by hand.

#![allow(non_snake_case)]

use crate::{Element, Node, {{PROPS_TYPE}}};

#[test]
fn {{CANONICAL}}_has_expected_tag() {
    let el = crate::{{CANONICAL}}({{PROPS_TYPE}}::default(), Vec::<Node>::new());
    assert_eq!(el.core().tag(), "{{TAG}}");
}

#[test]
fn {{CANONICAL}}_default_props_set_no_attributes() {
    let props = {{PROPS_TYPE}}::default();
    assert!(props.attributes().is_empty());
}
