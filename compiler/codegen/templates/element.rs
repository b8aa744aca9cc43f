//! Generated binding for the HTML `<{{TAG}}>` element.
//!
//! This file is produced by elemgen; do not edit it by hand.

#![allow(non_snake_case)]

use crate::{Element, ElementCore, Node};

/// `{{ELEM_TYPE}}` is the element definition corresponding to the HTML
/// `<{{TAG}}>` element.
pub struct {{ELEM_TYPE}} {
    core: ElementCore,
}

impl Element for {{ELEM_TYPE}} {
    fn core(&self) -> &ElementCore {
        &self.core
    }
}

/// `{{PROPS_TYPE}}` defines the properties for the `<{{TAG}}>` element.
#[derive(Debug, Default, Clone)]
pub struct {{PROPS_TYPE}} {
    {{PROP_FIELDS}}
}

impl {{PROPS_TYPE}} {
    /// Collects the attributes that are set, as name/value pairs in
    /// declaration order.
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        {{ATTR_PUSHES}}
        out
    }
}

/// {{CANONICAL}} creates a new `<{{TAG}}>` element with the provided props
/// and children.
pub fn {{CANONICAL}}(props: {{PROPS_TYPE}}, children: Vec<Node>) -> {{ELEM_TYPE}} {
    {{ELEM_TYPE}} {
        core: ElementCore::new("{{TAG}}", props.attributes(), children),
    }
}
