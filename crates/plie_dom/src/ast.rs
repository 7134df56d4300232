//! Node and attribute types.
//!
//! Nodes are allocated in a caller-owned [`Bump`] arena; element child and
//! attribute lists are arena vectors, so whole trees drop in one free.

use bumpalo::boxed::Box;
use bumpalo::collections::Vec;
use bumpalo::Bump;
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use plie_mixins::Declarations;

/// A plain `name="value"` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: CompactString,
    pub value: CompactString,
}

impl Attribute {
    pub fn new(name: impl Into<CompactString>, value: impl Into<CompactString>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Build the `style` attribute for a declaration run.
///
/// The run's order is preserved verbatim in the attribute text; this is
/// what keeps the vendor-fallback cascade intact through rendering.
pub fn style_attribute(declarations: &Declarations) -> Attribute {
    Attribute::new("style", declarations.to_css_string())
}

/// A text leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextNode {
    pub content: CompactString,
}

/// An element with attributes and children.
#[derive(Debug)]
pub struct ElementNode<'a> {
    pub tag: CompactString,
    pub attrs: Vec<'a, Attribute>,
    pub children: Vec<'a, Node<'a>>,
}

impl<'a> ElementNode<'a> {
    pub fn new(arena: &'a Bump, tag: impl Into<CompactString>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new_in(arena),
            children: Vec::new_in(arena),
        }
    }

    /// Value of the first attribute named `name`, if present.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// The element's `style` attribute parsed back into a declaration run.
    ///
    /// Empty when the element carries no style attribute. Pair order in the
    /// attribute text is preserved.
    pub fn style(&self) -> Declarations {
        let mut run = Declarations::new();
        let Some(style) = self.attr("style") else {
            return run;
        };
        for declaration in style.split(';') {
            let Some((property, value)) = declaration.split_once(':') else {
                continue;
            };
            run.push(property.trim(), value.trim());
        }
        run
    }
}

/// A node in the tree.
#[derive(Debug)]
pub enum Node<'a> {
    Element(Box<'a, ElementNode<'a>>),
    Text(TextNode),
}

impl<'a> Node<'a> {
    /// The element behind this node, if it is one.
    pub fn element(&self) -> Option<&ElementNode<'a>> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    /// The text content, if this is a text leaf.
    pub fn text_content(&self) -> Option<&str> {
        match self {
            Self::Element(_) => None,
            Self::Text(text) => Some(text.content.as_str()),
        }
    }
}

/// The tree-node constructor: one element wrapping the given children.
///
/// Attribute and child order are preserved exactly as given.
pub fn node<'a, A, C>(arena: &'a Bump, tag: &str, attrs: A, children: C) -> Node<'a>
where
    A: IntoIterator<Item = Attribute>,
    C: IntoIterator<Item = Node<'a>>,
{
    let mut element = ElementNode::new(arena, tag);
    element.attrs.extend(attrs);
    element.children.extend(children);
    Node::Element(Box::new_in(element, arena))
}

/// A text leaf node.
pub fn text<'a>(content: impl Into<CompactString>) -> Node<'a> {
    Node::Text(TextNode {
        content: content.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_preserves_attr_and_child_order() {
        let arena = Bump::new();
        let tree = node(
            &arena,
            "nav",
            [Attribute::new("id", "menu"), Attribute::new("class", "bar")],
            [text("a"), text("b"), text("c")],
        );
        let element = tree.element().unwrap();
        assert_eq!(element.tag, "nav");
        assert_eq!(element.attr("id"), Some("menu"));
        assert_eq!(element.attr("class"), Some("bar"));
        assert_eq!(element.attr("style"), None);
        let contents: std::vec::Vec<_> =
            element.children.iter().filter_map(|c| c.text_content()).collect();
        assert_eq!(contents, ["a", "b", "c"]);
    }

    #[test]
    fn style_attribute_round_trips_through_the_element() {
        let arena = Bump::new();
        let mut run = Declarations::new();
        run.push("display", "-webkit-box");
        run.push("display", "flex");
        run.push("flex-grow", "1");
        let tree = node(&arena, "div", [style_attribute(&run)], []);
        let element = tree.element().unwrap();
        assert_eq!(
            element.attr("style"),
            Some("display: -webkit-box; display: flex; flex-grow: 1")
        );
        assert_eq!(element.style(), run);
    }

    #[test]
    fn style_is_empty_without_the_attribute() {
        let arena = Bump::new();
        let tree = node(&arena, "span", [], []);
        assert!(tree.element().unwrap().style().is_empty());
    }

    #[test]
    fn text_nodes_expose_their_content() {
        let leaf: Node<'_> = text("hello");
        assert_eq!(leaf.text_content(), Some("hello"));
        assert!(leaf.element().is_none());
    }
}
