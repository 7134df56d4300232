//! HTML rendering of node trees.
//!
//! Rendering is string concatenation over the tree, with text and attribute
//! values escaped. It exists so built trees can be snapshotted and served;
//! layout itself is always the consuming engine's job.

use htmlize::{escape_attribute, escape_text};
use phf::phf_set;

use crate::ast::{ElementNode, Node};

/// Tags that never carry children.
static VOID_TAGS: phf::Set<&'static str> = phf_set! {
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link",
    "meta", "param", "source", "track", "wbr",
};

/// Renderer options.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Emit one node per line with two-space indentation.
    pub pretty: bool,
}

/// Render a tree with default options (compact, single line).
pub fn render(node: &Node) -> String {
    render_with_options(node, &RenderOptions::default())
}

/// Render a tree to HTML text.
///
/// Children of void tags are skipped; a void element is emitted as its open
/// tag alone.
pub fn render_with_options(node: &Node, options: &RenderOptions) -> String {
    let mut out = String::with_capacity(256);
    write_node(&mut out, node, options, 0);
    if options.pretty {
        // Line-based writing leaves one trailing newline.
        out.pop();
    }
    out
}

fn write_node(out: &mut String, node: &Node, options: &RenderOptions, depth: usize) {
    match node {
        Node::Text(text) => {
            open_line(out, options, depth);
            out.push_str(&escape_text(text.content.as_str()));
            close_line(out, options);
        }
        Node::Element(element) => write_element(out, element, options, depth),
    }
}

fn write_element(out: &mut String, element: &ElementNode<'_>, options: &RenderOptions, depth: usize) {
    open_line(out, options, depth);
    out.push('<');
    out.push_str(&element.tag);
    for attr in &element.attrs {
        out.push(' ');
        out.push_str(&attr.name);
        out.push_str("=\"");
        out.push_str(&escape_attribute(attr.value.as_str()));
        out.push('"');
    }
    out.push('>');

    if VOID_TAGS.contains(element.tag.as_str()) {
        close_line(out, options);
        return;
    }

    if element.children.is_empty() {
        out.push_str("</");
        out.push_str(&element.tag);
        out.push('>');
        close_line(out, options);
        return;
    }

    close_line(out, options);
    for child in &element.children {
        write_node(out, child, options, depth + 1);
    }
    open_line(out, options, depth);
    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
    close_line(out, options);
}

fn open_line(out: &mut String, options: &RenderOptions, depth: usize) {
    if options.pretty {
        for _ in 0..depth {
            out.push_str("  ");
        }
    }
}

fn close_line(out: &mut String, options: &RenderOptions) {
    if options.pretty {
        out.push('\n');
    }
}
