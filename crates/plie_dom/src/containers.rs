//! Ready-made flex containers.
//!
//! Every builder wraps its children in a single `div` (or caller-chosen tag
//! for the escape hatches), synthesizes one `style` attribute from mixin
//! runs, and preserves child order. No builder fails; the inputs are closed
//! enumerations and plain nodes.

use bumpalo::Bump;
use compact_str::format_compact;

use plie_mixins::mixins;
use plie_mixins::{Alignment, Declarations, Direction, WrapMode};

use crate::ast::{node, style_attribute, Attribute, Node};

fn directional<'a>(
    arena: &'a Bump,
    direction: Direction,
    children: impl IntoIterator<Item = Node<'a>>,
) -> Node<'a> {
    let style = mixins::display()
        .concat(mixins::direction(direction))
        .concat(mixins::grow("1"));
    node(arena, "div", [style_attribute(&style)], children)
}

/// A growing container flowing left to right.
pub fn row<'a>(arena: &'a Bump, children: impl IntoIterator<Item = Node<'a>>) -> Node<'a> {
    directional(arena, Direction::Horizontal, children)
}

/// A growing container flowing top to bottom.
pub fn column<'a>(arena: &'a Bump, children: impl IntoIterator<Item = Node<'a>>) -> Node<'a> {
    directional(arena, Direction::Vertical, children)
}

/// [`row`] with reversed flow.
pub fn row_reverse<'a>(arena: &'a Bump, children: impl IntoIterator<Item = Node<'a>>) -> Node<'a> {
    directional(arena, Direction::HorizontalReverse, children)
}

/// [`column`] with reversed flow.
pub fn column_reverse<'a>(
    arena: &'a Bump,
    children: impl IntoIterator<Item = Node<'a>>,
) -> Node<'a> {
    directional(arena, Direction::VerticalReverse, children)
}

/// Wrap `child` in a container growing `factor` times its siblings' unit.
pub fn flex_n<'a>(arena: &'a Bump, factor: u32, child: Node<'a>) -> Node<'a> {
    let style = mixins::display().concat(mixins::grow(&format_compact!("{factor}")));
    node(arena, "div", [style_attribute(&style)], [child])
}

/// [`flex_n`] with the default growth factor of 1.
pub fn flex_child<'a>(arena: &'a Bump, child: Node<'a>) -> Node<'a> {
    flex_n(arena, 1, child)
}

/// Wrap `child` in a container sized to the full viewport.
pub fn fullbleed<'a>(arena: &'a Bump, child: Node<'a>) -> Node<'a> {
    let mut style = Declarations::new();
    style.push("width", "100vw");
    style.push("height", "100vh");
    let style = style.concat(mixins::display());
    node(arena, "div", [style_attribute(&style)], [child])
}

/// Fully custom container covering its parent.
///
/// Children keep their given order; the container grows and spans 100% of
/// both axes.
pub fn layout<'a>(
    arena: &'a Bump,
    direction: Direction,
    justify: Alignment,
    align: Alignment,
    wrap: WrapMode,
    children: impl IntoIterator<Item = Node<'a>>,
) -> Node<'a> {
    let mut style = mixins::display()
        .concat(mixins::direction(direction))
        .concat(mixins::justify_content(justify))
        .concat(mixins::align_items(align))
        .concat(mixins::wrap(wrap))
        .concat(mixins::grow("1"));
    style.push("width", "100%");
    style.push("height", "100%");
    node(arena, "div", [style_attribute(&style)], children)
}

/// Lowest-level escape hatch: a growing flex node of any tag.
///
/// `styles` is concatenated after the synthesized run, so caller
/// declarations win over the defaults under the cascade. `attrs` must not
/// contain a `style` attribute: the builder attaches its own, and a second
/// one would collide at the consumer.
pub fn flex_node<'a>(
    arena: &'a Bump,
    tag: &str,
    styles: Declarations,
    attrs: impl IntoIterator<Item = Attribute>,
    children: impl IntoIterator<Item = Node<'a>>,
) -> Node<'a> {
    let style = mixins::display().concat(mixins::grow("1")).concat(styles);
    node(
        arena,
        tag,
        std::iter::once(style_attribute(&style)).chain(attrs),
        children,
    )
}

/// [`flex_node`] fixed to a `div`.
pub fn flex_div<'a>(
    arena: &'a Bump,
    styles: Declarations,
    attrs: impl IntoIterator<Item = Attribute>,
    children: impl IntoIterator<Item = Node<'a>>,
) -> Node<'a> {
    flex_node(arena, "div", styles, attrs, children)
}
