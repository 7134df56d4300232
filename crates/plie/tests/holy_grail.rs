//! End-to-end Holy Grail layout assembled through the prelude.

use plie::prelude::*;

fn panel<'a>(arena: &'a Bump, color: &str) -> Node<'a> {
    let mut styles = Declarations::new();
    styles.push("background-color", color);
    flex_div(arena, styles, [], [])
}

#[test]
fn holy_grail_tree_shape_and_factors() {
    let arena = Bump::new();

    let top = panel(&arena, "papayawhip");
    let left = panel(&arena, "peachpuff");
    let center = panel(&arena, "lavender");
    let right = panel(&arena, "honeydew");
    let bottom = panel(&arena, "mistyrose");

    let middle = flex_n(
        &arena,
        8,
        row(&arena, [left, flex_n(&arena, 4, center), right]),
    );
    let page = column(&arena, [top, middle, bottom]);

    let root = page.element().unwrap();
    assert_eq!(root.style().get("flex-direction"), Some("column"));
    assert_eq!(root.children.len(), 3);

    let middle = root.children[1].element().unwrap();
    assert_eq!(middle.style().get("flex-grow"), Some("8"));
    assert_eq!(middle.children.len(), 1);

    let inner = middle.children[0].element().unwrap();
    assert_eq!(inner.style().get("flex-direction"), Some("row"));
    assert_eq!(inner.children.len(), 3);

    let center = inner.children[1].element().unwrap();
    assert_eq!(center.style().get("flex-grow"), Some("4"));
    assert_eq!(
        center.children[0].element().unwrap().style().get("background-color"),
        Some("lavender")
    );
}

#[test]
fn rendered_page_keeps_leaf_order() {
    let arena = Bump::new();
    let page = layout(
        &arena,
        Direction::Vertical,
        Alignment::Start,
        Alignment::Stretch,
        WrapMode::NoWrap,
        [text("first"), text("second"), text("third")],
    );
    let html = render(&page);
    let first = html.find("first").unwrap();
    let second = html.find("second").unwrap();
    let third = html.find("third").unwrap();
    assert!(first < second && second < third);
    assert!(html.contains("justify-content: flex-start"));
    assert!(html.contains("align-items: stretch"));
}
