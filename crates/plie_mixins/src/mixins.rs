//! The mixin functions.
//!
//! Each function maps one layout parameter to a fixed run of declarations.
//! Within a run the oldest vendor spelling comes first and the standard
//! property last; consumers that concatenate runs decide cross-run order
//! themselves, and the last writer for a property name wins at render time.

use compact_str::format_compact;

use crate::declaration::Declarations;
use crate::engine::Engine;
use crate::params::{Alignment, Direction, WrapMode};

/// Full cross-browser flex activation chain.
///
/// Emits every known `display` spelling, oldest first. Engines stop at the
/// newest keyword they recognize, so the run degrades gracefully without
/// any feature probing. This is the form the container builders use.
pub fn display() -> Declarations {
    let mut run = Declarations::new();
    run.push("display", "-webkit-box");
    run.push("display", "-webkit-flex");
    run.push("display", "-moz-flex");
    run.push("display", "-ms-flexbox");
    run.push("display", "flex");
    run
}

/// Single `display` declaration for a known engine.
///
/// Picks the legacy vendor keyword when the engine requires the old prefix
/// and the standard value otherwise.
pub fn display_for(engine: Engine) -> Declarations {
    let mut run = Declarations::new();
    run.push("display", engine.display_keyword());
    run
}

/// Main-axis direction, including the 2009 orient/direction split.
pub fn direction(direction: Direction) -> Declarations {
    let (box_direction, box_orient, value) = match direction {
        Direction::Horizontal => ("normal", "horizontal", "row"),
        Direction::Vertical => ("normal", "vertical", "column"),
        Direction::HorizontalReverse => ("reverse", "horizontal", "row-reverse"),
        Direction::VerticalReverse => ("reverse", "vertical", "column-reverse"),
    };
    let mut run = Declarations::new();
    run.push("-webkit-box-direction", box_direction);
    run.push("-webkit-box-orient", box_orient);
    run.push("-webkit-flex-direction", value);
    run.push("-ms-flex-direction", value);
    run.push("flex-direction", value);
    run
}

/// Line wrapping.
///
/// The Trident draft had no `nowrap` keyword; it spelled the same thing
/// `none`.
pub fn wrap(mode: WrapMode) -> Declarations {
    let (legacy, value) = match mode {
        WrapMode::Wrap => ("wrap", "wrap"),
        WrapMode::NoWrap => ("none", "nowrap"),
        WrapMode::WrapReverse => ("wrap-reverse", "wrap-reverse"),
    };
    let mut run = Declarations::new();
    run.push("-ms-flex-wrap", legacy);
    run.push("-webkit-flex-wrap", value);
    run.push("flex-wrap", value);
    run
}

/// `flex-flow` shorthand: direction then wrap.
pub fn flow(dir: Direction, mode: WrapMode) -> Declarations {
    direction(dir).concat(wrap(mode))
}

/// Cross-axis alignment of items within the container.
pub fn align_items(alignment: Alignment) -> Declarations {
    let (legacy, value) = match alignment {
        Alignment::Start => ("start", "flex-start"),
        Alignment::Center => ("center", "center"),
        Alignment::End => ("end", "flex-end"),
        Alignment::Stretch => ("stretch", "stretch"),
        Alignment::Surround => ("baseline", "baseline"),
    };
    let mut run = Declarations::new();
    run.push("-webkit-box-align", legacy);
    run.push("-ms-flex-align", legacy);
    run.push("-webkit-align-items", value);
    run.push("align-items", value);
    run
}

/// Main-axis distribution of content.
///
/// Three vocabularies: the box draft (`-webkit-box-pack`, which has no
/// space-around equivalent and falls back to `none`), the Trident draft
/// (`justify`/`distribute` for the spaced modes), and the standard keywords.
pub fn justify_content(alignment: Alignment) -> Declarations {
    let (box_pack, flex_pack, value) = match alignment {
        Alignment::Start => ("start", "start", "flex-start"),
        Alignment::Center => ("center", "center", "center"),
        Alignment::End => ("end", "end", "flex-end"),
        Alignment::Stretch => ("justify", "justify", "space-between"),
        Alignment::Surround => ("none", "distribute", "space-around"),
    };
    let mut run = Declarations::new();
    run.push("-webkit-box-pack", box_pack);
    run.push("-ms-flex-pack", flex_pack);
    run.push("-webkit-justify-content", value);
    run.push("justify-content", value);
    run
}

/// Growth factor, carried verbatim into every spelling.
///
/// Factor text is the caller's concern; whatever is passed appears
/// literally in each pair.
pub fn grow(factor: &str) -> Declarations {
    let mut run = Declarations::new();
    run.push("-webkit-box-flex", factor);
    run.push("-webkit-flex-grow", factor);
    run.push("-ms-flex-positive", factor);
    run.push("flex-grow", factor);
    run
}

/// Shrink factor, carried verbatim.
pub fn shrink(factor: &str) -> Declarations {
    let mut run = Declarations::new();
    run.push("-webkit-flex-shrink", factor);
    run.push("-ms-flex-negative", factor);
    run.push("flex-shrink", factor);
    run
}

/// Initial main-axis size, carried verbatim.
pub fn basis(value: &str) -> Declarations {
    let mut run = Declarations::new();
    run.push("-webkit-flex-basis", value);
    run.push("-ms-flex-preferred-size", value);
    run.push("flex-basis", value);
    run
}

/// `flex` shorthand.
///
/// The box draft only knew a growth factor, so its pair carries `grow`
/// alone; the later spellings carry the composite `grow shrink basis`.
pub fn flex(grow: &str, shrink: &str, basis: &str) -> Declarations {
    let composite = format_compact!("{grow} {shrink} {basis}");
    let mut run = Declarations::new();
    run.push("-webkit-box-flex", grow);
    run.push("-webkit-flex", composite.clone());
    run.push("-ms-flex", composite.clone());
    run.push("flex", composite);
    run
}

/// Visual ordering of a child among its siblings.
///
/// The unprefixed `-order` spelling is not in any standard but is kept for
/// engines that shipped it.
pub fn order(position: i32) -> Declarations {
    let text = format_compact!("{position}");
    let mut run = Declarations::new();
    run.push("-webkit-box-ordinal-group", text.clone());
    run.push("-ms-flex-order", text.clone());
    run.push("-webkit-order", text.clone());
    run.push("-order", text);
    run
}

/// Cross-axis alignment override for a single child.
pub fn align_self(alignment: Alignment) -> Declarations {
    let value = match alignment {
        Alignment::Start => "flex-start",
        Alignment::Center => "center",
        Alignment::End => "flex-end",
        Alignment::Stretch => "stretch",
        Alignment::Surround => "baseline",
    };
    let mut run = Declarations::new();
    run.push("-webkit-align-self", value);
    run.push("-ms-flex-item-align", value);
    run.push("align-self", value);
    run
}
