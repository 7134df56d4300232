//! Semantic layout parameters.
//!
//! These closed enumerations are the whole input vocabulary of the mixin
//! layer. Matches over them are exhaustive by construction; adding a variant
//! is a compile-time event for every value table.

use serde::{Deserialize, Serialize};

/// Main-axis flow of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum Direction {
    #[default]
    Horizontal,
    Vertical,
    HorizontalReverse,
    VerticalReverse,
}

/// Placement of items or content along an axis.
///
/// The same five values feed both [`mixins::align_items`] (cross axis) and
/// [`mixins::justify_content`] (main axis); each mixin applies its own value
/// table. `Stretch` means stretched items on the cross axis but
/// space-between distribution on the main axis; `Surround` means baseline
/// alignment on the cross axis and space-around distribution on the main
/// axis.
///
/// [`mixins::align_items`]: crate::mixins::align_items
/// [`mixins::justify_content`]: crate::mixins::justify_content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum Alignment {
    #[default]
    Start,
    Center,
    End,
    Stretch,
    Surround,
}

/// Line-wrapping behavior of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum WrapMode {
    Wrap,
    #[default]
    NoWrap,
    WrapReverse,
}
