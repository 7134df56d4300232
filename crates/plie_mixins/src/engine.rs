//! Rendering-engine identifiers for vendor-prefix selection.
//!
//! The engine value is the one ambient input the mixins depend on; it is
//! passed in rather than probed so the translation layer stays
//! referentially transparent.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closed set of engines a `display` declaration can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum Engine {
    /// WebKit builds predating the unified syntax (2009 box draft).
    OldWebkit,
    /// Prefixed modern WebKit.
    Webkit,
    /// Prefixed Gecko.
    Gecko,
    /// Trident and pre-Chromium Edge.
    Trident,
    /// Engines that understand the unprefixed property.
    #[default]
    Standard,
}

/// Token table matching the identifiers a vendor-prefix probe reports.
static ENGINE_TOKENS: phf::Map<&'static str, Engine> = phf::phf_map! {
    "old-webkit" => Engine::OldWebkit,
    "webkit" => Engine::Webkit,
    "moz" => Engine::Gecko,
    "ms" => Engine::Trident,
    "standard" => Engine::Standard,
};

impl Engine {
    /// The `display` keyword this engine understands for flex containers.
    pub fn display_keyword(self) -> &'static str {
        match self {
            Self::OldWebkit => "-webkit-box",
            Self::Webkit => "-webkit-flex",
            Self::Gecko => "-moz-flex",
            Self::Trident => "-ms-flexbox",
            Self::Standard => "flex",
        }
    }
}

/// Engine token outside the recognized set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown engine token `{0}`")]
pub struct UnknownEngine(pub String);

impl FromStr for Engine {
    type Err = UnknownEngine;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        ENGINE_TOKENS
            .get(token)
            .copied()
            .ok_or_else(|| UnknownEngine(token.to_string()))
    }
}
