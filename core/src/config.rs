//! Options controlling how typed objects are loaded and serialized.

use serde::{Deserialize, Serialize};

/// Load behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadOptions {
    /// Reject the first invalid field and run full validation afterwards.
    /// A permissive load keeps whatever values coerce and skips validation.
    pub strict: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { strict: true }
    }
}

impl LoadOptions {
    /// Best-effort load that never fails on field values.
    pub fn permissive() -> Self {
        Self { strict: false }
    }
}

/// Which label set is used for keys in serialized output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyStyle {
    /// JSON wire names (`mediaType`, `schemaVersion`).
    #[default]
    Wire,
    /// Internal field names (`MediaType`, `schemaVersion`).
    Field,
}

/// Text layout of serialized JSON.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JsonStyle {
    #[default]
    Compact,
    /// Four-space indentation.
    Pretty,
}

impl std::fmt::Display for JsonStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Compact => write!(f, "compact"),
            Self::Pretty => write!(f, "pretty"),
        }
    }
}

impl std::str::FromStr for JsonStyle {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            _ => Err(format!(
                "unknown json style: '{}' (supported: compact, pretty)",
                s
            )),
        }
    }
}

/// Serialization options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializeOptions {
    #[serde(default)]
    pub keys: KeyStyle,
    #[serde(default)]
    pub style: JsonStyle,
}

impl SerializeOptions {
    pub fn pretty() -> Self {
        Self {
            keys: KeyStyle::Wire,
            style: JsonStyle::Pretty,
        }
    }
}
