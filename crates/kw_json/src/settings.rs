use std::fmt;

use crate::NamingRule;

// -----------------------------------------------------------------------------
// Direction

/// Which way a value is converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Value to text.
    Encode,
    /// Text to value.
    Decode,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Encode => "encode",
            Self::Decode => "decode",
        })
    }
}

// -----------------------------------------------------------------------------
// TagSettings

/// The annotation names and naming rule a [`JsonCodec`](crate::JsonCodec)
/// resolves keys with.
///
/// An empty annotation name disables the step it names.
///
/// | field         | default      | consulted                                 |
/// |---------------|--------------|-------------------------------------------|
/// | `suppress_tag`| `"toJson"`   | encode only, first, only the value `"-"`  |
/// | `encode_tag`  | `"toJson"`   | encode                                    |
/// | `decode_tag`  | `"fromJson"` | decode                                    |
/// | `custom_tag`  | `""`         | both                                      |
/// | `default_tag` | `"json"`     | both                                      |
/// | `naming_rule` | identity     | both, when no annotation decided the key  |
#[derive(Debug, Clone)]
pub struct TagSettings {
    pub decode_tag: String,
    pub encode_tag: String,
    pub custom_tag: String,
    pub default_tag: String,
    pub suppress_tag: String,
    pub naming_rule: NamingRule,
}

impl TagSettings {
    pub const DEFAULT_DECODE_TAG: &'static str = "fromJson";
    pub const DEFAULT_ENCODE_TAG: &'static str = "toJson";
    pub const DEFAULT_CUSTOM_TAG: &'static str = "";
    pub const DEFAULT_DEFAULT_TAG: &'static str = "json";
    pub const DEFAULT_SUPPRESS_TAG: &'static str = "toJson";

    /// The annotation consulted first for `direction`.
    #[inline]
    pub fn direction_tag(&self, direction: Direction) -> &str {
        match direction {
            Direction::Encode => &self.encode_tag,
            Direction::Decode => &self.decode_tag,
        }
    }
}

impl Default for TagSettings {
    fn default() -> Self {
        Self {
            decode_tag: Self::DEFAULT_DECODE_TAG.to_owned(),
            encode_tag: Self::DEFAULT_ENCODE_TAG.to_owned(),
            custom_tag: Self::DEFAULT_CUSTOM_TAG.to_owned(),
            default_tag: Self::DEFAULT_DEFAULT_TAG.to_owned(),
            suppress_tag: Self::DEFAULT_SUPPRESS_TAG.to_owned(),
            naming_rule: NamingRule::identity(),
        }
    }
}
