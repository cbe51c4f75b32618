//! Character class definitions

use serde::{Deserialize, Serialize};

/// Class restriction of an item, or the class of a character.
///
/// The API encodes this as a number; anything unknown is treated as
/// unrestricted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", rename_all = "camelCase")]
pub enum ClassType {
    Titan,
    Hunter,
    Warlock,
    #[default]
    Any,
}

impl ClassType {
    pub fn name(self) -> &'static str {
        match self {
            Self::Titan => "Titan",
            Self::Hunter => "Hunter",
            Self::Warlock => "Warlock",
            Self::Any => "Any",
        }
    }

    /// True when the value names a specific class
    pub fn is_restricted(self) -> bool {
        self != Self::Any
    }
}

impl From<u8> for ClassType {
    fn from(v: u8) -> Self {
        match v {
            0 => Self::Titan,
            1 => Self::Hunter,
            2 => Self::Warlock,
            _ => Self::Any,
        }
    }
}

impl std::fmt::Display for ClassType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
