//! Item location definitions

use serde::{Deserialize, Serialize};

/// Where an item physically sits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", rename_all = "camelCase")]
pub enum ItemLocation {
    #[default]
    Unknown,
    Inventory,
    Vault,
    Vendor,
    Postmaster,
}

impl From<u8> for ItemLocation {
    fn from(v: u8) -> Self {
        match v {
            1 => Self::Inventory,
            2 => Self::Vault,
            3 => Self::Vendor,
            4 => Self::Postmaster,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for ItemLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::Inventory => write!(f, "inventory"),
            Self::Vault => write!(f, "vault"),
            Self::Vendor => write!(f, "vendor"),
            Self::Postmaster => write!(f, "postmaster"),
        }
    }
}
