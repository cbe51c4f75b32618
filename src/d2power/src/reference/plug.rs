//! Plug category identifiers used by the item classifiers

/// Weapon trait plugs. Enhanced traits carry the Common tier.
pub const PLUG_CATEGORY_FRAMES: &str = "frames";

/// Plug present on every crafted weapon
pub const PLUG_CATEGORY_CRAFTED_FRAME: &str = "crafting.plugs.frame_identifiers";

/// Deepsight resonance memory plug; its objective tracks extraction progress
pub const PLUG_CATEGORY_DEEPSIGHT_MEMORY: &str = "crafting.plugs.weapons.mods.memories";

/// `inventory.tierType` for Common tier definitions
pub const TIER_TYPE_COMMON: u8 = 3;
