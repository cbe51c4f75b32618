//! Power aggregation
//!
//! Reduces a per-slot power mapping to the numbers the game shows: the
//! floored average over all eight slots, the lowest slot, and the power a
//! character could reach by infusion alone.

use crate::reference::Slot;
use serde::{Deserialize, Serialize};

/// Season power thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PowerCaps {
    /// Any drop raises power up to here
    pub soft_cap: u32,
    /// Powerful rewards raise power up to here
    pub powerful_cap: u32,
    /// Only pinnacle rewards raise power up to here
    pub pinnacle_cap: u32,
}

impl Default for PowerCaps {
    fn default() -> Self {
        Self {
            soft_cap: 1900,
            powerful_cap: 1940,
            pinnacle_cap: 2000,
        }
    }
}

/// Weakest reward source that can still raise overall power
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DropTier {
    Any,
    Powerful,
    Pinnacle,
    Capped,
}

impl PowerCaps {
    pub fn next_drop_tier(&self, overall_power: u32) -> DropTier {
        if overall_power < self.soft_cap {
            DropTier::Any
        } else if overall_power < self.powerful_cap {
            DropTier::Powerful
        } else if overall_power < self.pinnacle_cap {
            DropTier::Pinnacle
        } else {
            DropTier::Capped
        }
    }
}

impl std::fmt::Display for DropTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Any => write!(f, "any"),
            Self::Powerful => write!(f, "powerful"),
            Self::Pinnacle => write!(f, "pinnacle"),
            Self::Capped => write!(f, "capped"),
        }
    }
}

/// Power of every slot. Always complete: missing slots are filled with a
/// fallback when the mapping is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerBySlot([u32; Slot::COUNT]);

impl PowerBySlot {
    /// Same power in every slot
    pub fn uniform(power: u32) -> Self {
        Self([power; Slot::COUNT])
    }

    /// Build from known slot powers, filling the rest with `fallback`
    pub fn from_partial(known: impl IntoIterator<Item = (Slot, u32)>, fallback: u32) -> Self {
        let mut power = Self::uniform(fallback);
        for (slot, value) in known {
            power.set(slot, value);
        }
        power
    }

    pub fn get(&self, slot: Slot) -> u32 {
        self.0[slot.index()]
    }

    pub fn set(&mut self, slot: Slot, power: u32) {
        self.0[slot.index()] = power;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Slot, u32)> + '_ {
        Slot::ALL.iter().map(move |slot| (*slot, self.get(*slot)))
    }
}

/// Aggregated power numbers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerSummary {
    pub min_power: u32,
    pub average_power: f64,
    /// Floored average, as displayed in game
    pub overall_power: u32,
}

/// Summarize a complete slot mapping
pub fn summarize(power: &PowerBySlot) -> PowerSummary {
    let total: u64 = power.0.iter().map(|p| u64::from(*p)).sum();
    let average_power = total as f64 / Slot::COUNT as f64;
    // The floored mean of u32 values always fits in u32
    let overall_power = u32::try_from(total / Slot::COUNT as u64).unwrap_or(u32::MAX);
    PowerSummary {
        min_power: power.0.iter().copied().min().unwrap_or(0),
        average_power,
        overall_power,
    }
}

/// Overall power reachable by infusion with no new drops.
///
/// Each round raises every slot below `max(soft_cap, overall)` to that
/// value, then recomputes overall power. Stops once a round raises nothing.
pub fn potential_power(power: &PowerBySlot, soft_cap: u32) -> u32 {
    let mut slots = *power;
    loop {
        let target = summarize(&slots).overall_power.max(soft_cap);
        let mut raised = false;
        for value in slots.0.iter_mut() {
            if *value < target {
                *value = target;
                raised = true;
            }
        }
        if !raised {
            return summarize(&slots).overall_power;
        }
    }
}
