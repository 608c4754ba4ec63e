//! The fixed equipment catalog shared by every character
//!
//! Seven item definitions, constructed once, never mutated. Every character
//! holds a reference to the same catalog.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Equipment slot tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemType {
    Sword,
    Helm,
    Shield,
    Bracer,
    Back,
    Legs,
    Chest,
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// An equipment definition: what it is and the stats needed to wear it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub kind: ItemType,
    pub required_strength: i32,
    pub required_agility: i32,
}

impl Item {
    pub const fn new(kind: ItemType, required_strength: i32, required_agility: i32) -> Self {
        Self {
            kind,
            required_strength,
            required_agility,
        }
    }

    /// Combined stat requirement, used for the battle threshold
    pub fn required_total(&self) -> i32 {
        self.required_strength + self.required_agility
    }
}

/// The full catalog, in equip-pass order
pub const CATALOG: [Item; 7] = [
    Item::new(ItemType::Sword, 10, 7),
    Item::new(ItemType::Helm, 6, 4),
    Item::new(ItemType::Shield, 7, 3),
    Item::new(ItemType::Bracer, 3, 5),
    Item::new(ItemType::Back, 2, 4),
    Item::new(ItemType::Legs, 5, 5),
    Item::new(ItemType::Chest, 7, 3),
];
