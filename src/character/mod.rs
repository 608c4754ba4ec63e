//! Character model: identity, stats, and equipped gear
//!
//! A single `Character` type covers both duelists; [`Role`] is a purely
//! narrative tag with no behavior attached.

pub mod equip;
pub mod progression;

pub use equip::EquipCheck;

use crate::items::{Item, CATALOG};
use serde::{Deserialize, Serialize};

/// Which side of the duel a character fights on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Player,
    Enemy,
}

/// A duelist: name, mutable stats, and a growing set of equipped items.
///
/// Invariants: `equipped` is always a subset of `catalog` with no
/// duplicates; items are only ever added, never removed. Strength and
/// agility are validated non-negative at process startup and only
/// increase afterward.
#[derive(Debug, Clone)]
pub struct Character {
    name: String,
    role: Role,
    strength: i32,
    agility: i32,
    catalog: &'static [Item],
    equipped: Vec<Item>,
    equip_check: Option<EquipCheck>,
}

impl Character {
    /// Create a character over the shared fixed catalog.
    ///
    /// No eligibility check is attached; until one is, every equip
    /// attempt fails.
    pub fn new(name: impl Into<String>, role: Role, strength: i32, agility: i32) -> Self {
        Self::with_catalog(name, role, strength, agility, &CATALOG)
    }

    /// Create a character over an arbitrary catalog (used by tests to
    /// exercise the empty-catalog path).
    pub fn with_catalog(
        name: impl Into<String>,
        role: Role,
        strength: i32,
        agility: i32,
        catalog: &'static [Item],
    ) -> Self {
        Self {
            name: name.into(),
            role,
            strength,
            agility,
            catalog,
            equipped: Vec::new(),
            equip_check: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn strength(&self) -> i32 {
        self.strength
    }

    pub fn agility(&self) -> i32 {
        self.agility
    }

    pub fn catalog(&self) -> &[Item] {
        self.catalog
    }

    /// Currently equipped items, in the order they were equipped
    pub fn equipped(&self) -> &[Item] {
        &self.equipped
    }

    pub fn equipped_count(&self) -> usize {
        self.equipped.len()
    }

    /// Sum of strength and agility, the battle currency
    pub fn total_stats(&self) -> i32 {
        self.strength + self.agility
    }

    /// Print the equipped list, or the empty-state line
    pub fn display_equipped(&self) {
        if self.equipped.is_empty() {
            println!("\nNo items equipped.");
            return;
        }
        let list = self
            .equipped
            .iter()
            .map(|item| item.kind.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        println!("\n{}'s equipment: {}", self.name, list);
    }
}
