//! Equip engine: eligibility checks and the equip pass
//!
//! Eligibility is a pluggable single-slot check. Nothing attaches it
//! automatically; the driver wires [`Character::can_equip`] in before the
//! first equip pass. With no check attached, every attempt fails.

use crate::character::Character;
use crate::items::Item;

/// Pluggable eligibility check consulted by [`Character::try_equip`]
pub type EquipCheck = fn(&Character, &Item) -> bool;

impl Character {
    /// Set the eligibility check consulted by future equip attempts
    pub fn attach_equip_check(&mut self, check: EquipCheck) {
        self.equip_check = Some(check);
    }

    /// Clear the eligibility check; subsequent equip attempts all fail
    pub fn detach_equip_check(&mut self) {
        self.equip_check = None;
    }

    /// The default stat-threshold check: both stats meet the item's
    /// requirements
    pub fn can_equip(&self, item: &Item) -> bool {
        self.strength >= item.required_strength && self.agility >= item.required_agility
    }

    /// Attempt to equip one catalog item.
    ///
    /// Succeeds only when the attached check passes and the item is not
    /// already equipped. All failure causes (no check attached, check
    /// refused, already equipped) share one failure line; callers cannot
    /// tell them apart from the output.
    pub fn try_equip(&mut self, item: Item) {
        let eligible = match self.equip_check {
            Some(check) => check(self, &item),
            None => false,
        };
        if eligible && !self.equipped.contains(&item) {
            self.equipped.push(item);
            println!("{} can be equipped", item.kind);
        } else {
            println!("{} cannot be equipped", item.kind);
        }
    }

    /// One full equip pass: try every not-yet-equipped catalog item in
    /// catalog order, then print the equipped list.
    pub fn equip_all_items(&mut self) {
        if self.catalog.is_empty() {
            println!("No items available to equip.");
            return;
        }
        let pending: Vec<Item> = self
            .catalog
            .iter()
            .filter(|item| !self.equipped.contains(item))
            .copied()
            .collect();
        for item in pending {
            self.try_equip(item);
        }
        self.display_equipped();
    }
}
