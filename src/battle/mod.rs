//! One-shot battle resolution
//!
//! The battle is a handful of comparisons between the two fighters'
//! aggregate stats and equipped-item counts. Resolution is pure; narration
//! is layered on top by [`Character::start_battle`].

use crate::character::Character;
use crate::core::config::BATTLE_THRESHOLD_FACTOR;
use crate::items::Item;

/// Result of resolving a battle, from the challenger's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    ChallengerWins,
    OpponentWins,
    /// Both fighters fell short of the stat threshold
    Underpowered { required: i32 },
    Draw,
}

impl Character {
    /// Requirement sum of the most demanding catalog item.
    ///
    /// 17 on the fixed catalog (the Sword); 0 on an empty catalog so the
    /// battle threshold degenerates instead of panicking.
    pub fn max_item_stats(&self) -> i32 {
        self.catalog()
            .iter()
            .map(Item::required_total)
            .max()
            .unwrap_or(0)
    }

    /// Total stats a fighter must reach for an equipment advantage to
    /// decide the battle. Truncating cast, so 0.8 * 17 rounds down to 13.
    pub fn required_battle_stats(&self) -> i32 {
        (BATTLE_THRESHOLD_FACTOR * self.max_item_stats() as f64) as i32
    }

    /// Resolve the duel. Branches are evaluated in order; the first match
    /// wins.
    pub fn resolve_battle(&self, opponent: &Character) -> BattleOutcome {
        let required = self.required_battle_stats();
        let total = self.total_stats();
        let opponent_total = opponent.total_stats();

        if total >= required && self.equipped_count() > opponent.equipped_count() {
            BattleOutcome::ChallengerWins
        } else if total < required && self.equipped_count() < opponent.equipped_count() {
            BattleOutcome::OpponentWins
        } else if total < required && opponent_total < required {
            BattleOutcome::Underpowered { required }
        } else {
            BattleOutcome::Draw
        }
    }

    /// Print the battle banner and the outcome narration. No state
    /// changes; the outcome is observable only through the printed text.
    pub fn start_battle(&self, opponent: &Character) {
        println!(
            "\nThe battle begins!\nPlayer stats: {}, equipped: {} items\nOpponent stats: {}, equipped: {} items",
            self.total_stats(),
            self.equipped_count(),
            opponent.total_stats(),
            opponent.equipped_count()
        );

        match self.resolve_battle(opponent) {
            BattleOutcome::ChallengerWins => println!("Player {} wins!", self.name()),
            BattleOutcome::OpponentWins => println!("Opponent {} wins!", opponent.name()),
            BattleOutcome::Underpowered { required } => println!(
                "Draw! Both fighters are too weak.\nAt least {} total stats are needed",
                required
            ),
            BattleOutcome::Draw => println!("Draw!"),
        }
    }
}
