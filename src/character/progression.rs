//! Timed stat progression
//!
//! Five fixed-interval ticks; each waits out the delay, raises both stats,
//! and re-runs the equip pass before the next tick starts. Strictly
//! sequential, and always runs to completion once started.

use crate::character::Character;
use crate::core::config::{PROGRESSION_INTERVAL, PROGRESSION_TICKS, STAT_GAIN_PER_TICK};

impl Character {
    /// Raise strength and agility by one per tick, re-equipping after
    /// each raise. This is the only suspending operation in the program.
    pub async fn increase_stats(&mut self) {
        for tick in 0..PROGRESSION_TICKS {
            tokio::time::sleep(PROGRESSION_INTERVAL).await;
            self.strength += STAT_GAIN_PER_TICK;
            self.agility += STAT_GAIN_PER_TICK;
            tracing::debug!(
                tick,
                strength = self.strength,
                agility = self.agility,
                "progression tick"
            );
            println!(
                "\nStats increased! Strength: {}, Agility: {}",
                self.strength, self.agility
            );
            self.equip_all_items();
        }
    }
}
