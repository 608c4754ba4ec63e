//! Simulation constants with documented values
//!
//! All magic numbers are collected here with explanations of their purpose
//! and how they interact with each other.

use std::ops::Range;
use std::time::Duration;

/// Number of iterations in the stat progression loop.
///
/// The loop always runs to completion once started; there is no
/// cancellation path.
pub const PROGRESSION_TICKS: u32 = 5;

/// Real-time delay before each stat increase.
///
/// Each iteration waits out the full interval before mutating stats,
/// so the whole progression takes PROGRESSION_TICKS * 2 seconds.
pub const PROGRESSION_INTERVAL: Duration = Duration::from_secs(2);

/// Strength and agility gained per progression tick.
pub const STAT_GAIN_PER_TICK: i32 = 1;

/// Fraction of the most demanding catalog item's requirement sum that a
/// fighter must reach for their equipment advantage to count in battle.
///
/// On the fixed catalog the most demanding item is the Sword (10+7), so
/// the threshold works out to floor(0.8 * 17) = 13.
pub const BATTLE_THRESHOLD_FACTOR: f64 = 0.8;

/// Stat roll range for the auto-generated enemy (half-open, per rand).
pub const ENEMY_STAT_RANGE: Range<i32> = 3..11;
