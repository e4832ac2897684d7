//! Core game constants
//!
//! Gauge and reputation amounts used by dog and owner actions.

/// Hunger and thirst of a freshly adopted dog
pub const STARTING_GAUGE: i32 = 50;

/// Reputation of a new owner
pub const STARTING_REPUTATION: i32 = 20;

/// Gauge points lost per stage index before the first event
pub const STAGE_DECAY: i32 = 10;

/// Gauge points drained by a starve/thirst event, refilled by eat/drink
pub const MEAL_AMOUNT: i32 = 30;

/// Reputation deltas
pub const ATTACK_PENALTY: i32 = 50;
pub const BARK_PENALTY: i32 = 10;
pub const FRIENDLY_BONUS: i32 = 20;
pub const PICKUP_BONUS: i32 = 10;
pub const LITTER_PENALTY: i32 = 20;
pub const RESCUE_BONUS: i32 = 50;

/// Reputation after a bite is reported
pub const ANIMAL_CONTROL_REPUTATION: i32 = -100;

/// Age limits
pub const MIN_OWNER_AGE: i32 = 18;
pub const MAX_AGE: i32 = 120;

/// Number of stages in a run
pub const NUM_STAGES: usize = 5;
