//! Simulation configuration with documented constants
//!
//! All gameplay numbers are collected here with explanations of their
//! purpose. The defaults reproduce the classic balance.

use crate::core::error::{PetError, Result};

/// Tuning values for the pet simulation
///
/// Everything that shapes pacing lives here: action deltas, prices, rewards
/// and the attribute bounds. Tests construct variants of this to exercise
/// edge behavior without patching the simulation itself.
#[derive(Debug, Clone)]
pub struct SimConfig {
    // === ATTRIBUTES ===
    /// Starting value for every attribute (hunger, happiness, energy,
    /// cleanliness, health)
    pub attribute_initial: i32,
    /// Lower clamp bound for attributes; an attribute stuck at this value
    /// is what the death check looks for
    pub attribute_min: i32,
    /// Upper clamp bound for attributes
    pub attribute_max: i32,

    // === ACTIONS ===
    /// How much the Feed action moves the hunger gauge.
    ///
    /// Applied as a DECREASE. That is a long-standing quirk of the game
    /// (feeding arguably should fill the gauge) kept deliberately so old
    /// saves and muscle memory stay valid.
    pub feed_hunger_drop: i32,
    /// Energy restored by one Sleep action
    pub sleep_energy_gain: i32,
    /// Hunger gained while sleeping
    pub sleep_hunger_gain: i32,
    /// Cleanliness restored by one Clean action
    pub clean_gain: i32,
    /// Energy spent on playing a mini-game, win or lose
    pub play_energy_cost: i32,

    // === RANDOM EVENTS ===
    /// How hard the per-turn random event hits the chosen attribute
    pub event_penalty: i32,

    // === MINI-GAMES ===
    /// Happiness gained for winning a mini-game
    pub game_happiness_win: i32,
    /// Happiness lost for losing a mini-game
    pub game_happiness_loss: i32,
    /// Coins paid out for winning a mini-game
    pub game_reward: i64,

    // === ECONOMY ===
    /// Coins a fresh pet starts with
    pub starting_balance: i64,
    /// Price of food in the shop
    pub food_price: i64,
    /// Hunger restored by bought food
    pub food_hunger_gain: i32,
    /// Price of medicine in the shop
    pub medicine_price: i64,
    /// Boost applied by medicine to whichever attribute it is used on
    pub medicine_gain: i32,
    /// Price of a toy in the shop
    pub toy_price: i64,
    /// Happiness granted by a new toy
    pub toy_happiness_gain: i32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            attribute_initial: 50,
            attribute_min: 0,
            attribute_max: 100,

            feed_hunger_drop: 10,
            sleep_energy_gain: 20,
            sleep_hunger_gain: 5,
            clean_gain: 20,
            play_energy_cost: 5,

            event_penalty: 10,

            game_happiness_win: 20,
            game_happiness_loss: 10,
            game_reward: 10,

            starting_balance: 50,
            food_price: 20,
            food_hunger_gain: 20,
            medicine_price: 30,
            medicine_gain: 30,
            toy_price: 15,
            toy_happiness_gain: 15,
        }
    }
}

impl SimConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.attribute_min >= self.attribute_max {
            return Err(PetError::InvalidConfig(format!(
                "attribute_min ({}) must be < attribute_max ({})",
                self.attribute_min, self.attribute_max
            )));
        }

        if self.attribute_initial < self.attribute_min
            || self.attribute_initial > self.attribute_max
        {
            return Err(PetError::InvalidConfig(format!(
                "attribute_initial ({}) must lie within [{}, {}]",
                self.attribute_initial, self.attribute_min, self.attribute_max
            )));
        }

        if self.food_price < 0 || self.medicine_price < 0 || self.toy_price < 0 {
            return Err(PetError::InvalidConfig("prices must be >= 0".into()));
        }

        if self.event_penalty < 0 {
            return Err(PetError::InvalidConfig("event_penalty must be >= 0".into()));
        }

        Ok(())
    }
}
