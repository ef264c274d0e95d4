//! Turn orchestrator - ties player actions, random events and aging together
//!
//! One turn = one player action, then (if the pet still lives) exactly one
//! random event and one age increment. Quit completes no turn: no death
//! check, no event, no aging. The orchestrator never prints; it returns a
//! list of [`TurnEvent`]s for the menu layer to render.

use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::config::SimConfig;
use crate::economy::PurchaseKind;
use crate::minigame::{Challenge, GameOutcome};
use crate::pet::{BoundedAttribute, Pet};
use crate::simulation::random_event::{trigger_event, EventKind};

/// One intent from the player, produced by the interaction layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    Feed,
    /// Play a generated challenge with the player's answer already gathered
    Play { challenge: Challenge, answer: i32 },
    Sleep,
    Clean,
    /// Read-only report; still counts as a completed turn
    Status,
    Shop(PurchaseKind),
    Quit,
}

/// The simulation's two states; `Dead` is terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeState {
    Alive,
    Dead,
}

/// Snapshot of everything the Status action shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusReport {
    pub hunger: i32,
    pub happiness: i32,
    pub energy: i32,
    pub cleanliness: i32,
    pub money: i64,
}

/// Events generated during one turn, in the order they happened
///
/// Returned by [`Simulation::take_turn`] so the binary can narrate the turn
/// without the core writing to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnEvent {
    Fed,
    Played(GameOutcome),
    Slept,
    Cleaned,
    Status(StatusReport),
    Purchased { item: PurchaseKind, success: bool },
    /// The per-turn random perturbation struck
    WorldEvent(EventKind),
    /// The turn completed; carries the new age
    Aged(u64),
    Died,
    QuitRequested,
}

/// Owns the pet, the RNG and the turn cycle
#[derive(Debug)]
pub struct Simulation {
    pet: Pet,
    state: LifeState,
    config: SimConfig,
    rng: ChaCha8Rng,
}

impl Simulation {
    /// Start a session with a freshly seeded RNG
    pub fn new(pet: Pet, config: SimConfig) -> Self {
        Self::with_rng(pet, config, ChaCha8Rng::from_entropy())
    }

    /// Start a session with a caller-provided RNG (tests seed this)
    pub fn with_rng(pet: Pet, config: SimConfig, rng: ChaCha8Rng) -> Self {
        let state = if pet.is_alive() {
            LifeState::Alive
        } else {
            LifeState::Dead
        };
        Self {
            pet,
            state,
            config,
            rng,
        }
    }

    pub fn pet(&self) -> &Pet {
        &self.pet
    }

    pub fn pet_mut(&mut self) -> &mut Pet {
        &mut self.pet
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn state(&self) -> LifeState {
        self.state
    }

    /// The death check: all four gameplay gauges above zero
    pub fn is_alive(&self) -> bool {
        self.pet.is_alive()
    }

    /// Snapshot for the Status action
    pub fn status(&self) -> StatusReport {
        StatusReport {
            hunger: self.pet.hunger.get(),
            happiness: self.pet.happiness.get(),
            energy: self.pet.energy.get(),
            cleanliness: self.pet.cleanliness.get(),
            money: self.pet.wallet.balance(),
        }
    }

    /// Run one full turn
    ///
    /// Applies the action, then unless the action was Quit: a live pet takes
    /// exactly one random event and ages one turn; a dead pet transitions to
    /// `Dead` with no event and no aging. A dead simulation ignores input.
    pub fn take_turn(&mut self, action: PlayerAction) -> Vec<TurnEvent> {
        let mut events = Vec::new();

        if self.state == LifeState::Dead {
            return events;
        }

        let quit = matches!(action, PlayerAction::Quit);
        self.apply_action(action, &mut events);

        if quit {
            return events;
        }

        if self.pet.is_alive() {
            let kind = self.apply_random_event();
            events.push(TurnEvent::WorldEvent(kind));
            self.advance_age();
            events.push(TurnEvent::Aged(self.pet.age.get()));
        } else {
            self.state = LifeState::Dead;
            tracing::info!(name = %self.pet.name, age = self.pet.age.get(), "pet died");
            events.push(TurnEvent::Died);
        }

        events
    }

    /// Apply just the player's action, no turn bookkeeping
    pub fn apply_action(&mut self, action: PlayerAction, events: &mut Vec<TurnEvent>) {
        match action {
            PlayerAction::Feed => {
                // Historic quirk, reproduced on purpose: feeding LOWERS the
                // hunger gauge instead of raising it. See SimConfig.
                self.pet.hunger.lower(self.config.feed_hunger_drop);
                events.push(TurnEvent::Fed);
            }
            PlayerAction::Play { challenge, answer } => {
                let outcome = challenge.resolve(answer, &self.config);
                shift(&mut self.pet.happiness, outcome.happiness_delta);
                self.pet.wallet.earn(outcome.reward);
                self.pet.energy.lower(self.config.play_energy_cost);
                tracing::debug!(kind = ?challenge.kind(), won = outcome.won, "mini-game settled");
                events.push(TurnEvent::Played(outcome));
            }
            PlayerAction::Sleep => {
                self.pet.energy.raise(self.config.sleep_energy_gain);
                self.pet.hunger.raise(self.config.sleep_hunger_gain);
                events.push(TurnEvent::Slept);
            }
            PlayerAction::Clean => {
                self.pet.cleanliness.raise(self.config.clean_gain);
                events.push(TurnEvent::Cleaned);
            }
            PlayerAction::Status => {
                events.push(TurnEvent::Status(self.status()));
            }
            PlayerAction::Shop(item) => {
                let success = match item {
                    PurchaseKind::Food => self
                        .pet
                        .wallet
                        .buy_food(&mut self.pet.hunger, &self.config),
                    // The shop has always pointed medicine at cleanliness,
                    // not health. Kept as-is.
                    PurchaseKind::Medicine => self
                        .pet
                        .wallet
                        .buy_medicine(&mut self.pet.cleanliness, &self.config),
                    PurchaseKind::Toy => self
                        .pet
                        .wallet
                        .buy_toy(&mut self.pet.happiness, &self.config),
                };
                events.push(TurnEvent::Purchased { item, success });
            }
            PlayerAction::Quit => {
                events.push(TurnEvent::QuitRequested);
            }
        }
    }

    /// Apply one random perturbation to the pet
    pub fn apply_random_event(&mut self) -> EventKind {
        trigger_event(&mut self.pet, &mut self.rng, &self.config)
    }

    /// Count one completed turn
    pub fn advance_age(&mut self) {
        self.pet.age.advance();
    }

    /// Hand the pet back when the session ends (for the final save)
    pub fn into_pet(self) -> Pet {
        self.pet
    }
}

/// Apply a signed delta to a gauge, clamped either way
fn shift(gauge: &mut BoundedAttribute, delta: i32) {
    if delta >= 0 {
        gauge.raise(delta);
    } else {
        gauge.lower(-delta);
    }
}
