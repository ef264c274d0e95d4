//! Per-turn random perturbation
//!
//! Once per completed turn the world pushes back: one of the four gameplay
//! gauges, chosen uniformly, takes a fixed penalty.

use rand::Rng;

use crate::core::config::SimConfig;
use crate::pet::{AttributeKind, Pet};

/// What the world did to the pet this turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    GotHungry,
    FeltSad,
    GotTired,
    GotDirty,
}

impl EventKind {
    /// The gauge this event drains
    pub fn attribute(&self) -> AttributeKind {
        match self {
            EventKind::GotHungry => AttributeKind::Hunger,
            EventKind::FeltSad => AttributeKind::Happiness,
            EventKind::GotTired => AttributeKind::Energy,
            EventKind::GotDirty => AttributeKind::Cleanliness,
        }
    }
}

/// Pick one gameplay gauge uniformly at random and drain it
///
/// Each of the four outcomes has equal probability, independent per call.
/// Returns which event struck so the caller can report it.
pub fn trigger_event(pet: &mut Pet, rng: &mut impl Rng, config: &SimConfig) -> EventKind {
    let event = match rng.gen_range(0..4) {
        0 => EventKind::GotHungry,
        1 => EventKind::FeltSad,
        2 => EventKind::GotTired,
        _ => EventKind::GotDirty,
    };

    let gauge = match event {
        EventKind::GotHungry => &mut pet.hunger,
        EventKind::FeltSad => &mut pet.happiness,
        EventKind::GotTired => &mut pet.energy,
        EventKind::GotDirty => &mut pet.cleanliness,
    };
    gauge.lower(config.event_penalty);

    tracing::debug!(?event, penalty = config.event_penalty, "random event struck");
    event
}
