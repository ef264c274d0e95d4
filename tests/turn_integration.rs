//! Integration tests for the full turn cycle
//!
//! These drive whole sessions through `Simulation::take_turn` and verify:
//! - the action / random event / aging order of one turn
//! - the death transition and its bookkeeping
//! - the shop scenario (spend then boost, clamped)
//! - Quit leaving the state untouched

use pocketpet::core::config::SimConfig;
use pocketpet::economy::PurchaseKind;
use pocketpet::pet::Pet;
use pocketpet::simulation::{LifeState, PlayerAction, Simulation, TurnEvent};

use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn seeded_sim(seed: u64) -> Simulation {
    let config = SimConfig::default();
    let pet = Pet::new("Momo", &config);
    Simulation::with_rng(pet, config, ChaCha8Rng::seed_from_u64(seed))
}

#[test]
fn ages_once_per_completed_turn() {
    let mut sim = seeded_sim(1);

    for expected_age in 1..=10 {
        let events = sim.take_turn(PlayerAction::Sleep);
        if matches!(events.last(), Some(TurnEvent::Died)) {
            return; // an unlucky event run can end the session early
        }
        assert!(matches!(events.last(), Some(TurnEvent::Aged(age)) if *age == expected_age));
    }
    assert_eq!(sim.pet().age.get(), 10);
}

#[test]
fn shop_scenario_buy_food() {
    // New pet, balance 50: buying food leaves 30 coins and raises hunger
    // by 20 (before the turn's random event, which this seed may apply).
    let mut sim = seeded_sim(7);
    let events = sim.take_turn(PlayerAction::Shop(PurchaseKind::Food));

    assert!(events.contains(&TurnEvent::Purchased {
        item: PurchaseKind::Food,
        success: true,
    }));
    assert_eq!(sim.pet().wallet.balance(), 30);
    let hunger = sim.pet().hunger.get();
    assert!(hunger == 70 || hunger == 60, "got {}", hunger);
}

#[test]
fn hunger_boost_clamps_at_the_cap() {
    let config = SimConfig::default();
    let mut pet = Pet::new("Momo", &config);
    pet.hunger.set(95);
    let mut sim = Simulation::with_rng(pet, config, ChaCha8Rng::seed_from_u64(7));

    sim.take_turn(PlayerAction::Shop(PurchaseKind::Food));
    assert!(sim.pet().hunger.get() <= 100);
}

#[test]
fn starving_pet_dies_on_the_feeding_quirk() {
    // hunger=5 and the Feed action (which lowers hunger) is fatal: the
    // turn ends with Died, no random event and no age increment.
    let config = SimConfig::default();
    let mut pet = Pet::new("Momo", &config);
    pet.hunger.set(5);
    let mut sim = Simulation::with_rng(pet, config, ChaCha8Rng::seed_from_u64(99));

    let events = sim.take_turn(PlayerAction::Feed);

    assert_eq!(events, vec![TurnEvent::Fed, TurnEvent::Died]);
    assert_eq!(sim.state(), LifeState::Dead);
    assert_eq!(sim.pet().age.get(), 0);
    assert!(!events.iter().any(|e| matches!(e, TurnEvent::WorldEvent(_))));
}

#[test]
fn quit_on_turn_one_preserves_state_exactly() {
    let mut sim = seeded_sim(5);
    let before = sim.pet().to_record();

    let events = sim.take_turn(PlayerAction::Quit);

    assert_eq!(events, vec![TurnEvent::QuitRequested]);
    assert_eq!(sim.into_pet().to_record(), before);
}

#[test]
fn neglected_pet_eventually_dies() {
    // Only random events drain the gauges when every turn is a Status
    // check; 100 penalties across four gauges must exhaust one of them.
    let mut sim = seeded_sim(11);

    for _ in 0..200 {
        sim.take_turn(PlayerAction::Status);
        if sim.state() == LifeState::Dead {
            return;
        }
    }
    panic!("pet survived 200 turns of pure neglect");
}

#[test]
fn session_mixes_actions_and_stays_in_bounds() {
    let mut sim = seeded_sim(23);

    let script = [
        PlayerAction::Sleep,
        PlayerAction::Clean,
        PlayerAction::Shop(PurchaseKind::Toy),
        PlayerAction::Feed,
        PlayerAction::Status,
        PlayerAction::Shop(PurchaseKind::Medicine),
        PlayerAction::Sleep,
    ];

    for action in script {
        sim.take_turn(action);
        let pet = sim.pet();
        for gauge in [pet.hunger, pet.happiness, pet.energy, pet.cleanliness, pet.health] {
            assert!((0..=100).contains(&gauge.get()));
        }
        if sim.state() == LifeState::Dead {
            break;
        }
    }
}
