//! Pocketpet - Entry Point
//!
//! The interactive menu layer: prompts for a name, restores any previous
//! session, then loops reading one intent per turn and narrating what the
//! simulation returns. All text rendering and raw input live here; the
//! simulation core never prints.

use pocketpet::core::config::SimConfig;
use pocketpet::economy::PurchaseKind;
use pocketpet::minigame::{Challenge, GameKind};
use pocketpet::persistence;
use pocketpet::pet::Pet;
use pocketpet::simulation::{LifeState, PlayerAction, Simulation, TurnEvent};

use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::{self, Write};
use std::path::Path;

/// Where the pet lives between runs
const SAVE_PATH: &str = "pocketpet_status.txt";

fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter("pocketpet=info")
        .init();

    tracing::info!("Pocketpet starting...");

    let config = SimConfig::default();
    if let Err(e) = config.validate() {
        // Defaults are checked in tests; this guards future tuning edits.
        eprintln!("Bad configuration: {}", e);
    }

    print!("Enter a name for your pet: ");
    let _ = io::stdout().flush();
    let name = read_line();

    let mut pet = Pet::new(name, &config);

    // A previous save wins over the prompt, name included.
    let save_path = Path::new(SAVE_PATH);
    match persistence::load(save_path) {
        Ok(record) => {
            tracing::info!(name = %record.name, age = record.age, "restored previous session");
            pet.restore(record);
        }
        Err(e) => {
            tracing::warn!("no saved pet loaded ({}), starting fresh", e);
        }
    }

    println!("\nWelcome to Pocketpet, {}!", pet.name);

    let mut sim = Simulation::new(pet, config);
    let mut challenge_rng = ChaCha8Rng::from_entropy();

    loop {
        show_options();
        let choice = read_line();

        let action = match choice.as_str() {
            "1" => PlayerAction::Feed,
            "2" => match read_play_intent(&mut challenge_rng) {
                Some(action) => action,
                None => continue,
            },
            "3" => PlayerAction::Sleep,
            "4" => PlayerAction::Clean,
            "5" => PlayerAction::Status,
            "6" => match read_shop_intent() {
                Some(action) => action,
                None => continue,
            },
            "7" => PlayerAction::Quit,
            _ => {
                println!("Invalid option. Try again.");
                continue;
            }
        };

        let events = sim.take_turn(action);
        for event in &events {
            render_event(event);
        }

        if events.contains(&TurnEvent::QuitRequested) || sim.state() == LifeState::Dead {
            break;
        }
    }

    let record = sim.into_pet().to_record();
    if let Err(e) = persistence::save(Path::new(SAVE_PATH), &record) {
        // Not fatal: the run ends normally, only durability is lost.
        eprintln!("Could not save your pet: {}", e);
    }

    // Always exit 0, death included.
}

fn show_options() {
    println!("\nOptions:");
    println!("1. Feed");
    println!("2. Play");
    println!("3. Sleep");
    println!("4. Clean");
    println!("5. Status");
    println!("6. Shop");
    println!("7. Quit");
    print!("Choose an option: ");
    let _ = io::stdout().flush();
}

/// Sub-menu for the Play action: pick a game, gather the answer
///
/// Returns None when the player backs out with invalid input, which costs
/// no turn.
fn read_play_intent(rng: &mut ChaCha8Rng) -> Option<PlayerAction> {
    println!("Choose a game:");
    println!("1. Guessing Game");
    println!("2. Arithmetic Game");
    print!("Choose an option: ");
    let _ = io::stdout().flush();

    let kind = match read_line().as_str() {
        "1" => GameKind::Guessing,
        "2" => GameKind::Arithmetic,
        _ => {
            println!("Invalid option. Try again.");
            return None;
        }
    };

    let challenge = Challenge::generate(kind, rng);
    match challenge {
        Challenge::Guessing { .. } => {
            print!("Guess the number between 1 and 100: ");
        }
        Challenge::Arithmetic { a, b } => {
            print!("What is {} + {}? ", a, b);
        }
    }
    let _ = io::stdout().flush();

    let answer = match read_line().parse() {
        Ok(n) => n,
        Err(_) => {
            println!("That is not a number. Try again.");
            return None;
        }
    };

    Some(PlayerAction::Play { challenge, answer })
}

/// Sub-menu for the Shop action
fn read_shop_intent() -> Option<PlayerAction> {
    println!("\nShop:");
    println!("1. Buy Food (20 coins)");
    println!("2. Buy Medicine (30 coins)");
    println!("3. Buy Toy (15 coins)");
    print!("Choose an option: ");
    let _ = io::stdout().flush();

    let item = match read_line().as_str() {
        "1" => PurchaseKind::Food,
        "2" => PurchaseKind::Medicine,
        "3" => PurchaseKind::Toy,
        _ => {
            println!("Invalid shop option. Try again.");
            return None;
        }
    };

    Some(PlayerAction::Shop(item))
}

/// Narrate one turn event
fn render_event(event: &TurnEvent) {
    use pocketpet::simulation::EventKind;

    match event {
        TurnEvent::Fed => println!("You fed your pet."),
        TurnEvent::Played(outcome) => {
            if outcome.won {
                println!(
                    "Correct! Great job. You earned {} coins.",
                    outcome.reward
                );
            } else {
                println!(
                    "Sorry, the answer was {}. Better luck next time!",
                    outcome.solution
                );
            }
        }
        TurnEvent::Slept => println!("Your pet slept and regained energy."),
        TurnEvent::Cleaned => println!("You cleaned your pet."),
        TurnEvent::Status(report) => {
            println!("Hunger: {}", report.hunger);
            println!("Happiness: {}", report.happiness);
            println!("Energy: {}", report.energy);
            println!("Cleanliness: {}", report.cleanliness);
            println!("Money: {}", report.money);
        }
        TurnEvent::Purchased { item, success } => {
            let line = match (item, success) {
                (PurchaseKind::Food, true) => "You bought food and fed your pet.",
                (PurchaseKind::Food, false) => "Not enough money to buy food.",
                (PurchaseKind::Medicine, true) => "You bought medicine for your pet.",
                (PurchaseKind::Medicine, false) => "Not enough money to buy medicine.",
                (PurchaseKind::Toy, true) => "You bought a toy and made your pet happy.",
                (PurchaseKind::Toy, false) => "Not enough money to buy a toy.",
            };
            println!("{}", line);
        }
        TurnEvent::WorldEvent(kind) => {
            let line = match kind {
                EventKind::GotHungry => "Your pet got hungry.",
                EventKind::FeltSad => "Your pet is feeling sad.",
                EventKind::GotTired => "Your pet is tired.",
                EventKind::GotDirty => "Your pet got dirty.",
            };
            println!("{}", line);
        }
        TurnEvent::Aged(age) => println!("Age: {}", age),
        TurnEvent::Died => println!("Your pet has passed away. RIP."),
        TurnEvent::QuitRequested => println!("Goodbye!"),
    }
}

/// Read one trimmed line from stdin; EOF yields an empty string
fn read_line() -> String {
    let mut input = String::new();
    let _ = io::stdin().read_line(&mut input);
    input.trim().to_string()
}
