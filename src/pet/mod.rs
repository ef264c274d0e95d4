//! The pet aggregate - identity, gauges, age and wallet in one place

pub mod age;
pub mod attribute;

pub use age::Age;
pub use attribute::{AttributeKind, BoundedAttribute};

use crate::core::config::SimConfig;
use crate::economy::Economy;
use crate::persistence::PetRecord;

/// Everything the simulation knows about one pet
///
/// Sole owner of the attribute gauges; the turn orchestrator and the shop
/// reach into them through `&mut` borrows that never outlive a single
/// action. Health is carried and displayed nowhere: it takes no part in the
/// death check or the turn cycle, it just rides along.
#[derive(Debug, Clone)]
pub struct Pet {
    pub name: String,
    pub hunger: BoundedAttribute,
    pub happiness: BoundedAttribute,
    pub energy: BoundedAttribute,
    pub cleanliness: BoundedAttribute,
    pub health: BoundedAttribute,
    pub age: Age,
    pub wallet: Economy,
}

impl Pet {
    /// A fresh pet with every gauge at the configured initial value
    pub fn new(name: impl Into<String>, config: &SimConfig) -> Self {
        let gauge =
            || BoundedAttribute::new(config.attribute_initial, config.attribute_min, config.attribute_max);
        Self {
            name: name.into(),
            hunger: gauge(),
            happiness: gauge(),
            energy: gauge(),
            cleanliness: gauge(),
            health: gauge(),
            age: Age::new(),
            wallet: Economy::new(config.starting_balance),
        }
    }

    /// The death check
    ///
    /// The pet lives while all four gameplay gauges are above zero. Health
    /// is deliberately not consulted.
    pub fn is_alive(&self) -> bool {
        self.hunger.get() > 0
            && self.happiness.get() > 0
            && self.energy.get() > 0
            && self.cleanliness.get() > 0
    }

    /// Snapshot for the save file
    ///
    /// Health is not persisted; the save schema predates it and stays
    /// fixed at seven fields.
    pub fn to_record(&self) -> PetRecord {
        PetRecord {
            name: self.name.clone(),
            hunger: self.hunger.get(),
            happiness: self.happiness.get(),
            energy: self.energy.get(),
            cleanliness: self.cleanliness.get(),
            age: self.age.get(),
            money: self.wallet.balance(),
        }
    }

    /// Overwrite this pet with a loaded record
    ///
    /// Values are clamped through the gauges, so an edited save cannot
    /// break the attribute invariant.
    pub fn restore(&mut self, record: PetRecord) {
        self.name = record.name;
        self.hunger.set(record.hunger);
        self.happiness.set(record.happiness);
        self.energy.set(record.energy);
        self.cleanliness.set(record.cleanliness);
        self.age = Age::at(record.age);
        self.wallet.set_balance(record.money);
    }
}
