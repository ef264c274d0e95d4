//! Economy - the pet's coin wallet and the shop's priced purchases

use crate::core::config::SimConfig;
use crate::pet::attribute::BoundedAttribute;

/// Items on offer in the shop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseKind {
    Food,
    Medicine,
    Toy,
}

impl PurchaseKind {
    /// Shop price for this item
    pub fn price(&self, config: &SimConfig) -> i64 {
        match self {
            PurchaseKind::Food => config.food_price,
            PurchaseKind::Medicine => config.medicine_price,
            PurchaseKind::Toy => config.toy_price,
        }
    }
}

/// A coin balance with an all-or-nothing spend guard
///
/// `spend` is the only thing standing between the balance and zero; `earn`
/// is unguarded. Purchases compose `spend` with a gauge boost and leave
/// everything untouched when the coins are not there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Economy {
    balance: i64,
}

impl Economy {
    pub fn new(starting_balance: i64) -> Self {
        Self {
            balance: starting_balance,
        }
    }

    /// Current funds
    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// Overwrite the balance (used when restoring a save)
    pub fn set_balance(&mut self, balance: i64) {
        self.balance = balance;
    }

    /// Add coins unconditionally
    pub fn earn(&mut self, amount: i64) {
        self.balance += amount;
    }

    /// Debit `amount` if affordable; returns false and changes nothing
    /// when funds are short. No partial spend.
    pub fn spend(&mut self, amount: i64) -> bool {
        if self.balance >= amount {
            self.balance -= amount;
            true
        } else {
            false
        }
    }

    /// Buy food: on success the hunger gauge is raised
    pub fn buy_food(&mut self, hunger: &mut BoundedAttribute, config: &SimConfig) -> bool {
        if self.spend(config.food_price) {
            hunger.raise(config.food_hunger_gain);
            true
        } else {
            false
        }
    }

    /// Buy medicine and apply it to the given gauge
    ///
    /// The name says health, but the caller decides which gauge gets the
    /// boost; the shop menu has always pointed this at cleanliness.
    pub fn buy_medicine(&mut self, target: &mut BoundedAttribute, config: &SimConfig) -> bool {
        if self.spend(config.medicine_price) {
            target.raise(config.medicine_gain);
            true
        } else {
            false
        }
    }

    /// Buy a toy: on success happiness is raised
    pub fn buy_toy(&mut self, happiness: &mut BoundedAttribute, config: &SimConfig) -> bool {
        if self.spend(config.toy_price) {
            happiness.raise(config.toy_happiness_gain);
            true
        } else {
            false
        }
    }
}
