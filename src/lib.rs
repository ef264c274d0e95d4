//! Pocketpet - turn-based virtual pet simulation
//!
//! The library holds the whole simulation core: bounded attributes, the coin
//! economy, mini-games, per-turn random events, the turn orchestrator, and
//! the save-file format. The binary in `main.rs` is only the menu layer on
//! top of it.

pub mod core;
pub mod economy;
pub mod minigame;
pub mod persistence;
pub mod pet;
pub mod simulation;
