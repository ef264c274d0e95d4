pub mod random_event;
pub mod turn;

pub use random_event::{trigger_event, EventKind};
pub use turn::{LifeState, PlayerAction, Simulation, StatusReport, TurnEvent};
