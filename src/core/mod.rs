pub mod config;
pub mod error;

pub use config::SimConfig;
pub use error::{PetError, Result};
