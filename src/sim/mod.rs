//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::CollisionBand;
pub use state::{GameEvent, GamePhase, GameState, MAX_OBSTACLES, Obstacle};
pub use tick::{TickInput, tick};
