//! Ballot Dash - a single-screen election-night dodge game
//!
//! Steer the ballot along the bottom of the field, dodge the falling
//! obstacles, bank a vote for every one that sails past. This crate is the
//! simulation core only: it consumes an input snapshot once per tick and
//! produces a readable state plus discrete events. Rendering, key capture
//! and audio live in whatever front end drives it.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, spawning, collisions, phases)
//! - `config`: Numeric game tuning, validated at construction

pub mod config;
pub mod sim;

pub use config::{ConfigError, GameConfig};

/// Default game tuning constants
pub mod consts {
    /// Playfield dimensions (pixels)
    pub const FIELD_WIDTH: f32 = 500.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Player sprite dimensions
    pub const PLAYER_WIDTH: f32 = 60.0;
    pub const PLAYER_HEIGHT: f32 = 80.0;
    /// Horizontal player speed (pixels per tick)
    pub const PLAYER_SPEED: f32 = 8.0;

    /// Obstacles are square
    pub const OBSTACLE_SIZE: f32 = 50.0;
    /// Chance of spawning an obstacle on any given tick
    pub const SPAWN_PROBABILITY: f64 = 0.02;
    /// Fall speed band (pixels per tick)
    pub const OBSTACLE_SPEED_MIN: f32 = 3.0;
    pub const OBSTACLE_SPEED_MAX: f32 = 5.0;

    /// Gap between the collision band and the field's bottom edge
    pub const BOTTOM_MARGIN: f32 = 10.0;
}
