//! Numeric game tuning
//!
//! Every knob the simulation reads is collected here and fixed for the
//! lifetime of a `GameState`. Validation runs once at construction; after
//! that the tick loop trusts these values unconditionally.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts;

/// Rejected configuration values
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be finite and positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("bottom_margin must be finite and non-negative, got {0}")]
    NegativeMargin(f32),

    #[error("spawn_probability must be between 0 and 1, got {0}")]
    SpawnProbability(f64),

    #[error("obstacle speed band is inverted: min {min} > max {max}")]
    SpeedBand { min: f32, max: f32 },

    #[error("victory_threshold must be at least 1")]
    ZeroVictoryThreshold,

    #[error("{name} ({value}) does not fit inside the field ({limit})")]
    DoesNotFit {
        name: &'static str,
        value: f32,
        limit: f32,
    },
}

/// Game configuration, all numeric, fixed at construction
///
/// Defaults mirror `crate::consts`. Units are pixels and ticks: speeds are
/// pixels per tick, `spawn_probability` is an independent chance per tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Playfield size
    pub field_width: f32,
    pub field_height: f32,
    /// Player sprite size
    pub player_width: f32,
    pub player_height: f32,
    /// Horizontal player speed
    pub player_speed: f32,
    /// Obstacles are square, this is their edge length
    pub obstacle_size: f32,
    /// Chance of spawning one obstacle per tick
    pub spawn_probability: f64,
    /// Fall speed band, sampled uniformly per obstacle
    pub obstacle_speed_min: f32,
    pub obstacle_speed_max: f32,
    /// Votes needed for the victory interstitial; `None` disables it
    pub victory_threshold: Option<u32>,
    /// Gap between the collision band and the field's bottom edge
    pub bottom_margin: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: consts::FIELD_WIDTH,
            field_height: consts::FIELD_HEIGHT,
            player_width: consts::PLAYER_WIDTH,
            player_height: consts::PLAYER_HEIGHT,
            player_speed: consts::PLAYER_SPEED,
            obstacle_size: consts::OBSTACLE_SIZE,
            spawn_probability: consts::SPAWN_PROBABILITY,
            obstacle_speed_min: consts::OBSTACLE_SPEED_MIN,
            obstacle_speed_max: consts::OBSTACLE_SPEED_MAX,
            victory_threshold: None,
            bottom_margin: consts::BOTTOM_MARGIN,
        }
    }
}

impl GameConfig {
    /// Default config with a victory threshold (the "votes" variant)
    pub fn with_victory_threshold(threshold: u32) -> Self {
        Self {
            victory_threshold: Some(threshold),
            ..Self::default()
        }
    }

    /// Check every field once, before the simulation starts trusting them.
    ///
    /// The strict-positive and fits-inside-the-field checks double as panic
    /// guards: they keep the tick loop's clamp bounds ordered and its RNG
    /// sample ranges non-empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("player_speed", self.player_speed),
            ("obstacle_size", self.obstacle_size),
            ("obstacle_speed_min", self.obstacle_speed_min),
            ("obstacle_speed_max", self.obstacle_speed_max),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        if !self.bottom_margin.is_finite() || self.bottom_margin < 0.0 {
            return Err(ConfigError::NegativeMargin(self.bottom_margin));
        }

        // NaN fails the contains check as well
        if !(0.0..=1.0).contains(&self.spawn_probability) {
            return Err(ConfigError::SpawnProbability(self.spawn_probability));
        }

        if self.obstacle_speed_min > self.obstacle_speed_max {
            return Err(ConfigError::SpeedBand {
                min: self.obstacle_speed_min,
                max: self.obstacle_speed_max,
            });
        }

        if self.victory_threshold == Some(0) {
            return Err(ConfigError::ZeroVictoryThreshold);
        }

        if self.player_width > self.field_width {
            return Err(ConfigError::DoesNotFit {
                name: "player_width",
                value: self.player_width,
                limit: self.field_width,
            });
        }
        if self.obstacle_size > self.field_width {
            return Err(ConfigError::DoesNotFit {
                name: "obstacle_size",
                value: self.obstacle_size,
                limit: self.field_width,
            });
        }
        // The collision band must sit inside the field
        if self.player_height + self.bottom_margin > self.field_height {
            return Err(ConfigError::DoesNotFit {
                name: "player_height + bottom_margin",
                value: self.player_height + self.bottom_margin,
                limit: self.field_height,
            });
        }

        Ok(())
    }
}
