//! Player/obstacle overlap tests
//!
//! The player only ever occupies a fixed band near the bottom of the field,
//! so a hit is a horizontal AABB check gated on the obstacle reaching that
//! band. Every comparison is strict: sprites that merely touch edges do not
//! collide.

use super::state::Obstacle;
use crate::config::GameConfig;

/// The vertical window the player occupies
///
/// Spans `field_height - player_height - margin` to `field_height - margin`.
/// Obstacles above it are still falling; obstacles below it have already
/// slipped past the player.
#[derive(Debug, Clone, Copy)]
pub struct CollisionBand {
    pub top: f32,
    pub bottom: f32,
}

impl CollisionBand {
    pub fn from_config(config: &GameConfig) -> Self {
        let bottom = config.field_height - config.bottom_margin;
        Self {
            top: bottom - config.player_height,
            bottom,
        }
    }

    /// Whether the obstacle's vertical span overlaps the band
    #[inline]
    pub fn contains(&self, obstacle: &Obstacle) -> bool {
        obstacle.bottom() > self.top && obstacle.pos.y < self.bottom
    }
}

/// Whether the obstacle's columns overlap the player's
#[inline]
pub fn overlaps_player(obstacle: &Obstacle, player_x: f32, player_width: f32) -> bool {
    obstacle.right() > player_x && obstacle.pos.x < player_x + player_width
}

/// Obstacle hits the player: inside the band and horizontally overlapping
#[inline]
pub fn hits_player(
    obstacle: &Obstacle,
    band: &CollisionBand,
    player_x: f32,
    player_width: f32,
) -> bool {
    band.contains(obstacle) && overlaps_player(obstacle, player_x, player_width)
}

/// Obstacle has fallen entirely past the bottom edge of the field
#[inline]
pub fn past_bottom(obstacle: &Obstacle, field_height: f32) -> bool {
    obstacle.pos.y > field_height
}
