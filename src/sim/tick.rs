//! Per-tick simulation update
//!
//! Core game loop that advances the simulation deterministically and
//! reports what happened as a list of events.

use glam::Vec2;
use rand::Rng;

use super::collision::{CollisionBand, hits_player, past_bottom};
use super::state::{GameEvent, GamePhase, GameState, MAX_OBSTACLES, Obstacle};
use crate::config::GameConfig;

/// Input snapshot for a single tick (deterministic)
///
/// These are "key currently held" levels sampled by the driver once per
/// frame, not press events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
}

/// Advance the game state by one tick
///
/// `dt` is measured in ticks: 1.0 is one nominal step and displacement
/// scales linearly with it. The spawn roll happens once per call regardless
/// of `dt`. Outside [`GamePhase::Playing`] the call does nothing and
/// returns no events.
///
/// Update order within a tick: player movement (left first, then right,
/// each clamped to the field), obstacle fall, collision against the
/// pre-movement player position, scoring of obstacles past the bottom edge,
/// the spawn roll, then the victory check. The first collision ends the
/// tick on the spot: nothing later in the order runs, and the remaining
/// obstacles keep their advanced positions.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase != GamePhase::Playing {
        return events;
    }

    state.time_ticks += 1;
    let config = *state.config();

    // Collision is judged where the player stood when the frame began
    let prev_x = state.player_x;

    let step = config.player_speed * dt;
    let max_x = config.field_width - config.player_width;
    let mut x = state.player_x;
    if input.move_left {
        x = (x - step).max(0.0);
    }
    if input.move_right {
        // Applied to the result of the left step, so holding both keys
        // cancels out except against the left wall
        x = (x + step).min(max_x);
    }
    state.player_x = x;

    for obstacle in &mut state.obstacles {
        obstacle.pos.y += obstacle.speed * dt;
    }

    let band = CollisionBand::from_config(&config);
    let hit = state
        .obstacles
        .iter()
        .position(|o| hits_player(o, &band, prev_x, config.player_width));
    if let Some(index) = hit {
        let obstacle = state.obstacles.remove(index);
        state.phase = GamePhase::GameOver;
        log::info!(
            "Obstacle {} hit the player, round over with {} votes",
            obstacle.id,
            state.score
        );
        events.push(GameEvent::Collision {
            obstacle_id: obstacle.id,
        });
        return events;
    }

    let field_height = config.field_height;
    state.obstacles.retain(|o| {
        if past_bottom(o, field_height) {
            events.push(GameEvent::Scored { obstacle_id: o.id });
            false
        } else {
            true
        }
    });
    // Every event so far is a Scored
    state.score += events.len() as u32;

    if state.obstacles.len() < MAX_OBSTACLES && state.rng.random_bool(config.spawn_probability) {
        spawn_obstacle(state, &config);
    }

    if let Some(threshold) = config.victory_threshold {
        if !state.victory_announced && state.score >= threshold {
            state.victory_announced = true;
            state.phase = GamePhase::Victory;
            log::info!("Victory threshold {} reached", threshold);
            events.push(GameEvent::Victory);
        }
    }

    events
}

/// Create one obstacle just above the top edge, at a random column and a
/// random fall speed
fn spawn_obstacle(state: &mut GameState, config: &GameConfig) {
    let id = state.next_entity_id();
    let max_x = config.field_width - config.obstacle_size;
    let x = state.rng.random_range(0.0..=max_x);
    let speed = state
        .rng
        .random_range(config.obstacle_speed_min..=config.obstacle_speed_max);
    state.obstacles.push(Obstacle {
        id,
        pos: Vec2::new(x, -config.obstacle_size),
        speed,
        size: Vec2::splat(config.obstacle_size),
    });
}
