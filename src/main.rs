//! Headless demo driver
//!
//! Runs the simulation with a small autopilot and consumes the event stream
//! the way a rendering front end would. Pass a seed as the first argument to
//! replay a specific run; otherwise one is taken from the clock.

use ballot_dash::GameConfig;
use ballot_dash::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .map(|arg| arg.parse().expect("seed must be a u64"))
        .unwrap_or_else(seed_from_clock);

    let config = GameConfig::with_victory_threshold(10);
    let mut state = GameState::new(seed, config).expect("default tuning is valid");

    log::info!("Ballot Dash demo starting (seed {})", seed);
    state.start();

    const MAX_TICKS: u64 = 20_000;
    let mut victories = 0u32;
    let mut total_votes = 0u32;

    while state.phase != GamePhase::GameOver && state.time_ticks < MAX_TICKS {
        let input = autopilot(&state);
        for event in tick(&mut state, &input, 1.0) {
            match event {
                GameEvent::Scored { obstacle_id } => {
                    total_votes += 1;
                    log::debug!(
                        "Vote banked (obstacle {}), {} this segment",
                        obstacle_id,
                        state.score
                    );
                }
                GameEvent::Collision { obstacle_id } => {
                    log::info!("Struck by obstacle {}", obstacle_id);
                }
                GameEvent::Victory => {
                    victories += 1;
                    log::info!("Victory number {}!", victories);
                }
            }
        }
        if state.phase == GamePhase::Victory {
            state.continue_after_victory();
        }
    }

    let outcome = if state.phase == GamePhase::GameOver {
        "knocked out"
    } else {
        "still standing at the tick cap"
    };
    println!(
        "Seed {}: {} after {} ticks - {} vote(s), {} victory lap(s)",
        seed, outcome, state.time_ticks, total_votes, victories
    );

    if let Ok(json) = serde_json::to_string(&state) {
        log::debug!("Final state: {}", json);
    }
}

/// Pick an input for this tick: sidestep the deepest threatening obstacle,
/// otherwise drift back toward the middle of the field.
fn autopilot(state: &GameState) -> TickInput {
    let config = state.config();
    let player_left = state.player_x;
    let player_right = state.player_x + config.player_width;

    // The deepest obstacle whose columns come near ours is the one to dodge
    let cushion = 12.0;
    let threat = state
        .obstacles
        .iter()
        .filter(|o| {
            o.pos.y < config.field_height
                && o.right() > player_left - cushion
                && o.pos.x < player_right + cushion
        })
        .max_by(|a, b| {
            a.pos
                .y
                .partial_cmp(&b.pos.y)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    if let Some(threat) = threat {
        // Step away from the obstacle's centre line
        let obstacle_mid = threat.pos.x + threat.size.x / 2.0;
        let player_mid = player_left + config.player_width / 2.0;
        if player_mid <= obstacle_mid {
            TickInput {
                move_left: true,
                move_right: false,
            }
        } else {
            TickInput {
                move_left: false,
                move_right: true,
            }
        }
    } else {
        // Nothing incoming: recentre for the widest escape options
        let home = (config.field_width - config.player_width) / 2.0;
        if (state.player_x - home).abs() <= config.player_speed {
            TickInput::default()
        } else if state.player_x > home {
            TickInput {
                move_left: true,
                move_right: false,
            }
        } else {
            TickInput {
                move_left: false,
                move_right: true,
            }
        }
    }
}

fn seed_from_clock() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
