//! Game state and core simulation types
//!
//! All state that must be persisted for snapshots/determinism lives here,
//! including the RNG. Phase transitions requested by the driver (`start`,
//! `reset`, `continue_after_victory`) also live here; the per-tick update
//! is in [`super::tick`].

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, GameConfig};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Menu/attract screen, nothing moves
    Idle,
    /// Active gameplay
    Playing,
    /// Round lost, waiting for a restart or a reset to the menu
    GameOver,
    /// Victory interstitial, waiting for the player to continue
    Victory,
}

/// A falling obstacle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    /// Fall speed (pixels per tick)
    pub speed: f32,
    /// Width and height
    pub size: Vec2,
}

impl Obstacle {
    /// Right edge x coordinate
    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Bottom edge y coordinate
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// Hard cap on live obstacles, a guard against runaway spawn configs
pub const MAX_OBSTACLES: usize = 128;

/// Discrete things that happened during a tick
///
/// Drivers consume these for side effects (sounds, popups); drawing reads
/// the state snapshot instead. Obstacle ids refer to entities that were
/// removed this tick, so effects can be anchored to the right sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// An obstacle hit the player; the round is over
    Collision { obstacle_id: u32 },
    /// An obstacle cleared the bottom edge; one vote banked
    Scored { obstacle_id: u32 },
    /// The vote threshold was reached
    Victory,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG; all spawn randomness flows through here
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Left edge of the player sprite
    pub player_x: f32,
    /// Live obstacles, in spawn order
    pub obstacles: Vec<Obstacle>,
    /// Votes banked this run segment
    pub score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Set once the victory threshold fires, cleared on entering Playing
    pub(crate) victory_announced: bool,
    /// Next entity ID
    next_id: u32,
    /// Fixed tuning, validated at construction
    config: GameConfig,
}

impl GameState {
    /// Create a new game state with the given seed and tuning
    ///
    /// The state starts in [`GamePhase::Idle`]; call [`GameState::start`]
    /// to begin a round.
    pub fn new(seed: u64, config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Idle,
            player_x: default_player_x(&config),
            obstacles: Vec::new(),
            score: 0,
            time_ticks: 0,
            victory_announced: false,
            next_id: 1,
            config,
        })
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Fixed tuning for this run
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Begin a round, from the menu or straight after a loss
    ///
    /// Ignored in any other phase.
    pub fn start(&mut self) {
        match self.phase {
            GamePhase::Idle | GamePhase::GameOver => {
                self.enter_playing();
                log::info!("Round started (seed {})", self.seed);
            }
            _ => log::debug!("start ignored in {:?}", self.phase),
        }
    }

    /// Resume play after the victory interstitial
    ///
    /// The vote count restarts from zero. Ignored outside
    /// [`GamePhase::Victory`].
    pub fn continue_after_victory(&mut self) {
        match self.phase {
            GamePhase::Victory => {
                self.enter_playing();
                log::info!("Continuing past victory");
            }
            _ => log::debug!("continue_after_victory ignored in {:?}", self.phase),
        }
    }

    /// Return to the menu; call [`GameState::start`] to play again
    ///
    /// Idempotent. Ignored mid-round and during the victory interstitial.
    pub fn reset(&mut self) {
        match self.phase {
            GamePhase::GameOver | GamePhase::Idle => {
                self.clear_round();
                self.phase = GamePhase::Idle;
            }
            _ => log::debug!("reset ignored in {:?}", self.phase),
        }
    }

    fn enter_playing(&mut self) {
        self.clear_round();
        self.phase = GamePhase::Playing;
    }

    fn clear_round(&mut self) {
        self.score = 0;
        self.obstacles.clear();
        self.player_x = default_player_x(&self.config);
        self.victory_announced = false;
    }
}

/// Starting player position: field centre, kept inside the right bound
fn default_player_x(config: &GameConfig) -> f32 {
    (config.field_width / 2.0).min(config.field_width - config.player_width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_idle_and_centred() {
        let state = GameState::new(42, GameConfig::default()).unwrap();
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.player_x, 250.0);
        assert_eq!(state.score, 0);
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let config = GameConfig {
            spawn_probability: 2.0,
            ..Default::default()
        };
        assert!(GameState::new(42, config).is_err());
    }

    #[test]
    fn test_default_position_clamped_for_wide_player() {
        let config = GameConfig {
            field_width: 100.0,
            player_width: 90.0,
            obstacle_size: 50.0,
            ..Default::default()
        };
        let state = GameState::new(1, config).unwrap();
        // Centre (50) would poke past the right bound (100 - 90 = 10)
        assert_eq!(state.player_x, 10.0);
    }

    #[test]
    fn test_start_from_idle_and_game_over() {
        let mut state = GameState::new(42, GameConfig::default()).unwrap();
        state.start();
        assert_eq!(state.phase, GamePhase::Playing);

        state.phase = GamePhase::GameOver;
        state.score = 7;
        state.start();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_start_ignored_while_playing() {
        let mut state = GameState::new(42, GameConfig::default()).unwrap();
        state.start();
        state.score = 3;
        state.player_x = 100.0;

        state.start();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 3);
        assert_eq!(state.player_x, 100.0);
    }

    #[test]
    fn test_start_clears_leftover_round() {
        let mut state = GameState::new(42, GameConfig::default()).unwrap();
        state.start();
        let id = state.next_entity_id();
        state.obstacles.push(Obstacle {
            id,
            pos: Vec2::new(10.0, 10.0),
            speed: 4.0,
            size: Vec2::splat(50.0),
        });
        state.score = 5;
        state.player_x = 0.0;
        state.phase = GamePhase::GameOver;

        state.start();
        assert!(state.obstacles.is_empty());
        assert_eq!(state.score, 0);
        assert_eq!(state.player_x, 250.0);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut state = GameState::new(42, GameConfig::default()).unwrap();
        state.start();
        state.phase = GamePhase::GameOver;
        state.score = 9;

        state.reset();
        let once = state.clone();
        state.reset();

        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.phase, once.phase);
        assert_eq!(state.score, once.score);
        assert_eq!(state.player_x, once.player_x);
        assert_eq!(state.obstacles.len(), once.obstacles.len());
    }

    #[test]
    fn test_reset_ignored_mid_round() {
        let mut state = GameState::new(42, GameConfig::default()).unwrap();
        state.start();
        state.score = 4;
        state.reset();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 4);
    }

    #[test]
    fn test_continue_only_from_victory() {
        let mut state = GameState::new(42, GameConfig::with_victory_threshold(10)).unwrap();
        state.continue_after_victory();
        assert_eq!(state.phase, GamePhase::Idle);

        state.phase = GamePhase::Victory;
        state.score = 10;
        state.victory_announced = true;
        state.continue_after_victory();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert!(!state.victory_announced);
    }

    #[test]
    fn test_entity_ids_are_monotonic() {
        let mut state = GameState::new(42, GameConfig::default()).unwrap();
        let a = state.next_entity_id();
        let b = state.next_entity_id();
        assert!(b > a);
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut state = GameState::new(42, GameConfig::with_victory_threshold(10)).unwrap();
        state.start();
        let id = state.next_entity_id();
        state.obstacles.push(Obstacle {
            id,
            pos: Vec2::new(120.0, 300.0),
            speed: 3.5,
            size: Vec2::splat(50.0),
        });
        state.score = 2;

        let json = serde_json::to_string(&state).unwrap();
        let restored: GameState = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.phase, state.phase);
        assert_eq!(restored.seed, state.seed);
        assert_eq!(restored.score, state.score);
        assert_eq!(restored.player_x, state.player_x);
        assert_eq!(restored.obstacles.len(), 1);
        assert_eq!(restored.obstacles[0].pos, state.obstacles[0].pos);
        assert_eq!(restored.config(), state.config());
    }
}
