//! Game state and core simulation types
//!
//! Everything the frame update mutates lives in `GameState`, owned by a single
//! driver. Renderers only read it.

use glam::Vec2;
use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bricks::BrickField;
use super::rect::Rect;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the start key
    Menu,
    /// Active gameplay
    Playing,
    /// Round ended: ball lost (`won == false`) or every brick broken
    GameOver { won: bool },
}

impl GamePhase {
    /// Phases in which the start key begins a new round
    pub fn accepts_start(&self) -> bool {
        matches!(self, GamePhase::Menu | GamePhase::GameOver { .. })
    }
}

/// The ball: a square box with a velocity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub rect: Rect,
    /// Pixels per second
    pub vel: Vec2,
    /// Bound on the horizontal speed after paddle spin
    pub max_speed: f32,
    /// Vertical speed multiplier per brick hit
    pub speed_growth: f32,
}

impl Ball {
    pub fn new(size: Vec2, max_speed: f32, speed_growth: f32) -> Self {
        Self {
            rect: Rect {
                pos: Vec2::ZERO,
                size,
            },
            vel: Vec2::ZERO,
            max_speed,
            speed_growth,
        }
    }
}

/// The player's paddle (horizontal movement only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
    /// Horizontal velocity, pixels per second
    pub vel: f32,
    pub max_speed: f32,
    /// Fraction of the ball's max speed added as spin when moving
    pub spin: f32,
}

impl Paddle {
    pub fn new(size: Vec2, max_speed: f32) -> Self {
        Self {
            rect: Rect {
                pos: Vec2::ZERO,
                size,
            },
            vel: 0.0,
            max_speed,
            spin: PADDLE_SPIN,
        }
    }
}

/// Something that happened during a tick, for HUD/logging consumers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A new round began
    Started,
    BrickBroken { row: usize, col: usize },
    /// Ball bounced off the left, right or top wall
    WallBounce,
    PaddleHit,
    GameOver { won: bool, score: u64 },
    /// Stored high score was beaten
    NewHighScore { score: u64 },
}

/// RNG state wrapper for serialization
///
/// The generator is rebuilt from the seed and advanced past previous draws,
/// so a restored state continues the same sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub draws: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, draws: 0 }
    }

    pub fn to_rng(&self) -> Pcg32 {
        let mut rng = Pcg32::seed_from_u64(self.seed);
        rng.advance(self.draws);
        rng
    }

    /// Uniformly pick -1.0 or +1.0
    pub fn next_sign(&mut self) -> f32 {
        let bits = self.to_rng().next_u32();
        self.draws += 1;
        if bits >> 31 == 0 { -1.0 } else { 1.0 }
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Geometry and balance this session was built from
    pub tuning: Tuning,
    pub phase: GamePhase,
    /// Bricks broken this round
    pub score: u64,
    /// Last known stored high score (mirrors the external store)
    pub high_score: u64,
    pub paddle: Paddle,
    pub ball: Ball,
    pub bricks: BrickField,
    pub rng_state: RngState,
    /// Events since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session sitting on the menu
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        let mut paddle = Paddle::new(tuning.paddle_size, tuning.paddle_max_speed);
        paddle.spin = tuning.paddle_spin;

        let mut state = Self {
            phase: GamePhase::Menu,
            score: 0,
            high_score: 0,
            paddle,
            ball: Ball::new(tuning.ball_size, tuning.ball_max_speed, tuning.ball_speed_growth),
            bricks: BrickField::new(tuning.bricks),
            rng_state: RngState::new(seed),
            events: Vec::new(),
            tuning,
        };
        state.place_paddle_and_ball();
        state
    }

    /// Playfield bounds, origin at the top-left
    pub fn playfield(&self) -> Rect {
        Rect {
            pos: Vec2::ZERO,
            size: self.tuning.playfield,
        }
    }

    /// Number of bricks in a full field (the winning score)
    pub fn total_bricks(&self) -> u64 {
        self.bricks.total() as u64
    }

    /// Start a new round: empty score, full field, centred paddle and a ball
    /// launched upward toward a random side
    pub fn reset(&mut self) {
        self.score = 0;
        self.bricks.reset();
        self.place_paddle_and_ball();

        let speed = self.tuning.ball_launch_speed;
        let sign = self.rng_state.next_sign();
        self.ball.vel = Vec2::new(sign * speed, -speed);

        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::Started);
        log::info!(
            "Round started: {} bricks, launch velocity ({}, {})",
            self.bricks.total(),
            self.ball.vel.x,
            self.ball.vel.y
        );
    }

    /// Centre the paddle near the bottom and rest the ball on top of it
    fn place_paddle_and_ball(&mut self) {
        let field = self.tuning.playfield;
        let paddle = &mut self.paddle;
        paddle.vel = 0.0;
        paddle.rect.pos = Vec2::new(
            (field.x - paddle.rect.width()) / 2.0,
            field.y - self.tuning.paddle_bottom_offset,
        );

        let ball_size = self.ball.rect.size;
        self.ball.rect.pos = Vec2::new(
            paddle.rect.center().x - ball_size.x / 2.0,
            paddle.rect.top() - ball_size.y,
        );
        self.ball.vel = Vec2::ZERO;
    }

    /// Take all events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_on_menu() {
        let state = GameState::new(Tuning::default(), 1);
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.score, 0);
        assert_eq!(state.bricks.remaining(), 50);
        assert_eq!(state.ball.vel, Vec2::ZERO);
        // Paddle centred, 50px above the bottom
        assert_eq!(state.paddle.rect.pos, Vec2::new(375.0, 550.0));
    }

    #[test]
    fn test_reset_after_game_over() {
        let mut state = GameState::new(Tuning::default(), 7);
        state.reset();
        state.score = 7;
        state.bricks.break_brick(0, 0);
        state.bricks.break_brick(1, 4);
        state.bricks.break_brick(4, 9);
        state.ball.rect.pos = Vec2::new(12.0, 590.0);
        state.paddle.rect.pos.x = 3.0;
        state.phase = GamePhase::GameOver { won: false };

        state.reset();

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.bricks.remaining(), state.bricks.total());

        let paddle_center = state.paddle.rect.center();
        assert_eq!(paddle_center.x, 400.0);
        assert_eq!(state.ball.rect.pos.x, paddle_center.x - 10.0);
        assert_eq!(state.ball.rect.bottom(), state.paddle.rect.top());

        assert!(state.ball.vel.y < 0.0);
        assert_eq!(state.ball.vel.y, -BALL_LAUNCH_SPEED);
        assert_eq!(state.ball.vel.x.abs(), BALL_LAUNCH_SPEED);
    }

    #[test]
    fn test_launch_direction_varies_and_is_reproducible() {
        let signs = |seed| {
            let mut rng = RngState::new(seed);
            (0..64).map(|_| rng.next_sign()).collect::<Vec<_>>()
        };
        let a = signs(42);
        assert_eq!(a, signs(42));
        assert!(a.contains(&1.0));
        assert!(a.contains(&-1.0));
    }

    #[test]
    fn test_rng_state_resumes_sequence() {
        let mut rng = RngState::new(99);
        rng.next_sign();
        rng.next_sign();
        let mut restored = rng.clone();
        assert_eq!(rng.next_sign(), restored.next_sign());
        assert_eq!(restored.draws, 3);
    }

    #[test]
    fn test_state_roundtrips_through_json() {
        let mut state = GameState::new(Tuning::default(), 5);
        state.reset();
        state.bricks.break_brick(2, 2);
        state.score = 1;

        let json = serde_json::to_string(&state).unwrap();
        let restored: GameState = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.phase, GamePhase::Playing);
        assert_eq!(restored.bricks, state.bricks);
        assert_eq!(restored.ball.vel, state.ball.vel);
        assert_eq!(restored.rng_state, state.rng_state);
        assert!(restored.events.is_empty());
    }

    #[test]
    fn test_drain_events() {
        let mut state = GameState::new(Tuning::default(), 5);
        state.reset();
        assert_eq!(state.drain_events(), vec![GameEvent::Started]);
        assert!(state.drain_events().is_empty());
    }
}
