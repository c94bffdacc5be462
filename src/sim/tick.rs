//! Per-frame simulation update
//!
//! Advances the game by a caller-supplied time delta. Order within a tick:
//! paddle, ball (with wall bounces), bottom check, bricks, paddle collision.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bricks::process_brick_collisions;
use super::paddle_collision::resolve_paddle_collision;
use super::rect::Rect;
use super::state::{Ball, GameEvent, GamePhase, GameState, Paddle};
use crate::clamp_range;
use crate::highscores::HighScore;
use crate::persistence::HighScoreStore;

/// Desired paddle direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaddleIntent {
    Left,
    Right,
    #[default]
    Stop,
}

impl PaddleIntent {
    pub fn sign(self) -> f32 {
        match self {
            PaddleIntent::Left => -1.0,
            PaddleIntent::Right => 1.0,
            PaddleIntent::Stop => 0.0,
        }
    }
}

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Held paddle direction
    pub paddle: PaddleIntent,
    /// Start/restart (space/enter), honoured on the menu and after game over
    pub start: bool,
}

/// Result of moving the ball for one step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct BallStep {
    bounced: bool,
    hit_bottom: bool,
}

/// Advance the game state by `dt` seconds
pub fn tick<S: HighScoreStore + ?Sized>(
    state: &mut GameState,
    input: &TickInput,
    dt: f32,
    store: &mut S,
) {
    if state.phase.accepts_start() {
        if input.start {
            state.reset();
        }
        return;
    }

    let playfield = state.playfield();

    state.paddle.vel = input.paddle.sign() * state.paddle.max_speed;
    integrate_paddle(&mut state.paddle, &playfield, dt);

    let step = integrate_ball(&mut state.ball, &playfield, dt);
    if step.bounced {
        state.events.push(GameEvent::WallBounce);
    }
    if step.hit_bottom {
        end_round(state, false, store);
        return;
    }

    let outcome = process_brick_collisions(
        &mut state.ball,
        &mut state.bricks,
        playfield.width(),
        &mut state.score,
    );
    state.events.extend(
        outcome
            .broken
            .iter()
            .map(|&(row, col)| GameEvent::BrickBroken { row, col }),
    );
    if outcome.cleared {
        end_round(state, true, store);
        return;
    }

    if resolve_paddle_collision(&mut state.ball, &state.paddle) {
        state.events.push(GameEvent::PaddleHit);
    }
}

/// Move the paddle horizontally, keeping it inside the playfield
fn integrate_paddle(paddle: &mut Paddle, playfield: &Rect, dt: f32) {
    if paddle.vel == 0.0 {
        return;
    }
    let max_x = playfield.right() - paddle.rect.width();
    paddle.rect.pos.x = clamp_range(paddle.rect.pos.x + paddle.vel * dt, playfield.left(), max_x);
}

/// Move the ball on each axis independently. Leaving through the left, right
/// or top edge clamps the position and turns the velocity back inward.
fn integrate_ball(ball: &mut Ball, playfield: &Rect, dt: f32) -> BallStep {
    let mut step = BallStep::default();
    let max = Vec2::new(
        playfield.right() - ball.rect.width(),
        playfield.bottom() - ball.rect.height(),
    );
    let pos = &mut ball.rect.pos;

    pos.x += ball.vel.x * dt;
    if pos.x < playfield.left() {
        pos.x = playfield.left();
        ball.vel.x = ball.vel.x.abs();
        step.bounced = true;
    } else if pos.x > max.x {
        pos.x = max.x;
        ball.vel.x = -ball.vel.x.abs();
        step.bounced = true;
    }

    pos.y += ball.vel.y * dt;
    if pos.y < playfield.top() {
        pos.y = playfield.top();
        ball.vel.y = ball.vel.y.abs();
        step.bounced = true;
    } else if pos.y >= max.y {
        pos.y = max.y;
        step.hit_bottom = true;
    }

    step
}

/// Enter the terminal phase and offer the score to the high score store
fn end_round<S: HighScoreStore + ?Sized>(state: &mut GameState, won: bool, store: &mut S) {
    state.phase = GamePhase::GameOver { won };

    let mut high = HighScore {
        best: state.high_score,
    };
    if high.submit(store, state.score) {
        state.events.push(GameEvent::NewHighScore { score: state.score });
    }
    state.high_score = high.best;

    state.events.push(GameEvent::GameOver {
        won,
        score: state.score,
    });
    if won {
        log::info!("Field cleared! Final score {}", state.score);
    } else {
        log::info!("Ball lost. Final score {}", state.score);
    }
}
