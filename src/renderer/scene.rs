//! Render snapshot
//!
//! Everything a renderer or HUD needs for one frame, read from `GameState`
//! after the update. Building it never mutates the game.

use glam::Vec2;

use super::vertex::colors;
use crate::sim::{GamePhase, GameState, Rect};

/// A filled rectangle in playfield coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColoredRect {
    pub rect: Rect,
    pub color: [f32; 4],
}

/// One frame's worth of drawable state, back to front
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub playfield: Vec2,
    pub rects: Vec<ColoredRect>,
    pub phase: GamePhase,
    pub score: u64,
    pub high_score: u64,
    pub total_bricks: u64,
}

impl Scene {
    pub fn from_state(state: &GameState) -> Self {
        let playfield = state.playfield();
        let mut rects = Vec::with_capacity(state.bricks.remaining() + 3);

        rects.push(ColoredRect {
            rect: playfield,
            color: colors::BACKGROUND,
        });
        rects.extend(
            state
                .bricks
                .alive_bricks(playfield.width())
                .map(|(row, _, rect)| ColoredRect {
                    rect,
                    color: colors::brick_row(row),
                }),
        );
        rects.push(ColoredRect {
            rect: state.paddle.rect,
            color: colors::PADDLE,
        });
        rects.push(ColoredRect {
            rect: state.ball.rect,
            color: colors::BALL,
        });

        Self {
            playfield: playfield.size,
            rects,
            phase: state.phase,
            score: state.score,
            high_score: state.high_score,
            total_bricks: state.total_bricks(),
        }
    }

    /// Game over with every brick broken
    pub fn won(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver { won: true })
    }

    /// Overlay message for the current phase, if any
    pub fn status_text(&self) -> Option<String> {
        match self.phase {
            GamePhase::Menu => Some("Press Space to start".to_string()),
            GamePhase::Playing => None,
            GamePhase::GameOver { won: true } => Some(format!(
                "You win! Score {} - press Space to play again",
                self.score
            )),
            GamePhase::GameOver { won: false } => Some(format!(
                "Game over. Score {} - press Space to play again",
                self.score
            )),
        }
    }
}
