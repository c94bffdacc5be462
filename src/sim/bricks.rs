//! Brick field: a dense grid of breakable bricks
//!
//! Only alive/broken flags are stored. Brick rectangles are derived on demand
//! from the grid position, the layout and the playfield width.

use serde::{Deserialize, Serialize};

use super::collision::resolve_collision;
use super::rect::Rect;
use super::state::Ball;
use crate::consts::*;

/// Grid shape and spacing of the brick field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrickLayout {
    pub rows: usize,
    pub columns: usize,
    /// Height of a single brick
    pub brick_height: f32,
    /// Gap between columns and between the outer columns and the walls
    pub horizontal_spacing: f32,
    /// Gap between rows
    pub vertical_spacing: f32,
    /// Y coordinate of the top edge of the first row
    pub top: f32,
}

impl Default for BrickLayout {
    fn default() -> Self {
        Self {
            rows: BRICK_ROWS,
            columns: BRICK_COLUMNS,
            brick_height: BRICK_HEIGHT,
            horizontal_spacing: BRICK_SPACING,
            vertical_spacing: BRICK_SPACING,
            top: BRICK_TOP,
        }
    }
}

impl BrickLayout {
    /// Width shared by every brick so that `columns` bricks and
    /// `columns + 1` gaps exactly span the playfield
    pub fn brick_width(&self, playfield_width: f32) -> f32 {
        let total_spacing = self.horizontal_spacing * (self.columns + 1) as f32;
        (playfield_width - total_spacing) / self.columns as f32
    }

    fn cell_rect(&self, row: usize, col: usize, brick_width: f32) -> Rect {
        let x = self.horizontal_spacing + col as f32 * (brick_width + self.horizontal_spacing);
        let y = self.top + row as f32 * (self.brick_height + self.vertical_spacing);
        Rect::new(x, y, brick_width, self.brick_height)
    }

    /// Rectangle of the brick at (`row`, `col`)
    pub fn brick_rect(&self, row: usize, col: usize, playfield_width: f32) -> Rect {
        self.cell_rect(row, col, self.brick_width(playfield_width))
    }
}

/// Alive/broken state for every cell of the grid (row-major)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrickField {
    pub layout: BrickLayout,
    alive: Vec<bool>,
}

impl BrickField {
    /// Create a field with every brick alive
    pub fn new(layout: BrickLayout) -> Self {
        Self {
            layout,
            alive: vec![true; layout.rows * layout.columns],
        }
    }

    /// Restore every brick
    pub fn reset(&mut self) {
        self.alive.fill(true);
    }

    /// Total number of bricks in a full field
    pub fn total(&self) -> usize {
        self.alive.len()
    }

    /// Bricks still standing
    pub fn remaining(&self) -> usize {
        self.alive.iter().filter(|&&a| a).count()
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.layout.columns + col
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        row < self.layout.rows
            && col < self.layout.columns
            && self.alive[self.index(row, col)]
    }

    /// Mark a brick broken. Returns false if it was already broken or out of range.
    pub fn break_brick(&mut self, row: usize, col: usize) -> bool {
        if !self.is_alive(row, col) {
            return false;
        }
        let idx = self.index(row, col);
        self.alive[idx] = false;
        true
    }

    /// Iterate over alive bricks as (row, col, rect)
    pub fn alive_bricks(&self, playfield_width: f32) -> impl Iterator<Item = (usize, usize, Rect)> + '_ {
        let brick_width = self.layout.brick_width(playfield_width);
        let columns = self.layout.columns;
        self.alive
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(move |(i, _)| {
                let (row, col) = (i / columns, i % columns);
                (row, col, self.layout.cell_rect(row, col, brick_width))
            })
    }
}

/// What a pass over the brick field did
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrickOutcome {
    /// Bricks broken in this pass, in row-major order
    pub broken: Vec<(usize, usize)>,
    /// The last brick fell during this pass
    pub cleared: bool,
}

/// Test the ball against every alive brick.
///
/// Each brick hit is broken, adds exactly 1 to `score` and multiplies the
/// ball's vertical speed by its growth factor. Several bricks can fall in one
/// pass. `cleared` is set when `score` reaches the field total on a hit made
/// in this pass.
pub fn process_brick_collisions(
    ball: &mut Ball,
    field: &mut BrickField,
    playfield_width: f32,
    score: &mut u64,
) -> BrickOutcome {
    let mut outcome = BrickOutcome::default();
    let layout = field.layout;
    let brick_width = layout.brick_width(playfield_width);
    let total = field.total() as u64;

    for row in 0..layout.rows {
        for col in 0..layout.columns {
            if !field.is_alive(row, col) {
                continue;
            }
            let rect = layout.cell_rect(row, col, brick_width);
            if resolve_collision(ball, &rect) {
                field.break_brick(row, col);
                *score += 1;
                ball.vel.y *= ball.speed_growth;
                outcome.broken.push((row, col));
                log::debug!("Brick ({}, {}) broken, score {}", row, col, score);

                if *score == total {
                    outcome.cleared = true;
                }
            }
        }
    }

    outcome
}
