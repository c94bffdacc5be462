//! Ball vs paddle collision
//!
//! The paddle always sends the ball upward, whatever side it was touched
//! from, and a moving paddle adds spin in its direction of travel: a fixed
//! fraction (`Paddle::spin`) of the ball's max speed.

use super::state::{Ball, Paddle};
use crate::clamp_range;

/// Resolve a ball against the paddle. Returns whether they collided.
///
/// Only the left, right and "ball entirely above" exclusions are tested, so a
/// ball overlapping the paddle from below or from the side still counts as a hit.
pub fn resolve_paddle_collision(ball: &mut Ball, paddle: &Paddle) -> bool {
    let b = &ball.rect;
    let p = &paddle.rect;

    if b.right() < p.left() || b.left() > p.right() || b.bottom() < p.top() {
        return false;
    }

    ball.vel.y = -ball.vel.y.abs();

    if paddle.vel != 0.0 {
        let spin = paddle.vel.signum() * paddle.spin * ball.max_speed;
        ball.vel.x = clamp_range(ball.vel.x + spin, -ball.max_speed, ball.max_speed);
    }

    true
}
