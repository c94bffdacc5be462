//! Collision detection and response for axis-aligned rectangles
//!
//! The ball is a box, bricks are boxes. A hit is inferred from the side with
//! the smallest penetration depth and answered by forcing the sign of one
//! velocity component. Positions are never corrected, so a ball buried in
//! several bricks bounces off each of them in the same tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::Ball;

/// Side of the static rectangle that the ball struck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

/// Overlap depth of a ball box into a target box along each side
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Penetration {
    /// ball.right - rect.left
    pub left: f32,
    /// rect.right - ball.left
    pub right: f32,
    /// ball.bottom - rect.top
    pub top: f32,
    /// rect.bottom - ball.top
    pub bottom: f32,
}

impl Penetration {
    /// Penetration depths of `ball` into `rect`, or `None` if they are separated
    /// on either axis
    pub fn between(ball: &Rect, rect: &Rect) -> Option<Self> {
        if !ball.overlaps(rect) {
            return None;
        }
        Some(Self {
            left: ball.right() - rect.left(),
            right: rect.right() - ball.left(),
            top: ball.bottom() - rect.top(),
            bottom: rect.bottom() - ball.top(),
        })
    }

    /// Side with the minimum depth.
    ///
    /// Ties go to the first match in left, right, top, bottom order.
    pub fn min_side(&self) -> Side {
        let min = self.left.min(self.right).min(self.top).min(self.bottom);
        if min == self.left {
            Side::Left
        } else if min == self.right {
            Side::Right
        } else if min == self.top {
            Side::Top
        } else {
            Side::Bottom
        }
    }
}

/// Force the velocity component for `side` to point away from the struck face
#[inline]
pub fn reflect(vel: Vec2, side: Side) -> Vec2 {
    match side {
        Side::Left => Vec2::new(-vel.x.abs(), vel.y),
        Side::Right => Vec2::new(vel.x.abs(), vel.y),
        Side::Top => Vec2::new(vel.x, -vel.y.abs()),
        Side::Bottom => Vec2::new(vel.x, vel.y.abs()),
    }
}

/// Resolve a ball against a static rectangle.
///
/// Returns whether they collided; the caller owns any consequences (scoring,
/// breaking the brick).
pub fn resolve_collision(ball: &mut Ball, rect: &Rect) -> bool {
    match Penetration::between(&ball.rect, rect) {
        Some(pen) => {
            ball.vel = reflect(ball.vel, pen.min_side());
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ball_at(x: f32, y: f32, vel: Vec2) -> Ball {
        let mut ball = Ball::new(Vec2::splat(20.0), 480.0, 1.02);
        ball.rect.pos = Vec2::new(x, y);
        ball.vel = vel;
        ball
    }

    #[test]
    fn test_hit_from_left_side() {
        let brick = Rect::new(100.0, 100.0, 60.0, 20.0);
        // Ball's right edge 2px into the brick's left edge, vertically centred
        let mut ball = ball_at(82.0, 100.0, Vec2::new(200.0, 50.0));
        assert!(resolve_collision(&mut ball, &brick));
        assert_eq!(ball.vel, Vec2::new(-200.0, 50.0));
    }

    #[test]
    fn test_hit_from_right_side() {
        let brick = Rect::new(100.0, 100.0, 60.0, 20.0);
        let mut ball = ball_at(158.0, 100.0, Vec2::new(-200.0, 50.0));
        assert!(resolve_collision(&mut ball, &brick));
        assert_eq!(ball.vel, Vec2::new(200.0, 50.0));
    }

    #[test]
    fn test_hit_from_below_bounces_down() {
        let brick = Rect::new(100.0, 100.0, 60.0, 20.0);
        // Ball top 3px into the brick's bottom edge, moving up
        let mut ball = ball_at(120.0, 117.0, Vec2::new(40.0, -240.0));
        assert!(resolve_collision(&mut ball, &brick));
        assert_eq!(ball.vel, Vec2::new(40.0, 240.0));
    }

    #[test]
    fn test_hit_from_above_bounces_up() {
        let brick = Rect::new(100.0, 100.0, 60.0, 20.0);
        let mut ball = ball_at(120.0, 83.0, Vec2::new(40.0, 240.0));
        assert!(resolve_collision(&mut ball, &brick));
        assert_eq!(ball.vel, Vec2::new(40.0, -240.0));
    }

    #[test]
    fn test_miss_leaves_velocity() {
        let brick = Rect::new(100.0, 100.0, 60.0, 20.0);
        let mut ball = ball_at(0.0, 0.0, Vec2::new(40.0, 240.0));
        assert!(!resolve_collision(&mut ball, &brick));
        assert_eq!(ball.vel, Vec2::new(40.0, 240.0));
    }

    #[test]
    fn test_touching_edge_is_a_hit() {
        let brick = Rect::new(100.0, 100.0, 60.0, 20.0);
        // Ball's right edge exactly on the brick's left edge
        let mut ball = ball_at(80.0, 100.0, Vec2::new(100.0, 0.0));
        assert!(resolve_collision(&mut ball, &brick));
        assert_eq!(ball.vel.x, -100.0);
    }

    #[test]
    fn test_tie_order() {
        let all = Penetration {
            left: 1.0,
            right: 1.0,
            top: 1.0,
            bottom: 1.0,
        };
        assert_eq!(all.min_side(), Side::Left);

        let lr = Penetration {
            left: 2.0,
            right: 2.0,
            top: 5.0,
            bottom: 5.0,
        };
        assert_eq!(lr.min_side(), Side::Left);

        let rt = Penetration {
            left: 9.0,
            right: 2.0,
            top: 2.0,
            bottom: 9.0,
        };
        assert_eq!(rt.min_side(), Side::Right);

        let tb = Penetration {
            left: 9.0,
            right: 9.0,
            top: 3.0,
            bottom: 3.0,
        };
        assert_eq!(tb.min_side(), Side::Top);
    }

    fn coord() -> impl Strategy<Value = f32> {
        (-200i32..200).prop_map(|v| v as f32)
    }

    fn speed() -> impl Strategy<Value = f32> {
        (-500i32..500).prop_map(|v| v as f32)
    }

    /// A target rect and a 20x20 ball position that touches or overlaps it
    fn overlapping_boxes() -> impl Strategy<Value = (Rect, Vec2)> {
        (-200i32..200, -200i32..200, 1i32..100, 1i32..100).prop_flat_map(|(rx, ry, rw, rh)| {
            ((rx - 20)..=(rx + rw), (ry - 20)..=(ry + rh)).prop_map(move |(bx, by)| {
                (
                    Rect::new(rx as f32, ry as f32, rw as f32, rh as f32),
                    Vec2::new(bx as f32, by as f32),
                )
            })
        })
    }

    proptest! {
        #[test]
        fn prop_separated_boxes_never_collide(
            bx in coord(), by in coord(), vx in speed(), vy in speed(),
            rx in coord(), ry in coord(), rw in 1i32..100, rh in 1i32..100,
        ) {
            let rect = Rect::new(rx, ry, rw as f32, rh as f32);
            let mut ball = ball_at(bx, by, Vec2::new(vx, vy));
            prop_assume!(!ball.rect.overlaps(&rect));

            prop_assert!(!resolve_collision(&mut ball, &rect));
            prop_assert_eq!(ball.vel, Vec2::new(vx, vy));
        }

        #[test]
        fn prop_overlap_sets_exactly_one_component(
            (rect, pos) in overlapping_boxes(), vx in speed(), vy in speed(),
        ) {
            let mut ball = ball_at(pos.x, pos.y, Vec2::new(vx, vy));
            prop_assume!(ball.rect.overlaps(&rect));
            let pen = Penetration::between(&ball.rect, &rect).unwrap();

            prop_assert!(resolve_collision(&mut ball, &rect));
            match pen.min_side() {
                Side::Left => {
                    prop_assert_eq!(ball.vel, Vec2::new(-vx.abs(), vy));
                    prop_assert!(pen.left <= pen.right && pen.left <= pen.top && pen.left <= pen.bottom);
                }
                Side::Right => {
                    prop_assert_eq!(ball.vel, Vec2::new(vx.abs(), vy));
                    prop_assert!(pen.right < pen.left && pen.right <= pen.top && pen.right <= pen.bottom);
                }
                Side::Top => {
                    prop_assert_eq!(ball.vel, Vec2::new(vx, -vy.abs()));
                    prop_assert!(pen.top < pen.left && pen.top < pen.right && pen.top <= pen.bottom);
                }
                Side::Bottom => {
                    prop_assert_eq!(ball.vel, Vec2::new(vx, vy.abs()));
                    prop_assert!(pen.bottom < pen.left && pen.bottom < pen.right && pen.bottom < pen.top);
                }
            }
        }
    }
}
