//! Data-driven game balance
//!
//! Geometry and speeds for a session. Defaults come from `consts`; a JSON
//! override may be supplied (LocalStorage on the web) and is validated before
//! the simulation sees it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::BrickLayout;

/// Session tuning. All lengths are pixels, all speeds pixels per second.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Playfield (canvas) width and height
    pub playfield: Vec2,
    pub bricks: BrickLayout,
    pub paddle_size: Vec2,
    /// Distance from the playfield bottom to the paddle's top edge
    pub paddle_bottom_offset: f32,
    pub paddle_max_speed: f32,
    pub ball_size: Vec2,
    /// Magnitude of each launch velocity component
    pub ball_launch_speed: f32,
    pub ball_max_speed: f32,
    pub ball_speed_growth: f32,
    pub paddle_spin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            playfield: Vec2::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT),
            bricks: BrickLayout::default(),
            paddle_size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            paddle_bottom_offset: PADDLE_BOTTOM_OFFSET,
            paddle_max_speed: PADDLE_MAX_SPEED,
            ball_size: Vec2::splat(BALL_SIZE),
            ball_launch_speed: BALL_LAUNCH_SPEED,
            ball_max_speed: BALL_MAX_SPEED,
            ball_speed_growth: BALL_SPEED_GROWTH,
            paddle_spin: PADDLE_SPIN,
        }
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { field, value })
    }
}

impl Tuning {
    /// LocalStorage key for a tuning override
    const STORAGE_KEY: &'static str = "brick_breaker_tuning";

    /// Parse and validate a JSON tuning document. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject geometry the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("playfield.width", self.playfield.x)?;
        positive("playfield.height", self.playfield.y)?;
        positive("paddle_size.width", self.paddle_size.x)?;
        positive("paddle_size.height", self.paddle_size.y)?;
        positive("ball_size.width", self.ball_size.x)?;
        positive("ball_size.height", self.ball_size.y)?;
        positive("paddle_max_speed", self.paddle_max_speed)?;
        positive("ball_launch_speed", self.ball_launch_speed)?;
        positive("ball_max_speed", self.ball_max_speed)?;
        positive("ball_speed_growth", self.ball_speed_growth)?;
        non_negative("paddle_spin", self.paddle_spin)?;

        let bricks = &self.bricks;
        if bricks.rows == 0 || bricks.columns == 0 {
            return Err(ConfigError::EmptyBrickGrid {
                rows: bricks.rows,
                columns: bricks.columns,
            });
        }
        positive("bricks.brick_height", bricks.brick_height)?;
        non_negative("bricks.horizontal_spacing", bricks.horizontal_spacing)?;
        non_negative("bricks.vertical_spacing", bricks.vertical_spacing)?;
        non_negative("bricks.top", bricks.top)?;
        if bricks.brick_width(self.playfield.x) <= 0.0 {
            return Err(ConfigError::BricksTooWide {
                playfield_width: self.playfield.x,
                spacing: bricks.horizontal_spacing,
            });
        }

        if self.paddle_size.x > self.playfield.x {
            return Err(ConfigError::DoesNotFit { entity: "paddle" });
        }
        if self.paddle_bottom_offset < self.paddle_size.y
            || self.paddle_bottom_offset > self.playfield.y
        {
            return Err(ConfigError::DoesNotFit { entity: "paddle" });
        }
        // The ball starts resting on the paddle
        if self.ball_size.x > self.playfield.x
            || self.ball_size.y > self.playfield.y - self.paddle_bottom_offset
        {
            return Err(ConfigError::DoesNotFit { entity: "ball" });
        }

        Ok(())
    }

    /// Load a tuning override from LocalStorage (falls back to defaults)
    pub fn load() -> Self {
        let Some(json) = crate::platform::storage::get_item(Self::STORAGE_KEY) else {
            log::info!("Using default tuning");
            return Self::default();
        };

        match Self::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning override");
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring tuning override: {}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let tuning =
            Tuning::from_json(r#"{ "playfield": [640.0, 480.0], "bricks": { "rows": 3 } }"#)
                .unwrap();
        assert_eq!(tuning.playfield, Vec2::new(640.0, 480.0));
        assert_eq!(tuning.bricks.rows, 3);
        assert_eq!(tuning.bricks.columns, BRICK_COLUMNS);
        assert_eq!(tuning.ball_launch_speed, BALL_LAUNCH_SPEED);
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            Tuning::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_rejects_zero_sized_playfield() {
        let err = Tuning::from_json(r#"{ "playfield": [0.0, 600.0] }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::OutOfRange {
                field: "playfield.width",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_empty_grid() {
        let tuning = Tuning {
            bricks: BrickLayout {
                columns: 0,
                ..BrickLayout::default()
            },
            ..Tuning::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::EmptyBrickGrid { rows: 5, columns: 0 })
        ));
    }

    #[test]
    fn test_rejects_spacing_wider_than_playfield() {
        let tuning = Tuning {
            bricks: BrickLayout {
                horizontal_spacing: 80.0,
                ..BrickLayout::default()
            },
            ..Tuning::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(ConfigError::BricksTooWide { .. })
        ));
    }

    #[test]
    fn test_rejects_oversized_paddle() {
        let tuning = Tuning {
            paddle_size: Vec2::new(900.0, 10.0),
            ..Tuning::default()
        };
        let err = tuning.validate().unwrap_err();
        assert_eq!(err.to_string(), "paddle does not fit inside the playfield");
    }
}
