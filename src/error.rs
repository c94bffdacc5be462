//! Configuration and renderer setup errors
//!
//! The simulation itself never fails; invalid geometry is rejected here,
//! before a `GameState` is ever built from it.

use std::fmt;

/// Why a tuning/config document was rejected
#[derive(Debug)]
pub enum ConfigError {
    /// The document is not valid JSON for `Tuning`
    Parse(serde_json::Error),
    /// A numeric field is non-finite or outside its allowed range
    OutOfRange { field: &'static str, value: f32 },
    /// Brick grid has no rows or no columns
    EmptyBrickGrid { rows: usize, columns: usize },
    /// Horizontal spacing leaves no room for bricks
    BricksTooWide { playfield_width: f32, spacing: f32 },
    /// An entity does not fit inside the playfield
    DoesNotFit { entity: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "invalid tuning document: {}", e),
            ConfigError::OutOfRange { field, value } => {
                write!(f, "{} is out of range: {}", field, value)
            }
            ConfigError::EmptyBrickGrid { rows, columns } => {
                write!(f, "brick grid must be non-empty, got {}x{}", rows, columns)
            }
            ConfigError::BricksTooWide {
                playfield_width,
                spacing,
            } => write!(
                f,
                "brick spacing {} leaves no room for bricks in a {} wide playfield",
                spacing, playfield_width
            ),
            ConfigError::DoesNotFit { entity } => {
                write!(f, "{} does not fit inside the playfield", entity)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// Why the GPU renderer could not be set up
#[derive(Debug)]
pub enum RenderError {
    Device(wgpu::RequestDeviceError),
    /// The adapter reported no usable surface format or alpha mode
    UnsupportedSurface,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Device(e) => write!(f, "failed to create device: {}", e),
            RenderError::UnsupportedSurface => {
                write!(f, "surface reports no supported format or alpha mode")
            }
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Device(e) => Some(e),
            RenderError::UnsupportedSurface => None,
        }
    }
}

impl From<wgpu::RequestDeviceError> for RenderError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        RenderError::Device(e)
    }
}
