//! Frame timing

use crate::clamp_range;
use crate::consts::{MAX_FRAME_DT, NOMINAL_DT};

/// Current wall-clock time in milliseconds since the Unix epoch
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs_f64() * 1000.0)
        .unwrap_or(0.0)
}

/// Turns display-refresh timestamps (ms) into simulation deltas (seconds)
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_ms: Option<f64>,
    max_dt: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(MAX_FRAME_DT)
    }
}

impl FrameClock {
    pub fn new(max_dt: f32) -> Self {
        Self {
            last_ms: None,
            max_dt,
        }
    }

    /// Seconds since the previous call, clamped to `[0, max_dt]`.
    /// The first call returns the nominal 60 Hz frame time.
    pub fn delta(&mut self, timestamp_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(prev) => ((timestamp_ms - prev) / 1000.0) as f32,
            None => NOMINAL_DT,
        };
        self.last_ms = Some(timestamp_ms);
        clamp_range(dt, 0.0, self.max_dt)
    }

    /// Forget the previous timestamp (e.g. after the tab was hidden)
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}
