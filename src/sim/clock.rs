//! Host timestamps to clamped step lengths

use crate::consts::MAX_DT;

/// Clamp a step length to `[0, MAX_DT]`; NaN becomes 0
#[inline]
pub fn clamp_dt(dt: f32) -> f32 {
    if dt.is_nan() { 0.0 } else { dt.clamp(0.0, MAX_DT) }
}

/// Converts successive display-refresh timestamps into step lengths
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous timestamp, clamped. The first call yields 0.
    pub fn advance(&mut self, timestamp_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => ((timestamp_ms - last) / 1000.0) as f32,
            None => 0.0,
        };
        self.last_ms = Some(timestamp_ms);
        clamp_dt(dt)
    }

    /// Forget the last timestamp (e.g. after the host was suspended)
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}
