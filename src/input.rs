use glam::DVec2;

use crate::state::InteractionMode;

/// How often the modifier key is sampled (seconds). The animation ticks
/// at 60 Hz; engagement only needs ~20 Hz.
const ENGAGE_POLL_INTERVAL: f64 = 1.0 / 20.0;

/// Host-supplied pointer and modifier sampling.
pub trait InputSource {
    /// Pointer position in window-local pixels. Sampled once per tick;
    /// may fall outside the window bounds.
    fn cursor_position(&mut self) -> DVec2;

    /// Whether the interaction modifier key is currently held.
    fn modifier_engaged(&mut self) -> bool;
}

/// Low-frequency modifier poll.
///
/// Holds the last sampled mode between polls so the per-tick updater
/// sees a stable value. Runs on the driver's thread, same as the tick,
/// so no synchronization is needed.
pub struct EngagePoller {
    accumulator: f64,
    mode: InteractionMode,
}

impl EngagePoller {
    pub fn new() -> Self {
        Self {
            // Start saturated so the first frame polls immediately.
            accumulator: ENGAGE_POLL_INTERVAL,
            mode: InteractionMode::Idle,
        }
    }

    /// Advance by `dt` seconds, sampling `engaged` only when a poll is due.
    pub fn update(&mut self, dt: f64, engaged: impl FnOnce() -> bool) -> InteractionMode {
        self.accumulator += dt;
        if self.accumulator >= ENGAGE_POLL_INTERVAL {
            self.accumulator = 0.0;
            self.mode = if engaged() {
                InteractionMode::Engaged
            } else {
                InteractionMode::Idle
            };
        }
        self.mode
    }
}
