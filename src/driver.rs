use glam::DVec2;
use instant::Instant;

use crate::expression::Expression;
use crate::input::{EngagePoller, InputSource};
use crate::params::{ModelSink, RenderParams};
use crate::state::AnimationState;
use crate::updater;

/// Animation tick rate (seconds per tick).
const TICK_RATE: f64 = 1.0 / 60.0;
/// Max accumulated time before we clamp (prevents spiral of death).
const MAX_ACCUMULATOR: f64 = 0.25;
/// How often to log tick stats (seconds).
const STATS_LOG_INTERVAL: f64 = 5.0;

// ---------------------------------------------------------------------------
// Tick stats
// ---------------------------------------------------------------------------

struct TickStats {
    frames: u32,
    ticks_since_log: u32,
    frame_time_sum: f64,
    frame_time_max: f64,
    last_log: Instant,
}

impl TickStats {
    fn new() -> Self {
        Self {
            frames: 0,
            ticks_since_log: 0,
            frame_time_sum: 0.0,
            frame_time_max: 0.0,
            last_log: Instant::now(),
        }
    }

    fn record(&mut self, dt: f64, ticks: u32) {
        self.frames += 1;
        self.ticks_since_log += ticks;
        self.frame_time_sum += dt;
        self.frame_time_max = self.frame_time_max.max(dt);

        let elapsed = self.last_log.elapsed().as_secs_f64();
        if elapsed >= STATS_LOG_INTERVAL {
            let avg_ms = self.frame_time_sum / f64::from(self.frames.max(1)) * 1000.0;
            log::info!(
                "anim: {:.0} fps | avg {:.2}ms | worst {:.2}ms | {} ticks",
                f64::from(self.frames) / elapsed,
                avg_ms,
                self.frame_time_max * 1000.0,
                self.ticks_since_log,
            );
            self.frames = 0;
            self.ticks_since_log = 0;
            self.frame_time_sum = 0.0;
            self.frame_time_max = 0.0;
            self.last_log = Instant::now();
        }
    }
}

// ---------------------------------------------------------------------------
// Driver
// ---------------------------------------------------------------------------

/// Fixed-timestep animation driver.
///
/// Owned by the host window object and called once per rendered frame:
/// samples input, steps the animation state at 60 Hz, and pushes the
/// smoothed parameters plus the active expression into the model.
/// Single-threaded: the engagement poll and the tick both run
/// on the caller's thread.
pub struct Driver<I: InputSource, M: ModelSink> {
    input: I,
    model: M,
    state: AnimationState,
    poller: EngagePoller,
    rng: fastrand::Rng,
    expression: Expression,
    accumulator: f64,
    tick_count: u64,
    stats: TickStats,
}

impl<I: InputSource, M: ModelSink> Driver<I, M> {
    pub fn new(input: I, model: M) -> Self {
        Self::with_rng(input, model, fastrand::Rng::new())
    }

    /// Seeded constructor for deterministic sessions and tests.
    pub fn with_rng(input: I, model: M, mut rng: fastrand::Rng) -> Self {
        let state = AnimationState::new(&mut rng);
        Self {
            input,
            model,
            state,
            poller: EngagePoller::new(),
            rng,
            expression: Expression::Neutral,
            accumulator: 0.0,
            tick_count: 0,
            stats: TickStats::new(),
        }
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Total animation ticks run since creation.
    pub fn ticks(&self) -> u64 {
        self.tick_count
    }

    pub fn expression(&self) -> Expression {
        self.expression
    }

    /// Cycle the expression preset (context-menu toggle).
    pub fn toggle_expression(&mut self) {
        self.expression = self.expression.next();
        log::info!("expression -> {:?}", self.expression);
    }

    /// Advance by one rendered frame. `dt` is wall-clock seconds since
    /// the previous frame; `window` is the window size in pixels.
    pub fn frame(&mut self, dt: f64, window: DVec2) {
        let input = &mut self.input;
        let mode = self.poller.update(dt, || input.modifier_engaged());
        self.state.interaction_mode = mode;

        self.accumulator = (self.accumulator + dt).min(MAX_ACCUMULATOR);
        let mut ticks = 0u32;
        while self.accumulator >= TICK_RATE {
            let cursor = self.input.cursor_position();
            updater::update(&mut self.state, cursor, window, &mut self.rng);
            self.accumulator -= TICK_RATE;
            ticks += 1;
        }
        self.tick_count += u64::from(ticks);
        self.stats.record(dt, ticks);

        // Re-applied every frame, matching how the rig expects presets.
        self.model.set_expression(self.expression.id());
        RenderParams::from_state(&self.state).apply(&mut self.model);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::InteractionMode;

    struct FixedInput {
        cursor: DVec2,
        engaged: bool,
    }

    impl InputSource for FixedInput {
        fn cursor_position(&mut self) -> DVec2 {
            self.cursor
        }

        fn modifier_engaged(&mut self) -> bool {
            self.engaged
        }
    }

    #[derive(Default)]
    struct CountingSink {
        parameters: u32,
        expressions: Vec<String>,
    }

    impl ModelSink for CountingSink {
        fn set_parameter(&mut self, _name: &str, _value: f64, _weight: f64) {
            self.parameters += 1;
        }

        fn set_expression(&mut self, id: &str) {
            self.expressions.push(id.to_owned());
        }
    }

    fn driver(engaged: bool) -> Driver<FixedInput, CountingSink> {
        Driver::with_rng(
            FixedInput {
                cursor: DVec2::new(300.0, 100.0),
                engaged,
            },
            CountingSink::default(),
            fastrand::Rng::with_seed(9),
        )
    }

    #[test]
    fn fixed_timestep_tick_count() {
        let mut d = driver(false);
        d.frame(0.05, DVec2::new(400.0, 400.0));
        assert_eq!(d.ticks(), 3);
    }

    #[test]
    fn accumulator_clamps_long_stall() {
        let mut d = driver(false);
        d.frame(10.0, DVec2::new(400.0, 400.0));
        assert_eq!(d.ticks(), 15);
    }

    #[test]
    fn pushes_parameters_and_expression_each_frame() {
        let mut d = driver(false);
        d.frame(0.02, DVec2::new(400.0, 400.0));
        assert_eq!(d.model().parameters, 12);
        assert_eq!(d.model().expressions, vec!["expression0"]);

        d.toggle_expression();
        d.frame(0.02, DVec2::new(400.0, 400.0));
        assert_eq!(d.model().parameters, 24);
        assert_eq!(d.model().expressions.last().map(String::as_str), Some("expression1"));
    }

    #[test]
    fn engagement_reaches_updater() {
        let mut d = driver(true);
        d.frame(0.05, DVec2::new(400.0, 400.0));
        assert_eq!(d.state().interaction_mode, InteractionMode::Engaged);
        assert_eq!(d.state().target_eye_open, 0.0);
    }
}
