use std::time::Duration;

use glam::DVec2;
use instant::Instant;

use deskpet::{Driver, InputSource, ModelSink};

/// Virtual window size for the headless run (pixels).
const WINDOW: DVec2 = DVec2::new(400.0, 400.0);
/// How long the demo runs (seconds).
const DEMO_SECONDS: f64 = 10.0;
/// Target frame period (seconds).
const FRAME_PERIOD: f64 = 1.0 / 60.0;

/// Scripted cursor orbiting the window center, with a one-second
/// engaged hold mid-run.
struct OrbitInput {
    t: f64,
}

impl InputSource for OrbitInput {
    fn cursor_position(&mut self) -> DVec2 {
        self.t += FRAME_PERIOD;
        let angle = self.t * std::f64::consts::TAU / 4.0;
        WINDOW * 0.5 + DVec2::new(angle.cos(), angle.sin()) * WINDOW.x * 0.4
    }

    fn modifier_engaged(&mut self) -> bool {
        (4.0..5.0).contains(&self.t)
    }
}

/// The demo has no rig to drive; parameters go nowhere.
struct NullSink;

impl ModelSink for NullSink {
    fn set_parameter(&mut self, _name: &str, _value: f64, _weight: f64) {}

    fn set_expression(&mut self, _id: &str) {}
}

fn main() {
    env_logger::init();
    log::info!("DeskPet headless demo: {DEMO_SECONDS}s of animation at 60 Hz");

    let mut driver = Driver::new(OrbitInput { t: 0.0 }, NullSink);
    let start = Instant::now();
    let mut last = start;
    let mut frames: u64 = 0;

    while start.elapsed().as_secs_f64() < DEMO_SECONDS {
        let now = Instant::now();
        let dt = now.duration_since(last).as_secs_f64();
        last = now;

        driver.frame(dt, WINDOW);
        frames += 1;

        if frames % 60 == 0 {
            let s = driver.state();
            log::info!(
                "head=({:.1},{:.1}) eyes={:.2} mouth={:.3} arms=({:.1},{:.1}) mode={:?}",
                s.current_head_angle.x,
                s.current_head_angle.y,
                s.current_eye_open,
                s.current_mouth_open,
                s.current_arm_angle.x,
                s.current_arm_angle.y,
                s.interaction_mode,
            );
        }

        std::thread::sleep(Duration::from_secs_f64(FRAME_PERIOD));
    }

    log::info!("demo complete: {frames} frames, {} ticks", driver.ticks());
}
