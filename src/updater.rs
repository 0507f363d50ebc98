use glam::DVec2;

use crate::state::{
    AnimationState, InteractionMode, BLINK_INTERVAL_MAX, BLINK_INTERVAL_MIN, BREATH_INTERVAL_MAX,
    BREATH_INTERVAL_MIN,
};

/// Half-range of head yaw/pitch in degrees.
const HEAD_RANGE: f64 = 30.0;
/// Horizontal eyeball gain on the centered cursor fraction.
const EYEBALL_GAIN: f64 = 0.8;
/// Shoulder rotation as a fraction of head yaw.
const ARM_FOLLOW: f64 = 0.25;
/// Head yaw magnitude below which arm targets hold their previous value.
const ARM_DEADZONE: f64 = 0.1;
/// Shoulder rotation bounds in degrees.
const ARM_MIN: f64 = -15.0;
const ARM_MAX: f64 = 0.0;
/// Shoulder pose while the pet is Engaged.
const ARM_ENGAGED: f64 = -15.0;

/// Per-channel smoothing rates: current += (target - current) * rate.
const HEAD_RATE: f64 = 0.1;
const EYEBALL_RATE: f64 = 0.12;
const ARM_RATE: f64 = 0.08;
const MOUTH_RATE: f64 = 0.008;
const EYE_RATE: f64 = 0.15;

/// Eye openness below which a blink counts as bottomed out.
const NEAR_CLOSED: f64 = 0.1;
/// Ticks the lids may hold closed once a blink bottoms out (upper exclusive).
const BLINK_HOLD_MIN: u32 = 10;
const BLINK_HOLD_MAX: u32 = 20;

/// Max random mouth perturbation per breath.
const BREATH_DELTA: f64 = 0.15;

/// Advance the animation by one tick (~16 ms).
///
/// Pure in state + cursor sample + rng: reads the previous tick's state,
/// writes the next, never fails. Pushing the result into the model is the
/// caller's job.
pub fn update(state: &mut AnimationState, cursor: DVec2, window: DVec2, rng: &mut fastrand::Rng) {
    // Window-relative cursor fraction, deliberately unclamped: a cursor
    // outside the window extrapolates the head target past the rig range
    // and the post-smoothing clamp bounds the result.
    let frac = cursor / window.max(DVec2::ONE);
    state.cursor_normalized = frac;

    // Cursor fraction -> head yaw/pitch. Screen Y grows downward, so
    // pitch is inverted.
    state.target_head_angle = DVec2::new(
        frac.x * 2.0 * HEAD_RANGE - HEAD_RANGE,
        -frac.y * 2.0 * HEAD_RANGE + HEAD_RANGE,
    );

    state.target_eyeball_x = (frac.x * 2.0 - 1.0) * EYEBALL_GAIN;

    // Arms trail head yaw. Inside the deadzone the previous target holds
    // so the shoulders don't jitter while the cursor rests near center.
    let yaw = state.target_head_angle.x;
    let engaged = state.interaction_mode == InteractionMode::Engaged;
    if yaw.abs() > ARM_DEADZONE || engaged {
        state.target_arm_angle = DVec2::new(-yaw * ARM_FOLLOW, yaw * ARM_FOLLOW);
    }

    // Engaged pose wins over everything cursor-derived this tick.
    if engaged {
        state.target_eye_open = 0.0;
        state.target_arm_angle = DVec2::splat(ARM_ENGAGED);
        state.target_mouth_open = state.mouth.min_open;
    }

    smooth(state);

    if !engaged {
        blink(state, rng);
        breathe(state, rng);
    }
}

/// One exponential smoothing step per channel, clamped immediately after.
fn smooth(state: &mut AnimationState) {
    state.current_head_angle += (state.target_head_angle - state.current_head_angle) * HEAD_RATE;
    state.current_head_angle = state
        .current_head_angle
        .clamp(DVec2::splat(-HEAD_RANGE), DVec2::splat(HEAD_RANGE));

    state.current_eyeball_x += (state.target_eyeball_x - state.current_eyeball_x) * EYEBALL_RATE;
    state.current_eyeball_x = state.current_eyeball_x.clamp(-1.0, 1.0);

    state.current_arm_angle += (state.target_arm_angle - state.current_arm_angle) * ARM_RATE;
    state.current_arm_angle = state
        .current_arm_angle
        .clamp(DVec2::splat(ARM_MIN), DVec2::splat(ARM_MAX));

    state.current_mouth_open += (state.target_mouth_open - state.current_mouth_open) * MOUTH_RATE;
    state.current_mouth_open = state
        .current_mouth_open
        .clamp(state.mouth.min_open, state.mouth.max_open);

    state.current_eye_open += (state.target_eye_open - state.current_eye_open) * EYE_RATE;
    state.current_eye_open = state.current_eye_open.clamp(0.0, 1.0);
}

/// Idle blink cycle: fire on the interval, hold briefly once the lids
/// bottom out, then reopen.
fn blink(state: &mut AnimationState, rng: &mut fastrand::Rng) {
    state.blink_timer += 1;

    if state.blink_timer >= state.blink_interval {
        state.blink_timer = 0;
        state.target_eye_open = 0.0;
        state.blink_interval = rng.u32(BLINK_INTERVAL_MIN..=BLINK_INTERVAL_MAX);
    } else if state.current_eye_open < NEAR_CLOSED {
        let hold = rng.u32(BLINK_HOLD_MIN..BLINK_HOLD_MAX);
        if state.blink_timer >= hold {
            state.target_eye_open = 1.0;
        }
    }
}

/// Idle breathing: nudge the mouth target on a randomized interval.
fn breathe(state: &mut AnimationState, rng: &mut fastrand::Rng) {
    state.breath_timer += 1;

    if state.breath_timer >= state.breath_interval {
        state.breath_timer = 0;
        let delta = rng.f64() * 2.0 * BREATH_DELTA - BREATH_DELTA;
        state.target_mouth_open =
            (state.target_mouth_open + delta).clamp(state.mouth.min_open, state.mouth.max_open);
        state.breath_interval = rng.u32(BREATH_INTERVAL_MIN..=BREATH_INTERVAL_MAX);
    }
}
