use glam::DVec2;

/// Blink interval draw range in ticks (~2-8 s at 60 Hz).
pub const BLINK_INTERVAL_MIN: u32 = 120;
pub const BLINK_INTERVAL_MAX: u32 = 480;

/// Breath interval draw range in ticks (~1.5-3 s at 60 Hz).
pub const BREATH_INTERVAL_MIN: u32 = 90;
pub const BREATH_INTERVAL_MAX: u32 = 180;

/// Engaged while the user holds the modifier key
/// over the pet, Idle otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionMode {
    Idle,
    Engaged,
}

/// Mouth openness bounds. Both the breath perturbation and the
/// engaged-mode override clamp into this range.
#[derive(Debug, Clone, Copy)]
pub struct MouthRange {
    pub min_open: f64,
    pub max_open: f64,
}

impl Default for MouthRange {
    fn default() -> Self {
        Self {
            min_open: 0.08,
            max_open: 0.2,
        }
    }
}

/// Per-tick animation state for the character rig.
///
/// Every `current_*` channel chases its paired `target_*` by exponential
/// smoothing and is clamped to its bound right after each step. Owned
/// exclusively by the driver; nothing mutates it between ticks.
#[derive(Debug, Clone)]
pub struct AnimationState {
    /// Pointer position as a window-relative fraction (0,0 = top-left).
    /// Leaves [0,1] when the cursor is outside the window.
    pub cursor_normalized: DVec2,

    /// Head yaw/pitch target in degrees. Unclamped: the cursor map may
    /// extrapolate past the rig range; only `current` is clamped.
    pub target_head_angle: DVec2,
    pub current_head_angle: DVec2,

    /// Horizontal eyeball offset, clamped to [-1, 1] on `current`.
    pub target_eyeball_x: f64,
    pub current_eyeball_x: f64,

    /// Shoulder rotation in degrees, x = left, y = right.
    /// `current` clamped to [-15, 0].
    pub target_arm_angle: DVec2,
    pub current_arm_angle: DVec2,

    pub target_mouth_open: f64,
    pub current_mouth_open: f64,

    pub target_eye_open: f64,
    pub current_eye_open: f64,

    /// Ticks since the last blink fired.
    pub blink_timer: u32,
    /// Tick count at which the next blink fires.
    pub blink_interval: u32,

    pub breath_timer: u32,
    pub breath_interval: u32,

    pub interaction_mode: InteractionMode,
    pub mouth: MouthRange,
}

impl AnimationState {
    /// Neutral rest pose: eyes open, mouth at rest, head centered.
    /// Timer intervals come from the injected rng so two pets don't
    /// blink in lockstep.
    pub fn new(rng: &mut fastrand::Rng) -> Self {
        let mouth = MouthRange::default();
        Self {
            cursor_normalized: DVec2::splat(0.5),
            target_head_angle: DVec2::ZERO,
            current_head_angle: DVec2::ZERO,
            target_eyeball_x: 0.0,
            current_eyeball_x: 0.0,
            target_arm_angle: DVec2::ZERO,
            current_arm_angle: DVec2::ZERO,
            target_mouth_open: mouth.min_open,
            current_mouth_open: mouth.min_open,
            target_eye_open: 1.0,
            current_eye_open: 1.0,
            blink_timer: 0,
            blink_interval: rng.u32(BLINK_INTERVAL_MIN..=BLINK_INTERVAL_MAX),
            breath_timer: 0,
            breath_interval: rng.u32(BREATH_INTERVAL_MIN..=BREATH_INTERVAL_MAX),
            interaction_mode: InteractionMode::Idle,
            mouth,
        }
    }
}
