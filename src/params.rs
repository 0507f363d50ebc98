use crate::state::AnimationState;

/// Body follow fractions; the torso trails the head.
const BODY_X_FOLLOW: f64 = 0.25;
const BODY_Y_FOLLOW: f64 = 0.2;
const BODY_Z_YAW_FOLLOW: f64 = 0.15;
const BODY_Z_PITCH_FOLLOW: f64 = 0.05;
/// Vertical eyeball drift as a fraction of head pitch.
const EYEBALL_Y_FOLLOW: f64 = 0.03;

/// Every parameter is pushed at full weight.
const FULL_WEIGHT: f64 = 1.0;

/// Named-parameter surface exposed by the model renderer.
///
/// Implemented host-side on top of whatever rig library actually draws
/// the character; the driver only ever talks through this trait.
pub trait ModelSink {
    /// Set a named float parameter on the rig.
    fn set_parameter(&mut self, name: &str, value: f64, weight: f64);

    /// Activate a named expression preset.
    fn set_expression(&mut self, id: &str);
}

/// Full rig parameter set for one frame, projected from smoothed state.
///
/// Recomputed every frame; never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderParams {
    pub angle_x: f64,
    pub angle_y: f64,
    pub eyeball_x: f64,
    pub eyeball_y: f64,
    pub body_angle_x: f64,
    pub body_angle_y: f64,
    pub body_angle_z: f64,
    pub mouth_open: f64,
    pub eye_open: f64,
    pub arm_left: f64,
    pub arm_right: f64,
}

impl RenderParams {
    /// Project the smoothed channels plus the derived secondary motion.
    pub fn from_state(state: &AnimationState) -> Self {
        let head = state.current_head_angle;
        Self {
            angle_x: head.x,
            angle_y: head.y,
            eyeball_x: state.current_eyeball_x,
            eyeball_y: head.y * EYEBALL_Y_FOLLOW,
            body_angle_x: head.x * BODY_X_FOLLOW,
            body_angle_y: head.y * BODY_Y_FOLLOW,
            body_angle_z: head.x * BODY_Z_YAW_FOLLOW + head.y * BODY_Z_PITCH_FOLLOW,
            mouth_open: state.current_mouth_open,
            eye_open: state.current_eye_open,
            arm_left: state.current_arm_angle.x,
            arm_right: state.current_arm_angle.y,
        }
    }

    /// Push the whole set into the model.
    pub fn apply(&self, sink: &mut impl ModelSink) {
        sink.set_parameter("ParamAngleX", self.angle_x, FULL_WEIGHT);
        sink.set_parameter("ParamAngleY", self.angle_y, FULL_WEIGHT);
        sink.set_parameter("ParamEyeBallX", self.eyeball_x, FULL_WEIGHT);
        sink.set_parameter("ParamEyeBallY", self.eyeball_y, FULL_WEIGHT);
        sink.set_parameter("ParamBodyAngleX", self.body_angle_x, FULL_WEIGHT);
        sink.set_parameter("ParamBodyAngleY", self.body_angle_y, FULL_WEIGHT);
        sink.set_parameter("ParamBodyAngleZ", self.body_angle_z, FULL_WEIGHT);
        sink.set_parameter("ParamMouthOpenY", self.mouth_open, FULL_WEIGHT);
        sink.set_parameter("ParamEyeLOpen", self.eye_open, FULL_WEIGHT);
        sink.set_parameter("ParamEyeROpen", self.eye_open, FULL_WEIGHT);
        sink.set_parameter("ParamShoulderLRotation", self.arm_left, FULL_WEIGHT);
        sink.set_parameter("ParamShoulderRRotation", self.arm_right, FULL_WEIGHT);
    }
}
