//! Animation core for a cursor-watching desktop pet.
//!
//! The pet is a frameless, always-on-top, transparent window rendering a
//! Live2D-style character. This crate owns everything between the input
//! sample and the rig parameters: the per-tick state update (head
//! tracking, blinking, breathing, arm sway, the engaged pose), the
//! projection into named model parameters, and the fixed-timestep driver
//! that runs both. Windowing, input plumbing, and the model renderer
//! stay host-side behind the [`InputSource`] and [`ModelSink`] traits.

pub mod driver;
pub mod expression;
pub mod input;
pub mod params;
pub mod placement;
pub mod state;
pub mod updater;

pub use driver::Driver;
pub use expression::Expression;
pub use input::{EngagePoller, InputSource};
pub use params::{ModelSink, RenderParams};
pub use state::{AnimationState, InteractionMode, MouthRange};
pub use updater::update;
