//! RigidBodySystem - polygonal rigid bodies living in the cell grid
//!
//! A body is a center entity plus a ring of vertex entities. Each tick:
//! - gravity is added to the center's velocity,
//! - foreign cells inside the bounding box redirect and damp it,
//! - position and orientation are integrated and vertices re-projected,
//! - residual overlap is pushed out one cell at a time.
//!
//! Bodies collide with static material only, never with each other.

mod assembly;
mod contacts;
mod integrate;
mod rasterize;
mod resolve;
mod settings;
mod system;

pub use integrate::{outside_margin, tick_body, wrap_angle, BodyState, TickOutcome};
pub use rasterize::{PAUSED_MARKER_COLOR, PAUSED_MARKER_RADIUS};
pub use resolve::quantize_step;
pub use settings::RigidBodySettings;
pub use system::{RigidBodySystem, StepReport};
