//! RigidBody - convex polygons anchored to a center
//!
//! A body is a center plus a ring of vertices. Each vertex stores a polar
//! offset (distance, angle) from the center at orientation 0, so absolute
//! vertex positions are always derived from the center's position and angle.

pub mod arena;
pub mod body;
pub mod geometry;
pub mod host;
pub mod inertia;
pub mod ring;
mod vec2;

pub use arena::{Arena, Handle};
pub use body::{Anchor, BodyCenter, BodyVertex, CenterHandle, EntityRef, VertexHandle, DEFAULT_BODY_COLOR};
pub use geometry::{CellBounds, Polygon, Translation};
pub use host::{CellOccupancy, GravityField, Occupant, UniformGravity};
pub use inertia::estimate_inertia;
pub use ring::{VertexRing, MIN_POLYGON_VERTICES};
pub use vec2::Vec2;
