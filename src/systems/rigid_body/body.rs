use super::arena::Handle;
use super::ring::VertexRing;
use super::vec2::Vec2;

pub type CenterHandle = Handle<BodyCenter>;
pub type VertexHandle = Handle<BodyVertex>;

/// Fill color for new bodies (ABGR, pure red)
pub const DEFAULT_BODY_COLOR: u32 = 0xFF0000FF;

/// Which body entity a grid cell belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityRef {
    Center(CenterHandle),
    Vertex(VertexHandle),
}

/// Body center - position, orientation and velocities of one rigid body
#[derive(Clone, Debug)]
pub struct BodyCenter {
    // === Physics State ===
    /// World position
    pub pos: Vec2,
    /// Orientation (radians, kept in [0, 2π))
    pub angle: f32,
    /// Velocity vector (pixels per tick)
    pub velocity: Vec2,
    /// Angular velocity (radians per tick)
    pub angular_vel: f32,

    // === Shape ===
    pub ring: VertexRing,

    // === Bookkeeping ===
    /// Own handle, read by the renderer
    pub id: CenterHandle,
    /// Creation order; the highest live value is the newest center
    pub seq: u64,
    /// ABGR fill color
    pub color: u32,
    /// Grid cell currently holding this center's marker
    pub cell: Option<(u32, u32)>,
}

impl BodyCenter {
    pub fn new(id: CenterHandle, pos: Vec2, seq: u64, color: u32) -> Self {
        Self {
            pos,
            angle: 0.0,
            velocity: Vec2::zero(),
            angular_vel: 0.0,
            ring: VertexRing::new(),
            id,
            seq,
            color,
            cell: None,
        }
    }

    /// Fewer than three vertices: no physics.
    pub fn is_inert(&self) -> bool {
        !self.ring.is_polygon()
    }
}

/// Polar offset of a vertex from its center at orientation 0
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Anchor {
    /// Whole pixels
    pub distance: u16,
    pub angle: f32,
}

impl Anchor {
    /// Anchor of `vertex` relative to `center`. Distance is rounded to the
    /// nearest pixel and saturates at `u16::MAX`.
    pub fn measure(center: Vec2, vertex: Vec2) -> Self {
        let d = vertex - center;
        let distance = d.length().round().min(u16::MAX as f32) as u16;
        Self { distance, angle: d.angle() }
    }

    #[inline]
    pub fn offset(&self, orientation: f32) -> Vec2 {
        Vec2::from_polar(self.distance as f32, self.angle + orientation)
    }
}

/// Body vertex - one polygon corner
#[derive(Clone, Debug)]
pub struct BodyVertex {
    /// Absolute position, derived from the center each tick
    pub pos: Vec2,
    pub anchor: Anchor,
    /// Rasterized area of the polygon; only the ring's first vertex carries it
    pub rotational_inertia: u16,
    pub center: Option<CenterHandle>,
    /// Grid cell currently holding this vertex's marker
    pub cell: Option<(u32, u32)>,
}

impl BodyVertex {
    pub fn new(pos: Vec2, center: Option<CenterHandle>) -> Self {
        Self {
            pos,
            anchor: Anchor::default(),
            rotational_inertia: 0,
            center,
            cell: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn anchor_measures_rounded_distance_and_angle() {
        let a = Anchor::measure(Vec2::new(100.0, 100.0), Vec2::new(90.0, 117.0));
        // sqrt(389) = 19.72
        assert_eq!(a.distance, 20);
        assert!((a.angle - 17.0f32.atan2(-10.0)).abs() < 1e-6);
    }

    #[test]
    fn anchor_offset_adds_orientation() {
        let a = Anchor { distance: 10, angle: 0.0 };
        let o = a.offset(PI);
        assert!((o.x + 10.0).abs() < 1e-4);
        assert!(o.y.abs() < 1e-4);
    }
}
