//! Per-tick body update
//!
//! One call advances one body through gravity, collision response,
//! integration and vertex projection, then hands off to the resolver.

use std::f32::consts::TAU;

use crate::rigid_body::{Anchor, CellOccupancy, GravityField, Polygon, Vec2, MIN_POLYGON_VERTICES};

use super::contacts::for_each_contact;
use super::resolve::{resolve_penetration, Resolution};
use super::settings::RigidBodySettings;

/// Working copy of one body for the duration of a tick
#[derive(Clone, Debug, Default)]
pub struct BodyState {
    pub pos: Vec2,
    pub angle: f32,
    pub velocity: Vec2,
    pub angular_vel: f32,
    /// Rotational inertia from the ring's first vertex
    pub inertia: u16,
    /// Ring order
    pub anchors: Vec<Anchor>,
    /// Absolute vertex positions, same order as `anchors`
    pub vertices: Vec<Vec2>,
}

impl BodyState {
    pub fn polygon(&self) -> Polygon<'_> {
        Polygon::new(self.pos, &self.vertices)
    }

    /// Move the center and every vertex by `step`.
    pub(super) fn translate(&mut self, step: Vec2) {
        self.pos += step;
        for v in self.vertices.iter_mut() {
            *v += step;
        }
    }

    /// Place every vertex from its anchor. Returns the first vertex that
    /// lands inside the boundary margin.
    pub(super) fn project_vertices(&mut self, width: u32, height: u32, margin: f32) -> Result<(), Vec2> {
        self.vertices.resize(self.anchors.len(), Vec2::zero());
        for (anchor, v) in self.anchors.iter().zip(self.vertices.iter_mut()) {
            let p = self.pos + anchor.offset(self.angle);
            if outside_margin(p, width, height, margin) {
                return Err(p);
            }
            *v = p;
        }
        Ok(())
    }

    /// First vertex inside the boundary margin, if any.
    pub(super) fn first_outside(&self, width: u32, height: u32, margin: f32) -> Option<Vec2> {
        self.vertices
            .iter()
            .copied()
            .find(|&p| outside_margin(p, width, height, margin))
    }
}

/// What happened to a body during one tick
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickOutcome {
    /// Fewer than three vertices, nothing done
    Inert,
    /// Body moved and ended clear of foreign material
    Moved { contacts: u32, resolve_steps: u32 },
    /// A vertex crossed the boundary margin at `at`; the body must be removed
    Destroyed { at: Vec2 },
    /// Push-out gave up after `resolve_steps`; the body stays where it stopped
    UnresolvedCollision { contacts: u32, resolve_steps: u32 },
}

/// Normalize into [0, 2π).
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid may round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}

#[inline]
pub fn outside_margin(p: Vec2, width: u32, height: u32, margin: f32) -> bool {
    p.x < margin || p.x > width as f32 - margin || p.y < margin || p.y > height as f32 - margin
}

/// Advance one body by a tick.
pub fn tick_body(
    state: &mut BodyState,
    settings: &RigidBodySettings,
    grid: &impl CellOccupancy,
    gravity: &impl GravityField,
) -> TickOutcome {
    if state.anchors.len() < MIN_POLYGON_VERTICES {
        return TickOutcome::Inert;
    }
    let (width, height) = grid.dimensions();

    // Gravity
    state.velocity += gravity.sample(state.pos);

    // Collision response: each contact redirects and damps; the last one wins.
    let mut velocity = state.velocity;
    let mut angular_vel = state.angular_vel;
    let inertia = state.inertia as f32 * settings.inertia_scale;
    let contacts = for_each_contact(&state.polygon(), grid, |t| {
        let speed = velocity.length() * settings.damping;
        velocity = t.offset.normalize() * speed;
        let denom = speed * inertia;
        angular_vel = if denom != 0.0 { t.torque / denom } else { 0.0 };
    });
    state.velocity = velocity;
    state.angular_vel = angular_vel;

    // Integration
    state.pos += state.velocity;
    state.angle = wrap_angle(state.angle + state.angular_vel);

    // Vertex projection
    if let Err(at) = state.project_vertices(width, height, settings.boundary_margin) {
        return TickOutcome::Destroyed { at };
    }

    match resolve_penetration(state, settings, grid) {
        Resolution::Clear { steps } => TickOutcome::Moved { contacts, resolve_steps: steps },
        Resolution::Destroyed { at } => TickOutcome::Destroyed { at },
        Resolution::Unresolved { steps } => TickOutcome::UnresolvedCollision {
            contacts,
            resolve_steps: steps,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::EL_STONE;
    use crate::grid::Grid;
    use crate::rigid_body::UniformGravity;
    use std::f32::consts::PI;

    /// Triangle of radius 20 around `pos`, wound the way `contains` accepts.
    fn triangle(pos: Vec2, inertia: u16) -> BodyState {
        let anchors = [0.0, 4.0 * PI / 3.0, 2.0 * PI / 3.0]
            .iter()
            .map(|&angle| Anchor { distance: 20, angle })
            .collect::<Vec<_>>();
        let vertices = anchors.iter().map(|a| pos + a.offset(0.0)).collect();
        BodyState { pos, inertia, anchors, vertices, ..Default::default() }
    }

    fn no_gravity() -> UniformGravity {
        UniformGravity(Vec2::zero())
    }

    #[test]
    fn wrap_angle_stays_in_range() {
        assert_eq!(wrap_angle(0.0), 0.0);
        assert!((wrap_angle(TAU + 1.0) - 1.0).abs() < 1e-5);
        assert!((wrap_angle(-1.0) - (TAU - 1.0)).abs() < 1e-5);
        let tiny = wrap_angle(-1e-9);
        assert!(tiny >= 0.0 && tiny < TAU);
    }

    #[test]
    fn outside_margin_checks_all_sides() {
        assert!(!outside_margin(Vec2::new(5.0, 5.0), 100, 100, 5.0));
        assert!(!outside_margin(Vec2::new(95.0, 95.0), 100, 100, 5.0));
        assert!(outside_margin(Vec2::new(4.9, 50.0), 100, 100, 5.0));
        assert!(outside_margin(Vec2::new(50.0, 95.1), 100, 100, 5.0));
    }

    #[test]
    fn fewer_than_three_vertices_is_inert() {
        let grid = Grid::new(200, 200);
        let mut state = triangle(Vec2::new(100.0, 100.0), 100);
        state.anchors.truncate(2);
        state.vertices.truncate(2);
        let outcome = tick_body(&mut state, &RigidBodySettings::default(), &grid, &UniformGravity(Vec2::new(0.0, 1.0)));
        assert_eq!(outcome, TickOutcome::Inert);
        assert_eq!(state.velocity, Vec2::zero());
    }

    #[test]
    fn free_fall_accumulates_gravity() {
        let grid = Grid::new(200, 200);
        let settings = RigidBodySettings::default();
        let gravity = UniformGravity(Vec2::new(0.0, 0.1));
        let mut state = triangle(Vec2::new(100.0, 100.0), 100);

        for _ in 0..10 {
            let outcome = tick_body(&mut state, &settings, &grid, &gravity);
            assert_eq!(outcome, TickOutcome::Moved { contacts: 0, resolve_steps: 0 });
        }

        assert!((state.pos.y - 105.5).abs() < 1e-3);
        assert_eq!(state.pos.x, 100.0);
        assert_eq!(state.angle, 0.0);
    }

    #[test]
    fn constant_spin_wraps_orientation() {
        let grid = Grid::new(200, 200);
        let settings = RigidBodySettings::default();
        let mut state = triangle(Vec2::new(100.0, 100.0), 100);
        state.angular_vel = 0.5;

        for _ in 0..20 {
            tick_body(&mut state, &settings, &grid, &no_gravity());
        }

        assert!((state.angle - 10.0f32.rem_euclid(TAU)).abs() < 1e-3);
        // Vertices follow the orientation
        let expected = state.pos + state.anchors[0].offset(state.angle);
        assert!((state.vertices[0] - expected).length() < 1e-4);
    }

    #[test]
    fn contact_redirects_velocity_and_spins() {
        let mut grid = Grid::new(200, 200);
        grid.set_particle(110, 110, EL_STONE, 0xFF808080);
        let settings = RigidBodySettings::default();
        let gravity = UniformGravity(Vec2::new(0.0, 0.1));
        let mut state = triangle(Vec2::new(100.0, 100.0), 500);

        let before = state.polygon().minimum_translation(Vec2::new(110.0, 110.0));
        assert!(!before.is_zero());

        let outcome = tick_body(&mut state, &settings, &grid, &gravity);

        assert_eq!(outcome, TickOutcome::Moved { contacts: 1, resolve_steps: 1 });
        let dir = before.offset.normalize();
        let expected = dir * (0.1 * 0.99);
        assert!((state.velocity - expected).length() < 1e-5);
        assert!(state.velocity.y < 0.0);
        assert!(state.angular_vel > 0.0);
        // One resolve step up and to the left
        assert!((state.pos - (Vec2::new(99.0, 99.0) + expected)).length() < 1e-4);
    }

    #[test]
    fn vertex_in_margin_destroys() {
        let grid = Grid::new(200, 200);
        let mut state = triangle(Vec2::new(100.0, 180.0), 100);
        state.anchors[0].angle = PI / 2.0;

        let outcome = tick_body(&mut state, &RigidBodySettings::default(), &grid, &no_gravity());

        match outcome {
            TickOutcome::Destroyed { at } => assert!(at.y > 195.0),
            other => panic!("expected destruction, got {:?}", other),
        }
    }

    #[test]
    fn zero_speed_contact_does_not_spin() {
        let mut grid = Grid::new(200, 200);
        grid.set_particle(110, 110, EL_STONE, 0xFF808080);
        let mut state = triangle(Vec2::new(100.0, 100.0), 500);
        state.angular_vel = 0.3;

        tick_body(&mut state, &RigidBodySettings::default(), &grid, &no_gravity());

        assert_eq!(state.velocity, Vec2::zero());
        assert_eq!(state.angular_vel, 0.0);
    }
}
