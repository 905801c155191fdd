use std::f32::consts::{PI, TAU};

use particula_polybody::elements::EL_STONE;
use particula_polybody::grid::Grid;
use particula_polybody::rigid_body::{
    Anchor, CenterHandle, Polygon, UniformGravity, Vec2, DEFAULT_BODY_COLOR,
};
use particula_polybody::rigid_body_system::{
    tick_body, BodyState, RigidBodySettings, RigidBodySystem, TickOutcome,
};
use particula_polybody::{KernelError, WorldCore};

/// Triangle around (cx, cy) with corners placed at 0°, 120°, 240° (radius ~20)
fn place_triangle(world: &mut WorldCore, cx: u32, cy: u32) -> CenterHandle {
    let c = world.place_body_center(cx, cy).unwrap();
    world.place_body_vertex(cx + 20, cy).unwrap();
    world.place_body_vertex(cx - 10, cy + 17).unwrap();
    world.place_body_vertex(cx - 10, cy - 17).unwrap();
    c
}

fn center_of(world: &WorldCore, c: CenterHandle) -> Vec2 {
    world.bodies().center(c).unwrap().pos
}

#[test]
fn triangle_falls_under_gravity() {
    let mut world = WorldCore::new(200, 200);
    world.set_gravity(0.0, 0.1);
    let c = place_triangle(&mut world, 100, 100);
    let start = center_of(&world, c);

    for _ in 0..10 {
        world.step();
    }

    let center = world.bodies().center(c).unwrap();
    assert!((center.pos.y - start.y - 5.5).abs() < 1e-3);
    assert_eq!(center.pos.x, start.x);
    assert_eq!(center.angle, 0.0);
}

#[test]
fn foreign_cell_below_edge_bounces_body() {
    let mut grid = Grid::new(200, 200);
    let mut bodies = RigidBodySystem::new();
    let c = bodies.place_center(&mut grid, 100, 100).unwrap();
    bodies.place_vertex(&mut grid, 120, 100).unwrap();
    bodies.place_vertex(&mut grid, 90, 83).unwrap();
    bodies.place_vertex(&mut grid, 90, 117).unwrap();
    grid.set_particle(110, 110, EL_STONE, 0xFF808080);

    let stone = Vec2::new(110.0, 110.0);
    assert!(!bodies.contains(c, stone).unwrap());
    assert_eq!(bodies.closest_edge(c, stone).unwrap(), Some(2));
    let mtv = bodies.minimum_translation(c, stone).unwrap();
    // Inward normal of the lower edge points up and to the left
    assert!(mtv.offset.x < 0.0 && mtv.offset.y < 0.0);

    let report = bodies.update(&mut grid, &UniformGravity(Vec2::new(0.0, 0.1)));
    assert_eq!(report.contacts, 1);

    let center = bodies.center(c).unwrap();
    let expected = mtv.offset.normalize() * (0.1 * 0.99);
    assert!((center.velocity - expected).length() < 1e-5);
    assert!(center.angular_vel > 0.0);
    assert_eq!(center.angular_vel > 0.0, mtv.torque > 0.0);
}

#[test]
fn triangle_in_either_placement_order_spins_on_contact() {
    let mut grid = Grid::new(200, 200);
    let mut bodies = RigidBodySystem::new();
    let c = bodies.place_center(&mut grid, 100, 100).unwrap();
    let head = bodies.place_vertex(&mut grid, 120, 100).unwrap();
    bodies.place_vertex(&mut grid, 90, 117).unwrap();
    bodies.place_vertex(&mut grid, 90, 83).unwrap();
    grid.set_particle(110, 110, EL_STONE, 0xFF808080);

    assert!(bodies.vertex(head).unwrap().rotational_inertia > 300);
    let center = bodies.center(c).unwrap().pos;
    assert!(bodies.contains(c, center).unwrap());

    let stone = Vec2::new(110.0, 110.0);
    assert!(!bodies.contains(c, stone).unwrap());
    let mtv = bodies.minimum_translation(c, stone).unwrap();
    assert!(mtv.offset.x < 0.0 && mtv.offset.y < 0.0);
    assert!(mtv.torque != 0.0);

    let report = bodies.update(&mut grid, &UniformGravity(Vec2::new(0.0, 0.1)));
    assert_eq!(report.contacts, 1);

    let spin = bodies.center(c).unwrap().angular_vel;
    assert!(spin != 0.0);
    assert_eq!(spin > 0.0, mtv.torque > 0.0);
}

#[test]
fn triangle_in_placement_order_renders_filled() {
    let mut world = WorldCore::new(200, 200);
    let c = place_triangle(&mut world, 100, 100);
    let pos = center_of(&world, c);

    world.render();

    let fb = world.frame_buffer();
    let at = |x: usize, y: usize| fb[y * 200 + x];
    assert_eq!(at(105, 100), DEFAULT_BODY_COLOR);
    assert_eq!(at(95, 110), DEFAULT_BODY_COLOR);
    assert_eq!(at(pos.x as usize, pos.y as usize - 5), DEFAULT_BODY_COLOR);
    assert_ne!(at(130, 100), DEFAULT_BODY_COLOR);
    assert_ne!(at(10, 10), DEFAULT_BODY_COLOR);
}

#[test]
fn vertex_inside_margin_destroys_body() {
    let mut world = WorldCore::new(200, 200);
    world.enable_perf_metrics(true);
    world.set_gravity(0.0, 3.0);
    place_triangle(&mut world, 100, 175);

    world.step();

    assert_eq!(world.get_perf_stats().destroyed_bodies(), 1);
    assert_eq!(world.body_count(), 0);
    assert_eq!(world.grid().occupied_count(), 0);
}

#[test]
fn buried_body_reports_unresolved_collision() {
    let settings = RigidBodySettings { max_resolve_steps: 4, ..Default::default() };
    let mut world = WorldCore::with_settings(200, 200, settings).unwrap();
    world.enable_perf_metrics(true);
    let c = place_triangle(&mut world, 100, 100);
    for x in 60..140 {
        for y in 60..140 {
            world.add_particle(x, y, EL_STONE);
        }
    }

    world.step();

    let stats = world.get_perf_stats();
    assert_eq!(stats.unresolved_collisions(), 1);
    assert_eq!(stats.resolve_steps(), 4);
    assert!(world.bodies().center(c).is_some());
}

#[test]
fn constant_spin_over_many_ticks() {
    let grid = Grid::new(200, 200);
    let settings = RigidBodySettings::default();
    let pos = Vec2::new(100.0, 100.0);
    let anchors: Vec<Anchor> = [0.0, 4.0 * PI / 3.0, 2.0 * PI / 3.0]
        .iter()
        .map(|&angle| Anchor { distance: 20, angle })
        .collect();
    let vertices = anchors.iter().map(|a| pos + a.offset(0.0)).collect();
    let mut state = BodyState {
        pos,
        angular_vel: 0.25,
        inertia: 400,
        anchors,
        vertices,
        ..Default::default()
    };

    for _ in 0..40 {
        let outcome = tick_body(&mut state, &settings, &grid, &UniformGravity(Vec2::zero()));
        assert!(matches!(outcome, TickOutcome::Moved { .. }));
    }

    assert!((state.angle - 10.0f32.rem_euclid(TAU)).abs() < 1e-3);
    assert_eq!(state.pos, pos);
}

#[test]
fn pentagon_ring_keeps_placement_order() {
    let mut grid = Grid::new(200, 200);
    let mut bodies = RigidBodySystem::new();
    let c = bodies.place_center(&mut grid, 100, 100).unwrap();
    let mut placed = Vec::new();
    for k in 0..5 {
        let a = -(k as f32) * TAU / 5.0;
        let x = (100.0 + 30.0 * a.cos()).round() as u32;
        let y = (100.0 + 30.0 * a.sin()).round() as u32;
        placed.push(bodies.place_vertex(&mut grid, x, y).unwrap());
    }

    let center = bodies.center(c).unwrap();
    let ring: Vec<_> = center.ring.traverse().collect();
    assert_eq!(ring, placed);
    assert_eq!(center.ring.tail(), placed.last().copied());

    let positions = bodies.vertex_positions(c).unwrap();
    let polygon = Polygon::new(center.pos, &positions);
    assert!(polygon.contains(center.pos));
    assert!(!polygon.contains(Vec2::new(10.0, 10.0)));
}

#[test]
fn removed_body_handle_goes_stale() {
    let mut world = WorldCore::new(200, 200);
    let old = place_triangle(&mut world, 100, 100);
    world.remove_body(old).unwrap();

    let new = world.place_body_center(100, 100).unwrap();

    assert_ne!(old, new);
    assert!(matches!(world.remove_body(old), Err(KernelError::StaleHandle)));
    assert_eq!(world.body_count(), 1);
}

#[test]
fn vertex_far_from_any_center_is_rejected() {
    let mut world = WorldCore::new(300, 300);
    world.place_body_center(20, 20).unwrap();

    let err = world.place_body_vertex(200, 200).unwrap_err();

    assert!(matches!(err, KernelError::NoCenterInRange { .. }));
    assert_eq!(err.to_string(), "no body center within 50 cells of (200, 200)");
}
