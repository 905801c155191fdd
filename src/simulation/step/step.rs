use std::mem::size_of;

use crate::elements::ElementId;
use crate::rigid_body::{EntityRef, UniformGravity, Vec2};

use super::{timed, PerfTimer, WorldCore};

pub(super) fn step(world: &mut WorldCore) {
    if world.paused {
        return;
    }
    let perf_on = world.perf_enabled;
    let step_timer = perf_on.then(PerfTimer::start);
    if perf_on {
        world.perf_stats.reset();
    }

    let gravity = UniformGravity(Vec2::new(world.gravity_x, world.gravity_y));
    let (report, rigid_ms) = timed(perf_on, || world.bodies.update(&mut world.grid, &gravity));

    if let Some(step_timer) = step_timer {
        let stats = &mut world.perf_stats;
        stats.record_step(&report);
        stats.rigid_ms = rigid_ms;
        stats.body_count = world.bodies.body_count() as u32;
        stats.vertex_count = world.bodies.vertex_count() as u32;
        stats.particle_count = world.particle_count;
        stats.grid_size = world.grid.size() as u32;
        // types + colors + owners + frame buffer
        let per_cell = size_of::<ElementId>() + 2 * size_of::<u32>() + size_of::<Option<EntityRef>>();
        stats.memory_bytes = (world.grid.size() as u32).saturating_mul(per_cell as u32);
        // covers the body update plus the bookkeeping above
        stats.step_ms = step_timer.elapsed_ms();
    }

    world.frame += 1;
}
