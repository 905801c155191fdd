use super::{timed, WorldCore};

pub(super) fn render(world: &mut WorldCore) {
    let ((), ms) = timed(world.perf_enabled, || {
        let (w, h) = (world.grid.width(), world.grid.height());
        world.frame_buffer.clear();
        world.frame_buffer.extend_from_slice(&world.grid.colors);
        world.bodies.render_bodies(&mut world.frame_buffer, w, h, world.paused);
    });
    if world.perf_enabled {
        world.perf_stats.render_ms = ms;
    }
}
