use tracing::info;

use crate::error::KernelResult;
use crate::rigid_body_system::RigidBodySettings;

use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats = PerfStats::default();
    }
}

pub(super) fn get_perf_stats(world: &WorldCore) -> PerfStats {
    world.perf_stats.clone()
}

pub(super) fn set_gravity(world: &mut WorldCore, x: f32, y: f32) {
    world.gravity_x = x;
    world.gravity_y = y;
}

pub(super) fn set_paused(world: &mut WorldCore, paused: bool) {
    world.paused = paused;
}

pub(super) fn load_settings_json(world: &mut WorldCore, json: &str) -> KernelResult<()> {
    let settings = RigidBodySettings::from_json(json)?;
    info!(?settings, "loaded rigid body settings");
    world.bodies.set_settings(settings)
}
