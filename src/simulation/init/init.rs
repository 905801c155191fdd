use crate::grid::Grid;
use crate::rigid_body_system::{RigidBodySettings, RigidBodySystem};

use super::perf_stats::PerfStats;
use super::{WorldCore, DEFAULT_GRAVITY_Y};

pub(super) fn create_world_core(width: u32, height: u32, settings: RigidBodySettings) -> WorldCore {
    let grid = Grid::new(width, height);
    let frame_buffer = grid.colors.clone();
    WorldCore {
        grid,
        bodies: RigidBodySystem::with_settings(settings),
        gravity_x: 0.0,
        gravity_y: DEFAULT_GRAVITY_Y,
        paused: false,
        particle_count: 0,
        frame: 0,
        frame_buffer,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
