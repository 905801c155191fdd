//! World - static material grid with polygonal rigid bodies
//!
//! WorldCore only orchestrates:
//! - grid edits go through commands/
//! - body assembly and ticking are delegated to RigidBodySystem
//! - render composes the grid colors with filled bodies into one frame buffer

use crate::error::KernelResult;
use crate::grid::Grid;
use crate::rigid_body::{CenterHandle, Vec2, VertexHandle};
use crate::rigid_body_system::{RigidBodySettings, RigidBodySystem};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "rigid/rigid.rs"]
mod rigid;
#[path = "render/render.rs"]
mod render;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::World;
pub use perf_stats::PerfStats;

use perf_timer::{timed, PerfTimer};

/// Default pull, in cells per tick squared (downwards)
pub const DEFAULT_GRAVITY_Y: f32 = 0.1;

/// The simulation world
pub struct WorldCore {
    grid: Grid,
    bodies: RigidBodySystem,

    // Settings
    gravity_x: f32,
    gravity_y: f32,
    paused: bool,

    // State
    particle_count: u32,
    frame: u64,
    frame_buffer: Vec<u32>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WorldCore {
    /// Create a new world with given dimensions
    pub fn new(width: u32, height: u32) -> Self {
        init::create_world_core(width, height, RigidBodySettings::default())
    }

    pub fn with_settings(width: u32, height: u32, settings: RigidBodySettings) -> KernelResult<Self> {
        settings.validate()?;
        Ok(init::create_world_core(width, height, settings))
    }

    pub fn width(&self) -> u32 { self.grid.width() }

    pub fn height(&self) -> u32 { self.grid.height() }

    pub fn particle_count(&self) -> u32 { self.particle_count }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn grid(&self) -> &Grid { &self.grid }

    pub fn bodies(&self) -> &RigidBodySystem { &self.bodies }

    // === Settings ===

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        settings::set_gravity(self, x, y);
    }

    pub fn gravity(&self) -> Vec2 {
        Vec2::new(self.gravity_x, self.gravity_y)
    }

    /// Paused worlds don't step and draw a marker around every body center.
    pub fn set_paused(&mut self, paused: bool) {
        settings::set_paused(self, paused);
    }

    pub fn is_paused(&self) -> bool { self.paused }

    /// Replace body settings from JSON; missing fields keep their defaults.
    pub fn load_settings_json(&mut self, json: &str) -> KernelResult<()> {
        settings::load_settings_json(self, json)
    }

    pub fn settings_json(&self) -> KernelResult<String> {
        self.bodies.settings().to_json()
    }

    // === Grid edits ===

    /// Add a material particle at position
    pub fn add_particle(&mut self, x: u32, y: u32, element: u8) -> bool {
        commands::add_particle(self, x, y, element)
    }

    /// Add particles in radius (brush)
    pub fn add_particles_in_radius(&mut self, cx: i32, cy: i32, radius: i32, element: u8) {
        commands::add_particles_in_radius(self, cx, cy, radius, element)
    }

    /// Remove the material particle at position. Body markers are left alone.
    pub fn remove_particle(&mut self, x: u32, y: u32) -> bool {
        commands::remove_particle(self, x, y)
    }

    /// Clear all particles and bodies
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    // === RIGID BODY API ===

    pub fn place_body_center(&mut self, x: u32, y: u32) -> KernelResult<CenterHandle> {
        rigid::place_body_center(self, x, y)
    }

    pub fn place_body_vertex(&mut self, x: u32, y: u32) -> KernelResult<VertexHandle> {
        rigid::place_body_vertex(self, x, y)
    }

    pub fn remove_body(&mut self, body: CenterHandle) -> KernelResult<usize> {
        rigid::remove_body(self, body)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.body_count()
    }

    // === Frame loop ===

    /// Step the simulation forward (no-op while paused)
    pub fn step(&mut self) {
        step::step(self);
    }

    /// Compose the frame buffer: grid colors, then filled bodies.
    pub fn render(&mut self) {
        render::render(self);
    }

    pub fn frame_buffer(&self) -> &[u32] {
        &self.frame_buffer
    }

    /// Get pointer to the composed frame (for JS rendering)
    pub fn frame_ptr(&self) -> *const u32 {
        self.frame_buffer.as_ptr()
    }

    pub fn frame_len(&self) -> usize {
        self.frame_buffer.len()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
