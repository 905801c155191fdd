use wasm_bindgen::prelude::*;

use crate::rigid_body_system::StepReport;

/// Snapshot of the last step/render (zeros while perf metrics are off)
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) rigid_ms: f64,
    pub(super) render_ms: f64,

    pub(super) bodies_ticked: u32,
    pub(super) inert_bodies: u32,
    pub(super) contacts: u32,
    pub(super) resolve_steps: u32,
    pub(super) destroyed_bodies: u32,
    pub(super) unresolved_collisions: u32,

    pub(super) body_count: u32,
    pub(super) vertex_count: u32,
    pub(super) particle_count: u32,
    pub(super) grid_size: u32,
    pub(super) memory_bytes: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        // render_ms belongs to render(), not step()
        let render_ms = self.render_ms;
        *self = PerfStats::default();
        self.render_ms = render_ms;
    }

    pub(crate) fn record_step(&mut self, report: &StepReport) {
        self.bodies_ticked = report.ticked;
        self.inert_bodies = report.inert;
        self.contacts = report.contacts;
        self.resolve_steps = report.resolve_steps;
        self.destroyed_bodies = report.destroyed;
        self.unresolved_collisions = report.unresolved;
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn rigid_ms(&self) -> f64 { self.rigid_ms }
    #[wasm_bindgen(getter)]
    pub fn render_ms(&self) -> f64 { self.render_ms }
    #[wasm_bindgen(getter)]
    pub fn bodies_ticked(&self) -> u32 { self.bodies_ticked }
    #[wasm_bindgen(getter)]
    pub fn inert_bodies(&self) -> u32 { self.inert_bodies }
    #[wasm_bindgen(getter)]
    pub fn contacts(&self) -> u32 { self.contacts }
    #[wasm_bindgen(getter)]
    pub fn resolve_steps(&self) -> u32 { self.resolve_steps }
    #[wasm_bindgen(getter)]
    pub fn destroyed_bodies(&self) -> u32 { self.destroyed_bodies }
    #[wasm_bindgen(getter)]
    pub fn unresolved_collisions(&self) -> u32 { self.unresolved_collisions }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 { self.vertex_count }
    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.particle_count }
    #[wasm_bindgen(getter)]
    pub fn grid_size(&self) -> u32 { self.grid_size }
    #[wasm_bindgen(getter)]
    pub fn memory_bytes(&self) -> u32 { self.memory_bytes }
}
