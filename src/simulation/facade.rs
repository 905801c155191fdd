use wasm_bindgen::prelude::*;

use crate::error::KernelError;
use crate::rigid_body::Handle;

use super::perf_stats::PerfStats;
use super::WorldCore;

fn js_error(e: KernelError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create a new world with given dimensions
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            core: WorldCore::new(width, height),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.particle_count() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        self.core.set_gravity(x, y);
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.core.set_paused(paused);
    }

    #[wasm_bindgen(getter)]
    pub fn paused(&self) -> bool { self.core.is_paused() }

    /// Replace rigid body settings from a JSON object (camelCase keys)
    pub fn load_settings(&mut self, json: String) -> Result<(), JsValue> {
        self.core.load_settings_json(&json).map_err(js_error)
    }

    pub fn settings_json(&self) -> Result<String, JsValue> {
        self.core.settings_json().map_err(js_error)
    }

    /// Add a particle at position
    pub fn add_particle(&mut self, x: u32, y: u32, element: u8) -> bool {
        self.core.add_particle(x, y, element)
    }

    /// Add particles in radius (brush)
    pub fn add_particles_in_radius(&mut self, cx: i32, cy: i32, radius: i32, element: u8) {
        self.core.add_particles_in_radius(cx, cy, radius, element)
    }

    /// Remove particle at position
    pub fn remove_particle(&mut self, x: u32, y: u32) -> bool {
        self.core.remove_particle(x, y)
    }

    /// Clear all particles and bodies
    pub fn clear(&mut self) {
        self.core.clear();
    }

    // === RIGID BODY API ===

    /// Start a body at (x, y). Returns the body id.
    pub fn place_body_center(&mut self, x: u32, y: u32) -> Result<u64, JsValue> {
        self.core
            .place_body_center(x, y)
            .map(|h| h.to_bits())
            .map_err(js_error)
    }

    /// Bind a vertex at (x, y) to the newest nearby body. Returns the vertex id.
    pub fn place_body_vertex(&mut self, x: u32, y: u32) -> Result<u64, JsValue> {
        self.core
            .place_body_vertex(x, y)
            .map(|h| h.to_bits())
            .map_err(js_error)
    }

    /// Remove a body and all of its vertices. Returns the vertex count removed.
    pub fn remove_body(&mut self, id: u64) -> Result<u32, JsValue> {
        self.core
            .remove_body(Handle::from_bits(id))
            .map(|n| n as u32)
            .map_err(js_error)
    }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize {
        self.core.body_count()
    }

    /// Flat [x0, y0, x1, y1, ...] of a body's vertices, in ring order
    pub fn body_vertices(&self, id: u64) -> Result<Vec<f32>, JsValue> {
        let points = self
            .core
            .bodies()
            .vertex_positions(Handle::from_bits(id))
            .map_err(js_error)?;
        Ok(points.iter().flat_map(|p| [p.x, p.y]).collect())
    }

    /// Step the simulation forward
    pub fn step(&mut self) {
        self.core.step();
    }

    /// Compose the frame buffer (grid + bodies)
    pub fn render(&mut self) {
        self.core.render();
    }

    /// Get pointer to the frame buffer (for JS rendering)
    pub fn frame_ptr(&self) -> *const u32 {
        self.core.frame_ptr()
    }

    pub fn frame_len(&self) -> usize {
        self.core.frame_len()
    }
}
