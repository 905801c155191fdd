//! Particula Polybody - polygonal rigid bodies in a cell grid, in WASM
//!
//! Architecture:
//! - domain/      - Element table (materials + body markers)
//! - spatial/     - SoA cell grid
//! - systems/     - Rigid body kernel and its per-tick system
//! - simulation/  - WorldCore orchestration + wasm facade

pub mod domain;
pub mod error;
pub mod spatial;
pub mod systems;
pub mod simulation;

pub mod world {
    pub use crate::simulation::*;
}

// Compatibility re-exports (keeps short internal/external paths working)
pub use domain::elements;
pub use spatial::grid;
pub use systems::rigid_body;
pub use systems::rigid_body_system;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🦀 Particula Polybody initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use error::{KernelError, KernelResult};
pub use simulation::{PerfStats, World, WorldCore};

// Export element constants for JS
#[wasm_bindgen]
pub fn el_empty() -> u8 { domain::elements::EL_EMPTY }
#[wasm_bindgen]
pub fn el_stone() -> u8 { domain::elements::EL_STONE }
#[wasm_bindgen]
pub fn el_sand() -> u8 { domain::elements::EL_SAND }
#[wasm_bindgen]
pub fn el_wood() -> u8 { domain::elements::EL_WOOD }
#[wasm_bindgen]
pub fn el_metal() -> u8 { domain::elements::EL_METAL }
#[wasm_bindgen]
pub fn el_water() -> u8 { domain::elements::EL_WATER }
#[wasm_bindgen]
pub fn el_body_center() -> u8 { domain::elements::EL_BODY_CENTER }
#[wasm_bindgen]
pub fn el_body_vertex() -> u8 { domain::elements::EL_BODY_VERTEX }
