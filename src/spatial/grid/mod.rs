//! Grid - Structure of Arrays (SoA) cell storage shared with rigid bodies
//!
//! Instead of: Vec<Option<Particle>>  // many allocations, poor cache
//! We have:    types[], colors[], owners[]  // linear memory
//!
//! Static materials and body markers live side by side. Marker cells carry the
//! owning body entity so the host can tell whose center/vertex it is.

use crate::elements::{ElementId, EL_EMPTY};
use crate::rigid_body::EntityRef;

// Background color in ABGR format (little-endian: 0xAABBGGRR -> bytes [RR,GG,BB,AA])
// RGB(10,10,10) with alpha=255 -> 0xFF0A0A0A in ABGR
pub(crate) const BG_COLOR: u32 = 0xFF0A0A0A;

mod indexing;
mod accessors;
mod occupancy;

/// SoA Grid - all cell data in separate arrays
pub struct Grid {
    width: u32,
    height: u32,
    size: usize,

    pub types: Vec<ElementId>,          // Element type (0 = empty)
    pub colors: Vec<u32>,               // ABGR packed color
    pub owners: Vec<Option<EntityRef>>, // Body entity for marker cells
}

impl Grid {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            size,
            types: vec![EL_EMPTY; size],
            colors: vec![BG_COLOR; size],
            owners: vec![None; size],
        }
    }
}
