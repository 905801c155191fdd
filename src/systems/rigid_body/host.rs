//! Capabilities the kernel borrows from its host
//!
//! The kernel never reaches into a global particle array: it is handed an
//! occupancy view of the grid and a gravity sampler for the duration of a tick.

use crate::elements::{is_foreign_material, ElementId, EL_EMPTY};

use super::body::EntityRef;
use super::vec2::Vec2;

/// What sits in one grid cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Occupant {
    pub kind: ElementId,
    pub owner: Option<EntityRef>,
}

impl Occupant {
    pub const EMPTY: Occupant = Occupant { kind: EL_EMPTY, owner: None };

    /// Material bodies collide with. Markers of any body never count.
    #[inline]
    pub fn is_foreign(&self) -> bool {
        is_foreign_material(self.kind)
    }
}

/// Read access to per-cell occupancy
pub trait CellOccupancy {
    /// (width, height) in cells
    fn dimensions(&self) -> (u32, u32);

    /// Occupant at (x, y); out-of-range coordinates read as empty.
    fn occupant(&self, x: i32, y: i32) -> Occupant;
}

/// Gravity sampler
pub trait GravityField {
    fn sample(&self, pos: Vec2) -> Vec2;
}

/// Same pull everywhere
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UniformGravity(pub Vec2);

impl GravityField for UniformGravity {
    #[inline]
    fn sample(&self, _pos: Vec2) -> Vec2 {
        self.0
    }
}
