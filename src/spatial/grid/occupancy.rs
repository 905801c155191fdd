use crate::rigid_body::{CellOccupancy, Occupant};

use super::*;

impl CellOccupancy for Grid {
    #[inline]
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    fn occupant(&self, x: i32, y: i32) -> Occupant {
        if !self.in_bounds(x, y) {
            return Occupant::EMPTY;
        }
        let idx = self.index(x as u32, y as u32);
        Occupant { kind: self.types[idx], owner: self.owners[idx] }
    }
}
