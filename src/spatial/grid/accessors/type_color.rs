use super::super::*;

impl Grid {
    #[inline]
    pub fn is_empty(&self, x: i32, y: i32) -> bool {
        if !self.in_bounds(x, y) { return false; }
        self.types[self.index(x as u32, y as u32)] == EL_EMPTY
    }

    // === Type access ===
    #[inline]
    pub fn get_type(&self, x: i32, y: i32) -> ElementId {
        if !self.in_bounds(x, y) { return EL_EMPTY; }
        self.types[self.index(x as u32, y as u32)]
    }

    // === Owner access ===
    #[inline]
    pub fn get_owner(&self, x: i32, y: i32) -> Option<EntityRef> {
        if !self.in_bounds(x, y) { return None; }
        self.owners[self.index(x as u32, y as u32)]
    }

    // === Color access ===
    #[inline]
    pub fn get_color(&self, x: u32, y: u32) -> u32 {
        self.colors[self.index(x, y)]
    }
}
