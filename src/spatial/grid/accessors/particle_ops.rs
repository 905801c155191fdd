use super::super::*;

impl Grid {
    /// Place a material particle (no owner).
    pub fn set_particle(&mut self, x: u32, y: u32, element: ElementId, color: u32) {
        let idx = self.index(x, y);
        self.types[idx] = element;
        self.colors[idx] = color;
        self.owners[idx] = None;
    }

    /// Place a body center/vertex marker.
    pub fn set_marker(&mut self, x: u32, y: u32, element: ElementId, color: u32, owner: EntityRef) {
        let idx = self.index(x, y);
        self.types[idx] = element;
        self.colors[idx] = color;
        self.owners[idx] = Some(owner);
    }

    // === Clear single cell ===
    pub fn clear_cell(&mut self, x: u32, y: u32) {
        let idx = self.index(x, y);
        self.types[idx] = EL_EMPTY;
        self.colors[idx] = BG_COLOR;
        self.owners[idx] = None;
    }

    /// Clear (x, y) only if it still holds `owner`'s marker.
    pub fn clear_marker(&mut self, x: u32, y: u32, owner: EntityRef) -> bool {
        if !self.in_bounds(x as i32, y as i32) {
            return false;
        }
        let idx = self.index(x, y);
        if self.owners[idx] != Some(owner) {
            return false;
        }
        self.clear_cell(x, y);
        true
    }

    // === Clear entire grid ===
    pub fn clear(&mut self) {
        self.types.fill(EL_EMPTY);
        self.colors.fill(BG_COLOR);
        self.owners.fill(None);
    }

    /// Cells holding anything but empty
    pub fn occupied_count(&self) -> usize {
        self.types.iter().filter(|&&t| t != EL_EMPTY).count()
    }
}
