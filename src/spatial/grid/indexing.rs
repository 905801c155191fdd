use super::*;

impl Grid {
    // === Dimensions ===
    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + x as usize
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (u32, u32) {
        let x = (idx % self.width as usize) as u32;
        let y = (idx / self.width as usize) as u32;
        (x, y)
    }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    /// Cell containing a world position (nearest cell corner), if on the grid.
    #[inline]
    pub fn cell_at(&self, x: f32, y: f32) -> Option<(u32, u32)> {
        let cx = x.round();
        let cy = y.round();
        if !cx.is_finite() || !cy.is_finite() {
            return None;
        }
        let (cx, cy) = (cx as i32, cy as i32);
        if self.in_bounds(cx, cy) {
            Some((cx as u32, cy as u32))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_and_coords_agree() {
        let grid = Grid::new(7, 5);
        let idx = grid.index(3, 4);
        assert_eq!(idx, 31);
        assert_eq!(grid.coords(idx), (3, 4));
    }

    #[test]
    fn cell_at_rounds_and_rejects_off_grid() {
        let grid = Grid::new(10, 10);
        assert_eq!(grid.cell_at(2.4, 7.6), Some((2, 8)));
        assert_eq!(grid.cell_at(-0.6, 3.0), None);
        assert_eq!(grid.cell_at(9.6, 3.0), None);
        assert_eq!(grid.cell_at(f32::NAN, 3.0), None);
    }
}
