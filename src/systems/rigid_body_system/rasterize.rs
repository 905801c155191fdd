//! Marker cells on the grid, and body drawing into a frame buffer

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::elements::{props, ElementId, EL_BODY_CENTER, EL_BODY_VERTEX};
use crate::grid::Grid;
use crate::rigid_body::{BodyCenter, CellBounds, CenterHandle, EntityRef, Polygon, Vec2};

use super::system::RigidBodySystem;

/// Radius of the outline drawn around every center while paused
pub const PAUSED_MARKER_RADIUS: i32 = 50;
/// ABGR red
pub const PAUSED_MARKER_COLOR: u32 = 0xFF0000FF;

pub(super) fn marker_color(element: ElementId) -> u32 {
    props(element).map_or(0xFFFFFFFF, |p| p.color)
}

/// Move a marker from `old` to the cell under `pos`. The marker is dropped
/// when that cell is off-grid or taken by anything else.
fn move_marker(
    grid: &mut Grid,
    old: Option<(u32, u32)>,
    pos: Vec2,
    element: ElementId,
    owner: EntityRef,
) -> Option<(u32, u32)> {
    let target = grid.cell_at(pos.x, pos.y);
    if let Some((x, y)) = old {
        if old == target && grid.get_owner(x as i32, y as i32) == Some(owner) {
            return old;
        }
        grid.clear_marker(x, y, owner);
    }
    let (x, y) = target?;
    if !grid.is_empty(x as i32, y as i32) {
        return None;
    }
    grid.set_marker(x, y, element, marker_color(element), owner);
    Some((x, y))
}

struct BodyShape {
    bounds: CellBounds,
    center: Vec2,
    vertices: Vec<Vec2>,
    color: u32,
}

impl BodyShape {
    fn fill_row(&self, y: i32, row: &mut [u32]) {
        if y < self.bounds.min_y || y >= self.bounds.max_y {
            return;
        }
        let polygon = Polygon::new(self.center, &self.vertices);
        for x in self.bounds.min_x..self.bounds.max_x {
            if polygon.contains(Vec2::new(x as f32, y as f32)) {
                row[x as usize] = self.color;
            }
        }
    }
}

/// Midpoint circle outline, clipped to the frame.
fn draw_circle(frame: &mut [u32], width: u32, height: u32, cx: i32, cy: i32, r: i32, color: u32) {
    let mut plot = |x: i32, y: i32| {
        if x >= 0 && y >= 0 && (x as u32) < width && (y as u32) < height {
            frame[(y as usize) * (width as usize) + x as usize] = color;
        }
    };
    let (mut x, mut y) = (r, 0);
    let mut err = 1 - r;
    while x >= y {
        plot(cx + x, cy + y);
        plot(cx + y, cy + x);
        plot(cx - y, cy + x);
        plot(cx - x, cy + y);
        plot(cx - x, cy - y);
        plot(cx - y, cy - x);
        plot(cx + y, cy - x);
        plot(cx + x, cy - y);
        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
}

impl RigidBodySystem {
    /// Bring the center and vertex marker cells of a body in line with its positions.
    pub(super) fn commit_markers(&mut self, handle: CenterHandle, grid: &mut Grid) {
        let Some(center) = self.centers.get_mut(handle) else {
            return;
        };
        center.cell = move_marker(grid, center.cell, center.pos, EL_BODY_CENTER, EntityRef::Center(handle));
        for vh in center.ring.traverse() {
            if let Some(v) = self.vertices.get_mut(vh) {
                v.cell = move_marker(grid, v.cell, v.pos, EL_BODY_VERTEX, EntityRef::Vertex(vh));
            }
        }
    }

    pub(super) fn clear_markers(&self, center: &BodyCenter, grid: &mut Grid) {
        if let Some((x, y)) = center.cell {
            grid.clear_marker(x, y, EntityRef::Center(center.id));
        }
        for vh in center.ring.traverse() {
            if let Some((x, y)) = self.vertices.get(vh).and_then(|v| v.cell) {
                grid.clear_marker(x, y, EntityRef::Vertex(vh));
            }
        }
    }

    /// Fill every polygonal body into `frame` (row-major, `width` x `height`).
    /// While paused every center also gets a red circle outline.
    pub fn render_bodies(&self, frame: &mut [u32], width: u32, height: u32, paused: bool) {
        let w = width as usize;
        if w == 0 || frame.len() < w * height as usize {
            return;
        }

        let shapes: Vec<BodyShape> = self
            .centers
            .iter()
            .filter(|(_, c)| !c.is_inert())
            .filter_map(|(h, c)| {
                let vertices = self.vertex_positions(h).ok()?;
                let bounds = CellBounds::around(&vertices)?.clamp(width, height);
                Some(BodyShape { bounds, center: c.pos, vertices, color: c.color })
            })
            .collect();

        let rows = &mut frame[..w * height as usize];

        #[cfg(feature = "parallel")]
        rows.par_chunks_mut(w).enumerate().for_each(|(y, row)| {
            for shape in &shapes {
                shape.fill_row(y as i32, row);
            }
        });

        #[cfg(not(feature = "parallel"))]
        rows.chunks_mut(w).enumerate().for_each(|(y, row)| {
            for shape in &shapes {
                shape.fill_row(y as i32, row);
            }
        });

        if paused {
            for (_, c) in self.centers.iter() {
                draw_circle(
                    frame,
                    width,
                    height,
                    c.pos.x.round() as i32,
                    c.pos.y.round() as i32,
                    PAUSED_MARKER_RADIUS,
                    PAUSED_MARKER_COLOR,
                );
            }
        }
    }
}
