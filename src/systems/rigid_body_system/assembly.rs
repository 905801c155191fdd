//! Building bodies out of placed center and vertex cells

use tracing::debug;

use crate::elements::{EL_BODY_CENTER, EL_BODY_VERTEX};
use crate::error::{KernelError, KernelResult};
use crate::grid::Grid;
use crate::rigid_body::{
    estimate_inertia, Anchor, BodyCenter, BodyVertex, CenterHandle, EntityRef, Polygon, Vec2,
    VertexHandle, MIN_POLYGON_VERTICES,
};

use super::rasterize::marker_color;
use super::system::RigidBodySystem;

fn check_cell(grid: &Grid, x: u32, y: u32) -> KernelResult<()> {
    if x >= grid.width() || y >= grid.height() {
        return Err(KernelError::OutOfBounds {
            x: x as i64,
            y: y as i64,
            width: grid.width(),
            height: grid.height(),
        });
    }
    if !grid.is_empty(x as i32, y as i32) {
        return Err(KernelError::CellOccupied { x, y });
    }
    Ok(())
}

impl RigidBodySystem {
    /// Start a new body with its center at cell (x, y).
    pub fn place_center(&mut self, grid: &mut Grid, x: u32, y: u32) -> KernelResult<CenterHandle> {
        check_cell(grid, x, y)?;
        let seq = self.next_seq;
        self.next_seq += 1;
        let color = self.settings.default_body_color;
        let pos = Vec2::new(x as f32, y as f32);
        let handle = self
            .centers
            .insert_with(|id| BodyCenter::new(id, pos, seq, color));

        grid.set_marker(x, y, EL_BODY_CENTER, marker_color(EL_BODY_CENTER), EntityRef::Center(handle));
        if let Some(center) = self.centers.get_mut(handle) {
            center.cell = Some((x, y));
        }
        debug!(body = ?handle, x, y, seq, "placed body center");
        Ok(handle)
    }

    /// Add a vertex at cell (x, y) to the newest center within `bind_radius`.
    pub fn place_vertex(&mut self, grid: &mut Grid, x: u32, y: u32) -> KernelResult<VertexHandle> {
        check_cell(grid, x, y)?;
        let Some(owner) = self.newest_center_near(x, y) else {
            return Err(KernelError::NoCenterInRange { x, y, radius: self.settings.bind_radius });
        };

        let mut vertex = BodyVertex::new(Vec2::new(x as f32, y as f32), Some(owner));
        vertex.cell = Some((x, y));
        let handle = self.vertices.insert(vertex);
        grid.set_marker(x, y, EL_BODY_VERTEX, marker_color(EL_BODY_VERTEX), EntityRef::Vertex(handle));

        let center = self.centers.get_mut(owner).ok_or(KernelError::StaleHandle)?;
        center.ring.append(handle);
        debug!(body = ?owner, vertex = ?handle, vertices = center.ring.len(), "bound vertex");

        self.reanchor(owner)?;
        self.commit_markers(owner, grid);
        Ok(handle)
    }

    /// Most recently created center within the square of half-size
    /// `bind_radius` around (x, y).
    pub fn newest_center_near(&self, x: u32, y: u32) -> Option<CenterHandle> {
        let r = self.settings.bind_radius as i64;
        let (x, y) = (x as i64, y as i64);
        self.centers
            .iter()
            .filter(|(_, c)| {
                let cx = c.pos.x.round() as i64;
                let cy = c.pos.y.round() as i64;
                (cx - x).abs() <= r && (cy - y).abs() <= r
            })
            .max_by_key(|(_, c)| c.seq)
            .map(|(h, _)| h)
    }

    /// Recompute centroid, anchors and inertia after the ring changed.
    ///
    /// The centroid only moves once the ring is a polygon. Orientation is
    /// reset to 0 so the fresh anchor angles are absolute.
    pub(super) fn reanchor(&mut self, handle: CenterHandle) -> KernelResult<()> {
        let center = self.centers.get_mut(handle).ok_or(KernelError::StaleHandle)?;
        let positions: Vec<Vec2> = center
            .ring
            .traverse()
            .filter_map(|vh| self.vertices.get(vh).map(|v| v.pos))
            .collect();

        if positions.len() >= MIN_POLYGON_VERTICES {
            let mut sum = Vec2::zero();
            for &p in &positions {
                sum += p;
            }
            let n = positions.len() as f32;
            center.pos = Vec2::new(sum.x / n, sum.y / n);
        }
        center.angle = 0.0;

        for vh in center.ring.traverse() {
            if let Some(v) = self.vertices.get_mut(vh) {
                v.anchor = Anchor::measure(center.pos, v.pos);
                v.rotational_inertia = 0;
            }
        }

        let inertia = estimate_inertia(&Polygon::new(center.pos, &positions));
        if let Some(head) = center.ring.head().and_then(|vh| self.vertices.get_mut(vh)) {
            head.rotational_inertia = inertia;
        }
        debug!(body = ?handle, x = center.pos.x, y = center.pos.y, inertia, "re-anchored body");
        Ok(())
    }
}
